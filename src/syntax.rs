//! Tree-sitter plumbing shared by the structural extraction passes

use crate::error::{ExtractError, Result};

/// Parse a source fragment with the TypeScript grammar.
///
/// Every call builds its own parser, so no state is shared between
/// invocations and concurrent extraction needs no coordination.
pub(crate) fn parse_fragment(source: &str) -> Result<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| ExtractError::Grammar(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::Grammar("parser produced no tree".to_string()))
}

/// Get the text content of a node
pub(crate) fn node_text<'a>(node: &tree_sitter::Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Find the first child node of a given kind
pub(crate) fn find_child_by_kind<'a>(
    node: &'a tree_sitter::Node<'a>,
    kind: &str,
) -> Option<tree_sitter::Node<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Check whether any direct child has the given kind.
///
/// Keyword tokens (`type`, `export`, ...) surface as anonymous children,
/// so this also answers "does this node carry that keyword".
pub(crate) fn has_child_of_kind(node: &tree_sitter::Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}

/// Text of a `type_annotation` node with the leading `:` removed
pub(crate) fn annotation_text(node: &tree_sitter::Node, source: &str) -> String {
    node_text(node, source)
        .trim_start_matches(':')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment_builds_tree() {
        let tree = parse_fragment("export function a(): void {}\n").unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_node_text_whole_source() {
        let source = "type A = B;\n";
        let tree = parse_fragment(source).unwrap();
        assert_eq!(node_text(&tree.root_node(), source), source);
    }

    #[test]
    fn test_find_child_by_kind() {
        let source = "interface A {}\n";
        let tree = parse_fragment(source).unwrap();
        let root = tree.root_node();
        let iface = find_child_by_kind(&root, "interface_declaration").unwrap();
        let name = find_child_by_kind(&iface, "type_identifier").unwrap();
        assert_eq!(node_text(&name, source), "A");
        assert!(find_child_by_kind(&root, "class_declaration").is_none());
    }

    #[test]
    fn test_has_child_of_kind_sees_keywords() {
        let source = "import type { A } from 'm';\n";
        let tree = parse_fragment(source).unwrap();
        let root = tree.root_node();
        let import = find_child_by_kind(&root, "import_statement").unwrap();
        assert!(has_child_of_kind(&import, "type"));
    }

    #[test]
    fn test_annotation_text_strips_colon() {
        let source = "export function a(): Wire {}\n";
        let tree = parse_fragment(source).unwrap();
        let root = tree.root_node();
        let export = find_child_by_kind(&root, "export_statement").unwrap();
        let func = find_child_by_kind(&export, "function_declaration").unwrap();
        let annotation = func.child_by_field_name("return_type").unwrap();
        assert_eq!(annotation_text(&annotation, source), "Wire");
    }
}
