//! Function signature analysis
//!
//! Re-parses reconstructed function-header fragments (real header plus a
//! synthetic empty body) and recovers what the textual scan cannot: the
//! name, the ordered parameter list with literal type and default texts,
//! and the return type. The whole fragment is also handed to the
//! collector so each function carries its custom-type set.

use std::collections::BTreeSet;

use crate::collector::collect_from_node;
use crate::error::{ExtractError, Result};
use crate::ir::{FunctionSpec, ParamSpec};
use crate::normalize::dedent;
use crate::syntax::{annotation_text, node_text, parse_fragment};

/// Extract every top-level function declaration from `code`, in source
/// order.
///
/// `skip_dedent` is set when the caller already normalized the text; the
/// orchestrator's compound fragment is assembled from normalized matches
/// and must not be dedented a second time.
///
/// Fails when the fragment does not parse cleanly. The fragments handed
/// in are reconstructed, so a syntax error here means the reconstruction
/// is corrupt; there is no partial-result salvage.
pub fn function_specs(code: &str, skip_dedent: bool) -> Result<Vec<FunctionSpec>> {
    let source = if skip_dedent {
        code.to_string()
    } else {
        dedent(code)
    };
    let tree = parse_fragment(&source)?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(ExtractError::MalformedFragment(
            "syntax error in reconstructed function fragment".to_string(),
        ));
    }

    let mut specs = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        let func = match child.kind() {
            "function_declaration" => Some(child),
            "export_statement" => child
                .child_by_field_name("declaration")
                .filter(|decl| decl.kind() == "function_declaration"),
            _ => None,
        };
        if let Some(func) = func {
            specs.push(analyze_function(&func, &source));
        }
    }
    Ok(specs)
}

fn analyze_function(node: &tree_sitter::Node, source: &str) -> FunctionSpec {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();
    let return_type = node
        .child_by_field_name("return_type")
        .map(|n| annotation_text(&n, source))
        .unwrap_or_else(|| "void".to_string());

    let mut custom_types = BTreeSet::new();
    collect_from_node(node, source, &mut custom_types);

    FunctionSpec {
        name,
        params: extract_params(node, source),
        return_type,
        custom_types,
    }
}

fn extract_params(node: &tree_sitter::Node, source: &str) -> Vec<ParamSpec> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut cursor = params.walk();
    for child in params.children(&mut cursor) {
        if !matches!(child.kind(), "required_parameter" | "optional_parameter") {
            continue;
        }
        let Some(pattern) = child.child_by_field_name("pattern") else {
            continue;
        };
        out.push(ParamSpec {
            name: node_text(&pattern, source).to_string(),
            type_annotation: child
                .child_by_field_name("type")
                .map(|t| annotation_text(&t, source)),
            default_value: child
                .child_by_field_name("value")
                .map(|v| node_text(&v, source).to_string()),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(code: &str) -> Vec<FunctionSpec> {
        function_specs(code, false).unwrap()
    }

    #[test]
    fn test_name_params_return() {
        let specs = analyze("export function send(channel: string, payload: Wire): boolean {}");
        assert_eq!(specs.len(), 1);
        let spec = &specs[0];
        assert_eq!(spec.name, "send");
        assert_eq!(spec.params.len(), 2);
        assert_eq!(spec.params[0].name, "channel");
        assert_eq!(spec.params[0].type_annotation.as_deref(), Some("string"));
        assert_eq!(spec.params[1].name, "payload");
        assert_eq!(spec.params[1].type_annotation.as_deref(), Some("Wire"));
        assert_eq!(spec.return_type, "boolean");
        assert!(spec.custom_types.contains("Wire"));
        assert!(!spec.custom_types.contains("string"));
    }

    #[test]
    fn test_missing_return_type_defaults_to_void() {
        let specs = analyze("export function fire(channel: string) {}");
        assert_eq!(specs[0].return_type, "void");
    }

    #[test]
    fn test_untyped_param() {
        let specs = analyze("function f(x) {}");
        assert_eq!(specs[0].params[0].name, "x");
        assert_eq!(specs[0].params[0].type_annotation, None);
        assert_eq!(specs[0].params[0].default_value, None);
    }

    #[test]
    fn test_default_value_captured_verbatim() {
        let specs = analyze("export function retry(count: number = 3, label = 'job') {}");
        let params = &specs[0].params;
        assert_eq!(params[0].default_value.as_deref(), Some("3"));
        assert_eq!(params[1].default_value.as_deref(), Some("'job'"));
    }

    #[test]
    fn test_optional_param_keeps_bare_name() {
        let specs = analyze("export function find(id: string, depth?: number) {}");
        assert_eq!(specs[0].params[1].name, "depth");
        assert_eq!(specs[0].params[1].type_annotation.as_deref(), Some("number"));
    }

    #[test]
    fn test_destructured_param_keeps_pattern_text() {
        let specs = analyze("export function open({ path }: FileRef) {}");
        assert_eq!(specs[0].params[0].name, "{ path }");
        assert_eq!(
            specs[0].params[0].type_annotation.as_deref(),
            Some("FileRef")
        );
        assert!(specs[0].custom_types.contains("FileRef"));
    }

    #[test]
    fn test_duplicate_params_not_deduplicated() {
        let specs = analyze("function f(a: A, a: A) {}");
        assert_eq!(specs[0].params.len(), 2);
        assert_eq!(specs[0].params[0], specs[0].params[1]);
    }

    #[test]
    fn test_compound_fragment_in_order() {
        let fragment = "export function first(): void {}\nexport function second(x: Wire): Wire {}\n";
        let specs = function_specs(fragment, true).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "first");
        assert_eq!(specs[1].name, "second");
        assert_eq!(specs[1].custom_types.len(), 1);
    }

    #[test]
    fn test_empty_fragment_yields_nothing() {
        assert!(function_specs("", true).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_fragment_is_fatal() {
        let err = function_specs("export function broken((( {}", true).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedFragment(_)));
    }

    #[test]
    fn test_non_function_statements_ignored() {
        let specs = analyze("const x = 1;\nexport function only(): void {}\nclass C {}");
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "only");
    }
}
