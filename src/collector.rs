//! Custom type-reference recovery
//!
//! The second extraction stage: a depth-first walk over a Tree-sitter
//! tree that records every named type reference outside the builtin set.
//! The walk never stops early: each rule fires opportunistically at its
//! node and the scan continues through the remaining children. A shape no
//! rule recognizes is an omission, not an error.
//!
//! The one deliberate asymmetry: generic type arguments are dropped
//! (`Foo<Bar>` records only `Foo`), while union and intersection members
//! are all recorded.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::normalize::dedent;
use crate::syntax::{find_child_by_kind, has_child_of_kind, node_text, parse_fragment};

/// Reserved primitive and utility type names, never collected
const BUILTIN_TYPES: [&str; 11] = [
    "string",
    "number",
    "boolean",
    "void",
    "any",
    "unknown",
    "null",
    "undefined",
    "never",
    "object",
    "Function",
];

/// True when `type_name` is one of the reserved builtin type names.
pub fn is_builtin_type(type_name: &str) -> bool {
    BUILTIN_TYPES.contains(&type_name)
}

/// Collect the custom type names referenced in an arbitrary source
/// fragment.
///
/// The fragment is dedented and parsed as TypeScript, and the collector
/// walks the whole tree. Used internally for scanned import statements,
/// and directly by callers needing ad hoc type extraction.
pub fn collect_custom_types(code: &str) -> Result<BTreeSet<String>> {
    let source = dedent(code);
    let tree = parse_fragment(&source)?;
    let mut custom_types = BTreeSet::new();
    collect_from_node(&tree.root_node(), &source, &mut custom_types);
    Ok(custom_types)
}

fn record(name: &str, custom_types: &mut BTreeSet<String>) {
    if !is_builtin_type(name) {
        custom_types.insert(name.to_string());
    }
}

/// Apply the collection rules to `node`, then recurse into its children.
pub(crate) fn collect_from_node(
    node: &tree_sitter::Node,
    source: &str,
    custom_types: &mut BTreeSet<String>,
) {
    match node.kind() {
        // Named reference with type arguments: keep the base name, drop
        // the argument list subtree entirely.
        "generic_type" => {
            if let Some(base) = node.child_by_field_name("name") {
                record(node_text(&base, source), custom_types);
            }
            return;
        }
        // Qualified reference (`ns.Type`): one dotted name, no descent
        // into its segments.
        "nested_type_identifier" => {
            record(node_text(node, source), custom_types);
            return;
        }
        "type_identifier" => record(node_text(node, source), custom_types),
        // Destructured binding carrying an inline annotation: exactly
        // three children (identifier, separator, identifier). Any other
        // pattern shape stays invisible.
        "pair_pattern" => {
            if node.child_count() == 3 {
                if let Some(value) = node.child(2) {
                    if value.kind() == "identifier" {
                        record(node_text(&value, source), custom_types);
                    }
                }
            }
        }
        "import_statement" => collect_import_bindings(node, source, custom_types),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_from_node(&child, source, custom_types);
    }
}

/// Record the local names of type-only bindings in an import statement.
///
/// A binding qualifies when the whole clause is type-only
/// (`import type { X }`) or the specifier itself is (`import { type X }`).
fn collect_import_bindings(
    node: &tree_sitter::Node,
    source: &str,
    custom_types: &mut BTreeSet<String>,
) {
    let clause_type_only = has_child_of_kind(node, "type");
    let Some(clause) = find_child_by_kind(node, "import_clause") else {
        return;
    };
    let Some(named) = find_child_by_kind(&clause, "named_imports") else {
        return;
    };

    let mut cursor = named.walk();
    for spec in named.children(&mut cursor) {
        if spec.kind() != "import_specifier" {
            continue;
        }
        let binding = spec
            .child_by_field_name("alias")
            .or_else(|| spec.child_by_field_name("name"));
        if let Some(binding) = binding {
            if clause_type_only || has_child_of_kind(&spec, "type") {
                record(node_text(&binding, source), custom_types);
            }
        }
    }
}
