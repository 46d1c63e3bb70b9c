use indexmap::IndexMap;

use crate::model::{ContextNode, ContextTree};

/// Flatten a context tree into its rendered line list.
///
/// Depth-first pre-order traversal in insertion order: each line is emitted
/// exactly once, before any of its children. Pure and deterministic for a
/// given tree.
pub fn flatten(tree: &ContextTree) -> Vec<String> {
    let mut out = Vec::new();
    flatten_children(&tree.children, &mut out);
    out
}

fn flatten_children(children: &IndexMap<String, ContextNode>, out: &mut Vec<String>) {
    for (line, node) in children {
        out.push(line.clone());
        if let ContextNode::Section(nested) = node {
            flatten_children(nested, out);
        }
    }
}
