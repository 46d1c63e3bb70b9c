use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::model::{ContextNode, ContextTree};

/// Merge `from` into `into`, combining shared ancestors structurally.
///
/// Existing keys merge recursively; new keys are appended at the end of
/// their level, so previously-inserted sibling order is never disturbed.
/// The merge is associative with respect to repeated fragment insertion.
pub fn merge(into: &mut ContextTree, from: ContextTree) {
    merge_children(&mut into.children, from.children);
}

fn merge_children(into: &mut IndexMap<String, ContextNode>, from: IndexMap<String, ContextNode>) {
    for (line, incoming) in from {
        match into.entry(line) {
            Entry::Occupied(mut existing) => merge_node(existing.get_mut(), incoming),
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
        }
    }
}

fn merge_node(existing: &mut ContextNode, incoming: ContextNode) {
    match incoming {
        // A leaf carries no new structure; an existing section is never
        // downgraded back to a leaf.
        ContextNode::Leaf => {}
        ContextNode::Section(from) => match existing {
            ContextNode::Section(into) => merge_children(into, from),
            ContextNode::Leaf => *existing = ContextNode::Section(from),
        },
    }
}
