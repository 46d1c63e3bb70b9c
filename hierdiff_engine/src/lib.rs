//! Hierarchical context reconstruction for line diffs of configuration text.
//!
//! A plain line diff of two router/switch configuration dumps reports
//! changed leaf lines without the nested sections that give them meaning.
//! This crate re-attaches that context: every changed line is resolved to
//! its full ancestor chain (for example `router bgp 65139` → `neighbor X` →
//! `remote-as Y`), the per-line chains are merged into one ordered context
//! tree per side, and the two trees are flattened and re-diffed into a
//! human-readable annotated text.
//!
//! Pipeline: raw old/new text → line differ ([`change_triples`]) → ancestor
//! resolution ([`resolve_ancestor_path`]) → path merging ([`merge`]) →
//! flattening ([`flatten`]) → final text diff ([`render_annotated`]).
//!
//! The computation is pure, synchronous, and in-memory: no I/O, no shared
//! state across calls. Separate calls may run concurrently on separate
//! inputs.
//!
//! # Example
//!
//! ```rust
//! use hierdiff_engine::diff_configs;
//!
//! let old = "router bgp 65000\n  neighbor 10.0.0.1 remote-as 65001\n";
//! let new = "router bgp 65000\n  neighbor 10.0.0.1 remote-as 65002\n";
//!
//! let diff = diff_configs(old, new).expect("line refs are in bounds");
//! assert!(diff.has_changes);
//! assert!(diff.text.contains("  router bgp 65000"));
//! assert!(diff.text.contains("-   neighbor 10.0.0.1 remote-as 65001"));
//! assert!(diff.text.contains("+   neighbor 10.0.0.1 remote-as 65002"));
//! ```

mod error;
mod flatten;
mod merge;
mod model;
mod render;
mod resolve;
mod triples;


pub use crate::error::{DiffError, DiffResult};
pub use crate::flatten::flatten;
pub use crate::merge::merge;
pub use crate::model::{ConfigDiff, ContextNode, ContextTree, RootMarker, Side};
pub use crate::render::render_annotated;
pub use crate::resolve::{AncestorPath, resolve_ancestor_path};
pub use crate::triples::{ChangeTriple, LineRef, change_triples, strip_markers};

use hierdiff_text::ConfigText;

/// Diff two configuration texts and reconstruct the hierarchical context
/// of every changed line.
///
/// Returns the annotated text diff of the two rendered context trees plus
/// the trees themselves for structured consumers.
///
/// # Errors
///
/// [`DiffError::LineOutOfBounds`] when a changed triple references a line
/// number outside its side's text. This is an internal invariant violation
/// of the line differ contract; no partial result is produced, since an
/// incomplete context tree would render a misleading diff.
pub fn diff_configs(old_text: &str, new_text: &str) -> DiffResult<ConfigDiff> {
    let old = ConfigText::parse(old_text);
    let new = ConfigText::parse(new_text);

    let mut old_context = ContextTree::new();
    let mut new_context = ContextTree::new();

    for triple in change_triples(&old, &new) {
        if !triple.changed {
            continue;
        }
        accumulate_side(&old, &triple.old, Side::Old, &mut old_context)?;
        accumulate_side(&new, &triple.new, Side::New, &mut new_context)?;
    }

    let old_lines = flatten(&old_context);
    let new_lines = flatten(&new_context);
    let text = render_annotated(&old_lines, &new_lines);
    let has_changes = text
        .lines()
        .any(|line| line.starts_with("+ ") || line.starts_with("- "));

    Ok(ConfigDiff {
        text,
        old_context,
        new_context,
        has_changes,
    })
}

/// Fold one side of a changed triple into that side's running context tree.
fn accumulate_side(
    text: &ConfigText,
    line_ref: &LineRef,
    side: Side,
    tree: &mut ContextTree,
) -> DiffResult<()> {
    // An empty slot means this side has no counterpart line.
    let Some(line_number) = line_ref.number else {
        return Ok(());
    };

    let stripped = strip_markers(&line_ref.text);
    if stripped.trim().is_empty() {
        return Ok(());
    }

    let line = text
        .line(line_number)
        .ok_or(DiffError::LineOutOfBounds { side, line_number })?;

    if line.indent == 0 {
        tree.insert_leaf(line.raw.clone());
        return Ok(());
    }

    let path = resolve_ancestor_path(text, line_number, line.indent, side)?;
    merge(tree, ContextTree::from_path(path.lines));
    Ok(())
}
