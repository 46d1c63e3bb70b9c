use hierdiff_text::{ConfigLine, ConfigText, LineKind};

use crate::error::{DiffError, DiffResult};
use crate::model::{RootMarker, Side};

/// Root-to-leaf ancestor chain for one changed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorPath {
    /// Line texts from the outermost ancestor down to the changed line
    /// itself. A root-level changed line yields a single-element chain.
    pub lines: Vec<String>,
    /// Set when the chain attaches to the synthetic root through a bare
    /// `#`/`!` delimiter instead of a named parent section.
    pub marker: Option<RootMarker>,
}

/// Resolve the ancestor chain of the line at `line_number`.
///
/// Walks backward from the changed line, one indentation level at a time:
/// blank lines never participate, lines at the current level are siblings
/// and are scanned past as a run, and the first strictly-shallower line
/// ends the scan for that level. Resolution then continues upward from the
/// found parent until a root-level ancestor or a bare `#`/`!` delimiter is
/// reached.
///
/// `level` is the indentation level of the target line; a target already at
/// level 0 resolves to itself with no ancestors.
///
/// Worst case is O(n) per call and O(n²) across a diff with many changed
/// same-level siblings, which is acceptable for typical config sizes
/// (hundreds to low thousands of lines).
pub fn resolve_ancestor_path(
    text: &ConfigText,
    line_number: usize,
    level: usize,
    side: Side,
) -> DiffResult<AncestorPath> {
    let target = text
        .line(line_number)
        .ok_or(DiffError::LineOutOfBounds { side, line_number })?;

    // Accumulate leaf-first, reverse at the end.
    let mut lines = vec![target.raw.clone()];
    let mut marker = None;
    let mut scan_from = line_number;
    let mut current_level = level;

    while current_level > 0 {
        match find_parent(text, scan_from, current_level) {
            Some(parent) if parent.kind == LineKind::Marker => {
                marker = parent.marker_char().and_then(RootMarker::from_char);
                break;
            }
            Some(parent) => {
                scan_from = parent.number;
                current_level = parent.indent;
                lines.push(parent.raw.clone());
            }
            None => break,
        }
    }

    lines.reverse();
    Ok(AncestorPath { lines, marker })
}

/// Nearest non-blank line above `from_number` with indentation strictly
/// below `level`.
///
/// Only the transition from the current level (or deeper) to a
/// strictly-shallower line ends the scan; blank lines are skipped without
/// ending a sibling run.
fn find_parent(text: &ConfigText, from_number: usize, level: usize) -> Option<&ConfigLine> {
    let mut number = from_number;
    while number > 1 {
        number -= 1;
        let candidate = text.line(number)?;
        if candidate.kind == LineKind::Blank {
            continue;
        }
        if candidate.indent < level {
            return Some(candidate);
        }
        // Same-level sibling or deeper descendant of an earlier sibling:
        // keep scanning upward.
    }
    None
}
