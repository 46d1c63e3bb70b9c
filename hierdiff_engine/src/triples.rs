use hierdiff_text::ConfigText;
use similar::{Algorithm, DiffOp, capture_diff_slices};

/// Reference to one line on one side of a diff.
///
/// `number` is empty when this side has no counterpart line (the missing
/// half of a pure insertion or deletion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    pub number: Option<usize>,
    pub text: String,
}

impl LineRef {
    fn at(number: usize, text: &str) -> Self {
        Self {
            number: Some(number),
            text: text.to_string(),
        }
    }

    fn empty() -> Self {
        Self {
            number: None,
            text: String::new(),
        }
    }
}

/// One aligned pair of line references produced by the line differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTriple {
    pub old: LineRef,
    pub new: LineRef,
    pub changed: bool,
}

/// Compute aligned change triples between two line sequences.
///
/// Equal runs yield unchanged triples, one-sided runs yield triples with an
/// empty ref on the missing side, and replace runs pair old and new lines
/// positionally with empty refs for the longer side's tail.
pub fn change_triples(old: &ConfigText, new: &ConfigText) -> Vec<ChangeTriple> {
    let a = old.lines().map(|line| line.raw.as_str()).collect::<Vec<_>>();
    let b = new.lines().map(|line| line.raw.as_str()).collect::<Vec<_>>();
    let ops = capture_diff_slices(Algorithm::Myers, &a, &b);

    let mut out = Vec::new();
    for op in ops {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for offset in 0..len {
                    out.push(ChangeTriple {
                        old: LineRef::at(old_index + offset + 1, a[old_index + offset]),
                        new: LineRef::at(new_index + offset + 1, b[new_index + offset]),
                        changed: false,
                    });
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for offset in 0..old_len {
                    out.push(ChangeTriple {
                        old: LineRef::at(old_index + offset + 1, a[old_index + offset]),
                        new: LineRef::empty(),
                        changed: true,
                    });
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for offset in 0..new_len {
                    out.push(ChangeTriple {
                        old: LineRef::empty(),
                        new: LineRef::at(new_index + offset + 1, b[new_index + offset]),
                        changed: true,
                    });
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                for offset in 0..old_len.max(new_len) {
                    let old_ref = if offset < old_len {
                        LineRef::at(old_index + offset + 1, a[old_index + offset])
                    } else {
                        LineRef::empty()
                    };
                    let new_ref = if offset < new_len {
                        LineRef::at(new_index + offset + 1, b[new_index + offset])
                    } else {
                        LineRef::empty()
                    };
                    out.push(ChangeTriple {
                        old: old_ref,
                        new: new_ref,
                        changed: true,
                    });
                }
            }
        }
    }

    out
}

/// Remove differ-specific out-of-band markers from line text.
///
/// Some line differs annotate changed regions in-band with `\0+`, `\0-`,
/// `\0^`, and `\1` control sequences. These are differ artifacts, not
/// configuration content, and must be stripped before indentation or
/// content processing.
pub fn strip_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\u{0}' => {
                if matches!(chars.peek(), Some('+' | '-' | '^')) {
                    chars.next();
                }
            }
            '\u{1}' => {}
            _ => out.push(ch),
        }
    }

    out
}
