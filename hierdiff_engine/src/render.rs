use similar::{Algorithm, DiffOp, capture_diff_slices};

/// Render the final annotated diff of two flattened context line lists.
///
/// Unchanged lines are prefixed `  `, deletions `- `, additions `+ `.
/// Positionally-paired replacement lines additionally get `? ` hint lines
/// pointing at the exact changed characters: `-` under deleted characters,
/// `+` under added characters, `^` under replaced ones. Blank hint lines
/// are omitted.
pub fn render_annotated(old_lines: &[String], new_lines: &[String]) -> String {
    let a = old_lines.iter().map(String::as_str).collect::<Vec<_>>();
    let b = new_lines.iter().map(String::as_str).collect::<Vec<_>>();
    let ops = capture_diff_slices(Algorithm::Myers, &a, &b);

    let mut out = String::new();
    for op in ops {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                for line in &a[old_index..old_index + len] {
                    push_line(&mut out, "  ", line);
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for line in &a[old_index..old_index + old_len] {
                    push_line(&mut out, "- ", line);
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for line in &b[new_index..new_index + new_len] {
                    push_line(&mut out, "+ ", line);
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                let olds = &a[old_index..old_index + old_len];
                let news = &b[new_index..new_index + new_len];
                let paired = olds.len().min(news.len());

                for idx in 0..paired {
                    let (old_hint, new_hint) = char_hints(olds[idx], news[idx]);
                    push_line(&mut out, "- ", olds[idx]);
                    if let Some(hint) = old_hint {
                        push_line(&mut out, "? ", &hint);
                    }
                    push_line(&mut out, "+ ", news[idx]);
                    if let Some(hint) = new_hint {
                        push_line(&mut out, "? ", &hint);
                    }
                }
                for line in &olds[paired..] {
                    push_line(&mut out, "- ", line);
                }
                for line in &news[paired..] {
                    push_line(&mut out, "+ ", line);
                }
            }
        }
    }

    out
}

fn push_line(out: &mut String, prefix: &str, line: &str) {
    out.push_str(prefix);
    out.push_str(line);
    out.push('\n');
}

/// Character-level hint strings for a paired old/new replacement line.
///
/// Returns `None` for a side whose hint would be all blanks.
fn char_hints(old: &str, new: &str) -> (Option<String>, Option<String>) {
    let a = old.chars().collect::<Vec<_>>();
    let b = new.chars().collect::<Vec<_>>();
    let ops = capture_diff_slices(Algorithm::Myers, &a, &b);

    let mut old_hint = String::new();
    let mut new_hint = String::new();
    for op in ops {
        match op {
            DiffOp::Equal { len, .. } => {
                old_hint.push_str(&" ".repeat(len));
                new_hint.push_str(&" ".repeat(len));
            }
            DiffOp::Delete { old_len, .. } => {
                old_hint.push_str(&"-".repeat(old_len));
            }
            DiffOp::Insert { new_len, .. } => {
                new_hint.push_str(&"+".repeat(new_len));
            }
            DiffOp::Replace {
                old_len, new_len, ..
            } => {
                old_hint.push_str(&"^".repeat(old_len));
                new_hint.push_str(&"^".repeat(new_len));
            }
        }
    }

    (finish_hint(old_hint), finish_hint(new_hint))
}

fn finish_hint(mut hint: String) -> Option<String> {
    hint.truncate(hint.trim_end().len());
    if hint.is_empty() { None } else { Some(hint) }
}
