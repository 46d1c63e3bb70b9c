//! Line model for indentation-structured network configuration text.
//!
//! This crate provides:
//! - a lossless line sequence (`ConfigText`, `ConfigLine`)
//! - indentation column counting (`count_indent`)
//! - blank/marker/content classification (`LineKind`)
//!
//! The model is intentionally conservative:
//! - indentation is the only structural cue it measures
//! - no input lines are dropped or rewritten
//! - line numbers are 1-based, matching how operators read config dumps
//!
//! # Example
//!
//! ```rust
//! use hierdiff_text::ConfigText;
//!
//! let input = "router bgp 65000\n  neighbor 10.0.0.1 remote-as 65001\n";
//! let text = ConfigText::parse(input);
//! assert_eq!(text.render(), input);
//! assert_eq!(text.line(2).map(|l| l.indent), Some(2));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight classification of a raw configuration line.
///
/// A `Marker` is a line whose trimmed content is exactly `#` or `!` — the
/// bare section delimiters found in router-style configs. Marker lines are
/// not named sections and never become ancestors in a hierarchy walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Blank,
    Marker,
    Content,
}

/// One raw line with its parse metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLine {
    /// Original line content without its line ending.
    pub raw: String,
    /// Original line ending (`"\n"`, `"\r\n"`, or empty at EOF).
    pub line_ending: String,
    /// 1-based line number in the source text.
    pub number: usize,
    /// Indentation columns before the first non-whitespace character.
    pub indent: usize,
    pub kind: LineKind,
}

impl ConfigLine {
    /// Marker character (`#` or `!`) when this line is a bare delimiter.
    pub fn marker_char(&self) -> Option<char> {
        if self.kind == LineKind::Marker {
            self.raw.trim().chars().next()
        } else {
            None
        }
    }
}

/// Immutable ordered line sequence for one side of a diff.
///
/// Created once per diff invocation from caller-supplied text and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigText {
    lines: Vec<ConfigLine>,
}

impl ConfigText {
    /// Split input into classified lines, preserving endings losslessly.
    pub fn parse(input: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0usize;
        let mut number = 1usize;

        while start < input.len() {
            let next_lf = input[start..].find('\n').map(|idx| start + idx);
            let (segment, next_start) = if let Some(lf_idx) = next_lf {
                (&input[start..=lf_idx], lf_idx + 1)
            } else {
                (&input[start..], input.len())
            };

            let (raw, line_ending) = split_line_ending(segment);
            lines.push(ConfigLine {
                raw: raw.to_string(),
                line_ending: line_ending.to_string(),
                number,
                indent: count_indent(raw),
                kind: classify_line(raw),
            });

            number += 1;
            start = next_start;
        }

        Self { lines }
    }

    /// Borrow a line by 1-based number.
    pub fn line(&self, number: usize) -> Option<&ConfigLine> {
        if number == 0 {
            return None;
        }
        self.lines.get(number - 1)
    }

    /// Number of lines in the sequence.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &ConfigLine> {
        self.lines.iter()
    }

    /// Render the sequence as exact original bytes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.raw);
            out.push_str(&line.line_ending);
        }
        out
    }
}

impl fmt::Display for ConfigText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Classify a raw line (without line ending) into blank/marker/content.
pub fn classify_line(raw: &str) -> LineKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed == "#" || trimmed == "!" {
        return LineKind::Marker;
    }
    LineKind::Content
}

/// Count indentation columns before the first non-whitespace character.
///
/// Spaces count as one column, tabs as four.
pub fn count_indent(raw: &str) -> usize {
    let mut width = 0usize;
    for ch in raw.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}

fn split_line_ending(segment: &str) -> (&str, &str) {
    if let Some(raw) = segment.strip_suffix("\r\n") {
        (raw, "\r\n")
    } else if let Some(raw) = segment.strip_suffix('\n') {
        (raw, "\n")
    } else {
        (segment, "")
    }
}
