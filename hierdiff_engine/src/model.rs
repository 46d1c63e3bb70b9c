use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::SerializeMap;

/// Which input a line reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Synthetic-root attachment flag reported by ancestor resolution.
///
/// When the nearest strictly-shallower line above a changed line is a bare
/// `#` or `!` delimiter, the change attaches to the document root rather
/// than to a named section, and the delimiter character is reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootMarker {
    Hash,
    Bang,
}

impl RootMarker {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(RootMarker::Hash),
            '!' => Some(RootMarker::Bang),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            RootMarker::Hash => '#',
            RootMarker::Bang => '!',
        }
    }
}

/// One node in a [`ContextTree`].
///
/// The tagged variant replaces the duck-typed nested-mapping recursion of
/// ad-hoc implementations: a changed line with no recorded children is a
/// `Leaf`, a line with nested context is a `Section`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextNode {
    Leaf,
    Section(IndexMap<String, ContextNode>),
}

impl ContextNode {
    /// Borrow nested children when this node is a section.
    pub fn children(&self) -> Option<&IndexMap<String, ContextNode>> {
        match self {
            ContextNode::Leaf => None,
            ContextNode::Section(children) => Some(children),
        }
    }
}

// A leaf and an empty section are the same shape on the wire: `{}`. Keys
// serialize in insertion order, which is the render order.
impl Serialize for ContextNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ContextNode::Leaf => serializer.serialize_map(Some(0))?.end(),
            ContextNode::Section(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (line, node) in children {
                    map.serialize_entry(line, node)?;
                }
                map.end()
            }
        }
    }
}

/// Insertion-ordered nested mapping of configuration lines.
///
/// Represents the merged ancestor paths of all changed lines on one side of
/// a diff. First-insertion order of keys is significant: it determines the
/// flattened render order, which tracks original document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ContextTree {
    pub children: IndexMap<String, ContextNode>,
}

impl ContextTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Borrow a top-level node by its line text.
    pub fn get(&self, line: &str) -> Option<&ContextNode> {
        self.children.get(line)
    }

    /// Insert a root-level changed line with no ancestors.
    pub fn insert_leaf(&mut self, line: String) {
        self.children.entry(line).or_insert(ContextNode::Leaf);
    }

    /// Build a single-path fragment from a root-to-leaf line chain.
    pub fn from_path(lines: Vec<String>) -> Self {
        let mut node = ContextNode::Leaf;
        let mut iter = lines.into_iter().rev();

        let Some(leaf) = iter.next() else {
            return Self::new();
        };

        let mut key = leaf;
        for ancestor in iter {
            let mut children = IndexMap::new();
            children.insert(key, node);
            node = ContextNode::Section(children);
            key = ancestor;
        }

        let mut children = IndexMap::new();
        children.insert(key, node);
        Self { children }
    }
}

/// Final output of a hierarchical config diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigDiff {
    /// Annotated line diff of the two rendered context trees
    /// (`  `/`- `/`+ `/`? ` prefixes).
    pub text: String,
    /// Merged hierarchical context of all changed lines in the old config.
    pub old_context: ContextTree,
    /// Merged hierarchical context of all changed lines in the new config.
    pub new_context: ContextTree,
    pub has_changes: bool,
}
