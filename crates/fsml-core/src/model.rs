use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParsePositionError;

/// Structural view of one relative path.
/// Derived on demand by [`crate::parse_path`], never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDescriptor {
    /// Input path with trailing separators trimmed
    pub path: String,
    /// Numeric position from the filename prefix, if any
    pub order: Option<u32>,
    /// Stem without extension and without order prefix
    pub name: String,
    pub title: String,
    /// Last dot-suffix including the dot (`.md`), or empty
    pub extension: String,
    pub is_folder: bool,
    pub is_hidden: bool,
    pub is_system: bool,
    pub depth: usize,
    pub parent: String,
}

/// Navigation tree element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavNode {
    pub path: String,
    pub title: String,
    pub order: Option<u32>,
    pub is_folder: bool,
    /// True if an index file sits directly inside this folder
    pub has_index: bool,
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Find a node by path among this node and its descendants
    pub fn find(&self, path: &str) -> Option<&NavNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.path == path {
                return Some(node);
            }
            stack.extend(node.children.iter());
        }
        None
    }
}

/// Drop position relative to the target entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Before,
    After,
    Inside,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Before => "before",
            Position::After => "after",
            Position::Inside => "inside",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(Position::Before),
            "after" => Ok(Position::After),
            "inside" => Ok(Position::Inside),
            other => Err(ParsePositionError(other.to_string())),
        }
    }
}
