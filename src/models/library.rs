//! Media library data types.
//!
//! The backend describes the library as a nested JSON object where every
//! key is an entry name and every value is either another object (a folder)
//! or an integer byte size (a file).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Library Tree
// =============================================================================

/// One entry of the media library.
///
/// Children are kept in a [`BTreeMap`], so iteration is always lexicographic
/// by name and names are unique within a folder.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LibraryNode {
    /// Folder mapping child name to child node.
    Folder(BTreeMap<String, LibraryNode>),
    /// File with its size in bytes.
    File(u64),
}

impl LibraryNode {
    /// Parse the JSON body returned by the tree endpoint.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Children of a folder (empty for files).
    pub fn children(&self) -> impl Iterator<Item = (&String, &LibraryNode)> {
        let map = match self {
            Self::Folder(children) => Some(children),
            Self::File(_) => None,
        };
        map.into_iter().flat_map(|m| m.iter())
    }

    /// Number of files below this node (a file counts itself).
    pub fn file_count(&self) -> usize {
        match self {
            Self::File(_) => 1,
            Self::Folder(children) => children.values().map(Self::file_count).sum(),
        }
    }

    /// The node whose children form the visible root of the tree.
    ///
    /// A listing with a single top-level folder is unwrapped so paths are
    /// relative to that folder; anything else is shown as-is.
    pub fn display_root(&self) -> &LibraryNode {
        if let Self::Folder(children) = self
            && children.len() == 1
            && let Some(only) = children.values().next()
            && only.is_folder()
        {
            return only;
        }
        self
    }
}

// =============================================================================
// Relative Path
// =============================================================================

/// `/`-joined path from the visible tree root to a file.
///
/// This is the only identifier used for streaming, renaming and the URL
/// fragment. Segments are joined verbatim without normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Join a folder path and an entry name (`""` is the root folder).
    pub fn join(base: &str, name: &str) -> Self {
        if base.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", base, name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent directory string: the path without its last segment, or `""`
    /// for root-level files.
    pub fn parent(&self) -> &str {
        self.0.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }

    /// Last segment of the path.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Folder paths enclosing this path, outermost first.
    ///
    /// `a/b/c.mp4` yields `["a", "a/b"]`.
    pub fn ancestors(&self) -> Vec<String> {
        let segments: Vec<&str> = self.0.split('/').collect();
        let mut out = Vec::with_capacity(segments.len().saturating_sub(1));
        let mut base = String::new();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            if !base.is_empty() {
                base.push('/');
            }
            base.push_str(segment);
            out.push(base.clone());
        }
        out
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_tree() {
        let node =
            LibraryNode::from_json(r#"{"root": {"a.mp4": 1048576, "b": {"c.mp4": 2048}}}"#)
                .unwrap();
        assert_eq!(node.file_count(), 2);

        let root = node.display_root();
        let names: Vec<&String> = root.children().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a.mp4", "b"]);
    }

    #[test]
    fn test_display_root_keeps_multiple_roots() {
        let node = LibraryNode::from_json(r#"{"x": {"a.mp4": 1}, "y": {"b.mp4": 2}}"#).unwrap();
        assert_eq!(node.display_root(), &node);

        // A lone top-level file is not unwrapped either
        let node = LibraryNode::from_json(r#"{"a.mp4": 1}"#).unwrap();
        assert_eq!(node.display_root(), &node);
    }

    #[test]
    fn test_rejects_non_integer_leaf() {
        assert!(LibraryNode::from_json(r#"{"a.mp4": "big"}"#).is_err());
        assert!(LibraryNode::from_json(r#"{"a.mp4": -1}"#).is_err());
    }

    #[test]
    fn test_relative_path_parts() {
        let path = RelativePath::new("shows/s01/e01.mkv");
        assert_eq!(path.parent(), "shows/s01");
        assert_eq!(path.file_name(), "e01.mkv");
        assert_eq!(path.ancestors(), vec!["shows", "shows/s01"]);

        let top = RelativePath::new("a.mp4");
        assert_eq!(top.parent(), "");
        assert_eq!(top.file_name(), "a.mp4");
        assert!(top.ancestors().is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(RelativePath::join("", "a.mp4").as_str(), "a.mp4");
        assert_eq!(RelativePath::join("b", "c.mp4").as_str(), "b/c.mp4");
    }
}
