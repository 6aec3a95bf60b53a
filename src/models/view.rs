//! Toolkit-independent view models for the library tree and dialogs.

use super::RelativePath;

/// One rendered row of the library tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeView {
    /// Collapsible folder section (rendered collapsed until expanded).
    Folder {
        name: String,
        /// Folder path from the visible root, used as its expansion key.
        path: String,
        children: Vec<NodeView>,
    },
    /// Clickable file row.
    Leaf {
        name: String,
        path: RelativePath,
        size: u64,
        /// Human-readable size, e.g. `1.5 KB`.
        size_label: String,
    },
}

impl NodeView {
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::Leaf { name, .. } => name,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// Modal dialog currently shown over the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    /// Rename dialog with the new-name input.
    Rename,
    /// Flat list of every file in the library.
    FileList,
}

impl Modal {
    pub fn is_open(self) -> bool {
        self != Self::None
    }
}

/// Visible state of the library panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TreeState {
    /// Nothing requested yet.
    #[default]
    Empty,
    /// A listing request is in flight; the previous tree is already cleared.
    Loading,
    /// Rendered hierarchy.
    Ready(Vec<NodeView>),
    /// Inline error message shown in place of the tree.
    Failed(String),
}
