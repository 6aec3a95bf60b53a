//! Library tree store.
//!
//! Renders a [`LibraryNode`] into [`NodeView`] rows, tracks which folders are
//! expanded and which file row is marked selected, and answers sibling-order
//! questions for next/previous navigation.
//!
//! # Ordering
//!
//! Rows are produced depth-first with folders and files interleaved in
//! lexicographic name order. "Document order" everywhere in this module means
//! the order of [`TreeStore::leaf_paths`].

use std::collections::HashSet;

use super::events::SelectionSink;
use super::error::FetchError;
use crate::config;
use crate::models::{LibraryNode, NodeView, RelativePath, TreeState};
use crate::utils::format::human_size;

/// Render the children of `node` as rows whose paths start at `base`.
///
/// Pure function: the same input always yields the same rows, and nothing
/// but the returned views is touched.
pub fn render(node: &LibraryNode, base: &str) -> Vec<NodeView> {
    node.children()
        .map(|(name, child)| match child {
            LibraryNode::Folder(_) => {
                let path = RelativePath::join(base, name).as_str().to_string();
                let children = render(child, &path);
                NodeView::Folder {
                    name: name.clone(),
                    path,
                    children,
                }
            }
            LibraryNode::File(size) => NodeView::Leaf {
                name: name.clone(),
                path: RelativePath::join(base, name),
                size: *size,
                size_label: human_size(*size),
            },
        })
        .collect()
}

/// Collect leaf paths in document order.
fn collect_leaves<'a>(rows: &'a [NodeView], out: &mut Vec<&'a RelativePath>) {
    for row in rows {
        match row {
            NodeView::Folder { children, .. } => collect_leaves(children, out),
            NodeView::Leaf { path, .. } => out.push(path),
        }
    }
}

/// Rendered library with expansion and selection marks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStore {
    state: TreeState,
    expanded: HashSet<String>,
    selected: Option<RelativePath>,
    /// Bumped whenever `state` is replaced.
    revision: u64,
    /// Generation of the newest listing request.
    generation: u64,
    /// Generation still awaiting its result.
    pending: Option<u64>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }

    /// Changes every time the rendered hierarchy is replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rendered rows (empty unless a listing has loaded).
    pub fn rows(&self) -> &[NodeView] {
        match &self.state {
            TreeState::Ready(rows) => rows,
            _ => &[],
        }
    }

    /// Clear the current tree ahead of a new listing request.
    ///
    /// No stale tree survives a reload, whether it then succeeds or fails.
    /// Returns the generation to hand back to [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.revision += 1;
        self.state = TreeState::Loading;
        self.expanded.clear();
        self.selected = None;
        self.generation
    }

    /// Replace the hierarchy with the outcome of a listing request.
    ///
    /// Only the result for the newest pending `generation` is installed;
    /// anything else is dropped and `false` returned. On success every folder
    /// starts collapsed. If `fragment_selection` is `None` (the URL implies
    /// nothing), the first file in document order is reported to `sink` as
    /// the new selection.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<LibraryNode, FetchError>,
        fragment_selection: Option<&RelativePath>,
        sink: &mut impl SelectionSink,
    ) -> bool {
        if self.pending != Some(generation) {
            return false;
        }
        self.pending = None;
        self.revision += 1;
        self.expanded.clear();
        self.selected = None;

        let node = match result {
            Ok(node) => node,
            Err(_) => {
                self.state = TreeState::Failed(config::tree::LOAD_ERROR_TEXT.to_string());
                return true;
            }
        };

        self.state = TreeState::Ready(render(node.display_root(), ""));

        if fragment_selection.is_none()
            && let Some(first) = self.leaf_paths().first()
        {
            sink.selection_changed((*first).clone());
        }
        true
    }

    /// Every file path in document order.
    pub fn leaf_paths(&self) -> Vec<&RelativePath> {
        let mut out = Vec::new();
        collect_leaves(self.rows(), &mut out);
        out
    }

    pub fn contains(&self, path: &RelativePath) -> bool {
        self.leaf_paths().contains(&path)
    }

    /// Files sharing `path`'s parent directory, in document order.
    ///
    /// Includes `path` itself whenever it is rendered.
    pub fn sibling_paths(&self, path: &RelativePath) -> Vec<RelativePath> {
        if path.is_empty() {
            return Vec::new();
        }
        let dir = path.parent();
        self.leaf_paths()
            .into_iter()
            .filter(|p| p.parent() == dir)
            .cloned()
            .collect()
    }

    /// Select the next sibling of `path`.
    ///
    /// Returns `false` without notifying `sink` when `path` is the last
    /// sibling or is not rendered.
    pub fn go_to_next_sibling(&self, path: &RelativePath, sink: &mut impl SelectionSink) -> bool {
        let siblings = self.sibling_paths(path);
        let Some(idx) = siblings.iter().position(|p| p == path) else {
            return false;
        };
        match siblings.into_iter().nth(idx + 1) {
            Some(next) => {
                sink.selection_changed(next);
                true
            }
            None => false,
        }
    }

    /// Select the previous sibling of `path`.
    ///
    /// Returns `false` without notifying `sink` when `path` is the first
    /// sibling or is not rendered.
    pub fn go_to_prev_sibling(&self, path: &RelativePath, sink: &mut impl SelectionSink) -> bool {
        let siblings = self.sibling_paths(path);
        let Some(idx) = siblings.iter().position(|p| p == path) else {
            return false;
        };
        if idx == 0 {
            return false;
        }
        match siblings.into_iter().nth(idx - 1) {
            Some(prev) => {
                sink.selection_changed(prev);
                true
            }
            None => false,
        }
    }

    /// Report a clicked file row as the new selection.
    pub fn click_leaf(&self, path: &RelativePath, sink: &mut impl SelectionSink) {
        sink.selection_changed(path.clone());
    }

    /// Open every folder enclosing `path` and mark its row selected.
    ///
    /// Any previous selection mark is removed. Returns `true` when the row
    /// exists, i.e. when it is worth scrolling into view.
    pub fn expand_to_path(&mut self, path: &RelativePath) -> bool {
        if path.is_empty() {
            return false;
        }
        for folder in path.ancestors() {
            self.expanded.insert(folder);
        }
        let found = self.contains(path);
        self.selected = found.then(|| path.clone());
        found
    }

    pub fn toggle_folder(&mut self, folder: &str) {
        if !self.expanded.remove(folder) {
            self.expanded.insert(folder.to_string());
        }
    }

    pub fn is_expanded(&self, folder: &str) -> bool {
        self.expanded.contains(folder)
    }

    /// File row currently marked selected.
    pub fn selected(&self) -> Option<&RelativePath> {
        self.selected.as_ref()
    }
}
