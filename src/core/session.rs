//! Application session.
//!
//! [`Session`] owns the tree, the player and the navigation bridge and is
//! the only place that coordinates them. Selection flows one way:
//!
//! ```text
//! click / key / fragment / rename ──▶ select ──▶ fragment ──▶ player ──▶ tree mark
//! ```
//!
//! Browser work that cannot happen synchronously (network requests, waiting
//! for metadata, delayed scrolling, focusing an input) is queued as
//! [`UiEffect`]s. The view drains them with [`Session::take_effects`] after
//! every mutation and reports results back through the matching methods.

use super::api::RenameRequest;
use super::commands::Command;
use super::error::FetchError;
use super::navigation::{FragmentStore, NavigationBridge};
use super::player::{HoverFrame, HoverGeometry, LoadTicket, MediaElement, PlayerController};
use super::rename;
use super::search::matches_search;
use super::tree::TreeStore;
use crate::models::{LibraryNode, Modal, Rect, RelativePath, Size};
use crate::utils::console;

/// Side effect requested from the view.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEffect {
    /// Request the listing; answer with [`Session::apply_tree`], passing
    /// `generation` back.
    FetchTree {
        generation: u64,
        search: Option<String>,
    },
    /// Wait for metadata on the active element; answer with
    /// [`Session::metadata_ready`].
    AwaitMetadata(LoadTicket),
    /// Scroll the row for this path into view once folders have opened.
    ScrollIntoView(RelativePath),
    FocusRenameInput,
    /// Send the rename; answer with [`Session::finish_rename`].
    SubmitRename(RenameRequest),
}

/// One entry of the flat file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileListEntry {
    pub path: RelativePath,
    /// `basename — path`
    pub label: String,
}

pub struct Session<M, F> {
    tree: TreeStore,
    player: PlayerController<M>,
    nav: NavigationBridge<F>,
    modal: Modal,
    status: Option<String>,
    search: String,
    file_filter: String,
    rename_draft: String,
    player_box: Option<Size>,
    effects: Vec<UiEffect>,
}

impl<M: MediaElement, F: FragmentStore> Session<M, F> {
    pub fn new(player: PlayerController<M>, nav: NavigationBridge<F>) -> Self {
        Self {
            tree: TreeStore::new(),
            player,
            nav,
            modal: Modal::None,
            status: None,
            search: String::new(),
            file_filter: String::new(),
            rename_draft: String::new(),
            player_box: None,
            effects: Vec::new(),
        }
    }

    // =========================================================================
    // Tree loading
    // =========================================================================

    /// Clear the tree and request a new listing.
    pub fn load_tree(&mut self, search: Option<&str>) {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        self.search = search.unwrap_or_default().to_string();
        let generation = self.tree.begin_load();
        self.effects.push(UiEffect::FetchTree {
            generation,
            search: search.map(str::to_string),
        });
    }

    /// Reload with the search box contents.
    pub fn submit_search(&mut self) {
        let term = self.search.clone();
        self.load_tree(Some(&term));
    }

    /// Empty the search box and reload unfiltered.
    pub fn clear_search(&mut self) {
        self.load_tree(None);
    }

    /// Install a listing result.
    ///
    /// Results of superseded requests are dropped. A fragment in the URL
    /// wins over auto-selecting the first file. It is activated without
    /// being written back. A failed load selects nothing.
    pub fn apply_tree(&mut self, generation: u64, result: Result<LibraryNode, FetchError>) {
        let loaded = result.is_ok();
        if let Err(e) = &result {
            console::error(&format!("tree load failed: {}", e));
        }

        let fragment = self.nav.current();
        let mut first: Option<RelativePath> = None;
        if !self
            .tree
            .finish_load(generation, result, fragment.as_ref(), &mut first)
        {
            console::info(&format!("dropped stale tree listing #{}", generation));
            return;
        }
        if !loaded {
            return;
        }

        if let Some(path) = first {
            self.select(path);
        } else if let Some(path) = fragment {
            self.activate(&path);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Make `path` the selection: fragment, player, then tree mark.
    pub fn select(&mut self, path: RelativePath) {
        self.nav.publish(Some(&path));
        self.activate(&path);
    }

    /// The URL fragment changed outside the application.
    pub fn on_fragment_changed(&mut self) {
        let Some(path) = self.nav.current() else {
            return;
        };
        if self.player.current() != Some(&path) {
            self.activate(&path);
        }
    }

    fn activate(&mut self, path: &RelativePath) {
        if let Some(ticket) = self.player.set_current(Some(path), true) {
            self.effects.push(UiEffect::AwaitMetadata(ticket));
        }
        self.rename_draft = self.player.rename_default().to_string();
        if self.tree.expand_to_path(path) {
            self.effects.push(UiEffect::ScrollIntoView(path.clone()));
        }
    }

    pub fn click_leaf(&mut self, path: &RelativePath) {
        let mut chosen = None;
        self.tree.click_leaf(path, &mut chosen);
        if let Some(path) = chosen {
            self.select(path);
        }
    }

    /// Move to the next file in the current folder. `false` at the end.
    pub fn next_sibling(&mut self) -> bool {
        let Some(current) = self.player.current().cloned() else {
            return false;
        };
        let mut chosen = None;
        let moved = self.tree.go_to_next_sibling(&current, &mut chosen);
        if let Some(path) = chosen {
            self.select(path);
        }
        moved
    }

    /// Move to the previous file in the current folder. `false` at the start.
    pub fn prev_sibling(&mut self) -> bool {
        let Some(current) = self.player.current().cloned() else {
            return false;
        };
        let mut chosen = None;
        let moved = self.tree.go_to_prev_sibling(&current, &mut chosen);
        if let Some(path) = chosen {
            self.select(path);
        }
        moved
    }

    pub fn toggle_folder(&mut self, folder: &str) {
        self.tree.toggle_folder(folder);
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Run a keyboard or control command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::CloseModals => self.modal = Modal::None,
            Command::TogglePlay => self.player.toggle_play(),
            Command::SeekBy(delta) => self.player.seek_by(delta),
            Command::NextSibling => {
                self.next_sibling();
            }
            Command::PrevSibling => {
                self.prev_sibling();
            }
            Command::OpenRename => {
                self.modal = Modal::Rename;
                self.rename_draft = self.player.rename_default().to_string();
                self.effects.push(UiEffect::FocusRenameInput);
            }
            Command::OpenFileList => {
                self.modal = Modal::FileList;
                self.file_filter.clear();
            }
            Command::Rotate => {
                self.player.rotate_clockwise(self.player_box);
            }
            Command::SubmitRename => self.begin_rename(),
        }
    }

    // =========================================================================
    // Rename
    // =========================================================================

    /// Validate the draft, advance to the next sibling and queue the request.
    ///
    /// Validation failures only set the status line.
    pub fn begin_rename(&mut self) {
        match rename::validate(self.player.current(), &self.rename_draft) {
            Ok(request) => {
                self.next_sibling();
                self.effects.push(UiEffect::SubmitRename(request));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Show the outcome of a rename request.
    pub fn finish_rename(&mut self, message: String) {
        self.status = Some(message);
    }

    pub fn set_rename_draft(&mut self, draft: String) {
        self.rename_draft = draft;
    }

    // =========================================================================
    // File list
    // =========================================================================

    pub fn set_file_filter(&mut self, filter: String) {
        self.file_filter = filter;
    }

    /// Files in document order, narrowed by the file-list filter.
    pub fn file_list_entries(&self) -> Vec<FileListEntry> {
        self.tree
            .leaf_paths()
            .into_iter()
            .filter(|path| matches_search(path.as_str(), &self.file_filter))
            .map(|path| FileListEntry {
                label: format!("{} — {}", path.file_name(), path),
                path: path.clone(),
            })
            .collect()
    }

    /// Select an entry of the file list and close the dialog.
    pub fn pick_from_list(&mut self, path: RelativePath) {
        self.modal = Modal::None;
        self.select(path);
    }

    // =========================================================================
    // Player passthroughs
    // =========================================================================

    /// Metadata arrived for `ticket`. Stale tickets are ignored.
    pub fn metadata_ready(&mut self, ticket: LoadTicket) -> bool {
        self.player.metadata_ready(ticket)
    }

    pub fn hover(&mut self, geometry: HoverGeometry, now_ms: f64) -> Option<HoverFrame> {
        self.player.hover(geometry, now_ms)
    }

    pub fn preview_seeked(&mut self) -> bool {
        self.player.preview_seeked()
    }

    pub fn hover_end(&mut self) {
        self.player.hover_end();
    }

    pub fn click_seek(&mut self, x: f64, strip: Rect) -> Option<f64> {
        self.player.click_seek(x, strip)
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.player.set_volume(volume);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.player.set_paused(paused);
    }

    pub fn sync_progress(&mut self) -> f64 {
        self.player.sync_progress()
    }

    pub fn clock_label(&self) -> String {
        self.player.clock_label()
    }

    /// Latest measurement of the player container, used by rotation.
    pub fn set_player_box(&mut self, size: Option<Size>) {
        self.player_box = size;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Drain queued side effects.
    pub fn take_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn file_filter(&self) -> &str {
        &self.file_filter
    }

    pub fn rename_draft(&self) -> &str {
        &self.rename_draft
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    pub fn player(&self) -> &PlayerController<M> {
        &self.player
    }

    pub fn nav(&self) -> &NavigationBridge<F> {
        &self.nav
    }

    pub fn current(&self) -> Option<&RelativePath> {
        self.player.current()
    }
}
