//! Selection notifications.
//!
//! [`TreeStore`](super::TreeStore) reports every user-driven selection
//! through a [`SelectionSink`] instead of mutating the player or the URL
//! itself. The session is the production observer; tests collect into a
//! `Vec`.

use crate::models::RelativePath;

/// Observer for "selection changed" notifications.
pub trait SelectionSink {
    fn selection_changed(&mut self, path: RelativePath);
}

impl SelectionSink for Vec<RelativePath> {
    fn selection_changed(&mut self, path: RelativePath) {
        self.push(path);
    }
}

/// Keeps only the most recent notification.
impl SelectionSink for Option<RelativePath> {
    fn selection_changed(&mut self, path: RelativePath) {
        *self = Some(path);
    }
}
