//! Core logic of the media library, independent of the UI toolkit.
//!
//! This module provides:
//! - [`TreeStore`] rendering and sibling navigation over the library tree
//! - [`PlayerController`] driving the active and preview media elements
//! - [`NavigationBridge`] keeping the URL fragment in step with the selection
//! - [`commands::resolve`] mapping key presses to [`Command`]s
//! - [`Session`] tying them together

pub mod api;
pub mod commands;
pub mod error;
mod events;
pub mod navigation;
pub mod player;
pub mod rename;
pub mod search;
mod session;
mod tree;

pub use api::{HttpLibraryApi, LibraryApi, RenameRequest, RenameResponse};
pub use commands::{Command, Dispatch, FocusTarget, KeyInput};
pub use events::SelectionSink;
pub use navigation::{FragmentStore, NavigationBridge};
pub use player::{
    HoverFrame, HoverGeometry, LoadTicket, MediaElement, PlayerController, PreviewPosition,
    Rotation, RotationLayout,
};
pub use search::matches_search;
pub use session::{FileListEntry, Session, UiEffect};
pub use tree::{TreeStore, render};
