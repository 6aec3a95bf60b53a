//! UI components built with Leptos.
//!
//! - [`router`] - Fragment and keyboard wiring (main entry point)
//! - [`Layout`] - Page layout
//! - [`library`] - Search box and file tree
//! - [`player`] - Video player, hover preview and controls
//! - [`modals`] - Rename and file-list dialogs
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar

pub mod icons;
mod layout;
pub mod library;
pub mod modals;
pub mod player;
pub mod router;
pub mod status;

pub use layout::Layout;
pub use router::AppRouter;
