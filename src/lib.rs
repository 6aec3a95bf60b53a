//! Browser media library: a file tree, a video player with hover preview,
//! URL-fragment navigation and keyboard shortcuts.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
