//! Utility modules for browser access, networking and formatting.
//!
//! Provides:
//! - [`console`] - Console logging, silent off the wasm target
//! - [`dom`] - Window, fragment, focus and geometry helpers
//! - [`fetch_json`], [`post_json`] - Network requests with timeout
//! - [`format`] - Human-readable sizes and timestamps

pub mod console;
pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{fetch_json, post_json};
