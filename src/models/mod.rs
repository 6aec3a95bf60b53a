//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`LibraryNode`], [`RelativePath`] - Media library representation
//! - [`NodeView`], [`TreeState`], [`Modal`] - View models rendered by components
//! - [`Point`], [`Rect`], [`Size`] - Pointer and layout geometry

mod geometry;
mod library;
mod view;

pub use geometry::{Point, Rect, Size};
pub use library::{LibraryNode, RelativePath};
pub use view::{Modal, NodeView, TreeState};
