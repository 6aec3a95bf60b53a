//! Library panel: search box and collapsible file tree.

mod search;
mod tree;

pub use search::SearchBar;
pub use tree::LibraryTree;
