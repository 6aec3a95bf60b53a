//! Modal dialogs: rename and the flat file list.
//!
//! Both close on `Escape` (handled globally) or a click on the backdrop.

mod file_list;
mod rename;

pub use file_list::FileListDialog;
pub use rename::RenameDialog;
