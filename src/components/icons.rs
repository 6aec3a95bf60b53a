//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as File, LuFolder as Folder, LuList as List, LuMaximize as Fullscreen,
        LuPause as Pause, LuPencil as Edit, LuPlay as Play, LuRotateCw as Rotate,
        LuSearch as Search, LuSkipBack as Prev, LuSkipForward as Next, LuVolume2 as Volume,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Rotate, BsArrowsFullscreen as Fullscreen,
        BsFileEarmarkPlay as File, BsFolderFill as Folder, BsListUl as List,
        BsPauseFill as Pause, BsPencil as Edit, BsPlayFill as Play, BsSearch as Search,
        BsSkipEndFill as Next, BsSkipStartFill as Prev, BsVolumeUpFill as Volume,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(PLAY, Play);
themed_icon!(PAUSE, Pause);
themed_icon!(PREV, Prev);
themed_icon!(NEXT, Next);
themed_icon!(ROTATE, Rotate);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(VOLUME, Volume);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(LIST, List);
themed_icon!(EDIT, Edit);
