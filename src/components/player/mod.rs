//! Video player: active element, hover preview and transport controls.

mod controls;
mod media;
#[allow(clippy::module_inception)]
mod player;
mod seek_strip;

pub use controls::Controls;
pub use media::VideoMedia;
pub use player::Player;
pub use seek_strip::SeekStrip;
