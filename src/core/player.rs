//! Player controller.
//!
//! Owns the visible media element and a hidden preview element that is only
//! used to decode frames for the seek-strip hover preview. Both are reached
//! through [`MediaElement`], so the controller runs without a browser.
//!
//! # Metadata waits
//!
//! Autoplay has to wait until the new source has metadata. Every call to
//! [`PlayerController::set_current`] starts a new load generation and, when
//! it has to wait, hands out a [`LoadTicket`]. Only the ticket of the latest
//! generation can start playback, and only once; tickets from superseded
//! loads are ignored.

use super::api::stream_url;
use super::error::MediaError;
use crate::config::{self, ApiConfig};
use crate::models::{Point, Rect, RelativePath, Size};
use crate::utils::format::format_timestamp;

/// One playable media surface.
pub trait MediaElement {
    fn set_source(&self, url: &str);
    /// Remove the source attribute entirely.
    fn clear_source(&self);
    fn load(&self);
    /// `true` once the element reports at least `HAVE_METADATA`.
    fn has_metadata(&self) -> bool;
    fn play(&self) -> Result<(), MediaError>;
    fn pause(&self);
    fn is_paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn seek(&self, time: f64);
    /// Duration in seconds, `None` while unknown, NaN, zero or infinite.
    fn duration(&self) -> Option<f64>;
    fn set_volume(&self, volume: f64);
    fn apply_rotation(&self, layout: &RotationLayout);
}

// =============================================================================
// Rotation
// =============================================================================

/// Display rotation in degrees, always a multiple of 90 below 360.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rotation(u16);

impl Rotation {
    pub fn degrees(self) -> u16 {
        self.0
    }

    pub fn clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    /// 90° or 270°: width and height trade places on screen.
    pub fn is_sideways(self) -> bool {
        self.0 % 180 != 0
    }
}

/// Presentation applied to the visible element after a rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationLayout {
    pub degrees: u16,
    /// Maximum displayed width in whole pixels. `None` when filling the
    /// container or when it could not be measured.
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    /// Fill the container (0°/180°) or size automatically within the
    /// maximums (90°/270°).
    pub fill: bool,
}

impl RotationLayout {
    /// Layout keeping a media element rotated by `rotation` fully inside a
    /// container of size `container`.
    pub fn fit(rotation: Rotation, container: Option<Size>) -> Self {
        let sideways = rotation.is_sideways();
        let (max_width, max_height) = match container {
            // A sideways element is measured before rotation, so its width
            // is bounded by the container height and vice versa.
            Some(size) if sideways => (Some(size.height.floor()), Some(size.width.floor())),
            _ => (None, None),
        };
        Self {
            degrees: rotation.degrees(),
            max_width,
            max_height,
            fill: !sideways,
        }
    }
}

// =============================================================================
// Hover Preview
// =============================================================================

/// Position of the preview canvas relative to the player box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewPosition {
    pub left: f64,
    pub top: f64,
}

impl PreviewPosition {
    /// Place the preview's bottom-right corner at the pointer, then clamp it
    /// inside `player` with `margin` on every side.
    pub fn track(pointer: Point, player: Rect, preview: Size, margin: f64) -> Self {
        let left = pointer.x - player.left - preview.width;
        let top = pointer.y - player.top - preview.height;
        Self {
            left: margin.max(left.min(player.width - preview.width - margin)),
            top: margin.max(top.min(player.height - preview.height - margin)),
        }
    }
}

/// Layout measured by the view for one pointer move over the seek strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverGeometry {
    pub pointer: Point,
    pub strip: Rect,
    pub player: Rect,
    pub preview: Size,
}

/// Result of a pointer move over the seek strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverFrame {
    pub position: PreviewPosition,
    /// Time the preview element was seeked to, `None` when throttled.
    pub seek_to: Option<f64>,
}

/// Load generation waiting for metadata before autoplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Proportional time for `x` within `strip`.
fn strip_time(x: f64, strip: Rect, duration: f64) -> Option<f64> {
    strip.horizontal_fraction(x).map(|f| f * duration)
}

// =============================================================================
// Controller
// =============================================================================

pub struct PlayerController<M> {
    api: ApiConfig,
    active: M,
    preview: M,
    current: Option<RelativePath>,
    rename_default: String,
    rotation: Rotation,
    generation: u64,
    pending_autoplay: Option<u64>,
    last_preview_seek_ms: Option<f64>,
    preview_seek_pending: bool,
    preview_position: Option<PreviewPosition>,
    paused: bool,
    progress: f64,
}

impl<M: MediaElement> PlayerController<M> {
    pub fn new(api: ApiConfig, active: M, preview: M) -> Self {
        Self {
            api,
            active,
            preview,
            current: None,
            rename_default: String::new(),
            rotation: Rotation::default(),
            generation: 0,
            pending_autoplay: None,
            last_preview_seek_ms: None,
            preview_seek_pending: false,
            preview_position: None,
            paused: true,
            progress: 0.0,
        }
    }

    /// Switch both media elements to `path`.
    ///
    /// With `autoplay`, playback starts right away if the active element
    /// already has metadata; otherwise a [`LoadTicket`] is returned and
    /// [`metadata_ready`](Self::metadata_ready) must be called with it when
    /// the element reports metadata. An empty or missing path clears both
    /// sources.
    pub fn set_current(&mut self, path: Option<&RelativePath>, autoplay: bool) -> Option<LoadTicket> {
        self.generation += 1;
        self.pending_autoplay = None;
        self.preview_seek_pending = false;
        self.progress = 0.0;

        let path = path.filter(|p| !p.is_empty());
        self.current = path.cloned();
        self.rename_default = path.map(|p| p.file_name().to_string()).unwrap_or_default();

        let Some(path) = path else {
            self.active.clear_source();
            self.preview.clear_source();
            return None;
        };

        let src = stream_url(&self.api, path);
        self.active.set_source(&src);
        self.preview.set_source(&src);
        self.preview.load();
        self.active.load();

        if !autoplay {
            return None;
        }
        if self.active.has_metadata() {
            self.try_play();
            return None;
        }
        self.pending_autoplay = Some(self.generation);
        Some(LoadTicket(self.generation))
    }

    /// Metadata became available for the load identified by `ticket`.
    ///
    /// Returns `true` if this started playback; stale or already-used
    /// tickets do nothing.
    pub fn metadata_ready(&mut self, ticket: LoadTicket) -> bool {
        if self.pending_autoplay != Some(ticket.0) {
            return false;
        }
        self.pending_autoplay = None;
        self.try_play();
        true
    }

    /// Start playback, ignoring refusals such as autoplay policy.
    fn try_play(&self) {
        if let Err(e) = self.active.play() {
            crate::utils::console::info(&format!("playback not started: {}", e));
        }
    }

    pub fn toggle_play(&mut self) {
        if self.active.is_paused() {
            self.try_play();
        } else {
            self.active.pause();
        }
    }

    /// Seek the visible media by `delta` seconds, clamped to `[0, duration]`.
    pub fn seek_by(&mut self, delta: f64) {
        let Some(duration) = self.active.duration() else {
            return;
        };
        let target = (self.active.current_time() + delta).clamp(0.0, duration);
        self.active.seek(target);
    }

    /// Seek the visible media to the time under a click on `strip`.
    pub fn click_seek(&mut self, x: f64, strip: Rect) -> Option<f64> {
        let duration = self.active.duration()?;
        let time = strip_time(x, strip, duration)?;
        self.active.seek(time);
        Some(time)
    }

    /// Track the pointer over the seek strip.
    ///
    /// Moves the preview canvas and seeks the hidden element, at most once
    /// per throttle window of real time (`now_ms`). Returns `None` while the
    /// preview duration is unknown.
    pub fn hover(&mut self, geometry: HoverGeometry, now_ms: f64) -> Option<HoverFrame> {
        let duration = self.preview.duration()?;
        let time = strip_time(geometry.pointer.x, geometry.strip, duration)?;

        let position = PreviewPosition::track(
            geometry.pointer,
            geometry.player,
            geometry.preview,
            config::preview::MARGIN_PX,
        );
        self.preview_position = Some(position);

        let throttled = self
            .last_preview_seek_ms
            .is_some_and(|last| now_ms - last < config::preview::SEEK_THROTTLE_MS);
        if throttled {
            return Some(HoverFrame {
                position,
                seek_to: None,
            });
        }

        self.last_preview_seek_ms = Some(now_ms);
        self.preview.seek(time);
        self.preview_seek_pending = true;
        Some(HoverFrame {
            position,
            seek_to: Some(time),
        })
    }

    /// The preview element finished seeking.
    ///
    /// Returns `true` when a frame should be drawn; a seek issued later
    /// supersedes an earlier one, so each completion draws the latest frame
    /// at most once.
    pub fn preview_seeked(&mut self) -> bool {
        std::mem::take(&mut self.preview_seek_pending) && self.preview_position.is_some()
    }

    /// Pointer left the seek strip.
    pub fn hover_end(&mut self) {
        self.preview_position = None;
        self.preview_seek_pending = false;
    }

    /// Rotate 90° clockwise and lay the element out inside `container`.
    pub fn rotate_clockwise(&mut self, container: Option<Size>) -> RotationLayout {
        self.rotation = self.rotation.clockwise();
        let layout = RotationLayout::fit(self.rotation, container);
        self.active.apply_rotation(&layout);
        layout
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.active.set_volume(volume.clamp(0.0, 1.0));
    }

    /// Record a `play`/`pause` event from the visible element.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Refresh the progress fraction from the visible element.
    pub fn sync_progress(&mut self) -> f64 {
        self.progress = match self.active.duration() {
            Some(duration) => (self.active.current_time() / duration).clamp(0.0, 1.0),
            None => 0.0,
        };
        self.progress
    }

    /// `elapsed / total` for the visible element, e.g. `1:05 / 42:10`.
    pub fn clock_label(&self) -> String {
        let total = self
            .active
            .duration()
            .map(format_timestamp)
            .unwrap_or_else(|| "--:--".to_string());
        format!("{} / {}", format_timestamp(self.active.current_time()), total)
    }

    pub fn current(&self) -> Option<&RelativePath> {
        self.current.as_ref()
    }

    /// Default text of the rename input: the current file name.
    pub fn rename_default(&self) -> &str {
        &self.rename_default
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn preview_position(&self) -> Option<PreviewPosition> {
        self.preview_position
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn active(&self) -> &M {
        &self.active
    }

    pub fn preview(&self) -> &M {
        &self.preview
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct FakeState {
        src: Option<String>,
        loads: usize,
        metadata: bool,
        plays: usize,
        refuse_play: bool,
        paused: bool,
        time: f64,
        duration: Option<f64>,
        rotation: Option<RotationLayout>,
    }

    #[derive(Clone, Default)]
    struct FakeMedia(Rc<RefCell<FakeState>>);

    impl MediaElement for FakeMedia {
        fn set_source(&self, url: &str) {
            let mut s = self.0.borrow_mut();
            s.src = Some(url.to_string());
            s.metadata = false;
        }
        fn clear_source(&self) {
            self.0.borrow_mut().src = None;
        }
        fn load(&self) {
            self.0.borrow_mut().loads += 1;
        }
        fn has_metadata(&self) -> bool {
            self.0.borrow().metadata
        }
        fn play(&self) -> Result<(), MediaError> {
            let mut s = self.0.borrow_mut();
            if s.refuse_play {
                return Err(MediaError::PlaybackRejected("NotAllowedError".to_string()));
            }
            s.plays += 1;
            s.paused = false;
            Ok(())
        }
        fn pause(&self) {
            self.0.borrow_mut().paused = true;
        }
        fn is_paused(&self) -> bool {
            self.0.borrow().paused
        }
        fn current_time(&self) -> f64 {
            self.0.borrow().time
        }
        fn seek(&self, time: f64) {
            self.0.borrow_mut().time = time;
        }
        fn duration(&self) -> Option<f64> {
            self.0.borrow().duration
        }
        fn set_volume(&self, _volume: f64) {}
        fn apply_rotation(&self, layout: &RotationLayout) {
            self.0.borrow_mut().rotation = Some(*layout);
        }
    }

    fn controller() -> (PlayerController<FakeMedia>, FakeMedia, FakeMedia) {
        let active = FakeMedia::default();
        let preview = FakeMedia::default();
        let player = PlayerController::new(ApiConfig::default(), active.clone(), preview.clone());
        (player, active, preview)
    }

    fn geometry(x: f64) -> HoverGeometry {
        HoverGeometry {
            pointer: Point::new(x, 380.0),
            strip: Rect::new(0.0, 370.0, 400.0, 20.0),
            player: Rect::new(0.0, 0.0, 400.0, 400.0),
            preview: Size::new(160.0, 90.0),
        }
    }

    #[test]
    fn test_set_current_loads_both_elements() {
        let (mut player, active, preview) = controller();
        let ticket = player.set_current(Some(&"b/c d.mp4".into()), false);
        assert!(ticket.is_none());

        let expected = "/api/stream?path=b%2Fc%20d.mp4";
        assert_eq!(active.0.borrow().src.as_deref(), Some(expected));
        assert_eq!(preview.0.borrow().src.as_deref(), Some(expected));
        assert_eq!(active.0.borrow().loads, 1);
        assert_eq!(preview.0.borrow().loads, 1);
        assert_eq!(player.rename_default(), "c d.mp4");
        assert_eq!(active.0.borrow().plays, 0);
    }

    #[test]
    fn test_set_current_empty_clears_sources() {
        let (mut player, active, preview) = controller();
        player.set_current(Some(&"a.mp4".into()), false);
        player.set_current(Some(&RelativePath::default()), true);

        assert!(active.0.borrow().src.is_none());
        assert!(preview.0.borrow().src.is_none());
        assert!(player.current().is_none());
        assert_eq!(player.rename_default(), "");
    }

    #[test]
    fn test_autoplay_waits_for_metadata_once() {
        let (mut player, active, _) = controller();
        let ticket = player.set_current(Some(&"a.mp4".into()), true).unwrap();
        assert_eq!(active.0.borrow().plays, 0);

        assert!(player.metadata_ready(ticket));
        assert!(!player.metadata_ready(ticket));
        assert_eq!(active.0.borrow().plays, 1);
    }

    #[test]
    fn test_newer_load_supersedes_ticket() {
        let (mut player, active, _) = controller();
        let stale = player.set_current(Some(&"a.mp4".into()), true).unwrap();
        let fresh = player.set_current(Some(&"b.mp4".into()), true).unwrap();

        assert!(!player.metadata_ready(stale));
        assert!(player.metadata_ready(fresh));
        assert_eq!(active.0.borrow().plays, 1);
    }

    #[test]
    fn test_autoplay_immediate_when_metadata_present() {
        #[derive(Clone, Default)]
        struct Ready(FakeMedia);
        impl MediaElement for Ready {
            fn set_source(&self, url: &str) {
                self.0.set_source(url);
                self.0 .0.borrow_mut().metadata = true;
            }
            fn clear_source(&self) {}
            fn load(&self) {}
            fn has_metadata(&self) -> bool {
                self.0.has_metadata()
            }
            fn play(&self) -> Result<(), MediaError> {
                self.0.play()
            }
            fn pause(&self) {}
            fn is_paused(&self) -> bool {
                true
            }
            fn current_time(&self) -> f64 {
                0.0
            }
            fn seek(&self, _time: f64) {}
            fn duration(&self) -> Option<f64> {
                None
            }
            fn set_volume(&self, _volume: f64) {}
            fn apply_rotation(&self, _layout: &RotationLayout) {}
        }

        let active = Ready::default();
        let mut player =
            PlayerController::new(ApiConfig::default(), active.clone(), Ready::default());
        assert!(player.set_current(Some(&"a.mp4".into()), true).is_none());
        assert_eq!(active.0 .0.borrow().plays, 1);
    }

    #[test]
    fn test_refused_playback_is_swallowed() {
        let (mut player, active, _) = controller();
        active.0.borrow_mut().refuse_play = true;
        let ticket = player.set_current(Some(&"a.mp4".into()), true).unwrap();
        assert!(player.metadata_ready(ticket));
        assert_eq!(active.0.borrow().plays, 0);
    }

    #[test]
    fn test_seek_by_clamps() {
        let (mut player, active, _) = controller();
        active.0.borrow_mut().duration = Some(100.0);
        active.0.borrow_mut().time = 98.0;
        player.seek_by(5.0);
        assert_eq!(active.0.borrow().time, 100.0);

        active.0.borrow_mut().time = 2.0;
        player.seek_by(-3.0);
        assert_eq!(active.0.borrow().time, 0.0);
    }

    #[test]
    fn test_seek_skipped_without_duration() {
        let (mut player, active, _) = controller();
        active.0.borrow_mut().time = 7.0;
        player.seek_by(5.0);
        assert_eq!(active.0.borrow().time, 7.0);
        assert_eq!(player.click_seek(10.0, Rect::new(0.0, 0.0, 100.0, 5.0)), None);
    }

    #[test]
    fn test_click_seek_is_proportional() {
        let (mut player, active, _) = controller();
        active.0.borrow_mut().duration = Some(120.0);
        let strip = Rect::new(50.0, 0.0, 200.0, 8.0);
        assert_eq!(player.click_seek(100.0, strip), Some(30.0));
        assert_eq!(active.0.borrow().time, 30.0);
        assert_eq!(player.click_seek(400.0, strip), Some(120.0));
    }

    #[test]
    fn test_hover_throttles_seeks() {
        let (mut player, _, preview) = controller();
        preview.0.borrow_mut().duration = Some(200.0);

        let first = player.hover(geometry(100.0), 1000.0).unwrap();
        assert_eq!(first.seek_to, Some(50.0));
        assert_eq!(preview.0.borrow().time, 50.0);

        let throttled = player.hover(geometry(200.0), 1030.0).unwrap();
        assert_eq!(throttled.seek_to, None);
        assert_eq!(preview.0.borrow().time, 50.0);

        let later = player.hover(geometry(200.0), 1061.0).unwrap();
        assert_eq!(later.seek_to, Some(100.0));
    }

    #[test]
    fn test_hover_requires_preview_duration() {
        let (mut player, _, _) = controller();
        assert!(player.hover(geometry(10.0), 0.0).is_none());
        assert!(player.preview_position().is_none());
    }

    #[test]
    fn test_preview_draws_once_per_seek() {
        let (mut player, _, preview) = controller();
        preview.0.borrow_mut().duration = Some(10.0);
        player.hover(geometry(100.0), 0.0);
        assert!(player.preview_seeked());
        assert!(!player.preview_seeked());

        player.hover(geometry(120.0), 100.0);
        player.hover_end();
        assert!(!player.preview_seeked());
        assert!(player.preview_position().is_none());
    }

    #[test]
    fn test_preview_position_tracks_and_clamps() {
        let player_box = Rect::new(10.0, 20.0, 400.0, 300.0);
        let preview = Size::new(160.0, 90.0);

        // Bottom-right corner at the pointer
        let pos = PreviewPosition::track(Point::new(300.0, 250.0), player_box, preview, 6.0);
        assert_eq!(pos, PreviewPosition { left: 130.0, top: 140.0 });

        // Near the top-left corner: pushed inside by the margin
        let pos = PreviewPosition::track(Point::new(15.0, 25.0), player_box, preview, 6.0);
        assert_eq!(pos, PreviewPosition { left: 6.0, top: 6.0 });

        // Beyond the bottom-right: clamped to the far edge minus margin
        let pos = PreviewPosition::track(Point::new(900.0, 900.0), player_box, preview, 6.0);
        assert_eq!(pos, PreviewPosition { left: 234.0, top: 204.0 });
    }

    #[test]
    fn test_rotation_cycles_and_fits() {
        let (mut player, active, _) = controller();
        let container = Some(Size::new(640.7, 360.2));

        let layout = player.rotate_clockwise(container);
        assert_eq!(layout.degrees, 90);
        assert_eq!(layout.max_width, Some(360.0));
        assert_eq!(layout.max_height, Some(640.0));
        assert!(!layout.fill);
        assert_eq!(active.0.borrow().rotation, Some(layout));

        let layout = player.rotate_clockwise(container);
        assert_eq!(layout.degrees, 180);
        assert_eq!(layout.max_width, None);
        assert_eq!(layout.max_height, None);
        assert!(layout.fill);

        player.rotate_clockwise(None);
        let layout = player.rotate_clockwise(None);
        assert_eq!(layout.degrees, 0);
        assert_eq!(layout.max_width, None);
        assert_eq!(player.rotation(), Rotation::default());
    }

    #[test]
    fn test_progress_and_toggle() {
        let (mut player, active, _) = controller();
        assert_eq!(player.sync_progress(), 0.0);

        active.0.borrow_mut().duration = Some(50.0);
        active.0.borrow_mut().time = 12.5;
        assert_eq!(player.sync_progress(), 0.25);

        assert_eq!(player.clock_label(), "0:12 / 0:50");

        active.0.borrow_mut().paused = true;
        player.toggle_play();
        assert!(!active.0.borrow().paused);
        player.toggle_play();
        assert!(active.0.borrow().paused);
    }
}
