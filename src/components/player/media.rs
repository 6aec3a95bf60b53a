//! [`MediaElement`] over a mounted `<video>`.
//!
//! Every operation is a no-op while the element is not mounted.

use leptos::html::Video;
use leptos::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlVideoElement;

use crate::core::error::MediaError;
use crate::core::{MediaElement, RotationLayout};
use crate::models::Size;
use crate::utils::{console, dom};

/// `HAVE_METADATA` ready state.
const HAVE_METADATA: u16 = 1;

#[derive(Clone, Copy)]
pub struct VideoMedia {
    node: NodeRef<Video>,
}

impl VideoMedia {
    pub fn new(node: NodeRef<Video>) -> Self {
        Self { node }
    }

    fn element(&self) -> Option<HtmlVideoElement> {
        self.node.get_untracked()
    }

    /// Box of the element's parent, which a rotated video must fit in.
    pub fn container_size(&self) -> Option<Size> {
        let parent = self.element()?.parent_element()?;
        Some(dom::bounding_rect(&parent).size())
    }
}

impl MediaElement for VideoMedia {
    fn set_source(&self, url: &str) {
        if let Some(video) = self.element() {
            video.set_src(url);
        }
    }

    fn clear_source(&self) {
        if let Some(video) = self.element() {
            let _ = video.remove_attribute("src");
        }
    }

    fn load(&self) {
        if let Some(video) = self.element() {
            video.load();
        }
    }

    fn has_metadata(&self) -> bool {
        self.element()
            .is_some_and(|video| video.ready_state() >= HAVE_METADATA)
    }

    fn play(&self) -> Result<(), MediaError> {
        let video = self.element().ok_or(MediaError::Unavailable)?;
        let promise = video
            .play()
            .map_err(|e| MediaError::PlaybackRejected(format!("{:?}", e)))?;
        // Rejections (autoplay policy) arrive later and are only logged.
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                console::info(&format!("playback not started: {:?}", e));
            }
        });
        Ok(())
    }

    fn pause(&self) {
        if let Some(video) = self.element() {
            let _ = video.pause();
        }
    }

    fn is_paused(&self) -> bool {
        self.element().is_none_or(|video| video.paused())
    }

    fn current_time(&self) -> f64 {
        self.element().map(|video| video.current_time()).unwrap_or(0.0)
    }

    fn seek(&self, time: f64) {
        if let Some(video) = self.element() {
            video.set_current_time(time);
        }
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.element()?.duration();
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }

    fn set_volume(&self, volume: f64) {
        if let Some(video) = self.element() {
            video.set_volume(volume);
        }
    }

    fn apply_rotation(&self, layout: &RotationLayout) {
        let Some(video) = self.element() else { return };
        let style = web_sys::HtmlElement::style(&video);
        let px = |v: Option<f64>| v.map(|v| format!("{}px", v)).unwrap_or_default();
        let (size, fit) = if layout.fill {
            ("100%", "")
        } else {
            ("auto", "contain")
        };
        let _ = style.set_property("transform-origin", "center center");
        let _ = style.set_property("transform", &format!("rotate({}deg)", layout.degrees));
        let _ = style.set_property("max-width", &px(layout.max_width));
        let _ = style.set_property("max-height", &px(layout.max_height));
        let _ = style.set_property("width", size);
        let _ = style.set_property("height", size);
        let _ = style.set_property("object-fit", fit);
        let _ = style.set_property("width", size);
        let _ = style.set_property("height", size);
        let _ = style.set_property("object-fit", fit);
    }
}
