//! Seek strip with progress fill and hover preview.
//!
//! Pointer moves seek the hidden preview element (throttled by the player
//! controller); each completed seek draws one frame into the preview canvas.
//! Without a canvas or preview element only click-to-seek remains.

use leptos::html::{Canvas, Div, Video};
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

use crate::app::AppContext;
use crate::core::HoverGeometry;
use crate::models::{Point, Size};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/player/player.module.css");

/// Draw the preview element's current frame over the whole canvas.
fn draw_frame(canvas: NodeRef<Canvas>, video: NodeRef<Video>) {
    let (Some(canvas), Some(video)) = (canvas.get_untracked(), video.get_untracked()) else {
        return;
    };
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let _ = context.draw_image_with_html_video_element_and_dw_and_dh(
        &video,
        0.0,
        0.0,
        canvas.width() as f64,
        canvas.height() as f64,
    );
}

#[component]
pub fn SeekStrip(wrap_ref: NodeRef<Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let strip_ref = NodeRef::<Div>::new();

    let on_move = move |ev: ev::MouseEvent| {
        let (Some(strip), Some(wrap), Some(canvas)) = (
            strip_ref.get_untracked(),
            wrap_ref.get_untracked(),
            ctx.preview_canvas.get_untracked(),
        ) else {
            return;
        };
        let geometry = HoverGeometry {
            pointer: Point::new(ev.client_x() as f64, ev.client_y() as f64),
            strip: dom::bounding_rect(&strip),
            player: dom::bounding_rect(&wrap),
            preview: Size::new(canvas.width() as f64, canvas.height() as f64),
        };
        if let Some(Some(frame)) = ctx.run_quiet(|s| s.hover(geometry, dom::now_ms())) {
            ctx.preview_position.set(Some(frame.position));
        }
    };

    let on_leave = move |_: ev::MouseEvent| {
        ctx.run_quiet(|s| s.hover_end());
        ctx.preview_position.set(None);
    };

    let on_click = move |ev: ev::MouseEvent| {
        let Some(strip) = strip_ref.get_untracked() else {
            return;
        };
        let rect = dom::bounding_rect(&strip);
        ctx.run_quiet(|s| s.click_seek(ev.client_x() as f64, rect));
    };

    let on_seeked = move |_| {
        if ctx.run_quiet(|s| s.preview_seeked()) == Some(true) {
            draw_frame(ctx.preview_canvas, ctx.preview_video);
        }
    };

    let fill_width = move || format!("{:.3}%", ctx.progress.get() * 100.0);
    let preview_display = move || {
        if ctx.preview_position.get().is_some() {
            "block"
        } else {
            "none"
        }
    };
    let preview_left = move || {
        ctx.preview_position
            .get()
            .map(|p| format!("{}px", p.left))
            .unwrap_or_default()
    };
    let preview_top = move || {
        ctx.preview_position
            .get()
            .map(|p| format!("{}px", p.top))
            .unwrap_or_default()
    };

    view! {
        <div
            class=css::strip
            node_ref=strip_ref
            on:mousemove=on_move
            on:mouseleave=on_leave
            on:click=on_click
        >
            <div class=css::fill style:width=fill_width></div>
        </div>
        <canvas
            node_ref=ctx.preview_canvas
            class=css::preview
            width="160"
            height="90"
            style:display=preview_display
            style:left=preview_left
            style:top=preview_top
        ></canvas>
        <video
            node_ref=ctx.preview_video
            class=css::hidden
            preload="auto"
            muted=true
            on:seeked=on_seeked
        />
    }
}
