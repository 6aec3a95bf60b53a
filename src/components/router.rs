//! Application router component.
//!
//! The URL fragment names the file that should be playing. Browser
//! back/forward and manual edits fire `hashchange`, which replays the
//! select-and-expand sequence without refetching the tree.
//!
//! Global keyboard shortcuts are wired here as well, since both listeners
//! live on the window for the lifetime of the app.

use leptos::{ev, prelude::*};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::Layout;
use crate::config::dom_ids;
use crate::core::{KeyInput, commands};
use crate::utils::dom;

impl From<&ev::KeyboardEvent> for KeyInput {
    fn from(ev: &ev::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
        }
    }
}

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.run(|s| s.on_fragment_changed());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let keys = window_event_listener(ev::keydown, move |ev| {
        let input = KeyInput::from(&ev);
        let focus = dom::focus_target(dom_ids::RENAME_INPUT);
        if let Some(dispatch) = commands::resolve(&input, focus) {
            if dispatch.prevent_default {
                ev.prevent_default();
            }
            ctx.command(dispatch.command);
        }
    });
    on_cleanup(move || keys.remove());

    view! { <Layout /> }
}
