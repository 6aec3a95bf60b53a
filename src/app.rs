//! Root application module.
//!
//! Contains the main App component and the AppContext that connects the
//! core [`Session`] to the browser.

use leptos::html::{Canvas, Video};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::components::player::VideoMedia;
use crate::config::{ApiConfig, dom_ids, tree};
use crate::core::{
    Command, HttpLibraryApi, LibraryApi, NavigationBridge, PlayerController, PreviewPosition,
    Session, UiEffect, rename,
};
use crate::utils::dom::{self, BrowserFragment};

/// The session as wired in the browser.
pub type AppSession = Session<VideoMedia, BrowserFragment>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The session; every mutation goes through [`AppContext::run`].
    pub session: RwSignal<AppSession, LocalStorage>,
    pub api: StoredValue<HttpLibraryApi>,
    pub video: NodeRef<Video>,
    /// Hidden element decoding hover preview frames.
    pub preview_video: NodeRef<Video>,
    pub preview_canvas: NodeRef<Canvas>,
    /// Where the preview canvas sits, `None` while hidden.
    pub preview_position: RwSignal<Option<PreviewPosition>>,
    /// Playback progress in `0.0..=1.0`.
    pub progress: RwSignal<f64>,
    /// Elapsed and total time of the active media.
    pub clock: RwSignal<String>,
}

impl AppContext {
    pub fn new(api: ApiConfig) -> Self {
        let video = NodeRef::<Video>::new();
        let preview_video = NodeRef::<Video>::new();
        let player = PlayerController::new(
            api.clone(),
            VideoMedia::new(video),
            VideoMedia::new(preview_video),
        );
        let session = Session::new(player, NavigationBridge::new(BrowserFragment));

        Self {
            session: RwSignal::new_local(session),
            api: StoredValue::new(HttpLibraryApi::new(api)),
            video,
            preview_video,
            preview_canvas: NodeRef::new(),
            preview_position: RwSignal::new(None),
            progress: RwSignal::new(0.0),
            clock: RwSignal::new(String::new()),
        }
    }

    /// Mutate the session, then perform the effects it queued.
    ///
    /// Returns `None` once the context has been disposed.
    pub fn run<R>(&self, f: impl FnOnce(&mut AppSession) -> R) -> Option<R> {
        let (out, effects) = self.session.try_update(|s| {
            let out = f(s);
            (out, s.take_effects())
        })?;
        self.perform(effects);
        Some(out)
    }

    /// Like [`run`](Self::run) without notifying subscribers.
    ///
    /// For high-frequency updates (pointer moves, time updates) whose
    /// visible result is published through a dedicated signal.
    pub fn run_quiet<R>(&self, f: impl FnOnce(&mut AppSession) -> R) -> Option<R> {
        let (out, effects) = self.session.try_update_untracked(|s| {
            let out = f(s);
            (out, s.take_effects())
        })?;
        self.perform(effects);
        Some(out)
    }

    /// Run a command, measuring the player first when it rotates.
    pub fn command(&self, command: Command) {
        let container = match command {
            Command::Rotate => VideoMedia::new(self.video).container_size(),
            _ => None,
        };
        self.run(|s| {
            if container.is_some() {
                s.set_player_box(container);
            }
            s.execute(command);
        });
    }

    fn perform(&self, effects: Vec<UiEffect>) {
        let ctx = *self;
        for effect in effects {
            match effect {
                UiEffect::FetchTree { generation, search } => spawn_local(async move {
                    let api = ctx.api.get_value();
                    let result = api.fetch_tree(search.as_deref()).await;
                    ctx.run(|s| s.apply_tree(generation, result));
                }),
                UiEffect::AwaitMetadata(ticket) => {
                    let Some(video) = self.video.get_untracked() else {
                        continue;
                    };
                    let callback = Closure::once_into_js(move || {
                        ctx.run(|s| s.metadata_ready(ticket));
                    });
                    let opts = web_sys::AddEventListenerOptions::new();
                    opts.set_once(true);
                    let _ = video.add_event_listener_with_callback_and_add_event_listener_options(
                        "loadedmetadata",
                        callback.unchecked_ref(),
                        &opts,
                    );
                }
                UiEffect::ScrollIntoView(path) => spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(tree::SCROLL_SETTLE_MS).await;
                    dom::scroll_row_into_view(path.as_str());
                }),
                UiEffect::FocusRenameInput => spawn_local(async move {
                    // Wait for the dialog to render
                    gloo_timers::future::TimeoutFuture::new(0).await;
                    dom::focus_and_select(dom_ids::RENAME_INPUT);
                }),
                UiEffect::SubmitRename(request) => spawn_local(async move {
                    let api = ctx.api.get_value();
                    let message = rename::submit(&api, &request).await;
                    ctx.run(|s| s.finish_rename(message));
                }),
            }
        }
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Starts the first library load
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ApiConfig::default());
    provide_context(ctx);

    ctx.run(|s| s.load_tree(None));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #111418;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
