//! Status bar component.
//!
//! Shows the application name, the current file and the latest status
//! message (rename results and validation hints).

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | `vidtree \| path \| message` |
/// | Mobile (< 768px) | message only |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let current = Signal::derive(move || {
        ctx.session
            .with(|s| s.current().map(|p| p.to_string()).unwrap_or_else(|| "—".to_string()))
    });
    let message = Signal::derive(move || {
        ctx.session
            .with(|s| s.status().map(str::to_string).unwrap_or_default())
    });

    view! {
        <footer class=css::bar>
            <span class=css::brand>{APP_NAME}</span>
            <span class=css::path title=current>{current}</span>
            <span class=css::message role="status" aria-live="polite">{message}</span>
        </footer>
    }
}
