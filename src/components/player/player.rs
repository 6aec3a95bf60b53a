//! Player container.

use leptos::html::Div;
use leptos::prelude::*;

use super::{Controls, SeekStrip};
use crate::app::AppContext;
use crate::config::dom_ids;
use crate::core::Command;

stylance::import_crate_style!(css, "src/components/player/player.module.css");

#[component]
pub fn Player() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let wrap_ref = NodeRef::<Div>::new();

    let current = move || {
        ctx.session
            .with(|s| s.current().map(|p| p.to_string()).unwrap_or_default())
    };

    let on_timeupdate = move |_| {
        if let Some((progress, clock)) = ctx.run_quiet(|s| (s.sync_progress(), s.clock_label())) {
            ctx.progress.set(progress);
            ctx.clock.set(clock);
        }
    };

    view! {
        <div id=dom_ids::PLAYER_WRAP class=css::wrap node_ref=wrap_ref>
            <div class=css::label title=current>{current}</div>
            <div class=css::stage>
                <video
                    node_ref=ctx.video
                    class=css::video
                    preload="metadata"
                    playsinline=true
                    on:click=move |_| ctx.command(Command::TogglePlay)
                    on:play=move |_| { ctx.run(|s| s.set_paused(false)); }
                    on:pause=move |_| { ctx.run(|s| s.set_paused(true)); }
                    on:timeupdate=on_timeupdate
                />
            </div>
            <SeekStrip wrap_ref=wrap_ref />
            <Controls />
        </div>
    }
}
