//! Transport controls.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DEFAULT_VOLUME, dom_ids};
use crate::core::Command;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/player/player.module.css");

#[component]
pub fn Controls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let play_icon = move || {
        if ctx.session.with(|s| s.player().is_paused()) {
            view! { <Icon icon=ic::PLAY /> }
        } else {
            view! { <Icon icon=ic::PAUSE /> }
        }
    };

    let on_volume = move |ev: ev::Event| {
        if let Ok(volume) = event_target_value(&ev).parse::<f64>() {
            ctx.run_quiet(|s| s.set_volume(volume));
        }
    };

    let button = move |title: &'static str, icon: icondata::Icon, command: Command| {
        view! {
            <button class=css::control title=title on:click=move |_| ctx.command(command)>
                <Icon icon=icon />
            </button>
        }
    };

    view! {
        <div class=css::controls>
            {button("Previous (v)", ic::PREV, Command::PrevSibling)}
            <button class=css::control title="Play / pause (space)" on:click=move |_| ctx.command(Command::TogglePlay)>
                {play_icon}
            </button>
            {button("Next (c)", ic::NEXT, Command::NextSibling)}
            <span class=css::clock>{move || ctx.clock.get()}</span>
            <label class=css::volume title="Volume">
                <Icon icon=ic::VOLUME />
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.01"
                    value=DEFAULT_VOLUME.to_string()
                    on:input=on_volume
                />
            </label>
            <span class=css::spacer></span>
            {button("Rename (e)", ic::EDIT, Command::OpenRename)}
            {button("All files (l)", ic::LIST, Command::OpenFileList)}
            {button("Rotate (r)", ic::ROTATE, Command::Rotate)}
            <button
                class=css::control
                title="Fullscreen"
                on:click=move |_| dom::toggle_fullscreen(dom_ids::PLAYER_WRAP)
            >
                <Icon icon=ic::FULLSCREEN />
            </button>
        </div>
    }
}
