//! Library search box.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/library/library.module.css");

/// Search input; Enter or the search button reloads the tree filtered.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let value = move || ctx.session.with(|s| s.search().to_string());

    let on_input = move |ev: ev::Event| {
        ctx.run_quiet(|s| s.set_search(event_target_value(&ev)));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ctx.run(|s| s.submit_search());
        }
    };

    view! {
        <div class=css::search role="search">
            <input
                class=css::searchInput
                type="search"
                placeholder="Search library"
                prop:value=value
                on:input=on_input
                on:keydown=on_keydown
            />
            <button
                class=css::searchButton
                title="Search"
                on:click=move |_| { ctx.run(|s| s.submit_search()); }
            >
                <Icon icon=ic::SEARCH />
            </button>
            <button
                class=css::searchButton
                title="Clear search"
                on:click=move |_| { ctx.run(|s| s.clear_search()); }
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
