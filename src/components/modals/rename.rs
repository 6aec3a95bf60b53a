//! Rename dialog.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::dom_ids;
use crate::core::Command;
use crate::models::Modal;

stylance::import_crate_style!(css, "src/components/modals/modals.module.css");

/// Rename dialog.
///
/// `Enter` in the input is routed through the global shortcut handler, so
/// the dialog stays open for the next file after submitting.
#[component]
pub fn RenameDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = move || ctx.session.with(|s| s.modal() == Modal::Rename);
    let current = move || {
        ctx.session
            .with(|s| s.current().map(|p| p.to_string()).unwrap_or_default())
    };
    let draft = move || ctx.session.with(|s| s.rename_draft().to_string());

    let on_input = move |ev: ev::Event| {
        ctx.run_quiet(|s| s.set_rename_draft(event_target_value(&ev)));
    };

    view! {
        <Show when=open>
            <div class=css::backdrop on:click=move |_| ctx.command(Command::CloseModals)>
                <div class=css::dialog role="dialog" aria-label="Rename" on:click=|ev| ev.stop_propagation()>
                    <div class=css::header>
                        <span class=css::title>"Rename"</span>
                        <button class=css::close title="Close" on:click=move |_| ctx.command(Command::CloseModals)>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <div class=css::path>{current}</div>
                    <input
                        id=dom_ids::RENAME_INPUT
                        class=css::input
                        type="text"
                        autocomplete="off"
                        prop:value=draft
                        on:input=on_input
                    />
                    <div class=css::actions>
                        <button class=css::primary on:click=move |_| ctx.command(Command::SubmitRename)>
                            "Rename"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
