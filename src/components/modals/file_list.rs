//! Flat list of every file, with a local filter.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Command;
use crate::models::Modal;

stylance::import_crate_style!(css, "src/components/modals/modals.module.css");

#[component]
pub fn FileListDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = move || ctx.session.with(|s| s.modal() == Modal::FileList);
    let entries = move || ctx.session.with(|s| s.file_list_entries());
    let filter = move || ctx.session.with(|s| s.file_filter().to_string());

    let on_filter = move |ev: ev::Event| {
        ctx.run(|s| s.set_file_filter(event_target_value(&ev)));
    };

    view! {
        <Show when=open>
            <div class=css::backdrop on:click=move |_| ctx.command(Command::CloseModals)>
                <div class=css::dialogWide role="dialog" aria-label="All files" on:click=|ev| ev.stop_propagation()>
                    <div class=css::header>
                        <span class=css::title>"All files"</span>
                        <button class=css::close title="Close" on:click=move |_| ctx.command(Command::CloseModals)>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <input
                        class=css::input
                        type="search"
                        placeholder="Filter"
                        prop:value=filter
                        on:input=on_filter
                    />
                    <div class=css::list>
                        <For
                            each=entries
                            key=|entry| entry.path.clone()
                            children=move |entry| {
                                let path = entry.path.clone();
                                view! {
                                    <a
                                        class=css::entry
                                        href="#"
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.prevent_default();
                                            ctx.run(|s| s.pick_from_list(path.clone()));
                                        }
                                    >
                                        {entry.label}
                                    </a>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}
