//! Page layout: library panel beside the player, status bar below.

use leptos::prelude::*;

use crate::components::library::{LibraryTree, SearchBar};
use crate::components::modals::{FileListDialog, RenameDialog};
use crate::components::player::Player;
use crate::components::status::Status;

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class=css::page>
            <main class=css::main>
                <aside class=css::sidebar>
                    <SearchBar />
                    <LibraryTree />
                </aside>
                <Player />
            </main>
            <Status />
        </div>
        <RenameDialog />
        <FileListDialog />
    }
}
