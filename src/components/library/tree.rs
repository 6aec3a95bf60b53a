//! Collapsible library tree.
//!
//! Rows are rebuilt only when a new listing is installed; expansion and the
//! selection mark are fine-grained per row.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{NodeView, RelativePath, TreeState};

stylance::import_crate_style!(css, "src/components/library/library.module.css");

#[component]
pub fn LibraryTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let revision = Memo::new(move |_| ctx.session.with(|s| s.tree().revision()));

    let body = move || {
        revision.track();
        ctx.session.with_untracked(|s| match s.tree().state() {
            TreeState::Empty => ().into_any(),
            TreeState::Loading => view! { <div class=css::placeholder>"Loading…"</div> }.into_any(),
            TreeState::Failed(message) => {
                view! { <div class=css::error role="alert">{message.clone()}</div> }.into_any()
            }
            TreeState::Ready(rows) => render_rows(rows.clone()),
        })
    };

    view! {
        <nav class=css::tree aria-label="Library">
            {body}
        </nav>
    }
}

fn render_rows(rows: Vec<NodeView>) -> AnyView {
    rows.into_iter()
        .map(|row| match row {
            NodeView::Folder {
                name,
                path,
                children,
            } => view! { <FolderRow name=name path=path rows=children /> }.into_any(),
            NodeView::Leaf {
                name,
                path,
                size_label,
                ..
            } => view! { <LeafRow name=name path=path size_label=size_label /> }.into_any(),
        })
        .collect_view()
        .into_any()
}

#[component]
fn FolderRow(name: String, path: String, rows: Vec<NodeView>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let key = path.clone();
    let expanded = Signal::derive(move || ctx.session.with(|s| s.tree().is_expanded(&key)));

    let toggle = move |_: leptos::ev::MouseEvent| {
        ctx.run(|s| s.toggle_folder(&path));
    };

    view! {
        <div class=css::folder>
            <div
                class=css::folderHeader
                on:click=toggle
                role="button"
                aria-expanded=move || expanded.get().to_string()
            >
                <span class=css::icon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
                <span class=css::name>{name}</span>
            </div>
            <div class=css::children style:display=move || if expanded.get() { "block" } else { "none" }>
                {render_rows(rows)}
            </div>
        </div>
    }
}

#[component]
fn LeafRow(name: String, path: RelativePath, size_label: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let data_path = path.as_str().to_string();
    let marked = path.clone();
    let is_selected =
        Signal::derive(move || ctx.session.with(|s| s.tree().selected() == Some(&marked)));

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::leaf, css::selected)
        } else {
            css::leaf.to_string()
        }
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.run(|s| s.click_leaf(&path));
    };

    view! {
        <div
            class=item_class
            data-path=data_path
            on:click=handle_click
            role="treeitem"
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <span class=css::name>{name}</span>
            <span class=css::size>{size_label}</span>
        </div>
    }
}
