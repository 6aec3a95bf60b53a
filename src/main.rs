use leptos::prelude::*;
use vidtree::app::App;
use vidtree::config::{APP_NAME, dom_ids};
use vidtree::utils::console;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(dom_ids::APP_ROOT)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    console::info(&format!("{} starting", APP_NAME));
    mount_to(root, App).forget();
}
