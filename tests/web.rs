//! Browser tests for the fragment and fetch helpers.

#![cfg(target_arch = "wasm32")]

use vidtree::core::error::FetchError;
use vidtree::core::{FragmentStore, NavigationBridge};
use vidtree::models::RelativePath;
use vidtree::utils::dom::{self, BrowserFragment};
use vidtree::utils::fetch_json;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_hash_round_trip() {
    dom::set_hash("b%2Fc.mp4");
    assert_eq!(dom::get_hash(), "b%2Fc.mp4");

    dom::clear_hash();
    assert_eq!(dom::get_hash(), "");
    let href = web_sys::window().unwrap().location().href().unwrap();
    assert!(!href.contains('#'));
}

#[wasm_bindgen_test]
fn test_bridge_over_location() {
    let bridge = NavigationBridge::new(BrowserFragment);
    let path = RelativePath::new("Shows/Épisode 1.mkv");

    bridge.publish(Some(&path));
    assert_eq!(bridge.current(), Some(path));

    bridge.publish(None);
    assert_eq!(BrowserFragment.read(), "");
}

#[wasm_bindgen_test]
async fn test_fetch_json_rejects_error_status() {
    let result = fetch_json::<serde_json::Value>("/vidtree-missing.json").await;
    assert_eq!(result, Err(FetchError::HttpError(404)));
}
