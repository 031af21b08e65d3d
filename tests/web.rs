//! Browser-side tests for the fetch and routing helpers.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use prism_storage::core::error::FetchError;
use prism_storage::models::{Manifest, Route, StoragePath};
use prism_storage::utils::{dom, fetch_json, fetch_text};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn missing_manifest_is_an_error() {
    let result = fetch_json::<Manifest>("/storage/does-not-exist/files.json").await;
    assert!(result.is_err());
}

#[wasm_bindgen_test]
async fn missing_text_file_is_an_error() {
    let result = fetch_text("/storage/does-not-exist/readme.txt").await;
    assert!(matches!(
        result,
        Err(FetchError::HttpError(_) | FetchError::NetworkError(_))
    ));
}

#[wasm_bindgen_test]
fn hash_round_trips_through_location() {
    dom::replace_hash("#/documents/notes");
    assert_eq!(Route::current().path, StoragePath::parse("documents/notes"));

    dom::replace_hash("#/");
    assert!(Route::current().path.is_root());
}
