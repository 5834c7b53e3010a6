//! WASM bindings for in-browser rendering.
//!
//! Each function takes the study data as a JSON string and returns the inner
//! markup of the mount point, ready to be assigned to `innerHTML`. The host
//! page keeps the review record itself and passes it in as the JSON text it
//! stored.

use wasm_bindgen::prelude::*;

use crate::config::ViewConfig;
use crate::export::synthesize_html;
use crate::model::Document;
use crate::review::MemoryStore;
use crate::view::{ReviewView, StudyView};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render the study listing.
///
/// A document that fails to decode renders as the error message, the same
/// way the study view reports it.
#[wasm_bindgen]
pub fn render_study_html(data_json: &str) -> String {
    let mut view = StudyView::new(ViewConfig::default());
    view.finish_load(Document::from_json(data_json));
    synthesize_html(view.tree())
}

/// Render the review listing for the given stored record (a JSON array of
/// item ids; anything else counts as empty).
#[wasm_bindgen]
pub fn render_review_html(data_json: &str, checked_json: Option<String>) -> String {
    let store = match checked_json {
        Some(raw) => MemoryStore::with_record(raw),
        None => MemoryStore::new(),
    };
    let mut view = ReviewView::new(ViewConfig::default(), store);
    view.finish_load(Document::from_json(data_json));
    synthesize_html(view.tree())
}

/// Decode the data file and report the number of items, or the load error.
#[wasm_bindgen]
pub fn count_items(data_json: &str) -> Result<usize, JsValue> {
    Document::from_json(data_json)
        .map(|doc| doc.item_count())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
