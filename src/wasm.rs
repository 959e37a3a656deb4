//! Expose the `flatten_diff` crate's functionality to WebAssembly.
//!
//! Diffs cross the boundary as JSON strings in the same format that the
//! `serde` feature reads and writes.

use wasm_bindgen::prelude::*;

use crate::DiffEntry;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::flatten_text_diff`. Takes the multiline base
/// string and its line-level diff as JSON, returns the flattened diff as JSON.
///
/// # Errors
///
/// If the diff isn't valid JSON or it can't be flattened.
#[wasm_bindgen(js_name = flattenStringDiff)]
pub fn flatten_string_diff(base: &str, diff: &str) -> Result<String, JsError> {
    set_panic_hook();

    let diff = parse_diff(diff)?;
    let flattened = crate::flatten_text_diff(base, &diff)?;

    Ok(serde_json::to_string(&flattened)?)
}

/// WASM wrapper around `crate::apply_flat_diff`.
///
/// # Errors
///
/// If the diff isn't valid JSON or it can't be applied to `text`.
#[wasm_bindgen(js_name = applyFlatDiff)]
pub fn apply_flat_diff(text: &str, diff: &str) -> Result<String, JsError> {
    set_panic_hook();

    let diff = parse_diff(diff)?;

    Ok(crate::apply_flat_diff(text, &diff)?)
}

fn parse_diff(diff: &str) -> Result<Vec<DiffEntry<String>>, JsError> {
    serde_json::from_str(diff).map_err(|error| JsError::new(&format!("Invalid diff: {error}")))
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
