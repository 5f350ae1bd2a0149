//! Checked access to the browser globals.

use wasm_bindgen::UnwrapThrowExt;
use web_sys::{Document, Window};

/// Returns the global `window` object.
///
/// Throws when no `window` exists, which only happens outside a
/// browser environment.
pub fn window() -> Window {
    web_sys::window().expect_throw("JavaScript `window` is undefined")
}

/// Returns the active `document`.
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("JavaScript `window.document` is undefined")
}
