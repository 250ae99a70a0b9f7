//! `requestAnimationFrame` scheduling. Browser only.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Schedule `on_frame` for the next animation frame.
///
/// The callback receives the frame timestamp in milliseconds. Returns
/// `false` if no frame could be requested, in which case `on_frame` is
/// dropped without running.
pub fn request_frame(on_frame: impl FnOnce(f64) + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let callback = Closure::once_into_js(on_frame);
    window
        .request_animation_frame(callback.unchecked_ref())
        .is_ok()
}
