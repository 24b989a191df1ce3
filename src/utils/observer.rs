//! IntersectionObserver helper
//!
//! Scroll-triggered reveals and counters only need "tell me once when this
//! element becomes visible", so that is all this wraps.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Invoke `on_visible` the first time `target` intersects the viewport at
/// the given threshold, then stop observing. Observer construction failures
/// are swallowed; the element simply never animates.
pub fn observe_once(target: &web_sys::Element, threshold: f64, on_visible: impl FnOnce() + 'static) {
    let mut on_visible = Some(on_visible);

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.disconnect();
                    if let Some(callback) = on_visible.take() {
                        callback();
                    }
                    break;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        observer.observe(target);
    }

    // The observer owns no Rust state; leak the closure so it outlives us.
    callback.forget();
}
