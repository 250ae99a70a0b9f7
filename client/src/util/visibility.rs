//! One-shot viewport visibility via `IntersectionObserver`.
//!
//! Used by reveal-on-scroll widgets (counters, progress bars). Browser only.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live observer. Dropping it disconnects.
pub struct VisibilityWatch {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_visible` the first time `target` enters the viewport.
///
/// Later intersections are ignored. When the observer cannot be created the
/// element is treated as visible and `on_visible` runs immediately.
pub fn observe_once(target: &web_sys::Element, on_visible: impl FnOnce() + 'static) -> Option<VisibilityWatch> {
    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(on_visible))));

    let pending_cb = Rc::clone(&pending);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let visible = entries
            .iter()
            .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
        if !visible {
            return;
        }
        observer.disconnect();
        let run = pending_cb.borrow_mut().take();
        if let Some(run) = run {
            run();
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(target);
            Some(VisibilityWatch { observer, _callback: callback })
        }
        Err(e) => {
            log::debug!("IntersectionObserver unavailable, revealing immediately: {e:?}");
            let run = pending.borrow_mut().take();
            if let Some(run) = run {
                run();
            }
            None
        }
    }
}

/// Run `on_visible` once, the first time the element returned by `target`
/// scrolls into view.
///
/// `target` is read inside an effect, so it may return `None` until the node
/// is mounted. The observer lives as long as the effect and is disconnected
/// when the owning component unmounts.
pub fn reveal_once(target: impl Fn() -> Option<web_sys::Element> + 'static, on_visible: impl FnOnce() + 'static) {
    let on_visible = RefCell::new(Some(on_visible));
    let watch: RefCell<Option<VisibilityWatch>> = RefCell::new(None);

    Effect::new(move || {
        let Some(element) = target() else {
            return;
        };
        let Some(run) = on_visible.borrow_mut().take() else {
            return;
        };
        *watch.borrow_mut() = observe_once(&element, run);
    });
}
