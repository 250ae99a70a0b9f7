//! Browser implementation of `ThemeHost`.
//!
//! Persists the preference in `localStorage`, reads and watches
//! `(prefers-color-scheme: dark)`, and sets the resolved theme as a class on
//! the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Without the `hydrate` feature every method is an inert no-op so SSR stays
//! deterministic; the store is never initialized on the server anyway.

use std::rc::Rc;

use crate::state::theme::ResolvedTheme;
use crate::state::theme_store::{ThemeHost, ThemeHostError};

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeHost;

/// Live `change` listener on the color-scheme media query.
///
/// Dropping it removes the listener.
pub struct MediaQueryWatch {
    #[cfg(feature = "hydrate")]
    query: web_sys::MediaQueryList,
    #[cfg(feature = "hydrate")]
    listener: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl Drop for MediaQueryWatch {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let _ = self
                .query
                .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, ThemeHostError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ThemeHostError::StorageUnavailable)
}

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl ThemeHost for BrowserThemeHost {
    type Watch = MediaQueryWatch;

    fn load_preference(&self, key: &str) -> Result<Option<String>, ThemeHostError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| ThemeHostError::Storage(js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(ThemeHostError::StorageUnavailable)
        }
    }

    fn save_preference(&self, key: &str, value: &str) -> Result<(), ThemeHostError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| ThemeHostError::Storage(js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(ThemeHostError::StorageUnavailable)
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            dark_query().map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn watch_prefers_dark(&self, on_change: Rc<dyn Fn(bool)>) -> Result<Self::Watch, ThemeHostError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let query = dark_query().ok_or(ThemeHostError::MediaQueryUnavailable)?;
            let listener = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
                on_change(ev.matches());
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
            query
                .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .map_err(|e| ThemeHostError::Listener(js_error(&e)))?;
            Ok(MediaQueryWatch { query, listener })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            Err(ThemeHostError::MediaQueryUnavailable)
        }
    }

    fn apply(&self, theme: ResolvedTheme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                let _ = class_list.remove_2("light", "dark");
                let _ = class_list.add_1(theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
