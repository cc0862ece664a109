//! Browser glue: root element attributes, `localStorage`, `matchMedia` and
//! window scrolling.
//!
//! TRADE-OFFS
//! ==========
//! Every call is best-effort. Missing browser objects or rejected calls are
//! logged and otherwise ignored; native builds compile these to no-ops.

use crate::config::BlogConfig;
use crate::state::theme::ThemeHost;

#[cfg(feature = "csr")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

/// Read `data-{key}` from the `<html>` element.
pub fn root_data_attribute(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        root_element()?.get_attribute(&format!("data-{key}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Scroll the window back to the top-left corner.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// [`ThemeHost`] backed by `localStorage`, the `prefers-color-scheme` media
/// query and an attribute on the `<html>` element.
#[derive(Clone, Debug)]
pub struct BrowserThemeHost {
    storage_key: String,
    attribute: String,
}

impl BrowserThemeHost {
    pub fn new(config: &BlogConfig) -> Self {
        Self { storage_key: config.theme_storage_key.clone(), attribute: config.theme_attribute.clone() }
    }
}

impl ThemeHost for BrowserThemeHost {
    fn stored(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(&self.storage_key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("reading theme preference failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.storage_key;
            None
        }
    }

    fn store(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.set_item(&self.storage_key, value) {
                    log::warn!("persisting theme preference failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").unwrap_or(None))
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    fn attribute(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            root_element()?.get_attribute(&self.attribute)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.attribute;
            None
        }
    }

    fn set_attribute(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = root_element() {
                if let Err(e) = el.set_attribute(&self.attribute, value) {
                    log::warn!("setting {} failed: {e:?}", self.attribute);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}
