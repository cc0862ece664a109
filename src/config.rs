//! Reader configuration: content endpoints and theme persistence keys.
//!
//! Values default to the conventional static layout (`posts/posts.json` with
//! bodies beside it). A hosting page may override them with `data-*`
//! attributes on the `<html>` element:
//!
//! - `data-manifest`: manifest URL (default `posts/posts.json`)
//! - `data-posts-base`: directory holding post bodies (default `posts`)
//! - `data-theme-key`: `localStorage` key for the theme (default `theme`)

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_MANIFEST_URL: &str = "posts/posts.json";
pub const DEFAULT_POSTS_BASE: &str = "posts";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    pub manifest_url: String,
    pub posts_base: String,
    pub theme_storage_key: String,
    pub theme_attribute: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_owned(),
            posts_base: DEFAULT_POSTS_BASE.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            theme_attribute: THEME_ATTRIBUTE.to_owned(),
        }
    }
}

impl BlogConfig {
    /// Build a config from a key lookup, falling back to defaults for
    /// missing or blank values.
    ///
    /// Recognised keys: `manifest`, `posts-base`, `theme-key`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let defaults = Self::default();
        Self {
            manifest_url: read("manifest").unwrap_or(defaults.manifest_url),
            posts_base: read("posts-base")
                .map(|base| normalize_base(&base))
                .unwrap_or(defaults.posts_base),
            theme_storage_key: read("theme-key").unwrap_or(defaults.theme_storage_key),
            theme_attribute: defaults.theme_attribute,
        }
    }

    /// Read overrides from `data-*` attributes on the document root.
    pub fn from_document() -> Self {
        Self::from_lookup(crate::util::dom::root_data_attribute)
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}
