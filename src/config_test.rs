use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_matches_static_layout() {
    let cfg = BlogConfig::default();
    assert_eq!(cfg.manifest_url, "posts/posts.json");
    assert_eq!(cfg.posts_base, "posts");
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.theme_attribute, "data-theme");
}

#[test]
fn from_lookup_without_overrides_is_default() {
    let cfg = BlogConfig::from_lookup(|_| None);
    assert_eq!(cfg, BlogConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = BlogConfig::from_lookup(lookup_from(&[
        ("manifest", "/content/index.json"),
        ("posts-base", "/content/"),
        ("theme-key", "reader-theme"),
    ]));
    assert_eq!(cfg.manifest_url, "/content/index.json");
    assert_eq!(cfg.posts_base, "/content");
    assert_eq!(cfg.theme_storage_key, "reader-theme");
    assert_eq!(cfg.theme_attribute, THEME_ATTRIBUTE);
}

#[test]
fn from_lookup_ignores_blank_values() {
    let cfg = BlogConfig::from_lookup(lookup_from(&[("manifest", "   "), ("theme-key", "")]));
    assert_eq!(cfg.manifest_url, DEFAULT_MANIFEST_URL);
    assert_eq!(cfg.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
}

#[test]
fn from_lookup_trims_whitespace() {
    let cfg = BlogConfig::from_lookup(lookup_from(&[("posts-base", "  articles/  ")]));
    assert_eq!(cfg.posts_base, "articles");
}

#[test]
fn root_base_is_kept_as_slash() {
    let cfg = BlogConfig::from_lookup(lookup_from(&[("posts-base", "/")]));
    assert_eq!(cfg.posts_base, "/");
}
