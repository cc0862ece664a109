//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::site_header::SITE_TITLE;
use crate::config::BlogConfig;
use crate::pages::reader::ReaderPage;
use crate::state::reader::ReaderState;
use crate::state::theme;
use crate::util::dom::BrowserThemeHost;

/// Root application component.
///
/// Resolves configuration from the host page, applies the startup theme and
/// provides shared state to the reader page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BlogConfig::from_document();
    let resolved = theme::apply(&BrowserThemeHost::new(&config));
    log::debug!("startup theme: {}", resolved.as_str());

    provide_context(config);
    provide_context(RwSignal::new(resolved));
    provide_context(RwSignal::new(ReaderState::default()));

    view! {
        <Title text=SITE_TITLE/>
        <ReaderPage/>
    }
}
