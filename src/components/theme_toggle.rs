//! Light/dark toggle button.

use leptos::prelude::*;

use crate::config::BlogConfig;
use crate::state::theme::{self, Theme};
use crate::util::dom::BrowserThemeHost;

/// Flips the document theme and persists it. Shows ☀ in dark mode and ☾ in
/// light mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let host = BrowserThemeHost::new(&expect_context::<BlogConfig>());

    view! {
        <button
            id="theme-toggle"
            class="btn theme-toggle"
            on:click=move |_| current.set(theme::toggle(&host))
            title="Toggle dark mode"
        >
            {move || if current.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
