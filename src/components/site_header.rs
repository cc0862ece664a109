//! Top bar with the home link and theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

pub const SITE_TITLE: &str = "Blog";

#[component]
pub fn SiteHeader(on_home: Callback<()>) -> impl IntoView {
    view! {
        <header class="site-header">
            <a
                href="#"
                id="home-link"
                class="site-title"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    on_home.run(());
                }
            >
                {SITE_TITLE}
            </a>
            <ThemeToggle/>
        </header>
    }
}
