//! Back-to-list link shown above a post or its error message.

use leptos::prelude::*;

#[component]
pub fn BackButton(label: &'static str, on_back: Callback<()>) -> impl IntoView {
    view! {
        <a
            href="#"
            class="back-button"
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                on_back.run(());
            }
        >
            {label}
        </a>
    }
}
