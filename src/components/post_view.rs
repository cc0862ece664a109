//! Single-post container: loading placeholder, rendered post, or error.

use leptos::prelude::*;

use crate::components::back_button::BackButton;
use crate::state::reader::{PostPane, ReaderState};
use crate::util::date::format_date;

/// Post container bound to the reader state.
///
/// The body HTML is inserted as-is; bodies come from the blog's own host.
#[component]
pub fn PostView(reader: RwSignal<ReaderState>, on_back: Callback<()>) -> impl IntoView {
    let visible = move || reader.with(ReaderState::is_post_visible);

    view! {
        <div id="post-view" class="post-view" class:hidden=move || !visible()>
            {move || {
                let (pane, post) = reader.with(|r| (r.pane.clone(), r.selected().cloned()));
                match (pane, post) {
                    (PostPane::Loading, _) => view! { <p class="post-loading">"Loading..."</p> }.into_any(),
                    (PostPane::Ready(html), Some(post)) => {
                        view! {
                            <BackButton label="← Back to posts" on_back=on_back/>
                            <div class="post-content">
                                <header class="post-header">
                                    <span class="post-date">{format_date(&post.date)}</span>
                                    <h1>{post.title}</h1>
                                </header>
                                <div class="post-body" inner_html=html></div>
                            </div>
                        }
                            .into_any()
                    }
                    (PostPane::Failed(message), _) => {
                        view! {
                            <p class="post-error">{message}</p>
                            <BackButton label="← Back" on_back=on_back/>
                        }
                            .into_any()
                    }
                    (PostPane::Empty | PostPane::Ready(_), _) => ().into_any(),
                }
            }}
        </div>
    }
}
