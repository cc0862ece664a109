//! Post list container.
//!
//! The container stays mounted while a post is open; only its `hidden`
//! class changes, so the cards are not rebuilt on the way back.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::state::posts::PostsState;

#[component]
pub fn PostList(
    posts: RwSignal<PostsState>,
    #[prop(into)] visible: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div id="posts-list" class="posts-list" class:hidden=move || !visible.get()>
            {move || match posts.get() {
                PostsState::Loading => view! { <p class="posts-status">"Loading posts..."</p> }.into_any(),
                PostsState::Failed(message) => view! { <p class="posts-error">{message}</p> }.into_any(),
                PostsState::Ready(list) if list.is_empty() => {
                    view! { <p class="posts-status">"No posts yet."</p> }.into_any()
                }
                PostsState::Ready(list) => list
                    .into_iter()
                    .map(|post| view! { <PostCard post=post on_select=on_select/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
