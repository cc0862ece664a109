//! Clickable summary card for one post in the list.

use leptos::prelude::*;

use crate::net::types::PostSummary;
use crate::util::date::format_date;

/// Card showing date, title and excerpt. Clicking reports the card's id.
#[component]
pub fn PostCard(post: PostSummary, on_select: Callback<String>) -> impl IntoView {
    let PostSummary { id, title, date, excerpt, .. } = post;
    let card_id = id.clone();

    view! {
        <article class="post-card" data-id=id on:click=move |_| on_select.run(card_id.clone())>
            <span class="post-date">{format_date(&date)}</span>
            <h2 class="post-title">{title}</h2>
            <p class="post-excerpt">{excerpt}</p>
        </article>
    }
}
