//! Reader page: post list and single-post view behind a two-state router.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the manifest is fetched once. Card clicks resolve the card id
//! against the loaded manifest and open the post; home and back links
//! return to the list. Body fetches are tagged with the reader's request
//! token so only the latest selection is rendered.

use leptos::prelude::*;

use crate::components::post_list::PostList;
use crate::components::post_view::PostView;
use crate::components::site_header::SiteHeader;
use crate::config::BlogConfig;
use crate::state::posts::PostsState;
use crate::state::reader::{PostRequest, ReaderState, Viewport};
use crate::util::dom;

#[component]
pub fn ReaderPage() -> impl IntoView {
    let config = expect_context::<BlogConfig>();
    let reader = expect_context::<RwSignal<ReaderState>>();
    let posts = RwSignal::new(PostsState::default());

    load_manifest(config.clone(), posts);

    let show_list = Callback::new(move |()| {
        let mut viewport = Viewport::Keep;
        reader.update(|r| viewport = r.show_list());
        apply_viewport(viewport);
    });

    let show_post = Callback::new(move |id: String| {
        let mut request = None;
        posts.with_untracked(|p| reader.update(|r| request = r.select(p, &id)));
        if let Some(request) = request {
            load_post(config.clone(), reader, request);
        }
    });

    let list_visible = Signal::derive(move || reader.with(ReaderState::is_list_visible));

    view! {
        <SiteHeader on_home=show_list/>
        <main class="container">
            <PostList posts=posts visible=list_visible on_select=show_post/>
            <PostView reader=reader on_back=show_list/>
        </main>
    }
}

fn apply_viewport(viewport: Viewport) {
    if viewport == Viewport::ScrollTop {
        dom::scroll_to_top();
    }
}

fn load_manifest(config: BlogConfig, posts: RwSignal<PostsState>) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_manifest(&config).await;
            posts.set(PostsState::from_fetch(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, posts);
    }
}

fn load_post(config: BlogConfig, reader: RwSignal<ReaderState>, request: PostRequest) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let PostRequest { token, post } = request;
            let result = crate::net::api::fetch_body(&config, &post).await;
            let mut viewport = Viewport::Keep;
            reader.update(|r| viewport = r.resolve(token, result));
            apply_viewport(viewport);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, reader, request);
    }
}
