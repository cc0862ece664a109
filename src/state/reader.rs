//! Two-state view router for the reader page.
//!
//! DESIGN
//! ======
//! Exactly one of the list and post containers is visible at a time. Every
//! navigation bumps a request token; a body fetch only lands if its token is
//! still current, so overlapping selections resolve to the latest one and a
//! return to the list discards any in-flight load.

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;

use crate::net::types::{FetchError, PostBody, PostSummary};
use crate::state::posts::PostsState;
use crate::util::markup::render_body;

/// Which top-level container is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Post(PostSummary),
}

/// Content of the post container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PostPane {
    #[default]
    Empty,
    Loading,
    /// Rendered body HTML.
    Ready(String),
    /// Inline error message.
    Failed(String),
}

/// Scroll action the page performs after a transition.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Keep,
    ScrollTop,
}

/// A body fetch issued by [`ReaderState::show_post`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostRequest {
    pub token: u64,
    pub post: PostSummary,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaderState {
    pub view: View,
    pub pane: PostPane,
    request_seq: u64,
}

impl ReaderState {
    /// Return to the list: hide and clear the post container.
    pub fn show_list(&mut self) -> Viewport {
        self.request_seq += 1;
        self.view = View::List;
        self.pane = PostPane::Empty;
        Viewport::ScrollTop
    }

    /// Switch to the post container showing a loading placeholder.
    pub fn show_post(&mut self, post: PostSummary) -> PostRequest {
        self.request_seq += 1;
        self.view = View::Post(post.clone());
        self.pane = PostPane::Loading;
        PostRequest { token: self.request_seq, post }
    }

    /// Open the post whose card id is `id`.
    ///
    /// Returns `None` without touching the state when the loaded manifest
    /// has no such id.
    pub fn select(&mut self, posts: &PostsState, id: &str) -> Option<PostRequest> {
        let Some(post) = posts.find(id) else {
            log::debug!("no post with id '{id}', ignoring selection");
            return None;
        };
        Some(self.show_post(post.clone()))
    }

    /// Land a body fetch. Results for superseded requests are dropped.
    pub fn resolve(&mut self, token: u64, result: Result<PostBody, FetchError>) -> Viewport {
        let current = self.current_token();
        if token != current || !self.is_post_visible() {
            log::debug!("discarding stale post response (token {token}, current {current})");
            return Viewport::Keep;
        }
        self.pane = match result {
            Ok(body) => PostPane::Ready(render_body(&body)),
            Err(e) => {
                log::warn!("post fetch failed: {}", e.failure());
                PostPane::Failed(e.user_message())
            }
        };
        Viewport::ScrollTop
    }

    pub fn is_list_visible(&self) -> bool {
        matches!(self.view, View::List)
    }

    pub fn is_post_visible(&self) -> bool {
        matches!(self.view, View::Post(_))
    }

    pub fn selected(&self) -> Option<&PostSummary> {
        match &self.view {
            View::Post(post) => Some(post),
            View::List => None,
        }
    }

    /// Token of the most recent navigation.
    pub fn current_token(&self) -> u64 {
        self.request_seq
    }
}
