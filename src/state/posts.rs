//! Manifest state for the post list.
//!
//! DESIGN
//! ======
//! The manifest is normalised once when it arrives: duplicate ids are
//! dropped and summaries are ordered newest first. Card selection resolves
//! ids against this normalised collection.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::net::types::{FetchError, PostSummary};
use crate::util::date::date_sort_key;

/// Load status of the manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PostsState {
    #[default]
    Loading,
    Ready(Vec<PostSummary>),
    /// Inline error message rendered in place of the list.
    Failed(String),
}

impl PostsState {
    /// Build list state from a manifest fetch result.
    pub fn from_fetch(result: Result<Vec<PostSummary>, FetchError>) -> Self {
        match result {
            Ok(posts) => Self::Ready(order_posts(posts)),
            Err(e) => {
                log::warn!("manifest fetch failed: {}", e.failure());
                Self::Failed(e.user_message())
            }
        }
    }

    /// Summaries in display order; empty unless ready.
    pub fn posts(&self) -> &[PostSummary] {
        match self {
            Self::Ready(posts) => posts,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Resolve a card id back to its summary.
    pub fn find(&self, id: &str) -> Option<&PostSummary> {
        find_post(self.posts(), id)
    }
}

/// Drop duplicate ids (first occurrence wins) and sort newest first.
///
/// The sort is stable: equal dates keep manifest order, and unparseable
/// dates sort after every valid one.
pub fn order_posts(posts: Vec<PostSummary>) -> Vec<PostSummary> {
    let mut seen = HashSet::new();
    let mut posts: Vec<PostSummary> = posts
        .into_iter()
        .filter(|post| {
            let fresh = seen.insert(post.id.clone());
            if !fresh {
                log::warn!("dropping duplicate manifest entry for id '{}'", post.id);
            }
            fresh
        })
        .collect();
    posts.sort_by_cached_key(|post| Reverse(date_sort_key(&post.date)));
    posts
}

pub fn find_post<'a>(posts: &'a [PostSummary], id: &str) -> Option<&'a PostSummary> {
    posts.iter().find(|post| post.id == id)
}
