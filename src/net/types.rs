//! Manifest schema and fetch error types.
//!
//! DESIGN
//! ======
//! `PostSummary` mirrors one entry of `posts.json`. Every field is required;
//! a manifest entry missing one fails decoding as a whole.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Lightweight post metadata listed in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    /// ISO 8601 date or date-time.
    pub date: String,
    pub excerpt: String,
    /// Body path relative to the posts directory.
    pub file: String,
}

/// Raw body content fetched for one post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostBody {
    pub file: String,
    pub raw: String,
}

/// Underlying cause of a failed fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// A failed manifest or body fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to load posts manifest ({0})")]
    Manifest(#[source] FetchFailure),
    #[error("Post not found ({0})")]
    Post(#[source] FetchFailure),
}

impl FetchError {
    pub fn failure(&self) -> &FetchFailure {
        match self {
            Self::Manifest(f) | Self::Post(f) => f,
        }
    }

    /// Inline message shown in place of the affected region.
    pub fn user_message(&self) -> String {
        match self {
            Self::Manifest(_) => format!("Error loading posts: {self}"),
            Self::Post(_) => format!("Error loading post: {self}"),
        }
    }
}
