//! Post repository: manifest and body fetches from the static content host.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a network failure so callers exercise the
//! same error path without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are folded into [`FetchError`]
//! tagged with the resource that failed. Nothing is retried or cached; every
//! call goes to the network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FetchError, FetchFailure, PostBody, PostSummary};
use crate::config::BlogConfig;

/// URL of the post manifest.
pub fn manifest_url(config: &BlogConfig) -> String {
    config.manifest_url.clone()
}

/// URL of a post body: the posts directory joined with `file`.
pub fn body_url(config: &BlogConfig, file: &str) -> String {
    let base = config.posts_base.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    format!("{base}/{file}")
}

/// Decode a manifest payload into summaries, preserving manifest order.
///
/// # Errors
///
/// Returns [`FetchFailure::Decode`] if the payload is not a JSON array of
/// post summaries.
pub fn parse_manifest(raw: &str) -> Result<Vec<PostSummary>, FetchFailure> {
    serde_json::from_str(raw).map_err(|e| FetchFailure::Decode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn check_status(ok: bool, status: u16) -> Result<(), FetchFailure> {
    if ok { Ok(()) } else { Err(FetchFailure::Status(status)) }
}

/// Fetch the manifest of post summaries.
///
/// # Errors
///
/// Returns [`FetchError::Manifest`] on transport failure, a non-2xx status,
/// or a payload that is not a JSON array of summaries.
pub async fn fetch_manifest(config: &BlogConfig) -> Result<Vec<PostSummary>, FetchError> {
    let url = manifest_url(config);
    log::debug!("fetching manifest from {url}");
    let raw = get_text(&url).await.map_err(FetchError::Manifest)?;
    parse_manifest(&raw).map_err(FetchError::Manifest)
}

/// Fetch the body of `post` from the posts directory.
///
/// # Errors
///
/// Returns [`FetchError::Post`] on transport failure, a non-2xx status, or
/// a body that cannot be read as text.
pub async fn fetch_body(config: &BlogConfig, post: &PostSummary) -> Result<PostBody, FetchError> {
    let url = body_url(config, &post.file);
    log::debug!("fetching post '{}' from {url}", post.id);
    let raw = get_text(&url).await.map_err(FetchError::Post)?;
    Ok(PostBody { file: post.file.clone(), raw })
}

async fn get_text(url: &str) -> Result<String, FetchFailure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;
        check_status(resp.ok(), resp.status())?;
        resp.text().await.map_err(|e| FetchFailure::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FetchFailure::Network(format!("{url}: not available outside the browser")))
    }
}
