//! End-to-end reader flow over the public state API: manifest decode,
//! ordering, card selection, body request and failure rendering.

use blog_reader::config::BlogConfig;
use blog_reader::net::api::{body_url, parse_manifest};
use blog_reader::net::types::{FetchError, FetchFailure, PostBody};
use blog_reader::state::posts::PostsState;
use blog_reader::state::reader::{PostPane, ReaderState, View, Viewport};

const MANIFEST: &str = r#"[
    {"id":"a","title":"Older","date":"2024-01-01","excerpt":"first","file":"a.html"},
    {"id":"b","title":"Newer","date":"2024-06-01","excerpt":"second","file":"b.html"}
]"#;

fn loaded_posts() -> PostsState {
    PostsState::from_fetch(parse_manifest(MANIFEST).map_err(FetchError::Manifest))
}

fn ids(posts: &PostsState) -> Vec<String> {
    posts.posts().iter().map(|p| p.id.clone()).collect()
}

#[test]
fn newest_post_is_listed_first() {
    assert_eq!(ids(&loaded_posts()), ["b", "a"]);
}

#[test]
fn selecting_a_card_requests_its_body() {
    let config = BlogConfig::default();
    let posts = loaded_posts();
    let mut reader = ReaderState::default();

    let request = reader.select(&posts, "b").unwrap();

    assert_eq!(request.post.id, "b");
    assert_eq!(body_url(&config, &request.post.file), "posts/b.html");
    assert_eq!(reader.pane, PostPane::Loading);
}

#[test]
fn unknown_card_id_does_not_navigate() {
    let posts = loaded_posts();
    let mut reader = ReaderState::default();
    let token = reader.current_token();
    assert!(reader.select(&posts, "missing").is_none());
    assert_eq!(reader.view, View::List);
    assert_eq!(reader.pane, PostPane::Empty);
    assert_eq!(reader.current_token(), token);
}

#[test]
fn card_id_resolves_to_its_summary() {
    let config = BlogConfig::default();
    let posts = loaded_posts();
    let mut reader = ReaderState::default();
    let request = reader.select(&posts, "a").unwrap();
    assert_eq!(request.post.title, "Older");
    assert_eq!(body_url(&config, &request.post.file), "posts/a.html");
    assert!(reader.is_post_visible());
}

#[test]
fn missing_post_shows_error_and_back_returns_to_unchanged_list() {
    let posts = loaded_posts();
    let before = ids(&posts);
    let mut reader = ReaderState::default();

    let request = reader.show_post(posts.find("b").cloned().unwrap());
    let viewport = reader.resolve(request.token, Err(FetchError::Post(FetchFailure::Status(404))));
    assert_eq!(viewport, Viewport::ScrollTop);
    match &reader.pane {
        PostPane::Failed(message) => assert!(message.starts_with("Error loading post:")),
        other => panic!("expected failure pane, got {other:?}"),
    }

    assert_eq!(reader.show_list(), Viewport::ScrollTop);
    assert!(reader.is_list_visible());
    assert_eq!(reader.pane, PostPane::Empty);
    assert_eq!(ids(&posts), before);
}

#[test]
fn loaded_post_round_trip() {
    let posts = loaded_posts();
    let mut reader = ReaderState::default();

    let request = reader.show_post(posts.find("a").cloned().unwrap());
    let body = PostBody { file: request.post.file.clone(), raw: "<p>Body</p>".to_owned() };
    assert_eq!(reader.resolve(request.token, Ok(body)), Viewport::ScrollTop);
    assert_eq!(reader.pane, PostPane::Ready("<p>Body</p>".to_owned()));

    assert_eq!(reader.show_list(), Viewport::ScrollTop);
    assert!(!reader.is_post_visible());
    assert_eq!(reader.pane, PostPane::Empty);
}

#[test]
fn manifest_failure_renders_inline_list_error() {
    let state = PostsState::from_fetch(parse_manifest("not json").map_err(FetchError::Manifest));
    match state {
        PostsState::Failed(message) => assert!(message.starts_with("Error loading posts: Failed to load posts manifest")),
        other => panic!("expected failure, got {other:?}"),
    }
}
