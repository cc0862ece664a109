//! Post body rendering.
//!
//! Bodies are trusted content from the blog's own host and are inserted as
//! markup without sanitization. Files with a Markdown extension are
//! converted to HTML first; everything else passes through verbatim.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use pulldown_cmark::{Options, Parser, html};

use crate::net::types::PostBody;

/// Source format of a post body, derived from its file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyFormat {
    Html,
    Markdown,
}

impl BodyFormat {
    pub fn from_file(file: &str) -> Self {
        let ext = file.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("md" | "markdown") => Self::Markdown,
            _ => Self::Html,
        }
    }
}

/// HTML to insert into the post body region.
pub fn render_body(body: &PostBody) -> String {
    match BodyFormat::from_file(&body.file) {
        BodyFormat::Html => body.raw.clone(),
        BodyFormat::Markdown => render_markdown_html(&body.raw),
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
