use super::*;

fn body(file: &str, raw: &str) -> PostBody {
    PostBody { file: file.to_owned(), raw: raw.to_owned() }
}

#[test]
fn format_follows_extension() {
    assert_eq!(BodyFormat::from_file("a.html"), BodyFormat::Html);
    assert_eq!(BodyFormat::from_file("a.md"), BodyFormat::Markdown);
    assert_eq!(BodyFormat::from_file("2024/a.MARKDOWN"), BodyFormat::Markdown);
    assert_eq!(BodyFormat::from_file("README"), BodyFormat::Html);
}

#[test]
fn html_body_is_inserted_verbatim() {
    let raw = "<p>Hello <script>track()</script></p>";
    assert_eq!(render_body(&body("a.html", raw)), raw);
}

#[test]
fn markdown_body_is_converted() {
    let html = render_body(&body("a.md", "# Title\n\nSome *emphasis*."));
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<em>emphasis</em>"));
}

#[test]
fn markdown_tables_are_enabled() {
    let html = render_body(&body("t.md", "| a | b |\n|---|---|\n| 1 | 2 |\n"));
    assert!(html.contains("<table>"));
}

#[test]
fn markdown_keeps_inline_html() {
    let html = render_body(&body("a.md", "text <kbd>Ctrl</kbd>"));
    assert!(html.contains("<kbd>Ctrl</kbd>"));
}
