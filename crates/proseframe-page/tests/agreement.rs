//! HTML, plain and paged output carry the same text

use proseframe_core::structure;
use proseframe_page::PageRenderer;
use proseframe_render::{HtmlRenderer, PlainRenderer, Renderer};

fn render_all(raw: &str) -> (String, String, String) {
    let doc = structure(raw);
    (
        HtmlRenderer::default().render(&doc),
        PlainRenderer.render(&doc),
        PageRenderer::a4().render(&doc).to_text(),
    )
}

#[test]
fn angle_brackets_are_kept_by_every_renderer() {
    let (html, plain, paged) = render_all(
        "Intro sentence here.\n\n\
         In Rust a Vec<String> owns its items and x < y > z holds.",
    );

    assert!(html.contains("Vec&lt;String&gt; owns"), "{html}");
    assert!(html.contains("x &lt; y &gt; z holds"), "{html}");
    for text in [&plain, &paged] {
        assert!(text.contains("Vec<String> owns"), "{text}");
        assert!(text.contains("x < y > z holds"), "{text}");
    }
}

#[test]
fn literal_strong_tag_is_not_emphasis() {
    let (html, plain, paged) = render_all(
        "Intro sentence here.\n\n\
         Wrap bold words in a <strong> element and the garden stays quiet.",
    );

    assert!(html.contains("in a &lt;strong&gt; element"), "{html}");
    assert!(!html.contains("<strong"), "{html}");
    for text in [&plain, &paged] {
        assert!(text.contains("a <strong> element"), "{text}");
    }
}

#[test]
fn highlighted_terms_keep_their_words() {
    let (html, plain, paged) = render_all("Intro sentence here.\n\nOur AI research grew 40% in 2024.");

    assert!(html.contains(">AI</strong>"), "{html}");
    for text in [&plain, &paged] {
        assert!(text.contains("Our AI research grew 40% in 2024."), "{text}");
    }
}
