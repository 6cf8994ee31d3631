//! Pagination bounds across page sizes and documents

use proptest::prelude::*;
use proseframe_ast::{Block, Document};
use proseframe_page::{FontSizes, PageGeometry, PageRenderer, PageStyle};
use proseframe_render::Renderer;

fn block() -> impl Strategy<Value = Block> {
    let text = proptest::collection::vec("[a-zA-Z]{1,30}", 1..60).prop_map(|w| w.join(" "));
    prop_oneof![
        text.clone().prop_map(Block::Title),
        text.clone().prop_map(Block::Heading),
        proptest::collection::vec(text.clone(), 0..6).prop_map(Block::List),
        text.prop_map(Block::Paragraph),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    (
        proptest::collection::vec(block(), 0..30),
        proptest::option::of("[a-z ]{0,200}"),
        proptest::collection::vec("[a-z]{1,10}", 0..8),
    )
        .prop_map(|(blocks, summary, keywords)| {
            let doc = Document::from_blocks(blocks).with_keywords(keywords);
            match summary {
                Some(s) => doc.with_summary(s),
                None => doc,
            }
        })
}

fn geometry() -> impl Strategy<Value = PageGeometry> {
    (60.0f32..400.0, 40.0f32..500.0, 1.0f32..30.0)
        .prop_map(|(w, h, m)| PageGeometry::new(w, h, m))
}

proptest! {
    #[test]
    fn no_line_crosses_the_bottom(doc in document(), geometry in geometry(), start in 0.0f32..600.0) {
        let style = PageStyle::default();
        prop_assume!(geometry.validate(&style).is_ok());

        let renderer = PageRenderer::new(geometry, style.clone()).unwrap().with_start(start);
        let paged = renderer.render(&doc);

        prop_assert!(paged.page_count() >= 1);
        for page in &paged.pages {
            for line in &page.lines {
                let line_height = style.line_height(line.font_size);
                prop_assert!(
                    line.y <= geometry.height_mm - line_height,
                    "line at {} with height {} on {} mm page",
                    line.y, line_height, geometry.height_mm
                );
                prop_assert!(line.baseline() <= geometry.content_bottom());
            }
        }
    }

    #[test]
    fn lines_fit_the_content_width(doc in document()) {
        let style = PageStyle::default();
        let width = PageGeometry::A4.content_width();
        let paged = PageRenderer::a4().render(&doc);
        for line in paged.lines() {
            let limit = style.chars_per_line(width, line.font_size);
            prop_assert!(line.text.chars().count() <= limit);
        }
    }

    #[test]
    fn pages_are_numbered_and_non_empty(doc in document()) {
        let paged = PageRenderer::a4().render(&doc);
        for (i, page) in paged.pages.iter().enumerate() {
            prop_assert_eq!(page.number, i + 1);
            if paged.page_count() > 1 {
                prop_assert!(!page.lines.is_empty());
            }
        }
    }
}

#[test]
fn metadata_follows_all_blocks_across_pages() {
    let blocks: Vec<Block> = (0..120)
        .map(|i| Block::Paragraph(format!("Paragraph {i} with some words in it.")))
        .collect();
    let doc = Document::from_blocks(blocks)
        .with_summary("Closing summary")
        .with_keywords(["one", "two"]);
    let paged = PageRenderer::a4().render(&doc);

    let texts: Vec<&str> = paged.lines().map(|l| l.text.as_str()).collect();
    let n = texts.len();
    assert_eq!(
        &texts[n - 4..],
        ["Summary", "Closing summary", "Keywords", "one, two"]
    );
    assert!(paged.page_count() >= 3);
}

#[test]
fn larger_fonts_use_more_pages() {
    let blocks: Vec<Block> = (0..60)
        .map(|i| Block::Paragraph(format!("Paragraph {i} of a longer document body.")))
        .collect();
    let doc = Document::from_blocks(blocks);

    let small = PageRenderer::a4().render(&doc);
    let large = PageRenderer::new(
        PageGeometry::A4,
        PageStyle::with_fonts(FontSizes {
            body: 22.0,
            ..Default::default()
        }),
    )
    .unwrap()
    .render(&doc);
    assert!(large.page_count() > small.page_count());
}
