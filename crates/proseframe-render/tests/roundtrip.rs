//! Plain-text round-trip and cross-renderer agreement

use proptest::prelude::*;
use proseframe_ast::{Block, Document};
use proseframe_core::{classify_text, emphasis, structure};
use proseframe_render::{HtmlRenderer, PlainRenderer, Renderer};

fn words(range: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            "[a-z]{1,8}",
            Just("AI".to_string()),
            Just("research".to_string()),
            Just("key".to_string()),
            Just("2024".to_string()),
            Just("45%".to_string()),
        ],
        range,
    )
    .prop_map(|w| w.join(" "))
}

/// Raw sections covering every block variant
fn raw_section() -> impl Strategy<Value = String> {
    prop_oneof![
        words(16..30).prop_map(|s| format!("{s}.")),
        words(2..10).prop_map(|s| format!("{s}.")),
        words(1..15),
        words(1..6).prop_map(|s| format!("{s}?")),
        proptest::collection::vec(words(1..6), 1..5)
            .prop_map(|items| items.iter().map(|i| format!("- {i}")).collect::<Vec<_>>().join("\n")),
        proptest::collection::vec(words(1..6), 1..5).prop_map(|items| items
            .iter()
            .enumerate()
            .map(|(n, i)| format!("{}. {i}", n + 1))
            .collect::<Vec<_>>()
            .join("\n")),
    ]
}

fn strip_blocks(blocks: &[Block]) -> Vec<Block> {
    blocks
        .iter()
        .cloned()
        .map(|b| b.map_text(emphasis::strip))
        .collect()
}

proptest! {
    #[test]
    fn plain_output_reclassifies_to_same_blocks(
        sections in proptest::collection::vec(raw_section(), 1..8)
    ) {
        let doc = structure(&sections.join("\n\n"));
        let text = PlainRenderer.render(&doc);
        prop_assert_eq!(classify_text(&text), strip_blocks(&doc.blocks));
    }
}

#[test]
fn plain_round_trip_without_title() {
    let doc = Document::from_blocks(vec![
        Block::Paragraph("Solar panels convert sunlight into electricity.".into()),
        Block::Heading("How It Works".into()),
        Block::List(vec!["Photons hit cells".into(), "Electrons move".into()]),
        Block::Paragraph("Installation costs have dropped sharply.".into()),
    ]);
    let text = PlainRenderer.render(&doc);
    assert_eq!(classify_text(&text), doc.blocks);
}

#[test]
fn plain_round_trip_promotes_short_leading_heading() {
    // Title detection only sees text, so a short first heading comes back as the title
    let doc = Document::from_blocks(vec![
        Block::Heading("How It Works".into()),
        Block::Paragraph("Photons knock electrons loose inside each cell.".into()),
    ]);
    let text = PlainRenderer.render(&doc);
    assert_eq!(
        classify_text(&text),
        [
            Block::Title("How It Works".into()),
            Block::Paragraph("Photons knock electrons loose inside each cell.".into()),
        ]
    );
}

#[test]
fn angle_brackets_survive_html_and_plain() {
    let doc = structure(
        "Intro sentence here.\n\n\
         In Rust a Vec<String> owns its items and x < y > z holds for ordered values.",
    );
    let html = HtmlRenderer::default().render(&doc);
    let plain = PlainRenderer.render(&doc);

    assert!(html.contains("Vec&lt;String&gt;"), "{html}");
    assert!(html.contains("x &lt; y &gt; z"), "{html}");
    assert!(plain.contains("Vec<String> owns"), "{plain}");
    assert!(plain.contains("x < y > z holds"), "{plain}");
    assert_eq!(classify_text(&plain), strip_blocks(&doc.blocks));
}

#[test]
fn literal_strong_tag_is_text_everywhere() {
    let doc = structure(
        "Intro sentence here.\n\n\
         Wrap bold words in a <strong> element and the garden stays quiet on every line.",
    );
    let html = HtmlRenderer::default().render(&doc);
    let plain = PlainRenderer.render(&doc);

    assert!(html.contains("in a &lt;strong&gt; element"), "{html}");
    assert!(!html.contains("<strong"), "{html}");
    assert!(plain.contains("in a <strong> element and the garden"), "{plain}");
}

#[test]
fn renderers_agree_on_block_order() {
    let doc = structure(
        "What Is Renewable Energy?\n\n\
         Renewable energy comes from sources that replenish naturally.\n\n\
         Key Benefits\n\n\
         - Lower emissions\n- Energy independence\n\n\
         In conclusion, adoption is accelerating.",
    )
    .with_summary("Renewables are growing.")
    .with_keywords(["energy", "solar"]);

    let html = HtmlRenderer::default().render(&doc);
    let plain = PlainRenderer.render(&doc);

    let needles = [
        "Renewable Energy?",
        "replenish naturally.",
        "Benefits",
        "Lower emissions",
        "Energy independence",
        "adoption is accelerating.",
        "Renewables are growing.",
        "solar",
    ];
    for output in [&html, &plain] {
        let positions: Vec<usize> = needles
            .iter()
            .map(|n| output.find(n).unwrap_or_else(|| panic!("missing {n:?}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }
}
