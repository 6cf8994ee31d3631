//! Property tests for the structuring pipeline

use proptest::prelude::*;
use proseframe_ast::{Block, BlockKind};
use proseframe_core::{classify, classify_text, emphasis, highlight, normalize, segment};

/// Fragments that exercise every normalization rule
fn noisy_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\\n".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("# ".to_string()),
        Just("###".to_string()),
        Just("**".to_string()),
        Just("*".to_string()),
        Just("`".to_string()),
        Just("```".to_string()),
        Just("[label](http://x.y)".to_string()),
        Just("[".to_string()),
        Just("](".to_string()),
        Just(")".to_string()),
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\\".to_string()),
        Just("- ".to_string()),
        Just("1. ".to_string()),
        Just("?".to_string()),
        Just(".".to_string()),
        "[a-zA-Z0-9]{1,8}",
    ]
}

fn noisy_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(noisy_fragment(), 0..60).prop_map(|parts| parts.concat())
}

/// A sentence long enough and punctuated so it is always a paragraph
fn sentence() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,8}", 16..24).prop_map(|words| format!("{}.", words.join(" ")))
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in noisy_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalization_is_idempotent_on_arbitrary_text(text in "\\PC*") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn every_section_maps_to_one_block(text in noisy_text()) {
        let sections = segment(&normalize(&text));
        let count = sections.len();
        prop_assert_eq!(classify(sections).len(), count);
    }

    #[test]
    fn at_most_one_title_and_only_first(text in noisy_text()) {
        let blocks = classify_text(&text);
        let titles: Vec<usize> = blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.kind() == BlockKind::Title)
            .map(|(i, _)| i)
            .collect();
        prop_assert!(titles.is_empty() || titles == vec![0]);
    }

    #[test]
    fn section_order_is_preserved(sentences in proptest::collection::vec(sentence(), 1..8)) {
        let blocks = classify_text(&sentences.join("\n\n"));
        let expected: Vec<Block> = sentences.into_iter().map(Block::Paragraph).collect();
        prop_assert_eq!(blocks, expected);
    }

    #[test]
    fn highlighting_only_adds_markers(text in "[a-zA-Z0-9%$,. ]{0,80}") {
        prop_assert_eq!(emphasis::strip(&highlight(&text)), text);
    }
}

#[test]
fn highlighting_without_vocabulary_is_identity() {
    let text = "The quiet garden sat under a pale sky.";
    assert_eq!(highlight(text), text);
}
