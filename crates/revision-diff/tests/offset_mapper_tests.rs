use pretty_assertions::assert_eq;
use proptest::prelude::*;
use revision_diff::{DiffEntry, DiffInterpreter, HighlightRange, OffsetMapper, RangeError};

#[test]
fn test_ascii_maps_one_to_one() {
    let mapper = OffsetMapper::new("hello");

    assert_eq!(mapper.byte_len(), 5);
    assert_eq!(mapper.char_len(), 5);
    for offset in 0..5 {
        assert_eq!(mapper.translate(offset), offset);
    }
}

#[test]
fn test_multibyte_chars_share_a_position() {
    // n a ï v e ' ' c a f é
    let mapper = OffsetMapper::new("naïve café");

    assert_eq!(mapper.byte_len(), 12);
    assert_eq!(mapper.char_len(), 10);
    assert_eq!(mapper.translate(2), 2);
    assert_eq!(mapper.translate(3), 2);
    assert_eq!(mapper.translate(4), 3);
    assert_eq!(mapper.translate(10), 9);
    assert_eq!(mapper.translate(11), 9);
}

#[test]
fn test_offsets_past_the_end_clamp_to_char_len() {
    let mapper = OffsetMapper::new("a😊b");

    assert_eq!(mapper.translate(6), 3);
    assert_eq!(mapper.translate(1000), 3);
    assert_eq!(mapper.translate(usize::MAX), 3);
}

#[test]
fn test_translate_range() {
    let mapper = OffsetMapper::new("naïve café");

    assert_eq!(mapper.translate_range(2, 2), Ok(2..3));
    assert_eq!(mapper.translate_range(10, 2), Ok(9..10));
    assert_eq!(mapper.translate_range(10, 50), Ok(9..10));
    // Starting inside a char widens to include it
    assert_eq!(mapper.translate_range(3, 1), Ok(2..3));
    // Starting exactly at the end is an empty range
    assert_eq!(mapper.translate_range(12, 5), Ok(10..10));
}

#[test]
fn test_translate_range_errors() {
    let mapper = OffsetMapper::new("abc");

    assert_eq!(
        mapper.translate_range(4, 1),
        Err(RangeError::StartOutOfBounds {
            start: 4,
            byte_len: 3
        })
    );
    // An end that would overflow still clamps to the end of text
    assert_eq!(mapper.translate_range(1, usize::MAX), Ok(1..3));

    let empty = OffsetMapper::new("");
    assert!(empty.is_empty());
    assert_eq!(empty.translate_range(0, 0), Err(RangeError::EmptyText));
}

#[test]
fn test_extracts_exactly_one_multibyte_char() {
    let entry = DiffEntry::unchanged("a😊b").with_range(HighlightRange::addition(1, 4));
    let details = DiffInterpreter::default().interpret(&[entry]);

    assert_eq!(details.change_text, vec!["😊"]);
    assert_eq!(details.size_delta, 4);
}

#[test]
fn test_out_of_bounds_end_extracts_through_end_of_text() {
    let entry = DiffEntry::unchanged("grüße").with_range(HighlightRange::removal(2, 100));
    let details = DiffInterpreter::default().interpret(&[entry]);

    assert_eq!(details.change_text, vec!["üße"]);
    assert_eq!(details.size_delta, -100);
}

fn extract(text: &str, start: usize, length: usize) -> String {
    let entry = DiffEntry::unchanged(text).with_range(HighlightRange::addition(start, length));
    let mut details = DiffInterpreter::default().interpret(&[entry]);
    assert_eq!(details.change_text.len(), 1);
    details.change_text.remove(0)
}

proptest! {
    #[test]
    fn prop_extraction_stays_within_declared_span(
        text in "[a-zé€😊 ]{1,24}",
        start_seed in 0usize..128,
        length in 0usize..128,
    ) {
        let start = start_seed % (text.len() + 1);
        let fragment = extract(&text, start, length);

        prop_assert!(text.contains(fragment.as_str()));
        if text.is_char_boundary(start) {
            prop_assert!(fragment.len() <= length);
        } else {
            // Only widening to the start of the char containing `start`
            prop_assert!(fragment.len() <= length + 3);
        }

        let end = (start + length).min(text.len());
        if text.is_char_boundary(start) && text.is_char_boundary(end) {
            prop_assert_eq!(fragment.as_str(), &text[start..end]);
        }
    }

    #[test]
    fn prop_table_matches_char_indices(text in "[a-zé€😊 ]{0,24}") {
        let mapper = OffsetMapper::new(&text);

        prop_assert_eq!(mapper.byte_len(), text.len());
        prop_assert_eq!(mapper.char_len(), text.chars().count());
        for (position, (byte_offset, c)) in text.char_indices().enumerate() {
            for b in byte_offset..byte_offset + c.len_utf8() {
                prop_assert_eq!(mapper.translate(b), position);
            }
        }
    }
}
