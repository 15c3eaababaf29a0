//! Property-based tests for streamsup using proptest
//!
//! These tests generate random stream lists to check that parsing and
//! rewriting preserve payloads, ordering and the declared count.

use proptest::prelude::*;
use streamsup::{StreamRecord, parse_document, render_document};

/// A single payload field: no quotes, pipes or line breaks
fn field_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 ./:?=&_-]{0,16}"
}

/// Payloads with exactly six fields
fn payload_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(field_strategy(), 6).prop_map(|fields| fields.join("|"))
}

/// Payloads with any field count other than six
fn malformed_payload_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(field_strategy(), 1..6),
        prop::collection::vec(field_strategy(), 7..10),
    ]
    .prop_map(|fields| fields.join("|"))
}

fn header(count: usize) -> String {
    format!("SiiNunit\n{{\nlive_stream_def : _nameless.live.streams {{\n stream_data: {count}\n")
}

fn body(entries: &[(usize, String)]) -> String {
    entries
        .iter()
        .map(|(index, payload)| format!(" stream_data[{index}]: \"{payload}\"\n"))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_round_trip_is_byte_identical(payloads in prop::collection::vec(payload_strategy(), 0..20)) {
        let entries: Vec<(usize, String)> = payloads.into_iter().enumerate().collect();
        let original = format!("{}{}}}\n\n}}", header(entries.len()), body(&entries));

        let document = parse_document(&original);
        let rendered = render_document(&document.header, &document.records, &document.footer);

        prop_assert_eq!(rendered, original);
    }

    #[test]
    fn test_only_six_field_payloads_become_records(
        entries in prop::collection::vec(
            prop_oneof![
                payload_strategy().prop_map(|p| (true, p)),
                malformed_payload_strategy().prop_map(|p| (false, p)),
            ],
            0..20,
        )
    ) {
        let numbered: Vec<(usize, String)> = entries
            .iter()
            .enumerate()
            .map(|(i, (_, p))| (i, p.clone()))
            .collect();
        let contents = format!("{}{}}}\n\n}}", header(numbered.len()), body(&numbered));

        let document = parse_document(&contents);
        let expected: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, (well_formed, _))| *well_formed)
            .map(|(i, _)| i)
            .collect();
        let actual: Vec<usize> = document.records.iter().map(StreamRecord::index).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_payload_is_preserved_exactly(payload in payload_strategy(), index in 0usize..10_000) {
        let contents = format!(" stream_data[{index}]: \"{payload}\"\n");

        let document = parse_document(&contents);

        prop_assert_eq!(document.records.len(), 1);
        prop_assert_eq!(document.records[0].index(), index);
        prop_assert_eq!(document.records[0].raw_payload(), payload.as_str());
    }

    #[test]
    fn test_count_token_matches_written_lines(
        declared in 0usize..500,
        payloads in prop::collection::vec(payload_strategy(), 0..30),
        keep_mask in prop::collection::vec(any::<bool>(), 30),
    ) {
        let entries: Vec<(usize, String)> = payloads.into_iter().enumerate().collect();
        let contents = format!("{}{}}}\n\n}}", header(declared), body(&entries));
        let document = parse_document(&contents);

        let kept: Vec<StreamRecord> = document
            .records
            .iter()
            .zip(&keep_mask)
            .filter(|(_, keep)| **keep)
            .map(|(record, _)| record.clone())
            .collect();
        let rendered = render_document(&document.header, &kept, &document.footer);
        let reparsed = parse_document(&rendered);

        let declared_line = format!(" stream_data: {}\n", kept.len());
        prop_assert!(rendered.contains(&declared_line));
        prop_assert_eq!(reparsed.records.len(), kept.len());
        let positions: Vec<usize> = reparsed.records.iter().map(StreamRecord::index).collect();
        prop_assert_eq!(positions, (0..kept.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_parser_never_panics_on_arbitrary_input(contents in ".{0,400}") {
        let document = parse_document(&contents);

        prop_assert!(!document.footer.is_empty());
    }
}
