//! Property-based tests for the INN validator and input resolution.

#![cfg(feature = "core")]

use npchk::core::*;
use proptest::prelude::*;

proptest! {
    // Total over all inputs: a boolean out, never a panic.
    #[test]
    fn validator_never_panics(s in "\\PC*") {
        let _ = is_valid_inn(&s);
    }

    #[test]
    fn wrong_length_always_rejected(s in "[0-9]{1,9}|[0-9]{11}|[0-9]{13,20}") {
        prop_assert!(!is_valid_inn(&s));
    }

    #[test]
    fn non_digit_always_rejected(
        prefix in "[0-9]{0,5}",
        junk in "[^0-9]",
        suffix in "[0-9]{0,6}",
    ) {
        let s = format!("{prefix}{junk}{suffix}");
        prop_assert!(!is_valid_inn(&s));
    }

    #[test]
    fn matching_pattern_always_accepted(s in "(0[1-9]|[1-9][0-9])([0-9]{8}|[0-9]{10})") {
        prop_assert!(is_valid_inn(&s));
    }

    #[test]
    fn double_zero_prefix_always_rejected(s in "00([0-9]{8}|[0-9]{10})") {
        prop_assert!(!is_valid_inn(&s));
    }

    #[test]
    fn parse_agrees_with_is_valid(s in "\\PC{0,20}") {
        prop_assert_eq!(Inn::parse(&s).is_ok(), is_valid_inn(&s));
    }

    // Resolving any single-line input never panics and never produces an
    // invalid entry.
    #[test]
    fn resolve_only_emits_valid_entries(s in "[^\r\n]{0,30}") {
        let r = resolve(&s);
        for entry in r.batch.entries() {
            prop_assert!(is_valid_inn(entry.inn.as_str()));
        }
    }

    #[test]
    fn batch_never_holds_duplicate_inns(inns in proptest::collection::vec("[1-9][0-9]{9}", 1..8)) {
        let date = request_date();
        let entries = inns
            .iter()
            .map(|s| QueryEntry::new(Inn::parse(s).unwrap(), date));
        let batch = QueryBatch::from_entries(entries);
        let mut seen = std::collections::BTreeSet::new();
        for entry in batch.entries() {
            prop_assert!(seen.insert(entry.inn.clone()));
        }
    }
}
