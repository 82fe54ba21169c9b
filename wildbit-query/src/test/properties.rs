use super::reference::reference_match;
use crate::{emit_ids, query_bitmap};
use proptest::prelude::*;
use test_log::test;
use wildbit_plan::Pattern;

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..6),
        0..12,
    )
}

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'_', b'%']), 0..6)
}

fn build(records: Vec<Vec<u8>>) -> wildbit_index::Index {
    build_with_cap(records, 16)
}

fn build_with_cap(records: Vec<Vec<u8>>, cap_len: usize) -> wildbit_index::Index {
    let source: Vec<std::result::Result<Vec<u8>, std::convert::Infallible>> =
        records.into_iter().map(Ok).collect();
    wildbit_index::build(source, cap_len).unwrap()
}

proptest! {
    /// Soundness + completeness: the executor's result set is exactly the
    /// reference matcher's result set (spec.md §8).
    #[test]
    fn query_matches_reference(records in corpus_strategy(), pattern_bytes in pattern_strategy()) {
        let index = build(records.clone());
        let pattern = Pattern::parse(&pattern_bytes);
        let got = emit_ids(&query_bitmap(&index, &pattern));

        let expected: Vec<u32> = records
            .iter()
            .enumerate()
            .filter(|(_, bytes)| reference_match(bytes, &pattern_bytes))
            .map(|(i, _)| i as u32)
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// Order: strictly ascending, no duplicates.
    #[test]
    fn query_result_is_strictly_ascending(records in corpus_strategy(), pattern_bytes in pattern_strategy()) {
        let index = build(records);
        let pattern = Pattern::parse(&pattern_bytes);
        let got = emit_ids(&query_bitmap(&index, &pattern));
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));
    }

    /// Idempotent collapse: collapsing consecutive `%` doesn't change the
    /// result.
    #[test]
    fn collapsing_percents_is_a_noop(records in corpus_strategy(), pattern_bytes in pattern_strategy()) {
        let index = build(records);
        let collapsed: Vec<u8> = {
            let mut out = Vec::new();
            let mut prev_percent = false;
            for &b in &pattern_bytes {
                if b == b'%' {
                    if !prev_percent {
                        out.push(b);
                    }
                    prev_percent = true;
                } else {
                    out.push(b);
                    prev_percent = false;
                }
            }
            out
        };
        let a = emit_ids(&query_bitmap(&index, &Pattern::parse(&pattern_bytes)));
        let b = emit_ids(&query_bitmap(&index, &Pattern::parse(&collapsed)));
        prop_assert_eq!(a, b);
    }

    /// Soundness (spec.md §8) must hold even when a pattern's required span
    /// exceeds `cap_len` — the blind spot `length_ge`'s old clamp-to-cap
    /// behaviour admitted false positives in. `cap_len` here is pinned well
    /// below the pattern/record strategies' max length so this is exercised
    /// on (nearly) every case, not left to chance.
    #[test]
    fn query_is_sound_when_pattern_exceeds_cap_len(
        records in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..10),
            0..12,
        ),
        pattern_bytes in prop::collection::vec(
            prop::sample::select(vec![b'a', b'b', b'c', b'_', b'%']),
            0..10,
        ),
    ) {
        let index = build_with_cap(records.clone(), 4);
        let pattern = Pattern::parse(&pattern_bytes);
        let got = emit_ids(&query_bitmap(&index, &pattern));

        let expected: Vec<u32> = records
            .iter()
            .enumerate()
            .filter(|(_, bytes)| reference_match(bytes, &pattern_bytes))
            .map(|(i, _)| i as u32)
            .collect();

        prop_assert!(got.iter().all(|id| expected.contains(id)));
    }
}

#[cfg(test)]
mod regression {
    use super::build_with_cap;
    use crate::{emit_ids, query_bitmap};
    use test_log::test;
    use wildbit_plan::Pattern;

    /// A Prefix pattern whose slice length exceeds `cap_len` must not match
    /// a record whose capped prefix happens to agree but whose real length
    /// differs — `by_length[cap_len]` is not a valid stand-in for "length
    /// at least N" once N is past `cap_len`.
    #[test]
    fn prefix_pattern_past_cap_len_does_not_false_positive() {
        let source: Vec<std::result::Result<Vec<u8>, std::convert::Infallible>> =
            vec![Ok(b"aaaa".to_vec())];
        let index = wildbit_index::build(source, 4).unwrap();
        let pattern = Pattern::parse(b"aaaaaa%");
        let got = emit_ids(&query_bitmap(&index, &pattern));
        assert!(got.is_empty(), "expected no match, got {got:?}");
    }

    #[test]
    fn prefix_pattern_within_cap_len_still_matches() {
        let records = vec!["aaaa", "aaab", "bbbb"];
        let index = build_with_cap(records.into_iter().map(|s| s.as_bytes().to_vec()).collect(), 4);
        let pattern = Pattern::parse(b"aaa%");
        let got = emit_ids(&query_bitmap(&index, &pattern));
        assert_eq!(got, vec![0, 1]);
    }
}
