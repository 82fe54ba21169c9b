use crate::{emit_ids, query_bitmap};
use test_log::test;
use wildbit_plan::Pattern;

fn build_worked_example() -> wildbit_index::Index {
    let corpus: Vec<std::result::Result<Vec<u8>, std::convert::Infallible>> =
        ["", "a", "ab", "abc", "abcd", "xaby", "banana"]
            .into_iter()
            .map(|s| Ok(s.as_bytes().to_vec()))
            .collect();
    wildbit_index::build(corpus, 256).unwrap()
}

fn run(pattern: &str) -> Vec<u32> {
    let index = build_worked_example();
    let p = Pattern::parse(pattern.as_bytes());
    emit_ids(&query_bitmap(&index, &p))
}

#[test]
fn test_worked_example_table() {
    assert_eq!(run("%"), vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(run("_"), vec![1]);
    assert_eq!(run("___"), vec![3]);
    assert_eq!(run("a%"), vec![1, 2, 3, 4]);
    assert_eq!(run("%a"), vec![1]);
    assert_eq!(run("%a%"), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(run("a%d"), vec![4]);
    assert_eq!(run("%b_n%"), vec![6]);
    assert_eq!(run("_a_"), Vec::<u32>::new());
    assert_eq!(run("abc"), vec![3]);
    assert_eq!(run("%an%na"), vec![6]);
}

#[test]
fn test_empty_pattern_matches_only_empty_string() {
    assert_eq!(run(""), vec![0]);
}

#[test]
fn test_all_percent_matches_everything() {
    assert_eq!(run("%%%"), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_contains_one_single_literal_byte_fast_path() {
    // "%n%" — single literal byte, should be exactly anywhere['n'].
    assert_eq!(run("%n%"), vec![6]); // banana
}

#[test]
fn test_contains_one_single_underscore_fast_path() {
    // "%_%" — any record with length >= 1.
    assert_eq!(run("%_%"), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_prefix_and_suffix_with_underscore() {
    assert_eq!(run("a_%"), vec![2, 3, 4]); // ab, abc, abcd
    assert_eq!(run("%_c"), vec![3]); // abc
}

#[test]
fn test_pattern_longer_than_any_record_is_empty() {
    assert_eq!(run("xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"), Vec::<u32>::new());
}
