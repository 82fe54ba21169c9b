use crate::{Pattern, Shape};
use test_log::test;

#[test]
fn test_shape_classification() {
    let cases: &[(&[u8], Shape)] = &[
        (b"", Shape::PureWildcards),
        (b"%", Shape::All),
        (b"%%%", Shape::All),
        (b"_", Shape::PureWildcards),
        (b"___", Shape::PureWildcards),
        (b"_%_", Shape::PureWildcards),
        (b"abc", Shape::Exact),
        (b"a%", Shape::Prefix),
        (b"%a", Shape::Suffix),
        (b"%a%", Shape::ContainsOne),
        (b"%b_n%", Shape::ContainsOne),
        (b"a%d", Shape::Multi),
        (b"%an%na", Shape::Multi),
    ];
    for (pattern, expected) in cases {
        let shape = Pattern::parse(pattern).shape();
        assert_eq!(
            shape,
            *expected,
            "pattern {:?} classified as {:?}, expected {:?}",
            String::from_utf8_lossy(pattern),
            shape,
            expected
        );
    }
}

#[test]
fn test_pure_wildcards_underscore_count_and_percent_flag() {
    let no_percent = Pattern::parse(b"___");
    assert_eq!(no_percent.underscore_count(), 3);
    assert!(!no_percent.has_percent());

    let with_percent = Pattern::parse(b"_%__");
    assert_eq!(with_percent.underscore_count(), 3);
    assert!(with_percent.has_percent());

    let empty = Pattern::parse(b"");
    assert_eq!(empty.underscore_count(), 0);
    assert!(!empty.has_percent());
}
