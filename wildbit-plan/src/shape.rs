/// The closed family of pattern shapes the executor dispatches on
/// (spec.md §4.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Pattern is exactly `%` (or collapses to no slices with a `%` run).
    All,
    /// No literal bytes anywhere; collapses to a length constraint.
    PureWildcards,
    /// One slice, no leading/trailing `%`.
    Exact,
    /// One slice, trailing `%` only.
    Prefix,
    /// One slice, leading `%` only.
    Suffix,
    /// One slice, both leading and trailing `%`.
    ContainsOne,
    /// More than one slice.
    Multi,
}
