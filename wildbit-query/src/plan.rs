use crate::atoms;
use crate::verify::find_slice_from;
use tracing::trace;
use wildbit_index::{Index, RowBitmap};
use wildbit_plan::{Pattern, Shape};

/// Compiles `pattern` against `index` into the final result bitmap,
/// dispatching on [`Shape`] (spec.md §4.6.2). This is the only entry point
/// `wildbit` needs from this crate beyond the emitter.
pub fn query_bitmap(index: &Index, pattern: &Pattern) -> RowBitmap {
    match pattern.shape() {
        Shape::All => index.all_ids(),
        Shape::PureWildcards => {
            let k = pattern.underscore_count();
            if pattern.has_percent() {
                atoms::length_ge(index, k)
            } else {
                atoms::length_eq(index, k)
            }
        }
        Shape::Exact => {
            let s0 = &pattern.slices()[0];
            let mut result = atoms::match_at(index, s0, 0);
            result.and_in_place(&atoms::length_eq(index, s0.slice_len()));
            result
        }
        Shape::Prefix => {
            let s0 = &pattern.slices()[0];
            let mut result = atoms::match_at(index, s0, 0);
            result.and_in_place(&atoms::char_candidates(index, s0));
            result
        }
        Shape::Suffix => {
            let s0 = &pattern.slices()[0];
            let mut result = atoms::match_at_end(index, s0, 0);
            result.and_in_place(&atoms::char_candidates(index, s0));
            result
        }
        Shape::ContainsOne => contains_one(index, pattern),
        Shape::Multi => multi(index, pattern),
    }
}

fn contains_one(index: &Index, pattern: &Pattern) -> RowBitmap {
    let s0 = &pattern.slices()[0];

    // A single literal byte is exactly `anywhere[byte]`, no verification
    // needed at all (spec.md §5 supplemental behaviour).
    if s0.slice_len() == 1 {
        if s0.is_underscore_at(0) {
            return atoms::length_ge(index, 1);
        }
        return index.anywhere(s0.byte_at(0)).cloned().unwrap_or_default();
    }

    let mut cand = atoms::char_candidates(index, s0);
    cand.and_in_place(&atoms::length_ge(index, s0.slice_len()));
    if cand.is_empty() {
        return cand;
    }

    let mut result = RowBitmap::new();
    for id in cand.enumerate_ascending() {
        if find_slice_from(index.record(id), s0, 0).is_some() {
            result.add(id);
        }
    }
    result
}

fn multi(index: &Index, pattern: &Pattern) -> RowBitmap {
    let slices = pattern.slices();

    let mut cand: Option<RowBitmap> = None;
    for s in slices {
        let bm = atoms::char_candidates(index, s);
        let acc = cand.get_or_insert_with(|| bm.clone());
        acc.and_in_place(&bm);
    }
    let mut cand = cand.unwrap_or_else(|| index.all_ids());
    cand.and_in_place(&atoms::length_ge(index, pattern.min_length()));
    if cand.is_empty() {
        return cand;
    }

    if !pattern.starts_with_percent() {
        cand.and_in_place(&atoms::match_at(index, &slices[0], 0));
    }
    if !pattern.ends_with_percent() {
        cand.and_in_place(&atoms::match_at_end(index, &slices[slices.len() - 1], 0));
    }
    if cand.is_empty() {
        return cand;
    }

    trace!(target: "wildbit", candidates = cand.cardinality(), "verifying multi-slice pattern");

    let mut result = RowBitmap::new();
    for id in cand.enumerate_ascending() {
        let record = index.record(id);
        if ordered_slices_placeable(record, pattern) {
            result.add(id);
        }
    }
    result
}

/// The ordered-slice scan of spec.md §4.6.3: place each slice, left to
/// right, at the first available offset at or after the previous slice's
/// end, honouring the pattern's anchoring flags. Authoritative — the
/// bitmap-algebra steps before this are a superset filter only.
fn ordered_slices_placeable(record: &[u8], pattern: &Pattern) -> bool {
    let slices = pattern.slices();
    let mut cursor = 0usize;
    let mut first_offset = None;
    let mut last_end = None;

    for slice in slices {
        match find_slice_from(record, slice, cursor) {
            Some(offset) => {
                first_offset.get_or_insert(offset);
                cursor = offset + slice.slice_len();
                last_end = Some(cursor);
            }
            None => return false,
        }
    }

    if !pattern.starts_with_percent() && first_offset != Some(0) {
        return false;
    }
    if !pattern.ends_with_percent() && last_end != Some(record.len()) {
        return false;
    }
    true
}
