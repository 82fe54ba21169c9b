use wildbit_index::{Index, RowBitmap};
use wildbit_plan::Slice;

/// `{ id : for every offset j in 0..slice_len, the byte at p+j matches
/// s[j] under `_` semantics }`, intersected with the length lower bound
/// the span implies (spec.md §4.6.1). A `_` position contributes
/// `any_byte_at(p+j)` — a positional constraint, not a no-op, which is the
/// bug the source's buggy variants exhibit (spec.md §9).
///
/// Offsets `>= cap_len` carry no positional bitmap at all (spec.md §4.6.6),
/// so bytes out there go unverified by this loop; nothing downstream
/// verifies them either for this shape. The `length_ge` call below is what
/// actually rules those records out: once `p + slice_len() > cap_len`, it
/// returns empty, so a pattern whose span reaches past the cap is reported
/// as no match rather than risking an unverified false positive.
pub fn match_at(index: &Index, slice: &Slice, p: usize) -> RowBitmap {
    let mut acc: Option<RowBitmap> = None;
    for j in 0..slice.slice_len() {
        let offset = p + j;
        if offset >= index.cap_len() {
            continue;
        }
        let bm = if slice.is_underscore_at(j) {
            index.any_byte_at(offset)
        } else {
            index.forward_at(slice.byte_at(j), offset).cloned()
        };
        let Some(bm) = bm else {
            return RowBitmap::new();
        };
        let acc = acc.get_or_insert_with(|| bm.clone());
        acc.and_in_place(&bm);
        if acc.is_empty() {
            return RowBitmap::new();
        }
    }
    let mut result = acc.unwrap_or_else(|| index.all_ids());
    result.and_in_place(&index.length_ge(p + slice.slice_len()));
    result
}

/// Symmetric variant of [`match_at`] anchored `k` bytes from the end of the
/// record (`k == 0` means the slice's last byte is the record's last byte).
/// Same `length_ge` cutoff applies: once `n + k > cap_len` the trailing
/// `length_ge` call returns empty rather than admit an unverified record.
pub fn match_at_end(index: &Index, slice: &Slice, k: usize) -> RowBitmap {
    let n = slice.slice_len();
    let mut acc: Option<RowBitmap> = None;
    for j in 0..n {
        let m = k + n - j;
        if m > index.cap_len() {
            continue;
        }
        let bm = if slice.is_underscore_at(j) {
            index.any_byte_at_end(m)
        } else {
            index.backward_at(slice.byte_at(j), m).cloned()
        };
        let Some(bm) = bm else {
            return RowBitmap::new();
        };
        let acc = acc.get_or_insert_with(|| bm.clone());
        acc.and_in_place(&bm);
        if acc.is_empty() {
            return RowBitmap::new();
        }
    }
    let mut result = acc.unwrap_or_else(|| index.all_ids());
    result.and_in_place(&index.length_ge(n + k));
    result
}

/// `⋂_{b in distinct_literals(s)} anywhere[b]` — a cheap superset of any
/// record that could contain `s` as a substring. Absent entries (a literal
/// byte present in no record) collapse the whole intersection to empty.
pub fn char_candidates(index: &Index, slice: &Slice) -> RowBitmap {
    let mut acc: Option<RowBitmap> = None;
    for byte in slice.distinct_literals().iter_ascending() {
        let Some(bm) = index.anywhere(byte) else {
            return RowBitmap::new();
        };
        let acc = acc.get_or_insert_with(|| bm.clone());
        acc.and_in_place(bm);
        if acc.is_empty() {
            return RowBitmap::new();
        }
    }
    acc.unwrap_or_else(|| index.all_ids())
}

pub fn length_ge(index: &Index, n: usize) -> RowBitmap {
    index.length_ge(n)
}

pub fn length_eq(index: &Index, n: usize) -> RowBitmap {
    index.by_length(n).cloned().unwrap_or_default()
}
