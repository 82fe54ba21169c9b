use wildbit_plan::Slice;

/// Byte-level check that `slice` occurs at exactly `offset` in `bytes`,
/// under `_` semantics. Out-of-bounds spans never match.
pub fn slice_matches_at(bytes: &[u8], slice: &Slice, offset: usize) -> bool {
    let n = slice.slice_len();
    match offset.checked_add(n) {
        Some(end) if end <= bytes.len() => {}
        _ => return false,
    }
    (0..n).all(|j| slice.is_underscore_at(j) || bytes[offset + j] == slice.byte_at(j))
}

/// First offset `>= start` at which `slice` occurs contiguously in `bytes`
/// (the "substring with `_`" test of spec.md §9), or `None`. When the slice
/// has at least one literal byte, `memchr` narrows the search to candidate
/// offsets of that byte instead of testing every position.
pub fn find_slice_from(bytes: &[u8], slice: &Slice, start: usize) -> Option<usize> {
    let n = slice.slice_len();
    if start > bytes.len() {
        return None;
    }
    if n == 0 {
        return Some(start);
    }
    if bytes.len() < n {
        return None;
    }
    let last_start = bytes.len() - n;
    if start > last_start {
        return None;
    }

    match (0..n).find(|&j| !slice.is_underscore_at(j)) {
        None => Some(start), // all-`_` slice: the first in-range offset always matches.
        Some(anchor) => {
            let needle = slice.byte_at(anchor);
            let mut search_from = start + anchor;
            let haystack_end = last_start + anchor + 1;
            loop {
                if search_from >= haystack_end {
                    return None;
                }
                let rel = memchr::memchr(needle, &bytes[search_from..haystack_end])?;
                let candidate_start = search_from + rel - anchor;
                if slice_matches_at(bytes, slice, candidate_start) {
                    return Some(candidate_start);
                }
                search_from += rel + 1;
            }
        }
    }
}
