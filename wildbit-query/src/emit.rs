use wildbit_index::{Index, RowBitmap};

/// Converts a result bitmap to an ordered vector of ids (spec.md §4.7).
/// Cardinality is known up front, so the caller can size its own buffer
/// before enumerating.
pub fn emit_ids(bitmap: &RowBitmap) -> Vec<u32> {
    bitmap.enumerate_ascending().collect()
}

pub fn count(bitmap: &RowBitmap) -> u64 {
    bitmap.cardinality()
}

/// Hydrates `(id, bytes)` pairs by reading the corpus back out of the index.
pub fn emit_rows<'a>(index: &'a Index, bitmap: &RowBitmap) -> Vec<(u32, &'a [u8])> {
    bitmap
        .enumerate_ascending()
        .map(|id| (id, index.record(id)))
        .collect()
}
