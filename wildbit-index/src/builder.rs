use crate::bitmap::RowBitmap;
use crate::index::Index;
use tracing::debug;
use wildbit_base::{Kind, Result};

/// Build-time bound on the positional range of interest (spec §3). Bytes at
/// offsets `>= DEFAULT_CAP_LEN` contribute to no positional or length
/// bitmap; records longer than this are still stored verbatim and remain
/// eligible for verification-based matching.
pub const DEFAULT_CAP_LEN: usize = 256;

/// Single-pass ingest producing the positional and auxiliary indices from a
/// corpus (spec C4). `source` yields one payload per record in assigned-id
/// order; an `Err` from the iterator is an `IngestFailure` and the partial
/// index is discarded (in Rust this falls out of ownership: the half-built
/// `Index` is simply dropped when this function returns `Err`, there is no
/// arena to explicitly free).
///
/// A `None` payload (the host's representation of a NULL column value) is
/// not a case this function handles directly — per spec §9's resolution,
/// the host is expected to have already substituted an empty `Vec<u8>` for
/// NULL before the value reaches `build`.
pub fn build<I, E>(source: I, cap_len: usize) -> Result<Index>
where
    I: IntoIterator<Item = std::result::Result<Vec<u8>, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut index = Index::new(cap_len);
    let mut length_counts = vec![0u32; cap_len + 1];

    for item in source {
        let bytes = item.map_err(|e| wildbit_base::Error::new(e).with_kind(Kind::IngestFailure))?;
        let n = bytes.len().min(cap_len);
        let id = index.push_record(bytes);
        let record = index.record(id);
        for p in 0..n {
            index.forward_mut().insert(record[p], p, id);
        }
        for p in 0..n {
            index.backward_mut().insert(record[n - 1 - p], p, id);
        }
        length_counts[n] += 1;
    }

    debug!(
        target: "wildbit",
        records = index.num_records(),
        "ingest complete, computing auxiliary indices"
    );

    for byte in 0u16..256 {
        let byte = byte as u8;
        let bm = index.forward_mut().union_all(byte);
        index.set_anywhere(byte, bm);
    }

    let mut by_length: Vec<RowBitmap> = (0..=cap_len).map(|_| RowBitmap::new()).collect();
    for id in 0..index.num_records() {
        let n = index.capped_length(id);
        by_length[n].add(id);
    }
    for (n, bm) in by_length.into_iter().enumerate() {
        if length_counts[n] > 0 {
            index.set_by_length(n, bm);
        }
    }

    debug!(target: "wildbit", cap_len, "index build finished");

    Ok(index)
}
