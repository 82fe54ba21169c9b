//! The four host-facing operations of spec.md §6, bundled behind an
//! explicit [`Handle`] parameter rather than the original's process-wide
//! singleton (spec.md §9's "global singleton" redesign flag).

use std::sync::Arc;
use tracing::warn;
use wildbit_base::Result;
use wildbit_index::{Index, DEFAULT_CAP_LEN};
use wildbit_plan::Pattern;

/// A built (or not-yet-built) index. Once built it is immutable and, being
/// plain owned data behind an `Arc`, `Send + Sync` — multiple callers may
/// hold a clone and query concurrently with no locking (spec.md §5).
#[derive(Clone, Default)]
pub struct Handle {
    index: Option<Arc<Index>>,
}

impl Handle {
    /// A handle with no index yet. Querying it is not an error: per
    /// spec.md §7 `NotBuilt` "returns an empty result and signals a warning
    /// via the host's reporting channel" rather than failing the call.
    pub fn empty() -> Self {
        Handle { index: None }
    }

    /// Consumes `source` in order, assigning ids `0..N`, and returns a
    /// handle wrapping the fully built index. `source` yields one payload
    /// per record; an `Err` item is surfaced as `IngestFailure` and the
    /// partial index is discarded (spec.md §4.4/§7).
    pub fn build<I, E>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = std::result::Result<Vec<u8>, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::build_with_cap(source, DEFAULT_CAP_LEN)
    }

    /// As [`Handle::build`], with an explicit positional range cap `L`
    /// (spec.md §3) instead of [`DEFAULT_CAP_LEN`].
    pub fn build_with_cap<I, E>(source: I, cap_len: usize) -> Result<Self>
    where
        I: IntoIterator<Item = std::result::Result<Vec<u8>, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let index = wildbit_index::build(source, cap_len)?;
        Ok(Handle {
            index: Some(Arc::new(index)),
        })
    }

    fn index_or_warn(&self) -> Option<&Index> {
        match &self.index {
            Some(index) => Some(index.as_ref()),
            None => {
                warn!(target: "wildbit", "query issued against a handle with no built index");
                None
            }
        }
    }

    /// Number of matches for `pattern` (spec.md §6.2).
    pub fn query_count(&self, pattern: &[u8]) -> u64 {
        match self.index_or_warn() {
            Some(index) => {
                let parsed = Pattern::parse(pattern);
                wildbit_query::count(&wildbit_query::query_bitmap(index, &parsed))
            }
            None => 0,
        }
    }

    /// Ascending, duplicate-free row ids matching `pattern` (spec.md §6.3).
    pub fn query_ids(&self, pattern: &[u8]) -> Vec<u32> {
        match self.index_or_warn() {
            Some(index) => {
                let parsed = Pattern::parse(pattern);
                wildbit_query::emit_ids(&wildbit_query::query_bitmap(index, &parsed))
            }
            None => Vec::new(),
        }
    }

    /// Matching ids with borrowed row payloads (spec.md §6.4).
    pub fn query_rows(&self, pattern: &[u8]) -> Vec<(u32, &[u8])> {
        match self.index_or_warn() {
            Some(index) => {
                let parsed = Pattern::parse(pattern);
                wildbit_query::emit_rows(index, &wildbit_query::query_bitmap(index, &parsed))
            }
            None => Vec::new(),
        }
    }

    pub fn num_records(&self) -> u32 {
        self.index.as_ref().map_or(0, |i| i.num_records())
    }

    pub fn is_built(&self) -> bool {
        self.index.is_some()
    }
}

/// Convenience entry point matching spec.md §6's signature shape exactly:
/// build straight to a `Result`, no separate `empty()`/assignment step.
pub fn build<I, E>(source: I) -> Result<Handle>
where
    I: IntoIterator<Item = std::result::Result<Vec<u8>, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    Handle::build(source)
}
