use crate::bitmap::RowBitmap;
use crate::positional::PositionalIndex;

/// The fully-built, immutable index: positional forward/backward bitmaps
/// (C2), the character-anywhere and length auxiliary bitmaps plus the raw
/// corpus (C3). Produced once by [`crate::builder::build`] and never
/// mutated afterwards — every accessor here takes `&self`, so an `Index` can
/// be shared behind an `Arc` and queried from multiple threads at once, per
/// spec §5.
pub struct Index {
    cap_len: usize,
    num_records: u32,
    forward: PositionalIndex,
    backward: PositionalIndex,
    anywhere: Box<[Option<RowBitmap>; 256]>,
    by_length: Vec<Option<RowBitmap>>,
    corpus: Vec<Vec<u8>>,
}

impl Index {
    pub(crate) fn new(cap_len: usize) -> Self {
        Index {
            cap_len,
            num_records: 0,
            forward: PositionalIndex::new(cap_len),
            backward: PositionalIndex::new(cap_len),
            anywhere: Box::new(std::array::from_fn(|_| None)),
            by_length: vec![None; cap_len + 1],
            corpus: Vec::new(),
        }
    }

    /// `L` from spec §3: the build-time bound on the positional range of
    /// interest. Offsets `>= cap_len` contribute to no positional or length
    /// bitmap.
    pub fn cap_len(&self) -> usize {
        self.cap_len
    }

    pub fn num_records(&self) -> u32 {
        self.num_records
    }

    pub fn record(&self, id: u32) -> &[u8] {
        &self.corpus[id as usize]
    }

    pub fn capped_length(&self, id: u32) -> usize {
        self.record(id).len().min(self.cap_len)
    }

    /// `pos[byte][p]`.
    pub fn forward_at(&self, byte: u8, p: usize) -> Option<&RowBitmap> {
        if p >= self.cap_len {
            return None;
        }
        self.forward.get(byte, p)
    }

    /// `neg[byte][-k]`, `k` counted 1-based from the end (`k == 1` is the
    /// last byte of the record).
    pub fn backward_at(&self, byte: u8, k: usize) -> Option<&RowBitmap> {
        if k == 0 || k > self.cap_len {
            return None;
        }
        self.backward.get(byte, k - 1)
    }

    /// `any_byte_at(p) = ⋃_b pos[b][p]`.
    pub fn any_byte_at(&self, p: usize) -> Option<RowBitmap> {
        if p >= self.cap_len {
            return None;
        }
        self.forward.any_byte_at(p)
    }

    /// Backward counterpart of [`Index::any_byte_at`]: `⋃_b neg[b][-k]`,
    /// `k` 1-based from the end.
    pub fn any_byte_at_end(&self, k: usize) -> Option<RowBitmap> {
        if k == 0 || k > self.cap_len {
            return None;
        }
        self.backward.any_byte_at(k - 1)
    }

    /// `anywhere[byte]`.
    pub fn anywhere(&self, byte: u8) -> Option<&RowBitmap> {
        self.anywhere[byte as usize].as_ref()
    }

    /// `by_length[n]`, `n` in `0..=cap_len`.
    pub fn by_length(&self, n: usize) -> Option<&RowBitmap> {
        self.by_length.get(n).and_then(|o| o.as_ref())
    }

    /// `⋃_{k >= n} by_length[k]`. `by_length` is only defined on `[0,
    /// cap_len]` (spec.md §3), so for `n > cap_len` there is no `k >= n` in
    /// its domain and the union is empty — *not* `by_length[cap_len]`.
    /// Returning `by_length[cap_len]` there would admit every record whose
    /// true length merely reaches `cap_len`, even though nothing downstream
    /// verifies the remaining `n - cap_len` bytes of span a caller (e.g.
    /// `match_at`/`match_at_end` for a slice longer than `cap_len`) is
    /// relying on this bound to rule out.
    pub fn length_ge(&self, n: usize) -> RowBitmap {
        if n > self.cap_len {
            return RowBitmap::new();
        }
        let mut acc = RowBitmap::new();
        for k in n..=self.cap_len {
            if let Some(bm) = self.by_length(k) {
                acc.or_in_place(bm);
            }
        }
        acc
    }

    pub fn all_ids(&self) -> RowBitmap {
        RowBitmap::full_range(self.num_records)
    }

    pub(crate) fn forward_mut(&mut self) -> &mut PositionalIndex {
        &mut self.forward
    }

    pub(crate) fn backward_mut(&mut self) -> &mut PositionalIndex {
        &mut self.backward
    }

    pub(crate) fn set_anywhere(&mut self, byte: u8, bm: Option<RowBitmap>) {
        self.anywhere[byte as usize] = bm;
    }

    pub(crate) fn set_by_length(&mut self, n: usize, bm: RowBitmap) {
        self.by_length[n] = Some(bm);
    }

    pub(crate) fn push_record(&mut self, bytes: Vec<u8>) -> u32 {
        let id = self.corpus.len() as u32;
        self.corpus.push(bytes);
        self.num_records = self.corpus.len() as u32;
        id
    }
}
