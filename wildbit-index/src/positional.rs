use crate::bitmap::RowBitmap;

/// A per-byte collection of `(offset, bitmap)` entries, kept sorted by offset
/// so lookup and insertion are both binary-search based — sub-linear in the
/// number of distinct offsets actually populated for that byte, per spec.
/// Most bytes only ever see a handful of distinct offsets in a real column,
/// so a sorted `Vec` beats a hash table on both memory and cache behaviour
/// here; a direct-indexed array of `Option<RowBitmap>` would also satisfy the
/// contract but wastes `L` slots per byte value even when the byte appears
/// at only one or two offsets.
#[derive(Clone, Debug, Default)]
struct OffsetMap {
    entries: Vec<(u16, RowBitmap)>,
}

impl OffsetMap {
    fn get(&self, offset: u16) -> Option<&RowBitmap> {
        self.entries
            .binary_search_by_key(&offset, |(o, _)| *o)
            .ok()
            .map(|i| &self.entries[i].1)
    }

    fn entry_mut(&mut self, offset: u16) -> &mut RowBitmap {
        match self.entries.binary_search_by_key(&offset, |(o, _)| *o) {
            Ok(i) => &mut self.entries[i].1,
            Err(i) => {
                self.entries.insert(i, (offset, RowBitmap::new()));
                &mut self.entries[i].1
            }
        }
    }
}

/// One `OffsetMap` per possible byte value. `cap` is the positional range
/// of interest (`L` from spec §3); offsets `>= cap` are a precondition
/// violation to insert or query, caught with a `debug_assert!` since a
/// correct planner/builder never produces one.
#[derive(Clone, Debug)]
pub(crate) struct PositionalIndex {
    by_byte: Box<[OffsetMap; 256]>,
    cap: usize,
}

impl PositionalIndex {
    pub(crate) fn new(cap: usize) -> Self {
        PositionalIndex {
            by_byte: Box::new(std::array::from_fn(|_| OffsetMap::default())),
            cap,
        }
    }

    pub(crate) fn insert(&mut self, byte: u8, offset: usize, id: u32) {
        debug_assert!(
            offset < self.cap,
            "positional offset {offset} out of range (cap {})",
            self.cap
        );
        self.by_byte[byte as usize]
            .entry_mut(offset as u16)
            .add(id);
    }

    pub(crate) fn get(&self, byte: u8, offset: usize) -> Option<&RowBitmap> {
        debug_assert!(
            offset < self.cap,
            "positional offset {offset} out of range (cap {})",
            self.cap
        );
        self.by_byte[byte as usize].get(offset as u16)
    }

    /// Union of every positional bitmap for `byte`, i.e. `anywhere[byte]`
    /// recomputed from scratch. Used by the builder at close-out and
    /// available for tests that want to cross-check the cached version.
    pub(crate) fn union_all(&self, byte: u8) -> Option<RowBitmap> {
        let map = &self.by_byte[byte as usize];
        map.entries.iter().fold(None, |acc, (_, bm)| match acc {
            None => Some(bm.clone()),
            Some(mut acc) => {
                acc.or_in_place(bm);
                Some(acc)
            }
        })
    }

    /// Every record with *any* byte present at `offset`, across all 256 byte
    /// values — the `any_byte_at(k)` operator a `_` position intersects
    /// against (spec §4.6.1/§4.6.5).
    pub(crate) fn any_byte_at(&self, offset: usize) -> Option<RowBitmap> {
        debug_assert!(
            offset < self.cap,
            "positional offset {offset} out of range (cap {})",
            self.cap
        );
        let mut acc: Option<RowBitmap> = None;
        for map in self.by_byte.iter() {
            if let Some(bm) = map.get(offset as u16) {
                acc = Some(match acc {
                    None => bm.clone(),
                    Some(mut acc) => {
                        acc.or_in_place(bm);
                        acc
                    }
                });
            }
        }
        acc
    }
}
