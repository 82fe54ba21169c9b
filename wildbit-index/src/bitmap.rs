use roaring::RoaringBitmap;

/// The set-of-row-ids primitive (spec component C1). Backed by a compressed
/// bitmap rather than a plain packed block array: most positional bitmaps in
/// a wide column are sparse (only a handful of records share a given byte at
/// a given offset), and `roaring`'s run/array/bitmap hybrid representation
/// stays small for both the sparse and the dense case without the caller
/// having to pick one up front.
///
/// Enumeration is always ascending; this is a property of the underlying
/// representation, not something this wrapper has to maintain itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowBitmap(RoaringBitmap);

impl RowBitmap {
    pub fn new() -> Self {
        RowBitmap(RoaringBitmap::new())
    }

    /// All of `0..n`, used for the `ALL` plan and as the universe bitmap for
    /// `length_ge`.
    pub fn full_range(n: u32) -> Self {
        RowBitmap(RoaringBitmap::from_sorted_iter(0..n).expect("0..n is sorted"))
    }

    pub fn add(&mut self, id: u32) -> bool {
        self.0.insert(id)
    }

    pub fn and(a: &Self, b: &Self) -> Self {
        RowBitmap(&a.0 & &b.0)
    }

    pub fn or(a: &Self, b: &Self) -> Self {
        RowBitmap(&a.0 | &b.0)
    }

    pub fn and_in_place(&mut self, other: &Self) {
        self.0 &= &other.0;
    }

    pub fn or_in_place(&mut self, other: &Self) {
        self.0 |= &other.0;
    }

    pub fn cardinality(&self) -> u64 {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(id)
    }

    /// Ascending, per the roaring container invariant.
    pub fn enumerate_ascending(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter()
    }
}

impl FromIterator<u32> for RowBitmap {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        RowBitmap(iter.into_iter().collect())
    }
}
