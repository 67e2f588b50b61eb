/// A cached height in the layout's unit (points, pixels, rows).
///
/// Heights are non-negative; zero is a legitimate cached value and is distinct from
/// "not cached" (`None` at the cache API).
pub type Height = f64;

/// A (section, row) position in a sectioned list.
///
/// Ordering is section-major, so sorting a batch of paths groups them by section with rows
/// ascending inside each section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self { section, row }
    }
}
