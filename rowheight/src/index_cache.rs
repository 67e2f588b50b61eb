use alloc::vec::Vec;

use crate::{Height, IndexPath};

/// A position-indexed height cache for a sectioned list.
///
/// Heights are stored per `(section, row)` slot. A slot is either a cached height or absent
/// ("not measured yet"); absence is distinct from a cached height of zero. Storage grows
/// lazily on write, so no upfront sizing call is needed.
///
/// The cache does not observe the hosted list. The caller must mirror every structural edit
/// it applies to the list with the matching operation here (or via [`crate::ListEdit`]),
/// once per edit, in the same order. Out-of-range reads report "not cached" and out-of-range
/// destructive operations are no-ops: a late or malformed edit notification must never bring
/// the host down.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPathHeightCache {
    sections: Vec<Vec<Option<Height>>>,
}

impl IndexPathHeightCache {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Returns `true` iff `path` is in range and holds a cached height.
    ///
    /// Never triggers measurement or growth.
    pub fn exists(&self, path: IndexPath) -> bool {
        self.height(path).is_some()
    }

    /// Returns the cached height at `path`, or `None` when the slot is absent or out of range.
    pub fn height(&self, path: IndexPath) -> Option<Height> {
        self.sections
            .get(path.section)?
            .get(path.row)
            .copied()
            .flatten()
    }

    /// Caches `height` at `path`, growing the storage as needed.
    ///
    /// Missing sections are padded with empty row lists and missing rows with absent slots,
    /// so any position is writable on a fresh cache.
    pub fn set_height(&mut self, path: IndexPath, height: Height) {
        debug_assert!(
            height >= 0.0,
            "negative height (section={}, row={}, height={height})",
            path.section,
            path.row
        );
        htrace!(
            section = path.section,
            row = path.row,
            height,
            "set_height"
        );
        self.build_slot(path);
        self.sections[path.section][path.row] = Some(height);
    }

    /// Resets the slot at `path` to absent. No-op when out of range.
    pub fn clear_height(&mut self, path: IndexPath) {
        if let Some(slot) = self
            .sections
            .get_mut(path.section)
            .and_then(|rows| rows.get_mut(path.row))
        {
            htrace!(section = path.section, row = path.row, "clear_height");
            *slot = None;
        }
    }

    /// Drops every section, equivalent to recreating the cache. Used on a full reload.
    pub fn clear_all(&mut self) {
        hdebug!(sections = self.sections.len(), "clear_all");
        self.sections.clear();
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of row slots tracked in `section` (cached or absent); `0` when out of range.
    pub fn rows_in_section(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    /// Returns `true` when no sections are tracked (fresh or fully cleared).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of cached heights across all sections.
    pub fn cached_len(&self) -> usize {
        self.sections
            .iter()
            .map(|rows| rows.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    /// Mirrors inserting a new section at `section`: existing sections at `section` and later
    /// shift one position later. When `section` is beyond the current length, pads with empty
    /// sections up to and including it.
    pub fn insert_section(&mut self, section: usize) {
        hdebug!(section, "insert_section");
        if section >= self.sections.len() {
            self.build_sections_through(section);
        } else {
            self.sections.insert(section, Vec::new());
        }
    }

    /// Mirrors deleting the section at `section`: later sections shift one position earlier.
    /// No-op when out of range.
    pub fn delete_section(&mut self, section: usize) {
        hdebug!(section, "delete_section");
        if section < self.sections.len() {
            self.sections.remove(section);
        }
    }

    /// Mirrors reloading a whole section: every row slot in it becomes absent, section count
    /// unchanged. Pads with empty sections when `section` is out of range.
    pub fn reload_section(&mut self, section: usize) {
        hdebug!(section, "reload_section");
        self.build_sections_through(section);
        self.sections[section].clear();
    }

    /// Mirrors two sections trading positions (section-granularity reorder): swaps the two
    /// entries in place, growing so both indices exist first.
    pub fn exchange_sections(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        hdebug!(a, b, "exchange_sections");
        self.build_sections_through(a.max(b));
        self.sections.swap(a, b);
    }

    /// Mirrors a batch row insertion. Each path names where a new row appears, in post-edit
    /// coordinates; an absent slot is inserted there and later rows in that section shift one
    /// position later.
    ///
    /// The batch is normalized internally (ascending row order within each section) so the
    /// caller does not have to pre-sort: applying a lower insertion first keeps the higher
    /// targets in the same batch meaningful.
    pub fn insert_rows(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        let mut paths: Vec<IndexPath> = paths.into_iter().collect();
        paths.sort_unstable();
        hdebug!(count = paths.len(), "insert_rows");
        for path in paths {
            self.build_sections_through(path.section);
            let rows = &mut self.sections[path.section];
            if path.row > rows.len() {
                rows.resize(path.row, None);
            }
            rows.insert(path.row, None);
        }
    }

    /// Mirrors a batch row deletion. Each path names a removed row, in pre-edit coordinates;
    /// later rows in that section shift one position earlier.
    ///
    /// The batch is normalized internally (descending row order within each section): removing
    /// a higher row first keeps the lower indices in the same batch meaningful. Out-of-range
    /// paths are skipped.
    pub fn delete_rows(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        let mut paths: Vec<IndexPath> = paths.into_iter().collect();
        paths.sort_unstable_by(|x, y| y.cmp(x));
        hdebug!(count = paths.len(), "delete_rows");
        for path in paths {
            if let Some(rows) = self.sections.get_mut(path.section) {
                if path.row < rows.len() {
                    rows.remove(path.row);
                }
            }
        }
    }

    /// Mirrors reloading individual rows: each named slot is reset to absent so the next
    /// lookup re-measures, with row counts unchanged. Out-of-range paths pad the storage
    /// (the slot then exists, absent), consistent with the grow-on-write policy.
    pub fn reload_rows(&mut self, paths: impl IntoIterator<Item = IndexPath>) {
        for path in paths {
            htrace!(section = path.section, row = path.row, "reload_row");
            self.build_slot(path);
            self.sections[path.section][path.row] = None;
        }
    }

    /// Mirrors moving one row from `from` to `to`, across sections when they differ.
    ///
    /// The slot is removed at `from` and reinserted at `to` carrying its value, cached or
    /// absent. Both endpoints are made addressable first, so a move into uncached territory
    /// pads rather than fails.
    pub fn move_row(&mut self, from: IndexPath, to: IndexPath) {
        hdebug!(
            from_section = from.section,
            from_row = from.row,
            to_section = to.section,
            to_row = to.row,
            "move_row"
        );
        self.build_slot(from);
        let value = self.sections[from.section].remove(from.row);
        self.build_sections_through(to.section);
        let rows = &mut self.sections[to.section];
        if to.row > rows.len() {
            rows.resize(to.row, None);
        }
        rows.insert(to.row, value);
    }

    fn build_sections_through(&mut self, section: usize) {
        if section >= self.sections.len() {
            self.sections.resize_with(section + 1, Vec::new);
        }
    }

    fn build_slot(&mut self, path: IndexPath) {
        self.build_sections_through(path.section);
        let rows = &mut self.sections[path.section];
        if path.row >= rows.len() {
            rows.resize(path.row + 1, None);
        }
    }
}
