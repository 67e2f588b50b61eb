#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use alloc::vec::Vec;

use crate::Height;

#[cfg(feature = "std")]
type KeyHeightMap<K> = HashMap<K, Height>;
#[cfg(not(feature = "std"))]
type KeyHeightMap<K> = BTreeMap<K, Height>;

#[cfg(feature = "std")]
pub trait CacheKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> CacheKey for K {}

#[cfg(not(feature = "std"))]
pub trait CacheKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> CacheKey for K {}

/// A height cache keyed by a caller-defined identity instead of a position.
///
/// Use this when rows have stable model identities: a cached height survives arbitrary
/// reordering of the list, so there is no structural synchronization to do. The trade-off is
/// that invalidation is entirely caller-driven: when a model object changes, call
/// [`KeyHeightCache::invalidate`] for its key.
#[derive(Clone, Debug)]
pub struct KeyHeightCache<K> {
    entries: KeyHeightMap<K>,
}

impl<K: CacheKey> Default for KeyHeightCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey> KeyHeightCache<K> {
    pub fn new() -> Self {
        Self {
            entries: KeyHeightMap::new(),
        }
    }

    pub fn exists(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn set_height(&mut self, key: K, height: Height) {
        debug_assert!(height >= 0.0, "negative height (height={height})");
        self.entries.insert(key, height);
    }

    pub fn height(&self, key: &K) -> Option<Height> {
        self.entries.get(key).copied()
    }

    /// Removes the entry for `key`, returning the height it held.
    pub fn invalidate(&mut self, key: &K) -> Option<Height> {
        self.entries.remove(key)
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the cached heights without allocations.
    pub fn for_each(&self, mut f: impl FnMut(&K, Height)) {
        for (key, height) in self.entries.iter() {
            f(key, *height);
        }
    }

    /// Exports the cached heights as a `Vec` (useful for persistence).
    pub fn export(&self) -> Vec<(K, Height)>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.entries.len());
        self.for_each(|key, height| out.push((key.clone(), height)));
        out
    }

    /// Replaces the cached heights from an iterator (useful when restoring state).
    pub fn import(&mut self, entries: impl IntoIterator<Item = (K, Height)>) {
        self.entries.clear();
        for (key, height) in entries {
            self.entries.insert(key, height);
        }
    }
}
