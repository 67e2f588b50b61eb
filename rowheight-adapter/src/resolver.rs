use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(not(feature = "std"))]
use alloc::collections::btree_map::Entry;
#[cfg(feature = "std")]
use std::collections::hash_map::Entry;

use rowheight::{CacheKey, Height, IndexPath, IndexPathHeightCache, KeyHeightCache, ListEdit};

use crate::TemplateMeasurer;

#[cfg(feature = "std")]
type TemplateMap<T> = HashMap<String, T>;
#[cfg(not(feature = "std"))]
type TemplateMap<T> = BTreeMap<String, T>;

/// Answers height queries for a hosted list, measuring only on a cache miss.
///
/// The resolver owns a [`TemplateMeasurer`], the lazily-populated template registry (one
/// template per reuse identifier), and both caches: heights by position
/// ([`IndexPathHeightCache`]) and heights by model key ([`KeyHeightCache`]).
///
/// Each height entry point takes a `configure` closure that fills the template with the
/// row's model data before layout. On a cache hit the closure is not called and no template
/// is touched; that is the fast path.
///
/// One resolver serves one hosted list; feed it the list's structural edits via
/// [`HeightResolver::apply_edit`] so positional entries stay aligned.
pub struct HeightResolver<M: TemplateMeasurer, K = u64> {
    measurer: M,
    templates: TemplateMap<M::Template>,
    by_index_path: IndexPathHeightCache,
    by_key: KeyHeightCache<K>,
}

impl<M: TemplateMeasurer, K: CacheKey> HeightResolver<M, K> {
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            templates: TemplateMap::new(),
            by_index_path: IndexPathHeightCache::new(),
            by_key: KeyHeightCache::new(),
        }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    pub fn index_path_cache(&self) -> &IndexPathHeightCache {
        &self.by_index_path
    }

    pub fn index_path_cache_mut(&mut self) -> &mut IndexPathHeightCache {
        &mut self.by_index_path
    }

    pub fn key_cache(&self) -> &KeyHeightCache<K> {
        &self.by_key
    }

    pub fn key_cache_mut(&mut self) -> &mut KeyHeightCache<K> {
        &mut self.by_key
    }

    /// Returns the reusable template for `identifier`, creating it on first use.
    pub fn template(&mut self, identifier: &str) -> Result<&mut M::Template, M::Error> {
        Self::template_entry(&mut self.templates, &mut self.measurer, identifier)
    }

    /// Measures a height with no caching: configure the template, lay it out, return the
    /// result.
    ///
    /// This is also the entry point for one-off surfaces like section header/footer views,
    /// which differ only in which template the identifier names.
    pub fn height_for(
        &mut self,
        identifier: &str,
        configure: impl FnOnce(&mut M::Template),
    ) -> Result<Height, M::Error> {
        let template = Self::template_entry(&mut self.templates, &mut self.measurer, identifier)?;
        configure(template);
        self.measurer.measure(template)
    }

    /// Returns the height for the row at `path`, measuring and caching it on a miss.
    ///
    /// Failed measurements are not cached; the next lookup for `path` measures again.
    pub fn height_for_index_path(
        &mut self,
        identifier: &str,
        path: IndexPath,
        configure: impl FnOnce(&mut M::Template),
    ) -> Result<Height, M::Error> {
        if let Some(height) = self.by_index_path.height(path) {
            return Ok(height);
        }
        let height = self.height_for(identifier, configure)?;
        self.by_index_path.set_height(path, height);
        Ok(height)
    }

    /// Returns the height for the row identified by `key`, measuring and caching it on a
    /// miss.
    ///
    /// Keyed entries survive arbitrary reordering of the list; invalidate a key with
    /// [`HeightResolver::invalidate_key`] when its model data changes.
    pub fn height_for_key(
        &mut self,
        identifier: &str,
        key: K,
        configure: impl FnOnce(&mut M::Template),
    ) -> Result<Height, M::Error> {
        if let Some(height) = self.by_key.height(&key) {
            return Ok(height);
        }
        let height = self.height_for(identifier, configure)?;
        self.by_key.set_height(key, height);
        Ok(height)
    }

    /// Removes the keyed entry for `key`, returning the height it held.
    pub fn invalidate_key(&mut self, key: &K) -> Option<Height> {
        self.by_key.invalidate(key)
    }

    /// Mirrors one structural edit of the hosted list.
    ///
    /// Positional edits renumber the position cache and leave keyed entries alone;
    /// [`ListEdit::ReloadData`] is the full-reset trigger and clears both caches.
    pub fn apply_edit(&mut self, edit: &ListEdit) {
        match edit {
            ListEdit::ReloadData => self.reload_data(),
            other => self.by_index_path.apply(other),
        }
    }

    /// Mirrors a sequence of structural edits, in order.
    pub fn apply_edits<'a>(&mut self, edits: impl IntoIterator<Item = &'a ListEdit>) {
        for edit in edits {
            self.apply_edit(edit);
        }
    }

    /// Clears both caches unconditionally. Call when the hosted list reloads everything.
    ///
    /// Templates are kept; reuse identifiers outlive data reloads.
    pub fn reload_data(&mut self) {
        self.by_index_path.clear_all();
        self.by_key.clear_all();
    }

    fn template_entry<'a>(
        templates: &'a mut TemplateMap<M::Template>,
        measurer: &mut M,
        identifier: &str,
    ) -> Result<&'a mut M::Template, M::Error> {
        match templates.entry(String::from(identifier)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(measurer.create_template(identifier)?)),
        }
    }
}
