/// Reference-counted asset cache.
///
/// Assets are keyed by their reference (URL, bundled path). Each `acquire`
/// adds one consumer, each `release` removes one; an asset is evicted when
/// its last consumer releases it. `preload` warms an entry without a
/// consumer so the first `acquire` is free; unclaimed preloads are dropped by
/// `evict_unused`.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_bail, viewer_debug};

struct CacheEntry<T> {
    asset: Arc<T>,
    refcount: u32,
}

/// Cache of shared, immutable assets
pub struct AssetCache<T> {
    label: &'static str,
    entries: FxHashMap<String, CacheEntry<T>>,
}

impl<T> AssetCache<T> {
    /// Create an empty cache. `label` tags log lines ("scene", "texture").
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: FxHashMap::default(),
        }
    }

    /// Get or load an asset and register one consumer.
    ///
    /// `load` runs only on a miss. A failed load leaves the cache unchanged.
    pub fn acquire<F>(&mut self, key: &str, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.refcount += 1;
            return Ok(entry.asset.clone());
        }

        let asset = Arc::new(load()?);
        viewer_debug!("showroom::AssetCache", "Loaded {} '{}'", self.label, key);
        self.entries.insert(key.to_string(), CacheEntry { asset: asset.clone(), refcount: 1 });
        Ok(asset)
    }

    /// Load an asset ahead of first use without registering a consumer.
    ///
    /// No-op if the asset is already resident.
    pub fn preload<F>(&mut self, key: &str, load: F) -> Result<()>
    where
        F: FnOnce() -> Result<T>,
    {
        if self.entries.contains_key(key) {
            return Ok(());
        }
        let asset = Arc::new(load()?);
        viewer_debug!("showroom::AssetCache", "Preloaded {} '{}'", self.label, key);
        self.entries.insert(key.to_string(), CacheEntry { asset, refcount: 0 });
        Ok(())
    }

    /// Drop one consumer. Returns `true` if the asset was evicted.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not resident or has no consumer.
    pub fn release(&mut self, key: &str) -> Result<bool> {
        let Some(entry) = self.entries.get_mut(key) else {
            engine_bail!("showroom::AssetCache", "Release of non-resident {} '{}'", self.label, key);
        };
        if entry.refcount == 0 {
            engine_bail!("showroom::AssetCache", "Release of unclaimed {} '{}'", self.label, key);
        }

        entry.refcount -= 1;
        if entry.refcount == 0 {
            self.entries.remove(key);
            viewer_debug!("showroom::AssetCache", "Evicted {} '{}'", self.label, key);
            return Ok(true);
        }
        Ok(false)
    }

    /// Drop every entry with no consumer (unclaimed preloads). Returns the count.
    pub fn evict_unused(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.refcount > 0);
        before - self.entries.len()
    }

    /// Current consumer count (None if not resident)
    pub fn refcount(&self, key: &str) -> Option<u32> {
        self.entries.get(key).map(|e| e.refcount)
    }

    pub fn is_resident(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "asset_cache_tests.rs"]
mod tests;
