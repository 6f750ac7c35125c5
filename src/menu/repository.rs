//! Menu Configuration Repository
//!
//! File-backed storage for the subcategory mapping and subcategory display
//! order. Reads go through the read cache; writes persist the file and then
//! invalidate the cached copy.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{cache_key, load_json_with_cache, read_json, CacheStats, LoadError, ReadCache};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::menu::{SubcategoryMapping, SubcategoryOrder, MAPPING_FILE, ORDER_FILE};

// == Repository ==
/// Reads and writes the menu configuration files.
#[derive(Debug)]
pub struct MenuConfigRepository {
    /// Directory holding both files
    data_dir: PathBuf,
    /// Freshness window for reads
    ttl: Duration,
    mapping_cache: ReadCache<SubcategoryMapping>,
    order_cache: ReadCache<SubcategoryOrder>,
    /// Serializes read-modify-write cycles on the files
    write_lock: Mutex<()>,
}

impl MenuConfigRepository {
    // == Constructor ==
    /// Creates a repository over `data_dir`.
    ///
    /// # Arguments
    /// * `data_dir` - Directory of the JSON files
    /// * `capacity` - Maximum entries per cache
    /// * `ttl` - Freshness window for reads
    pub fn new(data_dir: impl Into<PathBuf>, capacity: usize, ttl: Duration) -> Self {
        Self {
            data_dir: data_dir.into(),
            ttl,
            mapping_cache: ReadCache::new(capacity, ttl),
            order_cache: ReadCache::new(capacity, ttl),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a repository from service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_dir, config.cache_capacity, config.cache_ttl())
    }

    /// Path of the subcategory mapping file.
    pub fn mapping_path(&self) -> PathBuf {
        self.data_dir.join(MAPPING_FILE)
    }

    /// Path of the subcategory order file.
    pub fn order_path(&self) -> PathBuf {
        self.data_dir.join(ORDER_FILE)
    }

    // == Reads ==

    /// Returns the subcategory → category mapping.
    ///
    /// A missing file reads as an empty mapping.
    pub async fn subcategory_mapping(&self) -> Result<SubcategoryMapping> {
        Ok(read_or_empty(&self.mapping_cache, &self.mapping_path(), self.ttl).await?)
    }

    /// Returns the display order of subcategories for every category.
    ///
    /// A missing file reads as an empty mapping.
    pub async fn subcategory_order(&self) -> Result<SubcategoryOrder> {
        Ok(read_or_empty(&self.order_cache, &self.order_path(), self.ttl).await?)
    }

    /// Returns the display order for one category, if one is stored.
    pub async fn category_order(&self, category: &str) -> Result<Option<Vec<String>>> {
        let mut order = self.subcategory_order().await?;
        Ok(order.remove(category))
    }

    // == Writes ==

    /// Replaces the whole subcategory mapping.
    pub async fn replace_subcategory_mapping(
        &self,
        mapping: SubcategoryMapping,
    ) -> Result<SubcategoryMapping> {
        let _guard = self.write_lock.lock().await;
        let path = self.mapping_path();

        self.persist(&path, &mapping).await?;
        self.mapping_cache.invalidate(&cache_key(&path)).await;

        info!(entries = mapping.len(), "Subcategory mapping replaced");
        Ok(mapping)
    }

    /// Stores the display order for one category, leaving the others as they are.
    pub async fn set_category_order(
        &self,
        category: &str,
        subcategories: Vec<String>,
    ) -> Result<Vec<String>> {
        let _guard = self.write_lock.lock().await;
        let path = self.order_path();

        let mut order: SubcategoryOrder = read_from_disk(&path).await?;
        order.insert(category.to_string(), subcategories.clone());

        self.persist(&path, &order).await?;
        self.order_cache.invalidate(&cache_key(&path)).await;

        info!(category, count = subcategories.len(), "Subcategory order updated");
        Ok(subcategories)
    }

    /// Removes the display order for one category.
    ///
    /// Returns false when the category had no stored order; the file is left
    /// untouched in that case.
    pub async fn remove_category_order(&self, category: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let path = self.order_path();

        let mut order: SubcategoryOrder = read_from_disk(&path).await?;
        if order.remove(category).is_none() {
            return Ok(false);
        }

        self.persist(&path, &order).await?;
        self.order_cache.invalidate(&cache_key(&path)).await;

        info!(category, "Subcategory order removed");
        Ok(true)
    }

    // == Cache Diagnostics ==

    /// Snapshot of the mapping cache.
    pub async fn mapping_cache_stats(&self) -> CacheStats {
        self.mapping_cache.stats().await
    }

    /// Snapshot of the order cache.
    pub async fn order_cache_stats(&self) -> CacheStats {
        self.order_cache.stats().await
    }

    /// Drops every cached file.
    pub async fn clear_caches(&self) {
        self.mapping_cache.clear().await;
        self.order_cache.clear().await;
        info!("Configuration caches cleared");
    }

    // == Persist ==
    /// Writes `value` as pretty JSON through a temporary sibling file, so
    /// readers see either the old or the new contents.
    async fn persist<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Internal(format!("Failed to serialize {}: {}", path.display(), e)))?;

        let persist_err = |e: std::io::Error| AppError::Persist(format!("{}: {}", path.display(), e));

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(persist_err)?;

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await.map_err(persist_err)?;
        if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), "Failed to remove temporary file: {}", cleanup);
            }
            return Err(persist_err(e));
        }

        debug!(path = %path.display(), "Configuration file written");
        Ok(())
    }
}

// == Helpers ==

/// Cached read where a missing file counts as an empty value.
///
/// The empty value is not cached, so a file created later is seen at once.
async fn read_or_empty<T>(
    cache: &ReadCache<T>,
    path: &Path,
    ttl: Duration,
) -> std::result::Result<T, LoadError>
where
    T: DeserializeOwned + Clone + Default,
{
    match load_json_with_cache(cache, path, Some(ttl)).await {
        Err(err) if err.is_not_found() => {
            debug!(path = %path.display(), "Configuration file missing, using empty value");
            Ok(T::default())
        }
        other => other,
    }
}

/// Uncached read used before modifying a file, with the same missing-file rule.
async fn read_from_disk<T>(path: &Path) -> std::result::Result<T, LoadError>
where
    T: DeserializeOwned + Default,
{
    match read_json(path).await {
        Err(err) if err.is_not_found() => Ok(T::default()),
        other => other,
    }
}
