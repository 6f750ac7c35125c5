//! JSON File Loading
//!
//! Reads JSON files through a [`ReadCache`], keyed by file path.

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::cache::ReadCache;

// == Load Error ==
/// Failure to produce a value from a JSON file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file contents are not valid JSON for the expected shape
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True when the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Cache key for a file: its path as given.
pub fn cache_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// == Read JSON ==
/// Reads `path` as UTF-8 text and parses it as JSON.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    debug!(path = %path.display(), "Reading JSON file");

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

// == Load JSON With Cache ==
/// Returns the parsed contents of `path`, reading the file only when the
/// cached copy is absent or older than the TTL.
///
/// Read and parse failures are returned and nothing is cached for `path`.
pub async fn load_json_with_cache<T>(
    cache: &ReadCache<T>,
    path: &Path,
    ttl: Option<Duration>,
) -> Result<T, LoadError>
where
    T: DeserializeOwned + Clone,
{
    cache.get(&cache_key(path), || read_json(path), ttl).await
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    type Mapping = BTreeMap<String, String>;

    const LONG_TTL: Duration = Duration::from_secs(60);

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_loads_and_parses_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "mapping.json", r#"{"Espresso":"Coffee"}"#);
        let cache: ReadCache<Mapping> = ReadCache::new(4, LONG_TTL);

        let mapping = load_json_with_cache(&cache, &path, None).await.unwrap();

        assert_eq!(mapping.get("Espresso").map(String::as_str), Some("Coffee"));
        assert_eq!(cache.stats().await.keys, vec![cache_key(&path)]);
    }

    #[tokio::test]
    async fn test_serves_cached_copy_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "mapping.json", r#"{"Latte":"Coffee"}"#);
        let cache: ReadCache<Mapping> = ReadCache::new(4, LONG_TTL);

        load_json_with_cache(&cache, &path, None).await.unwrap();

        // Change on disk without invalidating: cached copy still served
        write(&dir, "mapping.json", r#"{"Latte":"Milk drinks"}"#);
        let cached = load_json_with_cache(&cache, &path, None).await.unwrap();
        assert_eq!(cached["Latte"], "Coffee");

        cache.invalidate(&cache_key(&path)).await;
        let fresh = load_json_with_cache(&cache, &path, None).await.unwrap();
        assert_eq!(fresh["Latte"], "Milk drinks");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let cache: ReadCache<Mapping> = ReadCache::new(4, LONG_TTL);

        let err = load_json_with_cache(&cache, &path, None).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ not json");
        let cache: ReadCache<Mapping> = ReadCache::new(4, LONG_TTL);

        let err = load_json_with_cache(&cache, &path, None).await.unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("broken.json"));
        assert!(cache.is_empty().await);

        // Fixing the file makes the next read succeed
        write(&dir, "broken.json", r#"{"Mocha":"Coffee"}"#);
        let mapping = load_json_with_cache(&cache, &path, None).await.unwrap();
        assert_eq!(mapping["Mocha"], "Coffee");
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "list.json", r#"["not", "a", "map"]"#);
        let cache: ReadCache<Mapping> = ReadCache::new(4, LONG_TTL);

        let err = load_json_with_cache(&cache, &path, None).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
