use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use cached::{Cached, SizedCache};
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use serde::{Serialize, Deserialize};
use tokio::sync::Mutex;

use crate::error::HakushinError;

/// Amount of responses kept in memory in front of the disk cache
const MEMORY_CACHE_SIZE: usize = 256;

/// Entry file name is the md5 hash of the URL in lowercase hex
fn is_entry_file(path: &Path) -> bool {
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let is_hash = path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.len() == 32 && stem.bytes().all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f')));

    is_json && is_hash
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub body: String
}

impl CacheEntry {
    #[inline]
    pub fn new(url: impl ToString, body: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            created_at: Utc::now(),
            body: body.to_string()
        }
    }

    /// Entries stamped in the future are considered fresh
    pub fn is_expired(&self, ttl: Duration) -> bool {
        match (Utc::now() - self.created_at).to_std() {
            Ok(age) => age >= ttl,
            Err(_) => false
        }
    }
}

/// Disk entry copy together with the modification time of its file
#[derive(Debug, Clone)]
struct MemoryEntry {
    entry: CacheEntry,
    modified: SystemTime
}

/// TTL cache of successful API responses
///
/// Entries are stored on disk as one JSON file per requested URL, named
/// after the URL's md5 hash. Recently used entries are also kept in memory.
/// A memory entry is only used while its file is unchanged, so removing
/// files from the shared directory affects every session using it.
pub struct ResponseCache {
    path: PathBuf,
    ttl: Duration,
    memory: Mutex<SizedCache<String, MemoryEntry>>
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("path", &self.path)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl ResponseCache {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
            memory: Mutex::new(SizedCache::with_size(MEMORY_CACHE_SIZE))
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.path.join(format!("{:x}.json", Md5::digest(url.as_bytes())))
    }

    /// Get cached response body of the URL if it's not expired yet
    pub async fn get(&self, url: &str) -> Option<String> {
        let key = url.to_string();
        let modified = self.modified(url).await?;

        {
            let mut memory = self.memory.lock().await;

            if let Some(cached) = memory.cache_get(&key) {
                if cached.modified == modified && !cached.entry.is_expired(self.ttl) {
                    tracing::trace!(url, "Memory cache hit");

                    return Some(cached.entry.body.clone());
                }

                memory.cache_remove(&key);
            }
        }

        let entry = self.read_entry(url).await?;

        if entry.is_expired(self.ttl) {
            tracing::trace!(url, created_at = %entry.created_at, "Cache entry expired");

            self.remove(url).await;

            return None;
        }

        tracing::trace!(url, "Disk cache hit");

        let body = entry.body.clone();

        self.memory.lock().await.cache_set(key, MemoryEntry { entry, modified });

        Some(body)
    }

    /// Modification time of the entry file, `None` if there's no such file
    async fn modified(&self, url: &str) -> Option<SystemTime> {
        let path = self.entry_path(url);

        match tokio::fs::metadata(&path).await.and_then(|metadata| metadata.modified()) {
            Ok(modified) => Some(modified),

            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,

            Err(err) => {
                tracing::warn!(?path, ?err, "Failed to read cache entry metadata");

                None
            }
        }
    }

    async fn read_entry(&self, url: &str) -> Option<CacheEntry> {
        let path = self.entry_path(url);

        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,

            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,

            Err(err) => {
                tracing::warn!(?path, ?err, "Failed to read cache entry");

                return None;
            }
        };

        match serde_json::from_slice::<CacheEntry>(&data) {
            // Different URL with the same hash, or a foreign file
            Ok(entry) if entry.url != url => None,

            Ok(entry) => Some(entry),

            Err(err) => {
                tracing::warn!(?path, ?err, "Corrupted cache entry");

                None
            }
        }
    }

    /// Store response body of the URL
    pub async fn set(&self, url: &str, body: &str) -> Result<(), HakushinError> {
        let entry = CacheEntry::new(url, body);

        tokio::fs::create_dir_all(&self.path).await?;

        let data = serde_json::to_vec(&entry)
            .map_err(|err| HakushinError::Io(err.to_string()))?;

        let path = self.entry_path(url);

        tokio::fs::write(&path, data).await?;

        let modified = tokio::fs::metadata(&path).await?.modified()?;

        self.memory.lock().await.cache_set(url.to_string(), MemoryEntry { entry, modified });

        Ok(())
    }

    pub async fn remove(&self, url: &str) {
        self.memory.lock().await.cache_remove(&url.to_string());

        if let Err(err) = tokio::fs::remove_file(self.entry_path(url)).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(url, ?err, "Failed to remove cache entry");
            }
        }
    }

    /// Remove all the cached responses. Other files of the directory are kept
    pub async fn clear(&self) -> Result<(), HakushinError> {
        self.memory.lock().await.cache_clear();

        let mut entries = match tokio::fs::read_dir(&self.path).await {
            Ok(entries) => entries,

            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err.into())
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if is_entry_file(&path) {
                tokio::fs::remove_file(path).await?;
            }
        }

        Ok(())
    }
}
