//! Recent-search history behind an injected key-value store.
//!
//! Persistence is a capability passed in by the caller rather than ambient
//! global state, so tests substitute [`MemoryStore`] for the file-backed
//! store. Entries are most-recent-first, deduplicated by exact string match
//! and capped at [`MAX_RECENT`].

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

/// Maximum number of remembered searches.
pub const MAX_RECENT: usize = 5;

/// Storage key under which the history is persisted.
pub const RECENT_SEARCHES_KEY: &str = "recent-searches";

/// Minimal key-value persistence capability.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// File-per-key store under the platform data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at the platform data dir for this application.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;
        Ok(Self {
            dir: dirs.data_dir().to_path_buf(),
        })
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory: {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write store file: {}", path.display()))?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Most-recent-first search history, read once at construction and written
/// through on every insert.
pub struct RecentSearches<S: KvStore> {
    store: S,
    entries: Vec<String>,
}

impl<S: KvStore> RecentSearches<S> {
    /// Load history from the store. A missing or unreadable entry starts
    /// the history empty rather than failing.
    pub fn load(store: S) -> Self {
        let entries = store
            .get(RECENT_SEARCHES_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();
        Self { store, entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a search: dedup by exact match, move to front, cap at
    /// [`MAX_RECENT`], persist.
    pub fn record(&mut self, city: &str) -> Result<()> {
        self.entries.retain(|c| c != city);
        self.entries.insert(0, city.to_string());
        self.entries.truncate(MAX_RECENT);

        let encoded =
            serde_json::to_string(&self.entries).context("Failed to encode recent searches")?;
        self.store.set(RECENT_SEARCHES_KEY, &encoded)
    }
}
