// src/store.rs  -  String key/value store standing in for browser local storage
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const KEY_SITE_LANG:     &str = "siteLang";
pub const KEY_CONTACT_NAME:  &str = "lastContactName";
pub const KEY_CONTACT_EMAIL: &str = "lastContactEmail";

/// Unbounded-lifetime string store; values never expire.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store (tests, `--no-persist` style runs).
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> { self.map.get(key).cloned() }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML file on disk; rewritten in full on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map:  BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let map = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Reading store {:?}", path))?;
            toml::from_str(&raw)
                .with_context(|| format!("Parsing store {:?}", path))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path: path.to_path_buf(), map })
    }

    pub fn path(&self) -> &Path { &self.path }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating store directory {:?}", parent))?;
        }
        let raw = toml::to_string(&self.map).context("Serializing store")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Writing store {:?}", self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> { self.map.get(key).cloned() }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Write and log on failure; event handlers never abort over storage.
pub fn persist(store: &mut dyn KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("store write {key} failed: {e:#}");
    }
}
