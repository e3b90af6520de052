// src/file/prefs.rs
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// String-keyed preference storage. The sidebar preference is the only
/// key today; values are stored verbatim.
pub trait PrefStore: std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as a RON map in the user's config directory.
/// Every `set` writes through; a missing or corrupt file starts empty.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePrefs {
    pub fn load_default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
        Self::load(base.join("duka-gui").join("prefs.ron"))
    }

    pub fn load(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable preferences file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, values }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = ron::ser::to_string_pretty(&self.values, ron::ser::PrettyConfig::new())?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemPrefs {
    values: HashMap<String, String>,
}

impl MemPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
