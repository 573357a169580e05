use super::{ArchiveError, is_valid_key};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fixed file name of the store when it lives next to the executable.
pub const STORE_FILE_NAME: &str = ".ARCHIVED_CLIPS.json";

const PLACEHOLDER_KEY: &str = "foo";
const PLACEHOLDER_VALUE: &str = "bar";

/// Key to clipboard-text mapping backed by a single JSON object file.
///
/// The store is loaded once per run, mutated in memory, and written back
/// with [`ArchiveStore::save`]. There is no locking: if two runs overlap,
/// the later save replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveStore {
    entries: BTreeMap<String, String>,
    file_path: PathBuf,
}

impl ArchiveStore {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            entries: BTreeMap::new(),
            file_path,
        }
    }

    pub fn with_entries(file_path: PathBuf, entries: BTreeMap<String, String>) -> Self {
        Self { entries, file_path }
    }

    /// Load the store at `path`, seeding it with a placeholder entry if the file is missing.
    ///
    /// Unparseable content is an error; it is never replaced with an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::create_placeholder(path)?;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read archive file: {}", path.display()))?;

        let entries: BTreeMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse archive file: {}", path.display()))?;

        debug!(path = %path.display(), count = entries.len(), "Loaded archive");

        Ok(Self::with_entries(path.to_path_buf(), entries))
    }

    fn create_placeholder(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut placeholder = Self::new(path.to_path_buf());
        placeholder
            .entries
            .insert(PLACEHOLDER_KEY.to_string(), PLACEHOLDER_VALUE.to_string());
        placeholder.save()?;

        info!(path = %path.display(), "Created new archive file");
        Ok(())
    }

    /// Overwrite the store file with the full in-memory mapping.
    pub fn save(&self) -> Result<()> {
        let content =
            serde_json::to_string(&self.entries).context("Failed to serialize archive")?;

        let temp_path = self.file_path.with_extension("tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        fs::rename(&temp_path, &self.file_path).with_context(|| {
            format!(
                "Failed to rename temp file to: {}",
                self.file_path.display()
            )
        })?;

        debug!(path = %self.file_path.display(), count = self.entries.len(), "Saved archive");
        Ok(())
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Returns [`ArchiveError::InvalidKey`] without touching the map if the key fails
    /// [`is_valid_key`].
    pub fn put(&mut self, key: &str, value: String) -> Result<(), ArchiveError> {
        if !is_valid_key(key) {
            return Err(ArchiveError::InvalidKey(key.to_string()));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str, ArchiveError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ArchiveError::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}
