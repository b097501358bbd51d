//! Flat-file food store
//!
//! Reads and writes the per-food JSON documents in the foods directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::warn;

use crate::models::FoodRecord;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed record {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {file} has no name")]
    MissingName { file: String },

    #[error("record file already exists: {file}")]
    AlreadyExists { file: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a bulk load: parsed records plus the count of skipped files
#[derive(Debug, Default)]
pub struct LoadedFoods {
    pub records: Vec<(PathBuf, FoodRecord)>,
    pub skipped: usize,
}

/// Resolve the foods directory from a flag, the environment, or the default
pub fn resolve_foods_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("HFFC_FOODS_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("Foods"))
}

/// Derive the PascalCase file stem for a display name
pub fn file_stem(name: &str) -> String {
    let mut stem = String::new();
    for word in name.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            stem.extend(first.to_uppercase());
            stem.push_str(chars.as_str());
        }
    }
    stem
}

/// Serialize a value the way the corpus files are formatted (4-space indent)
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

/// File name of a store path, for report output
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// File stem of a store path, for stem-keyed checks
pub fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Flat-file record store rooted at a foods directory
#[derive(Debug, Clone)]
pub struct FoodStore {
    root: PathBuf,
}

impl FoodStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Sorted paths of every food file in the store
    pub fn list(&self) -> StoreResult<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// The path a record with this display name lives at
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(name)))
    }

    /// Load one record from a path
    pub fn load(&self, path: &Path) -> StoreResult<FoodRecord> {
        let file = file_name_of(path);
        let text = fs::read_to_string(path)?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
                file: file.clone(),
                source,
            })?;
        if value.get("name").and_then(|name| name.as_str()).is_none() {
            return Err(StoreError::MissingName { file });
        }
        serde_json::from_value(value).map_err(|source| StoreError::Malformed { file, source })
    }

    /// Load every record, skipping unreadable files with a warning
    pub fn load_all(&self) -> StoreResult<LoadedFoods> {
        let mut loaded = LoadedFoods::default();
        for path in self.list()? {
            match self.load(&path) {
                Ok(record) => loaded.records.push((path, record)),
                Err(err) => {
                    warn!("skipping {}: {}", path.display(), err);
                    loaded.skipped += 1;
                }
            }
        }
        Ok(loaded)
    }

    /// Atomically write a record to a path (temp file, then rename)
    pub fn save(&self, path: &Path, record: &FoodRecord) -> StoreResult<()> {
        let json = to_pretty_json(record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Create a new record file, refusing to overwrite an existing one
    pub fn create(&self, record: &FoodRecord) -> StoreResult<PathBuf> {
        let path = self.path_for(&record.name);
        if path.exists() {
            return Err(StoreError::AlreadyExists {
                file: file_name_of(&path),
            });
        }
        self.save(&path, record)?;
        Ok(path)
    }
}
