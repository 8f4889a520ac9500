//! Static UI asset bundle
//!
//! An immutable in-memory file tree built once and shared (behind an `Arc`)
//! by every mounted Asset Server. It can be filled from a `rust-embed`
//! folder, from a directory on disk, or entry by entry.

use anyhow::{Context, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

/// One file of the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    data: Bytes,
    last_modified: Option<DateTime<Utc>>,
}

impl Asset {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            last_modified: None,
        }
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read-only file tree keyed by `/`-separated relative path
#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    files: BTreeMap<String, Asset>,
    /// Every directory that contains at least one file; `""` is the root
    dirs: BTreeSet<String>,
}

impl AssetBundle {
    pub fn new() -> Self {
        let mut dirs = BTreeSet::new();
        dirs.insert(String::new());
        Self {
            files: BTreeMap::new(),
            dirs,
        }
    }

    /// Load every file of a `rust-embed` folder
    pub fn from_embed<E: RustEmbed>() -> Self {
        let mut bundle = Self::new();
        for path in E::iter() {
            let Some(file) = E::get(&path) else {
                continue;
            };
            let data = match file.data {
                Cow::Borrowed(bytes) => Bytes::from_static(bytes),
                Cow::Owned(bytes) => Bytes::from(bytes),
            };
            let mut asset = Asset::new(data);
            if let Some(modified) = file
                .metadata
                .last_modified()
                .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))
            {
                asset = asset.with_last_modified(modified);
            }
            bundle.insert(&path, asset);
        }
        bundle
    }

    /// Read a directory tree from disk, keeping file modification times
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut bundle = Self::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to walk asset directory {}", root.display()))?;
            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).with_context(|| {
                format!("{} is outside {}", entry.path().display(), root.display())
            })?;
            let relative = relative
                .to_str()
                .with_context(|| format!("Non UTF-8 asset path: {}", relative.display()))?
                .replace(std::path::MAIN_SEPARATOR, "/");

            let data = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read asset {}", entry.path().display()))?;
            let mut asset = Asset::new(data);
            if let Some(modified) = entry.metadata().ok().and_then(|m| m.modified().ok()) {
                asset = asset.with_last_modified(DateTime::<Utc>::from(modified));
            }
            bundle.insert(&relative, asset);
        }

        Ok(bundle)
    }

    /// Add a file, registering all of its parent directories
    pub fn insert(&mut self, path: &str, asset: Asset) {
        let path = normalize(path);
        let mut dir = path.as_str();
        while let Some((parent, _)) = dir.rsplit_once('/') {
            self.dirs.insert(parent.to_string());
            dir = parent;
        }
        self.files.insert(path, asset);
    }

    pub fn with_file(mut self, path: &str, asset: Asset) -> Self {
        self.insert(path, asset);
        self
    }

    pub fn get(&self, path: &str) -> Option<&Asset> {
        self.files.get(normalize(path).as_str())
    }

    /// True for the root and for every directory holding a file
    pub fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains(normalize(path).trim_end_matches('/'))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim_start_matches('/');
    path.strip_prefix("./").unwrap_or(path).to_string()
}
