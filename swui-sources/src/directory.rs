//! Specification documents read from a directory on disk
//!
//! Storage paths start with the directory's own name, so a directory called
//! `embed` yields `embed/swagger/petstore.swagger.json` exactly like the
//! embedded source does. Hidden entries (leading `.`) are skipped.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use swui_core::{SpecDocument, SpecSource, SpecTree};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

pub struct DirectorySource {
    root: PathBuf,
    name: String,
    prefix: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        let prefix = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}/"))
            .unwrap_or_default();
        Self { root, name, prefix }
    }

    /// Prefix every storage path starts with (`<dir name>/`, or empty when
    /// the root has no usable name such as `.`)
    pub fn storage_prefix(&self) -> &str {
        &self.prefix
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn storage_path(&self, entry: &DirEntry) -> Result<String> {
        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .with_context(|| format!("{} is outside {}", entry.path().display(), self.name))?;

        let mut path = self.prefix.clone();
        for (i, component) in relative.components().enumerate() {
            let component = component
                .as_os_str()
                .to_str()
                .with_context(|| format!("Non UTF-8 path: {}", entry.path().display()))?;
            if i > 0 {
                path.push('/');
            }
            path.push_str(component);
        }
        Ok(path)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
}

impl SpecSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<SpecTree> {
        let mut tree = SpecTree::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to walk {}", self.name))?;
            if entry.file_type().is_dir() {
                continue;
            }
            // Symlinks are not followed, but one pointing at a directory is still a directory
            if entry.path_is_symlink() && entry.path().is_dir() {
                debug!("Skipping directory symlink {}", entry.path().display());
                continue;
            }

            let path = self.storage_path(&entry)?;
            let content = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            debug!("Loaded {} ({} bytes)", path, content.len());
            tree.push(SpecDocument::new(path, content));
        }

        info!("Loaded {} specification documents from {}", tree.len(), self.name);
        Ok(tree)
    }
}
