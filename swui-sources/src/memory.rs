//! Specification documents already held in memory

use anyhow::Result;
use bytes::Bytes;
use swui_core::{SpecSource, SpecTree};

/// Source over a fixed list of `(storage path, bytes)` pairs, served in the
/// order given. Paths ending in `/` are treated as directories and skipped.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    entries: Vec<(String, Bytes)>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_document(mut self, path: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.entries.push((path.into(), content.into()));
        self
    }
}

impl SpecSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<SpecTree> {
        Ok(SpecTree::from_entries(self.entries.iter().cloned()))
    }
}
