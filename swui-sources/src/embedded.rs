//! Specification documents compiled into the binary with `rust-embed`

use anyhow::{Context, Result};
use bytes::Bytes;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::marker::PhantomData;
use swui_core::document::walk_order;
use swui_core::mount::DEFAULT_ROOT_PREFIX;
use swui_core::{SpecDocument, SpecSource, SpecTree};

/// Source backed by a `#[derive(RustEmbed)]` folder
///
/// `rust-embed` lists files relative to the folder, so every path is
/// prefixed with `root` (`embed/` by default) to form the storage path.
pub struct EmbeddedSource<E> {
    root: String,
    name: String,
    _folder: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedSource<E> {
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT_PREFIX)
    }

    pub fn with_root(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            name: format!("embedded:{}", root),
            root,
            _folder: PhantomData,
        }
    }
}

impl<E: RustEmbed> Default for EmbeddedSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RustEmbed> SpecSource for EmbeddedSource<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<SpecTree> {
        let mut paths: Vec<Cow<'static, str>> = E::iter().collect();
        paths.sort_by(|a, b| walk_order(a, b));

        let mut tree = SpecTree::new();
        for path in paths {
            let file = E::get(&path)
                .with_context(|| format!("Embedded file {} is listed but unreadable", path))?;
            let content = match file.data {
                Cow::Borrowed(bytes) => Bytes::from_static(bytes),
                Cow::Owned(bytes) => Bytes::from(bytes),
            };
            tree.push(SpecDocument::new(format!("{}{}", self.root, path), content));
        }
        Ok(tree)
    }
}
