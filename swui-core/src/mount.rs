//! Storage path to URL path derivation and the route table
//!
//! A document stored at `embed/swagger/petstore.swagger.json` is mounted at
//! `/swagger/petstore` under the default rule: the root prefix and the spec
//! suffix are stripped as literal strings, anything else is left as is.

use crate::document::{SpecDocument, SpecTree};
use crate::error::MountError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// Prefix stripped from storage paths by default
pub const DEFAULT_ROOT_PREFIX: &str = "embed/";

/// Suffix stripped from storage paths by default
pub const DEFAULT_SPEC_SUFFIX: &str = ".swagger.json";

/// Characters the router treats as path parameters or wildcards
const ROUTE_METACHARACTERS: [char; 4] = ['*', ':', '{', '}'];

/// Bytes a client percent-encodes in a path; `/` stays a separator
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a derived path the way it appears on the wire
pub fn encode_url_path(url_path: &str) -> Cow<'_, str> {
    utf8_percent_encode(url_path, PATH_ENCODE_SET).into()
}

/// How storage paths become URL paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountRule {
    pub root_prefix: String,
    pub suffix: String,
}

impl MountRule {
    pub fn new(root_prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            root_prefix: root_prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Derive the URL path (without leading slash) for a storage path.
    ///
    /// Pure function of its input. An unmatched prefix or suffix is kept.
    pub fn derive<'a>(&self, storage_path: &'a str) -> &'a str {
        let path = storage_path
            .strip_prefix(self.root_prefix.as_str())
            .unwrap_or(storage_path);
        path.strip_suffix(self.suffix.as_str()).unwrap_or(path)
    }
}

impl Default for MountRule {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_PREFIX, DEFAULT_SPEC_SUFFIX)
    }
}

/// One document bound to its derived URL path
#[derive(Debug, Clone)]
pub struct Mount {
    url_path: String,
    document: SpecDocument,
}

impl Mount {
    /// Derived path, no leading slash (e.g. `petstore`)
    pub fn url_path(&self) -> &str {
        &self.url_path
    }

    /// Router prefix the Asset Server is nested under (e.g. `/petstore`).
    ///
    /// Requests are matched on the raw path, so `my api` is routed as
    /// `/my%20api`.
    pub fn route_prefix(&self) -> String {
        format!("/{}", encode_url_path(&self.url_path))
    }

    pub fn document(&self) -> &SpecDocument {
        &self.document
    }
}

/// Every mount derived from one document tree, in tree order
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    mounts: Vec<Mount>,
}

impl RouteTable {
    /// Derive and validate a mount for every document in `tree`.
    ///
    /// Fails on the first unusable path and on two documents deriving the
    /// same path. One mount may sit beneath another (`v1`, `v1/admin`).
    pub fn build(tree: &SpecTree, rule: &MountRule) -> Result<Self, MountError> {
        let mut mounts: Vec<Mount> = Vec::with_capacity(tree.len());
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(tree.len());

        for document in tree {
            let url_path = rule.derive(document.path());
            validate_url_path(document.path(), url_path)?;

            if let Some(&existing) = seen.get(url_path) {
                return Err(MountError::DuplicateMount {
                    url_path: url_path.to_string(),
                    first: mounts[existing].document.path().to_string(),
                    second: document.path().to_string(),
                });
            }

            debug!(storage_path = document.path(), url_path, "Derived mount path");
            seen.insert(url_path.to_string(), mounts.len());
            mounts.push(Mount {
                url_path: url_path.to_string(),
                document: document.clone(),
            });
        }

        Ok(Self { mounts })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mount> {
        self.mounts.iter()
    }

    /// Derived URL paths in tree order
    pub fn url_paths(&self) -> impl Iterator<Item = &str> {
        self.mounts.iter().map(|m| m.url_path())
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Mount;
    type IntoIter = std::slice::Iter<'a, Mount>;

    fn into_iter(self) -> Self::IntoIter {
        self.mounts.iter()
    }
}

fn validate_url_path(storage_path: &str, url_path: &str) -> Result<(), MountError> {
    let invalid = |reason| MountError::InvalidMountPath {
        storage_path: storage_path.to_string(),
        url_path: url_path.to_string(),
        reason,
    };

    if url_path.is_empty() {
        return Err(invalid("path is empty"));
    }
    if url_path.contains(ROUTE_METACHARACTERS) {
        return Err(invalid("path contains a routing metacharacter"));
    }
    for segment in url_path.split('/') {
        match segment {
            "" => return Err(invalid("path contains an empty segment")),
            "." | ".." => return Err(invalid("path contains a relative segment")),
            _ => {}
        }
    }
    Ok(())
}
