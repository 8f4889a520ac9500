//! Specification documents and the document tree
//!
//! A `SpecTree` is a materialized, ordered list of leaf documents. Sources
//! decide the order; directory-backed sources produce sorted walk order.

use bytes::Bytes;
use std::cmp::Ordering;

/// A single API specification document (JSON or YAML), never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocument {
    /// `/`-separated path within the source tree, e.g. `embed/swagger/petstore.swagger.json`
    path: String,

    /// Raw document bytes, served verbatim
    content: Bytes,
}

impl SpecDocument {
    pub fn new(path: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Storage path of the document
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Document bytes (cheap to clone)
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Ordered collection of leaf specification documents
#[derive(Debug, Clone, Default)]
pub struct SpecTree {
    documents: Vec<SpecDocument>,
}

impl SpecTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from `(path, bytes)` pairs, keeping their order.
    ///
    /// Entries whose path ends in `/` are directory markers and are skipped.
    pub fn from_entries<P, C>(entries: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<String>,
        C: Into<Bytes>,
    {
        let mut tree = Self::new();
        for (path, content) in entries {
            let path = path.into();
            if path.ends_with('/') {
                continue;
            }
            tree.push(SpecDocument::new(path, content));
        }
        tree
    }

    pub fn push(&mut self, document: SpecDocument) {
        self.documents.push(document);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpecDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Reorder documents the way a sorted directory walk visits them:
    /// lexicographic per path segment, so `a/b` comes before `a-c`.
    pub fn sort_walk_order(&mut self) {
        self.documents.sort_by(|a, b| walk_order(a.path(), b.path()));
    }
}

/// Compare two storage paths segment by segment
pub fn walk_order(a: &str, b: &str) -> Ordering {
    a.split('/').cmp(b.split('/'))
}

impl FromIterator<SpecDocument> for SpecTree {
    fn from_iter<I: IntoIterator<Item = SpecDocument>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SpecTree {
    type Item = SpecDocument;
    type IntoIter = std::vec::IntoIter<SpecDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpecTree {
    type Item = &'a SpecDocument;
    type IntoIter = std::slice::Iter<'a, SpecDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_skips_directory_markers() {
        let tree = SpecTree::from_entries(vec![
            ("embed/", Bytes::new()),
            ("embed/swagger/", Bytes::new()),
            ("embed/swagger/petstore.swagger.json", Bytes::from_static(b"{}")),
        ]);

        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.iter().next().unwrap().path(),
            "embed/swagger/petstore.swagger.json"
        );
    }

    #[test]
    fn test_from_entries_keeps_insertion_order() {
        let tree = SpecTree::from_entries(vec![("b", "2"), ("a", "1")]);
        let paths: Vec<&str> = tree.iter().map(|d| d.path()).collect();
        assert_eq!(paths, vec!["b", "a"]);
    }

    #[test]
    fn test_sort_walk_order_is_per_segment() {
        let mut tree = SpecTree::from_entries(vec![
            ("embed/a-c.json", ""),
            ("embed/b.json", ""),
            ("embed/a/b.json", ""),
        ]);
        tree.sort_walk_order();

        let paths: Vec<&str> = tree.iter().map(|d| d.path()).collect();
        assert_eq!(paths, vec!["embed/a/b.json", "embed/a-c.json", "embed/b.json"]);
    }

    #[test]
    fn test_document_content_is_shared_not_copied() {
        let doc = SpecDocument::new("x.json", Bytes::from_static(b"{\"openapi\":\"3.0.0\"}"));
        let clone = doc.clone();
        assert_eq!(doc.content().as_ptr(), clone.content().as_ptr());
        assert_eq!(doc.len(), 19);
    }
}
