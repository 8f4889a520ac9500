//! Specification document source trait

use crate::document::SpecTree;
use anyhow::Result;

/// Trait for anything that can hand over a tree of specification documents
///
/// Each source is responsible for:
/// - Enumerating its leaf documents (directories are not documents)
/// - Reading every document in full
/// - Naming documents with `/`-separated storage paths
pub trait SpecSource: Send + Sync {
    /// Human readable name used in logs and errors (e.g. a directory path)
    fn name(&self) -> &str;

    /// Load the whole tree
    ///
    /// Any enumeration or read failure must fail the whole load; callers
    /// never see a partial tree.
    fn load(&self) -> Result<SpecTree>;
}
