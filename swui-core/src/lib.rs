//! swui Core Library
//!
//! This crate provides the data model shared by the document sources and the
//! HTTP server: specification documents, the static UI asset bundle, the
//! mapping from storage paths to URL paths, and the generated index page.

pub mod bundle;
pub mod document;
pub mod error;
pub mod index;
pub mod mount;
pub mod source;

pub use bundle::{Asset, AssetBundle};
pub use document::{SpecDocument, SpecTree};
pub use error::MountError;
pub use index::IndexPage;
pub use mount::{Mount, MountRule, RouteTable};
pub use source::SpecSource;
