//! Specification document sources for swui

pub mod directory;
pub mod embedded;
pub mod memory;

pub use directory::DirectorySource;
pub use embedded::EmbeddedSource;
pub use memory::StaticSource;
