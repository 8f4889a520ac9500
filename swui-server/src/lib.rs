//! swui Server Library
//!
//! Exposes the Asset Server, the Multi-Spec Mounter and their building
//! blocks for embedding in other applications and for integration testing.

pub mod assets;
pub mod config;
pub mod file_server;
pub mod mounter;
pub mod web_ui;
