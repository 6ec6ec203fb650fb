//! docindex core library.
//!
//! This crate exposes programmatic APIs for turning a documentation tree
//! into a Markdown README index.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `tree`: Sorted directory listing and exclude patterns.
//! - `link`: Repository browse links for indexed files.
//! - `render`: Markdown rendering of the docs tree.
//! - `generate`: One run of render + README write/check/preview.
//! - `models`: Serializable run results.
//! - `output`: Human/JSON printers.
//! - `utils`: Console prefixes and path display helpers.
//! - `error`: Error type and `Result` alias.
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod link;
pub mod models;
pub mod output;
pub mod render;
pub mod tree;
pub mod utils;
