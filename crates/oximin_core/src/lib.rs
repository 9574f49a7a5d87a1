//! Core types for oximin.
//!
//! This crate holds everything the minify adapter and the minifier delegate
//! share, without depending on any particular minifier:
//! - The user-facing option model (`TaskOptions`) and the resolved options
//!   handed to a minifier (`MinifyOptions`)
//! - The persistent rename cache (`NameCache`) and reserved-name sets
//! - The `Host` collaborator used for file access and reporting
//! - The `Minifier` delegate trait and its error type
//! - Source-map path helpers

mod cache;
mod host;
mod minifier;
mod options;
mod paths;
mod reserved;

// Re-export public API
pub use cache::{MangleCache, NameCache};
pub use host::{FsHost, Host, MemoryHost};
pub use minifier::{
    FileMap, MangleOptions, MinifyError, MinifyOptions, MinifyOutput, Minifier,
    PropertyMangleOptions,
};
pub use options::{
    Comments, CompressOptions, MangleConfig, OutputOptions, ParseOptions, PropertyMangleConfig,
    Report, SourceMapOptions, TaskOptions, Toggle, normalize_lf,
};
pub use paths::{relative_path, source_map_key, uri_path};
pub use reserved::{ExceptionsFile, ReservedNames};
