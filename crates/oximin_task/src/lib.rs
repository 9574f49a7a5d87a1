//! Minify adapter and task runner for oximin.
//!
//! `Adapter` turns task options into minifier options, keeps the name cache
//! file up to date and returns the original and minified code. `Runner`
//! expands file groups from a task config, drives the adapter per
//! destination and writes the results.
//!
//! # Examples
//!
//! ```no_run
//! use oximin_core::{FsHost, TaskOptions};
//! use oximin_engine::OxcMinifier;
//! use oximin_task::Adapter;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let adapter = Adapter::new(FsHost, OxcMinifier);
//! let result = adapter.minify(&["src/app.js"], Path::new("dist/app.min.js"), &TaskOptions::default())?;
//! println!("{} -> {} bytes", result.max.len(), result.min.len());
//! # Ok(())
//! # }
//! ```

mod adapter;
mod config;
mod expand;
mod reporter;
mod runner;
mod types;

// Re-export public API
pub use adapter::Adapter;
pub use config::{FileGroup, MinifyArgs, RunArgs, TargetConfig, TaskConfig};
pub use expand::{Expansion, expand_sources};
pub use reporter::{gzip_size, pretty_bytes, print_created, print_summary};
pub use runner::Runner;
pub use types::{CreatedFile, MinifyResult, RunSummary};
