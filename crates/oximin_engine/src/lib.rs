//! oxc-backed JavaScript minifier for oximin.
//!
//! `OxcMinifier` implements `oximin_core::Minifier` on top of the oxc
//! toolchain: `oxc_parser` for parsing, `oxc_minifier` for compression,
//! `oxc_semantic` for scope analysis and `oxc_codegen` for printing.
//!
//! Renaming is done here rather than by oxc's mangler because it has to honour
//! reserved names and a persistent rename cache, and because properties can
//! be mangled too.
//!
//! # Examples
//!
//! ```no_run
//! use oximin_core::{FileMap, Minifier, MinifyOptions};
//! use oximin_engine::OxcMinifier;
//!
//! let mut files = FileMap::new();
//! files.insert("app.js".to_string(), "var answer = 40 + 2;".to_string());
//!
//! let output = OxcMinifier.minify(&files, MinifyOptions::default()).unwrap();
//! println!("{}", output.code);
//! ```

mod builtins;
mod compress;
mod domprops;
mod engine;
mod mangle;
mod names;
mod parse;
mod properties;
mod sourcemap;

// Re-export public API
pub use domprops::DOM_PROPERTIES;
pub use engine::OxcMinifier;
