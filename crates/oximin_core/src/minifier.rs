use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    cache::MangleCache,
    options::{CompressOptions, OutputOptions, ParseOptions, SourceMapOptions},
    reserved::ReservedNames,
};

/// Source name (relative to the source map, forward slashes) to file text,
/// in input order.
pub type FileMap = IndexMap<String, String>;

/// Fully resolved options handed to a `Minifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinifyOptions {
    pub compress: Option<CompressOptions>,
    pub mangle: Option<MangleOptions>,
    pub output: OutputOptions,
    pub parse: ParseOptions,
    pub source_map: Option<SourceMapOptions>,
    pub toplevel: bool,
    pub wrap: Option<String>,
    pub ie8: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MangleOptions {
    pub reserved: ReservedNames,
    /// Variable rename cache; returned updated in `MinifyOutput::vars_cache`.
    pub cache: Option<MangleCache>,
    pub properties: Option<PropertyMangleOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMangleOptions {
    pub reserved: ReservedNames,
    pub regex: Option<String>,
    /// Property rename cache; returned updated in `MinifyOutput::props_cache`.
    pub cache: Option<MangleCache>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinifyOutput {
    pub code: String,
    /// Source map JSON, when one was requested.
    pub map: Option<String>,
    pub vars_cache: Option<MangleCache>,
    pub props_cache: Option<MangleCache>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinifyError {
    #[error("Parse error in {filename}: {message}")]
    Parse { filename: String, message: String },

    #[error("Invalid {option} option: {message}")]
    InvalidOption { option: String, message: String },
}

/// A JavaScript minifier the adapter delegates to.
///
/// Rename caches are moved in through `MinifyOptions` and handed back through
/// `MinifyOutput`; an implementation must keep every assignment it was given
/// unless the name has become unusable for the current input.
pub trait Minifier {
    fn minify(&self, files: &FileMap, options: MinifyOptions) -> Result<MinifyOutput, MinifyError>;
}

impl<M: Minifier + ?Sized> Minifier for &M {
    fn minify(&self, files: &FileMap, options: MinifyOptions) -> Result<MinifyOutput, MinifyError> {
        (**self).minify(files, options)
    }
}
