use oximin_core::Report;
use std::path::PathBuf;

/// What a minification produced. Nothing is written by the adapter itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinifyResult {
    /// The sources concatenated as read.
    pub max: String,
    pub min: String,
    /// Source map JSON, when one was requested.
    pub source_map: Option<String>,
}

/// One output file written by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub dest: PathBuf,
    pub max_size: usize,
    pub min_size: usize,
    pub gzip_size: Option<usize>,
    pub source_map: Option<PathBuf>,
    /// How this file should be reported.
    pub report: Report,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: Vec<CreatedFile>,
}

impl RunSummary {
    pub fn files_created(&self) -> usize {
        self.created.len()
    }

    pub fn source_maps_created(&self) -> usize {
        self.created.iter().filter(|file| file.source_map.is_some()).count()
    }

    pub fn extend(&mut self, other: RunSummary) {
        self.created.extend(other.created);
    }
}
