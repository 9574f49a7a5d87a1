//! Merges per-file source maps into one map for the concatenated output.

use std::sync::Arc;

use log::trace;
use oxc_sourcemap::{ConcatSourceMapBuilder, SourceMap};
use oximin_core::SourceMapOptions;

/// Accumulates the maps of each file of the output, in output order.
#[derive(Debug, Default)]
pub(crate) struct MapConcat {
    builder: ConcatSourceMapBuilder,
}

impl MapConcat {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds the map of one file whose code starts on generated line
    /// `line_offset`. All of its mappings are attributed to `source_name`.
    pub(crate) fn add(&mut self, source_name: &str, content: &str, mut map: SourceMap, line_offset: usize) {
        trace!("Adding map of {} at line {}", source_name, line_offset);
        map.set_sources([source_name]);
        map.set_source_contents(vec![Some(content)]);
        self.builder.add_sourcemap(&map, u32::try_from(line_offset).unwrap_or(u32::MAX));
    }

    pub(crate) fn to_json(self, options: &SourceMapOptions) -> String {
        let merged = self.builder.into_sourcemap();
        let contents = if options.include_sources {
            merged.get_source_contents().map(|content| content.cloned()).collect()
        } else {
            Vec::new()
        };
        let map = SourceMap::new(
            options.filename.as_deref().map(Arc::from),
            merged.get_names().cloned().collect(),
            options.root.clone(),
            merged.get_sources().cloned().collect(),
            contents,
            merged.get_tokens().collect(),
            None,
        );
        map.to_json_string()
    }
}
