use anyhow::Result;
use ignore::{
    WalkBuilder,
    overrides::{Override, OverrideBuilder},
};
use indexmap::IndexSet;
use log::{debug, trace};
use std::path::{Path, PathBuf};

/// Sources matched by a list of patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Matched files in pattern order, without repeats.
    pub files: Vec<PathBuf>,
    /// Literal (non-glob) patterns naming files that do not exist.
    pub missing: Vec<String>,
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

fn build_override(walk_root: &Path, pattern: &str) -> Result<Override> {
    let mut builder = OverrideBuilder::new(walk_root);
    builder.add(pattern)?;
    Ok(builder.build()?)
}

/// Expands `patterns` against `root`.
///
/// Patterns are applied in order: globs add every file they match (sorted by
/// name), `!pattern` drops previously added files that match it, and literal
/// paths are added when they exist. Returned paths are `root` joined with the
/// path relative to it.
pub fn expand_sources(root: &Path, patterns: &[String]) -> Result<Expansion> {
    let walk_root = if root.as_os_str().is_empty() { Path::new(".") } else { root };
    debug!("Expanding {} patterns from {}", patterns.len(), walk_root.display());

    let mut files: IndexSet<PathBuf> = IndexSet::new();
    let mut missing = Vec::new();

    for pattern in patterns {
        if let Some(excluded) = pattern.strip_prefix('!') {
            let matcher = build_override(walk_root, excluded)?;
            let before = files.len();
            files.retain(|file| !matcher.matched(file, false).is_whitelist());
            trace!("Exclusion '{}' removed {} files", excluded, before - files.len());
            continue;
        }

        if !is_glob(pattern) {
            if walk_root.join(pattern).is_file() {
                files.insert(root.join(pattern));
            } else {
                trace!("Literal source '{}' does not exist", pattern);
                missing.push(pattern.clone());
            }
            continue;
        }

        let walker = WalkBuilder::new(walk_root)
            .standard_filters(false)
            .overrides(build_override(walk_root, pattern)?)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut matched = 0;
        for res in walker {
            let dent = res?;
            if !dent.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let relative = dent.path().strip_prefix(walk_root).unwrap_or(dent.path());
            if files.insert(root.join(relative)) {
                matched += 1;
            }
        }
        trace!("Pattern '{}' matched {} new files", pattern, matched);
    }

    debug!("Expanded to {} files ({} missing)", files.len(), missing.len());
    Ok(Expansion { files: files.into_iter().collect(), missing })
}
