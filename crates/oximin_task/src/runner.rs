use anyhow::{Context, Result};
use log::{debug, info};
use oximin_core::{
    Host, Minifier, Report, TaskOptions, Toggle, normalize_lf, relative_path, uri_path,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    adapter::Adapter,
    config::{FileGroup, TaskConfig, TargetConfig},
    expand::expand_sources,
    reporter::gzip_size,
    types::{CreatedFile, RunSummary},
};

/// Drives the adapter over targets and file groups and writes the results.
///
/// Relative paths in groups and options are resolved against `root`; an
/// empty root means the current directory.
pub struct Runner<H, M> {
    root: PathBuf,
    adapter: Adapter<H, M>,
}

fn with_map_extension(dest: &Path) -> PathBuf {
    let mut name = OsString::from(dest.as_os_str());
    name.push(".map");
    PathBuf::from(name)
}

impl<H: Host, M: Minifier> Runner<H, M> {
    pub fn new(root: impl Into<PathBuf>, host: H, minifier: M) -> Self {
        Self { root: root.into(), adapter: Adapter::new(host, minifier) }
    }

    pub fn host(&self) -> &H {
        self.adapter.host()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || self.root.as_os_str().is_empty() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Runs the named targets of `config` (all of them when `targets` is empty).
    pub fn run(&self, config: &TaskConfig, targets: &[String]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for (name, target) in config.select(targets)? {
            let options = config.target_options(name, target)?;
            summary.extend(self.run_target(name, target, &options)?);
        }
        Ok(summary)
    }

    pub fn run_target(
        &self,
        name: &str,
        target: &TargetConfig,
        options: &TaskOptions,
    ) -> Result<RunSummary> {
        info!("Running target {} ({} file groups)", name, target.files.len());
        let mut summary = RunSummary::default();
        for group in &target.files {
            if let Some(created) = self.run_group(group, options)? {
                summary.created.push(created);
            }
        }
        Ok(summary)
    }

    /// Expands the group's sources and minifies them. Returns `None` when
    /// nothing was written.
    pub fn run_group(&self, group: &FileGroup, options: &TaskOptions) -> Result<Option<CreatedFile>> {
        let expansion = expand_sources(&self.root, &group.src)?;
        for missing in &expansion.missing {
            self.host().warn(&format!("Source file `{}` not found.", missing));
        }

        if expansion.files.is_empty() {
            self.host().warn(&format!(
                "Destination `{}` not written because src files were empty.",
                group.dest.display()
            ));
            return Ok(None);
        }

        self.minify_files(&expansion.files, &group.dest, options).map(Some)
    }

    /// Minifies `sources` into `dest` and writes the output and its map.
    /// `sources` are used as given; `dest` and the paths in `options` are
    /// resolved against the root.
    pub fn minify_files(
        &self,
        sources: &[PathBuf],
        dest: &Path,
        options: &TaskOptions,
    ) -> Result<CreatedFile> {
        let dest = self.resolve(dest);
        let mut options = options.clone();
        options.name_cache = options.name_cache.as_deref().map(|path| self.resolve(path));
        options.exceptions_files = options.exceptions_files.iter().map(|path| self.resolve(path)).collect();

        let dest_dir = dest.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let mut map_path = None;
        if options.source_map.is_on() {
            let path = match &options.source_map_name {
                Some(name) => self.resolve(name),
                None => with_map_extension(&dest),
            };
            if let Toggle::On(map_options) = &mut options.source_map {
                if map_options.filename.is_none() {
                    map_options.filename =
                        dest.file_name().map(|name| name.to_string_lossy().into_owned());
                }
                if map_options.url.is_none() {
                    map_options.url = Some(uri_path(&relative_path(&dest_dir, &path)));
                }
            }
            options.generated_source_map_name = Some(path.clone());
            map_path = Some(path);
        }

        debug!("Minifying {} sources into {}", sources.len(), dest.display());
        let result = self
            .adapter
            .minify(sources, &dest, &options)
            .with_context(|| format!("Failed to minify {}", dest.display()))?;

        let mut output = result.min;
        if let Some(footer) = &options.footer {
            output.push_str(&normalize_lf(footer));
        }
        self.host()
            .write_file(&dest, &output)
            .with_context(|| format!("Failed to write {}", dest.display()))?;

        let mut written_map = None;
        if let (Some(path), Some(map)) = (map_path, result.source_map) {
            self.host()
                .write_file(&path, &map)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            self.host().verbose(&format!("File {} created (source map).", path.display()));
            written_map = Some(path);
        }

        let gzip_size = match options.report {
            Report::Gzip => Some(gzip_size(&output)?),
            Report::Min | Report::None => None,
        };
        info!("Created {}", dest.display());

        Ok(CreatedFile {
            dest,
            max_size: result.max.len(),
            min_size: output.len(),
            gzip_size,
            source_map: written_map,
            report: options.report,
        })
    }
}
