use anyhow::{Context, Result, anyhow};
use clap::Parser;
use indexmap::IndexMap;
use log::{debug, trace};
use oximin_core::{
    MangleConfig, OutputOptions, PropertyMangleConfig, Report, SourceMapOptions, TaskOptions,
    Toggle,
};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The task config file: shared options and named targets.
///
/// ```json
/// {
///   "options": { "sourceMap": true },
///   "targets": {
///     "app": {
///       "options": { "toplevel": true },
///       "files": [{ "src": ["src/**/*.js", "!src/**/*.test.js"], "dest": "dist/app.min.js" }]
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub targets: IndexMap<String, TargetConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub files: Vec<FileGroup>,
}

/// Sources that are minified together into one destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileGroup {
    #[serde(deserialize_with = "one_or_many")]
    pub src: Vec<String>,
    pub dest: PathBuf,
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::One(pattern) => vec![pattern],
        Raw::Many(patterns) => patterns,
    })
}

impl TaskConfig {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid task config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading task config from {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read task config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Task options with the target's options laid over them. Keys are
    /// replaced as a whole, nested objects are not merged.
    pub fn target_options(&self, name: &str, target: &TargetConfig) -> Result<TaskOptions> {
        let mut merged = self.options.clone();
        for (key, value) in &target.options {
            trace!("Target {} overrides option {}", name, key);
            merged.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(merged))
            .with_context(|| format!("Invalid options for target {}", name))
    }

    /// The named targets in the order given, or every target in declaration
    /// order when `names` is empty.
    pub fn select<'c>(&'c self, names: &[String]) -> Result<Vec<(&'c str, &'c TargetConfig)>> {
        if names.is_empty() {
            return Ok(self.targets.iter().map(|(name, target)| (name.as_str(), target)).collect());
        }
        names
            .iter()
            .map(|name| {
                self.targets
                    .get_key_value(name)
                    .map(|(name, target)| (name.as_str(), target))
                    .ok_or_else(|| anyhow!("Unknown target `{}`", name))
            })
            .collect()
    }
}

/// Runs the targets of a task config file.
#[derive(Debug, Clone, Parser)]
#[command(about = "Minify the targets of a task config file")]
pub struct RunArgs {
    /// Path of the task config file
    #[arg(long, default_value = "oximin.json")]
    pub config: PathBuf,

    /// Targets to run (defaults to all, in declaration order)
    pub targets: Vec<String>,
}

/// Minifies a list of files into one destination.
#[derive(Debug, Clone, Parser)]
#[command(about = "Minify files into one destination")]
pub struct MinifyArgs {
    /// Source files, concatenated in the order given
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Destination file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write a source map next to the destination
    #[arg(long)]
    pub source_map: bool,

    /// Name cache file to read and update
    #[arg(long)]
    pub name_cache: Option<PathBuf>,

    #[arg(long)]
    pub no_mangle: bool,

    #[arg(long)]
    pub no_compress: bool,

    /// Also mangle property names
    #[arg(long)]
    pub mangle_props: bool,

    /// Never mangle properties known to the DOM
    #[arg(long)]
    pub reserve_dom_props: bool,

    /// JSON file with `vars` and `props` names to keep (repeatable)
    #[arg(long)]
    pub exceptions_file: Vec<PathBuf>,

    #[arg(long)]
    pub banner: Option<String>,

    #[arg(long)]
    pub footer: Option<String>,

    #[arg(long)]
    pub beautify: bool,

    /// Mangle top-level names
    #[arg(long)]
    pub toplevel: bool,

    /// Wrap the output so its top-level names end up on `exports`
    #[arg(long)]
    pub wrap: Option<String>,

    #[arg(long)]
    pub ie8: bool,

    /// Size report: none, min or gzip
    #[arg(long, value_enum, default_value_t = Report::Min)]
    pub report: Report,
}

impl MinifyArgs {
    pub fn to_options(&self) -> TaskOptions {
        let mangle = if self.no_mangle {
            Toggle::Off
        } else {
            Toggle::On(MangleConfig {
                reserved: Vec::new(),
                properties: if self.mangle_props {
                    Toggle::On(PropertyMangleConfig::default())
                } else {
                    Toggle::Off
                },
            })
        };

        TaskOptions {
            banner: self.banner.clone(),
            footer: self.footer.clone(),
            beautify: if self.beautify { Toggle::On(OutputOptions::default()) } else { Toggle::Off },
            compress: if self.no_compress { Toggle::Off } else { Toggle::on() },
            mangle,
            source_map: if self.source_map {
                Toggle::On(SourceMapOptions::default())
            } else {
                Toggle::Off
            },
            toplevel: self.toplevel,
            wrap: self.wrap.clone(),
            ie8: self.ie8,
            name_cache: self.name_cache.clone(),
            exceptions_files: self.exceptions_file.clone(),
            reserve_dom_properties: self.reserve_dom_props,
            report: self.report,
            ..TaskOptions::default()
        }
    }
}
