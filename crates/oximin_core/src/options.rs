use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// An option that is either switched off or switched on with a configuration.
///
/// Deserializes from `false`/`null` (off), `true` (on with defaults) or an
/// object (on with that configuration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle<T> {
    Off,
    On(T),
}

impl<T> Toggle<T> {
    pub fn is_on(&self) -> bool {
        matches!(self, Toggle::On(_))
    }

    pub fn enabled(&self) -> Option<&T> {
        match self {
            Toggle::On(cfg) => Some(cfg),
            Toggle::Off => None,
        }
    }
}

impl<T: Default> Toggle<T> {
    pub fn on() -> Self {
        Toggle::On(T::default())
    }
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Toggle::Off
    }
}

impl<'de, T> Deserialize<'de> for Toggle<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Unset(()),
            Flag(bool),
            Config(T),
        }

        Ok(match Raw::<T>::deserialize(deserializer)? {
            Raw::Unset(()) | Raw::Flag(false) => Toggle::Off,
            Raw::Flag(true) => Toggle::On(T::default()),
            Raw::Config(cfg) => Toggle::On(cfg),
        })
    }
}

/// Which comments survive into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comments {
    All,
    /// Legal comments only (`/*!`, `@license`, `@preserve`).
    #[default]
    Some,
    None,
}

impl<'de> Deserialize<'de> for Comments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(Comments::All),
            Raw::Flag(false) => Ok(Comments::None),
            Raw::Name(name) => match name.as_str() {
                "all" => Ok(Comments::All),
                "some" => Ok(Comments::Some),
                "none" => Ok(Comments::None),
                other => Err(serde::de::Error::unknown_variant(other, &["all", "some", "none"])),
            },
        }
    }
}

/// Printer options. Every field is optional so one set can be laid over another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub beautify: Option<bool>,
    /// Text emitted on its own line before the code.
    pub preamble: Option<String>,
    pub comments: Option<Comments>,
    /// 0 = prefer double, 1 = always single, 2 = always double, 3 = original.
    pub quote_style: Option<u8>,
}

impl OutputOptions {
    /// Overrides each field of `self` that is set in `other`.
    pub fn overlay(&mut self, other: &OutputOptions) {
        if let Some(beautify) = other.beautify {
            self.beautify = Some(beautify);
        }
        if let Some(preamble) = &other.preamble {
            self.preamble = Some(preamble.clone());
        }
        if let Some(comments) = other.comments {
            self.comments = Some(comments);
        }
        if let Some(quote_style) = other.quote_style {
            self.quote_style = Some(quote_style);
        }
    }

    pub fn is_beautify(&self) -> bool {
        self.beautify.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressOptions {
    #[serde(default)]
    pub drop_console: bool,
    #[serde(default = "default_true")]
    pub drop_debugger: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self { drop_console: false, drop_debugger: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Allow `return` outside of functions.
    #[serde(default)]
    pub bare_returns: bool,
    /// Parse inputs as ES modules instead of scripts.
    #[serde(default)]
    pub module: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MangleConfig {
    #[serde(default)]
    pub reserved: Vec<String>,
    #[serde(default)]
    pub properties: Toggle<PropertyMangleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyMangleConfig {
    #[serde(default)]
    pub reserved: Vec<String>,
    /// Only property names matching this pattern are mangled.
    pub regex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapOptions {
    /// Value of the map's `file` field.
    pub filename: Option<String>,
    /// Appended to the code as a `sourceMappingURL` comment.
    pub url: Option<String>,
    /// Value of the map's `sourceRoot` field.
    pub root: Option<String>,
    #[serde(default)]
    pub include_sources: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Report {
    None,
    #[default]
    Min,
    Gzip,
}

/// Options for one minification, as written in a task config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOptions {
    pub banner: Option<String>,
    pub footer: Option<String>,
    #[serde(default)]
    pub beautify: Toggle<OutputOptions>,
    #[serde(default = "Toggle::on")]
    pub compress: Toggle<CompressOptions>,
    #[serde(default = "Toggle::on")]
    pub mangle: Toggle<MangleConfig>,
    pub parse: Option<ParseOptions>,
    pub output: Option<OutputOptions>,
    #[serde(default)]
    pub source_map: Toggle<SourceMapOptions>,
    #[serde(default)]
    pub toplevel: bool,
    pub wrap: Option<String>,
    #[serde(default)]
    pub ie8: bool,
    pub name_cache: Option<PathBuf>,
    #[serde(default)]
    pub exceptions_files: Vec<PathBuf>,
    #[serde(default, rename = "reserveDOMProperties")]
    pub reserve_dom_properties: bool,
    /// Path of the map file; only used to compute relative source names.
    pub generated_source_map_name: Option<PathBuf>,
    /// Where the task runner writes the map (defaults to `<dest>.map`).
    pub source_map_name: Option<PathBuf>,
    #[serde(default)]
    pub report: Report,
}

impl Default for TaskOptions {
    fn default() -> Self {
        Self {
            banner: None,
            footer: None,
            beautify: Toggle::Off,
            compress: Toggle::on(),
            mangle: Toggle::on(),
            parse: None,
            output: None,
            source_map: Toggle::Off,
            toplevel: false,
            wrap: None,
            ie8: false,
            name_cache: None,
            exceptions_files: Vec::new(),
            reserve_dom_properties: false,
            generated_source_map_name: None,
            source_map_name: None,
            report: Report::Min,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Converts `\r\n` line endings to `\n`.
pub fn normalize_lf(text: &str) -> String {
    text.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_empty_config() {
        let parsed: TaskOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TaskOptions::default());
        assert!(parsed.compress.is_on());
        assert!(parsed.mangle.is_on());
        assert!(!parsed.source_map.is_on());
        assert_eq!(parsed.report, Report::Min);
    }

    #[test]
    fn test_toggle_from_bool_and_object() {
        let parsed: TaskOptions = serde_json::from_str(
            r#"{
                "compress": false,
                "mangle": { "reserved": ["jQuery"], "properties": true },
                "sourceMap": true,
                "beautify": null
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.compress, Toggle::Off);
        assert_eq!(parsed.beautify, Toggle::Off);
        assert_eq!(parsed.source_map, Toggle::On(SourceMapOptions::default()));

        let mangle = parsed.mangle.enabled().unwrap();
        assert_eq!(mangle.reserved, vec!["jQuery".to_string()]);
        assert_eq!(mangle.properties, Toggle::On(PropertyMangleConfig::default()));
    }

    #[test]
    fn test_camel_case_field_names() {
        let parsed: TaskOptions = serde_json::from_str(
            r#"{
                "nameCache": "cache.json",
                "exceptionsFiles": ["a.json", "b.json"],
                "reserveDOMProperties": true,
                "generatedSourceMapName": "dist/out.js.map",
                "sourceMap": { "includeSources": true, "root": "/src" },
                "report": "gzip"
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.name_cache, Some(PathBuf::from("cache.json")));
        assert_eq!(parsed.exceptions_files.len(), 2);
        assert!(parsed.reserve_dom_properties);
        assert_eq!(parsed.generated_source_map_name, Some(PathBuf::from("dist/out.js.map")));
        let map = parsed.source_map.enabled().unwrap();
        assert!(map.include_sources);
        assert_eq!(map.root.as_deref(), Some("/src"));
        assert_eq!(parsed.report, Report::Gzip);
    }

    #[test]
    fn test_nested_options_use_camel_case() {
        let parsed: TaskOptions = serde_json::from_str(
            r#"{
                "compress": { "dropConsole": true, "dropDebugger": false },
                "output": { "quoteStyle": 1 },
                "parse": { "bareReturns": true }
            }"#,
        )
        .unwrap();

        let compress = parsed.compress.enabled().unwrap();
        assert!(compress.drop_console);
        assert!(!compress.drop_debugger);
        assert_eq!(parsed.output.unwrap().quote_style, Some(1));
        assert!(parsed.parse.unwrap().bare_returns);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let parsed: TaskOptions =
            serde_json::from_str(r#"{ "compress": { "warnings": false }, "mystery": 1 }"#).unwrap();
        assert_eq!(parsed.compress, Toggle::On(CompressOptions::default()));
    }

    #[test]
    fn test_comments_variants() {
        let all: OutputOptions = serde_json::from_str(r#"{ "comments": true }"#).unwrap();
        let none: OutputOptions = serde_json::from_str(r#"{ "comments": false }"#).unwrap();
        let some: OutputOptions = serde_json::from_str(r#"{ "comments": "some" }"#).unwrap();
        assert_eq!(all.comments, Some(Comments::All));
        assert_eq!(none.comments, Some(Comments::None));
        assert_eq!(some.comments, Some(Comments::Some));
        assert!(serde_json::from_str::<OutputOptions>(r#"{ "comments": "most" }"#).is_err());
    }

    #[test]
    fn test_output_overlay_only_replaces_set_fields() {
        let mut output = OutputOptions {
            preamble: Some("/* banner */".to_string()),
            quote_style: Some(1),
            ..OutputOptions::default()
        };
        let overrides = OutputOptions {
            beautify: Some(true),
            quote_style: Some(2),
            ..OutputOptions::default()
        };

        output.overlay(&overrides);

        assert!(output.is_beautify());
        assert_eq!(output.preamble.as_deref(), Some("/* banner */"));
        assert_eq!(output.quote_style, Some(2));
    }

    #[test]
    fn test_normalize_lf() {
        assert_eq!(normalize_lf("/* a */\r\n/* b */\r\n"), "/* a */\n/* b */\n");
        assert_eq!(normalize_lf("plain\n"), "plain\n");
    }
}
