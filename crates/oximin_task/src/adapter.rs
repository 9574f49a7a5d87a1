use anyhow::{Context, Result, bail};
use log::{debug, info, trace};
use oximin_core::{
    ExceptionsFile, FileMap, Host, MangleCache, MangleOptions, Minifier, MinifyOptions,
    NameCache, PropertyMangleOptions, ReservedNames, TaskOptions, normalize_lf, source_map_key,
};
use oximin_engine::DOM_PROPERTIES;
use std::path::Path;

use crate::types::MinifyResult;

/// Runs a `Minifier` over a list of files with task options, keeping the
/// name cache on disk up to date.
pub struct Adapter<H, M> {
    host: H,
    minifier: M,
}

impl<H: Host, M: Minifier> Adapter<H, M> {
    pub fn new(host: H, minifier: M) -> Self {
        Self { host, minifier }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Minifies `files` for `dest`.
    ///
    /// Errors from the minifier are returned as they are, so callers can
    /// `downcast_ref::<MinifyError>()`. The name cache is only written after
    /// a successful run.
    pub fn minify<P: AsRef<Path>>(
        &self,
        files: &[P],
        dest: &Path,
        options: &TaskOptions,
    ) -> Result<MinifyResult> {
        if files.is_empty() {
            bail!("No source files to minify into {}", dest.display());
        }
        self.host.verbose("Minifying with oxc...");

        let mut minify_options = MinifyOptions {
            compress: options.compress.enabled().cloned(),
            ie8: options.ie8,
            output: options.output.clone().unwrap_or_default(),
            parse: options.parse.clone().unwrap_or_default(),
            source_map: options.source_map.enabled().cloned(),
            toplevel: options.toplevel,
            wrap: options.wrap.clone(),
            mangle: None,
        };

        if let Some(banner) = &options.banner {
            minify_options.output.preamble = Some(normalize_lf(banner));
        }
        if let Some(overrides) = options.beautify.enabled() {
            minify_options.output.beautify = Some(true);
            minify_options.output.overlay(overrides);
        }

        let cache = options.name_cache.as_deref().map(|path| NameCache::load(&self.host, path));

        if let Some(mangle) = options.mangle.enabled() {
            let mut mangle_options = MangleOptions {
                reserved: mangle.reserved.iter().cloned().collect(),
                cache: cache.as_ref().map(|cache| cache.vars.clone().unwrap_or_default()),
                properties: None,
            };

            if let Some(properties) = mangle.properties.enabled() {
                let mut reserved: ReservedNames = properties.reserved.iter().cloned().collect();
                if options.reserve_dom_properties {
                    reserved.extend_unique(DOM_PROPERTIES.iter().copied());
                }
                mangle_options.properties = Some(PropertyMangleOptions {
                    reserved,
                    regex: properties.regex.clone(),
                    cache: cache.as_ref().map(|cache| cache.props.clone().unwrap_or_default()),
                });
            }

            for path in &options.exceptions_files {
                match self.read_exceptions(path) {
                    Ok(exceptions) => {
                        debug!(
                            "{} adds {} vars and {} props to the reserved lists",
                            path.display(),
                            exceptions.vars.len(),
                            exceptions.props.len()
                        );
                        mangle_options.reserved.extend_unique(exceptions.vars);
                        if let Some(properties) = mangle_options.properties.as_mut() {
                            properties.reserved.extend_unique(exceptions.props);
                        }
                    }
                    Err(e) => self.host.warn(&format!("{:#}", e)),
                }
            }

            trace!(
                "Reserved {} variable names, {} property names",
                mangle_options.reserved.len(),
                mangle_options.properties.as_ref().map_or(0, |p| p.reserved.len())
            );
            minify_options.mangle = Some(mangle_options);
        }

        let map_dir = match &options.generated_source_map_name {
            Some(map_name) => map_name.parent().unwrap_or_else(|| Path::new("")).to_path_buf(),
            None => dest.parent().unwrap_or_else(|| Path::new("")).to_path_buf(),
        };

        let mut max = String::new();
        let mut file_map = FileMap::new();
        for file in files {
            let file = file.as_ref();
            let code = self
                .host
                .read_file(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            max.push_str(&code);
            file_map.insert(source_map_key(&map_dir, file), code);
        }
        info!("Minifying {} files into {}", file_map.len(), dest.display());

        let output = self.minifier.minify(&file_map, minify_options)?;

        if let (Some(path), Some(mut cache)) = (&options.name_cache, cache) {
            if let Some(vars) = output.vars_cache {
                cache.vars = Some(vars);
            }
            if let Some(props) = output.props_cache {
                cache.props = Some(props);
            }
            restore_namespaces(&mut cache, options);
            cache.save(&self.host, path)?;
        }

        self.host.verbose("OK");
        Ok(MinifyResult { max, min: output.code, source_map: output.map })
    }

    fn read_exceptions(&self, path: &Path) -> Result<ExceptionsFile> {
        let text = self
            .host
            .read_file(path)
            .with_context(|| format!("Failed to read exceptions file {}", path.display()))?;
        ExceptionsFile::parse(&text)
            .with_context(|| format!("Failed to parse exceptions file {}", path.display()))
    }
}

/// Namespaces handed to the minifier are written back even when the minifier
/// returned nothing for them.
fn restore_namespaces(cache: &mut NameCache, options: &TaskOptions) {
    if let Some(mangle) = options.mangle.enabled() {
        cache.vars.get_or_insert_with(MangleCache::new);
        if mangle.properties.is_on() {
            cache.props.get_or_insert_with(MangleCache::new);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oximin_core::{
        MangleConfig, MemoryHost, MinifyError, MinifyOutput, OutputOptions,
        PropertyMangleConfig, SourceMapOptions, Toggle,
    };
    use oximin_engine::OxcMinifier;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records what it was called with and echoes the sources back.
    #[derive(Default)]
    struct RecordingMinifier {
        calls: RefCell<Vec<(FileMap, MinifyOptions)>>,
        fail: bool,
    }

    impl Minifier for RecordingMinifier {
        fn minify(
            &self,
            files: &FileMap,
            options: MinifyOptions,
        ) -> std::result::Result<MinifyOutput, MinifyError> {
            self.calls.borrow_mut().push((files.clone(), options.clone()));
            if self.fail {
                return Err(MinifyError::Parse {
                    filename: "a.js".to_string(),
                    message: "Unexpected token".to_string(),
                });
            }
            let mut vars_cache = options.mangle.as_ref().and_then(|m| m.cache.clone());
            if let Some(cache) = vars_cache.as_mut() {
                cache.insert("fromMinifier", "q");
                cache.cname = 16;
            }
            Ok(MinifyOutput {
                code: files.values().cloned().collect::<Vec<_>>().join(""),
                map: options.source_map.map(|_| "{\"version\":3}".to_string()),
                vars_cache,
                props_cache: options.mangle.and_then(|m| m.properties).and_then(|p| p.cache),
            })
        }
    }

    impl RecordingMinifier {
        fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn last_options(&self) -> MinifyOptions {
            self.calls.borrow().last().unwrap().1.clone()
        }

        fn last_files(&self) -> FileMap {
            self.calls.borrow().last().unwrap().0.clone()
        }
    }

    fn host() -> MemoryHost {
        MemoryHost::new()
            .with_file("src/a.js", "var a = 1;\n")
            .with_file("src/b.js", "var b = 2;\n")
    }

    fn mangle_properties_options() -> TaskOptions {
        TaskOptions {
            mangle: Toggle::On(MangleConfig {
                reserved: vec!["keep".to_string()],
                properties: Toggle::On(PropertyMangleConfig::default()),
            }),
            ..TaskOptions::default()
        }
    }

    #[test]
    fn test_empty_file_list_is_an_error() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let files: [&str; 0] = [];
        assert!(adapter.minify(&files, Path::new("dist/out.js"), &TaskOptions::default()).is_err());
        assert!(adapter.minifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_max_is_concatenation_and_verbose_log() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let result = adapter
            .minify(&["src/a.js", "src/b.js"], Path::new("src/out.js"), &TaskOptions::default())
            .unwrap();
        assert_eq!(result.max, "var a = 1;\nvar b = 2;\n");
        assert_eq!(result.min, "var a = 1;\nvar b = 2;\n");
        assert_eq!(result.source_map, None);
        assert_eq!(adapter.host().verbose_messages(), vec!["Minifying with oxc...", "OK"]);
    }

    #[test]
    fn test_file_keys_relative_to_map_dir() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let options = TaskOptions {
            generated_source_map_name: Some(PathBuf::from("dist/out.js.map")),
            ..TaskOptions::default()
        };
        adapter.minify(&["src/a.js", "src/b.js"], Path::new("dist/out.js"), &options).unwrap();
        let keys: Vec<String> = adapter.minifier.last_files().keys().cloned().collect();
        assert_eq!(keys, vec!["../src/a.js", "../src/b.js"]);
    }

    #[test]
    fn test_file_keys_default_to_dest_dir() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &TaskOptions::default()).unwrap();
        let keys: Vec<String> = adapter.minifier.last_files().keys().cloned().collect();
        assert_eq!(keys, vec!["a.js"]);
    }

    #[test]
    fn test_file_keys_are_uri_encoded() {
        let host = MemoryHost::new().with_file("my src/a b.js", "x();");
        let adapter = Adapter::new(host, RecordingMinifier::default());
        let options = TaskOptions {
            generated_source_map_name: Some(PathBuf::from("my src/out.map")),
            ..TaskOptions::default()
        };
        adapter.minify(&["my src/a b.js"], Path::new("my src/out.js"), &options).unwrap();
        let keys: Vec<String> = adapter.minifier.last_files().keys().cloned().collect();
        assert_eq!(keys, vec!["a%20b.js"]);
    }

    #[test]
    fn test_banner_and_beautify_shape_output_options() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let options = TaskOptions {
            banner: Some("/*! v1 */\r\n".to_string()),
            beautify: Toggle::On(OutputOptions { quote_style: Some(1), ..OutputOptions::default() }),
            output: Some(OutputOptions { quote_style: Some(0), ..OutputOptions::default() }),
            ..TaskOptions::default()
        };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        let output = adapter.minifier.last_options().output;
        assert_eq!(output.preamble.as_deref(), Some("/*! v1 */\n"));
        assert_eq!(output.beautify, Some(true));
        assert_eq!(output.quote_style, Some(1));
    }

    #[test]
    fn test_options_copied_through() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let options = TaskOptions {
            compress: Toggle::Off,
            mangle: Toggle::Off,
            source_map: Toggle::On(SourceMapOptions::default()),
            toplevel: true,
            ie8: true,
            wrap: Some("lib".to_string()),
            ..TaskOptions::default()
        };
        let result = adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        let passed = adapter.minifier.last_options();
        assert!(passed.compress.is_none());
        assert!(passed.mangle.is_none());
        assert!(passed.source_map.is_some());
        assert!(passed.toplevel && passed.ie8);
        assert_eq!(passed.wrap.as_deref(), Some("lib"));
        assert_eq!(result.source_map.as_deref(), Some("{\"version\":3}"));
    }

    #[test]
    fn test_reserved_merge_order() {
        let host = host()
            .with_file("exceptions.json", r#"{"vars":["keep","fromFile"],"props":["body","myProp"]}"#);
        let adapter = Adapter::new(host, RecordingMinifier::default());
        let options = TaskOptions {
            reserve_dom_properties: true,
            exceptions_files: vec![PathBuf::from("exceptions.json")],
            ..mangle_properties_options()
        };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();

        let mangle = adapter.minifier.last_options().mangle.unwrap();
        let vars: Vec<&str> = mangle.reserved.iter().collect();
        assert_eq!(vars, vec!["keep", "fromFile"]);

        let props = mangle.properties.unwrap().reserved;
        assert_eq!(props.len(), DOM_PROPERTIES.len() + 1);
        assert!(props.contains("body"));
        assert_eq!(props.iter().last(), Some("myProp"));
    }

    #[test]
    fn test_dom_properties_need_property_mangling() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let options = TaskOptions { reserve_dom_properties: true, ..TaskOptions::default() };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        let mangle = adapter.minifier.last_options().mangle.unwrap();
        assert!(mangle.properties.is_none());
        assert!(mangle.reserved.is_empty());
    }

    #[test]
    fn test_bad_exceptions_file_warns_and_continues() {
        let host = host().with_file("broken.json", "{ not json");
        let adapter = Adapter::new(host, RecordingMinifier::default());
        let options = TaskOptions {
            exceptions_files: vec![PathBuf::from("missing.json"), PathBuf::from("broken.json")],
            ..TaskOptions::default()
        };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        let warnings = adapter.host().warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("missing.json"));
        assert!(warnings[1].contains("broken.json"));
    }

    #[test]
    fn test_exceptions_ignored_without_mangle() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let options = TaskOptions {
            mangle: Toggle::Off,
            exceptions_files: vec![PathBuf::from("missing.json")],
            ..TaskOptions::default()
        };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        assert!(adapter.host().warnings().is_empty());
    }

    #[test]
    fn test_unreadable_input_is_fatal() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let err = adapter
            .minify(&["src/a.js", "src/nope.js"], Path::new("src/out.js"), &TaskOptions::default())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("src/nope.js"));
        assert!(adapter.minifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_cache_starts_fresh_and_is_written() {
        let adapter = Adapter::new(host(), RecordingMinifier::default());
        let options = TaskOptions {
            name_cache: Some(PathBuf::from("cache.json")),
            ..mangle_properties_options()
        };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();

        let passed = adapter.minifier.last_options().mangle.unwrap();
        assert_eq!(passed.cache, Some(MangleCache::new()));
        assert_eq!(passed.properties.unwrap().cache, Some(MangleCache::new()));

        let written: Value = serde_json::from_str(&adapter.host().file("cache.json").unwrap()).unwrap();
        assert_eq!(written["vars"]["cname"], 16);
        assert_eq!(written["vars"]["props"]["$fromMinifier"], "q");
        assert_eq!(written["props"]["cname"], -1);
    }

    #[test]
    fn test_corrupt_cache_treated_as_missing() {
        let host = host().with_file("cache.json", "{{{");
        let adapter = Adapter::new(host, RecordingMinifier::default());
        let options =
            TaskOptions { name_cache: Some(PathBuf::from("cache.json")), ..TaskOptions::default() };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        assert_eq!(adapter.minifier.last_options().mangle.unwrap().cache, Some(MangleCache::new()));
        assert!(adapter.host().warnings().is_empty());
    }

    #[test]
    fn test_existing_cache_passed_and_unknown_keys_kept() {
        let host = host().with_file(
            "cache.json",
            r#"{"vars":{"cname":3,"props":{"$longName":"d"}},"other":{"kept":true}}"#,
        );
        let adapter = Adapter::new(host, RecordingMinifier::default());
        let options =
            TaskOptions { name_cache: Some(PathBuf::from("cache.json")), ..TaskOptions::default() };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();

        let passed = adapter.minifier.last_options().mangle.unwrap().cache.unwrap();
        assert_eq!(passed.get("longName"), Some("d"));
        assert_eq!(passed.cname, 3);

        let written: Value = serde_json::from_str(&adapter.host().file("cache.json").unwrap()).unwrap();
        assert_eq!(written["other"]["kept"], true);
        assert_eq!(written["vars"]["props"]["$longName"], "d");
        assert!(written.get("props").is_none());
    }

    #[test]
    fn test_cache_rewritten_without_mangle() {
        let host = host().with_file("cache.json", r#"{"vars":{"cname":0,"props":{"$x":"a"}}}"#);
        let adapter = Adapter::new(host, RecordingMinifier::default());
        let options = TaskOptions {
            mangle: Toggle::Off,
            name_cache: Some(PathBuf::from("cache.json")),
            ..TaskOptions::default()
        };
        adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap();
        let written = NameCache::parse(&adapter.host().file("cache.json").unwrap()).unwrap();
        assert_eq!(written.vars.unwrap().get("x"), Some("a"));
    }

    #[test]
    fn test_minifier_error_passes_through_without_cache_write() {
        let adapter = Adapter::new(host(), RecordingMinifier::failing());
        let options =
            TaskOptions { name_cache: Some(PathBuf::from("cache.json")), ..TaskOptions::default() };
        let err = adapter.minify(&["src/a.js"], Path::new("src/out.js"), &options).unwrap_err();
        let typed = err.downcast_ref::<MinifyError>().unwrap();
        assert!(matches!(typed, MinifyError::Parse { .. }));
        assert!(adapter.host().file("cache.json").is_none());
        assert_eq!(adapter.host().verbose_messages(), vec!["Minifying with oxc..."]);
    }

    #[test]
    fn test_with_oxc_names_are_stable_across_runs() {
        let host = MemoryHost::new().with_file(
            "src/app.js",
            "var applicationState = {}; function updateState(nextValue) { applicationState.value = nextValue; }\n",
        );
        let adapter = Adapter::new(host, OxcMinifier);
        let options = TaskOptions {
            toplevel: true,
            compress: Toggle::Off,
            name_cache: Some(PathBuf::from("cache.json")),
            ..TaskOptions::default()
        };

        let first = adapter.minify(&["src/app.js"], Path::new("dist/app.js"), &options).unwrap();
        let cache_after_first = adapter.host().file("cache.json").unwrap();
        let second = adapter.minify(&["src/app.js"], Path::new("dist/app.js"), &options).unwrap();

        assert_eq!(first.min, second.min);
        assert!(!first.min.contains("applicationState"));
        assert_eq!(adapter.host().file("cache.json").unwrap(), cache_after_first);

        let cache = NameCache::parse(&cache_after_first).unwrap();
        let vars = cache.vars.unwrap();
        assert!(vars.get("applicationState").is_some());
        assert!(vars.get("updateState").is_some());
    }

    #[test]
    fn test_with_oxc_unmangled_output_is_repeatable() {
        let host = MemoryHost::new()
            .with_file("src/a.js", "function add(left, right) {\n  debugger;\n  return left + right;\n}\n")
            .with_file("src/b.js", "var total = add(1, 2);\nconsole.log(total);\n");
        let adapter = Adapter::new(host, OxcMinifier);
        let options = TaskOptions {
            mangle: Toggle::Off,
            source_map: Toggle::on(),
            generated_source_map_name: Some(PathBuf::from("dist/app.js.map")),
            ..TaskOptions::default()
        };
        assert!(options.compress.is_on());

        let files = ["src/a.js", "src/b.js"];
        let first = adapter.minify(&files, Path::new("dist/app.js"), &options).unwrap();
        let second = adapter.minify(&files, Path::new("dist/app.js"), &options).unwrap();

        assert_eq!(first.min, second.min);
        assert_eq!(first.source_map, second.source_map);
        assert!(first.source_map.is_some());
        assert!(first.min.contains("left"));
        assert!(!first.min.contains("debugger"));
    }

    #[test]
    fn test_with_oxc_parse_error_keeps_cache_untouched() {
        let host = MemoryHost::new()
            .with_file("src/bad.js", "function (\n")
            .with_file("cache.json", r#"{"vars":{"cname":-1,"props":{}}}"#);
        let adapter = Adapter::new(host, OxcMinifier);
        let options =
            TaskOptions { name_cache: Some(PathBuf::from("cache.json")), ..TaskOptions::default() };
        let err = adapter.minify(&["src/bad.js"], Path::new("dist/bad.js"), &options).unwrap_err();
        assert!(err.downcast_ref::<MinifyError>().is_some());
        assert_eq!(
            adapter.host().file("cache.json").unwrap(),
            r#"{"vars":{"cname":-1,"props":{}}}"#
        );
    }

    #[test]
    fn test_with_oxc_dom_properties_survive() {
        let host = MemoryHost::new()
            .with_file("src/ui.js", "document.body.innerHTML = widget.customLabel;\n");
        let adapter = Adapter::new(host, OxcMinifier);
        let options = TaskOptions { reserve_dom_properties: true, ..mangle_properties_options() };
        let result = adapter.minify(&["src/ui.js"], Path::new("dist/ui.js"), &options).unwrap();
        assert!(result.min.contains("document.body.innerHTML"), "{}", result.min);
        assert!(!result.min.contains("customLabel"), "{}", result.min);
    }
}
