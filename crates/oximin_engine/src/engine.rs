use std::path::PathBuf;

use log::{debug, info, trace};
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CommentOptions, LegalComment};
use oxc_semantic::{Scoping, SemanticBuilder};
use oximin_core::{
    Comments, FileMap, MangleOptions, MinifyError, MinifyOptions, MinifyOutput, Minifier,
    OutputOptions,
};

use crate::compress::compress_unit;
use crate::mangle::VariableMangler;
use crate::parse::{Unit, parse_unit};
use crate::properties::mangle_properties;
use crate::sourcemap::MapConcat;

/// Minifier built on the oxc parser, compressor and code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxcMinifier;

impl Minifier for OxcMinifier {
    fn minify(&self, files: &FileMap, options: MinifyOptions) -> Result<MinifyOutput, MinifyError> {
        let MinifyOptions { compress, mut mangle, output, parse, source_map, toplevel, wrap, ie8 } =
            options;
        if let Some(name) = &wrap {
            validate_wrap_name(name)?;
        }
        info!("Minifying {} files", files.len());

        let allocators: Vec<Allocator> = files.keys().map(|_| Allocator::default()).collect();
        let mut units = Vec::with_capacity(files.len());
        for ((name, source), allocator) in files.iter().zip(&allocators) {
            units.push(parse_unit(allocator, name, source, &parse)?);
        }

        // Properties are renamed before compression, which rewrites
        // `o["name"]` to `o.name` and would hide that `name` is quoted.
        let mut props_cache = None;
        if let Some(MangleOptions { properties: Some(properties), .. }) = mangle.as_mut() {
            let cache = properties.cache.take();
            let keep_cache = cache.is_some();
            let updated = mangle_properties(&mut units, properties, cache.unwrap_or_default())?;
            if keep_cache {
                props_cache = Some(updated);
            }
        }

        if let Some(compress) = &compress {
            for unit in units.iter_mut() {
                compress_unit(unit, compress);
            }
        }

        let mut vars_cache = None;
        let mut scopings: Vec<Option<Scoping>> = units.iter().map(|_| None).collect();

        if let Some(MangleOptions { reserved, cache, .. }) = mangle {
            let mut built: Vec<Scoping> = units
                .iter()
                .map(|unit| SemanticBuilder::new().build(&unit.program).semantic.into_scoping())
                .collect();
            let keep_cache = cache.is_some();
            let mut mangler = VariableMangler::new(
                &units,
                &built,
                &reserved,
                cache.unwrap_or_default(),
                toplevel && !parse.module,
                ie8,
            );
            for (index, scoping) in built.iter_mut().enumerate() {
                mangler.mangle(index, units[index].name, scoping);
            }
            if keep_cache {
                vars_cache = Some(mangler.into_cache());
            }
            scopings = built.into_iter().map(Some).collect();
        }

        let codegen_options = |unit: &Unit<'_>| CodegenOptions {
            minify: !output.is_beautify(),
            single_quote: output.quote_style == Some(1),
            comments: comment_options(&output),
            source_map_path: source_map.as_ref().map(|_| PathBuf::from(unit.name)),
            ..CodegenOptions::default()
        };

        let mut emitter = Emitter::default();
        if let Some(preamble) = &output.preamble {
            emitter.push(preamble);
        }
        if let Some(name) = &wrap {
            trace!("Wrapping output as {}", name);
            emitter.push("(function(exports){");
        }

        let mut maps = source_map.as_ref().map(|_| MapConcat::new());
        for (unit, scoping) in units.iter().zip(scopings) {
            let printed = Codegen::new()
                .with_options(codegen_options(unit))
                .with_scoping(scoping)
                .build(&unit.program);
            let line = emitter.next_line();
            emitter.push(printed.code.trim_end_matches('\n'));
            if let (Some(maps), Some(map)) = (maps.as_mut(), printed.map) {
                maps.add(unit.name, unit.source, map, line);
            }
        }

        if let Some(name) = &wrap {
            emitter.push(&format!(
                "}})(typeof {name}==\"undefined\"?({name}={{}}):{name});"
            ));
        }

        let mut map = None;
        if let (Some(maps), Some(map_options)) = (maps, &source_map) {
            if let Some(url) = &map_options.url {
                emitter.push(&format!("//# sourceMappingURL={}", url));
            }
            map = Some(maps.to_json(map_options));
        }

        debug!("Minified output is {} bytes", emitter.code.len());
        Ok(MinifyOutput { code: emitter.code, map, vars_cache, props_cache })
    }
}

fn comment_options(output: &OutputOptions) -> CommentOptions {
    match output.comments.unwrap_or_default() {
        Comments::All => CommentOptions {
            normal: true,
            jsdoc: true,
            annotation: true,
            legal: LegalComment::Inline,
            ..CommentOptions::default()
        },
        Comments::Some => CommentOptions {
            normal: false,
            jsdoc: false,
            annotation: false,
            legal: LegalComment::Inline,
            ..CommentOptions::default()
        },
        Comments::None => CommentOptions::disabled(),
    }
}

fn validate_wrap_name(name: &str) -> Result<(), MinifyError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '$' || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '$' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(MinifyError::InvalidOption {
            option: "wrap".to_string(),
            message: format!("`{}` is not an identifier", name),
        })
    }
}

/// Joins output pieces with newlines and tracks the current line.
#[derive(Default)]
struct Emitter {
    code: String,
    line: usize,
}

impl Emitter {
    /// Line on which the next pushed piece starts.
    fn next_line(&self) -> usize {
        if self.code.is_empty() { 0 } else { self.line + 1 }
    }

    fn push(&mut self, text: &str) {
        if !self.code.is_empty() {
            self.code.push('\n');
            self.line += 1;
        }
        self.line += text.matches('\n').count();
        self.code.push_str(text);
    }
}
