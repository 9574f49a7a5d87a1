use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::{ParseOptions as OxcParseOptions, Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use oximin_core::{MinifyError, ParseOptions};

/// One input file and its AST.
pub(crate) struct Unit<'a> {
    pub(crate) name: &'a str,
    pub(crate) source: &'a str,
    pub(crate) allocator: &'a Allocator,
    pub(crate) program: Program<'a>,
}

pub(crate) fn parse_unit<'a>(
    allocator: &'a Allocator,
    name: &'a str,
    source: &'a str,
    options: &ParseOptions,
) -> Result<Unit<'a>, MinifyError> {
    trace!("Parsing {} ({} bytes)", name, source.len());
    let source_type = SourceType::default().with_module(options.module);
    let parse_options = OxcParseOptions {
        allow_return_outside_function: options.bare_returns,
        ..OxcParseOptions::default()
    };

    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(allocator, source, source_type).with_options(parse_options).parse();

    if let Some(error) = errors.first() {
        debug!("{} has {} parse errors", name, errors.len());
        return Err(MinifyError::Parse { filename: name.to_string(), message: error.to_string() });
    }
    if panicked {
        return Err(MinifyError::Parse {
            filename: name.to_string(),
            message: "Unrecoverable syntax error".to_string(),
        });
    }

    Ok(Unit { name, source, allocator, program })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_script() {
        let allocator = Allocator::default();
        let unit =
            parse_unit(&allocator, "a.js", "var x = 1;", &ParseOptions::default()).unwrap();
        assert_eq!(unit.name, "a.js");
        assert_eq!(unit.program.body.len(), 1);
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let allocator = Allocator::default();
        let err = parse_unit(&allocator, "broken.js", "var s = \"oops;", &ParseOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, MinifyError::Parse { ref filename, .. } if filename == "broken.js"));
    }

    #[test]
    fn test_bare_returns_option() {
        let allocator = Allocator::default();
        let source = "if (done) return; run();";
        assert!(parse_unit(&allocator, "a.js", source, &ParseOptions::default()).is_err());

        let allocator = Allocator::default();
        let options = ParseOptions { bare_returns: true, ..ParseOptions::default() };
        assert!(parse_unit(&allocator, "a.js", source, &options).is_ok());
    }

    #[test]
    fn test_import_needs_module_mode() {
        let allocator = Allocator::default();
        let source = "import { a } from './a.js'; a();";
        assert!(parse_unit(&allocator, "a.js", source, &ParseOptions::default()).is_err());

        let allocator = Allocator::default();
        let options = ParseOptions { module: true, ..ParseOptions::default() };
        assert!(parse_unit(&allocator, "a.js", source, &options).is_ok());
    }
}
