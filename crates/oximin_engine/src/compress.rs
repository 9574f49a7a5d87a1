use log::trace;
use oxc_minifier::{CompressOptions as OxcCompressOptions, Minifier, MinifierOptions};
use oximin_core::CompressOptions;

use crate::parse::Unit;

/// Runs oxc's compressor over the unit in place. Renaming is left to the
/// mangling passes.
pub(crate) fn compress_unit(unit: &mut Unit<'_>, options: &CompressOptions) {
    trace!("Compressing {}", unit.name);
    let compress = OxcCompressOptions {
        drop_console: options.drop_console,
        drop_debugger: options.drop_debugger,
        ..OxcCompressOptions::smallest()
    };
    let minifier = Minifier::new(MinifierOptions { mangle: None, compress: Some(compress) });
    minifier.minify(unit.allocator, &mut unit.program);
}
