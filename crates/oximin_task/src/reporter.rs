use std::io::{self, Write};

use colored::Colorize;
use flate2::{Compression, write::GzEncoder};
use log::{debug, trace};
use oximin_core::Report;

use crate::types::{CreatedFile, RunSummary};

const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Human readable size with three significant digits, e.g. `1.23 kB`.
pub fn pretty_bytes(bytes: usize) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let digits = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let mut number = format!("{:.*}", digits, value);
    if number.contains('.') {
        number = number.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{} {}", number, UNITS[unit])
}

/// Size of `text` once gzipped.
pub fn gzip_size(text: &str) -> io::Result<usize> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    let size = encoder.finish()?.len();
    trace!("Gzipped {} bytes to {}", text.len(), size);
    Ok(size)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

pub fn print_created<W: Write>(writer: &mut W, file: &CreatedFile) -> io::Result<()> {
    if file.report == Report::None {
        return Ok(());
    }

    let mut sizes = format!("{} → {}", pretty_bytes(file.max_size), pretty_bytes(file.min_size).green());
    if file.report == Report::Gzip
        && let Some(gzip) = file.gzip_size
    {
        sizes.push_str(&format!(" → {} (gzip)", pretty_bytes(gzip).green()));
    }
    writeln!(writer, "File {} created: {}", file.dest.display().to_string().cyan(), sizes)
}

pub fn print_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> io::Result<()> {
    debug!("Printing summary for {} files", summary.files_created());
    writeln!(
        writer,
        "{} {} created.",
        "✓".green().bold(),
        plural(summary.files_created(), "file", "files")
    )?;
    let maps = summary.source_maps_created();
    if maps > 0 {
        writeln!(
            writer,
            "{} {} created.",
            "✓".green().bold(),
            plural(maps, "source map", "source maps")
        )?;
    }
    writer.flush()?;
    Ok(())
}
