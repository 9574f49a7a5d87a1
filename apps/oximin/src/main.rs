use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use oximin_core::FsHost;
use oximin_engine::OxcMinifier;
use oximin_task::{MinifyArgs, RunArgs, RunSummary, Runner, TaskConfig};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oximin")]
#[command(about = "Minify JavaScript with a persistent name cache", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Minify the targets of a task config file
    Run(RunArgs),
    /// Minify files into one destination
    Minify(MinifyArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    let summary = match cli.command {
        Commands::Run(args) => {
            info!("Running {} from {}", describe_targets(&args.targets), args.config.display());
            let config = TaskConfig::load(&args.config)?;
            // paths in the config are relative to the config file
            let root = args.config.parent().map(Path::to_path_buf).unwrap_or_default();
            let runner = Runner::new(root, FsHost, OxcMinifier);
            runner.run(&config, &args.targets)?
        }
        Commands::Minify(args) => {
            info!("Minifying {} files into {}", args.files.len(), args.output.display());
            let runner = Runner::new(PathBuf::new(), FsHost, OxcMinifier);
            let created = runner.minify_files(&args.files, &args.output, &args.to_options())?;
            RunSummary { created: vec![created] }
        }
    };

    for created in &summary.created {
        oximin_task::print_created(&mut stdout, created)?;
    }
    oximin_task::print_summary(&mut stdout, &summary)?;

    writeln!(
        stdout,
        "\n{} Finished in {}ms.",
        "●".bright_blue(),
        start.elapsed().as_millis().to_string().cyan()
    )?;
    stdout.flush()?;

    Ok(())
}

fn describe_targets(targets: &[String]) -> String {
    if targets.is_empty() { "all targets".to_string() } else { targets.join(", ") }
}
