/*!
 * Command-line interface for dirscan
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dirscan::collector::collect_files;
use dirscan::config::{Args, Config};
use dirscan::writer::ArtifactWriter;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "dirscan", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    // WARN applies only when RUST_LOG is unset
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn run(args: Args) -> dirscan::Result<()> {
    // Create configuration
    let config = Config::from_args(args)?;

    // Validate configuration
    config.validate()?;
    debug!(root = %config.root.display(), repo = %config.repo_name, "scanning");

    let report = dirscan::scan(&config);

    if !config.artifact.is_requested() {
        report.print();
        return Ok(());
    }

    let files = collect_files(&config.root, config.mode.is_raw());
    debug!(count = files.len(), mode = %config.mode, "collected files");

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_prefix("📄 Writing");

    let writer = ArtifactWriter::new(config, Arc::new(progress.clone()));
    let written = writer.write(&report, &files);
    progress.finish_and_clear();

    println!("[OK] Artifact created: {}", written?.display());
    Ok(())
}
