//! Benchmark Report CLI Application
//!
//! This is the command-line interface for the benchmark report generator.
//! It uses the bench-report library and adds:
//! - Input/output paths as flags, with the conventional filenames as defaults
//! - Optional TOML configuration for plot size and titles
//! - Console summary table and optional JSON export

use anyhow::{Context, Result};
use bench_report::{summary, ReportGenerator};
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod config;

/// Benchmark Report - Summarize thread-scaling benchmark results
#[derive(Parser, Debug)]
#[command(name = "bench-report")]
#[command(about = "Plot execution time and speedup from CSV benchmark results", long_about = None)]
#[command(version)]
struct Args {
    /// Benchmark CSV with "Thread count" and "Time (seconds)" columns
    /// [default: benchmark_results.csv]
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// PNG file for the two-panel plot [default: benchmark_plot.png]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the summary table as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Benchmark Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using report library v{}", bench_report::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };

    let report_config =
        app_config.to_report_config(args.input.as_deref(), args.output.as_deref());
    let input = report_config.input_path.clone();

    let report = ReportGenerator::new(report_config)
        .run()
        .with_context(|| format!("Failed to generate report from {:?}", input))?;

    println!("Plot saved to {}", report.image_path.display());

    println!("\nPerformance Summary:");
    println!("====================");
    summary::write_table(&report.summary, &mut io::stdout().lock())
        .context("Failed to print summary table")?;

    if let Some(json_path) = args.json.as_ref().or(app_config.output.json.as_ref()) {
        summary::write_json(&report.summary, json_path)
            .with_context(|| format!("Failed to write JSON summary: {:?}", json_path))?;
        println!("\nSummary saved to {}", json_path.display());
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
