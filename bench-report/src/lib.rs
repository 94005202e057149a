//! Benchmark Report Library
//!
//! Turns CSV benchmark results (execution time per thread count, usually with
//! repeated trials) into per-thread-count statistics and a two-panel figure.
//!
//! # Pipeline
//!
//! - Load the CSV into typed [`BenchmarkRecord`]s, rejecting schema mismatches
//! - Aggregate runs by thread count (mean, sample standard deviation)
//! - Derive speedup and efficiency relative to the single-thread mean
//! - Render execution time and speedup charts to a PNG image
//!
//! The library does not print; formatting the summary table is left to the
//! caller through the [`Summary`] `Display` impl.
//!
//! # Example Usage
//!
//! ```no_run
//! use bench_report::{ReportConfig, ReportGenerator};
//!
//! let config = ReportConfig::new()
//!     .with_input("benchmark_results.csv")
//!     .with_output("benchmark_plot.png");
//!
//! let report = ReportGenerator::new(config).run().unwrap();
//! println!("{}", report.summary);
//! ```

// Public modules
pub mod config;
pub mod generator;
pub mod loader;
pub mod plot;
pub mod stats;
pub mod summary;
pub mod types;

// Re-export main types for convenience
pub use config::{PlotConfig, ReportConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use generator::ReportGenerator;
pub use types::{
    Aggregate, BenchmarkRecord, Report, ReportError, Result, Summary, ThreadStats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
