//! Main report API
//!
//! [`ReportGenerator`] runs the whole pipeline: load, aggregate, derive, render.
//! Statistics are derived before anything is drawn, so a run that fails on its
//! input never leaves an image behind.

use crate::config::ReportConfig;
use crate::loader;
use crate::plot;
use crate::stats;
use crate::types::{Report, Result, Summary};

/// Entry point for producing a benchmark report
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a generator for the given configuration
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Configuration this generator runs with
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load and derive statistics without rendering
    ///
    /// # Example
    /// ```no_run
    /// use bench_report::{ReportConfig, ReportGenerator};
    ///
    /// let generator = ReportGenerator::new(ReportConfig::new().with_input("runs.csv"));
    /// let summary = generator.summarize().unwrap();
    /// println!("{}", summary);
    /// ```
    pub fn summarize(&self) -> Result<Summary> {
        let records = loader::load_records(&self.config.input_path)?;
        stats::summarize(&records)
    }

    /// Produce the full report: statistics plus the two-panel image
    ///
    /// # Example
    /// ```no_run
    /// use bench_report::{ReportConfig, ReportGenerator};
    ///
    /// let report = ReportGenerator::new(ReportConfig::new()).run().unwrap();
    /// println!("Plot saved to {}", report.image_path.display());
    /// ```
    pub fn run(&self) -> Result<Report> {
        let summary = self.summarize()?;
        plot::render(&summary, &self.config.output_path, &self.config.plot)?;

        log::info!(
            "Report complete: {} thread counts, image {:?}",
            summary.len(),
            self.config.output_path
        );

        Ok(Report {
            summary,
            image_path: self.config.output_path.clone(),
        })
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
