//! Report configuration types
//!
//! Input and output locations are explicit parameters; the defaults match the
//! filenames the benchmark scripts have always used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default benchmark input file
pub const DEFAULT_INPUT: &str = "benchmark_results.csv";

/// Default image output file
pub const DEFAULT_OUTPUT: &str = "benchmark_plot.png";

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// CSV file with the benchmark results
    #[serde(default = "default_input")]
    pub input_path: PathBuf,

    /// PNG file the two-panel figure is written to
    #[serde(default = "default_output")]
    pub output_path: PathBuf,

    /// Figure layout and labels
    #[serde(default)]
    pub plot: PlotConfig,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: default_input(),
            output_path: default_output(),
            plot: PlotConfig::default(),
        }
    }
}

/// Figure size and chart titles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1400)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Title of the execution-time chart
    #[serde(default = "default_time_title")]
    pub time_title: String,

    /// Title of the speedup chart
    #[serde(default = "default_speedup_title")]
    pub speedup_title: String,
}

fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    600
}

fn default_time_title() -> String {
    "Histogram Generation Performance".to_string()
}

fn default_speedup_title() -> String {
    "Performance Scaling".to_string()
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            time_title: default_time_title(),
            speedup_title: default_speedup_title(),
        }
    }
}

impl ReportConfig {
    /// Create a configuration with the default file locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the benchmark CSV to read
    pub fn with_input(mut self, path: impl AsRef<Path>) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    /// Builder method: set the image file to write
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Builder method: set the image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.plot.width = width;
        self.plot.height = height;
        self
    }

    /// Builder method: set the execution-time chart title
    pub fn with_time_title(mut self, title: impl Into<String>) -> Self {
        self.plot.time_title = title.into();
        self
    }

    /// Builder method: set the speedup chart title
    pub fn with_speedup_title(mut self, title: impl Into<String>) -> Self {
        self.plot.speedup_title = title.into();
        self
    }
}
