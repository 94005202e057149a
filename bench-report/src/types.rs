//! Core types for the benchmark report library
//!
//! This module defines the records read from a benchmark CSV, the per-thread-count
//! statistics derived from them, and the error type shared by every stage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Column holding the number of threads of a benchmark run
pub const THREAD_COUNT_COLUMN: &str = "Thread count";

/// Column holding the elapsed time of a benchmark run, in seconds
pub const TIME_COLUMN: &str = "Time (seconds)";

/// A single benchmark run as read from the input table
///
/// Several records usually share a `thread_count` (repeated trials).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    /// Number of threads used for the run (>= 1)
    #[serde(rename = "Thread count")]
    pub thread_count: u32,
    /// Elapsed time of the run in seconds (finite, >= 0)
    #[serde(rename = "Time (seconds)")]
    pub time_seconds: f64,
}

impl BenchmarkRecord {
    /// Create a new record
    pub fn new(thread_count: u32, time_seconds: f64) -> Self {
        Self {
            thread_count,
            time_seconds,
        }
    }
}

/// Mean and spread of all runs sharing one thread count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub thread_count: u32,
    /// Number of runs in the group
    pub samples: usize,
    pub avg_time: f64,
    /// Sample standard deviation; NaN with fewer than two runs
    pub std_time: f64,
}

/// Derived performance figures for one thread count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThreadStats {
    pub thread_count: u32,
    pub samples: usize,
    pub avg_time: f64,
    pub std_time: f64,
    /// Baseline time divided by `avg_time`
    pub speedup: f64,
    /// Speedup per thread, in percent
    pub efficiency: f64,
}

/// Complete statistics for a benchmark file, ascending by thread count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Mean single-thread time every speedup is relative to
    pub baseline_time: f64,
    pub rows: Vec<ThreadStats>,
}

impl Summary {
    /// Number of distinct thread counts
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the row for a thread count
    pub fn get(&self, thread_count: u32) -> Option<&ThreadStats> {
        self.rows.iter().find(|row| row.thread_count == thread_count)
    }

    /// Largest thread count present
    pub fn max_threads(&self) -> u32 {
        self.rows.iter().map(|row| row.thread_count).max().unwrap_or(1)
    }
}

/// Output of a full report run
#[derive(Debug, Clone)]
pub struct Report {
    pub summary: Summary,
    /// Where the two-panel figure was written
    pub image_path: PathBuf,
}

/// Errors that can occur while producing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("No baseline: thread count 1 is missing from the benchmark results")]
    BaselineMissingError,

    #[error("Failed to render plot: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
