//! Aggregation and derived performance metrics

use crate::types::{Aggregate, BenchmarkRecord, ReportError, Result, Summary, ThreadStats};
use std::collections::BTreeMap;

/// Group records by thread count, ascending, with mean and sample std per group
pub fn aggregate(records: &[BenchmarkRecord]) -> Vec<Aggregate> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.thread_count)
            .or_default()
            .push(record.time_seconds);
    }

    groups
        .into_iter()
        .map(|(thread_count, times)| Aggregate {
            thread_count,
            samples: times.len(),
            avg_time: mean(&times),
            std_time: sample_std(&times),
        })
        .collect()
}

/// Compute speedup and efficiency relative to the single-thread group
pub fn derive(aggregates: &[Aggregate]) -> Result<Summary> {
    let baseline = aggregates
        .iter()
        .find(|agg| agg.thread_count == 1)
        .ok_or(ReportError::BaselineMissingError)?;

    let baseline_time = baseline.avg_time;
    if baseline_time == 0.0 {
        return Err(ReportError::InputError(
            "single-thread mean time is zero; speedup is undefined".to_string(),
        ));
    }
    log::debug!("Baseline (1 thread) mean time: {}s", baseline_time);

    let rows = aggregates
        .iter()
        .map(|agg| {
            let speedup = baseline_time / agg.avg_time;
            ThreadStats {
                thread_count: agg.thread_count,
                samples: agg.samples,
                avg_time: agg.avg_time,
                std_time: agg.std_time,
                speedup,
                efficiency: speedup / agg.thread_count as f64 * 100.0,
            }
        })
        .collect();

    Ok(Summary {
        baseline_time,
        rows,
    })
}

/// Aggregate and derive in one step
pub fn summarize(records: &[BenchmarkRecord]) -> Result<Summary> {
    let aggregates = aggregate(records);
    log::info!(
        "Aggregated {} records into {} thread-count groups",
        records.len(),
        aggregates.len()
    );
    derive(&aggregates)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1); NaN for fewer than two values
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
