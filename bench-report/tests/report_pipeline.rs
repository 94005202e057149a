// End-to-end runs of the report pipeline against CSV files on disk
use bench_report::{ReportConfig, ReportError, ReportGenerator};
use std::fs;
use std::path::Path;

const SCALING_CSV: &str = "\
Thread count,Time (seconds)
1,10.0
1,10.0
2,5.0
2,5.0
4,2.0
4,2.0
";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn generator_for(dir: &Path, csv: &str) -> ReportGenerator {
    let input = dir.join("benchmark_results.csv");
    fs::write(&input, csv).unwrap();

    ReportGenerator::new(
        ReportConfig::new()
            .with_input(&input)
            .with_output(dir.join("benchmark_plot.png")),
    )
}

#[test]
fn summarize_scaling_scenario() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let summary = generator_for(dir.path(), SCALING_CSV).summarize().unwrap();

    assert_eq!(summary.len(), 3);
    let expected = [(1, 10.0, 1.0, 100.0), (2, 5.0, 2.0, 100.0), (4, 2.0, 5.0, 125.0)];
    for (row, (threads, avg, speedup, efficiency)) in summary.rows.iter().zip(expected) {
        assert_eq!(row.thread_count, threads);
        assert_eq!(row.avg_time, avg);
        assert_eq!(row.std_time, 0.0);
        assert_eq!(row.speedup, speedup);
        assert_eq!(row.efficiency, efficiency);
    }
}

#[test]
fn summary_table_is_stable_across_runs() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(
        dir.path(),
        "Thread count,Time (seconds)\n8,0.41\n1,2.9\n4,0.8\n1,3.1\n8,0.39\n2,1.6\n",
    );

    let first = generator.summarize().unwrap().to_string();
    let second = generator.summarize().unwrap().to_string();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 1 + 4);
}

#[test]
fn missing_baseline_writes_no_image() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(dir.path(), "Thread count,Time (seconds)\n2,5.0\n4,2.5\n");

    let result = generator.run();
    assert!(matches!(result, Err(ReportError::BaselineMissingError)));
    assert!(!generator.config().output_path.exists());
}

#[test]
fn empty_file_is_input_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(dir.path(), "");

    assert!(matches!(generator.run(), Err(ReportError::InputError(_))));
    assert!(!generator.config().output_path.exists());
}

#[test]
fn misnamed_column_is_input_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(dir.path(), "threads,seconds\n1,1.0\n");

    match generator.run() {
        Err(ReportError::InputError(msg)) => assert!(msg.contains("Thread count")),
        other => panic!("expected InputError, got {:?}", other),
    }
}

#[test]
fn missing_input_file_is_input_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(
        ReportConfig::new()
            .with_input(dir.path().join("nope.csv"))
            .with_output(dir.path().join("plot.png")),
    );

    assert!(matches!(generator.run(), Err(ReportError::InputError(_))));
}

#[test]
fn run_writes_png() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let generator = generator_for(dir.path(), SCALING_CSV);

    let report = generator.run().unwrap();
    let first = fs::read(&report.image_path).unwrap();
    assert!(first.starts_with(b"\x89PNG"));
    assert_eq!(report.summary.len(), 3);

    let again = generator.run().unwrap();
    let second = fs::read(&again.image_path).unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(report.summary.to_string(), again.summary.to_string());
}
