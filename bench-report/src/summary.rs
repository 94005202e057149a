//! Summary table formatting and JSON export

use crate::types::{Result, Summary};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDEX_HEADER: &str = "Thread count";
const COLUMN_HEADERS: [&str; 4] = ["Avg Time (s)", "Std Dev (s)", "Speedup", "Efficiency (%)"];

impl Summary {
    /// Formatted cells of one table row, without the index
    fn cells(&self) -> Vec<[String; 4]> {
        self.rows
            .iter()
            .map(|row| {
                [
                    format!("{:.6}", row.avg_time),
                    format!("{:.6}", row.std_time),
                    format!("{:.6}", row.speedup),
                    format!("{:.6}", row.efficiency),
                ]
            })
            .collect()
    }
}

/// Fixed-width table indexed by thread count; NaN cells print as `NaN`
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();

        let index_width = self
            .rows
            .iter()
            .map(|row| row.thread_count.to_string().len())
            .chain(std::iter::once(INDEX_HEADER.len()))
            .max()
            .unwrap_or(INDEX_HEADER.len());

        let mut widths = COLUMN_HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write!(f, "{:<index_width$}", INDEX_HEADER)?;
        for (header, width) in COLUMN_HEADERS.iter().zip(widths) {
            write!(f, "  {:>width$}", header)?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows.iter().zip(&cells) {
            write!(f, "{:>index_width$}", row.thread_count)?;
            for (cell, width) in cells.iter().zip(widths) {
                write!(f, "  {:>width$}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write the summary table to any writer
pub fn write_table<W: Write>(summary: &Summary, out: &mut W) -> Result<()> {
    write!(out, "{}", summary)?;
    Ok(())
}

/// Export the summary as pretty-printed JSON
///
/// NaN standard deviations are written as `null`.
pub fn write_json(summary: &Summary, path: &Path) -> Result<()> {
    log::info!("Writing JSON summary: {:?}", path);

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThreadStats;

    fn sample_summary() -> Summary {
        Summary {
            baseline_time: 10.0,
            rows: vec![
                ThreadStats {
                    thread_count: 1,
                    samples: 2,
                    avg_time: 10.0,
                    std_time: 0.0,
                    speedup: 1.0,
                    efficiency: 100.0,
                },
                ThreadStats {
                    thread_count: 16,
                    samples: 1,
                    avg_time: 0.8,
                    std_time: f64::NAN,
                    speedup: 12.5,
                    efficiency: 78.125,
                },
            ],
        }
    }

    #[test]
    fn test_table_layout() {
        let table = sample_summary().to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Thread count  Avg Time (s)  Std Dev (s)    Speedup  Efficiency (%)",
                "           1     10.000000     0.000000   1.000000      100.000000",
                "          16      0.800000          NaN  12.500000       78.125000",
            ]
        );
    }

    #[test]
    fn test_one_row_per_thread_count() {
        let summary = sample_summary();
        let mut out = Vec::new();
        write_table(&summary, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), summary.len() + 1);
    }

    #[test]
    fn test_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_json(&sample_summary(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["baseline_time"], 10.0);
        assert_eq!(value["rows"][1]["thread_count"], 16);
        assert_eq!(value["rows"][1]["efficiency"], 78.125);
        assert!(value["rows"][1]["std_time"].is_null());
    }
}
