//! Configuration loading and parsing
//!
//! Every section of the TOML file is optional; command-line flags take
//! precedence over file values, which take precedence over built-in defaults.

use anyhow::{Context, Result};
use bench_report::{PlotConfig, ReportConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub image: Option<PathBuf>,
    /// Optional JSON export of the summary table
    pub json: Option<PathBuf>,
}

impl AppConfig {
    /// Build the library configuration, letting CLI values override file values
    pub fn to_report_config(
        &self,
        input: Option<&Path>,
        output: Option<&Path>,
    ) -> ReportConfig {
        let mut config = ReportConfig {
            plot: self.plot.clone(),
            ..ReportConfig::default()
        };

        if let Some(path) = input.or(self.input.path.as_deref()) {
            config = config.with_input(path);
        }
        if let Some(path) = output.or(self.output.image.as_deref()) {
            config = config.with_output(path);
        }
        config
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.plot.width == 0 || config.plot.height == 0 {
        anyhow::bail!("Invalid plot size in {:?}: width and height must be positive", path);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            path = "runs/q2.csv"

            [output]
            image = "q2.png"
            json = "q2.json"

            [plot]
            width = 1200
            time_title = "Matrix-Vector Multiplication Performance"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.path, Some(PathBuf::from("runs/q2.csv")));
        assert_eq!(config.output.json, Some(PathBuf::from("q2.json")));
        assert_eq!(config.plot.width, 1200);
        assert_eq!(config.plot.height, 600);
        assert_eq!(config.plot.speedup_title, "Performance Scaling");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let report = config.to_report_config(None, None);
        assert_eq!(report, ReportConfig::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            path = "from_file.csv"
            [output]
            image = "from_file.png"
        "#,
        )
        .unwrap();

        let report = config.to_report_config(Some(Path::new("from_cli.csv")), None);
        assert_eq!(report.input_path, PathBuf::from("from_cli.csv"));
        assert_eq!(report.output_path, PathBuf::from("from_file.png"));
    }

    #[test]
    fn test_load_config_rejects_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(&path, "[plot]\nwidth = 0\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
