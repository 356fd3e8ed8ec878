//! Configuration loading for dqscope.
//!
//! Settings come from an optional `.dqscope.toml` in the working directory,
//! with CLI flags layered on top by the command handlers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::Error;

/// Chart geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Radius corresponding to a score of 100
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Number of concentric grid rings (must be at least 1)
    #[serde(default = "default_levels")]
    pub levels: usize,

    /// Score value at which dimension labels are anchored, beyond the rim
    #[serde(default = "default_label_value")]
    pub label_value: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            levels: default_levels(),
            label_value: default_label_value(),
        }
    }
}

impl ChartConfig {
    /// Radar geometry configuration centered at the origin.
    pub fn radar_config(&self) -> crate::chart::RadarConfig {
        crate::chart::RadarConfig {
            center: crate::core::Point::new(0.0, 0.0),
            radius: self.radius,
            levels: self.levels,
            label_value: self.label_value,
        }
    }
}

/// Analysis simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Fixed delay of the simulated analysis step, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Dashboard rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Event poll / render tick interval, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DqscopeConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_radius() -> f64 {
    100.0
}

fn default_levels() -> usize {
    5
}

fn default_label_value() -> f64 {
    130.0
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_tick_ms() -> u64 {
    33
}

impl DqscopeConfig {
    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|e| Error::FileSystem {
            message: format!("cannot read config: {e}"),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.dqscope.toml` from the working directory, falling back to
    /// defaults when absent.
    pub fn load() -> Result<Self, Error> {
        let path = Path::new(".dqscope.toml");
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.chart.levels == 0 {
            return Err(Error::Configuration(
                "chart.levels must be at least 1".to_string(),
            ));
        }
        if !self.chart.radius.is_finite() || self.chart.radius <= 0.0 {
            return Err(Error::Configuration(
                "chart.radius must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default config file contents written by `dqscope init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Dqscope Configuration

[chart]
radius = 100.0
levels = 5
label_value = 130.0

[analysis]
delay_ms = 2000

[dashboard]
tick_ms = 33
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DqscopeConfig::default();
        assert_eq!(config.chart.radius, 100.0);
        assert_eq!(config.chart.levels, 5);
        assert_eq!(config.chart.label_value, 130.0);
        assert_eq!(config.analysis.delay_ms, 2000);
        assert_eq!(config.dashboard.tick_ms, 33);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\ndelay_ms = 500").unwrap();
        let config = DqscopeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.analysis.delay_ms, 500);
        assert_eq!(config.chart.levels, 5);
    }

    #[test]
    fn test_zero_levels_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nlevels = 0").unwrap();
        let err = DqscopeConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_radar_config_carries_chart_settings() {
        let chart = ChartConfig {
            radius: 80.0,
            levels: 3,
            label_value: 120.0,
        };
        let radar = chart.radar_config();
        assert_eq!(radar.radius, 80.0);
        assert_eq!(radar.levels, 3);
        assert_eq!(radar.label_value, 120.0);
    }

    #[test]
    fn test_template_round_trips() {
        let config: DqscopeConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.chart.levels, 5);
    }
}
