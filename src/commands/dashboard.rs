//! Dashboard command: configuration resolution and TUI launch.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::config::DqscopeConfig;
use crate::tui::{app::App, DashboardTui};

pub struct DashboardOptions {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub levels: Option<usize>,
}

/// Resolve configuration (file, then CLI overrides) and run the TUI.
pub fn run_dashboard(options: DashboardOptions) -> Result<()> {
    let config = resolve_config(&options)?;
    let input_dir = options
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    info!(
        "starting dashboard (levels={}, delay={}ms, input={})",
        config.chart.levels,
        config.analysis.delay_ms,
        input_dir.display()
    );

    let app = App::new(config, Some(input_dir.as_path()));
    let mut tui = DashboardTui::new(app)?;
    tui.run()
}

fn resolve_config(options: &DashboardOptions) -> Result<DqscopeConfig> {
    let mut config = match &options.config {
        Some(path) => DqscopeConfig::from_file(Path::new(path))?,
        None => DqscopeConfig::load()?,
    };
    if let Some(delay_ms) = options.delay_ms {
        config.analysis.delay_ms = delay_ms;
    }
    if let Some(levels) = options.levels {
        anyhow::ensure!(levels >= 1, "--levels must be at least 1");
        config.chart.levels = levels;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win() {
        let options = DashboardOptions {
            input: None,
            config: None,
            delay_ms: Some(100),
            levels: Some(8),
        };
        let config = resolve_config(&options).unwrap();
        assert_eq!(config.analysis.delay_ms, 100);
        assert_eq!(config.chart.levels, 8);
    }

    #[test]
    fn test_zero_levels_override_rejected() {
        let options = DashboardOptions {
            input: None,
            config: None,
            delay_ms: None,
            levels: Some(0),
        };
        assert!(resolve_config(&options).is_err());
    }
}
