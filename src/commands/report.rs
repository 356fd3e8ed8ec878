//! Report command: export the quality report without the TUI.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::cli;
use crate::report::{create_writer, DqsReport, OutputFormat};

pub struct ReportConfig {
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub source: Option<PathBuf>,
}

pub fn write_report(config: ReportConfig) -> Result<()> {
    let source = config.source.as_ref().and_then(|path| {
        path.file_name().map(|n| n.to_string_lossy().to_string())
    });
    let report = DqsReport::mock(source);
    let format = convert_format(config.format);

    match config.output {
        Some(path) => {
            let file = fs::File::create(&path)?;
            let mut writer = create_writer(std::io::BufWriter::new(file), format);
            writer.write_report(&report)?;
            println!("Report written to {}", path.display());
        }
        None => {
            let mut writer = create_writer(std::io::stdout().lock(), format);
            writer.write_report(&report)?;
        }
    }
    Ok(())
}

fn convert_format(format: cli::OutputFormat) -> OutputFormat {
    match format {
        cli::OutputFormat::Json => OutputFormat::Json,
        cli::OutputFormat::Markdown => OutputFormat::Markdown,
        cli::OutputFormat::Terminal => OutputFormat::Terminal,
    }
}
