//! Output writers for exporting a report as JSON, Markdown, or a colored
//! terminal table.

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

use super::DqsReport;
use crate::core::{RecommendationKind, Trend};
use crate::scoring::ScoreBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DqsReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Data Quality Score Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        if let Some(source) = &report.source_file {
            writeln!(self.writer, "Source: {source}")?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Overall DQS: {} / 100** ({})",
            report.overall_score,
            report.band.label()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dimensions(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Quality Dimension Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Dimension | Score | Description |")?;
        writeln!(self.writer, "|-----------|-------|-------------|")?;
        for d in &report.dimensions {
            writeln!(
                self.writer,
                "| {} ({}) | {}% | {} |",
                d.name, d.short_name, d.score, d.description
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Derived Metrics")?;
        writeln!(self.writer)?;
        for m in &report.metrics {
            let arrow = match m.trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
                Trend::Neutral => "→",
            };
            writeln!(
                self.writer,
                "- **{}**: {} {} ({})",
                m.title, m.value, arrow, m.subtitle
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for r in &report.recommendations {
            let tag = match r.kind {
                RecommendationKind::Warning => "WARNING",
                RecommendationKind::Success => "OK",
                RecommendationKind::Info => "INFO",
            };
            writeln!(self.writer, "### [{tag}] {}", r.title)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", r.description)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_dimensions(report)?;
        self.write_metrics(report)?;
        self.write_recommendations(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn colored_score(score: u32) -> ColoredString {
        match ScoreBand::from_score(score) {
            ScoreBand::High => format!("{score}%").green(),
            ScoreBand::Medium => format!("{score}%").yellow(),
            ScoreBand::Low => format!("{score}%").red(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DqsReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "\n{}  {}",
            "Overall DQS".bold(),
            Self::colored_score(report.overall_score)
        )?;
        writeln!(self.writer, "{}", report.band.label().dimmed())?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![
            Cell::new("Dimension"),
            Cell::new("Score"),
            Cell::new("Description"),
        ]);
        for d in &report.dimensions {
            table.add_row(vec![
                Cell::new(format!("{} ({})", d.name, d.short_name)),
                Cell::new(format!("{}%", d.score)),
                Cell::new(&d.description),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        writeln!(self.writer)?;
        for r in &report.recommendations {
            let marker = match r.kind {
                RecommendationKind::Warning => "!".yellow().bold(),
                RecommendationKind::Success => "✓".green().bold(),
                RecommendationKind::Info => "i".cyan().bold(),
            };
            writeln!(self.writer, "{marker} {}", r.title.bold())?;
            writeln!(self.writer, "  {}", r.description.dimmed())?;
        }
        Ok(())
    }
}
