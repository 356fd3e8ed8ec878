//! Report assembly and export.

pub mod mock;
pub mod writers;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{Dimension, Metric, Recommendation};
use crate::scoring::{overall_score, ScoreBand};

pub use writers::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter};

/// Snapshot of one analysis run, ready for export.
#[derive(Clone, Debug, Serialize)]
pub struct DqsReport {
    pub generated_at: DateTime<Utc>,
    /// Name of the file the user selected. Contents are never read; the
    /// name is carried through for provenance only.
    pub source_file: Option<String>,
    pub overall_score: u32,
    pub band: ScoreBand,
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    pub recommendations: Vec<Recommendation>,
}

impl DqsReport {
    /// Assemble a report from the given dimension set and collaborators.
    pub fn new(
        source_file: Option<String>,
        dimensions: Vec<Dimension>,
        metrics: Vec<Metric>,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        let overall = overall_score(&dimensions);
        Self {
            generated_at: Utc::now(),
            source_file,
            overall_score: overall,
            band: ScoreBand::from_score(overall),
            dimensions,
            metrics,
            recommendations,
        }
    }

    /// The standard mock report the dashboard displays after "analysis".
    pub fn mock(source_file: Option<String>) -> Self {
        Self::new(
            source_file,
            mock::dimensions(),
            mock::metrics(),
            mock::recommendations(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_report_overall_score() {
        let report = DqsReport::mock(None);
        assert_eq!(report.overall_score, 85);
        assert_eq!(report.band, ScoreBand::High);
        assert_eq!(report.dimensions.len(), 7);
        assert_eq!(report.metrics.len(), 4);
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn test_report_carries_source_file_name() {
        let report = DqsReport::mock(Some("transactions.csv".to_string()));
        assert_eq!(report.source_file.as_deref(), Some("transactions.csv"));
    }

    #[test]
    fn test_report_serializes() {
        let report = DqsReport::mock(None);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"overall_score\":85"));
        assert!(json.contains("Completeness"));
    }
}
