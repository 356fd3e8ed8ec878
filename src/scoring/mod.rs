//! Score aggregation and banding.

use serde::{Deserialize, Serialize};

use crate::core::Dimension;

/// Arithmetic mean of the dimension scores, rounded to the nearest integer.
///
/// Uses `f64::round`, which rounds half away from zero. With seven integer
/// scores the sum rarely lands exactly on a .5 boundary, but the choice is
/// pinned here so exports and the gauge agree.
pub fn overall_score(dimensions: &[Dimension]) -> u32 {
    if dimensions.is_empty() {
        return 0;
    }
    let sum: u32 = dimensions.iter().map(|d| d.score).sum();
    (sum as f64 / dimensions.len() as f64).round() as u32
}

/// Quality band for a score, shared by the gauge, the dimension cards, and
/// the report output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Strong",
            Self::Medium => "Needs attention",
            Self::Low => "At risk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(scores: &[u32]) -> Vec<Dimension> {
        scores
            .iter()
            .map(|&s| Dimension::new("X", "X", s, ""))
            .collect()
    }

    #[test]
    fn test_mock_dimension_mean() {
        // 598 / 7 = 85.43 rounds to 85
        let dimensions = dims(&[92, 78, 85, 94, 89, 72, 88]);
        assert_eq!(overall_score(&dimensions), 85);
    }

    #[test]
    fn test_mean_rounds_half_away_from_zero() {
        // 101 / 2 = 50.5 rounds up
        assert_eq!(overall_score(&dims(&[50, 51])), 51);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(overall_score(&[]), 0);
    }

    #[test]
    fn test_single_dimension_is_identity() {
        assert_eq!(overall_score(&dims(&[73])), 73);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
    }
}
