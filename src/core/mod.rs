pub mod errors;

use serde::{Deserialize, Serialize};

pub use errors::Error;

/// One named axis of quality measurement.
///
/// Scores are produced clamped to 0-100 upstream; nothing in the chart
/// pipeline re-clamps, so an out-of-range score extrapolates past the rim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub short_name: String,
    pub score: u32,
    pub description: String,
}

impl Dimension {
    pub fn new(name: &str, short_name: &str, score: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            score,
            description: description.to_string(),
        }
    }

    /// Display icon for this dimension, falling back for unknown names.
    pub fn icon(&self) -> DimensionIcon {
        DimensionIcon::from_name(&self.name)
    }
}

/// A point in chart-local space. Derived on every render, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Direction of change for a derived metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A derived headline metric shown alongside the dimension breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub subtitle: String,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Warning,
    Success,
    Info,
}

/// An advisory item surfaced under the dimension breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
}

/// Display glyph variant for a dimension card.
///
/// Pure presentation lookup keyed by dimension name. Unrecognized names fall
/// back to `Check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionIcon {
    Check,
    Target,
    Compare,
    Clock,
    Fingerprint,
    Shield,
    Link,
}

impl DimensionIcon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Completeness" => Self::Check,
            "Accuracy" => Self::Target,
            "Consistency" => Self::Compare,
            "Timeliness" => Self::Clock,
            "Uniqueness" => Self::Fingerprint,
            "Validity" => Self::Shield,
            "Integrity" => Self::Link,
            _ => Self::Check,
        }
    }

    /// Terminal glyph for this icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Check => "✓",
            Self::Target => "◎",
            Self::Compare => "⇄",
            Self::Clock => "◷",
            Self::Fingerprint => "❋",
            Self::Shield => "▣",
            Self::Link => "∞",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_lookup_known_names() {
        assert_eq!(DimensionIcon::from_name("Accuracy"), DimensionIcon::Target);
        assert_eq!(DimensionIcon::from_name("Timeliness"), DimensionIcon::Clock);
        assert_eq!(DimensionIcon::from_name("Integrity"), DimensionIcon::Link);
    }

    #[test]
    fn test_icon_lookup_falls_back() {
        assert_eq!(DimensionIcon::from_name("Mystery"), DimensionIcon::Check);
        assert_eq!(DimensionIcon::from_name(""), DimensionIcon::Check);
    }

    #[test]
    fn test_point_distance() {
        let origin = Point::new(0.0, 0.0);
        let p = Point::new(3.0, 4.0);
        assert!((origin.distance(p) - 5.0).abs() < f64::EPSILON);
    }
}
