// Export modules for library usage
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod report;
pub mod scoring;
pub mod tui;

// Re-export commonly used types
pub use crate::chart::{LabelAnchor, RadarConfig, RadarGeometry};
pub use crate::config::DqscopeConfig;
pub use crate::core::{
    Dimension, DimensionIcon, Error, Metric, Point, Recommendation, RecommendationKind, Trend,
};
pub use crate::report::{DqsReport, OutputWriter};
pub use crate::scoring::{overall_score, ScoreBand};
