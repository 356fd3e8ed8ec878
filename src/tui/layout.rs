//! Responsive layout management for different terminal sizes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Gauge, radar, metric cards side by side plus breakdown (>=120 cols)
    Full,
    /// Gauge and radar side by side, cards below (80-120 cols)
    Standard,
    /// Single column, radar only in the chart row (40-80 cols)
    Compact,
    /// Score line only (<40 cols)
    Minimal,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        match width {
            0..=39 => Self::Minimal,
            40..=79 => Self::Compact,
            80..=119 => Self::Standard,
            _ => Self::Full,
        }
    }

    /// Whether the metric card grid is rendered in the chart row
    pub fn shows_metric_cards(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Whether the radar chart is rendered at all
    pub fn shows_radar(&self) -> bool {
        !matches!(self, Self::Minimal)
    }
}

/// Vertical sections of the dashboard view: header, chart row, dimension
/// breakdown, recommendations, footer.
pub fn dashboard_sections(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(16), // Chart row (gauge / radar / metrics)
            Constraint::Min(9),     // Dimension breakdown
            Constraint::Length(8),  // Recommendations
            Constraint::Length(1),  // Footer key help
        ])
        .split(area)
        .to_vec()
}

/// Columns of the chart row for a layout mode.
pub fn chart_row_columns(area: Rect, mode: LayoutMode) -> Vec<Rect> {
    let constraints: Vec<Constraint> = match mode {
        LayoutMode::Full => vec![
            Constraint::Percentage(25),
            Constraint::Percentage(42),
            Constraint::Percentage(33),
        ],
        LayoutMode::Standard => vec![Constraint::Percentage(35), Constraint::Percentage(65)],
        _ => vec![Constraint::Percentage(100)],
    };
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Sections of the upload view: header, picker, selected file, hint.
pub fn upload_sections(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // File picker
            Constraint::Length(3), // Selected file panel
            Constraint::Length(2), // Hint / status line
        ])
        .split(area)
        .to_vec()
}
