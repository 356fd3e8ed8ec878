//! Metric card grid and dimension breakdown cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{Dimension, Metric, Trend};
use crate::tui::animation;
use crate::tui::theme::Theme;

/// Render the 2x2 derived metric card grid.
pub fn render_metric_grid(frame: &mut Frame, area: Rect, metrics: &[Metric], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (col_idx, col) in cols.iter().enumerate() {
            if let Some(metric) = metrics.get(row_idx * 2 + col_idx) {
                render_metric_card(frame, *col, metric, theme);
            }
        }
    }
}

fn render_metric_card(frame: &mut Frame, area: Rect, metric: &Metric, theme: &Theme) {
    let trend_color = match metric.trend {
        Trend::Up => theme.success,
        Trend::Down => theme.destructive,
        Trend::Neutral => theme.muted,
    };
    let trend_arrow = match metric.trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Neutral => "→",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(metric.title.to_uppercase(), theme.muted_style())),
        Line::from(Span::styled(metric.value.clone(), theme.title_style())),
        Line::from(vec![
            Span::styled(trend_arrow, ratatui::style::Style::default().fg(trend_color)),
            Span::raw(" "),
            Span::styled(metric.subtitle.clone(), theme.muted_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the dimension breakdown: one line per dimension with icon, name,
/// band-colored score and a progress bar. Cards fade in staggered after
/// analysis completes.
pub fn render_dimension_breakdown(
    frame: &mut Frame,
    area: Rect,
    dimensions: &[Dimension],
    theme: &Theme,
    elapsed_secs: f64,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(Span::styled(
            " Quality Dimension Breakdown ",
            theme.title_style(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let bar_width: usize = 24;
    for (i, d) in dimensions.iter().enumerate() {
        let reveal = animation::staggered_reveal(elapsed_secs, i);
        if reveal <= 0.0 {
            lines.push(Line::from(""));
            continue;
        }

        // Bar grows with the staggered reveal up to its final score width.
        let fraction = d.score as f64 / 100.0 * reveal;
        let bar = animation::render_progress_bar(fraction, bar_width);

        let name = format!("{:<13}", d.name);
        lines.push(Line::from(vec![
            Span::styled(d.icon().glyph(), theme.accent_style()),
            Span::raw(" "),
            Span::styled(name, theme.title_style()),
            Span::styled(bar, theme.score_style(d.score)),
            Span::raw(" "),
            Span::styled(format!("{:>3}%", d.score), theme.score_style(d.score)),
            Span::raw("  "),
            Span::styled(d.description.clone(), theme.muted_style()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::mock;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dimension_breakdown_renders_all_rows() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default_theme();
        let dimensions = mock::dimensions();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_dimension_breakdown(frame, area, &dimensions, &theme, 10.0);
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        for d in &dimensions {
            assert!(rendered.contains(&d.name), "missing {}", d.name);
        }
    }

    #[test]
    fn test_metric_grid_renders_values() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default_theme();
        let metrics = mock::metrics();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_metric_grid(frame, area, &metrics, &theme);
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("94%"));
        assert!(rendered.contains("A+"));
    }
}
