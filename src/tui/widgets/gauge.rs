//! Overall DQS gauge widget.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::chart::gauge::fill_fraction;
use crate::scoring::ScoreBand;
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: ratatui::layout::Rect, score: u32, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(Span::styled(" Overall DQS ", theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Big score
            Constraint::Length(1), // Band label
            Constraint::Length(1),
            Constraint::Length(1), // Gauge bar
        ])
        .split(inner);

    let score_line = Line::from(vec![
        Span::styled(format!("{score}"), theme.score_style(score)),
        Span::styled(" / 100", theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(score_line).centered(), rows[0]);

    let band = ScoreBand::from_score(score);
    frame.render_widget(
        Paragraph::new(Span::styled(band.label(), theme.muted_style())).centered(),
        rows[1],
    );

    // The gauge widget requires a ratio in [0, 1]; scores are permissive
    // upstream, so clamp only here at the widget boundary.
    let ratio = fill_fraction(score).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(
            ratatui::style::Style::default()
                .fg(theme.band_color(band))
                .bg(theme.muted),
        )
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, rows[3]);
}
