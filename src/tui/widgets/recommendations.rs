//! Recommendations panel.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{Recommendation, RecommendationKind};
use crate::tui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, recommendations: &[Recommendation], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(Span::styled(
            " Insights & Recommendations ",
            theme.title_style(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for rec in recommendations {
        let (marker, color) = match rec.kind {
            RecommendationKind::Warning => ("!", theme.warning),
            RecommendationKind::Success => ("✓", theme.success),
            RecommendationKind::Info => ("i", theme.primary),
        };
        lines.push(Line::from(vec![
            Span::styled(
                marker,
                ratatui::style::Style::default()
                    .fg(color)
                    .add_modifier(ratatui::style::Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(rec.title.clone(), theme.title_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", rec.description),
            theme.muted_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::mock;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_all_recommendation_titles() {
        let backend = TestBackend::new(110, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default_theme();
        let recommendations = mock::recommendations();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &recommendations, &theme);
            })
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Address Completeness Below Threshold"));
    }
}
