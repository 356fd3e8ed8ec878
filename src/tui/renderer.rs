//! Core rendering logic: dispatches on phase and layout mode, then hands
//! each region to its widget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::animation::{self, AnimationController};
use super::app::{App, Phase};
use super::layout::{self, LayoutMode};
use super::theme::Theme;
use super::widgets;

/// Render the current frame with adaptive layout.
pub fn render_adaptive(frame: &mut Frame, app: &App, animation: &AnimationController) {
    let theme = Theme::default_theme();
    match app.phase() {
        Phase::Idle => render_upload(frame, app, &theme, animation),
        Phase::Loading => render_loading(frame, app, &theme, animation),
        Phase::Analyzed => {
            let mode = LayoutMode::from_terminal_width(frame.area().width);
            match mode {
                LayoutMode::Minimal => render_minimal(frame, app, &theme),
                _ => render_dashboard(frame, app, &theme, mode),
            }
        }
    }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let title = Line::from(vec![
        Span::styled("dqscope", theme.accent_style()),
        Span::raw("  "),
        Span::styled("Data Quality Scoring", theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Upload view: picker, selected file, hint line.
fn render_upload(frame: &mut Frame, app: &App, theme: &Theme, animation: &AnimationController) {
    let sections = layout::upload_sections(frame.area());
    render_header(frame, theme, sections[0]);
    widgets::upload::render_picker(frame, sections[1], app, theme);
    widgets::upload::render_selected(frame, sections[2], app, theme);

    let hint = if let Some(message) = app.status_message() {
        Line::from(Span::styled(message.to_string(), theme.status_style()))
    } else {
        // Pulse the analyze hint so the call to action stands out.
        let style = if animation.pulse_alpha() > 0.7 {
            theme.accent_style()
        } else {
            theme.hint_style()
        };
        Line::from(vec![
            Span::styled("a", style),
            Span::styled(" analyze   ", theme.hint_style()),
            Span::styled("j/k", theme.hint_style()),
            Span::styled(" move   ", theme.hint_style()),
            Span::styled("Enter", theme.hint_style()),
            Span::styled(" select   ", theme.hint_style()),
            Span::styled("q", theme.hint_style()),
            Span::styled(" quit", theme.hint_style()),
        ])
    };
    frame.render_widget(Paragraph::new(hint), sections[3]);
}

/// Loading view: spinner plus a progress bar over the fixed delay.
fn render_loading(frame: &mut Frame, app: &App, theme: &Theme, animation: &AnimationController) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let spinner_line = Line::from(vec![
        Span::styled(animation.spinner_char(), theme.accent_style()),
        Span::raw(" "),
        Span::styled("Analyzing...", theme.title_style()),
    ]);
    frame.render_widget(Paragraph::new(spinner_line).centered(), rows[1]);

    let width = (area.width.saturating_sub(20) as usize).min(40);
    let bar = animation::render_progress_bar(app.loading_progress(), width);
    frame.render_widget(
        Paragraph::new(Span::styled(bar, theme.accent_style())).centered(),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Data is processed in-memory only. No raw data is stored.",
            theme.muted_style(),
        ))
        .centered(),
        rows[3],
    );
}

/// Full dashboard: chart row, breakdown, recommendations, footer.
fn render_dashboard(frame: &mut Frame, app: &App, theme: &Theme, mode: LayoutMode) {
    let Some(report) = &app.report else {
        return;
    };
    let sections = layout::dashboard_sections(frame.area());
    render_header(frame, theme, sections[0]);

    let elapsed = app.seconds_since_analyzed();
    let reveal = animation::reveal_progress(elapsed);

    let chart = &app.config.chart;
    let columns = layout::chart_row_columns(sections[1], mode);
    match mode {
        LayoutMode::Full => {
            widgets::gauge::render(frame, columns[0], report.overall_score, theme);
            widgets::radar::render(frame, columns[1], &report.dimensions, chart, theme, reveal);
            widgets::cards::render_metric_grid(frame, columns[2], &report.metrics, theme);
        }
        LayoutMode::Standard => {
            widgets::gauge::render(frame, columns[0], report.overall_score, theme);
            widgets::radar::render(frame, columns[1], &report.dimensions, chart, theme, reveal);
        }
        _ => {
            widgets::radar::render(frame, columns[0], &report.dimensions, chart, theme, reveal);
        }
    }

    widgets::cards::render_dimension_breakdown(
        frame,
        sections[2],
        &report.dimensions,
        theme,
        elapsed,
    );
    widgets::recommendations::render(frame, sections[3], &report.recommendations, theme);

    let footer = if let Some(message) = app.status_message() {
        Line::from(Span::styled(message.to_string(), theme.status_style()))
    } else {
        Line::from(Span::styled(
            "r new analysis   e export report   q quit",
            theme.hint_style(),
        ))
    };
    frame.render_widget(Paragraph::new(footer), sections[4]);
}

/// Minimal view for very narrow terminals: just the score line.
fn render_minimal(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(report) = &app.report else {
        return;
    };
    let line = Line::from(vec![
        Span::styled("DQS ", theme.title_style()),
        Span::styled(
            format!("{}", report.overall_score),
            theme.score_style(report.overall_score),
        ),
        Span::styled("/100", theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(line), frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DqscopeConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn analyzed_app_with(config: DqscopeConfig) -> App {
        let mut config = config;
        config.analysis.delay_ms = 0;
        let mut app = App::new(config, None);
        app.begin_analysis();
        app.tick();
        app
    }

    fn analyzed_app() -> App {
        analyzed_app_with(DqscopeConfig::default())
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let animation = AnimationController::default();
        terminal
            .draw(|frame| render_adaptive(frame, app, &animation))
            .unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_idle_renders_upload_view() {
        let app = App::new(DqscopeConfig::default(), None);
        let rendered = draw(&app, 100, 30);
        assert!(rendered.contains("Select a data file"));
        assert!(rendered.contains("dqscope"));
    }

    #[test]
    fn test_loading_renders_spinner_text() {
        let mut config = DqscopeConfig::default();
        config.analysis.delay_ms = 60_000;
        let mut app = App::new(config, None);
        app.begin_analysis();
        let rendered = draw(&app, 100, 30);
        assert!(rendered.contains("Analyzing..."));
    }

    #[test]
    fn test_analyzed_renders_dashboard() {
        let app = analyzed_app();
        let rendered = draw(&app, 130, 45);
        assert!(rendered.contains("Overall DQS"));
        assert!(rendered.contains("Quality Dimension Breakdown"));
        assert!(rendered.contains("85"));
    }

    #[test]
    fn test_chart_levels_config_changes_rendered_grid() {
        let mut sparse = DqscopeConfig::default();
        sparse.chart.levels = 1;
        let mut dense = DqscopeConfig::default();
        dense.chart.levels = 5;

        let rendered_sparse = draw(&analyzed_app_with(sparse), 130, 45);
        let rendered_dense = draw(&analyzed_app_with(dense), 130, 45);
        assert_ne!(rendered_sparse, rendered_dense);
    }

    #[test]
    fn test_minimal_width_renders_score_only() {
        let app = analyzed_app();
        let rendered = draw(&app, 30, 10);
        assert!(rendered.contains("DQS"));
        assert!(rendered.contains("85"));
        assert!(!rendered.contains("Breakdown"));
    }
}
