//! Upload view panels: file picker and selected-file summary.
//!
//! Selecting a file records its name and size only. File contents are
//! never opened or read anywhere in the application.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the file picker list.
pub fn render_picker(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(Span::styled(
            " Select a data file (CSV, Excel) ",
            theme.title_style(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.candidates.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No CSV or Excel files found here. Analysis runs on mock data either way.",
                theme.muted_style(),
            )),
            inner,
        );
        return;
    }

    let visible = inner.height as usize;
    let offset = app.picker_index.saturating_sub(visible.saturating_sub(1));
    let mut lines = Vec::new();
    for (i, path) in app.candidates.iter().enumerate().skip(offset).take(visible) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if i == app.picker_index {
            lines.push(Line::from(vec![
                Span::styled("▸ ", theme.accent_style()),
                Span::styled(name, theme.accent_style()),
            ]));
        } else {
            lines.push(Line::from(vec![Span::raw("  "), Span::raw(name)]));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the selected-file summary panel.
pub fn render_selected(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match &app.selected_file {
        Some(file) => Line::from(vec![
            Span::styled("✓ ", theme.accent_style()),
            Span::styled(file.name.clone(), theme.title_style()),
            Span::raw("  "),
            Span::styled(file.size_display(), theme.muted_style()),
            Span::styled("   (x to clear)", theme.hint_style()),
        ]),
        None => Line::from(Span::styled(
            "No file selected — Enter to pick one",
            theme.muted_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), inner);
}
