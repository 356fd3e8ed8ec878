//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

use crate::scoring::ScoreBand;

/// Color scheme for the dashboard
pub struct Theme {
    /// Primary accent color (active elements, the data polygon)
    pub primary: Color,
    /// Success color (high scores, positive trends)
    pub success: Color,
    /// Warning color (middling scores)
    pub warning: Color,
    /// Destructive color (low scores, negative trends)
    pub destructive: Color,
    /// Muted color (grid rings, pending/inactive elements)
    pub muted: Color,
    /// Text color
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            destructive: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Color for a score band (gauge, cards, report accents)
    pub fn band_color(&self, band: ScoreBand) -> Color {
        match band {
            ScoreBand::High => self.success,
            ScoreBand::Medium => self.warning,
            ScoreBand::Low => self.destructive,
        }
    }

    /// Color for a score value
    pub fn score_color(&self, score: u32) -> Color {
        self.band_color(ScoreBand::from_score(score))
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn score_style(&self, score: u32) -> Style {
        Style::default()
            .fg(self.score_color(score))
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_follow_thresholds() {
        let theme = Theme::default_theme();
        assert_eq!(theme.score_color(92), theme.success);
        assert_eq!(theme.score_color(72), theme.warning);
        assert_eq!(theme.score_color(40), theme.destructive);
    }

    #[test]
    fn test_band_colors_are_distinct() {
        let theme = Theme::default_theme();
        assert_ne!(theme.success, theme.warning);
        assert_ne!(theme.warning, theme.destructive);
    }
}
