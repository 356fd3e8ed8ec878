//! Animation helpers for smooth TUI transitions.
//!
//! Everything here is decorative; chart geometry itself is deterministic
//! and unaffected by animation state.

/// Animation controller for frame-based animations
pub struct AnimationController {
    frame: usize,
    fps: usize,
}

impl AnimationController {
    pub fn new(fps: usize) -> Self {
        Self { frame: 0, fps }
    }

    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % (self.fps * 10); // Loop every 10 seconds
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Braille spinner character for the loading phase
    pub fn spinner_char(&self) -> &'static str {
        match (self.frame / 4) % 8 {
            0 => "⠋",
            1 => "⠙",
            2 => "⠹",
            3 => "⠸",
            4 => "⠼",
            5 => "⠴",
            6 => "⠦",
            _ => "⠧",
        }
    }

    /// Pulse alpha value (0.0 to 1.0) for idle hints
    pub fn pulse_alpha(&self) -> f32 {
        use std::f32::consts::PI;
        let phase = self.frame as f32 / self.fps as f32;
        (phase * PI * 2.0).sin() * 0.3 + 0.7
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(30)
    }
}

/// Eased entrance progress for the dashboard reveal.
///
/// Mirrors the chart's 0.8 second ease-out entrance: returns 1.0 once
/// `elapsed_secs` passes the duration.
pub fn reveal_progress(elapsed_secs: f64) -> f64 {
    const DURATION: f64 = 0.8;
    let t = (elapsed_secs / DURATION).clamp(0.0, 1.0);
    ease_out(t)
}

/// Cubic ease-out curve
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Staggered reveal for card `index`: each card starts 0.1 s after the
/// previous one and fades in over 0.4 s.
pub fn staggered_reveal(elapsed_secs: f64, index: usize) -> f64 {
    const STAGGER: f64 = 0.1;
    const DURATION: f64 = 0.4;
    let local = elapsed_secs - STAGGER * index as f64;
    ease_out((local / DURATION).clamp(0.0, 1.0))
}

/// Render a solid progress bar for the loading indicator
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "▓".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_controller_cycles() {
        let mut ctrl = AnimationController::new(30);
        for _ in 0..30 {
            ctrl.tick();
        }
        assert!(ctrl.frame() > 0);
    }

    #[test]
    fn test_spinner_animation() {
        let ctrl = AnimationController::new(30);
        assert!(["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"].contains(&ctrl.spinner_char()));
    }

    #[test]
    fn test_pulse_alpha_range() {
        let ctrl = AnimationController::new(30);
        let alpha = ctrl.pulse_alpha();
        assert!((0.0..=1.0).contains(&alpha));
    }

    #[test]
    fn test_reveal_progress_saturates() {
        assert_eq!(reveal_progress(0.0), 0.0);
        assert_eq!(reveal_progress(2.0), 1.0);
        let mid = reveal_progress(0.4);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut last = 0.0;
        for i in 0..20 {
            let p = reveal_progress(i as f64 * 0.05);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_staggered_reveal_orders_cards() {
        let t = 0.25;
        assert!(staggered_reveal(t, 0) >= staggered_reveal(t, 1));
        assert!(staggered_reveal(t, 1) >= staggered_reveal(t, 2));
        assert_eq!(staggered_reveal(10.0, 6), 1.0);
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(render_progress_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(render_progress_bar(1.0, 10), "▓▓▓▓▓▓▓▓▓▓");
    }
}
