//! Radar chart widget.
//!
//! Renders `RadarGeometry` onto a braille canvas. Geometry is computed in
//! screen coordinates (y down); the canvas plane grows upward, so y is
//! negated at draw time. The data polygon radius is scaled by the entrance
//! reveal fraction; grid rings and spokes are not animated.

use ratatui::{
    symbols::Marker,
    text::Line as TextLine,
    widgets::canvas::{Canvas, Context, Line},
    Frame,
};

use crate::chart::{RadarConfig, RadarGeometry};
use crate::config::ChartConfig;
use crate::core::{Dimension, Point};
use crate::tui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    dimensions: &[Dimension],
    chart: &ChartConfig,
    theme: &Theme,
    reveal: f64,
) {
    let config = chart.radar_config();
    let Ok(geometry) = RadarGeometry::compute(dimensions, &config) else {
        // Invalid input surfaces as an empty chart rather than a crash.
        return;
    };

    let bound = canvas_bound(&config);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-bound, bound])
        .y_bounds([-bound, bound])
        .paint(|ctx| paint(ctx, &geometry, theme, reveal));

    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context, geometry: &RadarGeometry, theme: &Theme, reveal: f64) {
    let center = geometry.center();

    // Grid rings, innermost first
    for k in 0..geometry.rings.len() {
        for (from, to) in geometry.ring_path(k) {
            draw_edge(ctx, from, to, theme.muted);
        }
    }

    // Axis spokes out to the rim
    for &(from, to) in &geometry.axes {
        draw_edge(ctx, from, to, theme.muted);
    }

    // Data polygon, scaled toward the center during the entrance
    let scaled: Vec<Point> = geometry
        .points
        .iter()
        .map(|p| scale_toward(center, *p, reveal))
        .collect();
    if scaled.len() >= 2 {
        for i in 0..scaled.len() {
            let next = (i + 1) % scaled.len();
            draw_edge(ctx, scaled[i], scaled[next], theme.primary);
        }
    }

    // Labels outside the rim
    for label in &geometry.labels {
        let text = format!("{} {}%", label.short_name, label.score);
        ctx.print(
            label.position.x,
            -label.position.y,
            TextLine::styled(text, theme.score_style(label.score)),
        );
    }
}

fn draw_edge(ctx: &mut Context, from: Point, to: Point, color: ratatui::style::Color) {
    ctx.draw(&Line {
        x1: from.x,
        y1: -from.y,
        x2: to.x,
        y2: -to.y,
        color,
    });
}

/// Canvas extent: the label anchors plus some slack for the label text,
/// never tighter than the rim itself.
fn canvas_bound(config: &RadarConfig) -> f64 {
    config.radius * ((config.label_value / 100.0).max(1.0) + 0.25)
}

fn scale_toward(center: Point, point: Point, factor: f64) -> Point {
    Point::new(
        center.x + (point.x - center.x) * factor,
        center.y + (point.y - center.y) * factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_toward_collapses_at_zero() {
        let center = Point::new(0.0, 0.0);
        let p = Point::new(80.0, -60.0);
        assert_eq!(scale_toward(center, p, 0.0), center);
        assert_eq!(scale_toward(center, p, 1.0), p);
    }

    #[test]
    fn test_scale_toward_is_linear() {
        let center = Point::new(10.0, 10.0);
        let p = Point::new(110.0, 10.0);
        let half = scale_toward(center, p, 0.5);
        assert!((half.x - 60.0).abs() < 1e-12);
        assert!((half.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_canvas_bound_never_cuts_the_rim() {
        let near = RadarConfig {
            label_value: 50.0,
            ..RadarConfig::default()
        };
        assert!(canvas_bound(&near) >= near.radius);

        let far = RadarConfig::default();
        assert!(canvas_bound(&far) > 1.3 * far.radius);
    }
}
