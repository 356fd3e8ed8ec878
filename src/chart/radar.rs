//! Radar chart geometry engine.
//!
//! Maps an ordered list of scored dimensions onto concentric regular
//! polygons. Axis 0 points straight up (12 o'clock) and axes proceed
//! clockwise in screen coordinates, where y grows downward. All output is
//! derived fresh from the input on every call; identical input always
//! produces identical coordinates.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::{Dimension, Error, Point};

/// Score value that corresponds to the outer rim.
const RIM_VALUE: f64 = 100.0;

/// Chart-local configuration for a radar computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarConfig {
    /// Center of the chart in chart-local space
    pub center: Point,
    /// Radius corresponding to a score of 100
    pub radius: f64,
    /// Number of concentric grid rings
    pub levels: usize,
    /// Score value at which label anchors are placed, just outside the rim
    pub label_value: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            radius: 100.0,
            levels: 5,
            label_value: 130.0,
        }
    }
}

/// Anchor for a dimension label, placed beyond the outer ring.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelAnchor {
    pub position: Point,
    pub short_name: String,
    pub score: u32,
}

/// Complete geometry for one radar chart render.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarGeometry {
    /// Angle in radians for each axis, in input order
    pub axis_angles: Vec<f64>,
    /// Spoke from the center to the rim, one per axis
    pub axes: Vec<(Point, Point)>,
    /// Data point for each dimension, scaled by score / 100
    pub points: Vec<Point>,
    /// Grid ring vertex lists, innermost first, one vertex per axis
    pub rings: Vec<Vec<Point>>,
    /// Label anchor for each dimension
    pub labels: Vec<LabelAnchor>,
    center: Point,
}

impl RadarGeometry {
    /// Compute radar geometry for an ordered dimension list.
    ///
    /// Scores are not clamped: a score above 100 lands proportionally
    /// beyond the rim, matching the permissive upstream contract.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when `dimensions` is empty or
    /// `config.levels` is zero.
    pub fn compute(dimensions: &[Dimension], config: &RadarConfig) -> Result<Self, Error> {
        if dimensions.is_empty() {
            return Err(Error::invalid_input(
                "radar chart requires at least one dimension",
            ));
        }
        if config.levels == 0 {
            return Err(Error::invalid_input(
                "radar chart requires at least one grid level",
            ));
        }

        let n = dimensions.len();
        let axis_angles: Vec<f64> = (0..n).map(|i| axis_angle(i, n)).collect();

        let points: Vec<Point> = dimensions
            .iter()
            .zip(&axis_angles)
            .map(|(d, &angle)| point_at(config, angle, d.score as f64))
            .collect();

        let axes: Vec<(Point, Point)> = axis_angles
            .iter()
            .map(|&angle| (config.center, point_at(config, angle, RIM_VALUE)))
            .collect();

        let rings: Vec<Vec<Point>> = (1..=config.levels)
            .map(|level| {
                let value = RIM_VALUE * level as f64 / config.levels as f64;
                axis_angles
                    .iter()
                    .map(|&angle| point_at(config, angle, value))
                    .collect()
            })
            .collect();

        let labels: Vec<LabelAnchor> = dimensions
            .iter()
            .zip(&axis_angles)
            .map(|(d, &angle)| LabelAnchor {
                position: point_at(config, angle, config.label_value),
                short_name: d.short_name.clone(),
                score: d.score,
            })
            .collect();

        Ok(Self {
            axis_angles,
            axes,
            points,
            rings,
            labels,
            center: config.center,
        })
    }

    /// Number of axes in this chart.
    pub fn axis_count(&self) -> usize {
        self.points.len()
    }

    /// Chart center as supplied in the configuration.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Edges of the closed data polygon, in axis order with the implicit
    /// edge from the last vertex back to the first.
    ///
    /// A single-axis chart degenerates to one point and yields no edges.
    pub fn closed_path(&self) -> Vec<(Point, Point)> {
        closed_edges(&self.points)
    }

    /// Edges of grid ring `k` (0-indexed, innermost first), closed.
    pub fn ring_path(&self, k: usize) -> Vec<(Point, Point)> {
        self.rings.get(k).map(|ring| closed_edges(ring)).unwrap_or_default()
    }
}

/// Angle for axis `i` of `n`: evenly spaced, starting straight up.
fn axis_angle(i: usize, n: usize) -> f64 {
    TAU * i as f64 / n as f64 - FRAC_PI_2
}

/// Point along `angle` at radius `(value / 100) * radius` from the center.
fn point_at(config: &RadarConfig, angle: f64, value: f64) -> Point {
    let r = value / RIM_VALUE * config.radius;
    Point::new(
        config.center.x + r * angle.cos(),
        config.center.y + r * angle.sin(),
    )
}

fn closed_edges(vertices: &[Point]) -> Vec<(Point, Point)> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    let mut edges: Vec<(Point, Point)> = vertices.windows(2).map(|w| (w[0], w[1])).collect();
    edges.push((vertices[vertices.len() - 1], vertices[0]));
    edges
}
