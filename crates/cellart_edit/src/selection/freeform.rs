//! Lasso geometry: path smoothing and polygon rasterization

use std::collections::HashSet;

use cellart_engine::{Position, Rectangle};
use serde::{Deserialize, Serialize};

/// A lasso path vertex in cell units; cell `(x, y)` has its center at `(x + 0.5, y + 0.5)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of the cell at `pos`
    pub fn center_of(pos: Position) -> Self {
        Self::new(pos.x as f32 + 0.5, pos.y as f32 + 0.5)
    }
}

impl From<Position> for PathPoint {
    fn from(pos: Position) -> Self {
        PathPoint::center_of(pos)
    }
}

/// Moving average over `radius` neighbours on each side. The end points stay fixed.
pub fn smooth_path(points: &[PathPoint], radius: usize) -> Vec<PathPoint> {
    if radius == 0 || points.len() < 3 {
        return points.to_vec();
    }
    let last = points.len() - 1;
    let mut result = Vec::with_capacity(points.len());
    result.push(points[0]);
    for i in 1..last {
        let from = i.saturating_sub(radius);
        let to = (i + radius).min(last);
        let window = &points[from..=to];
        let n = window.len() as f32;
        let (sx, sy) = window.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        result.push(PathPoint::new(sx / n, sy / n));
    }
    result.push(points[last]);
    result
}

/// Returns the path with its first point appended if it is not closed yet.
pub fn close_path(points: &[PathPoint]) -> Vec<PathPoint> {
    let mut closed = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if first != last {
            closed.push(*first);
        }
    }
    closed
}

/// Even-odd point in polygon test.
pub fn point_in_polygon(point: PathPoint, polygon: &[PathPoint]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Cells whose center lies inside `polygon`, limited to `bounds`.
pub fn polygon_cells(polygon: &[PathPoint], bounds: Rectangle) -> HashSet<Position> {
    let mut cells = HashSet::new();
    if polygon.len() < 3 || bounds.is_empty() {
        return cells;
    }

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
    for p in polygon {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let scan = Rectangle::from_corners(
        Position::new(min_x.floor() as i32, min_y.floor() as i32),
        Position::new(max_x.ceil() as i32, max_y.ceil() as i32),
    )
    .intersect(&bounds);

    for pos in scan.positions() {
        if point_in_polygon(PathPoint::center_of(pos), polygon) {
            cells.insert(pos);
        }
    }
    cells
}
