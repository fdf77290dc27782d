//! Ellipse drawing algorithms
//!
//! Ellipses are given by the two corners of their bounding box. Radii below half
//! a cell are widened to half a cell so degenerate boxes still produce a line.

use std::collections::HashSet;
use std::f32::consts::PI;

use cellart_engine::Position;

use super::{DrawContext, DrawTarget};

/// Minimum number of angular samples for an outline
const MIN_OUTLINE_STEPS: usize = 20;

struct EllipseGeometry {
    min: Position,
    max: Position,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl EllipseGeometry {
    fn from_corners(p0: Position, p1: Position) -> Self {
        let min = p0.min(p1);
        let max = p0.max(p1);
        Self {
            min,
            max,
            cx: (min.x + max.x) as f32 / 2.0,
            cy: (min.y + max.y) as f32 / 2.0,
            rx: ((max.x - min.x) as f32 / 2.0).max(0.5),
            ry: ((max.y - min.y) as f32 / 2.0).max(0.5),
        }
    }
}

/// Outline cells, sampled at `max(ceil(2π·max(rx, ry)), 20)` angles, rounded and de-duplicated
pub fn get_ellipse_points(p0: Position, p1: Position) -> Vec<Position> {
    let geo = EllipseGeometry::from_corners(p0, p1);
    let steps = ((2.0 * PI * geo.rx.max(geo.ry)).ceil() as usize).max(MIN_OUTLINE_STEPS);

    let mut seen = HashSet::with_capacity(steps);
    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let angle = 2.0 * PI * i as f32 / steps as f32;
        let x = (geo.cx + geo.rx * angle.cos()).round() as i32;
        let y = (geo.cy + geo.ry * angle.sin()).round() as i32;
        let pos = Position::new(x.clamp(geo.min.x, geo.max.x), y.clamp(geo.min.y, geo.max.y));
        if seen.insert(pos) {
            points.push(pos);
        }
    }
    points
}

/// All cells with `(dx/(rx+½))² + (dy/(ry+½))² <= 1`, plus the outline cells.
///
/// Radii are measured to the cell edge rather than its center so even sized
/// boxes keep their rim, and the fill always covers its own outline.
pub fn get_filled_ellipse_points(p0: Position, p1: Position) -> Vec<Position> {
    let geo = EllipseGeometry::from_corners(p0, p1);
    let outline: HashSet<Position> = get_ellipse_points(p0, p1).into_iter().collect();
    let rx = geo.rx + 0.5;
    let ry = geo.ry + 0.5;

    let mut points = Vec::new();
    for y in geo.min.y..=geo.max.y {
        let dy = (y as f32 - geo.cy) / ry;
        for x in geo.min.x..=geo.max.x {
            let dx = (x as f32 - geo.cx) / rx;
            let pos = Position::new(x, y);
            if dx * dx + dy * dy <= 1.0 + f32::EPSILON || outline.contains(&pos) {
                points.push(pos);
            }
        }
    }
    points
}

/// Draw an ellipse outline inside the bounding box p0..p1
pub fn draw_ellipse<T: DrawTarget>(target: &mut T, ctx: &DrawContext, p0: Position, p1: Position) {
    ctx.plot_points(target, &get_ellipse_points(p0, p1));
}

/// Draw a filled ellipse inside the bounding box p0..p1
pub fn fill_ellipse<T: DrawTarget>(target: &mut T, ctx: &DrawContext, p0: Position, p1: Position) {
    ctx.plot_points(target, &get_filled_ellipse_points(p0, p1));
}
