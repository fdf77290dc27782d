//! Line drawing algorithms
//!
//! Implements Bresenham's line algorithm for drawing lines between two points.

use cellart_engine::Position;

use super::{DrawContext, DrawTarget};

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm.
///
/// The line is always traced from the row-major smaller endpoint, so
/// `get_line_points(a, b)` is exactly `get_line_points(b, a)` reversed.
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    if p1 < p0 {
        let mut points = trace_line(p1, p0);
        points.reverse();
        return points;
    }
    trace_line(p0, p1)
}

fn trace_line(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Draw a line from p0 to p1
pub fn draw_line<T: DrawTarget>(target: &mut T, ctx: &DrawContext, p0: Position, p1: Position) {
    ctx.plot_points(target, &get_line_points(p0, p1));
}
