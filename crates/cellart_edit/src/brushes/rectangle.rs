//! Rectangle drawing algorithms

use cellart_engine::Position;

use super::{DrawContext, DrawTarget};

/// Border cells of the rectangle spanned by two corners (inclusive)
pub fn get_rectangle_points(p0: Position, p1: Position) -> Vec<Position> {
    let min = p0.min(p1);
    let max = p0.max(p1);

    let mut points = Vec::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            // Only the border
            if y == min.y || y == max.y || x == min.x || x == max.x {
                points.push(Position::new(x, y));
            }
        }
    }
    points
}

/// All cells of the rectangle spanned by two corners (inclusive)
pub fn get_filled_rectangle_points(p0: Position, p1: Position) -> Vec<Position> {
    let min = p0.min(p1);
    let max = p0.max(p1);

    let mut points = Vec::with_capacity(((max.x - min.x + 1) * (max.y - min.y + 1)) as usize);
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            points.push(Position::new(x, y));
        }
    }
    points
}

/// Draw a rectangle outline
pub fn draw_rectangle<T: DrawTarget>(target: &mut T, ctx: &DrawContext, p0: Position, p1: Position) {
    ctx.plot_points(target, &get_rectangle_points(p0, p1));
}

/// Draw a filled rectangle
pub fn fill_rectangle<T: DrawTarget>(target: &mut T, ctx: &DrawContext, p0: Position, p1: Position) {
    ctx.plot_points(target, &get_filled_rectangle_points(p0, p1));
}
