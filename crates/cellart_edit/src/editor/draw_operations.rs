use std::collections::HashMap;

use cellart_engine::{find_matching_cells, Cell, CellAttributes, GridSnapshot, MatchCriteria, Position};
use serde::{Deserialize, Serialize};

use crate::brushes::{
    constrain_square, get_ellipse_points, get_filled_ellipse_points, get_filled_rectangle_points, get_line_points, get_rectangle_points, BrushMode,
    DrawContext,
};
use crate::tools::Tool;

use super::EditState;

/// Region settings shared by the paint bucket and the magic wand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillSettings {
    pub contiguous: bool,
    pub criteria: MatchCriteria,
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            contiguous: true,
            criteria: CellAttributes::all(),
        }
    }
}

/// Pencil or eraser stroke in progress.
#[derive(Clone, Debug)]
pub(crate) struct Stroke {
    ctx: DrawContext,
    before: GridSnapshot,
    last: Position,
}

/// Shape tool drag in progress.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ShapeDraft {
    tool: Tool,
    anchor: Position,
    current: Position,
}

impl ShapeDraft {
    fn points(&self) -> Vec<Position> {
        match self.tool {
            Tool::Line => get_line_points(self.anchor, self.current),
            Tool::RectangleOutline => get_rectangle_points(self.anchor, self.current),
            Tool::RectangleFilled => get_filled_rectangle_points(self.anchor, self.current),
            Tool::EllipseOutline => get_ellipse_points(self.anchor, self.current),
            Tool::EllipseFilled => get_filled_ellipse_points(self.anchor, self.current),
            _ => Vec::new(),
        }
    }
}

impl EditState {
    // === Pencil / eraser ===

    /// Starts a stroke and plots the first cell. The snapshot for history is
    /// taken before anything is drawn.
    pub fn begin_stroke(&mut self, pos: impl Into<Position>, mode: BrushMode) {
        self.finish_stroke();
        self.end_typing();
        let pos = pos.into();
        let ctx = self.brush.with_mode(mode);
        let before = self.grid.snapshot();
        ctx.plot_point(&mut self.grid, pos);
        self.stroke = Some(Stroke { ctx, before, last: pos });
    }

    /// Continues the stroke with a line from the last point, so fast pointer
    /// moves leave no gaps.
    pub fn continue_stroke(&mut self, pos: impl Into<Position>) {
        let pos = pos.into();
        let Some(stroke) = &mut self.stroke else {
            return;
        };
        if pos == stroke.last {
            return;
        }
        let points = get_line_points(stroke.last, pos);
        stroke.ctx.plot_points(&mut self.grid, &points);
        stroke.last = pos;
    }

    /// Ends the stroke; the whole stroke becomes one history entry.
    pub fn finish_stroke(&mut self) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };
        let description = match stroke.ctx.mode {
            BrushMode::Draw => "Pencil",
            BrushMode::Erase => "Eraser",
        };
        self.push_grid_edit(description, stroke.before)
    }

    /// Reverts an unfinished stroke.
    pub(crate) fn cancel_stroke(&mut self) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };
        self.grid.set_canvas_data(stroke.before);
        true
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    // === Shapes ===

    /// Starts a shape drag with the given shape tool.
    pub fn begin_shape(&mut self, tool: Tool, anchor: impl Into<Position>) {
        if !tool.is_shape() {
            return;
        }
        self.end_typing();
        let anchor = anchor.into();
        self.shape = Some(ShapeDraft {
            tool,
            anchor,
            current: anchor,
        });
    }

    /// Moves the free end. `square` locks rectangles and ellipses to a
    /// square/circle and lines to the diagonal.
    pub fn update_shape(&mut self, pos: impl Into<Position>, square: bool) {
        let pos = pos.into();
        if let Some(shape) = &mut self.shape {
            shape.current = if square { constrain_square(shape.anchor, pos) } else { pos };
        }
    }

    /// Cells the shape would write, read only.
    pub fn shape_preview(&self) -> HashMap<Position, Cell> {
        let Some(shape) = &self.shape else {
            return HashMap::new();
        };
        shape
            .points()
            .into_iter()
            .filter(|p| self.grid.is_valid(*p))
            .map(|p| (p, self.brush.apply_to(self.grid.get_cell(p))))
            .collect()
    }

    /// Draws the shape into the grid as one history entry.
    pub fn finish_shape(&mut self) -> bool {
        let Some(shape) = self.shape.take() else {
            return false;
        };
        let before = self.grid.snapshot();
        self.brush.plot_points(&mut self.grid, &shape.points());
        self.push_grid_edit(shape.tool.name(), before)
    }

    /// Draws a shape in one call.
    pub fn draw_shape(&mut self, tool: Tool, from: impl Into<Position>, to: impl Into<Position>) -> bool {
        self.begin_shape(tool, from);
        self.update_shape(to, false);
        self.finish_shape()
    }

    // === Paint bucket ===

    fn fill_targets(&self, pos: Position) -> Vec<Position> {
        let mut targets: Vec<Position> = find_matching_cells(&self.grid, pos, self.fill.contiguous, self.fill.criteria).into_iter().collect();
        targets.sort();
        targets
    }

    /// Cells the paint bucket would write at `pos`, read only.
    pub fn fill_preview(&self, pos: impl Into<Position>) -> HashMap<Position, Cell> {
        self.fill_targets(pos.into())
            .into_iter()
            .map(|p| (p, self.brush.apply_to(self.grid.get_cell(p))))
            .collect()
    }

    /// Paints every cell matching the cell at `pos`, limited to the brush's
    /// affected attributes.
    pub fn fill_at(&mut self, pos: impl Into<Position>) -> bool {
        self.end_typing();
        let targets = self.fill_targets(pos.into());
        if targets.is_empty() {
            return false;
        }
        let before = self.grid.snapshot();
        self.brush.plot_points(&mut self.grid, &targets);
        self.push_grid_edit("Fill", before)
    }

    // === Eyedropper ===

    /// Copies the cell at `pos` into the brush.
    pub fn pick_cell(&mut self, pos: impl Into<Position>) -> Cell {
        let cell = self.grid.get_cell(pos);
        self.brush.brush = cell;
        cell
    }
}
