use std::collections::{HashMap, HashSet};

use cellart_engine::{Cell, Grid, Position};

use crate::gradient::{gradient_fill_area, render_gradient, GradientDefinition, GradientGeometry};

use super::EditState;

/// Gradient tool state between the first click and apply/cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSession {
    pub start: Position,
    pub end: Position,
    pub control: Option<Position>,
    pub dragging: bool,
    area: HashSet<Position>,
}

impl GradientSession {
    fn new(grid: &Grid, definition: &GradientDefinition, start: Position) -> Self {
        Self {
            start,
            end: start,
            control: None,
            dragging: true,
            area: gradient_fill_area(grid, definition, start),
        }
    }

    /// Cells the gradient covers, fixed when the session starts.
    pub fn area(&self) -> &HashSet<Position> {
        &self.area
    }

    pub(crate) fn refresh_area(&mut self, grid: &Grid, definition: &GradientDefinition) {
        self.area = gradient_fill_area(grid, definition, self.start);
    }

    fn geometry(&self, aspect_ratio: f32) -> GradientGeometry {
        GradientGeometry::new(self.start, self.end, aspect_ratio).with_control(self.control)
    }
}

impl EditState {
    /// Sets the start point and resolves the fill area around it.
    pub fn begin_gradient(&mut self, start: impl Into<Position>) {
        let start = start.into();
        log::debug!("gradient: start at {start}");
        self.gradient_session = Some(GradientSession::new(&self.grid, &self.gradient, start));
    }

    pub fn update_gradient_end(&mut self, end: impl Into<Position>) {
        if let Some(session) = &mut self.gradient_session {
            session.end = end.into();
        }
    }

    /// Shape control point of radial gradients.
    pub fn set_gradient_control(&mut self, control: Option<Position>) {
        if let Some(session) = &mut self.gradient_session {
            session.control = control;
        }
    }

    pub fn end_gradient_drag(&mut self) {
        if let Some(session) = &mut self.gradient_session {
            session.dragging = false;
        }
    }

    pub fn gradient_session(&self) -> Option<&GradientSession> {
        self.gradient_session.as_ref()
    }

    /// Cells the gradient would produce, read only.
    pub fn gradient_preview(&self) -> HashMap<Position, Cell> {
        let Some(session) = &self.gradient_session else {
            return HashMap::new();
        };
        render_gradient(&self.grid, &self.gradient, &session.geometry(self.settings.cell_aspect_ratio), &session.area)
    }

    /// Writes the gradient as one history entry and ends the session.
    /// A gradient that changes nothing records nothing.
    pub fn apply_gradient(&mut self) -> bool {
        let Some(session) = self.gradient_session.take() else {
            return false;
        };
        self.end_typing();
        let before = self.grid.snapshot();
        let written = crate::gradient::apply_gradient(&mut self.grid, &self.gradient, &session.geometry(self.settings.cell_aspect_ratio), &session.area);
        log::debug!("gradient: wrote {written} cells");
        self.push_grid_edit("Gradient", before)
    }

    pub fn cancel_gradient(&mut self) -> bool {
        self.gradient_session.take().is_some()
    }
}
