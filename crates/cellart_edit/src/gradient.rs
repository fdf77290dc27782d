//! Gradient engine
//!
//! A gradient assigns every cell of a fill area a parameter `t` in `0..=1`,
//! either by projecting the cell onto the start→end axis (linear) or by its
//! aspect corrected elliptical distance from the start point (radial). Each
//! enabled channel then samples its stop list at `t`.

use std::collections::{HashMap, HashSet};

use cellart_engine::{Cell, CellAttributes, Color, Grid, MatchCriteria, Position};
use serde::{Deserialize, Serialize};

const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// Values a gradient channel can blend between.
pub trait Interpolate: Copy {
    /// Value at `t` between `self` (t = 0) and `other` (t = 1).
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

/// Characters cannot be blended; the nearer stop wins, ties go to the left stop.
impl Interpolate for char {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        if t <= 0.5 {
            *self
        } else {
            *other
        }
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// Backgrounds blend while both stops are colors and step like characters
/// as soon as one of them is transparent.
impl Interpolate for Option<Color> {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.lerp(b, t)),
            _ => {
                if t <= 0.5 {
                    *self
                } else {
                    *other
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop<T> {
    /// Position in `0..=1`
    pub position: f32,
    pub value: T,
}

impl<T> GradientStop<T> {
    pub fn new(position: f32, value: T) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            value,
        }
    }
}

/// One gradient property (character, foreground or background).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientChannel<T> {
    pub enabled: bool,
    pub stops: Vec<GradientStop<T>>,
}

impl<T> Default for GradientChannel<T> {
    fn default() -> Self {
        Self {
            enabled: false,
            stops: Vec::new(),
        }
    }
}

impl<T: Interpolate> GradientChannel<T> {
    pub fn new(stops: Vec<GradientStop<T>>) -> Self {
        let mut channel = Self { enabled: true, stops };
        channel.sort_stops();
        channel
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, position: f32, value: T) {
        self.stops.push(GradientStop::new(position, value));
        self.sort_stops();
    }

    pub fn sort_stops(&mut self) {
        self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Whether sampling this channel changes anything.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.stops.is_empty()
    }

    /// The channel value at `t`; `None` when disabled or without stops.
    /// Stops must be sorted by position.
    pub fn sample(&self, t: f32) -> Option<T> {
        if !self.enabled {
            return None;
        }
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if self.stops.len() == 1 || t <= first.position {
            return Some(first.value);
        }
        if t >= last.position {
            return Some(last.value);
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.position && t <= b.position {
                let span = b.position - a.position;
                if span <= EPSILON {
                    return Some(b.value);
                }
                return Some(a.value.interpolate(&b.value, (t - a.position) / span));
            }
        }
        Some(last.value)
    }
}

/// Complete gradient settings of the gradient tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientDefinition {
    pub kind: GradientKind,
    pub character: GradientChannel<char>,
    pub foreground: GradientChannel<Color>,
    pub background: GradientChannel<Option<Color>>,

    /// Criteria selecting the fill area around the start point
    pub match_criteria: MatchCriteria,
    pub contiguous: bool,
}

impl Default for GradientDefinition {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            character: GradientChannel::disabled(),
            foreground: GradientChannel::disabled(),
            background: GradientChannel::disabled(),
            match_criteria: CellAttributes::all(),
            contiguous: true,
        }
    }
}

impl GradientDefinition {
    /// True when no enabled channel has a stop; applying such a gradient changes nothing.
    pub fn is_noop(&self) -> bool {
        !self.character.is_active() && !self.foreground.is_active() && !self.background.is_active()
    }

    pub fn normalize(&mut self) {
        self.character.sort_stops();
        self.foreground.sort_stops();
        self.background.sort_stops();
    }

    /// `base` with every enabled property replaced by its value at `t`.
    pub fn sample_cell(&self, base: Cell, t: f32) -> Cell {
        let mut cell = base;
        if let Some(ch) = self.character.sample(t) {
            cell.ch = ch;
        }
        if let Some(fg) = self.foreground.sample(t) {
            cell.fg = fg;
        }
        if let Some(bg) = self.background.sample(t) {
            cell.bg = bg;
        }
        cell
    }
}

/// Placement of a gradient on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientGeometry {
    pub start: Position,
    pub end: Position,
    /// Radial only: sets the radius perpendicular to start→end. `None` is a circle.
    pub control: Option<Position>,
    /// Cell width divided by cell height
    pub aspect_ratio: f32,
}

impl GradientGeometry {
    pub fn new(start: Position, end: Position, aspect_ratio: f32) -> Self {
        Self {
            start,
            end,
            control: None,
            aspect_ratio,
        }
    }

    pub fn with_control(mut self, control: Option<Position>) -> Self {
        self.control = control;
        self
    }

    /// Offset of `pos` from the start point in square units.
    fn physical_offset(&self, pos: Position) -> (f32, f32) {
        let aspect = if self.aspect_ratio > EPSILON { self.aspect_ratio } else { 1.0 };
        ((pos.x - self.start.x) as f32 * aspect, (pos.y - self.start.y) as f32)
    }

    /// Gradient parameter of the cell at `pos`, clamped to `0..=1`.
    /// A zero length axis yields 0 everywhere.
    pub fn parameter_at(&self, kind: GradientKind, pos: Position) -> f32 {
        let (ax, ay) = self.physical_offset(self.end);
        let axis_len = (ax * ax + ay * ay).sqrt();
        if axis_len <= EPSILON {
            return 0.0;
        }
        let (px, py) = self.physical_offset(pos);

        let t = match kind {
            GradientKind::Linear => (px * ax + py * ay) / (axis_len * axis_len),
            GradientKind::Radial => {
                let (ux, uy) = (ax / axis_len, ay / axis_len);
                let (vx, vy) = (-uy, ux);
                let minor = match self.control {
                    Some(control) => {
                        let (cx, cy) = self.physical_offset(control);
                        let r = (cx * vx + cy * vy).abs();
                        if r > EPSILON {
                            r
                        } else {
                            axis_len
                        }
                    }
                    None => axis_len,
                };
                let along = (px * ux + py * uy) / axis_len;
                let across = (px * vx + py * vy) / minor;
                (along * along + across * across).sqrt()
            }
        };
        t.clamp(0.0, 1.0)
    }
}

/// Cells of the gradient fill area: cells matching the start cell under the
/// definition's own criteria.
pub fn gradient_fill_area(grid: &Grid, definition: &GradientDefinition, start: Position) -> HashSet<Position> {
    cellart_engine::find_matching_cells(grid, start, definition.contiguous, definition.match_criteria)
}

/// The cells the gradient would produce, without touching the grid.
pub fn render_gradient(grid: &Grid, definition: &GradientDefinition, geometry: &GradientGeometry, area: &HashSet<Position>) -> HashMap<Position, Cell> {
    if definition.is_noop() {
        return HashMap::new();
    }
    let mut definition = definition.clone();
    definition.normalize();

    area.iter()
        .filter(|pos| grid.is_valid(**pos))
        .map(|pos| {
            let t = geometry.parameter_at(definition.kind, *pos);
            (*pos, definition.sample_cell(grid.get_cell(*pos), t))
        })
        .collect()
}

/// Writes the gradient into `grid`. Cells that end up blank are removed from storage.
/// Returns the number of cells written.
pub fn apply_gradient(grid: &mut Grid, definition: &GradientDefinition, geometry: &GradientGeometry, area: &HashSet<Position>) -> usize {
    let cells = render_gradient(grid, definition, geometry, area);
    for (pos, cell) in &cells {
        grid.set_cell(*pos, *cell);
    }
    cells.len()
}
