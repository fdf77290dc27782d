//! Selections and the move transaction they own
//!
//! Exactly one selection can be active. [`SelectionModel`] holds it as an
//! `Option<ActiveSelection>`, and the pending [`MoveTransaction`] lives inside
//! the active selection, so a transaction can never outlive or be shared
//! between selections.

pub mod freeform;
mod move_transaction;

use std::collections::HashSet;

pub use freeform::PathPoint;
pub use move_transaction::MoveTransaction;

use cellart_engine::{find_matching_cells, Grid, MatchCriteria, Position, Rectangle};
use serde::{Deserialize, Serialize};

use crate::brushes::constrain_square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionKind {
    Rectangular,
    Freeform,
    FloodMatched,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// Both corners are inclusive and may be given in any order
    Rectangular { start: Position, end: Position },
    /// Closed, smoothed lasso path and the cells inside it
    Freeform { path: Vec<PathPoint>, cells: HashSet<Position> },
    /// Magic wand result
    FloodMatched { anchor: Position, cells: HashSet<Position> },
}

impl Selection {
    pub fn rectangle(start: impl Into<Position>, end: impl Into<Position>) -> Self {
        Selection::Rectangular {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::Rectangular { .. } => SelectionKind::Rectangular,
            Selection::Freeform { .. } => SelectionKind::Freeform,
            Selection::FloodMatched { .. } => SelectionKind::FloodMatched,
        }
    }

    pub fn contains(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        match self {
            Selection::Rectangular { start, end } => Rectangle::from_corners(*start, *end).is_inside(pos),
            Selection::Freeform { cells, .. } | Selection::FloodMatched { cells, .. } => cells.contains(&pos),
        }
    }

    /// Bounding rectangle; `None` for a selection without cells.
    pub fn bounds(&self) -> Option<Rectangle> {
        match self {
            Selection::Rectangular { start, end } => Some(Rectangle::from_corners(*start, *end)),
            Selection::Freeform { cells, .. } | Selection::FloodMatched { cells, .. } => {
                let mut iter = cells.iter();
                let first = *iter.next()?;
                let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
                Some(Rectangle::from_corners(min, max))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Rectangular { .. } => false,
            Selection::Freeform { cells, .. } | Selection::FloodMatched { cells, .. } => cells.is_empty(),
        }
    }

    /// Selected positions inside the grid, in row major order.
    pub fn cells(&self, grid: &Grid) -> Vec<Position> {
        let mut result: Vec<Position> = match self {
            Selection::Rectangular { start, end } => Rectangle::from_corners(*start, *end).intersect(&grid.rectangle()).positions().collect(),
            Selection::Freeform { cells, .. } | Selection::FloodMatched { cells, .. } => cells.iter().copied().filter(|p| grid.is_valid(*p)).collect(),
        };
        result.sort();
        result
    }

    /// The same selection shifted by `offset`.
    pub fn translated(&self, offset: Position) -> Selection {
        match self {
            Selection::Rectangular { start, end } => Selection::Rectangular {
                start: *start + offset,
                end: *end + offset,
            },
            Selection::Freeform { path, cells } => Selection::Freeform {
                path: path.iter().map(|p| PathPoint::new(p.x + offset.x as f32, p.y + offset.y as f32)).collect(),
                cells: cells.iter().map(|p| *p + offset).collect(),
            },
            Selection::FloodMatched { anchor, cells } => Selection::FloodMatched {
                anchor: *anchor + offset,
                cells: cells.iter().map(|p| *p + offset).collect(),
            },
        }
    }
}

/// The active selection together with its pending move.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSelection {
    pub selection: Selection,
    pub transaction: Option<MoveTransaction>,
}

/// Selection gesture in progress that has not produced a selection yet.
#[derive(Clone, Debug, PartialEq)]
enum Draft {
    /// `dragged` turns true once the free corner left the anchor cell
    Rectangle { anchor: Position, dragged: bool },
    Freeform { points: Vec<PathPoint> },
}

/// Single owner of selection state.
#[derive(Clone, Debug, Default)]
pub struct SelectionModel {
    active: Option<ActiveSelection>,
    draft: Option<Draft>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ActiveSelection> {
        self.active.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.active.as_ref().map(|a| &a.selection)
    }

    pub fn kind(&self) -> Option<SelectionKind> {
        self.selection().map(Selection::kind)
    }

    pub fn is_something_selected(&self) -> bool {
        self.active.is_some()
    }

    pub fn transaction(&self) -> Option<&MoveTransaction> {
        self.active.as_ref().and_then(|a| a.transaction.as_ref())
    }

    pub fn has_transaction(&self) -> bool {
        self.transaction().is_some()
    }

    /// Offset of the pending move, zero without one.
    pub fn move_offset(&self) -> Position {
        self.transaction().map(MoveTransaction::total_offset).unwrap_or_default()
    }

    /// Membership at the position the content is currently shown at.
    pub fn contains(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.selection().is_some_and(|s| s.contains(pos - self.move_offset()))
    }

    /// Bounds at the displayed position.
    pub fn bounds(&self) -> Option<Rectangle> {
        let offset = self.move_offset();
        self.selection().and_then(Selection::bounds).map(|r| r + offset)
    }

    /// Replaces the active selection. Any pending transaction is dropped, so
    /// callers commit first.
    pub fn set_selection(&mut self, selection: Selection) {
        self.draft = None;
        if selection.is_empty() {
            self.active = None;
            return;
        }
        self.active = Some(ActiveSelection { selection, transaction: None });
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.draft = None;
    }

    // === Rectangular ===

    pub fn begin_rectangle(&mut self, anchor: Position) {
        self.active = Some(ActiveSelection {
            selection: Selection::rectangle(anchor, anchor),
            transaction: None,
        });
        self.draft = Some(Draft::Rectangle { anchor, dragged: false });
    }

    /// Moves the free corner; `square` locks both axes to the larger delta.
    pub fn update_rectangle(&mut self, pos: Position, square: bool) {
        let Some(Draft::Rectangle { anchor, dragged }) = &mut self.draft else {
            return;
        };
        let anchor = *anchor;
        *dragged |= pos != anchor;
        let end = if square { constrain_square(anchor, pos) } else { pos };
        self.active = Some(ActiveSelection {
            selection: Selection::rectangle(anchor, end),
            transaction: None,
        });
    }

    /// Ends the rectangle drag. A click that never left the anchor cell deselects.
    pub fn finish_rectangle(&mut self) {
        if let Some(Draft::Rectangle { dragged, .. }) = self.draft {
            self.draft = None;
            if !dragged {
                self.active = None;
            }
        }
    }

    // === Freeform ===

    pub fn begin_freeform(&mut self, pos: Position) {
        self.active = None;
        self.draft = Some(Draft::Freeform {
            points: vec![PathPoint::center_of(pos)],
        });
    }

    pub fn extend_freeform(&mut self, pos: Position) {
        if let Some(Draft::Freeform { points }) = &mut self.draft {
            let point = PathPoint::center_of(pos);
            if points.last() != Some(&point) {
                points.push(point);
            }
        }
    }

    pub fn is_drawing_freeform(&self) -> bool {
        matches!(self.draft, Some(Draft::Freeform { .. }))
    }

    /// Live lasso outline, lightly smoothed.
    pub fn freeform_preview(&self, smoothing: usize) -> Option<Vec<PathPoint>> {
        match &self.draft {
            Some(Draft::Freeform { points }) => Some(freeform::smooth_path(points, smoothing)),
            _ => None,
        }
    }

    /// Smooths and closes the lasso and resolves the cells inside it.
    pub fn finish_freeform(&mut self, grid: &Grid, smoothing: usize) {
        let Some(Draft::Freeform { points }) = self.draft.take() else {
            return;
        };
        let path = freeform::close_path(&freeform::smooth_path(&points, smoothing));
        let cells = freeform::polygon_cells(&path, grid.rectangle());
        log::debug!("freeform selection resolved {} cells from {} path points", cells.len(), path.len());
        self.set_selection(Selection::Freeform { path, cells });
    }

    pub fn cancel_freeform(&mut self) -> bool {
        if self.is_drawing_freeform() {
            self.draft = None;
            return true;
        }
        false
    }

    // === Magic wand ===

    pub fn select_matching(&mut self, grid: &Grid, anchor: Position, contiguous: bool, criteria: MatchCriteria) {
        let cells = find_matching_cells(grid, anchor, contiguous, criteria);
        self.set_selection(Selection::FloodMatched { anchor, cells });
    }

    // === Moving ===

    fn ensure_transaction(&mut self, grid: &Grid) -> Option<&mut MoveTransaction> {
        let active = self.active.as_mut()?;
        if active.transaction.is_none() {
            log::debug!("capturing move transaction for {:?} selection", active.selection.kind());
            active.transaction = Some(MoveTransaction::capture(grid, &active.selection));
        }
        active.transaction.as_mut()
    }

    /// Enters dragging. Returns false without an active selection.
    pub fn begin_move_drag(&mut self, grid: &Grid, pos: Position) -> bool {
        match self.ensure_transaction(grid) {
            Some(transaction) => {
                transaction.begin_drag(pos);
                true
            }
            None => false,
        }
    }

    pub fn update_move_drag(&mut self, pos: Position) {
        if let Some(transaction) = self.active.as_mut().and_then(|a| a.transaction.as_mut()) {
            transaction.drag_to(pos);
        }
    }

    pub fn end_move_drag(&mut self) {
        if let Some(transaction) = self.active.as_mut().and_then(|a| a.transaction.as_mut()) {
            transaction.end_drag();
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.transaction().is_some_and(MoveTransaction::is_dragging)
    }

    /// Keyboard step; stages a transaction if needed.
    pub fn step(&mut self, grid: &Grid, delta: Position) -> bool {
        match self.ensure_transaction(grid) {
            Some(transaction) => {
                transaction.step(delta);
                true
            }
            None => false,
        }
    }

    /// Removes the pending transaction and moves the selection along with it.
    /// The caller writes the returned transaction into the grid.
    pub fn take_transaction_for_commit(&mut self) -> Option<MoveTransaction> {
        let active = self.active.as_mut()?;
        let transaction = active.transaction.take()?;
        active.selection = active.selection.translated(transaction.total_offset());
        Some(transaction)
    }

    /// Drops the pending transaction; the selection stays where it was.
    pub fn cancel_move(&mut self) -> bool {
        self.active.as_mut().and_then(|a| a.transaction.take()).is_some()
    }
}
