//! Predicate driven region matching shared by the paint bucket, the magic wand
//! and the gradient fill area.

use std::collections::{HashSet, VecDeque};

use crate::{Cell, CellAttributes, Grid, Position};

/// Which attributes two cells must share to match (AND semantics).
pub type MatchCriteria = CellAttributes;

/// Match predicate against the anchor cell.
///
/// Two blank cells only match when the character criterion is enabled. Without it a
/// color only criterion on an empty canvas would select everything.
pub fn cells_match(anchor: &Cell, candidate: &Cell, criteria: MatchCriteria) -> bool {
    if criteria.is_empty() {
        return false;
    }
    if anchor.is_blank() && candidate.is_blank() && !criteria.contains(CellAttributes::CHAR) {
        return false;
    }
    anchor.matches(candidate, criteria)
}

/// Finds all cells matching the cell at `start`.
///
/// `contiguous` grows a 4-connected region from `start`, otherwise the whole grid is
/// scanned. The result is a set; it does not depend on visiting order. An out of
/// bounds start or empty criteria yields an empty set.
pub fn find_matching_cells(grid: &Grid, start: Position, contiguous: bool, criteria: MatchCriteria) -> HashSet<Position> {
    let mut result = HashSet::new();

    if criteria.is_empty() || !grid.is_valid(start) {
        return result;
    }

    let anchor = grid.get_cell(start);
    if !cells_match(&anchor, &anchor, criteria) {
        return result;
    }

    if !contiguous {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Position::new(x, y);
                if cells_match(&anchor, &grid.get_cell(pos), criteria) {
                    result.insert(pos);
                }
            }
        }
        return result;
    }

    let mut queue = VecDeque::new();
    queue.push_back(start);
    result.insert(start);

    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Position::new(pos.x + dx, pos.y + dy);

            if !grid.is_valid(next) || result.contains(&next) {
                continue;
            }

            if cells_match(&anchor, &grid.get_cell(next), criteria) {
                result.insert(next);
                queue.push_back(next);
            }
        }
    }

    result
}
