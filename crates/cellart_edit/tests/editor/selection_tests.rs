//! Tests for selection tools

use std::collections::HashSet;

use cellart_edit::{
    selection::{Selection, SelectionKind},
    Cell, CellAttributes, FillSettings, Modifiers, Position, Rectangle, Tool, UndoState,
};
use pretty_assertions::assert_eq;

use crate::helpers::{char_at, create_test_state, fill_rect};

#[test]
fn test_rectangle_selection_with_shift_is_square() {
    let mut state = create_test_state(20, 20);
    state.set_tool(Tool::Select);
    state.pointer_down((5, 5), Modifiers::empty());
    state.pointer_move((8, 6), Modifiers::SHIFT);
    state.pointer_up((8, 6), Modifiers::SHIFT);

    assert_eq!(state.selection_bounds(), Some(Rectangle::from_corners((5, 5), (8, 8))));
}

#[test]
fn test_square_lock_keeps_direction() {
    let mut state = create_test_state(20, 20);
    state.set_tool(Tool::Select);
    state.pointer_down((10, 10), Modifiers::empty());
    state.pointer_up((9, 4), Modifiers::SHIFT);

    assert_eq!(state.selection_bounds(), Some(Rectangle::from_corners((4, 4), (10, 10))));
}

#[test]
fn test_lasso_selects_interior() {
    let mut state = create_test_state(12, 12);
    state.set_tool(Tool::Lasso);

    let mut path = Vec::new();
    path.extend((1..=8).map(|x| (x, 1)));
    path.extend((2..=8).map(|y| (8, y)));
    path.extend((1..8).rev().map(|x| (x, 8)));
    path.extend((2..8).rev().map(|y| (1, y)));

    state.pointer_down(path[0], Modifiers::empty());
    for p in &path[1..] {
        state.pointer_move(*p, Modifiers::empty());
        assert!(state.freeform_preview().is_some());
    }
    state.pointer_up(*path.last().unwrap(), Modifiers::empty());

    assert_eq!(state.selection().kind(), Some(SelectionKind::Freeform));
    assert!(state.freeform_preview().is_none());
    let selection = state.selection().selection().unwrap();
    assert!(selection.contains((4, 4)));
    assert!(selection.contains((5, 6)));
    assert!(!selection.contains((0, 0)));
    assert!(!selection.contains((10, 10)));
}

#[test]
fn test_magic_wand_ring() {
    let mut state = create_test_state(8, 8);
    fill_rect(&mut state, 'B', (0, 0), (2, 2));
    fill_rect(&mut state, 'A', (1, 1), (1, 1));
    fill_rect(&mut state, 'A', (5, 5), (5, 5));

    state.set_wand_settings(FillSettings {
        contiguous: false,
        criteria: CellAttributes::CHAR,
    });
    state.set_tool(Tool::MagicWand);
    state.pointer_down((1, 1), Modifiers::empty());
    state.pointer_up((1, 1), Modifiers::empty());

    let Some(Selection::FloodMatched { anchor, cells }) = state.selection().selection() else {
        panic!("expected a flood matched selection");
    };
    assert_eq!(*anchor, Position::new(1, 1));
    let expected: HashSet<Position> = [Position::new(1, 1), Position::new(5, 5)].into_iter().collect();
    assert_eq!(cells, &expected);
}

#[test]
fn test_magic_wand_selection_moves() {
    let mut state = create_test_state(8, 8);
    fill_rect(&mut state, 'A', (0, 0), (0, 0));
    fill_rect(&mut state, 'B', (1, 0), (1, 0));
    fill_rect(&mut state, 'A', (4, 4), (4, 4));

    state.set_wand_settings(FillSettings {
        contiguous: false,
        criteria: CellAttributes::CHAR,
    });
    state.select_matching((0, 0));
    state.nudge_selection(0, 1);
    assert!(state.commit_move());

    assert_eq!(char_at(&state, 0, 1), 'A');
    assert_eq!(char_at(&state, 4, 5), 'A');
    assert_eq!(char_at(&state, 1, 0), 'B');
    assert_eq!(char_at(&state, 0, 0), ' ');
    // the selection follows its content
    assert!(state.selection().contains((4, 5)));
}

#[test]
fn test_empty_criteria_selects_nothing() {
    let mut state = create_test_state(8, 8);
    state.set_wand_settings(FillSettings {
        contiguous: false,
        criteria: CellAttributes::empty(),
    });
    state.select_matching((0, 0));
    assert!(!state.is_something_selected());
}

#[test]
fn test_select_all_and_delete() {
    let mut state = create_test_state(6, 4);
    fill_rect(&mut state, 'z', (0, 0), (5, 3));
    state.select_all();
    assert_eq!(state.selection_bounds(), Some(Rectangle::from_min_size((0, 0), (6, 4))));

    let undo_len = state.undo_stack_len();
    assert!(state.delete_selection().unwrap());
    assert!(state.grid().is_empty());
    assert_eq!(state.undo_stack_len(), undo_len + 1);

    state.undo().unwrap();
    assert_eq!(state.get_cell((5, 3)), Cell::new('z', crate::helpers::RED, None));
}

#[test]
fn test_clear_selection() {
    let mut state = create_test_state(6, 4);
    state.select_rectangle((1, 1), (2, 2));
    assert!(state.is_something_selected());
    state.clear_selection();
    assert!(!state.is_something_selected());
    assert!(!state.delete_selection_contents());
}

#[test]
fn test_click_outside_selection_deselects() {
    let mut state = create_test_state(20, 20);
    state.set_tool(Tool::Select);
    state.pointer_down((2, 2), Modifiers::empty());
    state.pointer_move((5, 4), Modifiers::empty());
    state.pointer_up((5, 4), Modifiers::empty());
    assert_eq!(state.selection_bounds(), Some(Rectangle::from_corners((2, 2), (5, 4))));

    state.pointer_down((12, 12), Modifiers::empty());
    state.pointer_up((12, 12), Modifiers::empty());
    assert!(!state.is_something_selected());
    assert_eq!(state.selection_bounds(), None);
}

#[test]
fn test_drag_back_to_anchor_keeps_single_cell() {
    let mut state = create_test_state(20, 20);
    state.set_tool(Tool::Select);
    state.pointer_down((3, 3), Modifiers::empty());
    state.pointer_move((6, 6), Modifiers::empty());
    state.pointer_up((3, 3), Modifiers::empty());
    assert_eq!(state.selection_bounds(), Some(Rectangle::from_corners((3, 3), (3, 3))));
}
