//! Tests for moving selected content

use cellart_edit::{Cell, InputFocus, Modifiers, Position, Tool, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{char_at, create_test_state, fill_rect, RED};

#[test]
fn test_step_move_commit_and_undo() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (2, 2), (5, 5));
    state.select_rectangle((2, 2), (5, 5));

    for _ in 0..3 {
        assert!(state.nudge_selection(1, 0));
    }
    assert!(state.commit_move());

    for y in 0..10 {
        for x in 0..10 {
            let expected = if (5..=8).contains(&x) && (2..=5).contains(&y) { 'X' } else { ' ' };
            assert_eq!(char_at(&state, x, y), expected, "at ({x}, {y})");
        }
    }
    assert_eq!(state.get_cell((5, 2)), Cell::new('X', RED, None));

    state.undo().unwrap();
    for y in 0..10 {
        for x in 0..10 {
            let expected = if (2..=5).contains(&x) && (2..=5).contains(&y) { 'X' } else { ' ' };
            assert_eq!(char_at(&state, x, y), expected, "at ({x}, {y})");
        }
    }

    state.undo().unwrap();
    assert!(state.grid().is_empty());
}

#[test]
fn test_commit_then_undo_restores_exact_grid() {
    let mut state = create_test_state(12, 8);
    fill_rect(&mut state, 'a', (0, 0), (11, 7));
    fill_rect(&mut state, 'b', (3, 2), (6, 4));
    let before = state.grid().snapshot();

    state.select_rectangle((2, 1), (7, 5));
    state.begin_move_drag((4, 3));
    state.update_move_drag((6, 4));
    state.end_move_drag();
    state.nudge_selection(0, 2);
    assert!(state.commit_move());
    assert_ne!(state.grid().snapshot(), before);

    state.undo().unwrap();
    assert_eq!(state.grid().snapshot(), before);

    state.redo().unwrap();
    assert_eq!(state.grid().get_cell((5, 5)).ch, 'b');
}

#[test]
fn test_cancel_never_mutates() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (1, 1), (3, 3));
    let before = state.grid().snapshot();
    let undo_len = state.undo_stack_len();

    state.select_rectangle((0, 0), (4, 4));
    state.nudge_selection(2, 0);
    state.begin_move_drag((2, 2));
    state.update_move_drag((7, 9));
    state.end_move_drag();
    state.nudge_selection(-1, -1);
    state.begin_move_drag((5, 5));
    state.update_move_drag((0, 0));

    assert!(state.cancel(InputFocus::Canvas));
    assert_eq!(state.grid().snapshot(), before);
    assert_eq!(state.undo_stack_len(), undo_len);
    assert!(!state.selection().has_transaction());
}

#[test]
fn test_cancel_is_ignored_while_text_field_has_focus() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (1, 1), (1, 1));
    state.select_rectangle((1, 1), (1, 1));
    state.nudge_selection(1, 0);

    assert!(!state.cancel(InputFocus::TextField));
    assert!(state.selection().has_transaction());
}

#[test]
fn test_zero_offset_commit_pushes_nothing() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (1, 1), (2, 2));
    let undo_len = state.undo_stack_len();

    state.select_rectangle((1, 1), (2, 2));
    state.nudge_selection(1, 0);
    state.nudge_selection(-1, 0);
    assert!(!state.commit_move());
    assert_eq!(state.undo_stack_len(), undo_len);
    assert!(!state.selection().has_transaction());
}

#[test]
fn test_resumed_drag_does_not_jump() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (1, 1), (1, 1));
    state.select_rectangle((1, 1), (1, 1));

    state.nudge_selection(2, 0);
    assert_eq!(state.move_offset(), Position::new(2, 0));

    // grabbing again keeps the accumulated offset
    state.begin_move_drag((3, 1));
    assert_eq!(state.move_offset(), Position::new(2, 0));
    state.update_move_drag((3, 2));
    assert_eq!(state.move_offset(), Position::new(2, 1));
}

#[test]
fn test_display_overlays_staged_move() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (1, 1), (2, 1));
    state.select_rectangle((1, 1), (2, 1));
    state.nudge_selection(1, 0);

    // grid untouched until commit
    assert_eq!(char_at(&state, 1, 1), 'X');
    assert_eq!(char_at(&state, 3, 1), ' ');

    assert_eq!(state.display_cell((1, 1)).ch, ' ');
    assert_eq!(state.display_cell((2, 1)).ch, 'X');
    assert_eq!(state.display_cell((3, 1)).ch, 'X');
    assert_eq!(state.selection_bounds().map(|r| r.top_left()), Some(Position::new(2, 1)));
}

#[test]
fn test_move_drops_cells_outside_grid() {
    let mut state = create_test_state(5, 5);
    fill_rect(&mut state, 'X', (3, 0), (4, 0));
    state.select_rectangle((3, 0), (4, 0));
    state.nudge_selection(1, 0);
    assert!(state.commit_move());
    assert_eq!(state.grid().len(), 1);
    assert_eq!(char_at(&state, 4, 0), 'X');
}

#[test]
fn test_click_outside_auto_commits() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (1, 1), (2, 2));
    state.set_tool(Tool::Select);
    state.select_rectangle((1, 1), (2, 2));
    let undo_len = state.undo_stack_len();

    state.pointer_down((1, 1), Modifiers::empty());
    state.pointer_move((4, 4), Modifiers::empty());
    state.pointer_up((4, 4), Modifiers::empty());
    assert_eq!(state.move_offset(), Position::new(3, 3));
    assert_eq!(state.undo_stack_len(), undo_len);

    state.pointer_down((0, 9), Modifiers::empty());
    assert_eq!(state.undo_stack_len(), undo_len + 1);
    assert_eq!(char_at(&state, 4, 4), 'X');
    assert_eq!(char_at(&state, 1, 1), ' ');
}

#[test]
fn test_tool_switch_commits() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (0, 0), (0, 0));
    state.select_rectangle((0, 0), (0, 0));
    state.nudge_selection(0, 3);

    state.set_tool(Tool::Pencil);
    assert!(!state.selection().has_transaction());
    assert_eq!(char_at(&state, 0, 3), 'X');
}

#[test]
fn test_undo_while_staged_cancels_move() {
    let mut state = create_test_state(10, 10);
    fill_rect(&mut state, 'X', (0, 0), (0, 0));
    fill_rect(&mut state, 'Y', (5, 5), (5, 5));
    state.select_rectangle((0, 0), (0, 0));
    state.nudge_selection(1, 1);

    state.undo().unwrap();
    assert!(!state.selection().has_transaction());
    assert_eq!(char_at(&state, 0, 0), 'X');
    assert_eq!(char_at(&state, 1, 1), ' ');
    assert_eq!(char_at(&state, 5, 5), ' ');
}
