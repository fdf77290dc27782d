//! Tests for saving and restoring the editor session

use cellart_edit::{EditState, EditTarget, EditorSessionState, Tool, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{char_at, create_test_state, fill_rect, red_brush};

#[test]
fn test_session_roundtrip() {
    let mut state = create_test_state(8, 8);
    fill_rect(&mut state, 'r', (1, 1), (3, 3));
    state.add_frame().unwrap();
    fill_rect(&mut state, 's', (0, 0), (0, 0));
    state.select_tool(Tool::Lasso);
    state.set_edit_target(EditTarget::Timeline);

    let json = state.session_state().to_json().unwrap();
    let restored = EditorSessionState::from_json(&json).unwrap();
    assert_eq!(restored.version, 1);
    assert_eq!(restored.undo_stack.undo_len(), 3);
    assert_eq!(restored.current_frame, 1);

    let mut other = EditState::from_frames(state.settings().clone(), state.frames().clone());
    other.restore_session(restored);

    assert_eq!(other.tool(), Tool::Lasso);
    assert_eq!(other.edit_target(), EditTarget::Timeline);
    assert_eq!(*other.brush(), red_brush('s'));
    assert_eq!(other.current_frame(), 1);
    assert_eq!(char_at(&other, 0, 0), 's');

    other.undo().unwrap();
    assert_eq!(char_at(&other, 0, 0), ' ');
    other.undo().unwrap();
    assert_eq!(other.frame_count(), 1);
    assert_eq!(char_at(&other, 2, 2), 'r');
    other.undo().unwrap();
    assert!(other.grid().is_empty());
}

#[test]
fn test_session_records_pending_work() {
    let mut state = create_test_state(8, 8);
    state.begin_typing((0, 0));
    state.type_char('p');
    fill_rect(&mut state, 'm', (5, 5), (5, 5));
    state.select_rectangle((5, 5), (5, 5));
    state.nudge_selection(1, 0);

    let session = state.session_state();
    assert_eq!(session.undo_stack.undo_len(), 3);
    assert_eq!(session.undo_stack.undo_description(), Some("Move selection".to_string()));
    assert_eq!(char_at(&state, 6, 5), 'm');
}

#[test]
fn test_missing_fields_use_defaults() {
    let session = EditorSessionState::from_json(r#"{"undo_stack":{"undo_stack":[],"redo_stack":[]}}"#).unwrap();
    assert_eq!(session.version, 1);
    assert_eq!(session.tool, Tool::Select);
    assert_eq!(session.current_frame, 0);
}
