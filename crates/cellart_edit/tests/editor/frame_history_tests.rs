//! Mixed grid and timeline history replayed backwards and forwards

use cellart_edit::{EditorSessionState, Frame, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{capture, char_at, create_test_state, fill_rect};

type Captured = (Vec<Frame>, usize);

#[test]
fn test_mixed_history_undo_redo_matrix() {
    let mut state = create_test_state(6, 4);
    let mut states: Vec<Captured> = vec![capture(&mut state)];

    fill_rect(&mut state, 'a', (0, 0), (0, 0));
    states.push(capture(&mut state));
    state.add_frame().unwrap();
    states.push(capture(&mut state));
    fill_rect(&mut state, 'b', (1, 1), (1, 1));
    states.push(capture(&mut state));
    state.duplicate_frame(1).unwrap();
    states.push(capture(&mut state));
    fill_rect(&mut state, 'c', (2, 2), (2, 2));
    states.push(capture(&mut state));
    state.reorder_frames(2, 0).unwrap();
    states.push(capture(&mut state));
    state.rename_frame(1, "Intro").unwrap();
    states.push(capture(&mut state));
    state.set_frame_duration(2, 250).unwrap();
    states.push(capture(&mut state));
    state.navigate_to_frame(2).unwrap();
    states.push(capture(&mut state));
    state.delete_frame(0).unwrap();
    states.push(capture(&mut state));

    let steps = states.len() - 1;
    assert_eq!(state.undo_stack_len(), steps);

    let (frames, current) = &states[6];
    assert_eq!(frames.len(), 3);
    assert_eq!(*current, 0);
    assert_eq!(frames[0].name, "Frame 2 copy");

    for i in (0..steps).rev() {
        state.undo().unwrap();
        assert_eq!(capture(&mut state), states[i], "after undoing step {}", i + 1);
    }
    assert!(!state.can_undo());

    for i in 1..=steps {
        state.redo().unwrap();
        assert_eq!(capture(&mut state), states[i], "after redoing step {i}");
    }
    assert!(!state.can_redo());
}

#[test]
fn test_new_action_clears_redo() {
    let mut state = create_test_state(4, 4);
    state.add_frame().unwrap();
    state.undo().unwrap();
    assert!(state.can_redo());
    fill_rect(&mut state, 'n', (0, 0), (0, 0));
    assert!(!state.can_redo());
    assert_eq!(state.frame_count(), 1);
}

#[test]
fn test_last_frame_cannot_be_deleted() {
    let mut state = create_test_state(4, 4);
    assert!(state.delete_frame(0).is_err());
    assert!(state.navigate_to_frame(1).is_err());
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_navigation_is_recorded() {
    let mut state = create_test_state(4, 4);
    state.add_frame().unwrap();
    state.previous_frame().unwrap();
    assert_eq!(state.current_frame(), 0);
    state.next_frame().unwrap();
    assert_eq!(state.current_frame(), 1);

    state.undo().unwrap();
    assert_eq!(state.current_frame(), 0);
    state.undo().unwrap();
    assert_eq!(state.current_frame(), 1);
}

#[test]
fn test_history_on_missing_frame_is_skipped() {
    let mut state = create_test_state(4, 4);
    state.add_frame().unwrap();
    state.add_frame().unwrap();
    assert_eq!(state.current_frame(), 2);
    fill_rect(&mut state, 'm', (0, 0), (0, 0));
    let json = state.session_state().to_json().unwrap();

    // restored onto a document with a single frame
    let mut other = create_test_state(4, 4);
    fill_rect(&mut other, 'k', (3, 3), (3, 3));
    other.restore_session(EditorSessionState::from_json(&json).unwrap());
    assert_eq!(other.current_frame(), 0);

    other.undo().unwrap();
    assert_eq!(other.current_frame(), 0);
    assert_eq!(other.frame_count(), 1);
    assert_eq!(char_at(&other, 3, 3), 'k');
}
