//! Tests for debounced frame write back and playback

use std::time::{Duration, Instant};

use cellart_edit::{brushes::BrushMode, EditState, EditorSettings, Frame, FrameList, FrameStore, GridSnapshot, Position, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{char_at, create_test_state, fill_rect, init_logging};

fn stored_char(state: &EditState, frame: usize, x: i32, y: i32) -> Option<char> {
    state.frames().frame_data(frame)?.get(Position::new(x, y)).map(|c| c.ch)
}

#[test]
fn test_edits_reach_store_after_debounce() {
    let mut state = create_test_state(5, 5);
    fill_rect(&mut state, 'd', (0, 0), (1, 1));

    // the working grid has it, the store not yet
    assert_eq!(char_at(&state, 0, 0), 'd');
    assert_eq!(stored_char(&state, 0, 0, 0), None);

    state.tick(Instant::now());
    assert_eq!(stored_char(&state, 0, 0, 0), None);

    state.tick(Instant::now() + Duration::from_secs(10));
    assert_eq!(stored_char(&state, 0, 0, 0), Some('d'));
}

#[test]
fn test_structural_change_flushes_first() {
    let mut state = create_test_state(5, 5);
    fill_rect(&mut state, 'e', (2, 2), (2, 2));
    state.add_frame().unwrap();

    assert_eq!(stored_char(&state, 0, 2, 2), Some('e'));
    assert_eq!(state.current_frame(), 1);
    assert!(state.grid().is_empty());

    state.navigate_to_frame(0).unwrap();
    assert_eq!(char_at(&state, 2, 2), 'e');
}

#[test]
fn test_frame_snapshot_flushes() {
    let mut state = create_test_state(5, 5);
    fill_rect(&mut state, 's', (4, 4), (4, 4));
    let snapshot = state.frame_snapshot(0).unwrap();
    assert_eq!(snapshot.get(Position::new(4, 4)).map(|c| c.ch), Some('s'));
    assert!(state.frame_snapshot(3).is_none());
}

#[test]
fn test_undo_reaches_store() {
    let mut state = create_test_state(5, 5);
    fill_rect(&mut state, 'u', (0, 0), (0, 0));
    state.flush();
    state.undo().unwrap();
    state.flush();
    assert_eq!(stored_char(&state, 0, 0, 0), None);
    assert_eq!(state.frames().get(0).map(|f| f.data.clone()), Some(GridSnapshot::new()));
}

fn three_frames() -> EditState {
    init_logging();
    let frames: Vec<Frame> = (0..3)
        .map(|i| {
            let mut data = GridSnapshot::new();
            data.insert(Position::new(0, 0), cellart_edit::Cell::with_char(char::from(b'0' + i as u8)));
            Frame::new(format!("Frame {}", i + 1), 100).with_data(data)
        })
        .collect();
    let settings = EditorSettings {
        canvas_width: 4,
        canvas_height: 4,
        ..Default::default()
    };
    EditState::from_frames(settings, FrameList::from_frames(frames).unwrap())
}

#[test]
fn test_playback_loops_and_stops() {
    let mut state = three_frames();
    let t0 = Instant::now();
    let token = state.start_playback(t0);
    assert!(state.is_playing());

    state.tick(t0 + Duration::from_millis(50));
    assert_eq!(state.current_frame(), 0);
    state.tick(t0 + Duration::from_millis(100));
    assert_eq!(state.current_frame(), 1);
    assert_eq!(char_at(&state, 0, 0), '1');
    state.tick(t0 + Duration::from_millis(300));
    assert_eq!(state.current_frame(), 0);

    token.cancel();
    assert!(!state.is_playing());
    state.tick(t0 + Duration::from_millis(400));
    assert_eq!(state.current_frame(), 0);
    // playback does not record history
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_stop_playback() {
    let mut state = three_frames();
    let t0 = Instant::now();
    state.start_playback(t0);
    state.stop_playback();
    state.tick(t0 + Duration::from_millis(150));
    assert_eq!(state.current_frame(), 0);
}

/// Two frames showing frame 0, with playback started at the returned instant.
fn playing_on_first_frame() -> (EditState, Instant) {
    let mut state = create_test_state(6, 4);
    state.add_frame().unwrap();
    state.navigate_to_frame(0).unwrap();
    let t0 = Instant::now();
    state.start_playback(t0);
    (state, t0)
}

#[test]
fn test_playback_finishes_open_stroke_on_its_frame() {
    let (mut state, t0) = playing_on_first_frame();
    state.begin_stroke((0, 0), BrushMode::Draw);

    state.tick(t0 + Duration::from_millis(150));
    assert_eq!(state.current_frame(), 1);
    assert!(!state.is_stroking());
    assert_eq!(state.undo_stack().undo_description(), Some("Pencil".to_string()));

    // the rest of the gesture no longer draws
    state.continue_stroke((3, 0));
    assert!(!state.finish_stroke());
    assert!(state.grid().is_empty());

    assert_eq!(stored_char(&state, 0, 0, 0), Some('#'));
    assert_eq!(state.frames().frame_data(1).map(|d| d.len()), Some(0));

    state.stop_playback();
    state.undo().unwrap();
    assert_eq!(state.current_frame(), 0);
    assert!(state.grid().is_empty());
}

#[test]
fn test_playback_commits_staged_move_on_its_frame() {
    let (mut state, t0) = playing_on_first_frame();
    fill_rect(&mut state, 'X', (0, 0), (0, 0));
    state.select_rectangle((0, 0), (0, 0));
    state.nudge_selection(2, 0);

    state.tick(t0 + Duration::from_millis(150));
    assert_eq!(state.current_frame(), 1);
    assert!(!state.selection().has_transaction());

    assert_eq!(stored_char(&state, 0, 2, 0), Some('X'));
    assert_eq!(stored_char(&state, 0, 0, 0), None);
    assert_eq!(state.frames().frame_data(1).map(|d| d.len()), Some(0));
    assert!(state.grid().is_empty());
}

#[test]
fn test_playback_records_pending_typing_on_its_frame() {
    let (mut state, t0) = playing_on_first_frame();
    state.begin_typing((1, 1));
    state.type_char('t');

    state.tick(t0 + Duration::from_millis(150));
    assert_eq!(state.current_frame(), 1);
    assert!(state.typing_session().is_none());
    assert_eq!(stored_char(&state, 0, 1, 1), Some('t'));
    assert_eq!(state.undo_stack().undo_description(), Some("Typing".to_string()));
}
