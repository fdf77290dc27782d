//! Tests for the gradient tool

use cellart_edit::{
    gradient::{GradientChannel, GradientDefinition, GradientKind, GradientStop},
    Color, InputFocus, Modifiers, Position, Tool, UndoState,
};
use pretty_assertions::assert_eq;

use crate::helpers::{create_test_state, fill_rect};

fn background_ramp() -> GradientDefinition {
    GradientDefinition {
        background: GradientChannel::new(vec![GradientStop::new(0.0, Some(Color::BLACK)), GradientStop::new(1.0, Some(Color::WHITE))]),
        ..Default::default()
    }
}

fn red_at(state: &cellart_edit::EditState, y: i32) -> u8 {
    state.get_cell((0, y)).bg.map_or(0, |c| c.get_rgb().0)
}

#[test]
fn test_linear_background_ramp_on_column() {
    let mut state = create_test_state(1, 10);
    fill_rect(&mut state, '#', (0, 0), (0, 9));
    state.set_gradient(background_ramp());
    state.set_tool(Tool::Gradient);

    state.pointer_down((0, 0), Modifiers::empty());
    state.pointer_move((0, 5), Modifiers::empty());
    state.pointer_up((0, 9), Modifiers::empty());

    let session = state.gradient_session().unwrap();
    assert_eq!(session.area().len(), 10);
    assert!(!session.dragging);
    assert_eq!(state.gradient_preview().len(), 10);
    // preview only
    assert_eq!(state.get_cell((0, 5)).bg, None);

    assert!(state.apply_gradient());
    assert!(state.gradient_session().is_none());

    assert_eq!(state.get_cell((0, 0)).bg, Some(Color::BLACK));
    assert_eq!(state.get_cell((0, 9)).bg, Some(Color::WHITE));
    let v4 = red_at(&state, 4);
    let v5 = red_at(&state, 5);
    assert!(v4 < v5);
    assert!(v4 > 0 && v5 < 0xFF);
    // 255 * 4/9 and 255 * 5/9, rounded
    assert_eq!(v4, 113);
    assert_eq!(v5, 142);
    for y in 1..10 {
        assert!(red_at(&state, y - 1) <= red_at(&state, y));
    }
    // the character channel is disabled
    assert_eq!(state.get_cell((0, 4)).ch, '#');
    assert_eq!(state.undo_stack().undo_description(), Some("Gradient".to_string()));

    state.undo().unwrap();
    assert_eq!(state.get_cell((0, 4)).bg, None);
}

#[test]
fn test_gradient_area_follows_match() {
    let mut state = create_test_state(6, 1);
    fill_rect(&mut state, 'a', (0, 0), (2, 0));
    fill_rect(&mut state, 'b', (3, 0), (5, 0));
    state.set_gradient(GradientDefinition {
        character: GradientChannel::new(vec![GradientStop::new(0.0, '.'), GradientStop::new(1.0, '@')]),
        ..Default::default()
    });

    state.begin_gradient((0, 0));
    state.update_gradient_end((2, 0));
    assert!(state.apply_gradient());

    assert_eq!(state.get_cell((0, 0)).ch, '.');
    assert_eq!(state.get_cell((2, 0)).ch, '@');
    assert_eq!(state.get_cell((3, 0)).ch, 'b');
}

#[test]
fn test_cancel_gradient_touches_nothing() {
    let mut state = create_test_state(4, 4);
    state.set_gradient(background_ramp());
    state.set_tool(Tool::Gradient);
    state.pointer_down((0, 0), Modifiers::empty());
    state.pointer_up((3, 3), Modifiers::empty());

    assert!(state.cancel(InputFocus::Canvas));
    assert!(state.gradient_session().is_none());
    assert!(!state.apply_gradient());
    assert!(state.grid().is_empty());
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_alt_sets_radial_control() {
    let mut state = create_test_state(9, 9);
    state.set_gradient(GradientDefinition {
        kind: GradientKind::Radial,
        ..background_ramp()
    });
    state.set_tool(Tool::Gradient);
    state.pointer_down((4, 4), Modifiers::empty());
    state.pointer_up((8, 4), Modifiers::empty());
    state.pointer_down((4, 6), Modifiers::ALT);
    state.pointer_up((4, 6), Modifiers::ALT);

    let session = state.gradient_session().unwrap();
    assert_eq!(session.start, Position::new(4, 4));
    assert_eq!(session.end, Position::new(8, 4));
    assert_eq!(session.control, Some(Position::new(4, 6)));

    let preview = state.gradient_preview();
    assert_eq!(preview.get(&Position::new(4, 4)).and_then(|c| c.bg), Some(Color::BLACK));
    // beyond the control radius the ramp is saturated
    assert_eq!(preview.get(&Position::new(4, 8)).and_then(|c| c.bg), Some(Color::WHITE));
}
