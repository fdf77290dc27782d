//! Tests for rectangle drawing algorithms

use cellart_edit::brushes::{get_filled_rectangle_points, get_rectangle_points};
use cellart_engine::Position;

#[test]
fn test_rectangle_outline() {
    let points = get_rectangle_points(Position::new(0, 0), Position::new(4, 3));
    // 5 wide, 4 high: 2 * 5 + 2 * 2 border cells
    assert_eq!(points.len(), 14);
    assert!(!points.contains(&Position::new(2, 1)));
    assert!(points.contains(&Position::new(4, 3)));
}

#[test]
fn test_filled_rectangle() {
    let points = get_filled_rectangle_points(Position::new(4, 3), Position::new(0, 0));
    assert_eq!(points.len(), 20);
    assert!(points.contains(&Position::new(2, 1)));
}

#[test]
fn test_degenerate_rectangle() {
    assert_eq!(get_rectangle_points(Position::new(2, 2), Position::new(2, 2)), vec![Position::new(2, 2)]);
    assert_eq!(get_rectangle_points(Position::new(0, 1), Position::new(3, 1)).len(), 4);
}
