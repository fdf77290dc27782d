//! Tests for ellipse drawing algorithms

use std::collections::HashSet;

use cellart_edit::brushes::{get_ellipse_points, get_filled_ellipse_points};
use cellart_engine::Position;

#[test]
fn test_outline_has_no_duplicates() {
    let points = get_ellipse_points(Position::new(0, 0), Position::new(20, 10));
    let unique: HashSet<_> = points.iter().copied().collect();
    assert_eq!(unique.len(), points.len());
}

#[test]
fn test_outline_touches_bounding_box() {
    let points = get_ellipse_points(Position::new(0, 0), Position::new(10, 6));
    assert!(points.contains(&Position::new(10, 3)));
    assert!(points.contains(&Position::new(0, 3)));
    assert!(points.contains(&Position::new(5, 0)));
    assert!(points.contains(&Position::new(5, 6)));
    assert!(points.iter().all(|p| p.x >= 0 && p.x <= 10 && p.y >= 0 && p.y <= 6));
}

#[test]
fn test_filled_contains_outline_interior() {
    let filled: HashSet<_> = get_filled_ellipse_points(Position::new(0, 0), Position::new(10, 6)).into_iter().collect();
    assert!(filled.contains(&Position::new(5, 3)));
    assert!(!filled.contains(&Position::new(0, 0)));
    assert!(!filled.contains(&Position::new(10, 6)));
}

#[test]
fn test_degenerate_box_is_a_line() {
    let points = get_filled_ellipse_points(Position::new(0, 2), Position::new(6, 2));
    assert_eq!(points.len(), 7);
    assert!(points.iter().all(|p| p.y == 2));
}

#[test]
fn test_filled_two_by_two_covers_box() {
    let points = get_filled_ellipse_points(Position::new(0, 0), Position::new(1, 1));
    assert_eq!(
        points,
        vec![Position::new(0, 0), Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
    );
}

#[test]
fn test_filled_four_by_four_keeps_rim() {
    let filled: HashSet<_> = get_filled_ellipse_points(Position::new(0, 0), Position::new(3, 3)).into_iter().collect();
    assert_eq!(filled.len(), 12);
    for corner in [(0, 0), (3, 0), (0, 3), (3, 3)] {
        assert!(!filled.contains(&Position::new(corner.0, corner.1)));
    }
    assert!(filled.contains(&Position::new(0, 1)));
    assert!(filled.contains(&Position::new(2, 3)));
}

#[test]
fn test_filled_covers_outline() {
    for (w, h) in [(1, 1), (3, 3), (5, 2), (7, 7), (10, 6), (20, 10)] {
        let filled: HashSet<_> = get_filled_ellipse_points(Position::new(0, 0), Position::new(w, h)).into_iter().collect();
        for p in get_ellipse_points(Position::new(0, 0), Position::new(w, h)) {
            assert!(filled.contains(&p), "{p:?} missing from filled {w}x{h}");
        }
    }
}
