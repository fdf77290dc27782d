//! Tests for the rasterizer primitives

mod ellipse_tests;
mod rectangle_tests;
