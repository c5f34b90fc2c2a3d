//! Assertion utilities for testing.
//!
//! This module provides helper functions for comparing colors with a
//! floating-point tolerance.

/// Default epsilon for color comparisons
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Assert that two RGB colors are approximately equal.
///
/// # Panics
///
/// Panics if any channel differs by more than `epsilon` (default: 1e-3).
pub fn assert_rgb_approx_eq(actual: [f64; 3], expected: [f64; 3], epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (channel, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= epsilon,
            "Colors differ in channel {}: actual = {:?}, expected = {:?}, diff = {}, epsilon = {}",
            channel,
            actual,
            expected,
            diff,
            epsilon
        );
    }
}

/// Assert that every channel of every color lies in [0, 1].
pub fn assert_colors_in_unit_cube(colors: &[[f64; 3]]) {
    for (i, rgb) in colors.iter().enumerate() {
        assert!(
            rgb.iter().all(|c| (0.0..=1.0).contains(c)),
            "Color {} out of range: {:?}",
            i,
            rgb
        );
    }
}
