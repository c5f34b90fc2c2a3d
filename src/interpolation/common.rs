//! Common utilities for interpolation.
//!
//! This module provides shared functionality used by the trajectory
//! interpolation and colormap lookups.

/// Clamp a fractional index to valid bounds
pub fn clamp_index(index: f64, size: usize) -> f64 {
    index.max(0.0).min(size.saturating_sub(1) as f64)
}

/// Get the weight for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}

/// Split a clamped fractional index into the left knot and the fraction
/// towards its right neighbour. The left knot never exceeds `size - 2`.
pub fn segment(index: f64, size: usize) -> (usize, f64) {
    if size < 2 {
        return (0, 0.0);
    }
    let index = clamp_index(index, size);
    let left = (index.floor() as usize).min(size - 2);
    (left, index - left as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-1.0, 10), 0.0);
        assert_eq!(clamp_index(5.5, 10), 5.5);
        assert_eq!(clamp_index(15.0, 10), 9.0);
    }

    #[test]
    fn test_linear_weight() {
        let (w0, w1) = linear_weight(0.3);
        assert!((w0 - 0.7).abs() < 1e-10);
        assert!((w1 - 0.3).abs() < 1e-10);
        assert!((w0 + w1 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment() {
        assert_eq!(segment(0.0, 4), (0, 0.0));
        assert_eq!(segment(1.25, 4), (1, 0.25));
        // The last knot belongs to the final segment with fraction 1
        assert_eq!(segment(3.0, 4), (2, 1.0));
        assert_eq!(segment(7.0, 4), (2, 1.0));
        assert_eq!(segment(0.4, 1), (0, 0.0));
    }
}
