//! Linear interpolation of sparse control sequences.

use ndarray::Array1;

use super::common::linear_weight;

/// `n` equally spaced values from `start` to `end`, both inclusive.
///
/// The last value is exactly `end`; a single value is `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    if n < 2 {
        return Array1::from_elem(n, start);
    }
    let last = n - 1;
    Array1::from_shape_fn(n, |i| {
        if i == last {
            end
        } else {
            start + (end - start) * (i as f64 / last as f64)
        }
    })
}

/// Normalized positions `x_i = i / (n - 1)` for a trajectory of length `n`
pub fn positions(n: usize) -> Array1<f64> {
    linspace(0.0, 1.0, n)
}

/// Piecewise-linear interpolation of the points `(xp, fp)` at each `x`.
///
/// `xp` must be increasing. Queries left of `xp[0]` or right of the last knot
/// take the end values.
pub fn interp(x: &Array1<f64>, xp: &[f64], fp: &[f64]) -> Array1<f64> {
    debug_assert_eq!(xp.len(), fp.len());
    if xp.is_empty() {
        return Array1::zeros(x.len());
    }
    let last = xp.len() - 1;

    x.mapv(|xi| {
        if xi <= xp[0] {
            return fp[0];
        }
        if xi >= xp[last] {
            return fp[last];
        }
        // First knot strictly greater than xi; guaranteed to be in 1..=last
        let right = xp.partition_point(|&k| k <= xi);
        let left = right - 1;
        let span = xp[right] - xp[left];
        if span <= 0.0 {
            return fp[right];
        }
        let (w0, w1) = linear_weight((xi - xp[left]) / span);
        fp[left] * w0 + fp[right] * w1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_span_unit_interval() {
        let x = positions(5);
        assert_eq!(x.len(), 5);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[4], 1.0);
        assert!((x[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_endpoints_exact() {
        let x = linspace(0.05, 0.15, 256);
        assert_eq!(x[0], 0.05);
        assert_eq!(x[255], 0.15);
        assert_eq!(linspace(3.0, 4.0, 1).to_vec(), vec![3.0]);
        assert!(linspace(3.0, 4.0, 0).is_empty());
    }

    #[test]
    fn test_interp_between_and_at_knots() {
        let xp = [0.0, 0.5, 1.0];
        let fp = [0.0, 1.0, 0.0];
        let x = Array1::from(vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let y = interp(&x, &xp, &fp);

        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (got, want) in y.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_interp_clamps_outside_knots() {
        let xp = [0.0, 1.0];
        let fp = [2.0, 4.0];
        let x = Array1::from(vec![-1.0, 2.0]);

        let y = interp(&x, &xp, &fp);
        assert_eq!(y[0], 2.0);
        assert_eq!(y[1], 4.0);
    }
}
