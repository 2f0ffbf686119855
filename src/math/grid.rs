//! Fixed-step sampling grids.
//!
//! Grid values are always derived from an integer index (`start + i * step`)
//! rather than by repeatedly adding `step`, so the number of samples and the
//! sample values are identical on every call and never drift.

/// Number of samples on an inclusive `[start, end]` grid with the given step.
///
/// The upper bound is tolerant: a sample is included while it lies within
/// `end + step / 2`, so representational error in `(end - start) / step` can
/// never drop the terminal sample. Degenerate inputs yield an empty grid.
pub fn sample_count(start: f64, end: f64, step: f64) -> usize {
    if !(start.is_finite() && end.is_finite() && step.is_finite() && step > 0.0) || end < start {
        return 0;
    }
    ((end - start) / step + 0.5).floor() as usize + 1
}

/// Inclusive, ascending grid from `start` to `end`.
pub fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    let n = sample_count(start, end, step);
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Offsets `-half_width ..= +half_width` around zero.
///
/// Offsets are built as `(i - k) * step` for a centered index `k`, which makes
/// the sequence exactly antisymmetric: `offsets[j] == -offsets[n - 1 - j]`.
pub fn centered_offsets(half_width: f64, step: f64) -> Vec<f64> {
    let half = sample_count(0.0, half_width, step);
    if half == 0 {
        return Vec::new();
    }
    let k = (half - 1) as i64;
    (-k..=k).map(|i| i as f64 * step).collect()
}

/// Round to 2 decimals (the display precision of rates and inflation).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_includes_both_endpoints() {
        let v = stepped(1.0, 3.0, 0.05);
        assert_eq!(v.len(), 41);
        assert_eq!(v[0], 1.0);
        assert!((v[v.len() - 1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn tolerant_upper_bound_absorbs_representation_error() {
        // 0.3 / 0.1 is 2.9999999999999996 in binary floating point.
        assert_eq!(sample_count(0.0, 0.3, 0.1), 4);
        // A bound short of the next step by more than half a step excludes it.
        assert_eq!(sample_count(0.0, 0.34, 0.1), 4);
        assert_eq!(sample_count(0.0, 0.36, 0.1), 5);
    }

    #[test]
    fn degenerate_grids_are_empty() {
        assert!(stepped(3.0, 1.0, 0.05).is_empty());
        assert!(stepped(1.0, 3.0, 0.0).is_empty());
        assert!(stepped(f64::NAN, 3.0, 0.05).is_empty());
        assert!(centered_offsets(f64::INFINITY, 0.05).is_empty());
    }

    #[test]
    fn centered_offsets_are_antisymmetric() {
        let v = centered_offsets(1.5, 0.05);
        assert_eq!(v.len(), 61);
        assert_eq!(v[30], 0.0);
        for j in 0..v.len() {
            assert_eq!(v[j], -v[v.len() - 1 - j]);
        }
    }

    #[test]
    fn round2_snaps_to_cents() {
        assert_eq!(round2(1.0 + 0.05 * 23.0), 2.15);
        assert_eq!(round2(2.499999999), 2.5);
    }
}
