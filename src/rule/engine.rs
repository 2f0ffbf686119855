//! The kinked policy-rate rule and its two chart samplers.
//!
//! ```text
//! i = r* + π + a(π) · (π - π*) + 1.0 · gap
//! a(π) = 0.5   if π <= 2.5
//!        0.75  if π >  2.5
//! ```
//!
//! `r*` is the region's neutral rate and `π* = 2.0`. The coefficient scales
//! `π - π*`, not `π - 2.5`, so the rule is left-continuous at the threshold
//! and steps up by [`KINK_JUMP`] (0.125) just above it, where the slope also
//! rises from 1.5 to 1.75.
//!
//! All three operations are pure. Nothing is validated or clamped: NaN and
//! infinities flow through the arithmetic, and callers that want bounds apply
//! them before calling in.

use crate::domain::{CurvePoint, DensityPoint, INFLATION_TARGET, Regime, Region, RuleInput, RuleOutput};
use crate::math::{centered_offsets, normal_pdf, round2, stepped};

/// Inflation above which the stressed response applies (strictly greater).
pub const KINK_THRESHOLD: f64 = 2.5;

/// Inflation-gap coefficient at or below the threshold.
pub const BASE_RESPONSE: f64 = 0.5;

/// Inflation-gap coefficient above the threshold (0.5 × 1.5 stress multiplier).
pub const STRESSED_RESPONSE: f64 = 0.75;

/// Output-gap coefficient.
pub const GAP_WEIGHT: f64 = 1.0;

/// Step in the rule value between `π = 2.5` and the right-hand limit.
pub const KINK_JUMP: f64 = (STRESSED_RESPONSE - BASE_RESPONSE) * (KINK_THRESHOLD - INFLATION_TARGET);

/// Curve inflation domain. Fixed; it does not follow the live input.
pub const CURVE_INFLATION_MIN: f64 = 1.0;
pub const CURVE_INFLATION_MAX: f64 = 3.0;
pub const CURVE_STEP: f64 = 0.05;

/// Illustrative width of the confidence density. Not estimated from data.
pub const DENSITY_STD_DEV: f64 = 0.4;

/// The density is sampled over `mean ± DENSITY_HALF_WIDTH`.
pub const DENSITY_HALF_WIDTH: f64 = 1.5;
pub const DENSITY_STEP: f64 = 0.05;

/// Relative slack under which two grid distances count as a tie.
const TIE_REL_EPS: f64 = 1e-12;

/// Which side of the kink `inflation` falls on.
pub fn regime(inflation: f64) -> Regime {
    if inflation > KINK_THRESHOLD {
        Regime::Stressed
    } else {
        Regime::Base
    }
}

/// Inflation-gap coefficient for the given inflation.
pub fn response_coefficient(inflation: f64) -> f64 {
    match regime(inflation) {
        Regime::Base => BASE_RESPONSE,
        Regime::Stressed => STRESSED_RESPONSE,
    }
}

/// Implied policy rate (percent) for one input triple.
pub fn compute_implied_rate(inflation: f64, output_gap: f64, region: Region) -> f64 {
    let params = region.parameters();
    let coeff = response_coefficient(inflation);
    params.neutral_rate + inflation + coeff * (inflation - params.target) + GAP_WEIGHT * output_gap
}

/// [`compute_implied_rate`] over a bundled input.
pub fn evaluate(input: &RuleInput) -> RuleOutput {
    RuleOutput {
        implied_rate: compute_implied_rate(input.inflation, input.output_gap, input.region),
    }
}

/// Implied rate across the fixed inflation grid `1.00..=3.00` (step 0.05).
///
/// The grid point nearest `current_inflation` carries its rate in
/// `current_sample` when it lies within half a grid step of the live input.
/// At an exact midpoint between two grid values the lower one is marked, so a
/// curve never carries more than one marked point.
pub fn generate_rate_curve(output_gap: f64, region: Region, current_inflation: f64) -> Vec<CurvePoint> {
    let grid: Vec<f64> = stepped(CURVE_INFLATION_MIN, CURVE_INFLATION_MAX, CURVE_STEP)
        .into_iter()
        .map(round2)
        .collect();
    let marked = nearest_within_half_step(&grid, current_inflation, CURVE_STEP);

    grid.iter()
        .enumerate()
        .map(|(i, &inflation)| {
            let rate = compute_implied_rate(inflation, output_gap, region);
            CurvePoint {
                inflation,
                rate,
                current_sample: (marked == Some(i)).then_some(rate),
            }
        })
        .collect()
}

/// Index of the marked point in a generated curve, if any.
pub fn current_sample_index(curve: &[CurvePoint]) -> Option<usize> {
    curve.iter().position(|p| p.current_sample.is_some())
}

/// Gaussian density centered on `implied_rate`, sampled over ±1.5 at step 0.05.
///
/// The sequence is symmetric point for point and its middle sample is the
/// exact peak `1 / (σ √(2π))`. A non-finite rate yields NaN densities.
pub fn generate_confidence_density(implied_rate: f64) -> Vec<DensityPoint> {
    let offsets = centered_offsets(DENSITY_HALF_WIDTH, DENSITY_STEP);
    let finite = implied_rate.is_finite();

    offsets
        .into_iter()
        .map(|dev| DensityPoint {
            x: implied_rate + dev,
            density: if finite {
                normal_pdf(dev, DENSITY_STD_DEV)
            } else {
                f64::NAN
            },
        })
        .collect()
}

/// Nearest grid index strictly within `step / 2` of `target`.
///
/// Distances equal up to float noise count as a tie, and ties keep the earlier
/// (lower) grid value.
fn nearest_within_half_step(grid: &[f64], target: f64, step: f64) -> Option<usize> {
    if !target.is_finite() {
        return None;
    }

    let half = step / 2.0;
    let mut best: Option<(usize, f64)> = None;
    for (i, &g) in grid.iter().enumerate() {
        let dist = (g - target).abs();
        if dist >= half {
            continue;
        }
        match best {
            Some((_, best_dist)) if dist >= best_dist * (1.0 - TIE_REL_EPS) => {}
            _ => best = Some((i, dist)),
        }
    }

    best.map(|(i, _)| i)
}
