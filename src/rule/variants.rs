//! Textbook policy-rule variants.
//!
//! These take the neutral rate and inflation target explicitly so they can be
//! compared against the kinked rule in [`super::engine`] for any region, or
//! evaluated with a custom `r*`.
//!
//! - Taylor (1993): `i = r* + π + 0.5(π - π*) + 0.5·gap`
//! - Taylor (1999): `i = r* + π + 0.5(π - π*) + 1.0·gap`
//! - Nonlinear: Taylor (1999) with the inflation gap scaled by a stress
//!   multiplier when `π > threshold`
//!
//! [`scenario_matrix`] sweeps one variant over neutral rates, output-gap
//! scenarios and an inflation window for the sensitivity view.

use serde::{Deserialize, Serialize};

use crate::domain::{INFLATION_TARGET, RuleInput, RuleVariant};
use crate::math::{round2, stepped};
use crate::rule::engine::KINK_THRESHOLD;

/// Inflation-gap multiplier above the threshold in the nonlinear rule.
pub const STRESS_MULTIPLIER: f64 = 1.5;

/// Weight on the prior rate in [`apply_smoothing`].
pub const DEFAULT_SMOOTHING_RHO: f64 = 0.8;

/// Rate reduction per unit of financial stress after the 2008 crisis.
pub const FINANCIAL_STRESS_WEIGHT: f64 = 0.25;

/// Inflation window of the scenario view: live inflation ± this (points).
pub const SCENARIO_HALF_WIDTH: f64 = 0.4;
pub const SCENARIO_STEP: f64 = 0.05;

/// One rate path of the scenario matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCurve {
    pub neutral_rate: f64,
    pub output_gap: f64,
    /// Rates aligned with the inflation grid passed to [`scenario_matrix`].
    pub rates: Vec<f64>,
}

pub fn taylor_1993(neutral_rate: f64, inflation: f64, output_gap: f64) -> f64 {
    neutral_rate + inflation + 0.5 * (inflation - INFLATION_TARGET) + 0.5 * output_gap
}

pub fn taylor_1999(neutral_rate: f64, inflation: f64, output_gap: f64) -> f64 {
    neutral_rate + inflation + 0.5 * (inflation - INFLATION_TARGET) + output_gap
}

/// Taylor (1999) weights with a steeper reaction once inflation exceeds `threshold`.
pub fn taylor_nonlinear(
    neutral_rate: f64,
    inflation: f64,
    output_gap: f64,
    threshold: f64,
    stress_multiplier: f64,
) -> f64 {
    let base_gap = inflation - INFLATION_TARGET;
    let adjusted_gap = if inflation > threshold {
        base_gap * stress_multiplier
    } else {
        base_gap
    };
    neutral_rate + inflation + 0.5 * adjusted_gap + output_gap
}

/// Taylor (1999) less a premium for financial stress.
pub fn post_crisis_adjusted(neutral_rate: f64, inflation: f64, output_gap: f64, financial_stress: f64) -> f64 {
    taylor_1999(neutral_rate, inflation, output_gap) - FINANCIAL_STRESS_WEIGHT * financial_stress
}

/// Partial adjustment toward the rule: `rho · previous + (1 - rho) · rule`.
pub fn apply_smoothing(rule_rate: f64, previous_rate: f64, rho: f64) -> f64 {
    rho * previous_rate + (1.0 - rho) * rule_rate
}

/// Evaluate a variant with the default threshold and multiplier.
pub fn evaluate_variant(variant: RuleVariant, neutral_rate: f64, inflation: f64, output_gap: f64) -> f64 {
    match variant {
        RuleVariant::Taylor1993 => taylor_1993(neutral_rate, inflation, output_gap),
        RuleVariant::Taylor1999 => taylor_1999(neutral_rate, inflation, output_gap),
        RuleVariant::Nonlinear => {
            taylor_nonlinear(neutral_rate, inflation, output_gap, KINK_THRESHOLD, STRESS_MULTIPLIER)
        }
    }
}

/// Every variant for one input, in [`RuleVariant::ALL`] order.
pub fn compare_variants(input: &RuleInput) -> Vec<(RuleVariant, f64)> {
    let neutral = input.region.neutral_rate();
    RuleVariant::ALL
        .iter()
        .map(|&v| (v, evaluate_variant(v, neutral, input.inflation, input.output_gap)))
        .collect()
}

/// Inflation grid centered on `current` for the scenario view, rounded to cents.
pub fn scenario_inflation_window(current: f64) -> Vec<f64> {
    let start = current - SCENARIO_HALF_WIDTH;
    stepped(start, current + SCENARIO_HALF_WIDTH, SCENARIO_STEP)
        .into_iter()
        .map(round2)
        .collect()
}

/// Evaluate `variant` for every `(neutral rate, output gap)` pair across `inflations`.
///
/// Curves come out neutral-rate major, in input order.
pub fn scenario_matrix(
    variant: RuleVariant,
    neutral_rates: &[f64],
    inflations: &[f64],
    output_gaps: &[f64],
) -> Vec<ScenarioCurve> {
    let mut out = Vec::with_capacity(neutral_rates.len() * output_gaps.len());
    for &neutral_rate in neutral_rates {
        for &output_gap in output_gaps {
            let rates = inflations
                .iter()
                .map(|&pi| evaluate_variant(variant, neutral_rate, pi, output_gap))
                .collect();
            out.push(ScenarioCurve {
                neutral_rate,
                output_gap,
                rates,
            });
        }
    }
    out
}

/// Extra tightening from the kink relative to Taylor (1999), in basis points.
pub fn nonlinear_premium_bps(input: &RuleInput) -> f64 {
    let neutral = input.region.neutral_rate();
    let nonlinear = evaluate_variant(RuleVariant::Nonlinear, neutral, input.inflation, input.output_gap);
    let linear = taylor_1999(neutral, input.inflation, input.output_gap);
    (nonlinear - linear) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;
    use crate::rule::engine::compute_implied_rate;

    #[test]
    fn textbook_rules_on_reference_scenario() {
        // r* = 2.75, π = 2.5, gap = -0.8.
        let t93 = taylor_1993(2.75, 2.5, -0.8);
        let t99 = taylor_1999(2.75, 2.5, -0.8);
        assert!((t93 - 5.1).abs() < 1e-12);
        assert!((t99 - 4.7).abs() < 1e-12);
        assert!((apply_smoothing(t99, 2.25, DEFAULT_SMOOTHING_RHO) - 2.74).abs() < 1e-12);
    }

    #[test]
    fn nonlinear_matches_kinked_engine() {
        for region in Region::ALL {
            for &pi in &[1.0, 2.0, 2.5, 2.55, 3.0, 4.8] {
                for &gap in &[-2.0, 0.0, 1.3] {
                    let engine = compute_implied_rate(pi, gap, region);
                    let variant = evaluate_variant(RuleVariant::Nonlinear, region.neutral_rate(), pi, gap);
                    assert!((engine - variant).abs() < 1e-12, "pi={pi} gap={gap}");
                }
            }
        }
    }

    #[test]
    fn premium_is_zero_at_or_below_threshold() {
        let input = RuleInput::new(2.5, 0.3, Region::Us);
        assert_eq!(nonlinear_premium_bps(&input), 0.0);

        // Above: 0.25 × (3.0 - 2.0) = 0.25 points.
        let input = RuleInput::new(3.0, 0.3, Region::Us);
        assert!((nonlinear_premium_bps(&input) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn post_crisis_subtracts_stress_premium() {
        let base = taylor_1999(2.5, 2.0, 0.0);
        assert!((post_crisis_adjusted(2.5, 2.0, 0.0, 2.0) - (base - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn smoothing_endpoints() {
        assert_eq!(apply_smoothing(5.0, 3.0, 1.0), 3.0);
        assert_eq!(apply_smoothing(5.0, 3.0, 0.0), 5.0);
    }

    #[test]
    fn scenario_window_is_centered() {
        let w = scenario_inflation_window(2.5);
        assert_eq!(w.len(), 17);
        assert_eq!(w[0], 2.1);
        assert_eq!(w[8], 2.5);
        assert_eq!(w[16], 2.9);
    }

    #[test]
    fn scenario_matrix_shape_and_values() {
        let pis = [2.0, 2.5, 3.0];
        let m = scenario_matrix(RuleVariant::Nonlinear, &[2.5, 2.75], &pis, &[-0.8, 0.0, 1.0]);
        assert_eq!(m.len(), 6);
        assert_eq!((m[0].neutral_rate, m[0].output_gap), (2.5, -0.8));
        assert_eq!((m[5].neutral_rate, m[5].output_gap), (2.75, 1.0));
        for curve in &m {
            assert_eq!(curve.rates.len(), pis.len());
        }

        // Nonlinear with the US neutral rate is the kinked engine.
        for (j, &pi) in pis.iter().enumerate() {
            let engine = compute_implied_rate(pi, 0.0, Region::Us);
            assert!((m[1].rates[j] - engine).abs() < 1e-12);
        }

        // Output gaps shift the whole path one for one under Taylor 1999 weights.
        for j in 0..pis.len() {
            assert!((m[2].rates[j] - m[1].rates[j] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn scenario_matrix_follows_variant() {
        let m = scenario_matrix(RuleVariant::Taylor1993, &[2.5], &[2.0], &[1.0]);
        assert!((m[0].rates[0] - taylor_1993(2.5, 2.0, 1.0)).abs() < 1e-12);
        assert!(scenario_matrix(RuleVariant::Taylor1999, &[], &[2.0], &[0.0]).is_empty());
    }

    #[test]
    fn compare_lists_every_variant() {
        let rows = compare_variants(&RuleInput::new(2.2, 0.5, Region::Us));
        let kinds: Vec<_> = rows.iter().map(|(v, _)| *v).collect();
        assert_eq!(kinds, RuleVariant::ALL.to_vec());
        assert!((rows[1].1 - 5.3).abs() < 1e-12);
    }
}
