//! Shared "simulate" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place guarantees the rate readout, the curve and the
//! density are always computed from the same `(inflation, gap, region)` triple.
//! The front-ends then only decide how to present the result.

use serde::{Deserialize, Serialize};

use crate::domain::{CurvePoint, DensityPoint, Regime, RegionParameters, RuleInput};
use crate::rule::{
    current_sample_index, generate_confidence_density, generate_rate_curve, evaluate, regime,
};

/// All computed outputs for one input triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub input: RuleInput,
    pub params: RegionParameters,
    pub regime: Regime,
    pub implied_rate: f64,
    pub curve: Vec<CurvePoint>,
    pub density: Vec<DensityPoint>,
    /// Index into `curve` of the point nearest the live inflation input.
    pub current_index: Option<usize>,
}

/// Run the rule, the curve sampler and the density sampler for `input`.
pub fn simulate(input: &RuleInput) -> Simulation {
    let implied_rate = evaluate(input).implied_rate;
    let curve = generate_rate_curve(input.output_gap, input.region, input.inflation);
    let density = generate_confidence_density(implied_rate);
    let current_index = current_sample_index(&curve);

    tracing::debug!(
        inflation = input.inflation,
        output_gap = input.output_gap,
        region = input.region.display_name(),
        implied_rate,
        curve_points = curve.len(),
        density_points = density.len(),
        marked = ?current_index,
        "simulated policy rule"
    );

    Simulation {
        input: *input,
        params: input.region.parameters(),
        regime: regime(input.inflation),
        implied_rate,
        curve,
        density,
        current_index,
    }
}
