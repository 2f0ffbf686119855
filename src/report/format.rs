//! Formatted terminal output: the rate readout, the sample tables and the
//! output-gap scenario table.
//!
//! We keep formatting code in one place so:
//! - the rule code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::Simulation;
use crate::domain::{CurvePoint, DensityPoint};
use crate::report::stance::StanceAssessment;
use crate::rule::{
    DENSITY_STD_DEV, KINK_THRESHOLD, ScenarioCurve, compare_variants, nonlinear_premium_bps,
    post_crisis_adjusted, response_coefficient,
};

/// Format the readout: inputs, rule value, variant comparison and optional stance.
pub fn format_readout(
    sim: &Simulation,
    stance: Option<&StanceAssessment>,
    financial_stress: Option<f64>,
) -> String {
    let mut out = String::new();
    let input = &sim.input;

    out.push_str(&format!(
        "=== taylor - Policy Rule Simulator ({}) ===\n",
        input.region.bank_name()
    ));
    out.push_str(&format!(
        "Inputs: inflation={:.2}% | output gap={:.2}% | region={}\n",
        input.inflation,
        input.output_gap,
        input.region.display_name()
    ));
    out.push_str(&format!(
        "Parameters: r*={:.2}% | target={:.2}% | threshold={:.2}%\n",
        sim.params.neutral_rate, sim.params.target, KINK_THRESHOLD
    ));
    out.push_str(&format!(
        "Regime: {} (inflation coefficient {:.2})\n",
        sim.regime.display_name(),
        response_coefficient(input.inflation)
    ));

    out.push_str(&format!("\nImplied policy rate: {:.2}%\n", sim.implied_rate));
    out.push_str(&format!(
        "Confidence density: mean {:.2}% | sd {:.2} (illustrative)\n",
        sim.implied_rate, DENSITY_STD_DEV
    ));

    out.push_str("\nRule comparison:\n");
    for (variant, rate) in compare_variants(input) {
        out.push_str(&format!("  {:<20} {:>8.2}%\n", variant.display_name(), rate));
    }
    out.push_str(&format!(
        "  {:<20} {:>+8.0}bp\n",
        "Nonlinear premium",
        nonlinear_premium_bps(input)
    ));
    if let Some(stress) = financial_stress {
        let adjusted = post_crisis_adjusted(sim.params.neutral_rate, input.inflation, input.output_gap, stress);
        out.push_str(&format!(
            "  {:<20} {:>8.2}% (stress={stress:.2})\n",
            "Post-crisis adjusted", adjusted
        ));
    }

    if let Some(a) = stance {
        out.push_str("\nStance:\n");
        out.push_str(&format!("  Observed rate: {:.2}%\n", a.observed_rate));
        out.push_str(&format!(
            "  Deviation: {:+.0}bp -> {}\n",
            a.deviation_bps,
            a.stance.display_name()
        ));
        out.push_str(&format!(
            "  Interval: [{:.2}%, {:.2}%] | z~{:.1} ({})\n",
            a.interval.0,
            a.interval.1,
            a.z_score,
            if a.is_central() { "center" } else { "edge" }
        ));
        out.push_str(&format!("  Smoothed next step: {:.2}%\n", a.smoothed_rate));
        out.push_str(&format!("  Conclusion: {}\n", a.conclusion()));
    }

    out
}

/// Format the rate curve as a table; the marked row carries `*`.
pub fn format_curve_table(curve: &[CurvePoint]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<2}{:>10} {:>10}\n", "", "inflation", "rate"));
    out.push_str(&format!("{:<2}{:->10} {:->10}\n", "", "", ""));
    for p in curve {
        let mark = if p.current_sample.is_some() { "*" } else { "" };
        out.push_str(&format!("{mark:<2}{:>9.2}% {:>9.2}%\n", p.inflation, p.rate));
    }
    out
}

/// Format the density samples as a table.
pub fn format_density_table(density: &[DensityPoint]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>10} {:>10}\n", "rate", "density"));
    out.push_str(&format!("{:->10} {:->10}\n", "", ""));
    for p in density {
        out.push_str(&format!("{:>9.2}% {:>10.4}\n", p.x, p.density));
    }
    out
}

/// Format scenario curves as one column per output gap.
///
/// The row nearest `current_inflation` carries `*`, as in the curve table.
pub fn format_scenario_table(inflations: &[f64], curves: &[ScenarioCurve], current_inflation: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<2}{:>10}", "", "inflation"));
    for c in curves {
        out.push_str(&format!(" {:>10}", format!("gap {:+.2}", c.output_gap)));
    }
    out.push('\n');
    out.push_str(&format!("{:<2}{:->10}", "", ""));
    for _ in curves {
        out.push_str(&format!(" {:->10}", ""));
    }
    out.push('\n');

    let current = inflations
        .iter()
        .enumerate()
        .filter(|(_, pi)| pi.is_finite())
        .min_by(|a, b| (a.1 - current_inflation).abs().total_cmp(&(b.1 - current_inflation).abs()))
        .map(|(i, _)| i);

    for (j, pi) in inflations.iter().enumerate() {
        let mark = if current == Some(j) { "*" } else { "" };
        out.push_str(&format!("{mark:<2}{pi:>9.2}%"));
        for c in curves {
            match c.rates.get(j) {
                Some(rate) => out.push_str(&format!(" {rate:>9.2}%")),
                None => out.push_str(&format!(" {:>10}", "-")),
            }
        }
        out.push('\n');
    }
    out
}
