//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves inputs against environment defaults
//! - runs the simulation
//! - prints readouts, tables, plots or JSON

use clap::Parser;
use serde::Serialize;

use crate::cli::{Command, CurveArgs, RateArgs, RuleArgs, SampleArgs};
use crate::config::{SimDefaults, check_domain};
use crate::domain::RuleInput;
use crate::error::{AppError, EXIT_RUNTIME};

pub mod pipeline;

/// Entry point for the `taylor` binary.
pub fn run() -> Result<(), AppError> {
    // We want `taylor` and `taylor -r canada` to behave like `taylor tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Rate(args) => {
            crate::logging::init();
            handle_rate(args)
        }
        Command::Curve(args) => {
            crate::logging::init();
            handle_curve(args)
        }
        Command::Density(args) => {
            crate::logging::init();
            handle_density(args)
        }
        Command::Tui(args) => crate::tui::run(args),
    }
}

/// Resolve CLI inputs against environment/built-in defaults.
pub fn resolve_input(args: &RuleArgs) -> Result<RuleInput, AppError> {
    resolve_with(&SimDefaults::from_env()?, args)
}

fn resolve_with(defaults: &SimDefaults, args: &RuleArgs) -> Result<RuleInput, AppError> {
    let input = defaults.resolve(args.inflation, args.gap, args.region);
    if args.strict {
        check_domain(&input)?;
    }
    Ok(input)
}

fn handle_rate(args: RateArgs) -> Result<(), AppError> {
    let input = resolve_input(&args.rule)?;
    let sim = pipeline::simulate(&input);
    let stance = args
        .rule
        .actual
        .map(|observed| crate::report::assess_stance(sim.implied_rate, observed));

    if args.json {
        #[derive(Serialize)]
        struct RateOutput<'a> {
            #[serde(flatten)]
            simulation: &'a pipeline::Simulation,
            #[serde(skip_serializing_if = "Option::is_none")]
            stance: Option<crate::report::StanceAssessment>,
        }
        return print_json(&RateOutput {
            simulation: &sim,
            stance,
        });
    }

    print!(
        "{}",
        crate::report::format_readout(&sim, stance.as_ref(), args.financial_stress)
    );
    Ok(())
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    if !args.gap_scenarios.is_empty() {
        return handle_scenarios(args);
    }

    let sample = args.sample;
    let input = resolve_input(&sample.rule)?;
    let sim = pipeline::simulate(&input);

    if sample.json {
        return print_json(&sim.curve);
    }

    println!(
        "Implied rate vs inflation ({}, gap={:.2}%, live inflation={:.2}%)\n",
        input.region.display_name(),
        input.output_gap,
        input.inflation
    );
    println!("{}", crate::report::format_curve_table(&sim.curve));
    if !sample.no_plot {
        println!("{}", crate::plot::render_curve_plot(&sim.curve, sample.width, sample.height));
    }
    Ok(())
}

fn handle_scenarios(args: CurveArgs) -> Result<(), AppError> {
    let sample = args.sample;
    let input = resolve_input(&sample.rule)?;
    let inflations = crate::rule::scenario_inflation_window(input.inflation);
    let curves = crate::rule::scenario_matrix(
        args.variant,
        &[input.region.neutral_rate()],
        &inflations,
        &args.gap_scenarios,
    );
    tracing::debug!(
        variant = args.variant.display_name(),
        scenarios = curves.len(),
        points = inflations.len(),
        "built gap scenarios"
    );

    if sample.json {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ScenarioOutput<'a> {
            variant: crate::domain::RuleVariant,
            inflation: &'a [f64],
            curves: &'a [crate::rule::ScenarioCurve],
        }
        return print_json(&ScenarioOutput {
            variant: args.variant,
            inflation: &inflations,
            curves: &curves,
        });
    }

    println!(
        "{}: {} rule across output-gap scenarios (r*={:.2}%, live inflation={:.2}%)\n",
        input.region.bank_name(),
        args.variant.display_name(),
        input.region.neutral_rate(),
        input.inflation
    );
    println!(
        "{}",
        crate::report::format_scenario_table(&inflations, &curves, input.inflation)
    );
    if !sample.no_plot {
        let observed = sample.rule.actual.map(|rate| (input.inflation, rate));
        println!(
            "{}",
            crate::plot::render_scenario_plot(&inflations, &curves, observed, sample.width, sample.height)
        );
    }
    Ok(())
}

fn handle_density(args: SampleArgs) -> Result<(), AppError> {
    let input = resolve_input(&args.rule)?;
    let sim = pipeline::simulate(&input);

    if args.json {
        return print_json(&sim.density);
    }

    println!(
        "Confidence density around {:.2}% (sd {:.2}, illustrative)\n",
        sim.implied_rate,
        crate::rule::DENSITY_STD_DEV
    );
    println!("{}", crate::report::format_density_table(&sim.density));
    if !args.no_plot {
        println!("{}", crate::plot::render_density_plot(&sim.density, args.width, args.height));
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let txt = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to encode JSON: {e}")))?;
    println!("{txt}");
    Ok(())
}

/// Rewrite argv so `taylor` defaults to `taylor tui`.
///
/// Rules:
/// - `taylor`                      -> `taylor tui`
/// - `taylor -r canada ...`        -> `taylor tui -r canada ...`
/// - `taylor --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "rate" | "curve" | "density" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(argv(&["taylor"])), argv(&["taylor", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["taylor", "-r", "canada"])),
            argv(&["taylor", "tui", "-r", "canada"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        for items in [&["taylor", "rate", "-i", "3"][..], &["taylor", "--help"], &["taylor", "-V"]] {
            assert_eq!(rewrite_args(argv(items)), argv(items));
        }
    }

    #[test]
    fn strict_mode_rejects_out_of_range_inputs() {
        let defaults = SimDefaults::default();
        let args = RuleArgs {
            inflation: Some(7.5),
            gap: Some(0.0),
            strict: true,
            ..RuleArgs::default()
        };
        let err = resolve_with(&defaults, &args).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_INPUT);

        let lenient = RuleArgs { strict: false, ..args };
        assert_eq!(resolve_with(&defaults, &lenient).unwrap().inflation, 7.5);
    }

    #[test]
    fn unset_flags_fall_back_to_defaults() {
        let defaults = SimDefaults::default();
        let input = resolve_with(&defaults, &RuleArgs { strict: true, ..RuleArgs::default() }).unwrap();
        assert_eq!(input, RuleInput::new(2.2, 0.5, crate::domain::Region::Us));
    }
}
