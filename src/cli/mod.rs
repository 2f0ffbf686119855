//! Command-line parsing for the policy rule simulator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! rule code. Inputs left unset here are filled from `config::SimDefaults`.

use clap::{Args, Parser, Subcommand};

use crate::domain::{Region, RuleVariant};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "taylor", version, about = "Policy-rate rule simulator (kinked Taylor rule)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the implied policy rate, rule comparison and optional stance.
    Rate(RateArgs),
    /// Print the implied rate across the inflation grid (1.00%..3.00%), or
    /// output-gap scenario paths with `--gap-scenario`.
    Curve(CurveArgs),
    /// Print the illustrative confidence density around the implied rate.
    Density(SampleArgs),
    /// Launch the interactive simulator.
    Tui(RuleArgs),
}

/// Rule inputs shared by every subcommand.
#[derive(Debug, Args, Clone, Default)]
pub struct RuleArgs {
    /// Core inflation (%). Defaults to $TAYLOR_INFLATION or 2.2.
    #[arg(short = 'i', long, allow_hyphen_values = true)]
    pub inflation: Option<f64>,

    /// Output gap (% of potential). Defaults to $TAYLOR_GAP or 0.5.
    #[arg(short = 'g', long, allow_hyphen_values = true)]
    pub gap: Option<f64>,

    /// Region whose neutral rate applies. Defaults to $TAYLOR_REGION or us.
    #[arg(short = 'r', long, value_enum, ignore_case = true)]
    pub region: Option<Region>,

    /// Observed policy rate (%) to assess the stance against.
    #[arg(long, allow_hyphen_values = true)]
    pub actual: Option<f64>,

    /// Reject inflation outside [1, 5] or output gap outside [-3, 3].
    #[arg(long)]
    pub strict: bool,
}

/// Options for the `rate` readout.
#[derive(Debug, Args, Clone)]
pub struct RateArgs {
    #[command(flatten)]
    pub rule: RuleArgs,

    /// Also show the post-crisis rule with this financial-stress reading.
    #[arg(long, allow_hyphen_values = true)]
    pub financial_stress: Option<f64>,

    /// Print the full simulation as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Options for the sampled outputs (`curve`, `density`).
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub rule: RuleArgs,

    /// Print the samples as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Skip the ASCII plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 61)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,
}

/// Options for `curve`.
#[derive(Debug, Args, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    pub sample: SampleArgs,

    /// Output gap (%) of one scenario path; repeat for several. Switches the
    /// output to the scenario view around the live inflation.
    #[arg(long = "gap-scenario", allow_hyphen_values = true)]
    pub gap_scenarios: Vec<f64>,

    /// Rule evaluated along the scenario paths.
    #[arg(long, value_enum, default_value_t = RuleVariant::Nonlinear)]
    pub variant: RuleVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rate_flags() {
        let cli = Cli::parse_from(["taylor", "rate", "-i", "3.0", "-g", "-1.5", "-r", "canada", "--actual", "2.25"]);
        let Command::Rate(args) = cli.command else {
            panic!("expected rate");
        };
        assert_eq!(args.rule.inflation, Some(3.0));
        assert_eq!(args.rule.gap, Some(-1.5));
        assert_eq!(args.rule.region, Some(Region::Canada));
        assert_eq!(args.rule.actual, Some(2.25));
        assert!(!args.rule.strict);
        assert!(!args.json);
    }

    #[test]
    fn region_accepts_display_spelling() {
        let cli = Cli::parse_from(["taylor", "curve", "--region", "US", "--json"]);
        let Command::Curve(args) = cli.command else {
            panic!("expected curve");
        };
        assert_eq!(args.sample.rule.region, Some(Region::Us));
        assert!(args.sample.json);
        assert_eq!(args.sample.width, 61);
        assert!(args.gap_scenarios.is_empty());
        assert_eq!(args.variant, RuleVariant::Nonlinear);
    }

    #[test]
    fn region_flag_and_environment_share_spellings() {
        for label in ["us", "US", "usa", "canada", "Canada", "ca", "can", "CAN"] {
            let cli = Cli::parse_from(["taylor", "rate", "-r", label]);
            let Command::Rate(args) = cli.command else {
                panic!("expected rate");
            };
            assert_eq!(args.rule.region, Region::parse_label(label), "label={label}");
            assert!(args.rule.region.is_some());
        }
    }

    #[test]
    fn parses_gap_scenarios_and_variant() {
        let cli = Cli::parse_from([
            "taylor",
            "curve",
            "--gap-scenario",
            "-0.8",
            "--gap-scenario",
            "0.4",
            "--variant",
            "taylor1999",
            "--no-plot",
        ]);
        let Command::Curve(args) = cli.command else {
            panic!("expected curve");
        };
        assert_eq!(args.gap_scenarios, vec![-0.8, 0.4]);
        assert_eq!(args.variant, RuleVariant::Taylor1999);
        assert!(args.sample.no_plot);
    }

    #[test]
    fn density_takes_sample_options() {
        let cli = Cli::parse_from(["taylor", "density", "--width", "40", "-i", "3.1"]);
        let Command::Density(args) = cli.command else {
            panic!("expected density");
        };
        assert_eq!(args.width, 40);
        assert_eq!(args.rule.inflation, Some(3.1));
    }

    #[test]
    fn unset_inputs_stay_unset() {
        let cli = Cli::parse_from(["taylor", "tui"]);
        let Command::Tui(args) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(args.inflation, None);
        assert_eq!(args.gap, None);
        assert_eq!(args.region, None);
    }
}
