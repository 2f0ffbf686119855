//! Shared domain types.
//!
//! Everything here is a transient value: recomputed on every input change,
//! compared by value, and serializable so the presentation layer can consume
//! engine output as JSON.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Inflation target used by every region's rule (percent).
pub const INFLATION_TARGET: f64 = 2.0;

/// Which central bank's parameters to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Region {
    #[serde(rename = "US")]
    #[value(name = "us", aliases = ["usa"])]
    Us,
    #[serde(rename = "Canada")]
    #[value(name = "canada", aliases = ["ca", "can"])]
    Canada,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Us, Region::Canada];

    /// Neutral nominal policy rate r* (percent).
    pub fn neutral_rate(self) -> f64 {
        match self {
            Region::Us => 2.5,
            Region::Canada => 2.75,
        }
    }

    pub fn parameters(self) -> RegionParameters {
        RegionParameters {
            neutral_rate: self.neutral_rate(),
            target: INFLATION_TARGET,
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Canada => "Canada",
        }
    }

    /// Name of the central bank behind the region's rule.
    pub fn bank_name(self) -> &'static str {
        match self {
            Region::Us => "Federal Reserve",
            Region::Canada => "Bank of Canada",
        }
    }

    pub fn toggle(self) -> Region {
        match self {
            Region::Us => Region::Canada,
            Region::Canada => Region::Us,
        }
    }

    /// Parse a region label, case-insensitively; same spellings as `--region`.
    pub fn parse_label(s: &str) -> Option<Region> {
        <Region as ValueEnum>::from_str(s.trim(), true).ok()
    }
}

/// Parameters derived deterministically from a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionParameters {
    pub neutral_rate: f64,
    pub target: f64,
}

/// User-controlled rule inputs.
///
/// No validation is attached to the type: the engine accepts any real value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleInput {
    /// Core inflation (percent).
    pub inflation: f64,
    /// Output gap (percent of potential output; positive = running hot).
    pub output_gap: f64,
    pub region: Region,
}

impl RuleInput {
    pub fn new(inflation: f64, output_gap: f64, region: Region) -> Self {
        Self {
            inflation,
            output_gap,
            region,
        }
    }
}

/// Scalar result of the rule for one input triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOutput {
    pub implied_rate: f64,
}

/// One sample of the implied-rate-versus-inflation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Grid inflation, rounded to 2 decimals.
    pub inflation: f64,
    pub rate: f64,
    /// The rate again, present only on the grid point nearest the live input.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current_sample: Option<f64>,
}

/// One sample of the illustrative confidence density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityPoint {
    /// Policy rate value (percent).
    pub x: f64,
    pub density: f64,
}

/// Inflation-response regime selected by the kink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Inflation at or below the threshold.
    Base,
    /// Inflation strictly above the threshold.
    Stressed,
}

impl Regime {
    pub fn display_name(self) -> &'static str {
        match self {
            Regime::Base => "base response",
            Regime::Stressed => "stressed response",
        }
    }
}

/// Textbook rule variants available for comparison with the kinked rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuleVariant {
    /// Taylor (1993): equal 0.5 weights on the inflation and output gaps.
    #[value(name = "taylor1993")]
    Taylor1993,
    /// Taylor (1999): output-gap weight raised to 1.0.
    #[value(name = "taylor1999")]
    Taylor1999,
    /// Taylor (1999) weights with a steeper inflation response above a threshold.
    Nonlinear,
}

impl RuleVariant {
    pub const ALL: [RuleVariant; 3] = [
        RuleVariant::Taylor1993,
        RuleVariant::Taylor1999,
        RuleVariant::Nonlinear,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            RuleVariant::Taylor1993 => "Taylor 1993",
            RuleVariant::Taylor1999 => "Taylor 1999",
            RuleVariant::Nonlinear => "Nonlinear (kinked)",
        }
    }
}

/// Policy stance implied by the gap between an observed rate and the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Observed rate sits clearly above the rule.
    Restrictive,
    Neutral,
    /// Observed rate sits clearly below the rule.
    Accommodative,
}

impl Stance {
    pub fn display_name(self) -> &'static str {
        match self {
            Stance::Restrictive => "Restrictive",
            Stance::Neutral => "Neutral",
            Stance::Accommodative => "Accommodative",
        }
    }
}

/// Which way the observed rate would have to move to reach the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyDirection {
    Cut,
    Hike,
    Hold,
}

impl PolicyDirection {
    pub fn display_name(self) -> &'static str {
        match self {
            PolicyDirection::Cut => "cut",
            PolicyDirection::Hike => "hike",
            PolicyDirection::Hold => "hold",
        }
    }
}
