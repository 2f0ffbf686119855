//! Domain types used throughout the simulator.
//!
//! This module defines:
//!
//! - input selectors (`Region`, `RuleVariant`)
//! - rule inputs and outputs (`RuleInput`, `RuleOutput`)
//! - chart samples (`CurvePoint`, `DensityPoint`)
//! - stance labels for comparing an observed rate with the rule (`Stance`,
//!   `PolicyDirection`)

pub mod types;

pub use types::*;
