//! Simulator defaults and input bounds.
//!
//! Precedence for each input: CLI flag, then environment (optionally loaded
//! from `.env`), then the built-in default.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `TAYLOR_INFLATION` | initial core inflation (%) |
//! | `TAYLOR_GAP` | initial output gap (%) |
//! | `TAYLOR_REGION` | `us` or `canada` |

use crate::domain::{Region, RuleInput};
use crate::error::{AppError, EXIT_INVALID_INPUT};

pub const ENV_INFLATION: &str = "TAYLOR_INFLATION";
pub const ENV_GAP: &str = "TAYLOR_GAP";
pub const ENV_REGION: &str = "TAYLOR_REGION";

/// Inflation slider range (%).
pub const INFLATION_BOUNDS: (f64, f64) = (1.0, 5.0);

/// Output-gap slider range (%).
pub const GAP_BOUNDS: (f64, f64) = (-3.0, 3.0);

/// Slider increment for both inputs.
pub const SLIDER_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimDefaults {
    pub inflation: f64,
    pub output_gap: f64,
    pub region: Region,
}

impl Default for SimDefaults {
    fn default() -> Self {
        Self {
            inflation: 2.2,
            output_gap: 0.5,
            region: Region::Us,
        }
    }
}

impl SimDefaults {
    /// Load defaults from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults from an arbitrary key lookup; unset keys keep built-ins.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut out = Self::default();

        if let Some(raw) = lookup(ENV_INFLATION) {
            out.inflation = parse_number(ENV_INFLATION, &raw)?;
        }
        if let Some(raw) = lookup(ENV_GAP) {
            out.output_gap = parse_number(ENV_GAP, &raw)?;
        }
        if let Some(raw) = lookup(ENV_REGION) {
            out.region = Region::parse_label(&raw).ok_or_else(|| {
                AppError::new(
                    EXIT_INVALID_INPUT,
                    format!("Invalid {ENV_REGION}='{raw}' (expected 'us' or 'canada')."),
                )
            })?;
        }

        tracing::debug!(?out, "resolved simulator defaults");
        Ok(out)
    }

    /// Fill unset inputs from the defaults.
    pub fn resolve(&self, inflation: Option<f64>, output_gap: Option<f64>, region: Option<Region>) -> RuleInput {
        RuleInput::new(
            inflation.unwrap_or(self.inflation),
            output_gap.unwrap_or(self.output_gap),
            region.unwrap_or(self.region),
        )
    }
}

/// Reject inputs outside the slider ranges (the `--strict` contract).
pub fn check_domain(input: &RuleInput) -> Result<(), AppError> {
    if !within(input.inflation, INFLATION_BOUNDS) {
        return Err(AppError::out_of_domain("inflation", input.inflation, INFLATION_BOUNDS));
    }
    if !within(input.output_gap, GAP_BOUNDS) {
        return Err(AppError::out_of_domain("output gap", input.output_gap, GAP_BOUNDS));
    }
    Ok(())
}

/// Move a slider value by `steps` increments, staying on the 0.1 grid and in bounds.
pub fn nudge(value: f64, steps: i32, bounds: (f64, f64)) -> f64 {
    let next = value + SLIDER_STEP * steps as f64;
    let snapped = (next / SLIDER_STEP).round() * SLIDER_STEP;
    crate::math::round2(snapped.clamp(bounds.0, bounds.1))
}

fn within(v: f64, bounds: (f64, f64)) -> bool {
    v.is_finite() && v >= bounds.0 && v <= bounds.1
}

fn parse_number(key: &str, raw: &str) -> Result<f64, AppError> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|e| AppError::new(EXIT_INVALID_INPUT, format!("Invalid {key}='{raw}': {e}")))?;
    if !v.is_finite() {
        return Err(AppError::new(EXIT_INVALID_INPUT, format!("Invalid {key}='{raw}': not finite")));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn builtin_defaults_match_widget_initial_state() {
        let d = SimDefaults::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(d, SimDefaults::default());
        assert_eq!(d.inflation, 2.2);
        assert_eq!(d.output_gap, 0.5);
        assert_eq!(d.region, Region::Us);
    }

    #[test]
    fn environment_overrides_defaults() {
        let d = SimDefaults::from_lookup(lookup_from(&[
            (ENV_INFLATION, " 3.1 "),
            (ENV_GAP, "-1.5"),
            (ENV_REGION, "Canada"),
        ]))
        .unwrap();
        assert_eq!(d.inflation, 3.1);
        assert_eq!(d.output_gap, -1.5);
        assert_eq!(d.region, Region::Canada);
    }

    #[test]
    fn bad_environment_values_are_input_errors() {
        let err = SimDefaults::from_lookup(lookup_from(&[(ENV_GAP, "wide")])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
        assert!(err.message().contains(ENV_GAP));

        let err = SimDefaults::from_lookup(lookup_from(&[(ENV_REGION, "mars")])).unwrap_err();
        assert!(err.message().contains(ENV_REGION));

        assert!(SimDefaults::from_lookup(lookup_from(&[(ENV_INFLATION, "NaN")])).is_err());
    }

    #[test]
    fn flags_take_precedence() {
        let d = SimDefaults::default();
        let input = d.resolve(Some(4.0), None, Some(Region::Canada));
        assert_eq!(input, RuleInput::new(4.0, 0.5, Region::Canada));
    }

    #[test]
    fn domain_check_uses_slider_bounds() {
        assert!(check_domain(&RuleInput::new(1.0, -3.0, Region::Us)).is_ok());
        assert!(check_domain(&RuleInput::new(5.0, 3.0, Region::Us)).is_ok());

        let err = check_domain(&RuleInput::new(5.5, 0.0, Region::Us)).unwrap_err();
        assert!(err.message().contains("inflation"));
        let err = check_domain(&RuleInput::new(2.0, -3.2, Region::Us)).unwrap_err();
        assert!(err.message().contains("output gap"));
        assert!(check_domain(&RuleInput::new(f64::NAN, 0.0, Region::Us)).is_err());
    }

    #[test]
    fn nudge_snaps_and_clamps() {
        assert_eq!(nudge(2.2, 1, INFLATION_BOUNDS), 2.3);
        assert_eq!(nudge(2.2, -1, INFLATION_BOUNDS), 2.1);
        assert_eq!(nudge(4.95, 1, INFLATION_BOUNDS), 5.0);
        assert_eq!(nudge(1.0, -1, INFLATION_BOUNDS), 1.0);
        assert_eq!(nudge(-2.95, -1, GAP_BOUNDS), -3.0);
        assert_eq!(nudge(0.0, 0, GAP_BOUNDS), 0.0);
    }
}
