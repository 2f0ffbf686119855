//! Stance assessment: how an observed policy rate sits against the rule.
//!
//! The deviation is `observed - implied` in basis points. More than 25bp above
//! the rule reads as restrictive, more than 25bp below as accommodative.
//!
//! Beyond 10bp either way the assessment also quotes the move still needed to
//! reach the rule; inside that band the rate counts as on the rule's path.
//!
//! The interval and z-score are illustrative in the same sense as the
//! confidence density: fixed widths, no estimation.

use serde::{Deserialize, Serialize};

use crate::domain::{PolicyDirection, Stance};
use crate::rule::{DEFAULT_SMOOTHING_RHO, apply_smoothing};

/// Deviation (bp) beyond which the stance leaves neutral.
pub const NEUTRAL_BAND_BPS: f64 = 25.0;

/// Deviation (bp) up to which the observed rate counts as on the rule's path.
pub const ALIGNMENT_BAND_BPS: f64 = 10.0;

/// Half-width of the band around the rule rate.
const RULE_BAND: f64 = 0.5;

/// Half-width of the band around the observed rate.
const OBSERVED_BAND: f64 = 0.25;

/// Basis points per unit of z-score.
const BPS_PER_SIGMA: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StanceAssessment {
    pub observed_rate: f64,
    pub implied_rate: f64,
    pub deviation_bps: f64,
    pub stance: Stance,
    /// Illustrative band covering both the rule and the observation.
    pub interval: (f64, f64),
    pub z_score: f64,
    /// Next-step rate under partial adjustment toward the rule.
    pub smoothed_rate: f64,
    pub direction: PolicyDirection,
    /// Size of the remaining move (bp), when outside the alignment band.
    pub additional_bps: Option<f64>,
}

impl StanceAssessment {
    /// Whether the observation sits within the neutral band.
    pub fn is_central(&self) -> bool {
        self.deviation_bps.abs() < NEUTRAL_BAND_BPS
    }

    /// One-sentence reading of the deviation.
    pub fn conclusion(&self) -> String {
        match self.additional_bps {
            Some(bps) => format!(
                "Policy still needs an additional {} of approximately {bps:.0}bp to return to the rule's neutral zone.",
                self.direction.display_name()
            ),
            None => "The observed rate is consistent with the rule's path.".to_string(),
        }
    }
}

pub fn classify(deviation_bps: f64) -> Stance {
    if deviation_bps > NEUTRAL_BAND_BPS {
        Stance::Restrictive
    } else if deviation_bps < -NEUTRAL_BAND_BPS {
        Stance::Accommodative
    } else {
        Stance::Neutral
    }
}

/// Move that closes a deviation: above the rule means cutting.
pub fn direction(deviation_bps: f64) -> PolicyDirection {
    if deviation_bps > ALIGNMENT_BAND_BPS {
        PolicyDirection::Cut
    } else if deviation_bps < -ALIGNMENT_BAND_BPS {
        PolicyDirection::Hike
    } else {
        PolicyDirection::Hold
    }
}

pub fn assess_stance(implied_rate: f64, observed_rate: f64) -> StanceAssessment {
    let deviation_bps = (observed_rate - implied_rate) * 100.0;
    let direction = direction(deviation_bps);
    let interval = (
        (implied_rate - RULE_BAND).min(observed_rate - OBSERVED_BAND),
        (implied_rate + RULE_BAND).max(observed_rate + OBSERVED_BAND),
    );

    StanceAssessment {
        observed_rate,
        implied_rate,
        deviation_bps,
        stance: classify(deviation_bps),
        interval,
        z_score: deviation_bps / BPS_PER_SIGMA,
        smoothed_rate: apply_smoothing(implied_rate, observed_rate, DEFAULT_SMOOTHING_RHO),
        direction,
        additional_bps: (direction != PolicyDirection::Hold).then_some(deviation_bps.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bands() {
        assert_eq!(classify(60.0), Stance::Restrictive);
        assert_eq!(classify(25.0), Stance::Neutral);
        assert_eq!(classify(-25.0), Stance::Neutral);
        assert_eq!(classify(-25.1), Stance::Accommodative);
    }

    #[test]
    fn observed_above_rule_is_restrictive() {
        let a = assess_stance(3.0, 3.64);
        assert!((a.deviation_bps - 64.0).abs() < 1e-9);
        assert_eq!(a.stance, Stance::Restrictive);
        assert!((a.z_score - 1.28).abs() < 1e-9);
        assert!(!a.is_central());
    }

    #[test]
    fn interval_covers_rule_and_observation() {
        let a = assess_stance(5.3, 3.64);
        assert_eq!(a.stance, Stance::Accommodative);
        assert!((a.interval.0 - 3.39).abs() < 1e-12);
        assert!((a.interval.1 - 5.8).abs() < 1e-12);

        let b = assess_stance(5.3, 5.3);
        assert!(b.is_central());
        assert!((b.interval.0 - 4.8).abs() < 1e-12);
        assert!((b.interval.1 - 5.8).abs() < 1e-12);
    }

    #[test]
    fn conclusion_quotes_remaining_move() {
        let a = assess_stance(3.0, 3.64);
        assert_eq!(a.direction, PolicyDirection::Cut);
        assert!((a.additional_bps.unwrap() - 64.0).abs() < 1e-9);
        assert!(a.conclusion().contains("additional cut of approximately 64bp"));

        let b = assess_stance(5.3, 3.64);
        assert_eq!(b.direction, PolicyDirection::Hike);
        assert!(b.conclusion().contains("additional hike of approximately 166bp"));
    }

    #[test]
    fn small_deviation_reads_as_on_path() {
        let a = assess_stance(3.0, 3.08);
        assert_eq!(a.stance, Stance::Neutral);
        assert_eq!(a.direction, PolicyDirection::Hold);
        assert_eq!(a.additional_bps, None);
        assert!(a.conclusion().contains("consistent with the rule's path"));

        // Neutral stance but outside the alignment band still quotes a move.
        let b = assess_stance(3.0, 2.8);
        assert_eq!(b.stance, Stance::Neutral);
        assert_eq!(b.direction, PolicyDirection::Hike);
        assert!(b.conclusion().contains("hike of approximately 20bp"));
    }

    #[test]
    fn direction_bands() {
        assert_eq!(direction(10.0), PolicyDirection::Hold);
        assert_eq!(direction(-10.0), PolicyDirection::Hold);
        assert_eq!(direction(10.5), PolicyDirection::Cut);
        assert_eq!(direction(-10.5), PolicyDirection::Hike);
    }

    #[test]
    fn smoothed_rate_moves_toward_rule() {
        let a = assess_stance(5.0, 3.0);
        assert!((a.smoothed_rate - 3.4).abs() < 1e-12);
    }
}
