//! Reporting utilities: stance assessment and formatted terminal output.

pub mod format;
pub mod stance;

pub use format::{format_curve_table, format_density_table, format_readout, format_scenario_table};
pub use stance::{StanceAssessment, assess_stance, classify, direction};
