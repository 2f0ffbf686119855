//! Plain-terminal plots for the one-shot commands.

pub mod ascii;

pub use ascii::{render_curve_plot, render_density_plot, render_scenario_plot};
