//! Normal probability density.
//!
//! `pdf(z; σ) = 1 / (σ √(2π)) · exp(-z² / (2σ²))`, where `z = x - μ`.
//!
//! The density is evaluated on the deviation from the mean rather than on
//! `(x, μ)` so callers that sample symmetric offsets get bitwise-symmetric
//! densities.

use std::f64::consts::PI;

/// Peak height of a normal density with standard deviation `std_dev`.
pub fn normal_peak(std_dev: f64) -> f64 {
    1.0 / (std_dev * (2.0 * PI).sqrt())
}

/// Normal density at deviation `dev` from the mean.
pub fn normal_pdf(dev: f64, std_dev: f64) -> f64 {
    let z = dev / std_dev;
    normal_peak(std_dev) * (-0.5 * z * z).exp()
}
