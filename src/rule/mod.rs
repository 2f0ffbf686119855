//! Policy-rate rules.
//!
//! `engine` holds the kinked rule driving the simulator together with its curve
//! and density samplers; `variants` holds the textbook rules it is compared
//! against.

pub mod engine;
pub mod variants;

pub use engine::*;
pub use variants::*;
