//! Mathematical constants

/// The reference value of π that estimates are scored against
pub const PI: f64 = std::f64::consts::PI;
