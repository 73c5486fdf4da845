//! Utility functions shared across the interpreter

pub mod numeric;

pub use numeric::{format_fixed, normalize_measurement};
