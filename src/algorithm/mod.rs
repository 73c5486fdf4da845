//! Algorithm implementations for clinical test interpretation
//!
//! This module contains the decision-rule engines that turn measurement
//! records into structured clinical findings.

pub mod pft;

pub use pft::{interpret, interpret_raw};
