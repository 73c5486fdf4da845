//! Data models for PFT interpretation
//!
//! The input side is a measurement record, the output side an interpretation
//! result made of tagged findings.

pub mod interpretation;
pub mod measurement;

pub use interpretation::{Finding, GUIDELINE_CITATION, InterpretationResult};
pub use measurement::{MeasurementRecord, RawMeasurementRecord};
