//! A Rust library for rule-based interpretation of pulmonary function tests:
//! spirometry, bronchodilator response, serial comparison, lung volumes,
//! airway resistance, diffusing capacity and oximetry.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{InterpreterConfig, OutputFormat};
pub use error::{PftError, Result};
pub use models::{Finding, InterpretationResult, MeasurementRecord, RawMeasurementRecord};

// Interpretation
pub use algorithm::pft::categories;
pub use algorithm::{interpret, interpret_raw};

// Record loading
pub use loader::{load_record, parse_record};
