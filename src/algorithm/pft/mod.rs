//! Pulmonary function test interpretation engine
//!
//! Each classifier reads the same immutable [`MeasurementRecord`] and fills one
//! section of the [`InterpretationResult`]. Only the summary depends on the
//! other sections. Missing measurements never raise errors; they suppress the
//! findings that depend on them.

pub mod bronchodilator;
pub mod categories;
pub mod comparison;
pub mod dlco;
pub mod lung_volumes;
pub mod oximetry;
pub mod resistance;
pub mod severity;
pub mod spirometry;
pub mod summary;

use log::debug;

use crate::models::interpretation::InterpretationResult;
use crate::models::measurement::{MeasurementRecord, RawMeasurementRecord};
use summary::SummaryInputs;

/// Interpret a complete PFT measurement record
///
/// Pure and deterministic: the same record always yields the same result.
/// Non-finite values are treated as not provided.
#[must_use]
pub fn interpret(record: &MeasurementRecord) -> InterpretationResult {
    let record = record.sanitized();

    let spirometry = spirometry::classify_spirometry(&record);
    let bronchodilator = bronchodilator::evaluate_bronchodilator(&record);
    let comparison = comparison::evaluate_comparison(&record);
    let lung_volumes = lung_volumes::classify_lung_volumes(&record);
    let resistance = resistance::classify_resistance(&record);
    let dlco = dlco::classify_dlco(&record);
    let oximetry = oximetry::evaluate_oximetry(&record);

    let summary = summary::synthesize_summary(&SummaryInputs {
        spirometry: &spirometry,
        bronchodilator: bronchodilator.as_ref(),
        lung_volumes: &lung_volumes,
        resistance: resistance.as_ref(),
        dlco: dlco.as_ref(),
        oximetry: oximetry.as_ref(),
    });

    debug!("Interpretation complete: {}", summary.text);

    InterpretationResult {
        spirometry: spirometry.findings,
        bronchodilator,
        comparison,
        lung_volumes,
        resistance,
        dlco,
        oximetry,
        summary,
    }
}

/// Normalize a form-captured record and interpret it
#[must_use]
pub fn interpret_raw(raw: &RawMeasurementRecord) -> InterpretationResult {
    interpret(&raw.normalize())
}
