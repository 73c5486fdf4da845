//! Airway resistance classification

use log::{debug, trace};

use super::categories::ResistanceStatus;
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;

const HIGH_RAW_PERCENT_PREDICTED: f64 = 177.0;
const LOW_RAW_PERCENT_PREDICTED: f64 = 66.0;

/// Classify airway resistance
///
/// The limit checks and the % predicted checks are independent: either one
/// alone is enough to call resistance increased (or reduced).
#[must_use]
pub fn classify_resistance(record: &MeasurementRecord) -> Option<Finding<ResistanceStatus>> {
    let Some(raw) = record.raw_observed else {
        trace!("Raw not provided, skipping airway resistance");
        return None;
    };
    let pct = record.raw_percent_predicted;

    let increased = record.raw_uln.is_some_and(|uln| raw > uln)
        || pct.is_some_and(|p| p > HIGH_RAW_PERCENT_PREDICTED);
    let reduced = record.raw_lln.is_some_and(|lln| raw < lln)
        || pct.is_some_and(|p| p < LOW_RAW_PERCENT_PREDICTED);

    let finding = if increased {
        Finding::new(ResistanceStatus::Increased, "Increased airway resistance.")
    } else if reduced {
        Finding::new(ResistanceStatus::Reduced, "Reduced airway resistance.")
    } else {
        Finding::new(ResistanceStatus::Normal, "Normal airway resistance.")
    };

    debug!("Airway resistance {raw}: {:?}", finding.category);
    Some(finding)
}
