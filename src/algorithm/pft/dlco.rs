//! Diffusing capacity (DLCO) classification
//!
//! % predicted is preferred. Without it the observed value is placed against
//! its limits, and an impairment is graded from an estimated % predicted that
//! assumes the LLN sits at 75% predicted.

use log::{debug, trace};

use super::categories::DiffusionStatus;
use super::severity::{SeverityLevel, dlco_severity, estimated_dlco_severity};
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;
use crate::utils::numeric::{format_fixed, in_range};

const NORMAL_PERCENT_RANGE: (f64, f64) = (75.0, 125.0);
const LLN_PERCENT_PREDICTED: f64 = 75.0;

/// Classify diffusing capacity
#[must_use]
pub fn classify_dlco(record: &MeasurementRecord) -> Option<Finding<DiffusionStatus>> {
    let hb = if record.hemoglobin_corrected {
        "after Hb correction"
    } else {
        "uncorrected for Hb"
    };

    let finding = if let Some(pct) = record.dlco_percent_predicted {
        classify_percent_predicted(pct, hb)
    } else if let (Some(observed), Some(lln), Some(uln)) =
        (record.dlco_observed, record.dlco_lln, record.dlco_uln)
    {
        classify_against_limits(observed, lln, uln, hb)
    } else {
        trace!("DLCO % predicted and limits not provided, skipping diffusing capacity");
        return None;
    };

    debug!("DLCO: {:?}", finding.category);
    Some(finding)
}

fn classify_percent_predicted(pct: f64, hb: &str) -> Finding<DiffusionStatus> {
    let (low, high) = NORMAL_PERCENT_RANGE;
    let shown = format_fixed(pct, 0);

    if in_range(pct, low, high) {
        Finding::new(
            DiffusionStatus::Normal,
            format!("Normal diffusing capacity {hb}."),
        )
    } else if pct > high {
        Finding::new(
            DiffusionStatus::Increased,
            format!("Increased diffusing capacity {hb} (DLCO {shown}% predicted)."),
        )
    } else {
        let severity = dlco_severity(pct);
        Finding::new(
            DiffusionStatus::Impaired { severity },
            format!("{severity} diffusing capacity impairment {hb} (DLCO {shown}% predicted)."),
        )
    }
}

fn classify_against_limits(observed: f64, lln: f64, uln: f64, hb: &str) -> Finding<DiffusionStatus> {
    if in_range(observed, lln, uln) {
        Finding::new(
            DiffusionStatus::Normal,
            format!("Normal diffusing capacity {hb}."),
        )
    } else if observed > uln {
        Finding::new(
            DiffusionStatus::Increased,
            format!("Increased diffusing capacity {hb}."),
        )
    } else {
        let severity = if lln > 0.0 {
            estimated_dlco_severity(observed / lln * LLN_PERCENT_PREDICTED)
        } else {
            SeverityLevel::Mild
        };
        Finding::new(
            DiffusionStatus::Impaired { severity },
            format!("{severity} diffusing capacity impairment {hb}."),
        )
    }
}
