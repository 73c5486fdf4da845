//! Bronchodilator response
//!
//! A significant response needs both an absolute FEV1 gain of at least 200 mL
//! and a relative gain of at least 12%.

use log::{debug, trace};

use super::categories::BronchodilatorResponse;
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;
use crate::utils::numeric::percent_change;

const MIN_FEV1_GAIN_LITRES: f64 = 0.2;
const MIN_FEV1_GAIN_PERCENT: f64 = 12.0;

pub const NOT_ADMINISTERED: &str = "Bronchodilator not administered.";
pub const SIGNIFICANT_RESPONSE: &str = "Significant improvement post bronchodilator. Consistent \
     with a diagnosis of asthma, clinical correlation is required.";
pub const NO_SIGNIFICANT_RESPONSE: &str = "No significant improvement post bronchodilator.";

/// Evaluate the response to a bronchodilator
///
/// Returns `None` when a bronchodilator was given but the pre/post FEV1 pair
/// is incomplete.
#[must_use]
pub fn evaluate_bronchodilator(
    record: &MeasurementRecord,
) -> Option<Finding<BronchodilatorResponse>> {
    if !record.bronchodilator_given {
        return Some(Finding::new(
            BronchodilatorResponse::NotAdministered,
            NOT_ADMINISTERED,
        ));
    }

    let (Some(pre), Some(post)) = (record.fev1_observed, record.post_fev1_observed) else {
        trace!("Pre or post bronchodilator FEV1 not provided, skipping response");
        return None;
    };

    let delta = post - pre;
    let Some(percent) = percent_change(pre, post) else {
        trace!("Pre bronchodilator FEV1 of {pre} L gives no relative change");
        return None;
    };

    debug!("Bronchodilator response: {delta:.3} L ({percent:.1}%)");

    if delta >= MIN_FEV1_GAIN_LITRES && percent >= MIN_FEV1_GAIN_PERCENT {
        Some(Finding::new(
            BronchodilatorResponse::Significant,
            SIGNIFICANT_RESPONSE,
        ))
    } else {
        Some(Finding::new(
            BronchodilatorResponse::NotSignificant,
            NO_SIGNIFICANT_RESPONSE,
        ))
    }
}
