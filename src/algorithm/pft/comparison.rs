//! Comparison with a previous test

use itertools::Itertools;
use log::{debug, trace};

use super::categories::{ChangeDirection, MetricChange, SerialChange, SerialMetric};
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;
use crate::utils::numeric::{format_fixed, percent_change};

pub const NO_SIGNIFICANT_CHANGE: &str = "Compared to previous: no significant change.";

/// Compare FEV1, FVC and DLCO with the previous test
///
/// Returns `None` unless a previous test was supplied. Each metric is
/// evaluated on its own and skipped when either value is missing.
#[must_use]
pub fn evaluate_comparison(record: &MeasurementRecord) -> Option<Finding<SerialChange>> {
    if !record.has_previous_test {
        return None;
    }

    let pairs = [
        (SerialMetric::Fev1, record.fev1_observed, record.previous_fev1_observed),
        (SerialMetric::Fvc, record.fvc_observed, record.previous_fvc_observed),
        (SerialMetric::Dlco, record.dlco_observed, record.previous_dlco_observed),
    ];

    let serial = SerialChange {
        changes: pairs
            .into_iter()
            .filter_map(|(metric, current, previous)| {
                significant_change(metric, current?, previous?)
            })
            .collect(),
    };

    let text = if serial.is_significant() {
        format!(
            "Compared to previous: {}.",
            serial.changes.iter().map(describe_change).join(", ")
        )
    } else {
        NO_SIGNIFICANT_CHANGE.to_string()
    };

    debug!("Serial comparison: {} significant change(s)", serial.changes.len());
    Some(Finding::new(serial, text))
}

fn significant_change(metric: SerialMetric, current: f64, previous: f64) -> Option<MetricChange> {
    let Some(change) = percent_change(previous, current) else {
        trace!("Previous {metric} of {previous} gives no relative change");
        return None;
    };

    if change.abs() <= metric.significance_threshold() {
        return None;
    }

    let direction = if change > 0.0 {
        ChangeDirection::Improvement
    } else {
        ChangeDirection::Deterioration
    };

    Some(MetricChange {
        metric,
        direction,
        percent: change.abs(),
    })
}

fn describe_change(change: &MetricChange) -> String {
    format!(
        "{} in {} ({}%)",
        change.direction.description(),
        change.metric,
        format_fixed(change.percent, 1)
    )
}
