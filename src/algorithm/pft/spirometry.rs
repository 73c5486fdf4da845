//! Spirometry classification
//!
//! The FEV1/FVC ratio against its LLN selects between the obstruction chart
//! and the normal-ratio chart. The normal-ratio chart screens FEV1 and FVC
//! against a fixed 80% predicted, then looks for small airway disease.

use itertools::Itertools;
use log::{debug, trace};

use super::categories::{ObstructionBasis, SpirometryPattern};
use super::severity::{fev1_airflow_severity, ratio_airflow_severity};
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;
use crate::utils::numeric::{format_fixed, in_range};

const REDUCED_PERCENT_PREDICTED: f64 = 80.0;
const NORMAL_VOLUME_RANGE: (f64, f64) = (90.0, 110.0);
const LOW_FEF25_75_PERCENT_PREDICTED: f64 = 50.0;
const LOW_FEF75_FVC_RATIO: f64 = 0.25;
const HIGH_FEF50_FVC_RATIO: f64 = 1.5;

const LOW_VOLUME_AIRFLOW: &str = "airflow reduction at low lung volumes";
const MID_VOLUME_FLOWS: &str = "increased flows at mid lung volumes";

pub const PROPORTIONAL_REDUCTION: &str = "Proportional reduction in FEV1 and FVC.";
pub const NON_SPECIFIC_RESTRICTIVE_ADVISORY: &str = "Presence of a non-specific restrictive \
     spirometry pattern, which can represent restriction (consider lung volume testing to \
     verify), or can sometimes predict later evolution into COPD or restrictive lung disease \
     – clinical correlation required.";
pub const RESTRICTIVE_PATTERN_ADVISORY: &str = "Presence of a restrictive spirometry pattern, \
     which is a non-specific finding that can sometimes predict evolution into COPD or \
     restrictive lung disease – clinical correlation required.";
pub const NORMAL_SPIROMETRY: &str = "Normal spirometry.";

/// Spirometry findings plus the abnormality flag
///
/// The flag is tracked separately because a restrictive pattern that is
/// already explained by the referral is abnormal but produces no sentence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpirometryAssessment {
    pub findings: Vec<Finding<SpirometryPattern>>,
    pub abnormal: bool,
}

/// Classify pre-bronchodilator spirometry
#[must_use]
pub fn classify_spirometry(record: &MeasurementRecord) -> SpirometryAssessment {
    let (Some(ratio), Some(ratio_lln)) = (record.fev1_fvc_ratio, record.fev1_fvc_lln) else {
        trace!("FEV1/FVC ratio or its LLN not provided, skipping spirometry");
        return SpirometryAssessment::default();
    };

    let assessment = if ratio < ratio_lln {
        classify_obstruction(record, ratio)
    } else {
        classify_normal_ratio(record)
    };

    debug!(
        "Spirometry: ratio {ratio} vs LLN {ratio_lln}, {} finding(s), abnormal={}",
        assessment.findings.len(),
        assessment.abnormal
    );
    assessment
}

fn classify_obstruction(record: &MeasurementRecord, ratio: f64) -> SpirometryAssessment {
    let (low, high) = NORMAL_VOLUME_RANGE;
    let fvc_pct = record.fvc_percent_predicted;
    let volume_pct = record.vc_percent_predicted.or(fvc_pct);
    let volume_in_range = [fvc_pct, volume_pct]
        .into_iter()
        .flatten()
        .any(|pct| in_range(pct, low, high));

    let finding = match record.fev1_percent_predicted.filter(|_| volume_in_range) {
        Some(fev1_pct) => {
            let severity = fev1_airflow_severity(fev1_pct);
            Finding::new(
                SpirometryPattern::Obstruction {
                    severity,
                    basis: ObstructionBasis::Fev1PercentPredicted,
                },
                format!(
                    "{severity} airflow reduction (FEV1 {}% predicted).",
                    format_fixed(fev1_pct, 0)
                ),
            )
        }
        None => {
            let severity = ratio_airflow_severity(ratio);
            Finding::new(
                SpirometryPattern::Obstruction {
                    severity,
                    basis: ObstructionBasis::Fev1FvcRatio,
                },
                format!(
                    "{severity} airflow reduction (FEV1/FVC {}%).",
                    format_fixed(ratio, 0)
                ),
            )
        }
    };

    SpirometryAssessment {
        findings: vec![finding],
        abnormal: true,
    }
}

fn classify_normal_ratio(record: &MeasurementRecord) -> SpirometryAssessment {
    let (low, high) = NORMAL_VOLUME_RANGE;
    let is_reduced = |pct: Option<f64>| pct.is_some_and(|p| p < REDUCED_PERCENT_PREDICTED);
    let fev1_reduced = is_reduced(record.fev1_percent_predicted);
    let fvc_reduced = is_reduced(record.fvc_percent_predicted);
    let fvc_in_range = record
        .fvc_percent_predicted
        .is_some_and(|pct| in_range(pct, low, high));

    let mut findings = Vec::new();

    if fev1_reduced && fvc_reduced {
        findings.push(Finding::new(
            SpirometryPattern::Restriction,
            PROPORTIONAL_REDUCTION,
        ));
        if !record.restriction_explained {
            findings.push(Finding::new(
                SpirometryPattern::NonSpecificRestrictive,
                NON_SPECIFIC_RESTRICTIVE_ADVISORY,
            ));
        }
        return SpirometryAssessment {
            findings,
            abnormal: true,
        };
    }

    if (fev1_reduced || fvc_reduced) && !fvc_in_range {
        if record.restriction_explained {
            debug!("Restrictive spirometry pattern explained by referral, no advisory");
        } else {
            findings.push(Finding::new(
                SpirometryPattern::NonSpecificRestrictive,
                RESTRICTIVE_PATTERN_ADVISORY,
            ));
        }
        return SpirometryAssessment {
            findings,
            abnormal: true,
        };
    }

    let small_airway = small_airway_findings(record);
    if small_airway.is_empty() {
        return SpirometryAssessment {
            findings: vec![Finding::new(SpirometryPattern::Normal, NORMAL_SPIROMETRY)],
            abnormal: false,
        };
    }

    SpirometryAssessment {
        findings: vec![Finding::new(
            SpirometryPattern::SmallAirway,
            format!("Normal FEV1/FVC ratio with {}.", small_airway.join(" and ")),
        )],
        abnormal: true,
    }
}

fn small_airway_findings(record: &MeasurementRecord) -> Vec<&'static str> {
    let mut findings = Vec::new();

    if let (Some(_), Some(fef_pct)) = (
        record.fef25_75_observed,
        record.fef25_75_percent_predicted,
    ) {
        if fef_pct < LOW_FEF25_75_PERCENT_PREDICTED {
            findings.push(LOW_VOLUME_AIRFLOW);
        }
    }

    if record
        .fef50_fvc_ratio
        .is_some_and(|r| r > HIGH_FEF50_FVC_RATIO)
    {
        findings.push(MID_VOLUME_FLOWS);
    }

    if record
        .fef75_fvc_ratio
        .is_some_and(|r| r < LOW_FEF75_FVC_RATIO)
    {
        findings.push(LOW_VOLUME_AIRFLOW);
    }

    findings.into_iter().unique().collect()
}
