//! Lung volume classification
//!
//! Gas trapping (RV/TLC above its ULN) is checked first; TLC against its
//! limits then decides between hyperinflation, normal volumes and restriction.

use log::{debug, trace};

use super::categories::LungVolumePattern;
use super::severity::{
    SeverityLevel, gas_trapping_severity, hyperinflation_severity, restriction_severity,
};
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;

pub const NORMAL_TLC: &str = "Normal TLC.";
pub const LARGE_TLC_NORMAL_VARIANT: &str = "Large TLC, normal variant.";
pub const NORMAL_LUNG_VOLUMES: &str = "Normal lung volumes.";

/// Classify lung volumes
///
/// Requires RV/TLC with its ULN and TLC with both limits; otherwise no findings.
#[must_use]
pub fn classify_lung_volumes(record: &MeasurementRecord) -> Vec<Finding<LungVolumePattern>> {
    let (Some(rv_tlc), Some(rv_tlc_uln), Some(tlc), Some(tlc_lln), Some(tlc_uln)) = (
        record.rv_tlc_ratio,
        record.rv_tlc_uln,
        record.tlc_observed,
        record.tlc_lln,
        record.tlc_uln,
    ) else {
        trace!("Lung volume limits incomplete, skipping lung volumes");
        return Vec::new();
    };

    let mut findings = Vec::new();

    if rv_tlc > rv_tlc_uln {
        findings.push(gas_trapping(record.rv_percent_predicted));

        if tlc > tlc_uln {
            findings.push(hyperinflation(record.tlc_percent_predicted));
        } else if tlc >= tlc_lln {
            findings.push(Finding::new(LungVolumePattern::Normal, NORMAL_TLC));
        }
    } else if tlc > tlc_uln {
        findings.push(Finding::new(
            LungVolumePattern::LargeNormalVariant,
            LARGE_TLC_NORMAL_VARIANT,
        ));
    } else if tlc >= tlc_lln {
        findings.push(Finding::new(LungVolumePattern::Normal, NORMAL_LUNG_VOLUMES));
    } else {
        findings.push(restriction(record.tlc_percent_predicted));
    }

    debug!(
        "Lung volumes: RV/TLC {rv_tlc} (ULN {rv_tlc_uln}), TLC {tlc} ({tlc_lln}-{tlc_uln}): {:?}",
        findings.iter().map(|f| f.category).collect::<Vec<_>>()
    );
    findings
}

/// Whether any lung volume finding is abnormal
#[must_use]
pub fn lung_volumes_abnormal(findings: &[Finding<LungVolumePattern>]) -> bool {
    findings.iter().any(|f| f.category.is_abnormal())
}

fn gas_trapping(rv_pct: Option<f64>) -> Finding<LungVolumePattern> {
    let severity = rv_pct.map(gas_trapping_severity);
    let text = match severity {
        Some(level) => format!("{level} gas trapping."),
        None => "Gas trapping.".to_string(),
    };
    Finding::new(LungVolumePattern::GasTrapping { severity }, text)
}

fn hyperinflation(tlc_pct: Option<f64>) -> Finding<LungVolumePattern> {
    let severity = tlc_pct.map(hyperinflation_severity);
    let text = match severity {
        Some(level) => format!("TLC shows {} hyperinflation.", level.adjective()),
        None => "TLC shows hyperinflation.".to_string(),
    };
    Finding::new(LungVolumePattern::Hyperinflation { severity }, text)
}

fn restriction(tlc_pct: Option<f64>) -> Finding<LungVolumePattern> {
    let severity: Option<SeverityLevel> = tlc_pct.map(restriction_severity);
    let text = match severity {
        Some(level) => format!("{level} restriction."),
        None => "Restriction.".to_string(),
    };
    Finding::new(LungVolumePattern::Restriction { severity }, text)
}
