//! Summary synthesis
//!
//! The summary reconciles the individual classifiers into one sentence. It
//! reads category tags only. The comparison with a previous test does not
//! take part.

use itertools::Itertools;
use log::debug;

use super::categories::{
    AbnormalityLabel, BronchodilatorResponse, DiffusionStatus, LungVolumePattern, OximetryStatus,
    ResistanceStatus, RestingOximetry, SpirometryPattern, SummaryKind,
};
use super::lung_volumes::lung_volumes_abnormal;
use super::spirometry::SpirometryAssessment;
use crate::models::interpretation::Finding;

pub const ALL_NORMAL_SUMMARY: &str = "In summary, normal pulmonary function testing.";
pub const MIXED_PATTERNS_SUMMARY: &str =
    "In summary, pulmonary function testing shows mixed patterns requiring clinical correlation.";

/// Classifier outputs the summary depends on
#[derive(Debug, Clone, Copy)]
pub struct SummaryInputs<'a> {
    pub spirometry: &'a SpirometryAssessment,
    pub bronchodilator: Option<&'a Finding<BronchodilatorResponse>>,
    pub lung_volumes: &'a [Finding<LungVolumePattern>],
    pub resistance: Option<&'a Finding<ResistanceStatus>>,
    pub dlco: Option<&'a Finding<DiffusionStatus>>,
    pub oximetry: Option<&'a Finding<OximetryStatus>>,
}

/// Synthesize the summary sentence
#[must_use]
pub fn synthesize_summary(inputs: &SummaryInputs<'_>) -> Finding<SummaryKind> {
    let lung_volumes_abnormal = lung_volumes_abnormal(inputs.lung_volumes);
    let dlco_abnormal = inputs.dlco.is_some_and(|f| f.category.is_abnormal());
    let resistance = inputs.resistance.map(|f| f.category);

    let all_normal = !inputs.spirometry.abnormal
        && !lung_volumes_abnormal
        && !dlco_abnormal
        && resistance == Some(ResistanceStatus::Normal)
        && inputs.bronchodilator.map(|f| f.category)
            == Some(BronchodilatorResponse::NotSignificant)
        && inputs
            .oximetry
            .is_none_or(|f| f.category.resting == RestingOximetry::Normal);

    if all_normal {
        debug!("Summary: all sections normal");
        return Finding::new(SummaryKind::AllNormal, ALL_NORMAL_SUMMARY);
    }

    let mut labels = Vec::new();

    if inputs.spirometry.abnormal {
        if let Some(first) = inputs.spirometry.findings.first() {
            match first.category {
                SpirometryPattern::Obstruction { .. } => {
                    labels.push(AbnormalityLabel::ObstructivePattern);
                }
                SpirometryPattern::Restriction | SpirometryPattern::NonSpecificRestrictive => {
                    labels.push(AbnormalityLabel::RestrictiveSpirometryPattern);
                }
                SpirometryPattern::SmallAirway => {
                    labels.push(AbnormalityLabel::SmallAirwayAbnormality);
                }
                SpirometryPattern::Normal => {}
            }
        }
    }

    if lung_volumes_abnormal {
        match inputs.lung_volumes.first().map(|f| f.category) {
            Some(LungVolumePattern::Restriction { .. }) => {
                labels.push(AbnormalityLabel::RestrictiveLungDisease);
            }
            Some(LungVolumePattern::GasTrapping { .. }) => {
                labels.push(AbnormalityLabel::GasTrapping);
            }
            _ => {}
        }
        if inputs
            .lung_volumes
            .iter()
            .any(|f| matches!(f.category, LungVolumePattern::Hyperinflation { .. }))
        {
            labels.push(AbnormalityLabel::Hyperinflation);
        }
    }

    if dlco_abnormal {
        labels.push(AbnormalityLabel::ReducedDiffusionCapacity);
    }
    if resistance == Some(ResistanceStatus::Increased) {
        labels.push(AbnormalityLabel::IncreasedAirwayResistance);
    }

    debug!("Summary labels: {labels:?}");

    if labels.is_empty() {
        return Finding::new(SummaryKind::MixedPatterns, MIXED_PATTERNS_SUMMARY);
    }

    let text = format!(
        "In summary, pulmonary function testing demonstrates {}.",
        labels.iter().join(", ")
    );
    Finding::new(SummaryKind::Abnormal { labels }, text)
}
