use pft_interpreter::categories::{AbnormalityLabel, SummaryKind};
use pft_interpreter::{MeasurementRecord, interpret};

use crate::utils::normal_panel;

fn explained_single_reduction() -> MeasurementRecord {
    MeasurementRecord {
        fev1_percent_predicted: Some(75.0),
        fvc_percent_predicted: Some(85.0),
        restriction_explained: true,
        ..normal_panel()
    }
}

#[test]
fn test_explained_restriction_falls_back_to_mixed_patterns() {
    let result = interpret(&explained_single_reduction());
    assert!(result.spirometry.is_empty());
    assert_eq!(result.summary.category, SummaryKind::MixedPatterns);
}

#[test]
fn test_explained_restriction_with_other_abnormality() {
    let result = interpret(&MeasurementRecord {
        dlco_percent_predicted: Some(68.0),
        ..explained_single_reduction()
    });
    assert_eq!(
        result.summary.category,
        SummaryKind::Abnormal {
            labels: vec![AbnormalityLabel::ReducedDiffusionCapacity]
        }
    );
    assert_eq!(
        result.summary.text,
        "In summary, pulmonary function testing demonstrates reduced diffusion capacity."
    );
}

#[test]
fn test_reduced_resistance_is_not_labelled() {
    let result = interpret(&MeasurementRecord {
        raw_observed: Some(0.5),
        ..normal_panel()
    });
    assert_eq!(result.summary.category, SummaryKind::MixedPatterns);
}

#[test]
fn test_increased_dlco_and_large_tlc_are_normal_variants() {
    let result = interpret(&MeasurementRecord {
        dlco_percent_predicted: Some(140.0),
        tlc_observed: Some(7.6),
        ..normal_panel()
    });
    assert_eq!(result.summary.category, SummaryKind::AllNormal);
}

#[test]
fn test_gas_trapping_first_then_hyperinflation() {
    let result = interpret(&MeasurementRecord {
        rv_tlc_ratio: Some(48.0),
        rv_percent_predicted: Some(160.0),
        tlc_observed: Some(7.8),
        tlc_percent_predicted: Some(155.0),
        ..normal_panel()
    });
    assert_eq!(
        result.summary.category,
        SummaryKind::Abnormal {
            labels: vec![AbnormalityLabel::GasTrapping, AbnormalityLabel::Hyperinflation]
        }
    );
    assert_eq!(result.lung_volumes[1].text, "TLC shows severe hyperinflation.");
}
