//! End-to-end interpretation scenarios

use pft_interpreter::categories::{
    BronchodilatorResponse, ExerciseDesaturation, RestingOximetry, SpirometryPattern, SummaryKind,
};
use pft_interpreter::{MeasurementRecord, interpret, interpret_raw};

use crate::utils::{normal_panel, normal_raw_panel};

#[test]
fn test_all_normal_panel() {
    let result = interpret(&normal_panel());

    assert_eq!(result.spirometry.len(), 1);
    assert_eq!(result.spirometry[0].text, "Normal spirometry.");
    assert_eq!(
        result.bronchodilator.as_ref().map(|f| f.text.as_str()),
        Some("No significant improvement post bronchodilator.")
    );
    assert!(result.comparison.is_none());
    assert_eq!(result.lung_volumes[0].text, "Normal lung volumes.");
    assert_eq!(
        result.resistance.as_ref().map(|f| f.text.as_str()),
        Some("Normal airway resistance.")
    );
    assert_eq!(
        result.dlco.as_ref().map(|f| f.text.as_str()),
        Some("Normal diffusing capacity uncorrected for Hb.")
    );
    assert_eq!(
        result.oximetry.as_ref().map(|f| f.text.as_str()),
        Some("Normal resting oximetry on room air.")
    );
    assert_eq!(result.summary.category, SummaryKind::AllNormal);
    assert_eq!(
        result.summary.text,
        "In summary, normal pulmonary function testing."
    );
}

#[test]
fn test_raw_panel_matches_typed_panel() {
    assert_eq!(interpret_raw(&normal_raw_panel()), interpret(&normal_panel()));
}

#[test]
fn test_interpret_is_idempotent() {
    let record = MeasurementRecord {
        fev1_fvc_ratio: Some(55.0),
        has_previous_test: true,
        previous_fev1_observed: Some(3.6),
        ..normal_panel()
    };

    let first = interpret(&record);
    let second = interpret(&record);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_bronchodilator_not_given_prevents_all_normal() {
    let record = MeasurementRecord {
        bronchodilator_given: false,
        ..normal_panel()
    };
    let result = interpret(&record);
    assert_eq!(
        result.bronchodilator.as_ref().map(|f| f.category),
        Some(BronchodilatorResponse::NotAdministered)
    );
    assert_eq!(result.summary.category, SummaryKind::MixedPatterns);
}

#[test]
fn test_significant_bronchodilator_response() {
    let record = MeasurementRecord {
        fev1_observed: Some(2.0),
        post_fev1_observed: Some(2.3),
        ..normal_panel()
    };
    let result = interpret(&record);
    assert_eq!(
        result.bronchodilator.as_ref().map(|f| f.category),
        Some(BronchodilatorResponse::Significant)
    );
    assert_ne!(result.summary.category, SummaryKind::AllNormal);
}

#[test]
fn test_obstruction_scenarios() {
    let record = MeasurementRecord {
        fev1_fvc_ratio: Some(55.0),
        fev1_fvc_lln: Some(70.0),
        fev1_percent_predicted: Some(65.0),
        fvc_percent_predicted: Some(95.0),
        ..normal_panel()
    };
    let result = interpret(&record);
    assert_eq!(
        result.spirometry[0].text,
        "Moderate airflow reduction (FEV1 65% predicted)."
    );
    assert_eq!(
        result.summary.text,
        "In summary, pulmonary function testing demonstrates obstructive pattern."
    );

    let record = MeasurementRecord {
        fvc_percent_predicted: Some(70.0),
        ..record
    };
    let result = interpret(&record);
    assert_eq!(
        result.spirometry[0].text,
        "Moderate airflow reduction (FEV1/FVC 55%)."
    );
}

#[test]
fn test_small_airway_summary_uses_category() {
    let record = MeasurementRecord {
        fef75_fvc_ratio: Some(0.2),
        ..normal_panel()
    };
    let result = interpret(&record);
    assert_eq!(result.spirometry[0].category, SpirometryPattern::SmallAirway);
    assert_eq!(
        result.summary.text,
        "In summary, pulmonary function testing demonstrates small airway abnormality."
    );
}

#[test]
fn test_restrictive_disease_panel() {
    let record = MeasurementRecord {
        fev1_percent_predicted: Some(62.0),
        fvc_percent_predicted: Some(60.0),
        fev1_fvc_ratio: Some(84.0),
        tlc_observed: Some(3.9),
        tlc_percent_predicted: Some(60.0),
        dlco_percent_predicted: Some(55.0),
        ..normal_panel()
    };
    let result = interpret(&record);

    assert_eq!(result.spirometry.len(), 2);
    assert_eq!(
        result.spirometry[0].text,
        "Proportional reduction in FEV1 and FVC."
    );
    assert_eq!(result.lung_volumes[0].text, "Moderate restriction.");
    assert_eq!(
        result.dlco.as_ref().map(|f| f.text.as_str()),
        Some("Moderate diffusing capacity impairment uncorrected for Hb (DLCO 55% predicted).")
    );
    assert_eq!(
        result.summary.text,
        "In summary, pulmonary function testing demonstrates restrictive spirometry pattern, \
         restrictive lung disease, reduced diffusion capacity."
    );
}

#[test]
fn test_copd_panel_with_comparison() {
    let record = MeasurementRecord {
        fev1_observed: Some(1.2),
        fev1_percent_predicted: Some(42.0),
        fvc_observed: Some(2.9),
        fvc_percent_predicted: Some(92.0),
        fev1_fvc_ratio: Some(41.0),
        post_fev1_observed: Some(1.3),
        rv_percent_predicted: Some(210.0),
        rv_tlc_ratio: Some(58.0),
        tlc_observed: Some(8.0),
        tlc_percent_predicted: Some(128.0),
        raw_observed: Some(3.4),
        dlco_percent_predicted: Some(38.0),
        hemoglobin_corrected: true,
        has_previous_test: true,
        previous_fev1_observed: Some(1.5),
        previous_fvc_observed: Some(3.0),
        ..normal_panel()
    };
    let result = interpret(&record);

    assert_eq!(
        result.spirometry[0].text,
        "Severe airflow reduction (FEV1 42% predicted)."
    );
    assert_eq!(
        result.comparison.as_ref().map(|f| f.text.as_str()),
        Some("Compared to previous: deterioration in FEV1 (20.0%).")
    );
    let volumes: Vec<&str> = result.lung_volumes.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(
        volumes,
        vec!["Moderate gas trapping.", "TLC shows mild hyperinflation."]
    );
    assert_eq!(
        result.dlco.as_ref().map(|f| f.text.as_str()),
        Some("Severe diffusing capacity impairment after Hb correction (DLCO 38% predicted).")
    );
    assert_eq!(
        result.summary.text,
        "In summary, pulmonary function testing demonstrates obstructive pattern, gas trapping, \
         hyperinflation, reduced diffusion capacity, increased airway resistance."
    );
}

#[test]
fn test_oximetry_scenario() {
    let record = MeasurementRecord {
        age_years: Some(50.0),
        resting_spo2: Some(93.0),
        exercise_performed: true,
        lowest_exercise_spo2: Some(85.0),
        ..normal_panel()
    };
    let result = interpret(&record);
    let oximetry = result.oximetry.expect("oximetry was performed");
    assert_eq!(
        oximetry.text,
        "Reduced resting oximetry on room air. Marked desaturation with exercise."
    );
    assert_eq!(oximetry.category.resting, RestingOximetry::Reduced);
    assert_eq!(oximetry.category.exercise, Some(ExerciseDesaturation::Marked));
    assert_eq!(result.summary.category, SummaryKind::MixedPatterns);
}

#[test]
fn test_exercise_desaturation_alone_keeps_all_normal() {
    let record = MeasurementRecord {
        exercise_performed: true,
        lowest_exercise_spo2: Some(86.0),
        ..normal_panel()
    };
    let result = interpret(&record);
    assert_eq!(result.summary.category, SummaryKind::AllNormal);
}

#[test]
fn test_comparison_does_not_affect_summary() {
    let record = MeasurementRecord {
        has_previous_test: true,
        previous_fev1_observed: Some(4.0),
        ..normal_panel()
    };
    let result = interpret(&record);
    assert_eq!(
        result.comparison.as_ref().map(|f| f.text.as_str()),
        Some("Compared to previous: deterioration in FEV1 (25.0%).")
    );
    assert_eq!(result.summary.category, SummaryKind::AllNormal);
}
