use pft_interpreter::models::GUIDELINE_CITATION;
use pft_interpreter::{MeasurementRecord, interpret};

use crate::utils::normal_panel;

#[test]
fn test_text_report_sections() {
    let result = interpret(&MeasurementRecord {
        has_previous_test: true,
        previous_fev1_observed: Some(3.1),
        ..normal_panel()
    });

    let expected = "\
Spirometry:
  Normal spirometry.
No significant improvement post bronchodilator.
Compared to previous: no significant change.
Lung Volumes:
  Normal lung volumes.
Normal airway resistance.
Normal diffusing capacity uncorrected for Hb.
Oximetry:
  Normal resting oximetry on room air.

In summary, normal pulmonary function testing.";

    assert_eq!(result.to_report(false), expected);
    assert_eq!(
        result.to_string(),
        format!("{expected}\n\n{GUIDELINE_CITATION}")
    );
}

#[test]
fn test_report_skips_empty_sections() {
    let result = interpret(&MeasurementRecord::default());
    let report = result.to_report(false);

    assert!(!report.contains("Spirometry:"));
    assert!(!report.contains("Lung Volumes:"));
    assert!(!report.contains("Oximetry:"));
    assert!(report.starts_with("Bronchodilator not administered.\n"));
}

#[test]
fn test_json_output_carries_categories() {
    let result = interpret(&normal_panel());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["summary"]["category"], "all_normal");
    assert_eq!(json["spirometry"][0]["category"], "normal");
    assert_eq!(json["oximetry"]["category"]["resting"], "normal");
    assert!(json["comparison"].is_null());
}

#[test]
fn test_report_with_citation_matches_display() {
    let result = interpret(&normal_panel());
    assert_eq!(result.to_report(true), result.to_string());
    assert!(result.to_report(true).ends_with(GUIDELINE_CITATION));
}
