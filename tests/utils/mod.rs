use pft_interpreter::{MeasurementRecord, RawMeasurementRecord};

/// A complete panel in which every section is normal
///
/// The bronchodilator is given without a significant response and airway
/// resistance is measured, both of which the all-normal summary requires.
#[must_use]
pub fn normal_panel() -> MeasurementRecord {
    MeasurementRecord {
        fev1_observed: Some(3.0),
        fev1_percent_predicted: Some(95.0),
        fvc_observed: Some(3.9),
        fvc_percent_predicted: Some(98.0),
        fev1_fvc_ratio: Some(78.0),
        fev1_fvc_lln: Some(70.0),
        fef25_75_observed: Some(3.2),
        fef25_75_percent_predicted: Some(90.0),
        fef75_fvc_ratio: Some(0.4),
        fef50_fvc_ratio: Some(1.1),
        post_fev1_observed: Some(3.1),
        tlc_observed: Some(6.0),
        tlc_percent_predicted: Some(100.0),
        tlc_lln: Some(4.8),
        tlc_uln: Some(7.2),
        rv_percent_predicted: Some(105.0),
        rv_tlc_ratio: Some(32.0),
        rv_tlc_uln: Some(40.0),
        raw_observed: Some(1.5),
        raw_percent_predicted: Some(100.0),
        raw_lln: Some(0.8),
        raw_uln: Some(2.8),
        dlco_percent_predicted: Some(90.0),
        age_years: Some(30.0),
        resting_spo2: Some(98.0),
        bronchodilator_given: true,
        oximetry_performed: true,
        ..Default::default()
    }
}

/// The normal panel as text captured by an input form
#[must_use]
pub fn normal_raw_panel() -> RawMeasurementRecord {
    let text = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
    let panel = normal_panel();
    RawMeasurementRecord {
        fev1_observed: text(panel.fev1_observed),
        fev1_percent_predicted: text(panel.fev1_percent_predicted),
        fvc_observed: text(panel.fvc_observed),
        fvc_percent_predicted: text(panel.fvc_percent_predicted),
        fev1_fvc_ratio: text(panel.fev1_fvc_ratio),
        fev1_fvc_lln: text(panel.fev1_fvc_lln),
        fef25_75_observed: text(panel.fef25_75_observed),
        fef25_75_percent_predicted: text(panel.fef25_75_percent_predicted),
        fef75_fvc_ratio: text(panel.fef75_fvc_ratio),
        fef50_fvc_ratio: text(panel.fef50_fvc_ratio),
        post_fev1_observed: text(panel.post_fev1_observed),
        tlc_observed: text(panel.tlc_observed),
        tlc_percent_predicted: text(panel.tlc_percent_predicted),
        tlc_lln: text(panel.tlc_lln),
        tlc_uln: text(panel.tlc_uln),
        rv_percent_predicted: text(panel.rv_percent_predicted),
        rv_tlc_ratio: text(panel.rv_tlc_ratio),
        rv_tlc_uln: text(panel.rv_tlc_uln),
        raw_observed: text(panel.raw_observed),
        raw_percent_predicted: text(panel.raw_percent_predicted),
        raw_lln: text(panel.raw_lln),
        raw_uln: text(panel.raw_uln),
        dlco_percent_predicted: text(panel.dlco_percent_predicted),
        age_years: text(panel.age_years),
        resting_spo2: text(panel.resting_spo2),
        bronchodilator_given: panel.bronchodilator_given,
        oximetry_performed: panel.oximetry_performed,
        ..Default::default()
    }
}
