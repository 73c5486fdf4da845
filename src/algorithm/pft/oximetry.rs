//! Oximetry evaluation
//!
//! Resting SpO2 is compared with an age-banded lower normal. Exercise
//! desaturation is judged by the drop from rest to the lowest exercise value.

use log::{debug, trace};

use super::categories::{ExerciseDesaturation, OximetryStatus, RestingOximetry};
use crate::models::interpretation::Finding;
use crate::models::measurement::MeasurementRecord;

const DEFAULT_NORMAL_RESTING_SPO2: f64 = 96.0;
const SIGNIFICANT_DROP: f64 = 4.0;
const MARKED_DESATURATION_SPO2: f64 = 88.0;

/// Lowest normal resting SpO2 for a patient's age
///
/// Ages under 18, between bands, or not recorded use the adult default.
#[must_use]
pub fn normal_resting_spo2(age_years: Option<f64>) -> f64 {
    match age_years {
        Some(age) if (18.0..=44.0).contains(&age) => 96.0,
        Some(age) if (45.0..=64.0).contains(&age) => 94.0,
        Some(age) if age > 64.0 => 93.0,
        _ => DEFAULT_NORMAL_RESTING_SPO2,
    }
}

/// Evaluate resting and exercise oximetry
#[must_use]
pub fn evaluate_oximetry(record: &MeasurementRecord) -> Option<Finding<OximetryStatus>> {
    if !record.oximetry_performed {
        return None;
    }
    let Some(resting) = record.resting_spo2 else {
        trace!("Resting SpO2 not provided, skipping oximetry");
        return None;
    };

    let threshold = normal_resting_spo2(record.age_years);
    let (resting_status, mut text) = if resting >= threshold {
        (
            RestingOximetry::Normal,
            String::from("Normal resting oximetry on room air."),
        )
    } else {
        (
            RestingOximetry::Reduced,
            String::from("Reduced resting oximetry on room air."),
        )
    };

    let exercise = record
        .lowest_exercise_spo2
        .filter(|_| record.exercise_performed)
        .map(|lowest| exercise_desaturation(resting, lowest));

    match exercise {
        Some(ExerciseDesaturation::Mild) => text.push_str(" Mild desaturation with exercise."),
        Some(ExerciseDesaturation::Marked) => text.push_str(" Marked desaturation with exercise."),
        Some(ExerciseDesaturation::None) => {
            text.push_str(" No significant desaturation with exercise.");
        }
        None => {}
    }

    debug!("Oximetry: resting {resting} vs normal {threshold}, exercise {exercise:?}");
    Some(Finding::new(
        OximetryStatus {
            resting: resting_status,
            exercise,
        },
        text,
    ))
}

fn exercise_desaturation(resting: f64, lowest: f64) -> ExerciseDesaturation {
    if resting - lowest <= SIGNIFICANT_DROP {
        ExerciseDesaturation::None
    } else if lowest > MARKED_DESATURATION_SPO2 {
        ExerciseDesaturation::Mild
    } else {
        ExerciseDesaturation::Marked
    }
}
