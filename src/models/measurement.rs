//! Measurement record model
//!
//! A PFT panel is a flat set of optional measurements plus a handful of flags
//! that steer which parts of the interpretation apply. Two forms exist:
//!
//! * [`RawMeasurementRecord`] holds the text exactly as captured by an input
//!   form. Its JSON keys also accept the form's camelCase field names.
//! * [`MeasurementRecord`] holds normalized values, where anything that was
//!   blank or not a finite number is `None`.

use log::debug;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::numeric::{finite, normalize_measurement};

/// Define the measurement records from one field list
///
/// Each measurement is listed with the key used by the input form, which the
/// raw record accepts as an alias.
macro_rules! measurement_records {
    (
        measurements {
            $( $(#[$meta:meta])* $field:ident => $form_key:tt ),* $(,)?
        }
        flags {
            $( $(#[$flag_meta:meta])* $flag:ident => $flag_key:tt ),* $(,)?
        }
    ) => {
        /// A normalized PFT measurement record
        ///
        /// Percentages are plain numbers (`85.0` for 85% predicted); volumes are
        /// in litres. No unit conversion is performed.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct MeasurementRecord {
            $( $(#[$meta])* pub $field: Option<f64>, )*
            $( $(#[$flag_meta])* pub $flag: bool, )*
        }

        /// A PFT measurement record as captured by an input form
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct RawMeasurementRecord {
            $(
                $(#[$meta])*
                #[serde(alias = $form_key, deserialize_with = "deserialize_field_text")]
                pub $field: String,
            )*
            $( $(#[$flag_meta])* #[serde(alias = $flag_key)] pub $flag: bool, )*
        }

        impl MeasurementRecord {
            /// Copy of this record with every non-finite value made absent
            #[must_use]
            pub fn sanitized(&self) -> Self {
                Self {
                    $( $field: finite(self.$field), )*
                    $( $flag: self.$flag, )*
                }
            }
        }

        impl RawMeasurementRecord {
            /// Normalize every text field to a number or absent
            #[must_use]
            pub fn normalize(&self) -> MeasurementRecord {
                MeasurementRecord {
                    $( $field: normalize_field(stringify!($field), &self.$field), )*
                    $( $flag: self.$flag, )*
                }
            }
        }
    };
}

measurement_records! {
    measurements {
        // Pre-bronchodilator spirometry
        /// FEV1 observed (L)
        fev1_observed => "preFev1Obs",
        /// FEV1 (% predicted)
        fev1_percent_predicted => "preFev1Pred",
        /// FVC observed (L)
        fvc_observed => "preFvcObs",
        /// FVC (% predicted)
        fvc_percent_predicted => "preFvcPred",
        /// VC observed (L)
        vc_observed => "preVcObs",
        /// VC (% predicted)
        vc_percent_predicted => "preVcPred",
        /// FEV1/FVC ratio (%)
        fev1_fvc_ratio => "preFev1FvcRatio",
        /// Lower limit of normal for the FEV1/FVC ratio (%)
        fev1_fvc_lln => "fev1FvcLLN",
        /// FEF25-75 observed (L/s)
        fef25_75_observed => "fef75Obs",
        /// FEF25-75 (% predicted)
        fef25_75_percent_predicted => "fef75Pred",
        /// FEF75/FVC ratio
        fef75_fvc_ratio => "fef75FvcRatio",
        /// FEF50/FVC ratio
        fef50_fvc_ratio => "fef50FvcRatio",

        // Post-bronchodilator spirometry
        /// Post-bronchodilator FEV1 observed (L)
        post_fev1_observed => "postFev1Obs",
        /// Post-bronchodilator FVC observed (L)
        post_fvc_observed => "postFvcObs",

        // Previous test
        /// Previous FEV1 observed (L)
        previous_fev1_observed => "prevFev1Obs",
        /// Previous FVC observed (L)
        previous_fvc_observed => "prevFvcObs",
        /// Previous DLCO observed (mL/min/mmHg)
        previous_dlco_observed => "prevDlcoObs",

        // Lung volumes
        /// TLC observed (L)
        tlc_observed => "tlcObs",
        /// TLC (% predicted)
        tlc_percent_predicted => "tlcPred",
        /// TLC lower limit of normal (L)
        tlc_lln => "tlcLLN",
        /// TLC upper limit of normal (L)
        tlc_uln => "tlcULN",
        /// RV observed (L)
        rv_observed => "rvObs",
        /// RV (% predicted)
        rv_percent_predicted => "rvPred",
        /// RV/TLC ratio (%)
        rv_tlc_ratio => "rvTlcRatio",
        /// RV/TLC upper limit of normal (%)
        rv_tlc_uln => "rvTlcULN",

        // Airway resistance
        /// Raw observed (cmH2O/L/s)
        raw_observed => "rawObs",
        /// Raw (% predicted)
        raw_percent_predicted => "rawPred",
        /// Raw lower limit of normal (cmH2O/L/s)
        raw_lln => "rawLLN",
        /// Raw upper limit of normal (cmH2O/L/s)
        raw_uln => "rawULN",

        // Diffusing capacity
        /// DLCO observed (mL/min/mmHg)
        dlco_observed => "dlcoObs",
        /// DLCO (% predicted)
        dlco_percent_predicted => "dlcoPred",
        /// DLCO lower limit of normal (mL/min/mmHg)
        dlco_lln => "dlcoLLN",
        /// DLCO upper limit of normal (mL/min/mmHg)
        dlco_uln => "dlcoULN",

        // Oximetry
        /// Patient age (years)
        age_years => "patientAge",
        /// Resting SpO2 on room air (%)
        resting_spo2 => "restingSpO2",
        /// Lowest SpO2 during exercise (%)
        lowest_exercise_spo2 => "lowestExerciseSpO2",
    }
    flags {
        /// A bronchodilator was administered
        bronchodilator_given => "bronchodilatorGiven",
        /// A previous test is available for comparison
        has_previous_test => "hasPreviousPFT",
        /// A known cause of restriction is already stated in the referral
        restriction_explained => "hasRestrictionInRFR",
        /// DLCO was corrected for hemoglobin
        hemoglobin_corrected => "hemoglobin",
        /// Oximetry was performed
        oximetry_performed => "hasOximetry",
        /// Exercise oximetry was performed
        exercise_performed => "exercisePerformed",
    }
}

impl From<&RawMeasurementRecord> for MeasurementRecord {
    fn from(raw: &RawMeasurementRecord) -> Self {
        raw.normalize()
    }
}

impl From<RawMeasurementRecord> for MeasurementRecord {
    fn from(raw: RawMeasurementRecord) -> Self {
        raw.normalize()
    }
}

fn normalize_field(name: &str, text: &str) -> Option<f64> {
    let value = normalize_measurement(text);
    if value.is_none() && !text.trim().is_empty() {
        debug!("Treating {name} as not provided: {text:?} is not a finite number");
    }
    value
}

/// Text fields may arrive as JSON strings, numbers or null
///
/// Any other JSON value (a boolean, array or object) leaves the field empty
/// rather than rejecting the whole record.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldText {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

fn deserialize_field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FieldText>::deserialize(deserializer)? {
        Some(FieldText::Text(text)) => text,
        Some(FieldText::Number(value)) => value.to_string(),
        Some(FieldText::Other(_)) => {
            debug!("Treating a non-numeric JSON value as not provided");
            String::new()
        }
        None => String::new(),
    })
}
