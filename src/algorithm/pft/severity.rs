//! Severity grading for PFT findings
//!
//! Each grading table maps a single percentage (of predicted, or an observed
//! ratio) onto a severity level. The cut points follow the University of
//! Toronto PFT interpretation guidelines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step severity used for lung volumes and diffusing capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

impl SeverityLevel {
    /// Get a descriptive name for this severity level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Lower-case form for use mid-sentence
    #[must_use]
    pub const fn adjective(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Five-step severity used for airflow reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirflowSeverity {
    Mild = 1,
    Moderate = 2,
    ModeratelySevere = 3,
    Severe = 4,
    VerySevere = 5,
}

impl AirflowSeverity {
    /// Get a descriptive name for this severity level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately severe",
            Self::Severe => "Severe",
            Self::VerySevere => "Very severe",
        }
    }
}

impl fmt::Display for AirflowSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Grade airflow reduction from FEV1 % predicted
#[must_use]
pub fn fev1_airflow_severity(fev1_percent_predicted: f64) -> AirflowSeverity {
    if fev1_percent_predicted >= 70.0 {
        AirflowSeverity::Mild
    } else if fev1_percent_predicted >= 60.0 {
        AirflowSeverity::Moderate
    } else if fev1_percent_predicted >= 50.0 {
        AirflowSeverity::ModeratelySevere
    } else if fev1_percent_predicted >= 35.0 {
        AirflowSeverity::Severe
    } else {
        AirflowSeverity::VerySevere
    }
}

/// Grade airflow reduction from the FEV1/FVC ratio itself
///
/// Used when the vital capacity is outside 90-110% predicted, where FEV1 %
/// predicted would overstate or understate the obstruction.
#[must_use]
pub fn ratio_airflow_severity(fev1_fvc_ratio: f64) -> AirflowSeverity {
    if fev1_fvc_ratio >= 60.0 {
        AirflowSeverity::Mild
    } else if fev1_fvc_ratio >= 50.0 {
        AirflowSeverity::Moderate
    } else if fev1_fvc_ratio >= 35.0 {
        AirflowSeverity::Severe
    } else {
        AirflowSeverity::VerySevere
    }
}

/// Grade gas trapping from RV % predicted
#[must_use]
pub fn gas_trapping_severity(rv_percent_predicted: f64) -> SeverityLevel {
    if rv_percent_predicted <= 150.0 {
        SeverityLevel::Mild
    } else if rv_percent_predicted <= 250.0 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Severe
    }
}

/// Grade hyperinflation from TLC % predicted
#[must_use]
pub fn hyperinflation_severity(tlc_percent_predicted: f64) -> SeverityLevel {
    if tlc_percent_predicted <= 130.0 {
        SeverityLevel::Mild
    } else if tlc_percent_predicted <= 150.0 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Severe
    }
}

/// Grade restriction from TLC % predicted
#[must_use]
pub fn restriction_severity(tlc_percent_predicted: f64) -> SeverityLevel {
    if tlc_percent_predicted >= 65.0 {
        SeverityLevel::Mild
    } else if tlc_percent_predicted >= 50.0 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Severe
    }
}

/// Grade diffusing capacity impairment from DLCO % predicted
#[must_use]
pub fn dlco_severity(dlco_percent_predicted: f64) -> SeverityLevel {
    if dlco_percent_predicted > 60.0 {
        SeverityLevel::Mild
    } else if dlco_percent_predicted >= 40.0 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Severe
    }
}

/// Grade diffusing capacity impairment from an estimated % predicted
///
/// The estimate comes from scaling observed/LLN, so both cut points are
/// inclusive on the more severe side.
#[must_use]
pub fn estimated_dlco_severity(estimated_percent: f64) -> SeverityLevel {
    if estimated_percent <= 40.0 {
        SeverityLevel::Severe
    } else if estimated_percent <= 60.0 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Mild
    }
}
