//! Finding categories for PFT interpretation
//!
//! Every narrative sentence the engine emits is paired with one of these
//! tags. The summary is built from the tags, never from the sentences.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::severity::{AirflowSeverity, SeverityLevel};

/// How an obstruction was graded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstructionBasis {
    /// Graded from FEV1 % predicted (vital capacity in the normal range)
    Fev1PercentPredicted,
    /// Graded from the FEV1/FVC ratio
    Fev1FvcRatio,
}

/// Spirometry finding categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpirometryPattern {
    /// FEV1/FVC below its lower limit of normal
    Obstruction {
        severity: AirflowSeverity,
        basis: ObstructionBasis,
    },
    /// Proportional reduction of FEV1 and FVC
    Restriction,
    /// Restrictive spirometry advisory
    NonSpecificRestrictive,
    /// Abnormal flows with a normal FEV1/FVC ratio
    SmallAirway,
    Normal,
}

/// Bronchodilator response categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BronchodilatorResponse {
    NotAdministered,
    Significant,
    NotSignificant,
}

/// Measurements tracked between visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerialMetric {
    #[serde(rename = "fev1")]
    Fev1,
    #[serde(rename = "fvc")]
    Fvc,
    #[serde(rename = "dlco")]
    Dlco,
}

impl SerialMetric {
    /// Label used in report text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fev1 => "FEV1",
            Self::Fvc => "FVC",
            Self::Dlco => "DLCO",
        }
    }

    /// Smallest absolute percent change considered significant (exclusive)
    #[must_use]
    pub const fn significance_threshold(self) -> f64 {
        match self {
            Self::Fev1 | Self::Fvc => 10.0,
            Self::Dlco => 15.0,
        }
    }
}

impl fmt::Display for SerialMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of a significant change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Improvement,
    Deterioration,
}

impl ChangeDirection {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Improvement => "improvement",
            Self::Deterioration => "deterioration",
        }
    }
}

/// A significant change in one metric since the previous test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    pub metric: SerialMetric,
    pub direction: ChangeDirection,
    /// Magnitude of the change, always positive
    pub percent: f64,
}

/// Outcome of comparing against a previous test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerialChange {
    /// Significant changes in FEV1, FVC, DLCO order; empty means no significant change
    pub changes: Vec<MetricChange>,
}

impl SerialChange {
    #[must_use]
    pub fn is_significant(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Lung volume finding categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LungVolumePattern {
    /// `None` when RV % predicted was not supplied
    GasTrapping { severity: Option<SeverityLevel> },
    /// `None` when TLC % predicted was not supplied
    Hyperinflation { severity: Option<SeverityLevel> },
    /// `None` when TLC % predicted was not supplied
    Restriction { severity: Option<SeverityLevel> },
    Normal,
    LargeNormalVariant,
}

impl LungVolumePattern {
    /// Whether this finding marks the lung volumes as abnormal
    ///
    /// Hyperinflation only ever accompanies gas trapping, which carries the flag.
    #[must_use]
    pub const fn is_abnormal(self) -> bool {
        matches!(self, Self::GasTrapping { .. } | Self::Restriction { .. })
    }
}

/// Airway resistance categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistanceStatus {
    Increased,
    Reduced,
    Normal,
}

/// Diffusing capacity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffusionStatus {
    Normal,
    Increased,
    Impaired { severity: SeverityLevel },
}

impl DiffusionStatus {
    #[must_use]
    pub const fn is_abnormal(self) -> bool {
        matches!(self, Self::Impaired { .. })
    }
}

/// Resting oximetry relative to the age-banded normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestingOximetry {
    Normal,
    Reduced,
}

/// Desaturation during exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseDesaturation {
    None,
    Mild,
    Marked,
}

/// Oximetry outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OximetryStatus {
    pub resting: RestingOximetry,
    /// Present only when exercise was performed and its lowest SpO2 recorded
    pub exercise: Option<ExerciseDesaturation>,
}

/// Abnormalities named in the summary sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbnormalityLabel {
    ObstructivePattern,
    RestrictiveSpirometryPattern,
    SmallAirwayAbnormality,
    RestrictiveLungDisease,
    GasTrapping,
    Hyperinflation,
    ReducedDiffusionCapacity,
    IncreasedAirwayResistance,
}

impl AbnormalityLabel {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ObstructivePattern => "obstructive pattern",
            Self::RestrictiveSpirometryPattern => "restrictive spirometry pattern",
            Self::SmallAirwayAbnormality => "small airway abnormality",
            Self::RestrictiveLungDisease => "restrictive lung disease",
            Self::GasTrapping => "gas trapping",
            Self::Hyperinflation => "hyperinflation",
            Self::ReducedDiffusionCapacity => "reduced diffusion capacity",
            Self::IncreasedAirwayResistance => "increased airway resistance",
        }
    }
}

impl fmt::Display for AbnormalityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Summary categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    AllNormal,
    Abnormal { labels: Vec<AbnormalityLabel> },
    /// Abnormal, but no abnormality could be named
    MixedPatterns,
}
