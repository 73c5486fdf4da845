//! Interpretation result model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::pft::categories::{
    BronchodilatorResponse, DiffusionStatus, LungVolumePattern, OximetryStatus, ResistanceStatus,
    SerialChange, SpirometryPattern, SummaryKind,
};

/// Guideline the decision rules are taken from
pub const GUIDELINE_CITATION: &str = "Based on: Guidelines for PFT Interpretation, 10th Edition, \
     University of Toronto, Department of Medicine (June 13, 2023)";

/// A narrative statement together with the category that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding<T> {
    pub category: T,
    pub text: String,
}

impl<T> Finding<T> {
    #[must_use]
    pub fn new(category: T, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl<T> fmt::Display for Finding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The complete interpretation of one measurement record
///
/// Every section is optional or possibly empty except the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationResult {
    pub spirometry: Vec<Finding<SpirometryPattern>>,
    pub bronchodilator: Option<Finding<BronchodilatorResponse>>,
    /// Present only when a previous test was supplied
    pub comparison: Option<Finding<SerialChange>>,
    pub lung_volumes: Vec<Finding<LungVolumePattern>>,
    pub resistance: Option<Finding<ResistanceStatus>>,
    pub dlco: Option<Finding<DiffusionStatus>>,
    pub oximetry: Option<Finding<OximetryStatus>>,
    pub summary: Finding<SummaryKind>,
}

impl InterpretationResult {
    /// Write the report as plain text, optionally followed by the citation
    pub fn write_report(&self, f: &mut impl fmt::Write, include_citation: bool) -> fmt::Result {
        if !self.spirometry.is_empty() {
            writeln!(f, "Spirometry:")?;
            for finding in &self.spirometry {
                writeln!(f, "  {finding}")?;
            }
        }
        if let Some(bronchodilator) = &self.bronchodilator {
            writeln!(f, "{bronchodilator}")?;
        }
        if let Some(comparison) = &self.comparison {
            writeln!(f, "{comparison}")?;
        }
        if !self.lung_volumes.is_empty() {
            writeln!(f, "Lung Volumes:")?;
            for finding in &self.lung_volumes {
                writeln!(f, "  {finding}")?;
            }
        }
        if let Some(resistance) = &self.resistance {
            writeln!(f, "{resistance}")?;
        }
        if let Some(dlco) = &self.dlco {
            writeln!(f, "{dlco}")?;
        }
        if let Some(oximetry) = &self.oximetry {
            writeln!(f, "Oximetry:")?;
            writeln!(f, "  {oximetry}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.summary)?;
        if include_citation {
            write!(f, "\n\n{GUIDELINE_CITATION}")?;
        }
        Ok(())
    }

    /// Render the report as a string
    #[must_use]
    pub fn to_report(&self, include_citation: bool) -> String {
        TextReport {
            result: self,
            include_citation,
        }
        .to_string()
    }
}

/// Text rendering of a result with a chosen citation setting
struct TextReport<'a> {
    result: &'a InterpretationResult,
    include_citation: bool,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.result.write_report(f, self.include_citation)
    }
}

impl fmt::Display for InterpretationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, true)
    }
}
