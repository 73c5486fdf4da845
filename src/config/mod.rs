//! Configuration for the PFT interpreter front end.

use serde::{Deserialize, Serialize};

/// How an interpretation is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text clinical report
    #[default]
    Text,
    /// The structured interpretation as JSON
    Json,
}

/// Configuration for rendering interpretations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Output format for the interpretation
    pub output_format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Append the guideline citation to text reports
    pub include_citation: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            pretty_json: false,
            include_citation: true,
        }
    }
}

impl InterpreterConfig {
    /// Set the output format
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Enable or disable pretty JSON output
    #[must_use]
    pub const fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// Enable or disable the guideline citation line
    #[must_use]
    pub const fn with_citation(mut self, include_citation: bool) -> Self {
        self.include_citation = include_citation;
        self
    }
}
