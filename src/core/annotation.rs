use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::WorkflowConfigError;

/// Where per-sequence annotation labels are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AnnotationLabelsSource {
    /// Label each sequence with its FASTA/FASTQ header
    SequenceHeaders,
    /// Label each sequence with the name of the file it came from
    SequenceFileNames,
}

impl AnnotationLabelsSource {
    pub const ALL: [AnnotationLabelsSource; 2] = [Self::SequenceHeaders, Self::SequenceFileNames];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SequenceHeaders => "sequence_headers",
            Self::SequenceFileNames => "sequence_file_names",
        }
    }

    /// Option passed to `metagraph annotate` to select this label source.
    #[must_use]
    pub const fn to_annotation_cmd_option(self) -> &'static str {
        match self {
            Self::SequenceFileNames => "--anno-filename",
            Self::SequenceHeaders => "--anno-header",
        }
    }

    /// Map a label source as written in a config file to its command-line option.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowConfigError::InvalidLabelsSource` if `value` does not
    /// name a label source.
    pub fn cmd_option_for(value: &str) -> Result<&'static str, WorkflowConfigError> {
        Ok(value.parse::<Self>()?.to_annotation_cmd_option())
    }
}

impl std::fmt::Display for AnnotationLabelsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnnotationLabelsSource {
    type Err = WorkflowConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| WorkflowConfigError::InvalidLabelsSource(s.to_string()))
    }
}

/// On-disk annotation matrix encodings the workflow can build.
///
/// `column` and `relax.rb_brwt` are deliberately absent: the column format
/// needs its own handling in the workflow, and relaxation is not available for
/// `rb_brwt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum AnnotationFormat {
    #[serde(rename = "row")]
    #[value(name = "row")]
    Row,
    #[serde(rename = "bin_rel_wt")]
    #[value(name = "bin_rel_wt")]
    BinRelWt,
    #[serde(rename = "flat")]
    #[value(name = "flat")]
    Flat,
    #[serde(rename = "rbfish")]
    #[value(name = "rbfish")]
    RbFish,
    #[serde(rename = "brwt")]
    #[value(name = "brwt")]
    Brwt,
    #[serde(rename = "relax.brwt")]
    #[value(name = "relax.brwt")]
    RelaxedBrwt,
    #[serde(rename = "rb_brwt")]
    #[value(name = "rb_brwt")]
    RbBrwt,
    #[serde(rename = "row_diff_brwt")]
    #[value(name = "row_diff_brwt")]
    RowDiffBrwt,
    #[serde(rename = "relax.row_diff_brwt")]
    #[value(name = "relax.row_diff_brwt")]
    RelaxedRowDiffBrwt,
}

/// Plural name used by workflow code that lists the supported formats
pub type AnnotationFormats = AnnotationFormat;

impl AnnotationFormat {
    pub const ALL: [AnnotationFormat; 9] = [
        Self::Row,
        Self::BinRelWt,
        Self::Flat,
        Self::RbFish,
        Self::Brwt,
        Self::RelaxedBrwt,
        Self::RbBrwt,
        Self::RowDiffBrwt,
        Self::RelaxedRowDiffBrwt,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::BinRelWt => "bin_rel_wt",
            Self::Flat => "flat",
            Self::RbFish => "rbfish",
            Self::Brwt => "brwt",
            Self::RelaxedBrwt => "relax.brwt",
            Self::RbBrwt => "rb_brwt",
            Self::RowDiffBrwt => "row_diff_brwt",
            Self::RelaxedRowDiffBrwt => "relax.row_diff_brwt",
        }
    }

    /// True for formats produced by relaxing a BRWT after construction
    #[must_use]
    pub const fn is_relaxed(self) -> bool {
        matches!(self, Self::RelaxedBrwt | Self::RelaxedRowDiffBrwt)
    }

    /// True for formats built on row-diff transformed annotations
    #[must_use]
    pub const fn is_row_diff(self) -> bool {
        matches!(self, Self::RowDiffBrwt | Self::RelaxedRowDiffBrwt)
    }
}

impl std::fmt::Display for AnnotationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnnotationFormat {
    type Err = WorkflowConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| WorkflowConfigError::UnknownAnnotationFormat(s.to_string()))
    }
}
