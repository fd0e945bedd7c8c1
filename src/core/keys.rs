//! Configuration keys recognised in a workflow config file.
//!
//! The string values are read from user-edited config documents, so they must
//! never change once published. [`ConfigKey`] and [`RuleResourceKey`] wrap the
//! same literals in closed enumerations for callers that want typo protection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::WorkflowConfigError;

// Input sequences
pub const SEQS_FILE_LIST_PATH: &str = "seqs_file_list_path";
pub const SEQS_DIR_PATH: &str = "seqs_dir_path";

pub const TMP_DIR: &str = "tmpdir";

pub const PRIMARIZE_SAMPLES_SEPARATELY: &str = "primarize_samples_separately";

// KMC k-mer counting
pub const KMC_MAX_BINS: &str = "kmc_max_bins";
pub const KMC_MEM_MB_PER_THREAD: &str = "kmc_mem_mb_per_thread";
pub const KMC_MEM_OVERHEAD_FACTOR: &str = "kmc_mem_overhead_factor";

// Sample staging
pub const SAMPLE_IDS_PATH: &str = "sample_ids_path";
pub const SAMPLE_STAGING_SCRIPT_PATH: &str = "sample_staging_script_path";
pub const SAMPLE_STAGING_SCRIPT_ADDITIONAL_OPTIONS: &str =
    "sample_staging_script_additional_options";
pub const SAMPLE_STAGING_FILE_ENDING: &str = "sample_staging_file_ending";

// BRWT construction
pub const BRWT_RELAX_ARITY: &str = "brwt_relax_arity";
pub const BRWT_PARALLEL_NODES: &str = "brwt_parallel_nodes";
pub const BRWT_LINKAGE_SUBSAMPLE: &str = "brwt_linkage_subsample";

// Workflow-wide resource caps
pub const MAX_THREADS: &str = "max_threads";
pub const MAX_MEMORY_MB: &str = "max_memory_mb";
pub const MAX_DISK_MB: &str = "max_disk_mb";
pub const MAX_BUFFER_SIZE_MB: &str = "max_buffer_size_mb";

// Per-rule overrides, nested as `rules: {<rule>: {threads: .., mem_mb: ..}}`
pub const RULE_CONFIGS_KEY: &str = "rules";
pub const THREADS_KEY: &str = "threads";
pub const MEM_MB_KEY: &str = "mem_mb";
pub const DISK_MB_KEY: &str = "disk_mb";

pub const MEM_BUFFER_MB_KEY: &str = "mem_buffer_mb";
pub const DISK_CAP_MB_KEY: &str = "disk_cap_mb";

pub const GNU_TIME_CMD: &str = "gnu_time_cmd";

/// Subsystem a configuration key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum KeyGroup {
    Input,
    GraphConstruction,
    Kmc,
    SampleStaging,
    Brwt,
    Resources,
    RuleOverrides,
    Tools,
}

impl std::fmt::Display for KeyGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::GraphConstruction => "graph_construction",
            Self::Kmc => "kmc",
            Self::SampleStaging => "sample_staging",
            Self::Brwt => "brwt",
            Self::Resources => "resources",
            Self::RuleOverrides => "rule_overrides",
            Self::Tools => "tools",
        };
        write!(f, "{name}")
    }
}

/// Type a key's value is expected to have, by convention only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Path,
    Integer,
    Float,
    Bool,
    String,
    /// Nested mapping of rule name to [`RuleResourceKey`] values
    Mapping,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Path => "path",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Mapping => "mapping",
        };
        write!(f, "{name}")
    }
}

/// A top-level key of the workflow config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigKey {
    #[serde(rename = "seqs_file_list_path")]
    SeqsFileListPath,
    #[serde(rename = "seqs_dir_path")]
    SeqsDirPath,
    #[serde(rename = "tmpdir")]
    TmpDir,
    #[serde(rename = "primarize_samples_separately")]
    PrimarizeSamplesSeparately,
    #[serde(rename = "kmc_max_bins")]
    KmcMaxBins,
    #[serde(rename = "kmc_mem_mb_per_thread")]
    KmcMemMbPerThread,
    #[serde(rename = "kmc_mem_overhead_factor")]
    KmcMemOverheadFactor,
    #[serde(rename = "sample_ids_path")]
    SampleIdsPath,
    #[serde(rename = "sample_staging_script_path")]
    SampleStagingScriptPath,
    #[serde(rename = "sample_staging_script_additional_options")]
    SampleStagingScriptAdditionalOptions,
    #[serde(rename = "sample_staging_file_ending")]
    SampleStagingFileEnding,
    #[serde(rename = "brwt_relax_arity")]
    BrwtRelaxArity,
    #[serde(rename = "brwt_parallel_nodes")]
    BrwtParallelNodes,
    #[serde(rename = "brwt_linkage_subsample")]
    BrwtLinkageSubsample,
    #[serde(rename = "max_threads")]
    MaxThreads,
    #[serde(rename = "max_memory_mb")]
    MaxMemoryMb,
    #[serde(rename = "max_disk_mb")]
    MaxDiskMb,
    #[serde(rename = "max_buffer_size_mb")]
    MaxBufferSizeMb,
    #[serde(rename = "rules")]
    Rules,
    #[serde(rename = "gnu_time_cmd")]
    GnuTimeCmd,
}

impl ConfigKey {
    /// Every top-level key, in the order they appear in a config file
    pub const ALL: [ConfigKey; 20] = [
        Self::SeqsFileListPath,
        Self::SeqsDirPath,
        Self::TmpDir,
        Self::PrimarizeSamplesSeparately,
        Self::KmcMaxBins,
        Self::KmcMemMbPerThread,
        Self::KmcMemOverheadFactor,
        Self::SampleIdsPath,
        Self::SampleStagingScriptPath,
        Self::SampleStagingScriptAdditionalOptions,
        Self::SampleStagingFileEnding,
        Self::BrwtRelaxArity,
        Self::BrwtParallelNodes,
        Self::BrwtLinkageSubsample,
        Self::MaxThreads,
        Self::MaxMemoryMb,
        Self::MaxDiskMb,
        Self::MaxBufferSizeMb,
        Self::Rules,
        Self::GnuTimeCmd,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeqsFileListPath => SEQS_FILE_LIST_PATH,
            Self::SeqsDirPath => SEQS_DIR_PATH,
            Self::TmpDir => TMP_DIR,
            Self::PrimarizeSamplesSeparately => PRIMARIZE_SAMPLES_SEPARATELY,
            Self::KmcMaxBins => KMC_MAX_BINS,
            Self::KmcMemMbPerThread => KMC_MEM_MB_PER_THREAD,
            Self::KmcMemOverheadFactor => KMC_MEM_OVERHEAD_FACTOR,
            Self::SampleIdsPath => SAMPLE_IDS_PATH,
            Self::SampleStagingScriptPath => SAMPLE_STAGING_SCRIPT_PATH,
            Self::SampleStagingScriptAdditionalOptions => SAMPLE_STAGING_SCRIPT_ADDITIONAL_OPTIONS,
            Self::SampleStagingFileEnding => SAMPLE_STAGING_FILE_ENDING,
            Self::BrwtRelaxArity => BRWT_RELAX_ARITY,
            Self::BrwtParallelNodes => BRWT_PARALLEL_NODES,
            Self::BrwtLinkageSubsample => BRWT_LINKAGE_SUBSAMPLE,
            Self::MaxThreads => MAX_THREADS,
            Self::MaxMemoryMb => MAX_MEMORY_MB,
            Self::MaxDiskMb => MAX_DISK_MB,
            Self::MaxBufferSizeMb => MAX_BUFFER_SIZE_MB,
            Self::Rules => RULE_CONFIGS_KEY,
            Self::GnuTimeCmd => GNU_TIME_CMD,
        }
    }

    #[must_use]
    pub const fn group(self) -> KeyGroup {
        match self {
            Self::SeqsFileListPath | Self::SeqsDirPath | Self::TmpDir => KeyGroup::Input,
            Self::PrimarizeSamplesSeparately => KeyGroup::GraphConstruction,
            Self::KmcMaxBins | Self::KmcMemMbPerThread | Self::KmcMemOverheadFactor => {
                KeyGroup::Kmc
            }
            Self::SampleIdsPath
            | Self::SampleStagingScriptPath
            | Self::SampleStagingScriptAdditionalOptions
            | Self::SampleStagingFileEnding => KeyGroup::SampleStaging,
            Self::BrwtRelaxArity | Self::BrwtParallelNodes | Self::BrwtLinkageSubsample => {
                KeyGroup::Brwt
            }
            Self::MaxThreads | Self::MaxMemoryMb | Self::MaxDiskMb | Self::MaxBufferSizeMb => {
                KeyGroup::Resources
            }
            Self::Rules => KeyGroup::RuleOverrides,
            Self::GnuTimeCmd => KeyGroup::Tools,
        }
    }

    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::SeqsFileListPath
            | Self::SeqsDirPath
            | Self::TmpDir
            | Self::SampleIdsPath
            | Self::SampleStagingScriptPath => ValueKind::Path,
            Self::PrimarizeSamplesSeparately => ValueKind::Bool,
            Self::KmcMemOverheadFactor => ValueKind::Float,
            Self::SampleStagingScriptAdditionalOptions
            | Self::SampleStagingFileEnding
            | Self::GnuTimeCmd => ValueKind::String,
            Self::Rules => ValueKind::Mapping,
            Self::KmcMaxBins
            | Self::KmcMemMbPerThread
            | Self::BrwtRelaxArity
            | Self::BrwtParallelNodes
            | Self::BrwtLinkageSubsample
            | Self::MaxThreads
            | Self::MaxMemoryMb
            | Self::MaxDiskMb
            | Self::MaxBufferSizeMb => ValueKind::Integer,
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = WorkflowConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| WorkflowConfigError::UnknownConfigKey(s.to_string()))
    }
}

/// A resource override allowed under each rule in the `rules` mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleResourceKey {
    Threads,
    MemMb,
    DiskMb,
    MemBufferMb,
    DiskCapMb,
}

impl RuleResourceKey {
    pub const ALL: [RuleResourceKey; 5] = [
        Self::Threads,
        Self::MemMb,
        Self::DiskMb,
        Self::MemBufferMb,
        Self::DiskCapMb,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Threads => THREADS_KEY,
            Self::MemMb => MEM_MB_KEY,
            Self::DiskMb => DISK_MB_KEY,
            Self::MemBufferMb => MEM_BUFFER_MB_KEY,
            Self::DiskCapMb => DISK_CAP_MB_KEY,
        }
    }
}

impl std::fmt::Display for RuleResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleResourceKey {
    type Err = WorkflowConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| WorkflowConfigError::UnknownRuleResourceKey(s.to_string()))
    }
}

/// All key literals, top-level keys first, then the nested rule keys.
#[must_use]
pub fn all_key_literals() -> Vec<&'static str> {
    ConfigKey::ALL
        .iter()
        .map(|k| k.as_str())
        .chain(RuleResourceKey::ALL.iter().map(|k| k.as_str()))
        .collect()
}
