//! Typed view of a workflow config document.
//!
//! Field names serialise to the literals in [`crate::core::keys`]. Keys this
//! crate does not own are kept in `extra`. Values are carried as given;
//! nothing here checks ranges or paths.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resource overrides for a single workflow rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_buffer_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_cap_mb: Option<u64>,

    /// Other per-rule settings, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Every top-level workflow key, each optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seqs_file_list_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seqs_dir_path: Option<PathBuf>,

    #[serde(rename = "tmpdir", default, skip_serializing_if = "Option::is_none")]
    pub tmp_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primarize_samples_separately: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kmc_max_bins: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kmc_mem_mb_per_thread: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kmc_mem_overhead_factor: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_ids_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_staging_script_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_staging_script_additional_options: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_staging_file_ending: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brwt_relax_arity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brwt_parallel_nodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brwt_linkage_subsample: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_threads: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_disk_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_buffer_size_mb: Option<u64>,

    /// Per-rule overrides, keyed by rule name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleResources>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gnu_time_cmd: Option<String>,

    /// Keys owned by other parts of the workflow (e.g. `k`, `base_name`)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WorkflowSettings {
    /// Overrides configured for `rule`, if any
    #[must_use]
    pub fn rule(&self, rule: &str) -> Option<&RuleResources> {
        self.rules.get(rule)
    }
}
