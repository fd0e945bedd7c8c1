use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::keys::{ConfigKey, KeyGroup, RuleResourceKey, ValueKind, RULE_CONFIGS_KEY};

#[derive(Args)]
pub struct KeysArgs {
    /// Only list keys of this group
    #[arg(long, value_enum)]
    pub group: Option<KeyGroup>,
}

/// One listed key; nested rule keys carry their full path
#[derive(Debug, Serialize)]
pub struct KeyEntry {
    pub key: String,
    pub group: KeyGroup,
    pub value_kind: ValueKind,
}

/// Collect key entries, top-level keys first, optionally restricted to `group`.
#[must_use]
pub fn collect_entries(group: Option<KeyGroup>) -> Vec<KeyEntry> {
    let top_level = ConfigKey::ALL.into_iter().map(|key| KeyEntry {
        key: key.as_str().to_string(),
        group: key.group(),
        value_kind: key.value_kind(),
    });
    let nested = RuleResourceKey::ALL.into_iter().map(|key| KeyEntry {
        key: format!("{RULE_CONFIGS_KEY}.<rule>.{key}"),
        group: KeyGroup::RuleOverrides,
        value_kind: ValueKind::Integer,
    });

    top_level
        .chain(nested)
        .filter(|entry| group.map_or(true, |g| entry.group == g))
        .collect()
}

pub fn run(args: KeysArgs, format: OutputFormat) -> anyhow::Result<()> {
    let entries = collect_entries(args.group);
    tracing::debug!(count = entries.len(), group = ?args.group, "Listing config keys");

    match format {
        OutputFormat::Text => {
            println!("Workflow config keys ({}):\n", entries.len());
            let mut current: Option<KeyGroup> = None;
            for entry in &entries {
                if current != Some(entry.group) {
                    if current.is_some() {
                        println!();
                    }
                    println!("{}:", entry.group);
                    current = Some(entry.group);
                }
                println!("  {:<45} {}", entry.key, entry.value_kind);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Tsv => {
            println!("key\tgroup\tvalue_kind");
            for entry in &entries {
                println!("{}\t{}\t{}", entry.key, entry.group, entry.value_kind);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_all_entries() {
        let entries = collect_entries(None);
        assert_eq!(entries.len(), ConfigKey::ALL.len() + RuleResourceKey::ALL.len());
        assert_eq!(entries[0].key, "seqs_file_list_path");
        assert_eq!(entries.last().unwrap().key, "rules.<rule>.disk_cap_mb");
    }

    #[test]
    fn test_collect_rule_overrides() {
        let entries = collect_entries(Some(KeyGroup::RuleOverrides));
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "rules",
                "rules.<rule>.threads",
                "rules.<rule>.mem_mb",
                "rules.<rule>.disk_mb",
                "rules.<rule>.mem_buffer_mb",
                "rules.<rule>.disk_cap_mb",
            ]
        );
    }

    #[test]
    fn test_collect_kmc() {
        let entries = collect_entries(Some(KeyGroup::Kmc));
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.key.starts_with("kmc_")));
    }
}
