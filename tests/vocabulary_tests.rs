//! Public API tests for the workflow config vocabulary
//!
//! These pin every literal shared with config files and the `metagraph`
//! command line.

use metagraph_workflow_config::core::keys;
use metagraph_workflow_config::{
    AnnotationFormat, AnnotationLabelsSource, ConfigKey, RuleResourceKey, WorkflowConfigError,
    WorkflowSettings,
};
use std::collections::HashSet;

#[test]
fn test_key_literals_are_stable() {
    let expected = [
        (keys::SEQS_FILE_LIST_PATH, "seqs_file_list_path"),
        (keys::SEQS_DIR_PATH, "seqs_dir_path"),
        (keys::TMP_DIR, "tmpdir"),
        (keys::PRIMARIZE_SAMPLES_SEPARATELY, "primarize_samples_separately"),
        (keys::KMC_MAX_BINS, "kmc_max_bins"),
        (keys::KMC_MEM_MB_PER_THREAD, "kmc_mem_mb_per_thread"),
        (keys::KMC_MEM_OVERHEAD_FACTOR, "kmc_mem_overhead_factor"),
        (keys::SAMPLE_IDS_PATH, "sample_ids_path"),
        (keys::SAMPLE_STAGING_SCRIPT_PATH, "sample_staging_script_path"),
        (
            keys::SAMPLE_STAGING_SCRIPT_ADDITIONAL_OPTIONS,
            "sample_staging_script_additional_options",
        ),
        (keys::SAMPLE_STAGING_FILE_ENDING, "sample_staging_file_ending"),
        (keys::BRWT_RELAX_ARITY, "brwt_relax_arity"),
        (keys::BRWT_PARALLEL_NODES, "brwt_parallel_nodes"),
        (keys::BRWT_LINKAGE_SUBSAMPLE, "brwt_linkage_subsample"),
        (keys::MAX_THREADS, "max_threads"),
        (keys::MAX_MEMORY_MB, "max_memory_mb"),
        (keys::MAX_DISK_MB, "max_disk_mb"),
        (keys::MAX_BUFFER_SIZE_MB, "max_buffer_size_mb"),
        (keys::RULE_CONFIGS_KEY, "rules"),
        (keys::THREADS_KEY, "threads"),
        (keys::MEM_MB_KEY, "mem_mb"),
        (keys::DISK_MB_KEY, "disk_mb"),
        (keys::MEM_BUFFER_MB_KEY, "mem_buffer_mb"),
        (keys::DISK_CAP_MB_KEY, "disk_cap_mb"),
        (keys::GNU_TIME_CMD, "gnu_time_cmd"),
    ];

    for (constant, literal) in expected {
        assert_eq!(constant, literal);
    }

    let unique: HashSet<&str> = expected.iter().map(|(c, _)| *c).collect();
    assert_eq!(unique.len(), expected.len());
    assert_eq!(keys::all_key_literals().len(), expected.len());
}

#[test]
fn test_typed_keys_cover_every_literal() {
    let typed: HashSet<&str> = ConfigKey::ALL
        .iter()
        .map(|k| k.as_str())
        .chain(RuleResourceKey::ALL.iter().map(|k| k.as_str()))
        .collect();
    let literals: HashSet<&str> = keys::all_key_literals().into_iter().collect();
    assert_eq!(typed, literals);
}

#[test]
fn test_labels_source_options() {
    assert_eq!(
        AnnotationLabelsSource::SequenceHeaders.to_annotation_cmd_option(),
        "--anno-header"
    );
    assert_eq!(
        AnnotationLabelsSource::SequenceFileNames.to_annotation_cmd_option(),
        "--anno-filename"
    );
    assert_eq!(
        AnnotationLabelsSource::SequenceFileNames.to_string(),
        "sequence_file_names"
    );
}

#[test]
fn test_labels_source_invalid_state() {
    let result = AnnotationLabelsSource::cmd_option_for("SEQUENCE_HEADERS");
    assert_eq!(
        result,
        Err(WorkflowConfigError::InvalidLabelsSource(
            "SEQUENCE_HEADERS".to_string()
        ))
    );
}

#[test]
fn test_annotation_formats() {
    assert_eq!(AnnotationFormat::ALL.len(), 9);
    for format in AnnotationFormat::ALL {
        assert_eq!(format.as_str().parse::<AnnotationFormat>(), Ok(format));
    }
    assert!("column".parse::<AnnotationFormat>().is_err());
    assert!("relax.rb_brwt".parse::<AnnotationFormat>().is_err());
}

#[test]
fn test_settings_from_config_document() {
    let json = r#"{
        "seqs_dir_path": "data/",
        "kmc_mem_overhead_factor": 0.25,
        "primarize_samples_separately": false,
        "gnu_time_cmd": "/usr/bin/time",
        "rules": {
            "build_joint_graph": {"threads": 4, "disk_cap_mb": 20000}
        }
    }"#;
    let settings: WorkflowSettings = serde_json::from_str(json).unwrap();

    assert_eq!(settings.kmc_mem_overhead_factor, Some(0.25));
    assert_eq!(settings.primarize_samples_separately, Some(false));
    assert_eq!(settings.gnu_time_cmd.as_deref(), Some("/usr/bin/time"));

    let rule = settings.rule("build_joint_graph").unwrap();
    assert_eq!(rule.threads, Some(4));
    assert_eq!(rule.disk_cap_mb, Some(20_000));
    assert_eq!(rule.mem_mb, None);
}
