use std::io::Write;

use colref_core::ColrefError;
use colref_graph::path;
use colref_refine::serde_io::{report_from_json, report_to_json, write_report};
use colref_refine::{refine, RefineConfig, Refiner};

#[test]
fn empty_yaml_yields_defaults() {
    let config = RefineConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config, RefineConfig::default());
    assert_eq!(config.threads, 1);
    assert!(config.record_rounds);
    assert_eq!(config.max_rounds, None);
}

#[test]
fn yaml_fields_override_defaults() {
    let config = RefineConfig::from_yaml_str("max_rounds: 4\nthreads: 2\n").unwrap();
    assert_eq!(config.max_rounds, Some(4));
    assert_eq!(config.threads, 2);
    assert!(config.record_rounds);
}

#[test]
fn zero_threads_is_rejected() {
    let err = RefineConfig::from_yaml_str("threads: 0\n").unwrap_err();
    assert!(matches!(err, ColrefError::Config(_)));
    assert_eq!(err.info().code, "config-threads");

    let config = RefineConfig {
        threads: 0,
        ..RefineConfig::default()
    };
    assert!(Refiner::new(config).is_err());
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = RefineConfig::from_yaml_str("threads: [oops").unwrap_err();
    assert_eq!(err.info().code, "config-yaml");
}

#[test]
fn config_files_are_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "record_rounds: false").unwrap();
    let config = RefineConfig::load(file.path()).unwrap();
    assert!(!config.record_rounds);

    let dir = tempfile::tempdir().unwrap();
    let err = RefineConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ColrefError::Io(_)));
}

#[test]
fn reports_survive_json() {
    let report = refine(path(5));
    let json = report_to_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["order"], serde_json::json!([1, 5, 2, 4, 3]));
    assert_eq!(value["rounds"], 2);
    assert_eq!(report_from_json(&json).unwrap(), report);
}

#[test]
fn digests_track_the_order() {
    let first = refine(path(5));
    let second = refine(path(5));
    assert_eq!(first.order_digest, second.order_digest);
    assert_eq!(first.order_digest.len(), 64);
    assert_ne!(first.order_digest, refine(path(6)).order_digest);
    assert_ne!(first.graph_hash, first.order_digest);
}

#[test]
fn reports_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.json");
    let report = refine(path(4));
    write_report(&target, &report).unwrap();
    let text = std::fs::read_to_string(&target).unwrap();
    assert_eq!(report_from_json(&text).unwrap(), report);
}
