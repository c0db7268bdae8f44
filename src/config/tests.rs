//! Tests for the config module

use super::*;
use crate::error::MultideployerError;
use std::fs;
use tempfile::tempdir;

const VALID: &str = r#"
version: 1.0
apps:
  - name: web
    release: v1.2.0
    source: github://acme/web
  - name: worker
    release: 3f2c1a9
    source: github://acme/worker
    force: true
"#;

fn parse_err(content: &str) -> ConfigFormatError {
    parse_config(content).unwrap_err()
}

#[test]
fn test_parse_valid_config_keeps_order_and_defaults() {
    let (config, unknown) = parse_config(VALID).unwrap();

    assert!(unknown.is_empty());
    assert_eq!(config.version(), SUPPORTED_VERSION);
    assert_eq!(
        config.apps(),
        &[
            AppSpec::new("web", "v1.2.0", "github://acme/web"),
            AppSpec::new("worker", "3f2c1a9", "github://acme/worker").with_force(true),
        ]
    );
}

#[test]
fn test_integer_version_is_accepted() {
    let content = VALID.replace("version: 1.0", "version: 1");
    assert!(parse_config(&content).is_ok());
}

#[test]
fn test_missing_version_fails() {
    let content = VALID.replace("version: 1.0\n", "");
    assert_eq!(parse_err(&content), ConfigFormatError::MissingVersion);
}

#[test]
fn test_other_version_fails() {
    let content = VALID.replace("version: 1.0", "version: 2.0");
    assert_eq!(
        parse_err(&content),
        ConfigFormatError::UnsupportedVersion {
            found: "2.0".to_string()
        }
    );
}

#[test]
fn test_string_version_fails() {
    let content = VALID.replace("version: 1.0", "version: \"1.0\"");
    assert!(matches!(
        parse_err(&content),
        ConfigFormatError::UnsupportedVersion { .. }
    ));
}

#[test]
fn test_apps_missing_or_not_list() {
    assert_eq!(parse_err("version: 1.0\n"), ConfigFormatError::MissingApps);
    assert_eq!(
        parse_err("version: 1.0\napps: web\n"),
        ConfigFormatError::AppsNotAList
    );
    assert_eq!(
        parse_err("version: 1.0\napps: []\n"),
        ConfigFormatError::NoApps
    );
}

#[test]
fn test_app_not_a_mapping() {
    assert_eq!(
        parse_err("version: 1.0\napps:\n  - web\n"),
        ConfigFormatError::AppNotAMapping { index: 0 }
    );
}

#[test]
fn test_app_missing_required_field() {
    let content = r#"
version: 1.0
apps:
  - name: web
    source: github://acme/web
"#;
    assert_eq!(
        parse_err(content),
        ConfigFormatError::MissingField {
            index: 0,
            field: "release"
        }
    );
}

#[test]
fn test_app_name_must_stay_inside_run_dir() {
    for name in ["../../escaped", "/etc/foo", "a/b", "a\\\\b", ".", ".."] {
        let content = format!(
            "version: 1.0\napps:\n  - name: \"{}\"\n    release: v1\n    source: github://acme/web\n",
            name
        );
        assert_eq!(
            parse_err(&content),
            ConfigFormatError::InvalidField {
                index: 0,
                field: "name",
                expected: "a plain directory name"
            },
            "name {:?} should be rejected",
            name
        );
    }
}

#[test]
fn test_app_name_with_dots_is_accepted() {
    let content = "version: 1.0\napps:\n  - name: web.v2..old\n    release: v1\n    source: github://acme/web\n";
    let (config, _) = parse_config(content).unwrap();
    assert_eq!(config.apps()[0].name, "web.v2..old");
}

#[test]
fn test_app_empty_field() {
    let content = r#"
version: 1.0
apps:
  - name: web
    release: v1
    source: github://acme/web
  - name: ""
    release: v1
    source: github://acme/api
"#;
    assert_eq!(
        parse_err(content),
        ConfigFormatError::EmptyField {
            index: 1,
            field: "name"
        }
    );
}

#[test]
fn test_null_field_counts_as_empty() {
    let content = "version: 1.0\napps:\n  - name: web\n    release:\n    source: github://a/b\n";
    assert_eq!(
        parse_err(content),
        ConfigFormatError::EmptyField {
            index: 0,
            field: "release"
        }
    );
}

#[test]
fn test_numeric_release_is_stringified() {
    let content = "version: 1.0\napps:\n  - name: web\n    release: 42\n    source: github://a/b\n";
    let (config, _) = parse_config(content).unwrap();
    assert_eq!(config.apps()[0].release, "42");
}

#[test]
fn test_non_bool_force_fails() {
    let content =
        "version: 1.0\napps:\n  - name: web\n    release: v1\n    source: github://a/b\n    force: yes please\n";
    assert!(matches!(
        parse_err(content),
        ConfigFormatError::InvalidField { field: "force", .. }
    ));
}

#[test]
fn test_duplicate_app_name_fails() {
    let content = r#"
version: 1.0
apps:
  - name: web
    release: v1
    source: github://acme/web
  - name: web
    release: v2
    source: github://acme/web
"#;
    assert_eq!(
        parse_err(content),
        ConfigFormatError::DuplicateName {
            name: "web".to_string()
        }
    );
}

#[test]
fn test_invalid_yaml_fails() {
    assert!(matches!(
        parse_err("version: [1.0\n"),
        ConfigFormatError::Yaml(_)
    ));
}

#[test]
fn test_unknown_keys_are_reported_not_rejected() {
    let content = r#"
version: 1.0
owner: platform-team
apps:
  - name: web
    release: v1
    source: github://acme/web
    colour: blue
"#;
    let (config, unknown) = parse_config(content).unwrap();
    assert_eq!(config.apps().len(), 1);
    assert_eq!(unknown.len(), 2);
    assert!(unknown.iter().any(|k| k.contains("owner")));
    assert!(unknown.iter().any(|k| k.contains("colour")));
}

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = load(&dir.path().join("multideployer.yaml")).unwrap_err();
    assert!(matches!(err, MultideployerError::ConfigNotFound { .. }));
}

#[test]
fn test_load_with_warnings_reports_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multideployer.yaml");
    fs::write(
        &path,
        "version: 1.0\napps:\n  - name: web\n    release: v1\n    source: github://a/b\n    colour: blue\n",
    )
    .unwrap();

    let (_, warnings) = load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, Some(6));
}

#[test]
fn test_load_wraps_format_error_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multideployer.yaml");
    fs::write(&path, "version: 3\napps: []\n").unwrap();

    match Config::load(&path).unwrap_err() {
        MultideployerError::ConfigFormat { path: p, source } => {
            assert_eq!(p, path);
            assert!(matches!(source, ConfigFormatError::UnsupportedVersion { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_select_filters_and_reports_unknown() {
    let (config, _) = parse_config(VALID).unwrap();

    let (all, unknown) = config.select(&[]);
    assert_eq!(all.len(), 2);
    assert!(unknown.is_empty());

    let (picked, unknown) = config.select(&["worker".to_string(), "db".to_string()]);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, "worker");
    assert_eq!(unknown, vec!["db".to_string()]);
}
