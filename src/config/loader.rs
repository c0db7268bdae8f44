//! Configuration loading and validation

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

use crate::error::{MultideployerError, MultideployerResult};

use super::types::{AppSpec, Config, ConfigFormatError, SUPPORTED_VERSION};

/// Non-fatal configuration warning (unknown keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the ignored key, e.g. `apps.0.colour`
    pub key: String,
    pub line: Option<usize>,
}

/// Load and validate a configuration file, dropping warnings.
pub fn load(path: &Path) -> MultideployerResult<Config> {
    load_with_warnings(path).map(|(config, _)| config)
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> MultideployerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MultideployerError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => MultideployerError::io(format!("cannot read {}", path.display()), e),
    })?;

    let (config, ignored) =
        parse_config(&content).map_err(|source| MultideployerError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })?;

    let warnings = ignored
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Parse and validate configuration text.
///
/// Returns the typed config plus the dotted paths of any unknown keys.
pub fn parse_config(content: &str) -> Result<(Config, Vec<String>), ConfigFormatError> {
    let value: Value =
        serde_yaml_ng::from_str(content).map_err(|e| ConfigFormatError::Yaml(e.to_string()))?;
    let config = validate(&value)?;
    Ok((config, unknown_keys(content)))
}

/// Single validation pass over the untyped document.
fn validate(value: &Value) -> Result<Config, ConfigFormatError> {
    let root = value.as_mapping().ok_or(ConfigFormatError::NotAMapping)?;

    match root.get("version") {
        None | Some(Value::Null) => return Err(ConfigFormatError::MissingVersion),
        Some(Value::Number(n)) if n.as_f64() == Some(SUPPORTED_VERSION) => {}
        Some(other) => {
            return Err(ConfigFormatError::UnsupportedVersion {
                found: describe(other),
            })
        }
    }

    let apps = match root.get("apps") {
        None | Some(Value::Null) => return Err(ConfigFormatError::MissingApps),
        Some(Value::Sequence(apps)) => apps,
        Some(_) => return Err(ConfigFormatError::AppsNotAList),
    };
    if apps.is_empty() {
        return Err(ConfigFormatError::NoApps);
    }

    let mut seen = HashSet::new();
    let mut specs = Vec::with_capacity(apps.len());
    for (index, app) in apps.iter().enumerate() {
        let map = app
            .as_mapping()
            .ok_or(ConfigFormatError::AppNotAMapping { index })?;
        let spec = validate_app(index, map)?;
        if !seen.insert(spec.name.clone()) {
            return Err(ConfigFormatError::DuplicateName { name: spec.name });
        }
        specs.push(spec);
    }

    Ok(Config::from_apps(specs))
}

fn validate_app(index: usize, map: &Mapping) -> Result<AppSpec, ConfigFormatError> {
    let name = required_string(index, map, "name", false)?;
    if !is_plain_dir_name(&name) {
        return Err(ConfigFormatError::InvalidField {
            index,
            field: "name",
            expected: "a plain directory name",
        });
    }
    let release = required_string(index, map, "release", true)?;
    let source = required_string(index, map, "source", false)?;

    let force = match map.get("force") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            return Err(ConfigFormatError::InvalidField {
                index,
                field: "force",
                expected: "a boolean",
            })
        }
    };

    Ok(AppSpec {
        name,
        release,
        source,
        force,
    })
}

/// Names become a directory under the deploy run, so they must stay there.
fn is_plain_dir_name(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

fn required_string(
    index: usize,
    map: &Mapping,
    field: &'static str,
    allow_number: bool,
) -> Result<String, ConfigFormatError> {
    let value = map
        .get(field)
        .ok_or(ConfigFormatError::MissingField { index, field })?;

    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) if allow_number => n.to_string(),
        _ => {
            return Err(ConfigFormatError::InvalidField {
                index,
                field,
                expected: if allow_number {
                    "a string or number"
                } else {
                    "a string"
                },
            })
        }
    };

    if text.is_empty() {
        return Err(ConfigFormatError::EmptyField { index, field });
    }
    Ok(text)
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        _ => "an unsupported value".to_string(),
    }
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct KnownShape {
    version: Value,
    apps: Vec<KnownApp>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct KnownApp {
    name: Value,
    release: Value,
    source: Value,
    #[serde(default)]
    force: Value,
}

/// Collect keys outside the known schema. Only called on validated input.
fn unknown_keys(content: &str) -> Vec<String> {
    let mut unknown = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);
    let parsed: Result<KnownShape, _> = serde_ignored::deserialize(deserializer, |path| {
        unknown.push(path.to_string());
    });
    match parsed {
        Ok(_) => unknown,
        Err(_) => Vec::new(),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().trim_start_matches("- ").starts_with(needle))
        .map(|i| i + 1)
}
