//! YAML State Repository
//!
//! Implements the StateRepository port. The state file is
//! `<store>/last_state.yaml`:
//!
//! ```yaml
//! web:
//!   release: v1.2.0
//! ```

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_yaml_ng::Value;

use crate::domain::entities::DeployState;
use crate::domain::ports::StateRepository;
use crate::domain::value_objects::STATE_FILE_NAME;
use crate::error::{MultideployerError, MultideployerResult};
use crate::infrastructure::fs::write_atomic;

/// YAML-backed deploy state
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlStateRepository;

impl YamlStateRepository {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct YamlStateEntry {
    #[serde(deserialize_with = "release_from_scalar")]
    release: String,
}

/// Releases may be hand-written as numbers, as in the config file
fn release_from_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(de::Error::custom("release must be a string or a number")),
    }
}

type YamlState = BTreeMap<String, YamlStateEntry>;

impl StateRepository for YamlStateRepository {
    fn load_last_state(&self, store_dir: &Path) -> MultideployerResult<DeployState> {
        let path = store_dir.join(STATE_FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DeployState::new()),
            Err(e) => {
                return Err(MultideployerError::io(
                    format!("cannot read {}", path.display()),
                    e,
                ))
            }
        };

        let mut state = DeployState::new();
        if content.trim().is_empty() {
            return Ok(state);
        }

        let parsed: YamlState =
            serde_yaml_ng::from_str(&content).map_err(|e| MultideployerError::State {
                path: path.clone(),
                message: e.to_string(),
            })?;
        for (name, entry) in parsed {
            state.record(name, entry.release);
        }
        Ok(state)
    }

    fn persist(&self, store_dir: &Path, state: &DeployState) -> MultideployerResult<()> {
        let path = store_dir.join(STATE_FILE_NAME);
        let yaml: YamlState = state
            .entries()
            .map(|(name, entry)| {
                (
                    name.to_string(),
                    YamlStateEntry {
                        release: entry.release().to_string(),
                    },
                )
            })
            .collect();

        let content = serde_yaml_ng::to_string(&yaml).map_err(|e| MultideployerError::State {
            path: path.clone(),
            message: e.to_string(),
        })?;
        write_atomic(&path, content.as_bytes())
    }
}
