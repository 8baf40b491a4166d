use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::RecoveryResult;

pub const DEFAULT_METADATA_KEY: &str = "keys";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Top-level key holding the `n` / `k` metadata object.
    pub metadata_key: String,
    /// Reject documents whose point count differs from `n` instead of warning.
    pub strict_share_count: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        RecoveryConfig {
            metadata_key: DEFAULT_METADATA_KEY.to_string(),
            strict_share_count: false,
        }
    }
}

impl RecoveryConfig {
    pub fn from_json(json: &str) -> RecoveryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> RecoveryResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
