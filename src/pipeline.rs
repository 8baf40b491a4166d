use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::RecoveryConfig,
    error::{RecoveryError, RecoveryResult},
    interpolate::interpolate_at_zero,
    serde_helpers::bigint_decimal,
    shares::{ShareSet, SharePoint, ShareSetBuilder},
};

/// Recovers secrets from share documents.
///
/// Holds no state besides its configuration, so one instance can serve any
/// number of documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Recovery {
    builder: ShareSetBuilder,
}

impl Recovery {
    pub fn new(config: RecoveryConfig) -> Self {
        Recovery {
            builder: ShareSetBuilder::new(config),
        }
    }

    pub fn config(&self) -> &RecoveryConfig {
        self.builder.config()
    }

    pub fn recover(&self, document: &Value) -> RecoveryResult<BigInt> {
        let share_set = self.builder.build(document)?;
        let selected = select_shares(&share_set)?;
        let secret = interpolate_at_zero(selected)?;
        debug!(threshold = share_set.threshold(), %secret, "recovered secret");
        Ok(secret)
    }

    /// Parses `json` and recovers its secret.
    pub fn recover_str(&self, json: &str) -> RecoveryResult<BigInt> {
        let document: Value = serde_json::from_str(json)?;
        self.recover(&document)
    }

    /// Recovers every document independently; one failure does not stop the rest.
    pub fn recover_all<'a, I>(&self, documents: I) -> Vec<RecoveryResult<BigInt>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        documents
            .into_iter()
            .map(|document| self.recover(document))
            .collect()
    }
}

/// Recovers the secret of `document` with the default configuration.
pub fn recover(document: &Value) -> RecoveryResult<BigInt> {
    Recovery::default().recover(document)
}

/// The first `threshold` points of the set, in ascending x order.
pub fn select_shares(share_set: &ShareSet) -> RecoveryResult<&[SharePoint]> {
    let threshold = share_set.threshold();
    let points = share_set.points();
    if points.len() < threshold {
        return Err(RecoveryError::InsufficientShares {
            threshold,
            available: points.len(),
        });
    }
    Ok(&points[..threshold])
}

/// Outcome of one recovery, as printed by the command line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecoveryReport {
    Recovered {
        source: String,
        #[serde(with = "bigint_decimal")]
        secret: BigInt,
    },
    Failed {
        source: String,
        error: String,
    },
}

impl RecoveryReport {
    pub fn new(source: impl Into<String>, result: &RecoveryResult<BigInt>) -> Self {
        let source = source.into();
        match result {
            Ok(secret) => RecoveryReport::Recovered {
                source,
                secret: secret.clone(),
            },
            Err(e) => RecoveryReport::Failed {
                source,
                error: e.to_string(),
            },
        }
    }
}
