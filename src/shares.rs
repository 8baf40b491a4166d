use num_bigint::BigInt;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    config::RecoveryConfig,
    decoder::decode,
    error::{RecoveryError, RecoveryResult},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePoint {
    x: BigInt,
    y: BigInt,
}

impl SharePoint {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        SharePoint {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// Shares of one secret, ordered by ascending x.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    total_shares: usize, //n
    threshold: usize,    //k
    points: Vec<SharePoint>,
}

impl ShareSet {
    pub fn total_shares(&self) -> usize {
        self.total_shares
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn points(&self) -> &[SharePoint] {
        &self.points
    }
}

/// Extracts a typed [`ShareSet`] from a parsed JSON document.
#[derive(Debug, Clone, Default)]
pub struct ShareSetBuilder {
    config: RecoveryConfig,
}

impl ShareSetBuilder {
    pub fn new(config: RecoveryConfig) -> Self {
        ShareSetBuilder { config }
    }

    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    pub fn build(&self, document: &Value) -> RecoveryResult<ShareSet> {
        let root = document
            .as_object()
            .ok_or_else(|| RecoveryError::malformed("document is not an object"))?;

        let metadata_key = self.config.metadata_key.as_str();
        let metadata = root
            .get(metadata_key)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                RecoveryError::malformed(format!("missing metadata object {:?}", metadata_key))
            })?;
        let total_shares = count_field(metadata, "n", metadata_key)?;
        let threshold = count_field(metadata, "k", metadata_key)?;
        if threshold < 1 {
            return Err(RecoveryError::malformed("threshold k must be at least 1"));
        }

        let mut points = root
            .iter()
            .filter(|(key, _)| key.as_str() != metadata_key)
            .map(|(key, entry)| parse_point(key, entry))
            .collect::<RecoveryResult<Vec<SharePoint>>>()?;

        points.sort_by(|a, b| a.x.cmp(&b.x));
        if let Some(pair) = points.windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(RecoveryError::DuplicateAbscissa(pair[0].x.clone()));
        }

        if points.len() != total_shares {
            if self.config.strict_share_count {
                return Err(RecoveryError::malformed(format!(
                    "document declares n = {} but holds {} points",
                    total_shares,
                    points.len()
                )));
            }
            warn!(
                declared = total_shares,
                found = points.len(),
                "share count does not match metadata"
            );
        }

        debug!(total_shares, threshold, points = points.len(), "built share set");
        Ok(ShareSet {
            total_shares,
            threshold,
            points,
        })
    }
}

/// Builds a [`ShareSet`] with the default configuration.
pub fn build_share_set(document: &Value) -> RecoveryResult<ShareSet> {
    ShareSetBuilder::default().build(document)
}

fn parse_point(key: &str, entry: &Value) -> RecoveryResult<SharePoint> {
    let x = parse_decimal(key).ok_or_else(|| {
        RecoveryError::malformed(format!("share key {:?} is not an integer", key))
    })?;
    let fields = entry
        .as_object()
        .ok_or_else(|| RecoveryError::malformed(format!("share {:?} is not an object", key)))?;

    let base = integer_field(fields, "base", key)?;
    if base < BigInt::from(2) {
        return Err(RecoveryError::InvalidBase { base });
    }
    let base = u64::try_from(&base).map_err(|_| {
        RecoveryError::malformed(format!("share {:?} has unsupported base {} above u64", key, base))
    })?;
    let digits = fields.get("value").and_then(Value::as_str).ok_or_else(|| {
        RecoveryError::malformed(format!("share {:?} is missing string field \"value\"", key))
    })?;

    let y = decode(digits, base)?;
    Ok(SharePoint::new(x, y))
}

fn count_field(object: &Map<String, Value>, field: &str, context: &str) -> RecoveryResult<usize> {
    let value = integer_field(object, field, context)?;
    usize::try_from(&value).map_err(|_| {
        RecoveryError::malformed(format!("{:?}.{} is out of range: {}", context, field, value))
    })
}

/// Reads an integer that is either a JSON number or a decimal string.
fn integer_field(
    object: &Map<String, Value>,
    field: &str,
    context: &str,
) -> RecoveryResult<BigInt> {
    let value = object.get(field).ok_or_else(|| {
        RecoveryError::malformed(format!("{:?} is missing field {:?}", context, field))
    })?;
    let parsed = match value {
        Value::Number(number) => number
            .as_i64()
            .map(BigInt::from)
            .or_else(|| number.as_u64().map(BigInt::from)),
        Value::String(text) => parse_decimal(text),
        _ => None,
    };
    parsed.ok_or_else(|| {
        RecoveryError::malformed(format!("{:?}.{} is not an integer: {}", context, field, value))
    })
}

/// Strict decimal: optional sign followed by ASCII digits only.
fn parse_decimal(text: &str) -> Option<BigInt> {
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
