use num_bigint::BigInt;
use thiserror::Error;

pub type RecoveryResult<T> = Result<T, RecoveryError>;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("invalid base {base}: base must be at least 2")]
    InvalidBase { base: BigInt },
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u64,
    },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("insufficient shares: threshold is {threshold} but only {available} available")]
    InsufficientShares { threshold: usize, available: usize },
    #[error("duplicate abscissa x = {0}")]
    DuplicateAbscissa(BigInt),
    /// The selected points do not lie on a single integer-coefficient polynomial.
    #[error("inconsistent shares: interpolated secret is not an integer")]
    InconsistentShares,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecoveryError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        RecoveryError::MalformedInput(msg.into())
    }
}
