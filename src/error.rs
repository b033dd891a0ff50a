use thiserror::Error;

use crate::common::types::Timestamp;
use crate::error_consts;

#[derive(Debug, Error, Clone, PartialEq)]
/// Enum for various errors in Tsdb.
pub enum TsdbError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("{}", error_consts::INVALID_TIMESTAMP)]
    InvalidTimestamp(String),

    #[error("{}", error_consts::INVALID_VALUE)]
    InvalidValue(String),

    #[error("{}", error_consts::INVALID_DUPLICATE_POLICY)]
    InvalidDuplicatePolicy(String),

    #[error("{}", error_consts::DUPLICATE_SAMPLE)]
    DuplicateSample(Timestamp),

    #[error("{}", error_consts::KEY_NOT_FOUND)]
    UnknownSeries(String),

    #[error("{}", error_consts::KEY_EXISTS)]
    SeriesExists(String),

    #[error("Serialization error. {0}")]
    CannotSerialize(String),

    #[error("Cannot deserialize. {0}")]
    CannotDeserialize(String),

    #[error("{0}")]
    General(String),
}

impl TsdbError {
    pub(crate) fn invalid_args(msg: &str) -> Self {
        TsdbError::InvalidArguments(msg.to_string())
    }
}

pub type TsdbResult<T> = Result<T, TsdbError>;

#[cfg(feature = "module")]
impl From<TsdbError> for valkey_module::ValkeyError {
    fn from(e: TsdbError) -> Self {
        valkey_module::ValkeyError::String(format!("ERR {e}"))
    }
}
