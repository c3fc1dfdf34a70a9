//! Record types and record line parsing.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::ConfigError;

/// Supported DNS record types.
///
/// Closed set: lookup dispatch and normalization match on it exhaustively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Cname,
    Mx,
    Txt,
}

/// A record to resolve, as read from one configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub record_type: RecordType,
    pub host: String,
}

/// Parses a `"<TYPE> <HOST>"` line.
///
/// The type is case-insensitive; the host is kept as written.
///
/// # Errors
///
/// - `ConfigError::MalformedRecord` if the line is not exactly two tokens
/// - `ConfigError::InvalidRecordType` if the type is not A, CNAME, MX or TXT
pub fn parse_record(line: &str) -> Result<Record, ConfigError> {
    let chunks: Vec<&str> = line.split_whitespace().collect();
    let [record_type, host] = chunks.as_slice() else {
        return Err(ConfigError::MalformedRecord(line.to_string()));
    };

    let upper = record_type.to_uppercase();
    let record_type = upper
        .parse::<RecordType>()
        .map_err(|_| ConfigError::InvalidRecordType(upper.clone()))?;

    Ok(Record {
        record_type,
        host: (*host).to_string(),
    })
}

/// Returns true if `record_type` (already upper-cased) is a supported type.
pub fn is_valid_record_type(record_type: &str) -> bool {
    record_type.parse::<RecordType>().is_ok()
}
