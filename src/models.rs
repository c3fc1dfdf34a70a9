use serde::Serialize;

use crate::dns::RecordType;

/// One nameserver's answer for one record.
///
/// `value` is the canonical answer string, or empty if the lookup failed. An empty
/// value is left out of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsResponse {
    pub resolver: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// The answers of every configured nameserver for one record.
///
/// `responses` has one entry per nameserver, in configuration order. `identical` is
/// true when every response value is the same, including when all of them are empty.
/// `identical` only appears in the JSON output when true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsResult {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub host: String,
    pub responses: Vec<DnsResponse>,
    #[serde(skip_serializing_if = "is_false")]
    pub identical: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
