//! DNS resolution and cross-resolver comparison.
//!
//! This module provides the comparison pipeline:
//! - Record line parsing (`TYPE host`)
//! - Per-nameserver lookups through the `DnsLookup` capability (`hickory-resolver` in
//!   production)
//! - Normalization of answers into canonical, order-independent strings
//! - Comparison of canonical strings across nameservers
//!
//! Lookup failures never abort a run; they become empty values.

mod compare;
mod lookup;
mod normalize;
mod record;
mod resolver_set;

// Re-export public API
pub use compare::are_responses_identical;
pub use lookup::{
    canonical_name, create_resolver, resolver_config, DnsLookup, HickoryLookup, LookupTarget,
    RawAnswer,
};
pub use normalize::{normalize, normalize_answer};
pub use record::{is_valid_record_type, parse_record, Record, RecordType};
pub use resolver_set::ResolverSet;
