//! The DNS lookup capability.
//!
//! `DnsLookup` is the seam between the comparison pipeline and the network. The
//! production implementation, `HickoryLookup`, uses `hickory-resolver` with a resolver
//! routed to exactly one nameserver; tests substitute their own implementation.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfigGroup, ResolverConfig, ResolverOpts,
};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{Name, RData, Record as WireRecord, RecordType as WireRecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{Nameserver, DNS_ATTEMPTS, MAX_CNAME_HOPS};
use crate::dns::record::{Record, RecordType};
use crate::error_handling::LookupError;

/// Where and how to send a single query.
///
/// Passed explicitly to every lookup; there is no shared resolver state.
#[derive(Debug, Clone)]
pub struct LookupTarget {
    pub nameserver: Nameserver,
    pub timeout: Duration,
}

/// Type-specific answer data, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAnswer {
    /// A: the IPv4 and IPv6 addresses of the host
    Addresses(Vec<IpAddr>),
    /// CNAME: the canonical name, fully qualified
    Name(String),
    /// MX: `(preference, exchange)` pairs
    MailExchangers(Vec<(u16, String)>),
    /// TXT: one string per record, character-strings concatenated
    Texts(Vec<String>),
}

/// Performs one DNS query against one nameserver.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup(&self, target: &LookupTarget, record: &Record)
        -> Result<RawAnswer, LookupError>;
}

/// `DnsLookup` backed by `hickory-resolver`.
#[derive(Debug, Clone, Default)]
pub struct HickoryLookup;

impl HickoryLookup {
    pub fn new() -> Self {
        Self
    }
}

/// Resolver configuration that talks only to `target`.
///
/// UDP with TCP fallback, a single attempt bounded by the target's timeout, no
/// answer cache, no `/etc/hosts`, no search domains. Address lookups ask for both A and
/// AAAA, and CNAME records met on the way are kept in the answer.
pub fn resolver_config(target: &LookupTarget) -> (ResolverConfig, ResolverOpts) {
    let addr = target.nameserver.addr();
    let group = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
    let config = ResolverConfig::from_parts(None, vec![], group);

    let mut opts = ResolverOpts::default();
    opts.timeout = target.timeout;
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;
    opts.use_hosts_file = false;
    opts.cache_size = 0;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    opts.preserve_intermediates = true;

    (config, opts)
}

/// Builds a resolver for `target`.
///
/// A fresh resolver is built for every query so no answer is ever served from a
/// previous query's cache.
pub fn create_resolver(target: &LookupTarget) -> TokioAsyncResolver {
    let (config, opts) = resolver_config(target);
    TokioAsyncResolver::tokio(config, opts)
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn lookup(
        &self,
        target: &LookupTarget,
        record: &Record,
    ) -> Result<RawAnswer, LookupError> {
        let resolver = create_resolver(target);
        let host = record.host.as_str();

        match record.record_type {
            RecordType::A => lookup_a(&resolver, host).await,
            RecordType::Cname => lookup_cname(&resolver, host).await,
            RecordType::Mx => lookup_mx(&resolver, host).await,
            RecordType::Txt => lookup_txt(&resolver, host).await,
        }
    }
}

async fn lookup_a(resolver: &TokioAsyncResolver, host: &str) -> Result<RawAnswer, LookupError> {
    let response = resolver.lookup_ip(host).await?;
    Ok(RawAnswer::Addresses(response.iter().collect()))
}

/// Resolves the canonical name of `host`.
///
/// Follows the whole CNAME chain. A host with addresses but no CNAME is its own
/// canonical name. A chain that ends at a name without addresses is walked with plain
/// CNAME queries instead.
async fn lookup_cname(
    resolver: &TokioAsyncResolver,
    host: &str,
) -> Result<RawAnswer, LookupError> {
    match resolver.lookup_ip(host).await {
        Ok(response) => {
            let lookup = response.as_lookup();
            let name = canonical_name(lookup.query().name(), lookup.records());
            Ok(RawAnswer::Name(name.to_utf8()))
        }
        Err(e) if is_no_records(&e) => follow_cname_chain(resolver, host).await,
        Err(e) => Err(e.into()),
    }
}

async fn follow_cname_chain(
    resolver: &TokioAsyncResolver,
    host: &str,
) -> Result<RawAnswer, LookupError> {
    let mut current: Option<Name> = None;
    for _ in 0..MAX_CNAME_HOPS {
        let query = match &current {
            Some(name) => name.to_utf8(),
            None => host.to_string(),
        };
        let target = match resolver.lookup(query.as_str(), WireRecordType::CNAME).await {
            Ok(lookup) => lookup.iter().find_map(|rdata| match rdata {
                RData::CNAME(cname) => Some(cname.0.clone()),
                _ => None,
            }),
            Err(e) if current.is_some() && is_no_records(&e) => None,
            Err(e) => return Err(e.into()),
        };
        match target {
            Some(next) => current = Some(next),
            None => break,
        }
    }

    current
        .map(|name| RawAnswer::Name(fqdn(name).to_utf8()))
        .ok_or(LookupError::NoRecords)
}

/// Walks the CNAME records of an answer, starting at `query_name`.
///
/// Returns the last name in the chain, or `query_name` when there is no CNAME.
pub fn canonical_name(query_name: &Name, records: &[WireRecord]) -> Name {
    let mut current = fqdn(query_name.clone());
    for _ in 0..MAX_CNAME_HOPS {
        let next = records.iter().find_map(|record| match record.data() {
            Some(RData::CNAME(cname)) if record.name() == &current => Some(cname.0.clone()),
            _ => None,
        });
        match next {
            Some(name) => current = fqdn(name),
            None => break,
        }
    }
    current
}

fn fqdn(mut name: Name) -> Name {
    name.set_fqdn(true);
    name
}

fn is_no_records(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

async fn lookup_mx(resolver: &TokioAsyncResolver, host: &str) -> Result<RawAnswer, LookupError> {
    let response = resolver.mx_lookup(host).await?;
    let exchangers = response
        .iter()
        .map(|mx| (mx.preference(), mx.exchange().to_utf8()))
        .collect();
    Ok(RawAnswer::MailExchangers(exchangers))
}

async fn lookup_txt(resolver: &TokioAsyncResolver, host: &str) -> Result<RawAnswer, LookupError> {
    let response = resolver.txt_lookup(host).await?;
    let texts = response
        .iter()
        .map(|txt| {
            // A TXT record may be split across several character-strings
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes))
                .collect::<String>()
        })
        .collect();
    Ok(RawAnswer::Texts(texts))
}
