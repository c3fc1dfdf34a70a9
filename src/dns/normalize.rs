//! Canonical answer strings.
//!
//! Nameservers return multi-valued answers in no particular order, so values are sorted
//! before joining. The sort is a plain string sort: MX `"20 b.mx."` sorts before
//! `"3 a.mx."`.

use crate::dns::lookup::RawAnswer;
use crate::error_handling::LookupError;

/// Converts a lookup outcome into its canonical string. Failures become `""`.
pub fn normalize(answer: &Result<RawAnswer, LookupError>) -> String {
    match answer {
        Ok(raw) => normalize_answer(raw),
        Err(_) => String::new(),
    }
}

/// Converts a raw answer into its canonical string.
pub fn normalize_answer(raw: &RawAnswer) -> String {
    match raw {
        RawAnswer::Addresses(ips) => sorted_join(ips.iter().map(|ip| ip.to_string()).collect()),
        RawAnswer::Name(name) => name.clone(),
        RawAnswer::MailExchangers(mxs) => sorted_join(
            mxs.iter()
                .map(|(preference, exchange)| format!("{preference} {exchange}"))
                .collect(),
        ),
        RawAnswer::Texts(texts) => sorted_join(texts.clone()),
    }
}

fn sorted_join(mut values: Vec<String>) -> String {
    values.sort();
    values.join(" ")
}
