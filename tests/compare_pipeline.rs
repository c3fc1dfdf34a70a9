//! End-to-end tests of the comparison pipeline with a scripted lookup capability.

mod helpers;

use std::time::Duration;

use dnscompare::output::{write_json, TextPrinter};
use dnscompare::{run_compare_with, CompareConfig, RawAnswer, RecordType};
use helpers::{addresses, Behavior, FakeLookup};

const NS1: &str = "192.0.2.53:53";
const NS2: &str = "198.51.100.53:53";

#[tokio::test]
async fn test_identical_a_record() {
    let config = CompareConfig::from_parts(&[NS1, NS2], &["A example.com"]).expect("valid config");
    let lookup = FakeLookup::new()
        .with(NS1, "A example.com", Behavior::Answer(addresses(&["93.184.216.34"])))
        .with(NS2, "A example.com", Behavior::Answer(addresses(&["93.184.216.34"])))
        .build();

    let report = run_compare_with(config, lookup, Duration::from_secs(1))
        .await
        .expect("run succeeds");

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];
    assert_eq!(result.record_type, RecordType::A);
    assert!(result.identical);
    assert_eq!(result.responses[0].value, "93.184.216.34");
    assert_eq!(result.responses[0].value, result.responses[1].value);
    assert!(report.all_identical());
    assert_eq!(report.failed_queries, 0);
}

#[tokio::test]
async fn test_timeout_makes_result_different() {
    let config = CompareConfig::from_parts(&[NS1, NS2], &["A example.com"]).expect("valid config");
    let lookup = FakeLookup::new()
        .with(NS1, "A example.com", Behavior::Answer(addresses(&["93.184.216.34"])))
        .with(NS2, "A example.com", Behavior::Hang)
        .build();

    let report = run_compare_with(config, lookup, Duration::from_millis(50))
        .await
        .expect("run succeeds");

    let result = &report.results[0];
    assert!(!result.identical);
    assert_eq!(result.responses[0].value, "93.184.216.34");
    assert_eq!(result.responses[1].resolver, NS2);
    assert_eq!(result.responses[1].value, "");
    assert_eq!(report.failed_queries, 1);
    assert_eq!(report.different_count(), 1);
}

#[tokio::test]
async fn test_failure_in_one_record_does_not_affect_another() {
    let config = CompareConfig::from_parts(
        &[NS1, NS2],
        &["TXT broken.example.com", "MX example.com"],
    )
    .expect("valid config");
    let mx = RawAnswer::MailExchangers(vec![(10, "mx1.example.com.".to_string())]);
    let lookup = FakeLookup::new()
        .with(NS1, "TXT broken.example.com", Behavior::Fail)
        .with(
            NS2,
            "TXT broken.example.com",
            Behavior::Answer(RawAnswer::Texts(vec!["v=spf1 -all".to_string()])),
        )
        .with(NS1, "MX example.com", Behavior::Answer(mx.clone()))
        .with(NS2, "MX example.com", Behavior::Answer(mx))
        .build();

    let report = run_compare_with(config, lookup, Duration::from_secs(1))
        .await
        .expect("run succeeds");

    assert!(!report.results[0].identical);
    assert!(report.results[1].identical);
    assert_eq!(report.results[1].responses[0].value, "10 mx1.example.com.");
}

#[tokio::test]
async fn test_no_record_and_failure_look_the_same() {
    // A nameserver with no TXT record and one that failed both report ""
    let config =
        CompareConfig::from_parts(&[NS1, NS2], &["TXT example.com"]).expect("valid config");
    let lookup = FakeLookup::new()
        .with(NS1, "TXT example.com", Behavior::Answer(RawAnswer::Texts(vec![])))
        .with(NS2, "TXT example.com", Behavior::Fail)
        .build();

    let report = run_compare_with(config, lookup, Duration::from_secs(1))
        .await
        .expect("run succeeds");

    assert!(report.results[0].identical);
    assert!(report.results[0].responses.iter().all(|r| r.value.is_empty()));
}

#[tokio::test]
async fn test_report_renders_as_json_and_text() {
    let config = CompareConfig::from_parts(&[NS1, NS2], &["CNAME www.example.com"])
        .expect("valid config");
    let lookup = FakeLookup::new()
        .with(
            NS1,
            "CNAME www.example.com",
            Behavior::Answer(RawAnswer::Name("example.com.".to_string())),
        )
        .with(
            NS2,
            "CNAME www.example.com",
            Behavior::Answer(RawAnswer::Name("example.net.".to_string())),
        )
        .build();

    let report = run_compare_with(config, lookup, Duration::from_secs(1))
        .await
        .expect("run succeeds");

    let mut json = Vec::new();
    write_json(&report.results, &mut json).expect("json");
    let parsed: serde_json::Value =
        serde_json::from_slice(&json).expect("valid json");
    assert_eq!(parsed[0]["type"], "CNAME");
    assert!(parsed[0].get("identical").is_none());
    assert_eq!(parsed[0]["responses"][1]["value"], "example.net.");

    let mut text = Vec::new();
    TextPrinter::new(false)
        .print(&report.results, &mut text)
        .expect("text");
    let text = String::from_utf8(text).expect("utf8");
    assert!(text.contains("DIFFERENT"));
    assert!(text.contains("www.example.com"));
    assert!(text.contains(NS2));
}
