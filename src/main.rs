//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnscompare` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Loading the configuration file
//! - Printing results (JSON or colored text)
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use dnscompare::initialization::init_logger_with;
use dnscompare::output::{write_json, IgnoreBrokenPipe, TextPrinter};
use dnscompare::{run_compare, CompareConfig, Opt};

#[tokio::main]
async fn main() {
    let opt = Opt::parse();

    if let Err(e) = run(opt).await {
        eprintln!("dnscompare error: {:#}", e);
        process::exit(1);
    }
}

async fn run(opt: Opt) -> Result<()> {
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = CompareConfig::from_file(&opt.config).with_context(|| {
        format!("Failed to load config file {}", opt.config.display())
    })?;

    let report = run_compare(config, opt.timeout()).await?;

    let mut stdout = IgnoreBrokenPipe::new(io::stdout().lock());
    if opt.json {
        write_json(&report.results, &mut stdout)?;
    } else {
        TextPrinter::new(opt.identical).print(&report.results, &mut stdout)?;
    }
    Ok(())
}
