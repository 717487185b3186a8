//! `oslc-conformance`: Runs the OSLC conformance suite against a live server.
//!
//! Reads a TOML run configuration, discovers the server's service providers
//! and runs the Core and domain validators named in the configuration (or on
//! the command line).
//!
//! **Usage:**
//! ```
//! oslc-conformance [--config <path>] [--domain <id>...] [--format text|json]
//!                  [--only-once] [-v...] [--log-json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use oslc_conformance::config::DEFAULT_CONFIG_FILE;
use oslc_conformance::{run_all, ConformanceReport, Domain, Severity, SuiteConfig, SuiteContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per check, followed by a summary.
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

/// Run the OSLC conformance suite.
#[derive(Parser)]
#[command(
    name = "oslc-conformance",
    about = "Validate an OSLC server against the OSLC Core and domain specifications"
)]
struct Args {
    /// Path to the run configuration.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Domains to run instead of the configured ones (core, cm, am, auto, rm, pm, trs).
    #[arg(long = "domain")]
    domains: Vec<Domain>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Stop discovery at the first service provider.
    #[arg(long)]
    only_once: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(verbose: u8, json: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_text(config: &SuiteConfig, report: &ConformanceReport) {
    println!("OSLC Conformance Report");
    println!("=======================");
    if let Some(name) = &config.impl_name {
        println!("Implementation: {}", name);
    }
    println!("Base URI: {}", config.base_uri);
    println!();

    for result in &report.results {
        println!(
            "[{}] {} — {}",
            result.severity.label(),
            result.validator,
            result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} skipped, {} failed",
        report.pass_count(),
        report.warning_count(),
        report.count(Severity::Skipped),
        report.failure_count()
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_json);

    let mut config = SuiteConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    tracing::info!(config = %args.config.display(), base_uri = %config.base_uri, "configuration loaded");
    if !args.domains.is_empty() {
        config.domains = args.domains;
    }
    if args.only_once {
        config.run_only_once = true;
    }

    let ctx = SuiteContext::new(config).context("Failed to start the test session")?;
    let report = run_all(&ctx)?;

    match args.format {
        Format::Text => print_text(&ctx.config, &report),
        Format::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize the report")?;
            println!("{}", json);
        }
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }
    if args.format == Format::Text {
        println!("Conformance PASSED.");
    }
    Ok(())
}
