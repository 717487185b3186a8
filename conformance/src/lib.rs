//! OSLC conformance suite.
//!
//! This crate checks a live OSLC server against the OSLC Core 2.0
//! specification (with an OSLC 1.0 compatibility track) and the Change
//! Management, Asset Management, Automation, Requirements Management,
//! Performance Monitoring and Tracked Resource Set domain specifications.
//!
//! # Conformance Scope
//!
//! | Group | Checks |
//! |-------|--------|
//! | `core/catalog` | catalog structure, provider links, content negotiation |
//! | `core/service_provider` | provider, service and capability shapes |
//! | `core/fetch` | RDF/XML, XML, JSON, Turtle and Compact renderings |
//! | `core/creation` | create, conditional update, delete |
//! | `core/query` | `oslc.where`, `oslc.select`, full text search, paging |
//! | `domains/*` | domain resource shapes, artifact upload, TRS change logs |
//!
//! # Entry Point
//!
//! ```no_run
//! use oslc_conformance::{run_all, SuiteConfig, SuiteContext};
//! use std::path::Path;
//!
//! let config = SuiteConfig::load(Path::new("oslc-conformance.toml")).expect("config");
//! let ctx = SuiteContext::new(config).expect("session");
//! let report = run_all(&ctx).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

pub mod config;
pub mod context;
pub mod discovery;
pub mod http;
pub mod json;
pub mod rdf;
pub mod report;
pub mod shape;
pub mod tests;
pub mod validators;
pub mod xml;

pub use config::{SuiteConfig, TestVersions};
pub use context::SuiteContext;
pub use oslc_vocab::Domain;
pub use report::{ConformanceReport, Severity, TestResult};

/// Runs the validators of every configured domain and returns the
/// aggregated report.
///
/// Domains run in [`Domain::ALL`] order, so the Core groups come first:
/// 1. Service provider catalog
/// 2. Service providers
/// 3. Resource fetch
/// 4. Creation factories
/// 5. Query capabilities
///
/// followed by CM, AM, Automation, RM, PM and TRS.
///
/// # Errors
///
/// Returns an error only if a validator fails to assemble its report;
/// server misbehavior is reported as failures.
pub fn run_all(ctx: &SuiteContext) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for domain in Domain::ALL {
        if ctx.config.runs(domain) {
            report.extend(run_domain(ctx, domain)?);
        } else {
            tracing::debug!(domain = %domain, "domain not configured");
        }
    }
    Ok(report)
}

/// Runs the validators of one domain regardless of configuration.
///
/// # Errors
///
/// Returns an error only if a validator fails to assemble its report.
pub fn run_domain(ctx: &SuiteContext, domain: Domain) -> anyhow::Result<ConformanceReport> {
    tracing::info!(domain = %domain, "running validators");
    let mut report = ConformanceReport::new();
    match domain {
        Domain::Core => {
            // 1. Catalog
            report.extend(validators::oslc_core::catalog::validate(ctx)?);

            // 2. Service providers
            report.extend(validators::oslc_core::service_provider::validate(ctx)?);

            // 3. Fetch
            report.extend(validators::oslc_core::fetch::validate(ctx)?);

            // 4. Creation
            report.extend(validators::oslc_core::creation::validate(ctx)?);

            // 5. Query
            report.extend(validators::oslc_core::query::validate(ctx)?);
        }
        Domain::ChangeManagement => report.extend(validators::domains::cm::validate(ctx)?),
        Domain::AssetManagement => report.extend(validators::domains::am::validate(ctx)?),
        Domain::Automation => report.extend(validators::domains::auto::validate(ctx)?),
        Domain::RequirementsManagement => report.extend(validators::domains::rm::validate(ctx)?),
        Domain::PerformanceMonitoring => report.extend(validators::domains::pm::validate(ctx)?),
        Domain::TrackedResourceSet => report.extend(validators::domains::trs::validate(ctx)?),
    }
    Ok(report)
}
