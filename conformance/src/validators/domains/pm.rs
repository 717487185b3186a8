//! Performance Monitoring validator.

use anyhow::Result;
use oslc_vocab::Domain;

use crate::context::SuiteContext;
use crate::report::ConformanceReport;
use crate::validators::domains::check_sample;

const VALIDATOR: &str = "domains/pm";

/// Validates a sample performance monitoring record, including the
/// measures it observes.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    check_sample(
        ctx,
        VALIDATOR,
        Domain::PerformanceMonitoring,
        "PerformanceMonitoringRecord",
        &mut report,
    );
    Ok(report)
}
