//! Requirements Management validator.

use anyhow::Result;
use oslc_vocab::Domain;

use crate::context::SuiteContext;
use crate::report::ConformanceReport;
use crate::validators::domains::check_sample;

const VALIDATOR: &str = "domains/rm";

/// Validates a sample requirement and, when one exists, a requirement
/// collection.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    check_sample(ctx, VALIDATOR, Domain::RequirementsManagement, "Requirement", &mut report);
    check_sample(
        ctx,
        VALIDATOR,
        Domain::RequirementsManagement,
        "RequirementCollection",
        &mut report,
    );
    Ok(report)
}
