//! Automation validator.
//!
//! Checks a sample automation plan, request and result, each when one can
//! be located. A result must also point at a plan through
//! `oslc_auto:reportsOnAutomationPlan`.

use anyhow::Result;
use oslc_vocab::Domain;

use crate::context::SuiteContext;
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::domains::check_sample;

const VALIDATOR: &str = "domains/auto";

const REPORTS_ON_PLAN: &str = "http://open-services.net/ns/auto#reportsOnAutomationPlan";

/// Validates sample automation resources.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    check_sample(ctx, VALIDATOR, Domain::Automation, "AutomationPlan", &mut report);
    check_sample(ctx, VALIDATOR, Domain::Automation, "AutomationRequest", &mut report);
    if let Some(result) = check_sample(ctx, VALIDATOR, Domain::Automation, "AutomationResult", &mut report) {
        report.push(reported_plan(&result.model, &result.node));
    }

    Ok(report)
}

fn reported_plan(model: &Model, result: &Node) -> TestResult {
    match model.object(result, REPORTS_ON_PLAN).and_then(Node::as_iri) {
        Some(plan) => TestResult::pass(
            VALIDATOR,
            format!("automation result reports on plan {}", plan),
        ),
        None => TestResult::fail(
            VALIDATOR,
            format!("{} must name exactly one oslc_auto:reportsOnAutomationPlan", result),
        ),
    }
}
