//! Change Management validator.
//!
//! Checks a sample change request against the ChangeRequest shape and,
//! when the server offers one, its plain XML rendering.

use anyhow::Result;
use oslc_vocab::{Domain, Shape};

use crate::context::SuiteContext;
use crate::http;
use crate::report::{ConformanceReport, TestResult};
use crate::shape::check_xml_resource;
use crate::validators::domains::check_sample;
use crate::xml::XmlDocument;

const VALIDATOR: &str = "domains/cm";

/// Validates a sample change request.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let Some(sample) = check_sample(
        ctx,
        VALIDATOR,
        Domain::ChangeManagement,
        "ChangeRequest",
        &mut report,
    ) else {
        return Ok(report);
    };

    if let Some(shape) = ctx.vocab().find_shape("ChangeRequest") {
        report.record(VALIDATOR, || {
            let response = ctx.client.get(&sample.url, http::XML)?;
            if response.status != 200 || response.media_type() != Some(http::XML) {
                return Ok(TestResult::warn(
                    VALIDATOR,
                    format!("change request has no application/xml rendering (status {})", response.status),
                ));
            }
            let doc = XmlDocument::parse(&response.text())?;
            xml_rendering_result(&doc, shape)
        });
    }

    Ok(report)
}

fn xml_rendering_result(doc: &XmlDocument, shape: &Shape) -> Result<TestResult> {
    let violations = check_xml_resource(doc, "/oslc_cm:ChangeRequest", shape)?;
    Ok(if violations.is_empty() {
        TestResult::pass(VALIDATOR, "XML rendering satisfies the ChangeRequest cardinalities")
    } else {
        TestResult::warn(
            VALIDATOR,
            format!(
                "XML rendering misses ChangeRequest cardinalities: {}",
                violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
        )
    })
}
