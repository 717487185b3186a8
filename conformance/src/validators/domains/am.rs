//! Asset Management validator.
//!
//! Checks a sample asset (and its inline artifacts) against the Asset
//! shape, then uploads a small artifact through the asset's artifact
//! factory and deletes it again.

use anyhow::{Context, Result};
use oslc_vocab::model::iris;
use oslc_vocab::Domain;

use crate::context::SuiteContext;
use crate::http;
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::domains::check_sample;
use crate::validators::{attempt, expect_status, prefer_status};

const VALIDATOR: &str = "domains/am";

const ARTIFACT_MEDIA_TYPE: &str = "text/plain";

/// Validates a sample asset and artifact upload.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let Some(sample) = check_sample(ctx, VALIDATOR, Domain::AssetManagement, "Asset", &mut report)
    else {
        return Ok(report);
    };

    match artifact_factory(&sample.model, &sample.node) {
        Some(factory) => upload_artifact(ctx, &factory, &mut report),
        None => report.push(TestResult::skip(
            VALIDATOR,
            format!("{} has no oslc_asset:artifactFactory", sample.url),
        )),
    }

    Ok(report)
}

fn artifact_factory(model: &Model, asset: &Node) -> Option<String> {
    model
        .object(asset, iris::OSLC_ASSET_ARTIFACT_FACTORY)
        .and_then(Node::as_iri)
        .map(str::to_string)
}

fn upload_artifact(ctx: &SuiteContext, factory: &str, report: &mut ConformanceReport) {
    let content = format!(
        "OSLC conformance artifact {}\n",
        chrono::Utc::now().to_rfc3339()
    );
    let Some(created) = attempt(report, VALIDATOR, || {
        ctx.client
            .post(factory, ARTIFACT_MEDIA_TYPE, content, http::RDF_XML)
            .with_context(|| format!("POST {}", factory))
    }) else {
        return;
    };
    report.push(expect_status(VALIDATOR, "POST artifact", &created, &[201]));
    let Some(location) = created.location() else {
        if created.is_success() {
            report.push(TestResult::fail(
                VALIDATOR,
                "artifact creation response has no Location header",
            ));
        }
        return;
    };
    let location = match http::resolve(&created.url, location) {
        Ok(url) => url,
        Err(err) => {
            report.record(VALIDATOR, || Err(err.into()));
            return;
        }
    };
    report.push(TestResult::pass(
        VALIDATOR,
        format!("uploaded artifact to {}", location),
    ));
    report.record(VALIDATOR, || {
        let response = ctx.client.delete(&location)?;
        Ok(prefer_status(VALIDATOR, "DELETE uploaded artifact", &response, &[200, 204]))
    });
}
