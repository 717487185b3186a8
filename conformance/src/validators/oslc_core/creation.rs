//! Creation factory validator.
//!
//! Walks a resource through its whole life: POST to a creation factory,
//! GET, conditional PUT, rejected updates, DELETE, and a final GET that
//! must no longer find it. On the OSLC 1.0 track it POSTs to the first
//! change request factory of a service descriptor.

use anyhow::{Context, Result};
use oslc_vocab::model::iris;

use crate::context::SuiteContext;
use crate::discovery::{v1_capability_urls, Capability, CapabilityRef};
use crate::http::{self, OslcResponse};
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{attempt, expect_status, prefer_status};

const VALIDATOR: &str = "core/creation";

const BOGUS_MEDIA_TYPE: &str = "invalid/content-type";

/// An `If-Match` value no server hands out.
const STALE_ETAG: &str = "\"oslc-conformance-stale\"";

/// Body that is not well-formed RDF/XML.
const MALFORMED_RDF_XML: &str = "<rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"><rdf:Description";

/// Runs the create, update and delete checks.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if ctx.config.versions.includes_v2() {
        match ctx.capability_for(Capability::Creation, &[]) {
            Some(factory) => validate_lifecycle(ctx, &factory, &mut report),
            None => report.push(TestResult::skip(
                VALIDATOR,
                "no OSLC 2.0 creation factory discovered",
            )),
        }
    }
    if ctx.config.versions.includes_v1() {
        validate_v1(ctx, &mut report);
    }

    Ok(report)
}

fn validate_lifecycle(ctx: &SuiteContext, factory: &CapabilityRef, report: &mut ConformanceReport) {
    let Some(body) = attempt(report, VALIDATOR, || creation_body(ctx, factory)) else {
        return;
    };
    tracing::info!(factory = %factory.url, "creating resource");

    let Some(created) = attempt(report, VALIDATOR, || {
        ctx.client
            .post(&factory.url, http::RDF_XML, body.clone(), http::RDF_XML)
            .with_context(|| format!("POST {}", factory.url))
    }) else {
        return;
    };
    report.push(expect_status(VALIDATOR, "POST to creation factory", &created, &[201]));
    let Some(location) = created.location().map(str::to_string) else {
        report.push(TestResult::fail(
            VALIDATOR,
            "creation response has no Location header",
        ));
        return;
    };
    let location = match http::resolve(&created.url, &location) {
        Ok(url) => url,
        Err(err) => {
            report.record(VALIDATOR, || Err(err.into()));
            return;
        }
    };
    report.push(TestResult::pass(
        VALIDATOR,
        format!("created resource at {}", location),
    ));

    report.record(VALIDATOR, || {
        let response = ctx.client.post(&factory.url, http::RDF_XML, MALFORMED_RDF_XML, http::RDF_XML)?;
        remove_accepted(ctx, &response);
        Ok(prefer_status(VALIDATOR, "POST malformed RDF/XML", &response, &[400]))
    });
    report.record(VALIDATOR, || {
        let response = ctx.client.post(&factory.url, BOGUS_MEDIA_TYPE, body.clone(), http::RDF_XML)?;
        remove_accepted(ctx, &response);
        Ok(prefer_status(VALIDATOR, "POST with unsupported Content-Type", &response, &[415]))
    });

    validate_update(ctx, &location, report);
    validate_delete(ctx, &location, report);
}

fn validate_update(ctx: &SuiteContext, location: &str, report: &mut ConformanceReport) {
    let Some(current) = attempt(report, VALIDATOR, || {
        ctx.client
            .get(location, http::RDF_XML)
            .with_context(|| format!("GET {}", location))
    }) else {
        return;
    };
    report.push(expect_status(VALIDATOR, "GET created resource", &current, &[200]));
    if !current.is_success() {
        return;
    }
    report.push(created_resource_result(&current, location));

    let Some(update) = attempt(report, VALIDATOR, || update_body(ctx, &current)) else {
        return;
    };
    let Some(etag) = current.etag().map(str::to_string) else {
        report.push(TestResult::warn(
            VALIDATOR,
            "created resource has no ETag; conditional update skipped",
        ));
        return;
    };

    report.record(VALIDATOR, || {
        let response = ctx
            .client
            .put(location, http::RDF_XML, update.clone(), Some(STALE_ETAG))?;
        Ok(expect_status(VALIDATOR, "PUT with stale If-Match", &response, &[412]))
    });
    report.record(VALIDATOR, || {
        let response = ctx
            .client
            .put(location, http::RDF_XML, update.clone(), Some(etag.as_str()))?;
        Ok(expect_status(VALIDATOR, "PUT with current If-Match", &response, &[200, 204]))
    });

    // An accepted PUT rotates the ETag; the rejection checks each send the
    // latest one so only the body or content type is wrong.
    report.record(VALIDATOR, || {
        let etag = current_etag(ctx, location)?;
        let response = ctx
            .client
            .put(location, http::RDF_XML, MALFORMED_RDF_XML, etag.as_deref())?;
        Ok(prefer_status(VALIDATOR, "PUT malformed RDF/XML", &response, &[400]))
    });
    report.record(VALIDATOR, || {
        let etag = current_etag(ctx, location)?;
        let response = ctx
            .client
            .put(location, BOGUS_MEDIA_TYPE, update.clone(), etag.as_deref())?;
        Ok(prefer_status(VALIDATOR, "PUT with unsupported Content-Type", &response, &[415]))
    });
}

fn current_etag(ctx: &SuiteContext, location: &str) -> Result<Option<String>> {
    let response = ctx
        .client
        .get(location, http::RDF_XML)
        .with_context(|| format!("GET {}", location))?;
    Ok(response.etag().map(str::to_string))
}

/// Deletes a resource created by a request the server should have
/// rejected.
fn remove_accepted(ctx: &SuiteContext, response: &OslcResponse) {
    if !response.is_success() {
        return;
    }
    let Some(location) = response
        .location()
        .and_then(|l| http::resolve(&response.url, l).ok())
    else {
        return;
    };
    tracing::info!(resource = %location, "removing resource created by a rejected-input check");
    if let Err(err) = ctx.client.delete(&location) {
        tracing::warn!(resource = %location, error = %err, "cleanup DELETE failed");
    }
}

fn validate_delete(ctx: &SuiteContext, location: &str, report: &mut ConformanceReport) {
    let Some(deleted) = attempt(report, VALIDATOR, || {
        ctx.client
            .delete(location)
            .with_context(|| format!("DELETE {}", location))
    }) else {
        return;
    };
    report.push(expect_status(VALIDATOR, "DELETE created resource", &deleted, &[200, 204]));
    if !deleted.is_success() {
        return;
    }
    report.record(VALIDATOR, || {
        let response = ctx.client.get(location, http::RDF_XML)?;
        Ok(expect_status(VALIDATOR, "GET deleted resource", &response, &[404, 410]))
    });
}

fn validate_v1(ctx: &SuiteContext, report: &mut ConformanceReport) {
    let Some(services) = ctx.v1_providers.urls.first() else {
        report.push(TestResult::skip(
            VALIDATOR,
            "no OSLC 1.0 service descriptor discovered",
        ));
        return;
    };
    let Some(factories) = attempt(report, VALIDATOR, || {
        v1_capability_urls(&ctx.v1_client, services, Capability::Creation)
    }) else {
        return;
    };
    let Some(factory) = factories.first() else {
        report.push(TestResult::skip(
            VALIDATOR,
            format!("{} lists no oslc_cm:factory", services),
        ));
        return;
    };
    report.record(VALIDATOR, || {
        let body = match ctx.template(ctx.config.templates.create_xml.as_deref())? {
            Some(template) => template,
            None => generated_v1_change_request(),
        };
        let response = ctx.v1_client.post(factory, http::XML, body, http::XML)?;
        Ok(expect_status(VALIDATOR, "POST to OSLC 1.0 factory", &response, &[201]))
    });
}

fn creation_body(ctx: &SuiteContext, factory: &CapabilityRef) -> Result<String> {
    if let Some(template) = ctx.template(ctx.config.templates.create_rdf_xml.as_deref())? {
        return Ok(template);
    }
    let resource_type = factory
        .resource_types
        .first()
        .map_or(iris::OSLC_CM_CHANGE_REQUEST, String::as_str);
    Ok(generated_resource(resource_type))
}

fn update_body(ctx: &SuiteContext, current: &OslcResponse) -> Result<String> {
    Ok(ctx
        .template(ctx.config.templates.update_rdf_xml.as_deref())?
        .unwrap_or_else(|| current.text().into_owned()))
}

fn created_resource_result(response: &OslcResponse, location: &str) -> TestResult {
    match Model::parse_rdf_xml(&response.text(), Some(location)) {
        Ok(model) if model.describes(&Node::iri(location)) => {
            TestResult::pass(VALIDATOR, "created resource describes itself")
        }
        Ok(_) => TestResult::fail(
            VALIDATOR,
            format!("created resource has no statements about {}", location),
        ),
        Err(err) => TestResult::fail(
            VALIDATOR,
            format!("created resource is not RDF/XML: {}", err),
        ),
    }
}

/// A minimal resource of `resource_type` with a unique title.
fn generated_resource(resource_type: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/">
  <rdf:Description rdf:about="">
    <rdf:type rdf:resource="{}"/>
    <dcterms:title>OSLC conformance resource {}</dcterms:title>
  </rdf:Description>
</rdf:RDF>
"#,
        resource_type,
        timestamp()
    )
}

fn generated_v1_change_request() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<oslc_cm:ChangeRequest
    xmlns:oslc_cm="http://open-services.net/xmlns/cm/1.0/"
    xmlns:dc="http://purl.org/dc/terms/">
  <dc:title>OSLC conformance change request {}</dc:title>
</oslc_cm:ChangeRequest>
"#,
        timestamp()
    )
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::tests::fixtures;

    #[test]
    fn generated_resource_is_typed_and_titled() {
        let body = generated_resource(iris::OSLC_AUTO_REQUEST);
        let model = Model::parse_rdf_xml(&body, Some(fixtures::CREATION_URL)).expect("parses");
        let subjects = model.subjects_of_type(iris::OSLC_AUTO_REQUEST);
        assert_eq!(subjects.len(), 1);
        let title = model
            .object(subjects[0], iris::DCTERMS_TITLE)
            .and_then(Node::as_literal)
            .expect("title");
        assert!(title.starts_with("OSLC conformance resource "));
    }

    #[test]
    fn malformed_body_does_not_parse() {
        assert!(Model::parse_rdf_xml(MALFORMED_RDF_XML, None).is_err());
    }

    #[test]
    fn created_resource_must_describe_itself() {
        let response = OslcResponse {
            status: 200,
            url: fixtures::CHANGE_REQUEST_URL.to_string(),
            headers: Default::default(),
            body: fixtures::CHANGE_REQUEST_RDF_XML.as_bytes().to_vec(),
        };
        let found = created_resource_result(&response, fixtures::CHANGE_REQUEST_URL);
        assert_eq!(found.severity, Severity::Pass);

        let elsewhere = created_resource_result(&response, "http://example.com/oslc/cr/2");
        assert!(elsewhere.is_failure());
    }
}
