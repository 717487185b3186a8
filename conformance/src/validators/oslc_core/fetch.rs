//! Resource fetch validator.
//!
//! Fetches one sample resource in every representation OSLC Core names.
//! RDF/XML is required; plain XML, JSON, Turtle and the Compact rendering
//! are optional and only warn when missing.

use anyhow::{Context, Result};
use oslc_vocab::model::iris;
use oslc_vocab::Domain;

use crate::context::SuiteContext;
use crate::http::{self, OslcResponse};
use crate::json::JsonDocument;
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{attempt, expect_status, prefer_status};
use crate::xml::XmlDocument;

const VALIDATOR: &str = "core/fetch";

const BOGUS_MEDIA_TYPE: &str = "invalid/content-type";

/// Fetches a sample resource in each representation.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    if !ctx.config.versions.includes_v2() {
        return Ok(report);
    }

    let Some(sample) = attempt(&mut report, VALIDATOR, || {
        ctx.sample_resource(Domain::Core, None)
    }) else {
        return Ok(report);
    };
    let Some(sample) = sample else {
        report.push(TestResult::skip(
            VALIDATOR,
            "no sample resource configured or returned by a query capability",
        ));
        return Ok(report);
    };
    tracing::info!(resource = %sample, "fetching sample resource");

    validate_rdf_xml(ctx, &sample, &mut report);
    report.record(VALIDATOR, || {
        optional(ctx, &sample, http::XML, |response| {
            XmlDocument::parse(&response.text())?;
            Ok(TestResult::pass(VALIDATOR, "resource has a well-formed XML rendering"))
        })
    });
    report.record(VALIDATOR, || {
        optional(ctx, &sample, http::JSON, |response| {
            let doc = JsonDocument::parse(&response.text())?;
            Ok(if doc.root().is_object() {
                TestResult::pass(VALIDATOR, "resource has a JSON rendering")
            } else {
                TestResult::fail(VALIDATOR, "JSON rendering is not a JSON object")
            })
        })
    });
    report.record(VALIDATOR, || {
        optional(ctx, &sample, http::TURTLE, |response| {
            let model = Model::parse_turtle(&response.text(), Some(sample.as_str()))
                .context("parsing Turtle rendering")?;
            Ok(describes(&model, &sample, "Turtle"))
        })
    });
    report.record(VALIDATOR, || {
        optional(ctx, &sample, http::COMPACT_XML, |response| {
            let model = Model::parse_rdf_xml(&response.text(), Some(sample.as_str()))
                .context("parsing Compact rendering")?;
            Ok(compact_result(&model))
        })
    });
    report.record(VALIDATOR, || {
        let response = ctx.client.get(&sample, BOGUS_MEDIA_TYPE)?;
        Ok(expect_status(
            VALIDATOR,
            "GET resource with unknown Accept",
            &response,
            &[406],
        ))
    });

    Ok(report)
}

fn validate_rdf_xml(ctx: &SuiteContext, sample: &str, report: &mut ConformanceReport) {
    let Some(response) = attempt(report, VALIDATOR, || {
        ctx.client
            .get(sample, http::RDF_XML)
            .with_context(|| format!("GET {}", sample))
    }) else {
        return;
    };
    report.push(expect_status(
        VALIDATOR,
        "GET resource as RDF/XML",
        &response,
        &[200],
    ));
    if !response.is_success() {
        return;
    }
    report.push(match response.media_type() {
        Some(http::RDF_XML) => TestResult::pass(VALIDATOR, "resource is served as application/rdf+xml"),
        other => TestResult::fail(
            VALIDATOR,
            format!("resource Content-Type is {:?}, expected application/rdf+xml", other),
        ),
    });
    report.push(match response.core_version() {
        Some(version) => TestResult::pass(
            VALIDATOR,
            format!("response carries OSLC-Core-Version: {}", version),
        ),
        None => TestResult::warn(VALIDATOR, "response has no OSLC-Core-Version header"),
    });
    report.push(caching_headers(&response));
    if let Some(etag) = response.etag() {
        report.record(VALIDATOR, || {
            let revalidated = ctx.client.get_with_headers(
                sample,
                &[("Accept", http::RDF_XML), ("If-None-Match", etag)],
            )?;
            Ok(prefer_status(
                VALIDATOR,
                "conditional GET with current ETag",
                &revalidated,
                &[304],
            ))
        });
    }

    if let Some(model) = attempt(report, VALIDATOR, || {
        Model::parse_rdf_xml(&response.text(), Some(sample)).context("parsing RDF/XML rendering")
    }) {
        report.push(describes(&model, sample, "RDF/XML"));
    }
}

/// Fetches an optional rendering. A missing rendering is a warning; a
/// rendering that is served but broken is whatever `check` decides.
fn optional(
    ctx: &SuiteContext,
    sample: &str,
    accept: &str,
    check: impl FnOnce(&OslcResponse) -> Result<TestResult>,
) -> Result<TestResult> {
    let response = ctx.client.get(sample, accept)?;
    if response.status != 200 || response.media_type() != Some(accept) {
        return Ok(TestResult::warn(
            VALIDATOR,
            format!(
                "no {} rendering (status {}, Content-Type {:?})",
                accept,
                response.status,
                response.media_type()
            ),
        ));
    }
    check(&response)
}

fn describes(model: &Model, sample: &str, syntax: &str) -> TestResult {
    if model.describes(&Node::iri(sample)) {
        TestResult::pass(VALIDATOR, format!("{} rendering describes {}", syntax, sample))
    } else {
        TestResult::fail(
            VALIDATOR,
            format!("{} rendering has no statements about {}", syntax, sample),
        )
    }
}

fn compact_result(model: &Model) -> TestResult {
    let compacts = model.subjects_of_type(iris::OSLC_COMPACT);
    let Some(compact) = compacts.first() else {
        return TestResult::fail(VALIDATOR, "Compact rendering has no oslc:Compact resource");
    };
    if model.count(compact, iris::DCTERMS_TITLE) == 1 {
        TestResult::pass(VALIDATOR, "resource has an oslc:Compact rendering with a title")
    } else {
        TestResult::fail(
            VALIDATOR,
            format!("oslc:Compact {} must have exactly one dcterms:title", compact),
        )
    }
}

fn caching_headers(response: &OslcResponse) -> TestResult {
    let missing: Vec<String> = [
        ("ETag", response.etag()),
        ("Last-Modified", response.last_modified()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_none())
    .map(|(name, _)| name.to_string())
    .collect();
    if missing.is_empty() {
        TestResult::pass(VALIDATOR, "response carries ETag and Last-Modified")
    } else {
        TestResult::warn(
            VALIDATOR,
            format!("response lacks {}", missing.join(" and ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::tests::fixtures;
    use reqwest::header::{HeaderMap, HeaderValue, ETAG};

    const COMPACT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#">
  <oslc:Compact rdf:about="http://example.com/oslc/cr/1">
    <dcterms:title>Crash on startup</dcterms:title>
    <oslc:shortTitle>1</oslc:shortTitle>
  </oslc:Compact>
</rdf:RDF>
"#;

    #[test]
    fn rendering_must_describe_the_sample() {
        let model = Model::parse_rdf_xml(fixtures::CHANGE_REQUEST_RDF_XML, None).expect("parses");
        let found = describes(&model, fixtures::CHANGE_REQUEST_URL, "RDF/XML");
        assert_eq!(found.severity, Severity::Pass);

        let other = describes(&model, fixtures::ASSET_URL, "RDF/XML");
        assert!(other.is_failure());
    }

    #[test]
    fn compact_rendering_needs_title() {
        let model = Model::parse_rdf_xml(COMPACT, None).expect("parses");
        assert_eq!(compact_result(&model).severity, Severity::Pass);

        let plain = Model::parse_rdf_xml(fixtures::CHANGE_REQUEST_RDF_XML, None).expect("parses");
        assert!(compact_result(&plain).is_failure());
    }

    #[test]
    fn missing_caching_headers_warn() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("\"v1\""));
        let response = OslcResponse {
            status: 200,
            url: fixtures::CHANGE_REQUEST_URL.to_string(),
            headers,
            body: Vec::new(),
        };
        let result = caching_headers(&response);
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(result.message, "response lacks Last-Modified");
    }
}
