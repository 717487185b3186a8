//! Service provider catalog validator.
//!
//! Fetches the configured base URI and checks it as an OSLC 2.0 catalog
//! (RDF/XML, plus the optional JSON rendering) and, when the 1.0 track is
//! enabled, as an OSLC 1.0 `oslc_disc` catalog. Also reports the outcome
//! of service provider discovery.

use anyhow::{Context, Result};
use oslc_vocab::model::iris;

use crate::context::{Providers, SuiteContext};
use crate::http::{self, with_query};
use crate::json::JsonDocument;
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::shape::check_resource;
use crate::validators::{attempt, expect_status, prefer_status, shape_result};
use crate::xml::XmlDocument;

const VALIDATOR: &str = "core/catalog";

/// Media type no server can produce.
const BOGUS_MEDIA_TYPE: &str = "invalid/content-type";

/// Validates the service provider catalog at the base URI.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if ctx.config.versions.includes_v2() {
        validate_rdf_xml(ctx, &mut report);
        validate_json(ctx, &mut report);
        report_discovery("OSLC 2.0", &ctx.providers, &mut report);
    }
    if ctx.config.versions.includes_v1() {
        validate_v1_xml(ctx, &mut report);
        report_discovery("OSLC 1.0", &ctx.v1_providers, &mut report);
    }

    Ok(report)
}

fn validate_rdf_xml(ctx: &SuiteContext, report: &mut ConformanceReport) {
    let base = ctx.config.base_uri.as_str();
    let Some(response) = attempt(report, VALIDATOR, || {
        ctx.client
            .get(base, http::RDF_XML)
            .with_context(|| format!("GET {}", base))
    }) else {
        return;
    };
    report.push(expect_status(VALIDATOR, "GET catalog as RDF/XML", &response, &[200]));
    if !response.is_success() {
        return;
    }
    report.push(match response.media_type() {
        Some(http::RDF_XML) => TestResult::pass(VALIDATOR, "catalog is served as application/rdf+xml"),
        other => TestResult::fail(
            VALIDATOR,
            format!("catalog Content-Type is {:?}, expected application/rdf+xml", other),
        ),
    });

    let Some(model) = attempt(report, VALIDATOR, || {
        Model::parse_rdf_xml(&response.text(), Some(base)).context("parsing catalog RDF/XML")
    }) else {
        return;
    };

    let catalogs = model.subjects_of_type(iris::OSLC_SERVICE_PROVIDER_CATALOG);
    if catalogs.is_empty() && !model.subjects_of_type(iris::OSLC_SERVICE_PROVIDER).is_empty() {
        report.push(TestResult::skip(
            VALIDATOR,
            "base URI is a service provider; catalog checks skipped",
        ));
        return;
    }

    let root = Node::iri(base);
    let Some(catalog) = catalogs.iter().copied().find(|c| **c == root) else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("no oslc:ServiceProviderCatalog named {}", base),
            catalogs.iter().map(ToString::to_string).collect(),
        ));
        return;
    };
    report.push(TestResult::pass(
        VALIDATOR,
        "catalog root is an oslc:ServiceProviderCatalog named by the request URI",
    ));

    if let Some(shape) = ctx.vocab().find_shape("ServiceProviderCatalog") {
        report.push(shape_result(
            VALIDATOR,
            "service provider catalog",
            check_resource(&model, catalog, shape),
        ));
    }

    check_provider_links(&model, catalog, report);

    report.record(VALIDATOR, || {
        let response = ctx.client.get(base, BOGUS_MEDIA_TYPE)?;
        Ok(prefer_status(VALIDATOR, "GET catalog with unknown Accept", &response, &[406]))
    });

    report.record(VALIDATOR, || misplaced_parameters(ctx, model.len()));
}

fn check_provider_links(model: &Model, catalog: &Node, report: &mut ConformanceReport) {
    let providers = model.objects(catalog, iris::OSLC_SERVICE_PROVIDER_PROP);
    let nested = model.count(catalog, iris::OSLC_SERVICE_PROVIDER_CATALOG_PROP);
    if providers.is_empty() && nested == 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            "catalog lists no service providers or nested catalogs",
        ));
        return;
    }
    let anonymous: Vec<String> = providers
        .iter()
        .filter(|p| p.as_iri().is_none())
        .map(ToString::to_string)
        .collect();
    if anonymous.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "all {} listed service providers are named resources ({} nested catalogs)",
                providers.len(),
                nested
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "service providers must be identified by a URI",
            anonymous,
        ));
    }
}

/// Query parameters addressed at query capabilities must not change the
/// catalog representation.
fn misplaced_parameters(ctx: &SuiteContext, expected_len: usize) -> Result<TestResult> {
    let url = with_query(
        &ctx.config.base_uri,
        &[
            ("oslc.where", "dcterms:identifier=\"oslc-conformance\""),
            ("oslc.select", "dcterms:title"),
        ],
    )?;
    let response = ctx.client.get(&url, http::RDF_XML)?;
    if response.status != 200 {
        return Ok(TestResult::fail(
            VALIDATOR,
            format!(
                "catalog with misplaced query parameters returned {}",
                response.status
            ),
        ));
    }
    let model = Model::parse_rdf_xml(&response.text(), Some(ctx.config.base_uri.as_str()))?;
    Ok(if model.len() == expected_len {
        TestResult::pass(VALIDATOR, "misplaced query parameters do not change the catalog")
    } else {
        TestResult::fail(
            VALIDATOR,
            format!(
                "misplaced query parameters changed the catalog ({} statements, expected {})",
                model.len(),
                expected_len
            ),
        )
    })
}

fn validate_json(ctx: &SuiteContext, report: &mut ConformanceReport) {
    report.record(VALIDATOR, || {
        let response = ctx.client.get(&ctx.config.base_uri, http::JSON)?;
        if response.status != 200 || response.media_type() != Some(http::JSON) {
            return Ok(TestResult::warn(
                VALIDATOR,
                format!(
                    "catalog has no JSON rendering (status {}, Content-Type {:?})",
                    response.status,
                    response.media_type()
                ),
            ));
        }
        let doc = JsonDocument::parse(&response.text())?;
        let providers = doc.resource_urls("oslc:serviceProvider");
        let catalogs = doc.count("oslc:serviceProviderCatalog");
        Ok(if providers.is_empty() && catalogs == 0 {
            TestResult::warn(VALIDATOR, "JSON catalog lists no service providers")
        } else {
            TestResult::pass(
                VALIDATOR,
                format!("JSON catalog lists {} service providers", providers.len()),
            )
        })
    });
}

fn validate_v1_xml(ctx: &SuiteContext, report: &mut ConformanceReport) {
    let base = ctx.config.base_uri.as_str();
    let Some(response) = attempt(report, VALIDATOR, || {
        ctx.v1_client
            .get(base, http::XML)
            .with_context(|| format!("GET {}", base))
    }) else {
        return;
    };
    report.push(expect_status(VALIDATOR, "GET OSLC 1.0 catalog as XML", &response, &[200]));
    if !response.is_success() {
        return;
    }
    let Some(doc) = attempt(report, VALIDATOR, || {
        XmlDocument::parse(&response.text()).context("parsing OSLC 1.0 catalog")
    }) else {
        return;
    };

    report.record(VALIDATOR, || {
        if doc.count("/oslc_cm_v1:ServiceDescriptor")? > 0 {
            return Ok(TestResult::skip(
                VALIDATOR,
                "base URI is an OSLC 1.0 service descriptor; catalog checks skipped",
            ));
        }
        Ok(expect_count(
            doc.count("/oslc_disc:ServiceProviderCatalog")?,
            1,
            "oslc_disc:ServiceProviderCatalog root element",
        ))
    });
    report.record(VALIDATOR, || {
        Ok(expect_count(
            doc.count("/oslc_disc:ServiceProviderCatalog/dc:title")?,
            1,
            "dc:title of the OSLC 1.0 catalog",
        ))
    });
    report.record(VALIDATOR, || {
        let entries = doc.count("//oslc_disc:entry")?;
        let named = doc.count(
            "//oslc_disc:entry[oslc_disc:ServiceProvider/oslc_disc:services/@rdf:resource \
             or oslc_disc:ServiceProviderCatalog/@rdf:about]",
        )?;
        Ok(if entries == named {
            TestResult::pass(
                VALIDATOR,
                format!("all {} catalog entries name a provider or catalog", entries),
            )
        } else {
            TestResult::fail(
                VALIDATOR,
                format!(
                    "{} of {} catalog entries name no provider services or catalog",
                    entries - named,
                    entries
                ),
            )
        })
    });
}

fn expect_count(actual: usize, expected: usize, what: &str) -> TestResult {
    if actual == expected {
        TestResult::pass(VALIDATOR, format!("exactly {} {}", expected, what))
    } else {
        TestResult::fail(
            VALIDATOR,
            format!("expected {} {}, found {}", expected, what, actual),
        )
    }
}

fn report_discovery(track: &str, providers: &Providers, report: &mut ConformanceReport) {
    report.push(match (&providers.error, providers.urls.len()) {
        (Some(error), _) => TestResult::fail(
            VALIDATOR,
            format!("{} service provider discovery failed: {}", track, error),
        ),
        (None, 0) => TestResult::warn(
            VALIDATOR,
            format!("{} discovery found no service providers", track),
        ),
        (None, count) => TestResult::pass(
            VALIDATOR,
            format!("{} discovery found {} service provider(s)", track, count),
        ),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::tests::fixtures;

    #[test]
    fn named_providers_pass() {
        let model = Model::parse_rdf_xml(fixtures::CATALOG_RDF_XML, Some(fixtures::CATALOG_URL))
            .expect("parses");
        let mut report = ConformanceReport::new();
        check_provider_links(&model, &Node::iri(fixtures::CATALOG_URL), &mut report);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].severity, Severity::Pass);
        assert!(report.results[0].message.contains("all 2 listed"));
    }

    #[test]
    fn blank_provider_fails() {
        let catalog = Node::iri(fixtures::CATALOG_URL);
        let model = Model::from_statements(vec![crate::rdf::Statement {
            subject: catalog.clone(),
            predicate: iris::OSLC_SERVICE_PROVIDER_PROP.to_string(),
            object: Node::Blank("p0".to_string()),
        }]);
        let mut report = ConformanceReport::new();
        check_provider_links(&model, &catalog, &mut report);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].details, vec!["_:p0".to_string()]);
    }

    #[test]
    fn discovery_outcomes_are_graded() {
        let mut report = ConformanceReport::new();
        report_discovery("OSLC 2.0", &Providers::default(), &mut report);
        report_discovery(
            "OSLC 2.0",
            &Providers {
                urls: Vec::new(),
                error: Some("GET failed".to_string()),
            },
            &mut report,
        );
        report_discovery(
            "OSLC 2.0",
            &Providers {
                urls: vec![fixtures::SERVICE_PROVIDER_URL.to_string()],
                error: None,
            },
            &mut report,
        );
        let severities: Vec<_> = report.results.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Warning, Severity::Failure, Severity::Pass]
        );
    }
}
