//! Service provider validator.
//!
//! Checks every discovered OSLC 2.0 service provider document against the
//! ServiceProvider shape (which pulls in Service, CreationFactory,
//! QueryCapability, Dialog, PrefixDefinition and Publisher through nested
//! rules), and every OSLC 1.0 service descriptor for a title and at least
//! one change request capability.

use anyhow::{Context, Result};
use oslc_vocab::model::iris;

use crate::context::SuiteContext;
use crate::discovery::{v1_capability_urls_in, Capability};
use crate::http;
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::shape::check_resource;
use crate::validators::{attempt, expect_status, shape_result};
use crate::xml::XmlDocument;

const VALIDATOR: &str = "core/service_provider";

/// Validates every discovered service provider.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if ctx.config.versions.includes_v2() {
        if ctx.providers.urls.is_empty() {
            report.push(TestResult::skip(
                VALIDATOR,
                "no OSLC 2.0 service providers discovered",
            ));
        }
        for url in &ctx.providers.urls {
            validate_provider(ctx, url, &mut report);
        }
    }
    if ctx.config.versions.includes_v1() {
        if ctx.v1_providers.urls.is_empty() {
            report.push(TestResult::skip(
                VALIDATOR,
                "no OSLC 1.0 service descriptors discovered",
            ));
        }
        for url in &ctx.v1_providers.urls {
            validate_v1_descriptor(ctx, url, &mut report);
        }
    }

    Ok(report)
}

fn validate_provider(ctx: &SuiteContext, url: &str, report: &mut ConformanceReport) {
    let Some(response) = attempt(report, VALIDATOR, || {
        ctx.client
            .get(url, http::RDF_XML)
            .with_context(|| format!("GET {}", url))
    }) else {
        return;
    };
    report.push(expect_status(
        VALIDATOR,
        &format!("GET {}", url),
        &response,
        &[200],
    ));
    if !response.is_success() {
        return;
    }
    if response.core_version().is_none() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("{} has no OSLC-Core-Version response header", url),
        ));
    }
    let Some(model) = attempt(report, VALIDATOR, || {
        Model::parse_rdf_xml(&response.text(), Some(url))
            .with_context(|| format!("parsing service provider {}", url))
    }) else {
        return;
    };
    check_provider_model(ctx, &model, url, report);
}

fn check_provider_model(ctx: &SuiteContext, model: &Model, url: &str, report: &mut ConformanceReport) {
    let subject = Node::iri(url);
    let provider = if model.has_type(&subject, iris::OSLC_SERVICE_PROVIDER) {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} is an oslc:ServiceProvider", url),
        ));
        subject
    } else {
        match model.subjects_of_type(iris::OSLC_SERVICE_PROVIDER).first() {
            Some(other) => {
                report.push(TestResult::warn(
                    VALIDATOR,
                    format!("{} describes service provider {} under another URI", url, other),
                ));
                (*other).clone()
            }
            None => {
                report.push(TestResult::fail(
                    VALIDATOR,
                    format!("{} contains no oslc:ServiceProvider", url),
                ));
                return;
            }
        }
    };

    if let Some(shape) = ctx.vocab().find_shape("ServiceProvider") {
        report.push(shape_result(
            VALIDATOR,
            &format!("service provider {}", url),
            check_resource(model, &provider, shape),
        ));
    }
    report.push(service_domains(model, &provider, url));
}

/// Every service names exactly one `oslc:domain`.
fn service_domains(model: &Model, provider: &Node, url: &str) -> TestResult {
    let services = model.objects(provider, iris::OSLC_SERVICE);
    let offending: Vec<String> = services
        .iter()
        .filter(|service| model.count(service, iris::OSLC_DOMAIN) != 1)
        .map(|service| {
            format!(
                "{} has {} oslc:domain values",
                service,
                model.count(service, iris::OSLC_DOMAIN)
            )
        })
        .collect();
    if services.is_empty() {
        TestResult::fail(VALIDATOR, format!("{} declares no oslc:service", url))
    } else if offending.is_empty() {
        let domains: Vec<&str> = services
            .iter()
            .filter_map(|s| model.object(s, iris::OSLC_DOMAIN))
            .filter_map(Node::as_iri)
            .collect();
        TestResult::pass(
            VALIDATOR,
            format!(
                "{} service(s) of {} each name one domain ({})",
                services.len(),
                url,
                domains.join(", ")
            ),
        )
    } else {
        TestResult::fail_with_details(
            VALIDATOR,
            format!("services of {} must name exactly one oslc:domain", url),
            offending,
        )
    }
}

fn validate_v1_descriptor(ctx: &SuiteContext, url: &str, report: &mut ConformanceReport) {
    let Some(response) = attempt(report, VALIDATOR, || {
        ctx.v1_client
            .get(url, http::XML)
            .with_context(|| format!("GET {}", url))
    }) else {
        return;
    };
    report.push(expect_status(
        VALIDATOR,
        &format!("GET {}", url),
        &response,
        &[200],
    ));
    if !response.is_success() {
        return;
    }
    let Some(doc) = attempt(report, VALIDATOR, || {
        XmlDocument::parse(&response.text())
            .with_context(|| format!("parsing service descriptor {}", url))
    }) else {
        return;
    };
    report.record(VALIDATOR, || check_v1_descriptor(&doc, url));
}

fn check_v1_descriptor(doc: &XmlDocument, url: &str) -> Result<TestResult> {
    let mut issues = Vec::new();
    let titles = doc.count("/oslc_cm_v1:ServiceDescriptor/dc:title")?;
    if titles != 1 {
        issues.push(format!("expected one dc:title, found {}", titles));
    }
    let factories = v1_capability_urls_in(doc, url, Capability::Creation)?;
    let queries = v1_capability_urls_in(doc, url, Capability::Query)?;
    if factories.is_empty() && queries.is_empty() {
        issues.push("no oslc_cm:factory or oslc_cm:simpleQuery URL".to_string());
    }
    Ok(if issues.is_empty() {
        TestResult::pass(
            VALIDATOR,
            format!(
                "service descriptor {} has {} factory and {} query URL(s)",
                url,
                factories.len(),
                queries.len()
            ),
        )
    } else {
        TestResult::fail_with_details(
            VALIDATOR,
            format!("service descriptor {} is incomplete", url),
            issues,
        )
    })
}
