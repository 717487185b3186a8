//! OSLC domain validators.
//!
//! Each domain locates a sample of its resource types, fetches it as
//! RDF/XML and checks it against the domain shapes. Domain-specific extras
//! (artifact upload, XML rendering, change log ordering) live in the
//! per-domain modules.

pub mod am;
pub mod auto;
pub mod cm;
pub mod pm;
pub mod rm;
pub mod trs;

use oslc_vocab::{Domain, Shape};

use crate::context::SuiteContext;
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::shape::check_resource;
use crate::validators::{attempt, shape_result};

/// A fetched sample resource.
#[derive(Debug)]
pub(crate) struct Sample {
    pub url: String,
    pub node: Node,
    pub model: Model,
}

/// Locates, fetches and shape-checks a sample of `shape_id`. Returns
/// `None` (after recording why) when no sample could be checked.
pub(crate) fn check_sample(
    ctx: &SuiteContext,
    validator: &str,
    domain: Domain,
    shape_id: &str,
    report: &mut ConformanceReport,
) -> Option<Sample> {
    let Some(shape) = ctx.vocab().find_shape(shape_id) else {
        report.push(TestResult::fail(
            validator,
            format!("no {} shape in the vocabulary", shape_id),
        ));
        return None;
    };
    let url = attempt(report, validator, || ctx.sample_resource(domain, Some(shape)))?;
    let Some(url) = url else {
        report.push(TestResult::skip(
            validator,
            format!("no {} resource configured or found by query", shape.label),
        ));
        return None;
    };
    tracing::info!(validator, resource = %url, shape = shape.id, "checking sample");

    let (_, model) = attempt(report, validator, || ctx.get_model(&url))?;
    for result in check_model(validator, &model, &url, shape) {
        report.push(result);
    }
    Some(Sample {
        node: Node::iri(url.as_str()),
        url,
        model,
    })
}

/// Type and shape results for `url` in a fetched model.
pub(crate) fn check_model(validator: &str, model: &Model, url: &str, shape: &Shape) -> Vec<TestResult> {
    let node = Node::iri(url);
    if !model.has_type(&node, shape.class_iri) {
        return vec![TestResult::fail(
            validator,
            format!("{} is not typed <{}>", url, shape.class_iri),
        )];
    }
    vec![
        TestResult::pass(validator, format!("{} is a {}", url, shape.label)),
        shape_result(
            validator,
            &format!("{} {}", shape.label, url),
            check_resource(model, &node, shape),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::tests::fixtures;
    use oslc_vocab::Vocabulary;

    #[test]
    fn typed_conforming_sample_passes() {
        let model = Model::parse_rdf_xml(fixtures::CHANGE_REQUEST_RDF_XML, None).expect("parses");
        let shape = Vocabulary::full().find_shape("ChangeRequest").expect("shape");
        let results = check_model("domains/cm", &model, fixtures::CHANGE_REQUEST_URL, shape);
        let severities: Vec<_> = results.iter().map(|r| r.severity).collect();
        assert_eq!(severities, vec![Severity::Pass, Severity::Pass]);
    }

    #[test]
    fn untyped_sample_fails_without_shape_check() {
        let model = Model::parse_rdf_xml(fixtures::CHANGE_REQUEST_RDF_XML, None).expect("parses");
        let shape = Vocabulary::full().find_shape("Asset").expect("shape");
        let results = check_model("domains/am", &model, fixtures::CHANGE_REQUEST_URL, shape);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_failure());
        assert!(results[0].message.contains("asset#Asset"));
    }
}
