//! Tracked Resource Set validator.
//!
//! Reads the configured tracked resource set, its base and its change log.
//! Change log pages linked through `trs:previous` are followed up to the
//! configured page limit; every older page must hold strictly lower event
//! orders than the page before it.

use std::collections::BTreeSet;

use anyhow::Result;
use oslc_vocab::model::iris;
use oslc_vocab::Vocabulary;

use crate::context::SuiteContext;
use crate::rdf::{Model, Node, Selector};
use crate::report::{ConformanceReport, TestResult};
use crate::shape::check_resource;
use crate::validators::{attempt, shape_result};

const VALIDATOR: &str = "domains/trs";

/// Change log pages followed when `trs.max_pages` is not configured.
const DEFAULT_MAX_PAGES: usize = 5;

const EVENT_TYPES: [&str; 3] = [iris::TRS_CREATION, iris::TRS_MODIFICATION, iris::TRS_DELETION];

/// XSD datatypes whose values are all integers.
const INTEGER_TYPES: [&str; 13] = [
    "integer",
    "int",
    "long",
    "short",
    "byte",
    "nonNegativeInteger",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
];

/// Events of one change log page.
#[derive(Debug, Default)]
struct ChangeLogPage {
    orders: Vec<i64>,
    issues: Vec<String>,
    previous: Option<String>,
}

impl ChangeLogPage {
    fn read(model: &Model, log: &Node) -> Self {
        let mut page = ChangeLogPage {
            previous: model
                .object(log, iris::TRS_PREVIOUS)
                .and_then(Node::as_iri)
                .map(str::to_string),
            ..ChangeLogPage::default()
        };
        for event in model.objects(log, iris::TRS_CHANGE) {
            let changed = model.objects(event, iris::TRS_CHANGED);
            if changed.len() != 1 || changed[0].as_iri().is_none() {
                page.issues
                    .push(format!("{} must have exactly one trs:changed IRI", event));
            }
            match model.object(event, iris::TRS_ORDER).map(integer_order) {
                Some(Some(order)) => page.orders.push(order),
                _ => page
                    .issues
                    .push(format!("{} must have exactly one integer trs:order", event)),
            }
            if !EVENT_TYPES.iter().any(|t| model.has_type(event, t)) {
                page.issues.push(format!(
                    "{} is not typed trs:Creation, trs:Modification or trs:Deletion",
                    event
                ));
            }
        }
        page
    }

    fn min_order(&self) -> Option<i64> {
        self.orders.iter().copied().min()
    }

    fn max_order(&self) -> Option<i64> {
        self.orders.iter().copied().max()
    }
}

/// Reads a `trs:order` value. Plain and `xsd:string` literals count when
/// their lexical form is an integer.
fn integer_order(node: &Node) -> Option<i64> {
    let lexical = node.as_literal()?;
    let integral = match node.datatype() {
        None => true,
        Some(dt) if dt == iris::XSD_STRING => true,
        Some(dt) => dt
            .strip_prefix(iris::XSD)
            .is_some_and(|local| INTEGER_TYPES.contains(&local)),
    };
    if !integral {
        return None;
    }
    lexical.trim().parse().ok()
}

fn shape_check(model: &Model, subject: &Node, shape_id: &str, what: &str) -> Option<TestResult> {
    let shape = Vocabulary::full().find_shape(shape_id)?;
    Some(shape_result(VALIDATOR, what, check_resource(model, subject, shape)))
}

/// Validates the tracked resource set.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let Some(uri) = ctx.config.trs.uri.as_deref() else {
        report.push(TestResult::skip(VALIDATOR, "trs.uri not configured"));
        return Ok(report);
    };
    tracing::info!(trs = %uri, "reading tracked resource set");

    let Some((_, model)) = attempt(&mut report, VALIDATOR, || ctx.get_model(uri)) else {
        return Ok(report);
    };
    let trs = Node::iri(uri);
    if let Some(result) = shape_check(&model, &trs, "TrackedResourceSet", "tracked resource set") {
        report.push(result);
    }

    let bases = model.objects(&trs, iris::TRS_BASE);
    let logs = model.objects(&trs, iris::TRS_CHANGE_LOG);
    report.push(exactly_one(&bases, "trs:base"));
    report.push(exactly_one(&logs, "trs:changeLog"));

    if let [base] = bases.as_slice() {
        match base.as_iri() {
            Some(base_url) => validate_base(ctx, base_url, &mut report),
            None => report.push(TestResult::fail(VALIDATOR, "trs:base must be an IRI")),
        }
    }
    if let [log] = logs.as_slice() {
        match log.as_iri().filter(|_| !model.describes(log)) {
            Some(log_url) => {
                tracing::info!(change_log = %log_url, "fetching change log");
                if let Some((_, log_model)) =
                    attempt(&mut report, VALIDATOR, || ctx.get_model(log_url))
                {
                    validate_change_log(ctx, &log_model, log, &mut report);
                }
            }
            None => validate_change_log(ctx, &model, log, &mut report),
        }
    }

    Ok(report)
}

fn exactly_one(values: &[&Node], property: &str) -> TestResult {
    if values.len() == 1 {
        TestResult::pass(VALIDATOR, format!("tracked resource set has one {}", property))
    } else {
        TestResult::fail(
            VALIDATOR,
            format!(
                "tracked resource set must have exactly one {}, found {}",
                property,
                values.len()
            ),
        )
    }
}

fn validate_base(ctx: &SuiteContext, base_url: &str, report: &mut ConformanceReport) {
    let Some((_, model)) = attempt(report, VALIDATOR, || ctx.get_model(base_url)) else {
        return;
    };
    report.push(TestResult::pass(
        VALIDATOR,
        format!("base {} is readable", base_url),
    ));
    report.push(base_result(&model, base_url));
    if let Some(result) = shape_check(&model, &Node::iri(base_url), "Base", "base") {
        report.push(result);
    }
}

fn base_result(model: &Model, base_url: &str) -> TestResult {
    let mut issues: Vec<String> = [iris::RDFS_MEMBER, iris::LDP_MEMBER]
        .into_iter()
        .flat_map(|p| model.list_statements(Selector::any().predicate(p)))
        .filter(|s| s.object.as_iri().is_none())
        .map(|s| format!("member {} is not an IRI", s.object))
        .collect();
    let cutoffs = model.count(&Node::iri(base_url), iris::TRS_CUTOFF_EVENT);
    if cutoffs > 1 {
        issues.push(format!("{} trs:cutoffEvent values, at most one allowed", cutoffs));
    }
    if issues.is_empty() {
        TestResult::pass(
            VALIDATOR,
            format!("base lists {} member(s)", model.member_iris().len()),
        )
    } else {
        TestResult::fail_with_details(VALIDATOR, "base is malformed", issues)
    }
}

fn validate_change_log(ctx: &SuiteContext, model: &Model, log: &Node, report: &mut ConformanceReport) {
    let page = ChangeLogPage::read(model, log);
    report.push(page_result(&page, "change log"));
    if let Some(result) = shape_check(model, log, "ChangeLog", "change log") {
        report.push(result);
    }

    let max_pages = ctx.config.trs.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
    let mut newer_min = page.min_order();
    let mut previous = page.previous;
    let mut visited = BTreeSet::new();
    let mut followed = 0;
    while let Some(url) = previous.take() {
        if followed == max_pages {
            tracing::info!(limit = max_pages, "change log page limit reached");
            break;
        }
        if !visited.insert(url.clone()) {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("trs:previous loops back to {}", url),
            ));
            break;
        }
        followed += 1;
        let Some((_, older_model)) = attempt(report, VALIDATOR, || ctx.get_model(&url)) else {
            break;
        };
        let older_log = Node::iri(url.as_str());
        let older = ChangeLogPage::read(&older_model, &older_log);
        report.push(page_result(&older, &url));
        if let Some(result) = shape_check(&older_model, &older_log, "ChangeLog", &url) {
            report.push(result);
        }
        report.push(ordering_result(newer_min, &older, &url));
        newer_min = older.min_order().or(newer_min);
        previous = older.previous;
    }
}

fn page_result(page: &ChangeLogPage, what: &str) -> TestResult {
    let mut issues = page.issues.clone();
    let mut seen = BTreeSet::new();
    for order in &page.orders {
        if !seen.insert(order) {
            issues.push(format!("trs:order {} is used by more than one event", order));
        }
    }
    if issues.is_empty() {
        TestResult::pass(
            VALIDATOR,
            format!("{} holds {} well-formed event(s)", what, page.orders.len()),
        )
    } else {
        TestResult::fail_with_details(VALIDATOR, format!("{} has malformed events", what), issues)
    }
}

fn ordering_result(newer_min: Option<i64>, older: &ChangeLogPage, url: &str) -> TestResult {
    match (newer_min, older.max_order()) {
        (Some(newer), Some(older_max)) if older_max >= newer => TestResult::fail(
            VALIDATOR,
            format!(
                "{} holds order {} which is not lower than newer order {}",
                url, older_max, newer
            ),
        ),
        _ => TestResult::pass(
            VALIDATOR,
            format!("{} is older than the page before it", url),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Statement;
    use crate::report::Severity;
    use crate::tests::fixtures;

    fn change_log(model: &Model) -> Node {
        model
            .object(&Node::iri(fixtures::TRS_URL), iris::TRS_CHANGE_LOG)
            .cloned()
            .expect("change log")
    }

    #[test]
    fn reads_fixture_change_log() {
        let model = Model::parse_rdf_xml(fixtures::TRS_RDF_XML, None).expect("parses");
        let page = ChangeLogPage::read(&model, &change_log(&model));
        let mut orders = page.orders.clone();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2]);
        assert!(page.issues.is_empty());
        assert_eq!(page.previous, None);
        assert_eq!(page_result(&page, "change log").severity, Severity::Pass);
    }

    #[test]
    fn duplicate_orders_and_untyped_events_fail() {
        let log = Node::Blank("log".to_string());
        let event = Node::iri("urn:event:1");
        let twin = Node::iri("urn:event:2");
        let order = |value: &str| Node::Literal {
            value: value.to_string(),
            datatype: Some(iris::XSD_INTEGER.to_string()),
            lang: None,
        };
        let statement = |s: &Node, p: &str, o: Node| Statement {
            subject: s.clone(),
            predicate: p.to_string(),
            object: o,
        };
        let model = Model::from_statements(vec![
            statement(&log, iris::TRS_CHANGE, event.clone()),
            statement(&log, iris::TRS_CHANGE, twin.clone()),
            statement(&event, iris::RDF_TYPE, Node::iri(iris::TRS_CREATION)),
            statement(&event, iris::TRS_CHANGED, Node::iri(fixtures::CHANGE_REQUEST_URL)),
            statement(&event, iris::TRS_ORDER, order("7")),
            statement(&twin, iris::TRS_CHANGED, Node::iri(fixtures::CHANGE_REQUEST_URL)),
            statement(&twin, iris::TRS_ORDER, order("7")),
        ]);
        let page = ChangeLogPage::read(&model, &log);
        let result = page_result(&page, "change log");
        assert!(result.is_failure());
        assert_eq!(result.details.len(), 2);
        assert!(result.details[1].contains("trs:order 7"));
    }

    #[test]
    fn older_pages_must_have_lower_orders() {
        let older = ChangeLogPage {
            orders: vec![3, 4],
            ..ChangeLogPage::default()
        };
        assert!(ordering_result(Some(4), &older, "http://x/trs/1").is_failure());
        assert_eq!(
            ordering_result(Some(5), &older, "http://x/trs/1").severity,
            Severity::Pass
        );
    }

    #[test]
    fn plain_and_narrow_integer_orders_are_read() {
        let literal = |value: &str, datatype: Option<&str>| Node::Literal {
            value: value.to_string(),
            datatype: datatype.map(str::to_string),
            lang: None,
        };
        let xsd = |local: &str| format!("{}{}", iris::XSD, local);
        assert_eq!(integer_order(&literal("5", None)), Some(5));
        assert_eq!(integer_order(&literal(" 6 ", Some(iris::XSD_STRING))), Some(6));
        assert_eq!(integer_order(&literal("7", Some(&xsd("int")))), Some(7));
        assert_eq!(integer_order(&literal("8", Some(&xsd("long")))), Some(8));
        assert_eq!(integer_order(&literal("9", Some(&xsd("nonNegativeInteger")))), Some(9));
        assert_eq!(integer_order(&literal("1.0", Some(&xsd("decimal")))), None);
        assert_eq!(integer_order(&literal("first", None)), None);
        assert_eq!(integer_order(&Node::iri("urn:order:1")), None);
    }

    #[test]
    fn fixture_documents_satisfy_trs_shapes() {
        let model = Model::parse_rdf_xml(fixtures::TRS_RDF_XML, None).expect("parses");
        let trs = Node::iri(fixtures::TRS_URL);
        let set = shape_check(&model, &trs, "TrackedResourceSet", "tracked resource set")
            .expect("shape exists");
        assert_eq!(set.severity, Severity::Pass, "{:?}", set.details);
        let log = shape_check(&model, &change_log(&model), "ChangeLog", "change log")
            .expect("shape exists");
        assert_eq!(log.severity, Severity::Pass, "{:?}", log.details);

        let base = Model::parse_rdf_xml(fixtures::TRS_BASE_RDF_XML, None).expect("parses");
        let result = shape_check(&base, &Node::iri(fixtures::TRS_BASE_URL), "Base", "base")
            .expect("shape exists");
        assert_eq!(result.severity, Severity::Pass, "{:?}", result.details);
    }

    #[test]
    fn change_event_without_changed_violates_shape() {
        let log = Node::iri("http://example.com/trs/log");
        let event = Node::iri("urn:event:1");
        let model = Model::from_statements(vec![
            Statement {
                subject: log.clone(),
                predicate: iris::TRS_CHANGE.to_string(),
                object: event.clone(),
            },
            Statement {
                subject: event.clone(),
                predicate: iris::RDF_TYPE.to_string(),
                object: Node::iri(iris::TRS_CREATION),
            },
            Statement {
                subject: event,
                predicate: iris::TRS_ORDER.to_string(),
                object: Node::Literal {
                    value: "3".to_string(),
                    datatype: None,
                    lang: None,
                },
            },
        ]);
        let result = shape_check(&model, &log, "ChangeLog", "change log").expect("shape exists");
        assert!(result.is_failure());
        assert_eq!(result.details.len(), 1);
    }

    #[test]
    fn base_fixture_is_well_formed() {
        let model = Model::parse_rdf_xml(fixtures::TRS_BASE_RDF_XML, None).expect("parses");
        let result = base_result(&model, fixtures::TRS_BASE_URL);
        assert_eq!(result.severity, Severity::Pass);
        assert_eq!(result.message, "base lists 1 member(s)");
    }
}
