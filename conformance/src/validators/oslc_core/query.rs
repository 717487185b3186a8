//! Query capability validator.
//!
//! Runs the configured `oslc.where` queries (equality, inequality and
//! comparison), a full-text search, `oslc.select` limiting and paging
//! against the first discovered query base. The 1.0 track sends an
//! `oslc_cm.query` to the first simple query URL.

use std::cmp::Ordering;

use anyhow::{anyhow, Context, Result};
use chrono::DateTime;
use oslc_vocab::model::iris;

use crate::config::QueryConfig;
use crate::context::SuiteContext;
use crate::discovery::{v1_capability_urls, Capability};
use crate::http::{self, with_query};
use crate::rdf::{Model, Node};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{attempt, expect_status};

const VALIDATOR: &str = "core/query";

/// Members whose values are checked per query.
const MAX_CHECKED_MEMBERS: usize = 10;

/// A prefixed property used in `oslc.where`, with its expansion and the
/// `oslc.prefix` declaration that makes the prefix known to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryProperty {
    prefixed: String,
    iri: String,
    declaration: String,
}

impl QueryProperty {
    fn parse(ctx: &SuiteContext, prefixed: &str) -> Result<Self> {
        let (prefix, _) = prefixed
            .split_once(':')
            .ok_or_else(|| anyhow!("query property '{}' has no prefix", prefixed))?;
        let vocab = ctx.vocab();
        let namespace = vocab
            .namespace(prefix)
            .ok_or_else(|| anyhow!("unknown prefix '{}' in query property", prefix))?;
        let iri = vocab
            .expand(prefixed)
            .ok_or_else(|| anyhow!("cannot expand '{}'", prefixed))?;
        Ok(Self {
            prefixed: prefixed.to_string(),
            iri,
            declaration: format!("{}=<{}>", namespace.prefix, namespace.iri),
        })
    }
}

/// Runs the query checks.
///
/// # Errors
///
/// Returns an error only if report assembly fails; server misbehavior is
/// reported as failures.
pub fn validate(ctx: &SuiteContext) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if ctx.config.versions.includes_v2() {
        match ctx.capability_for(Capability::Query, &[]) {
            Some(capability) => validate_query_base(ctx, &capability.url, &mut report),
            None => report.push(TestResult::skip(
                VALIDATOR,
                "no OSLC 2.0 query capability discovered",
            )),
        }
    }
    if ctx.config.versions.includes_v1() {
        validate_v1(ctx, &mut report);
    }

    Ok(report)
}

fn validate_query_base(ctx: &SuiteContext, base: &str, report: &mut ConformanceReport) {
    tracing::info!(query_base = %base, "running queries");
    report.record(VALIDATOR, || {
        let response = ctx.client.get(base, http::RDF_XML)?;
        if response.is_success() {
            Model::parse_rdf_xml(&response.text(), Some(base)).context("parsing query base")?;
        }
        Ok(expect_status(VALIDATOR, "GET query base", &response, &[200]))
    });

    let query = &ctx.config.query;
    match (&query.equality_property, &query.equality_value) {
        (Some(property), Some(value)) => {
            let not_equal = query.not_equal_value.as_deref().unwrap_or(value.as_str());
            report.record(VALIDATOR, || {
                where_query(ctx, base, property, "=", value, |actual| {
                    literal_value(actual) == literal_value(value)
                })
            });
            report.record(VALIDATOR, || {
                where_query(ctx, base, property, "!=", not_equal, |actual| {
                    literal_value(actual) != literal_value(not_equal)
                })
            });
            report.record(VALIDATOR, || select_query(ctx, base, property));
        }
        _ => report.push(TestResult::skip(
            VALIDATOR,
            "query.equality_property and query.equality_value not configured",
        )),
    }
    match (&query.comparison_property, &query.comparison_value) {
        (Some(property), Some(value)) => report.record(VALIDATOR, || {
            where_query(ctx, base, property, ">=", value, |actual| {
                compare_values(literal_value(actual), literal_value(value)) != Ordering::Less
            })
        }),
        _ => report.push(TestResult::skip(
            VALIDATOR,
            "query.comparison_property and query.comparison_value not configured",
        )),
    }
    match &query.full_text_search_term {
        Some(term) => report.record(VALIDATOR, || full_text_query(ctx, base, term)),
        None => report.push(TestResult::skip(
            VALIDATOR,
            "query.full_text_search_term not configured",
        )),
    }
    report.record(VALIDATOR, || paging_query(ctx, base));
}

/// Query parameters with the configured extras appended.
fn query_pairs(query: &QueryConfig, pairs: &[(&str, String)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .chain(query.additional_pairs())
        .collect()
}

fn where_query(
    ctx: &SuiteContext,
    base: &str,
    property: &str,
    operator: &str,
    value: &str,
    accepts: impl Fn(&str) -> bool,
) -> Result<TestResult> {
    let property = QueryProperty::parse(ctx, property)?;
    let clause = format!("{}{}{}", property.prefixed, operator, value);
    let url = with_query(
        base,
        &query_pairs(
            &ctx.config.query,
            &[
                ("oslc.where", clause.clone()),
                ("oslc.select", property.prefixed.clone()),
                ("oslc.prefix", property.declaration.clone()),
            ],
        ),
    )?;
    let response = ctx.client.get(&url, http::RDF_XML)?;
    if response.status != 200 {
        return Ok(TestResult::fail(
            VALIDATOR,
            format!("oslc.where={} returned {}", clause, response.status),
        ));
    }
    let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
        .with_context(|| format!("parsing results of oslc.where={}", clause))?;

    let members = model.member_iris();
    if members.is_empty() {
        return Ok(TestResult::warn(
            VALIDATOR,
            format!("oslc.where={} matched no resources", clause),
        ));
    }
    let mut mismatches = Vec::new();
    for member in members.iter().take(MAX_CHECKED_MEMBERS) {
        let values = member_values(ctx, &model, member, &property.iri)?;
        if values.is_empty() {
            mismatches.push(format!("{} has no {}", member, property.prefixed));
        } else if !values.iter().any(|v| accepts(v)) {
            mismatches.push(format!("{} has {} = {}", member, property.prefixed, values.join(", ")));
        }
    }
    Ok(if mismatches.is_empty() {
        TestResult::pass(
            VALIDATOR,
            format!("oslc.where={} returned {} matching resource(s)", clause, members.len()),
        )
    } else {
        TestResult::fail_with_details(
            VALIDATOR,
            format!("oslc.where={} returned resources that do not match", clause),
            mismatches,
        )
    })
}

/// Lexical values of `property` on `member`, read from the result page
/// when the server inlined them and from the member itself otherwise.
fn member_values(ctx: &SuiteContext, page: &Model, member: &str, property: &str) -> Result<Vec<String>> {
    let node = Node::iri(member);
    let inline = node_values(page, &node, property);
    if !inline.is_empty() {
        return Ok(inline);
    }
    let (_, model) = ctx.get_model(member)?;
    Ok(node_values(&model, &node, property))
}

fn node_values(model: &Model, node: &Node, property: &str) -> Vec<String> {
    model
        .objects(node, property)
        .into_iter()
        .map(|o| match o {
            Node::Literal { value, .. } => value.clone(),
            Node::Iri(iri) => iri.clone(),
            Node::Blank(id) => format!("_:{}", id),
        })
        .collect()
}

fn select_query(ctx: &SuiteContext, base: &str, property: &str) -> Result<TestResult> {
    let property = QueryProperty::parse(ctx, property)?;
    let url = with_query(
        base,
        &query_pairs(
            &ctx.config.query,
            &[
                ("oslc.select", property.prefixed.clone()),
                ("oslc.prefix", property.declaration.clone()),
            ],
        ),
    )?;
    let response = ctx.client.get(&url, http::RDF_XML)?;
    if response.status != 200 {
        return Ok(TestResult::fail(
            VALIDATOR,
            format!("oslc.select={} returned {}", property.prefixed, response.status),
        ));
    }
    let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))?;
    let extra = unselected_properties(&model, &property.iri);
    Ok(if extra.is_empty() {
        TestResult::pass(
            VALIDATOR,
            format!("oslc.select={} limits member properties", property.prefixed),
        )
    } else {
        TestResult::warn(
            VALIDATOR,
            format!(
                "oslc.select={} returned unselected properties: {}",
                property.prefixed,
                extra.join(", ")
            ),
        )
    })
}

/// Properties of result members other than the selected one and `rdf:type`.
fn unselected_properties(model: &Model, selected: &str) -> Vec<String> {
    let mut extra: Vec<String> = Vec::new();
    for member in model.member_iris() {
        let node = Node::iri(member);
        for statement in model.list_statements(crate::rdf::Selector::any().subject(&node)) {
            let predicate = &statement.predicate;
            if predicate != selected && predicate != iris::RDF_TYPE && !extra.contains(predicate) {
                extra.push(predicate.clone());
            }
        }
    }
    extra
}

fn full_text_query(ctx: &SuiteContext, base: &str, term: &str) -> Result<TestResult> {
    let quoted = format!("\"{}\"", term.trim_matches('"'));
    let url = with_query(
        base,
        &query_pairs(&ctx.config.query, &[("oslc.searchTerms", quoted.clone())]),
    )?;
    let response = ctx.client.get(&url, http::RDF_XML)?;
    if response.status != 200 {
        return Ok(TestResult::warn(
            VALIDATOR,
            format!("oslc.searchTerms={} returned {}", quoted, response.status),
        ));
    }
    let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
        .context("parsing full-text search results")?;
    Ok(TestResult::pass(
        VALIDATOR,
        format!(
            "oslc.searchTerms={} returned {} resource(s)",
            quoted,
            model.member_iris().len()
        ),
    ))
}

fn paging_query(ctx: &SuiteContext, base: &str) -> Result<TestResult> {
    let url = with_query(
        base,
        &query_pairs(
            &ctx.config.query,
            &[
                ("oslc.paging", "true".to_string()),
                ("oslc.pageSize", "1".to_string()),
            ],
        ),
    )?;
    let response = ctx.client.get(&url, http::RDF_XML)?;
    if response.status != 200 {
        return Ok(TestResult::warn(
            VALIDATOR,
            format!("paged query returned {}", response.status),
        ));
    }
    let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
        .context("parsing paged query results")?;
    Ok(paging_result(&model))
}

fn paging_result(model: &Model) -> TestResult {
    let infos = model.subjects_of_type(iris::OSLC_RESPONSE_INFO);
    let Some(info) = infos.first() else {
        return TestResult::warn(VALIDATOR, "paged query has no oslc:ResponseInfo");
    };
    let total = model
        .object(info, iris::OSLC_TOTAL_COUNT)
        .and_then(Node::as_literal)
        .and_then(|v| v.parse::<usize>().ok());
    let members = model.member_iris().len();
    let has_next = model.count(info, iris::OSLC_NEXT_PAGE) > 0;
    match total {
        Some(total) if total > members && !has_next => TestResult::warn(
            VALIDATOR,
            format!(
                "paged query reports {} result(s) but returned {} and no oslc:nextPage",
                total, members
            ),
        ),
        _ => TestResult::pass(
            VALIDATOR,
            format!(
                "paged query returned oslc:ResponseInfo ({} member(s) on the first page)",
                members
            ),
        ),
    }
}

fn validate_v1(ctx: &SuiteContext, report: &mut ConformanceReport) {
    let Some(services) = ctx.v1_providers.urls.first() else {
        report.push(TestResult::skip(
            VALIDATOR,
            "no OSLC 1.0 service descriptor discovered",
        ));
        return;
    };
    let Some(queries) = attempt(report, VALIDATOR, || {
        v1_capability_urls(&ctx.v1_client, services, Capability::Query)
    }) else {
        return;
    };
    let Some(query_url) = queries.first() else {
        report.push(TestResult::skip(
            VALIDATOR,
            format!("{} lists no oslc_cm:simpleQuery", services),
        ));
        return;
    };
    let query = &ctx.config.query;
    let clause = match (&query.equality_property, &query.equality_value) {
        (Some(property), Some(value)) => format!("{}={}", property, value),
        _ => String::new(),
    };
    report.record(VALIDATOR, || {
        let url = with_query(query_url, &query_pairs(query, &[("oslc_cm.query", clause.clone())]))?;
        let response = ctx.v1_client.get(&url, http::XML)?;
        Ok(expect_status(VALIDATOR, "OSLC 1.0 oslc_cm.query", &response, &[200]))
    });
}

/// Strips the quotes and `^^datatype` suffix of a query literal.
fn literal_value(raw: &str) -> &str {
    let raw = raw.trim();
    let Some(quoted) = raw.strip_prefix('"') else {
        return raw;
    };
    match quoted.rfind('"') {
        Some(end) => &quoted[..end],
        None => quoted,
    }
}

/// Numbers compare numerically, timestamps chronologically, anything else
/// lexically.
fn compare_values(left: &str, right: &str) -> Ordering {
    if let (Ok(l), Ok(r)) = (left.parse::<f64>(), right.parse::<f64>()) {
        return l.partial_cmp(&r).unwrap_or(Ordering::Equal);
    }
    if let (Ok(l), Ok(r)) = (
        DateTime::parse_from_rfc3339(left),
        DateTime::parse_from_rfc3339(right),
    ) {
        return l.cmp(&r);
    }
    left.cmp(right)
}
