//! Resource shape checking.
//!
//! A [`Shape`] lists the properties a resource may carry and how often.
//! [`check_resource`] counts those properties in an RDF [`Model`] and checks
//! the value kinds; [`check_xml_resource`] does the cardinality half of the
//! same job over an XML element.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use oslc_vocab::{Occurs, PropertyRule, Shape, ValueType, Vocabulary};

use crate::rdf::{Model, Node};
use crate::xml::{XmlDocument, XmlError};

/// Nested shapes are followed at most this deep.
const MAX_DEPTH: usize = 4;

/// One shape constraint a resource does not meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Id of the violated shape.
    pub shape: String,
    /// Local name of the offending property.
    pub property: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.shape, self.property, self.message)
    }
}

impl Violation {
    fn new(shape: &Shape, rule: &PropertyRule, message: String) -> Self {
        Self {
            shape: shape.id.to_string(),
            property: rule.name.to_string(),
            message,
        }
    }
}

/// Checks `subject` in `model` against `shape`, following nested shapes
/// into objects described in the same document.
pub fn check_resource(model: &Model, subject: &Node, shape: &Shape) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut path = vec![subject.clone()];
    check_node(model, subject, shape, &mut path, &mut violations);
    violations
}

fn check_node(
    model: &Model,
    subject: &Node,
    shape: &Shape,
    path: &mut Vec<Node>,
    violations: &mut Vec<Violation>,
) {
    for rule in &shape.properties {
        let values = model.objects(subject, rule.iri);
        if !rule.occurs.admits(values.len()) {
            violations.push(Violation::new(
                shape,
                rule,
                cardinality_message(rule.occurs, values.len()),
            ));
        }

        for value in &values {
            if let Some(message) = value_type_error(rule.value_type, value) {
                violations.push(Violation::new(shape, rule, message));
                continue;
            }
            let Some(nested) = rule.nested.and_then(|id| Vocabulary::full().find_shape(id))
            else {
                continue;
            };
            if path.len() >= MAX_DEPTH || path.contains(*value) || !model.describes(value) {
                continue;
            }
            path.push((*value).clone());
            check_node(model, value, nested, path, violations);
            path.pop();
        }
    }
}

fn cardinality_message(occurs: Occurs, count: usize) -> String {
    format!("expected {} value(s), found {}", occurs.as_str(), count)
}

fn value_type_error(value_type: ValueType, value: &Node) -> Option<String> {
    if value_type.is_resource() {
        return (!value.is_resource()).then(|| format!("expected a resource, found {}", value));
    }
    let Some(lexical) = value.as_literal() else {
        return Some(format!("expected a literal, found {}", value));
    };
    let valid = match value_type {
        ValueType::Boolean => matches!(lexical.trim(), "true" | "false" | "1" | "0"),
        ValueType::Integer => lexical.trim().parse::<i64>().is_ok(),
        ValueType::DateTime => is_date_time(lexical.trim()),
        _ => true,
    };
    (!valid).then(|| {
        format!(
            "`{}` is not a valid {}",
            lexical,
            value_type.iri().rsplit('#').next().unwrap_or("value")
        )
    })
}

/// Accepts `xsd:dateTime` lexical forms with or without a timezone.
fn is_date_time(lexical: &str) -> bool {
    DateTime::parse_from_rfc3339(lexical).is_ok()
        || NaiveDateTime::parse_from_str(lexical, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

/// Checks the child elements of the element selected by `element_xpath`
/// against the cardinalities of `shape`. Properties are matched by their
/// prefixed element name; value kinds are not checked.
///
/// # Errors
///
/// Returns [`XmlError`] if an expression fails to evaluate.
pub fn check_xml_resource(
    doc: &XmlDocument,
    element_xpath: &str,
    shape: &Shape,
) -> Result<Vec<Violation>, XmlError> {
    let vocab = Vocabulary::full();
    let mut violations = Vec::new();
    for rule in &shape.properties {
        let Some(element) = vocab.compact(rule.iri) else {
            continue;
        };
        let count = doc.count(&format!("{}/{}", element_xpath, element))?;
        if !rule.occurs.admits(count) {
            violations.push(Violation::new(
                shape,
                rule,
                cardinality_message(rule.occurs, count),
            ));
        }
    }
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Statement;
    use crate::tests::fixtures;
    use oslc_vocab::model::iris;

    fn shape(id: &str) -> &'static Shape {
        Vocabulary::full()
            .find_shape(id)
            .unwrap_or_else(|| panic!("no shape {}", id))
    }

    fn literal(value: &str) -> Node {
        Node::Literal {
            value: value.to_string(),
            datatype: None,
            lang: None,
        }
    }

    #[test]
    fn conforming_change_request_has_no_violations() {
        let model = Model::parse_rdf_xml(
            fixtures::CHANGE_REQUEST_RDF_XML,
            Some(fixtures::CHANGE_REQUEST_URL),
        )
        .expect("parses");
        let violations = check_resource(
            &model,
            &Node::iri(fixtures::CHANGE_REQUEST_URL),
            shape("ChangeRequest"),
        );
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn missing_and_repeated_properties_are_reported() {
        let cr = Node::iri("http://example.com/cr/1");
        let model = Model::from_statements(vec![
            Statement {
                subject: cr.clone(),
                predicate: iris::DCTERMS_TITLE.to_string(),
                object: literal("one"),
            },
            Statement {
                subject: cr.clone(),
                predicate: iris::DCTERMS_TITLE.to_string(),
                object: literal("two"),
            },
        ]);
        let violations = check_resource(&model, &cr, shape("ChangeRequest"));
        let properties: Vec<_> = violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(properties, vec!["title", "identifier"]);
        assert_eq!(
            violations[1].to_string(),
            "ChangeRequest.identifier: expected exactly-one value(s), found 0"
        );
    }

    #[test]
    fn bad_literal_forms_are_reported() {
        let cr = Node::iri("http://example.com/cr/2");
        let model = Model::from_statements(vec![
            Statement {
                subject: cr.clone(),
                predicate: iris::DCTERMS_TITLE.to_string(),
                object: literal("t"),
            },
            Statement {
                subject: cr.clone(),
                predicate: iris::DCTERMS_IDENTIFIER.to_string(),
                object: literal("2"),
            },
            Statement {
                subject: cr.clone(),
                predicate: iris::DCTERMS_CREATED.to_string(),
                object: literal("yesterday"),
            },
            Statement {
                subject: cr.clone(),
                predicate: iris::DCTERMS_CREATOR.to_string(),
                object: literal("bob"),
            },
        ]);
        let violations = check_resource(&model, &cr, shape("ChangeRequest"));
        let properties: Vec<_> = violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(properties, vec!["creator", "created"]);
    }

    #[test]
    fn nested_service_shapes_are_checked() {
        let model = Model::parse_rdf_xml(
            fixtures::SERVICE_PROVIDER_RDF_XML,
            Some(fixtures::SERVICE_PROVIDER_URL),
        )
        .expect("parses");
        let provider = Node::iri(fixtures::SERVICE_PROVIDER_URL);
        assert!(check_resource(&model, &provider, shape("ServiceProvider")).is_empty());

        let without_domain = Model::from_statements(
            model
                .list_statements(crate::rdf::Selector::any())
                .filter(|s| s.predicate != iris::OSLC_DOMAIN)
                .cloned()
                .collect(),
        );
        let violations = check_resource(&without_domain, &provider, shape("ServiceProvider"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].shape, "Service");
        assert_eq!(violations[0].property, "domain");
    }

    #[test]
    fn accepts_date_times_with_and_without_zone() {
        assert!(is_date_time("2024-03-01T10:00:00Z"));
        assert!(is_date_time("2024-03-01T10:00:00.250+01:00"));
        assert!(is_date_time("2024-03-01T10:00:00"));
        assert!(!is_date_time("2024-03-01"));
    }

    #[test]
    fn xml_cardinalities_are_checked() {
        let doc = XmlDocument::parse(fixtures::CHANGE_REQUEST_XML).expect("parses");
        let violations =
            check_xml_resource(&doc, "/oslc_cm:ChangeRequest", shape("ChangeRequest"))
                .expect("evaluates");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].property, "identifier");
    }
}
