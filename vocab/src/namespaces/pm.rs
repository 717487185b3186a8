//! `pm:` namespace: OSLC Performance Monitoring 2.0.
//!
//! A monitoring record is part of a monitored resource and observes zero or
//! more `ems:Measure` values.

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

/// Returns the Performance Monitoring module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::PerformanceMonitoring,
        namespace: Namespace {
            prefix: "pm",
            iri: PM,
            label: "OSLC Performance Monitoring",
        },
        shapes: shapes(),
    }
}

fn shapes() -> Vec<Shape> {
    use Occurs::*;
    use ValueType::*;

    vec![
        Shape {
            id: "PerformanceMonitoringRecord",
            label: "Performance Monitoring Record",
            class_iri: PM_RECORD,
            properties: vec![
                PropertyRule::new("isPartOf", DCTERMS_IS_PART_OF, ExactlyOne, Resource),
                PropertyRule::new("title", DCTERMS_TITLE, ZeroOrOne, XmlLiteral),
                PropertyRule::new("modified", DCTERMS_MODIFIED, ZeroOrOne, DateTime),
                PropertyRule::nested(
                    "observes",
                    "http://open-services.net/ns/ems#observes",
                    ZeroOrMany,
                    AnyResource,
                    "Measure",
                ),
            ],
        },
        Shape {
            id: "Measure",
            label: "Measure",
            class_iri: "http://open-services.net/ns/ems#Measure",
            properties: vec![
                PropertyRule::new(
                    "metric",
                    "http://open-services.net/ns/ems#metric",
                    ExactlyOne,
                    Resource,
                ),
                PropertyRule::new(
                    "unitOfMeasure",
                    "http://open-services.net/ns/ems#unitOfMeasure",
                    ZeroOrOne,
                    Resource,
                ),
                PropertyRule::new(
                    "numericValue",
                    "http://open-services.net/ns/ems#numericValue",
                    ZeroOrOne,
                    String,
                ),
            ],
        },
    ]
}
