//! `trs:` namespace: OSLC Tracked Resource Set 2.0.
//!
//! A tracked resource set points at exactly one base (the resource
//! enumeration) and exactly one change log (an ordered event feed, newest
//! first, paged backwards through `trs:previous`).

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

/// Returns the Tracked Resource Set module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::TrackedResourceSet,
        namespace: Namespace {
            prefix: "trs",
            iri: TRS,
            label: "OSLC Tracked Resource Set",
        },
        shapes: shapes(),
    }
}

fn shapes() -> Vec<Shape> {
    use Occurs::*;
    use ValueType::*;

    vec![
        Shape {
            id: "TrackedResourceSet",
            label: "Tracked Resource Set",
            class_iri: TRS_TRACKED_RESOURCE_SET,
            properties: vec![
                PropertyRule::new("base", TRS_BASE, ExactlyOne, Resource),
                PropertyRule::new("changeLog", TRS_CHANGE_LOG, ExactlyOne, AnyResource),
            ],
        },
        Shape {
            id: "ChangeLog",
            label: "Change Log",
            class_iri: "http://open-services.net/ns/core/trs#ChangeLog",
            properties: vec![
                PropertyRule::nested("change", TRS_CHANGE, ZeroOrMany, AnyResource, "ChangeEvent"),
                PropertyRule::new("previous", TRS_PREVIOUS, ZeroOrOne, Resource),
            ],
        },
        Shape {
            id: "ChangeEvent",
            label: "Change Event",
            class_iri: "http://open-services.net/ns/core/trs#ChangeEvent",
            properties: vec![
                PropertyRule::new("changed", TRS_CHANGED, ExactlyOne, Resource),
                PropertyRule::new("order", TRS_ORDER, ExactlyOne, Integer),
            ],
        },
        Shape {
            id: "Base",
            label: "Base",
            class_iri: "http://www.w3.org/ns/ldp#DirectContainer",
            properties: vec![
                PropertyRule::new("cutoffEvent", TRS_CUTOFF_EVENT, ZeroOrOne, Resource),
                PropertyRule::new("member", RDFS_MEMBER, ZeroOrMany, Resource),
                PropertyRule::new("nextPage", LDP_NEXT_PAGE, ZeroOrOne, Resource),
            ],
        },
    ]
}
