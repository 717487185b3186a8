//! `oslc_cm:` namespace: OSLC Change Management 2.0.

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

/// Returns the Change Management module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::ChangeManagement,
        namespace: Namespace {
            prefix: "oslc_cm",
            iri: OSLC_CM,
            label: "OSLC Change Management",
        },
        shapes: vec![change_request()],
    }
}

fn change_request() -> Shape {
    use Occurs::*;
    use ValueType::*;

    Shape {
        id: "ChangeRequest",
        label: "Change Request",
        class_iri: OSLC_CM_CHANGE_REQUEST,
        properties: vec![
            PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
            PropertyRule::new("identifier", DCTERMS_IDENTIFIER, ExactlyOne, String),
            PropertyRule::new("description", DCTERMS_DESCRIPTION, ZeroOrOne, XmlLiteral),
            PropertyRule::new("subject", DCTERMS_SUBJECT, ZeroOrMany, String),
            PropertyRule::new("creator", DCTERMS_CREATOR, ZeroOrMany, AnyResource),
            PropertyRule::new("contributor", DCTERMS_CONTRIBUTOR, ZeroOrMany, AnyResource),
            PropertyRule::new("created", DCTERMS_CREATED, ZeroOrOne, DateTime),
            PropertyRule::new("modified", DCTERMS_MODIFIED, ZeroOrOne, DateTime),
            PropertyRule::new("type", RDF_TYPE, ZeroOrMany, Resource),
            PropertyRule::new(
                "shortTitle",
                "http://open-services.net/ns/core#shortTitle",
                ZeroOrOne,
                XmlLiteral,
            ),
            PropertyRule::new(
                "serviceProvider",
                OSLC_SERVICE_PROVIDER_PROP,
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "instanceShape",
                "http://open-services.net/ns/core#instanceShape",
                ZeroOrOne,
                Resource,
            ),
            PropertyRule::new(
                "discussedBy",
                "http://open-services.net/ns/core#discussedBy",
                ZeroOrOne,
                AnyResource,
            ),
            PropertyRule::new("closeDate", "http://open-services.net/ns/cm#closeDate", ZeroOrOne, DateTime),
            PropertyRule::new("status", "http://open-services.net/ns/cm#status", ZeroOrOne, String),
            PropertyRule::new("closed", "http://open-services.net/ns/cm#closed", ZeroOrOne, Boolean),
            PropertyRule::new("inprogress", "http://open-services.net/ns/cm#inprogress", ZeroOrOne, Boolean),
            PropertyRule::new("fixed", "http://open-services.net/ns/cm#fixed", ZeroOrOne, Boolean),
            PropertyRule::new("approved", "http://open-services.net/ns/cm#approved", ZeroOrOne, Boolean),
            PropertyRule::new("reviewed", "http://open-services.net/ns/cm#reviewed", ZeroOrOne, Boolean),
            PropertyRule::new("verified", "http://open-services.net/ns/cm#verified", ZeroOrOne, Boolean),
            PropertyRule::new(
                "relatedChangeRequest",
                "http://open-services.net/ns/cm#relatedChangeRequest",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "affectsPlanItem",
                "http://open-services.net/ns/cm#affectsPlanItem",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "affectedByDefect",
                "http://open-services.net/ns/cm#affectedByDefect",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "tracksRequirement",
                "http://open-services.net/ns/cm#tracksRequirement",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "implementsRequirement",
                "http://open-services.net/ns/cm#implementsRequirement",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "affectsRequirement",
                "http://open-services.net/ns/cm#affectsRequirement",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "tracksChangeSet",
                "http://open-services.net/ns/cm#tracksChangeSet",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "testedByTestCase",
                "http://open-services.net/ns/cm#testedByTestCase",
                ZeroOrMany,
                Resource,
            ),
            PropertyRule::new(
                "affectsTestResult",
                "http://open-services.net/ns/cm#affectsTestResult",
                ZeroOrMany,
                Resource,
            ),
        ],
    }
}
