//! `oslc_rm:` namespace: OSLC Requirements Management 2.0.

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

/// Relationship properties shared by requirements and collections.
const RELATIONSHIPS: &[(&str, &str)] = &[
    ("elaboratedBy", "http://open-services.net/ns/rm#elaboratedBy"),
    ("elaborates", "http://open-services.net/ns/rm#elaborates"),
    ("specifiedBy", "http://open-services.net/ns/rm#specifiedBy"),
    ("specifies", "http://open-services.net/ns/rm#specifies"),
    ("affectedBy", "http://open-services.net/ns/rm#affectedBy"),
    ("trackedBy", "http://open-services.net/ns/rm#trackedBy"),
    ("implementedBy", "http://open-services.net/ns/rm#implementedBy"),
    ("validatedBy", "http://open-services.net/ns/rm#validatedBy"),
    ("satisfiedBy", "http://open-services.net/ns/rm#satisfiedBy"),
    ("satisfies", "http://open-services.net/ns/rm#satisfies"),
    ("decomposedBy", "http://open-services.net/ns/rm#decomposedBy"),
    ("decomposes", "http://open-services.net/ns/rm#decomposes"),
    ("constrainedBy", "http://open-services.net/ns/rm#constrainedBy"),
    ("constrains", "http://open-services.net/ns/rm#constrains"),
];

/// Returns the Requirements Management module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::RequirementsManagement,
        namespace: Namespace {
            prefix: "oslc_rm",
            iri: OSLC_RM,
            label: "OSLC Requirements Management",
        },
        shapes: vec![
            requirement_shape("Requirement", "Requirement", OSLC_RM_REQUIREMENT, false),
            requirement_shape(
                "RequirementCollection",
                "Requirement Collection",
                OSLC_RM_REQUIREMENT_COLLECTION,
                true,
            ),
        ],
    }
}

fn requirement_shape(
    id: &'static str,
    label: &'static str,
    class_iri: &'static str,
    collection: bool,
) -> Shape {
    use Occurs::*;
    use ValueType::*;

    let mut properties = vec![
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
    ];
    properties.extend(
        RELATIONSHIPS
            .iter()
            .map(|&(name, iri)| PropertyRule::new(name, iri, ZeroOrMany, Resource)),
    );
    if collection {
        properties.push(PropertyRule::new(
            "uses",
            "http://open-services.net/ns/rm#uses",
            ZeroOrMany,
            Resource,
        ));
    }

    Shape {
        id,
        label,
        class_iri,
        properties,
    }
}
