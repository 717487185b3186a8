//! `oslc_asset:` namespace: OSLC Asset Management 2.0.
//!
//! Assets carry zero or more inline artifacts; artifact content itself is
//! uploaded through the asset's `oslc_asset:artifactFactory`.

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

/// Returns the Asset Management module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::AssetManagement,
        namespace: Namespace {
            prefix: "oslc_asset",
            iri: OSLC_ASSET,
            label: "OSLC Asset Management",
        },
        shapes: shapes(),
    }
}

fn shapes() -> Vec<Shape> {
    use Occurs::*;
    use ValueType::*;

    vec![
        Shape {
            id: "Asset",
            label: "Asset",
            class_iri: OSLC_ASSET_ASSET,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new("identifier", DCTERMS_IDENTIFIER, ZeroOrOne, String),
                PropertyRule::new("description", DCTERMS_DESCRIPTION, ZeroOrOne, XmlLiteral),
                PropertyRule::new("created", DCTERMS_CREATED, ZeroOrOne, DateTime),
                PropertyRule::new("modified", DCTERMS_MODIFIED, ZeroOrOne, DateTime),
                PropertyRule::new("creator", DCTERMS_CREATOR, ZeroOrMany, AnyResource),
                PropertyRule::new("contributor", DCTERMS_CONTRIBUTOR, ZeroOrMany, AnyResource),
                PropertyRule::new("type", DCTERMS_TYPE, ZeroOrOne, Resource),
                PropertyRule::new(
                    "guid",
                    "http://open-services.net/ns/asset#guid",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new(
                    "version",
                    "http://open-services.net/ns/asset#version",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new(
                    "state",
                    "http://open-services.net/ns/asset#state",
                    ZeroOrOne,
                    Resource,
                ),
                PropertyRule::new(
                    "manufacturer",
                    "http://open-services.net/ns/asset#manufacturer",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new(
                    "model",
                    "http://open-services.net/ns/asset#model",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new(
                    "serialNumber",
                    "http://open-services.net/ns/asset#serialNumber",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::nested(
                    "artifact",
                    OSLC_ASSET_ARTIFACT,
                    ZeroOrMany,
                    LocalResource,
                    "Artifact",
                ),
                PropertyRule::new(
                    "artifactFactory",
                    OSLC_ASSET_ARTIFACT_FACTORY,
                    ZeroOrOne,
                    Resource,
                ),
            ],
        },
        Shape {
            id: "Artifact",
            label: "Artifact",
            class_iri: "http://open-services.net/ns/asset#Artifact",
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ZeroOrOne, XmlLiteral),
                PropertyRule::new("created", DCTERMS_CREATED, ZeroOrOne, DateTime),
                PropertyRule::new(
                    "size",
                    "http://open-services.net/ns/asset#size",
                    ZeroOrOne,
                    Integer,
                ),
                PropertyRule::new(
                    "content",
                    "http://open-services.net/ns/asset#content",
                    ExactlyOne,
                    Resource,
                ),
            ],
        },
    ]
}
