//! `oslc:` namespace: OSLC Core 2.0 discovery and query resources.
//!
//! Covers the service discovery chain (catalog → provider → service →
//! capability) plus the query response and compact rendering resources
//! every OSLC 2.0 domain relies on.

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

const OSLC_SERVICE_CLASS: &str = "http://open-services.net/ns/core#Service";

/// Returns the OSLC Core module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::Core,
        namespace: Namespace {
            prefix: "oslc",
            iri: OSLC,
            label: "OSLC Core",
        },
        shapes: shapes(),
    }
}

fn shapes() -> Vec<Shape> {
    use Occurs::*;
    use ValueType::*;

    vec![
        Shape {
            id: "ServiceProviderCatalog",
            label: "Service Provider Catalog",
            class_iri: OSLC_SERVICE_PROVIDER_CATALOG,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ZeroOrOne, XmlLiteral),
                PropertyRule::new("description", DCTERMS_DESCRIPTION, ZeroOrOne, XmlLiteral),
                PropertyRule::nested(
                    "publisher",
                    DCTERMS_PUBLISHER,
                    ZeroOrOne,
                    LocalResource,
                    "Publisher",
                ),
                PropertyRule::new("domain", OSLC_DOMAIN, ZeroOrMany, Resource),
                PropertyRule::new(
                    "serviceProvider",
                    OSLC_SERVICE_PROVIDER_PROP,
                    ZeroOrMany,
                    Resource,
                ),
                PropertyRule::new(
                    "serviceProviderCatalog",
                    OSLC_SERVICE_PROVIDER_CATALOG_PROP,
                    ZeroOrMany,
                    Resource,
                ),
                PropertyRule::new(
                    "oauthConfiguration",
                    "http://open-services.net/ns/core#oauthConfiguration",
                    ZeroOrMany,
                    LocalResource,
                ),
            ],
        },
        Shape {
            id: "ServiceProvider",
            label: "Service Provider",
            class_iri: OSLC_SERVICE_PROVIDER,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ZeroOrOne, XmlLiteral),
                PropertyRule::new("description", DCTERMS_DESCRIPTION, ZeroOrOne, XmlLiteral),
                PropertyRule::nested(
                    "publisher",
                    DCTERMS_PUBLISHER,
                    ZeroOrOne,
                    LocalResource,
                    "Publisher",
                ),
                PropertyRule::nested("service", OSLC_SERVICE, OneOrMany, LocalResource, "Service"),
                PropertyRule::new(
                    "details",
                    "http://open-services.net/ns/core#details",
                    ZeroOrMany,
                    Resource,
                ),
                PropertyRule::nested(
                    "prefixDefinition",
                    "http://open-services.net/ns/core#prefixDefinition",
                    ZeroOrMany,
                    LocalResource,
                    "PrefixDefinition",
                ),
                PropertyRule::new(
                    "oauthConfiguration",
                    "http://open-services.net/ns/core#oauthConfiguration",
                    ZeroOrMany,
                    LocalResource,
                ),
            ],
        },
        Shape {
            id: "Service",
            label: "Service",
            class_iri: OSLC_SERVICE_CLASS,
            properties: vec![
                PropertyRule::new("domain", OSLC_DOMAIN, ExactlyOne, Resource),
                PropertyRule::nested(
                    "creationFactory",
                    OSLC_CREATION_FACTORY,
                    ZeroOrMany,
                    LocalResource,
                    "CreationFactory",
                ),
                PropertyRule::nested(
                    "queryCapability",
                    OSLC_QUERY_CAPABILITY,
                    ZeroOrMany,
                    LocalResource,
                    "QueryCapability",
                ),
                PropertyRule::nested(
                    "selectionDialog",
                    "http://open-services.net/ns/core#selectionDialog",
                    ZeroOrMany,
                    LocalResource,
                    "Dialog",
                ),
                PropertyRule::nested(
                    "creationDialog",
                    "http://open-services.net/ns/core#creationDialog",
                    ZeroOrMany,
                    LocalResource,
                    "Dialog",
                ),
            ],
        },
        Shape {
            id: "CreationFactory",
            label: "Creation Factory",
            class_iri: "http://open-services.net/ns/core#CreationFactory",
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new(
                    "label",
                    "http://open-services.net/ns/core#label",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new("creation", OSLC_CREATION, ExactlyOne, Resource),
                PropertyRule::new("resourceShape", OSLC_RESOURCE_SHAPE, ZeroOrMany, Resource),
                PropertyRule::new("resourceType", OSLC_RESOURCE_TYPE, ZeroOrMany, Resource),
                PropertyRule::new("usage", OSLC_USAGE, ZeroOrMany, Resource),
            ],
        },
        Shape {
            id: "QueryCapability",
            label: "Query Capability",
            class_iri: "http://open-services.net/ns/core#QueryCapability",
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new(
                    "label",
                    "http://open-services.net/ns/core#label",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new("queryBase", OSLC_QUERY_BASE, ExactlyOne, Resource),
                PropertyRule::new("resourceShape", OSLC_RESOURCE_SHAPE, ZeroOrOne, Resource),
                PropertyRule::new("resourceType", OSLC_RESOURCE_TYPE, ZeroOrMany, Resource),
                PropertyRule::new("usage", OSLC_USAGE, ZeroOrMany, Resource),
            ],
        },
        Shape {
            id: "Dialog",
            label: "Dialog",
            class_iri: "http://open-services.net/ns/core#Dialog",
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new(
                    "label",
                    "http://open-services.net/ns/core#label",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new(
                    "dialog",
                    "http://open-services.net/ns/core#dialog",
                    ExactlyOne,
                    Resource,
                ),
                PropertyRule::new(
                    "hintWidth",
                    "http://open-services.net/ns/core#hintWidth",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new(
                    "hintHeight",
                    "http://open-services.net/ns/core#hintHeight",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new("resourceType", OSLC_RESOURCE_TYPE, ZeroOrMany, Resource),
                PropertyRule::new("usage", OSLC_USAGE, ZeroOrMany, Resource),
            ],
        },
        Shape {
            id: "Publisher",
            label: "Publisher",
            class_iri: "http://open-services.net/ns/core#Publisher",
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new(
                    "label",
                    "http://open-services.net/ns/core#label",
                    ZeroOrOne,
                    String,
                ),
                PropertyRule::new("identifier", DCTERMS_IDENTIFIER, ExactlyOne, String),
                PropertyRule::new(
                    "icon",
                    "http://open-services.net/ns/core#icon",
                    ZeroOrOne,
                    Resource,
                ),
            ],
        },
        Shape {
            id: "PrefixDefinition",
            label: "Prefix Definition",
            class_iri: "http://open-services.net/ns/core#PrefixDefinition",
            properties: vec![
                PropertyRule::new(
                    "prefix",
                    "http://open-services.net/ns/core#prefix",
                    ExactlyOne,
                    String,
                ),
                PropertyRule::new(
                    "prefixBase",
                    "http://open-services.net/ns/core#prefixBase",
                    ExactlyOne,
                    Resource,
                ),
            ],
        },
        Shape {
            id: "ResponseInfo",
            label: "Response Info",
            class_iri: OSLC_RESPONSE_INFO,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ZeroOrOne, XmlLiteral),
                PropertyRule::new("nextPage", OSLC_NEXT_PAGE, ZeroOrOne, Resource),
                PropertyRule::new("totalCount", OSLC_TOTAL_COUNT, ZeroOrOne, Integer),
            ],
        },
        Shape {
            id: "Compact",
            label: "Compact",
            class_iri: OSLC_COMPACT,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new(
                    "shortTitle",
                    "http://open-services.net/ns/core#shortTitle",
                    ZeroOrOne,
                    XmlLiteral,
                ),
                PropertyRule::new(
                    "icon",
                    "http://open-services.net/ns/core#icon",
                    ZeroOrOne,
                    Resource,
                ),
                PropertyRule::new(
                    "smallPreview",
                    "http://open-services.net/ns/core#smallPreview",
                    ZeroOrOne,
                    LocalResource,
                ),
                PropertyRule::new(
                    "largePreview",
                    "http://open-services.net/ns/core#largePreview",
                    ZeroOrOne,
                    LocalResource,
                ),
            ],
        },
    ]
}
