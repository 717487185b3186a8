//! Core vocabulary model types.
//!
//! These types describe OSLC resource shapes as typed Rust data. All shape
//! tables are built as owned `Vec`s of `'static` string data and referenced
//! via borrows. The top-level entry point is
//! [`Vocabulary::full()`](crate::Vocabulary::full).

use std::fmt;
use std::str::FromStr;

/// An RDF namespace used by OSLC documents (e.g., `oslc:`, `dcterms:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The conventional prefix (e.g., `"oslc_cm"`).
    pub prefix: &'static str,
    /// The full namespace IRI (e.g., `"http://open-services.net/ns/cm#"`).
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// OSLC property cardinality (`oslc:occurs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurs {
    /// `oslc:Exactly-one`.
    ExactlyOne,
    /// `oslc:Zero-or-one`.
    ZeroOrOne,
    /// `oslc:One-or-many`.
    OneOrMany,
    /// `oslc:Zero-or-many`.
    ZeroOrMany,
}

impl Occurs {
    /// Minimum number of values a resource must carry.
    #[must_use]
    pub fn min(self) -> usize {
        match self {
            Occurs::ExactlyOne | Occurs::OneOrMany => 1,
            Occurs::ZeroOrOne | Occurs::ZeroOrMany => 0,
        }
    }

    /// Maximum number of values, or `None` when unbounded.
    #[must_use]
    pub fn max(self) -> Option<usize> {
        match self {
            Occurs::ExactlyOne | Occurs::ZeroOrOne => Some(1),
            Occurs::OneOrMany | Occurs::ZeroOrMany => None,
        }
    }

    /// Returns true if `count` values satisfy this cardinality.
    #[must_use]
    pub fn admits(self, count: usize) -> bool {
        count >= self.min() && self.max().map_or(true, |max| count <= max)
    }

    /// Returns the OSLC individual IRI for this cardinality.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            Occurs::ExactlyOne => "http://open-services.net/ns/core#Exactly-one",
            Occurs::ZeroOrOne => "http://open-services.net/ns/core#Zero-or-one",
            Occurs::OneOrMany => "http://open-services.net/ns/core#One-or-many",
            Occurs::ZeroOrMany => "http://open-services.net/ns/core#Zero-or-many",
        }
    }

    /// Returns the human-readable form used in report messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Occurs::ExactlyOne => "exactly-one",
            Occurs::ZeroOrOne => "zero-or-one",
            Occurs::OneOrMany => "one-or-many",
            Occurs::ZeroOrMany => "zero-or-many",
        }
    }
}

/// The kind of value a property carries (`oslc:valueType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// A reference to a resource by IRI (`oslc:Resource`).
    Resource,
    /// An inline resource, usually a blank node (`oslc:LocalResource`).
    LocalResource,
    /// Either a reference or an inline resource (`oslc:AnyResource`).
    AnyResource,
    /// A plain string literal.
    String,
    /// An XML literal (titles and descriptions in OSLC 2.0).
    XmlLiteral,
    /// An `xsd:boolean` literal.
    Boolean,
    /// An `xsd:integer` literal.
    Integer,
    /// An `xsd:dateTime` literal.
    DateTime,
}

impl ValueType {
    /// Returns true if values of this type are resources rather than literals.
    #[must_use]
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            ValueType::Resource | ValueType::LocalResource | ValueType::AnyResource
        )
    }

    /// Returns the IRI used for `oslc:valueType`.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            ValueType::Resource => "http://open-services.net/ns/core#Resource",
            ValueType::LocalResource => "http://open-services.net/ns/core#LocalResource",
            ValueType::AnyResource => "http://open-services.net/ns/core#AnyResource",
            ValueType::String => iris::XSD_STRING,
            ValueType::XmlLiteral => iris::RDF_XML_LITERAL,
            ValueType::Boolean => iris::XSD_BOOLEAN,
            ValueType::Integer => iris::XSD_INTEGER,
            ValueType::DateTime => iris::XSD_DATETIME,
        }
    }
}

/// A property constraint within a [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRule {
    /// Local name (e.g., `"title"`).
    pub name: &'static str,
    /// Full property IRI (`oslc:propertyDefinition`).
    pub iri: &'static str,
    /// Allowed cardinality.
    pub occurs: Occurs,
    /// Expected value type.
    pub value_type: ValueType,
    /// Shape id that inline values must satisfy, if any.
    pub nested: Option<&'static str>,
}

impl PropertyRule {
    /// Creates a rule without a nested shape.
    #[must_use]
    pub const fn new(
        name: &'static str,
        iri: &'static str,
        occurs: Occurs,
        value_type: ValueType,
    ) -> Self {
        Self {
            name,
            iri,
            occurs,
            value_type,
            nested: None,
        }
    }

    /// Creates a rule whose values are checked against the `nested` shape.
    #[must_use]
    pub const fn nested(
        name: &'static str,
        iri: &'static str,
        occurs: Occurs,
        value_type: ValueType,
        nested: &'static str,
    ) -> Self {
        Self {
            name,
            iri,
            occurs,
            value_type,
            nested: Some(nested),
        }
    }
}

/// An OSLC resource shape: the property constraints of one resource type.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Unique shape id across the vocabulary (e.g., `"ChangeRequest"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Full IRI of the described class (`oslc:describes`).
    pub class_iri: &'static str,
    /// Property constraints.
    pub properties: Vec<PropertyRule>,
}

impl Shape {
    /// Looks up a rule by property IRI.
    #[must_use]
    pub fn property(&self, iri: &str) -> Option<&PropertyRule> {
        self.properties.iter().find(|p| p.iri == iri)
    }

    /// Returns the rules whose minimum cardinality is at least one.
    pub fn required(&self) -> impl Iterator<Item = &PropertyRule> {
        self.properties.iter().filter(|p| p.occurs.min() > 0)
    }
}

/// An OSLC specification domain covered by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// OSLC Core (discovery, creation, query, fetch).
    #[cfg_attr(feature = "serde", serde(rename = "core"))]
    Core,
    /// Change Management.
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    ChangeManagement,
    /// Asset Management.
    #[cfg_attr(feature = "serde", serde(rename = "am"))]
    AssetManagement,
    /// Automation.
    #[cfg_attr(feature = "serde", serde(rename = "auto"))]
    Automation,
    /// Requirements Management.
    #[cfg_attr(feature = "serde", serde(rename = "rm"))]
    RequirementsManagement,
    /// Performance Monitoring.
    #[cfg_attr(feature = "serde", serde(rename = "pm"))]
    PerformanceMonitoring,
    /// Tracked Resource Set.
    #[cfg_attr(feature = "serde", serde(rename = "trs"))]
    TrackedResourceSet,
}

impl Domain {
    /// Every domain, in suite execution order.
    pub const ALL: [Domain; 7] = [
        Domain::Core,
        Domain::ChangeManagement,
        Domain::AssetManagement,
        Domain::Automation,
        Domain::RequirementsManagement,
        Domain::PerformanceMonitoring,
        Domain::TrackedResourceSet,
    ];

    /// Short identifier used in configuration and validator names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Core => "core",
            Domain::ChangeManagement => "cm",
            Domain::AssetManagement => "am",
            Domain::Automation => "auto",
            Domain::RequirementsManagement => "rm",
            Domain::PerformanceMonitoring => "pm",
            Domain::TrackedResourceSet => "trs",
        }
    }

    /// Namespace IRI advertised in `oslc:domain` for this domain.
    #[must_use]
    pub fn namespace_iri(self) -> &'static str {
        match self {
            Domain::Core => iris::OSLC,
            Domain::ChangeManagement => iris::OSLC_CM,
            Domain::AssetManagement => iris::OSLC_ASSET,
            Domain::Automation => iris::OSLC_AUTO,
            Domain::RequirementsManagement => iris::OSLC_RM,
            Domain::PerformanceMonitoring => iris::PM,
            Domain::TrackedResourceSet => iris::TRS,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown domain identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDomain(pub String);

impl fmt::Display for UnknownDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown OSLC domain '{}' (expected one of: core, cm, am, auto, rm, pm, trs)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDomain {}

impl FromStr for Domain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

/// All shapes belonging to one domain.
#[derive(Debug, Clone)]
pub struct DomainModule {
    /// The domain.
    pub domain: Domain,
    /// The domain's primary namespace.
    pub namespace: Namespace,
    /// Resource shapes defined by the domain specification.
    pub shapes: Vec<Shape>,
}

/// The complete OSLC vocabulary known to the suite.
#[derive(Debug)]
pub struct Vocabulary {
    /// OSLC specification version the shapes follow.
    pub version: &'static str,
    /// Domain modules in execution order.
    pub modules: Vec<DomainModule>,
    /// Every namespace used in documents, including W3C and OSLC 1.0 ones.
    pub namespaces: Vec<Namespace>,
}

impl Vocabulary {
    /// Looks up a shape by id. Returns `None` if not found.
    #[must_use]
    pub fn find_shape(&self, id: &str) -> Option<&Shape> {
        self.modules
            .iter()
            .flat_map(|m| m.shapes.iter())
            .find(|s| s.id == id)
    }

    /// Looks up the shape describing a class IRI. Returns `None` if not found.
    #[must_use]
    pub fn shape_for_class(&self, class_iri: &str) -> Option<&Shape> {
        self.modules
            .iter()
            .flat_map(|m| m.shapes.iter())
            .find(|s| s.class_iri == class_iri)
    }

    /// Returns the module of a domain.
    #[must_use]
    pub fn module(&self, domain: Domain) -> Option<&DomainModule> {
        self.modules.iter().find(|m| m.domain == domain)
    }

    /// Looks up a namespace by prefix.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|n| n.prefix == prefix)
    }

    /// Expands a prefixed name (`dcterms:title`) into a full IRI.
    #[must_use]
    pub fn expand(&self, prefixed: &str) -> Option<String> {
        let (prefix, local) = prefixed.split_once(':')?;
        self.namespace(prefix)
            .map(|ns| format!("{}{}", ns.iri, local))
    }

    /// Compacts a full IRI into a prefixed name (`dcterms:title`), using
    /// the first namespace whose IRI is a prefix of it.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.namespaces.iter().find_map(|ns| {
            iri.strip_prefix(ns.iri)
                .filter(|local| !local.is_empty())
                .map(|local| format!("{}:{}", ns.prefix, local))
        })
    }

    /// Returns the total number of shapes across all domains.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.modules.iter().map(|m| m.shapes.len()).sum()
    }
}

/// Standard IRI constants used across all shape tables.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Dublin Core terms namespace.
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    /// FOAF namespace.
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    /// W3C Linked Data Platform namespace.
    pub const LDP: &str = "http://www.w3.org/ns/ldp#";

    /// OSLC Core 2.0 namespace.
    pub const OSLC: &str = "http://open-services.net/ns/core#";
    /// OSLC Change Management 2.0 namespace.
    pub const OSLC_CM: &str = "http://open-services.net/ns/cm#";
    /// OSLC Asset Management 2.0 namespace.
    pub const OSLC_ASSET: &str = "http://open-services.net/ns/asset#";
    /// OSLC Automation 2.0 namespace.
    pub const OSLC_AUTO: &str = "http://open-services.net/ns/auto#";
    /// OSLC Requirements Management 2.0 namespace.
    pub const OSLC_RM: &str = "http://open-services.net/ns/rm#";
    /// OSLC Performance Monitoring 2.0 namespace.
    pub const PM: &str = "http://open-services.net/ns/perfmon#";
    /// OSLC Estimation and Measurement namespace.
    pub const EMS: &str = "http://open-services.net/ns/ems#";
    /// OSLC Tracked Resource Set namespace.
    pub const TRS: &str = "http://open-services.net/ns/core/trs#";

    /// OSLC 1.0 service discovery namespace (plain XML).
    pub const OSLC_DISC: &str = "http://open-services.net/xmlns/discovery/1.0/";
    /// OSLC CM 1.0 namespace (plain XML).
    pub const OSLC_CM_V1: &str = "http://open-services.net/xmlns/cm/1.0/";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:XMLLiteral`.
    pub const RDF_XML_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";
    /// `rdfs:member`.
    pub const RDFS_MEMBER: &str = "http://www.w3.org/2000/01/rdf-schema#member";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// `dcterms:title`.
    pub const DCTERMS_TITLE: &str = "http://purl.org/dc/terms/title";
    /// `dcterms:description`.
    pub const DCTERMS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// `dcterms:identifier`.
    pub const DCTERMS_IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";
    /// `dcterms:publisher`.
    pub const DCTERMS_PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    /// `dcterms:created`.
    pub const DCTERMS_CREATED: &str = "http://purl.org/dc/terms/created";
    /// `dcterms:modified`.
    pub const DCTERMS_MODIFIED: &str = "http://purl.org/dc/terms/modified";
    /// `dcterms:creator`.
    pub const DCTERMS_CREATOR: &str = "http://purl.org/dc/terms/creator";
    /// `dcterms:contributor`.
    pub const DCTERMS_CONTRIBUTOR: &str = "http://purl.org/dc/terms/contributor";
    /// `dcterms:subject`.
    pub const DCTERMS_SUBJECT: &str = "http://purl.org/dc/terms/subject";
    /// `dcterms:type`.
    pub const DCTERMS_TYPE: &str = "http://purl.org/dc/terms/type";
    /// `dcterms:isPartOf`.
    pub const DCTERMS_IS_PART_OF: &str = "http://purl.org/dc/terms/isPartOf";

    /// `oslc:ServiceProviderCatalog`.
    pub const OSLC_SERVICE_PROVIDER_CATALOG: &str =
        "http://open-services.net/ns/core#ServiceProviderCatalog";
    /// `oslc:ServiceProvider`.
    pub const OSLC_SERVICE_PROVIDER: &str = "http://open-services.net/ns/core#ServiceProvider";
    /// `oslc:serviceProviderCatalog`.
    pub const OSLC_SERVICE_PROVIDER_CATALOG_PROP: &str =
        "http://open-services.net/ns/core#serviceProviderCatalog";
    /// `oslc:serviceProvider`.
    pub const OSLC_SERVICE_PROVIDER_PROP: &str =
        "http://open-services.net/ns/core#serviceProvider";
    /// `oslc:service`.
    pub const OSLC_SERVICE: &str = "http://open-services.net/ns/core#service";
    /// `oslc:domain`.
    pub const OSLC_DOMAIN: &str = "http://open-services.net/ns/core#domain";
    /// `oslc:creationFactory`.
    pub const OSLC_CREATION_FACTORY: &str = "http://open-services.net/ns/core#creationFactory";
    /// `oslc:creation`.
    pub const OSLC_CREATION: &str = "http://open-services.net/ns/core#creation";
    /// `oslc:queryCapability`.
    pub const OSLC_QUERY_CAPABILITY: &str = "http://open-services.net/ns/core#queryCapability";
    /// `oslc:queryBase`.
    pub const OSLC_QUERY_BASE: &str = "http://open-services.net/ns/core#queryBase";
    /// `oslc:resourceType`.
    pub const OSLC_RESOURCE_TYPE: &str = "http://open-services.net/ns/core#resourceType";
    /// `oslc:resourceShape`.
    pub const OSLC_RESOURCE_SHAPE: &str = "http://open-services.net/ns/core#resourceShape";
    /// `oslc:usage`.
    pub const OSLC_USAGE: &str = "http://open-services.net/ns/core#usage";
    /// `oslc:ResponseInfo`.
    pub const OSLC_RESPONSE_INFO: &str = "http://open-services.net/ns/core#ResponseInfo";
    /// `oslc:nextPage`.
    pub const OSLC_NEXT_PAGE: &str = "http://open-services.net/ns/core#nextPage";
    /// `oslc:totalCount`.
    pub const OSLC_TOTAL_COUNT: &str = "http://open-services.net/ns/core#totalCount";
    /// `oslc:Compact`.
    pub const OSLC_COMPACT: &str = "http://open-services.net/ns/core#Compact";

    /// `oslc_cm:ChangeRequest`.
    pub const OSLC_CM_CHANGE_REQUEST: &str = "http://open-services.net/ns/cm#ChangeRequest";
    /// `oslc_asset:Asset`.
    pub const OSLC_ASSET_ASSET: &str = "http://open-services.net/ns/asset#Asset";
    /// `oslc_asset:artifact`.
    pub const OSLC_ASSET_ARTIFACT: &str = "http://open-services.net/ns/asset#artifact";
    /// `oslc_asset:artifactFactory`.
    pub const OSLC_ASSET_ARTIFACT_FACTORY: &str =
        "http://open-services.net/ns/asset#artifactFactory";
    /// `oslc_auto:AutomationPlan`.
    pub const OSLC_AUTO_PLAN: &str = "http://open-services.net/ns/auto#AutomationPlan";
    /// `oslc_auto:AutomationRequest`.
    pub const OSLC_AUTO_REQUEST: &str = "http://open-services.net/ns/auto#AutomationRequest";
    /// `oslc_auto:AutomationResult`.
    pub const OSLC_AUTO_RESULT: &str = "http://open-services.net/ns/auto#AutomationResult";
    /// `oslc_rm:Requirement`.
    pub const OSLC_RM_REQUIREMENT: &str = "http://open-services.net/ns/rm#Requirement";
    /// `oslc_rm:RequirementCollection`.
    pub const OSLC_RM_REQUIREMENT_COLLECTION: &str =
        "http://open-services.net/ns/rm#RequirementCollection";
    /// `pm:PerformanceMonitoringRecord`.
    pub const PM_RECORD: &str = "http://open-services.net/ns/perfmon#PerformanceMonitoringRecord";

    /// `trs:TrackedResourceSet`.
    pub const TRS_TRACKED_RESOURCE_SET: &str =
        "http://open-services.net/ns/core/trs#TrackedResourceSet";
    /// `trs:base`.
    pub const TRS_BASE: &str = "http://open-services.net/ns/core/trs#base";
    /// `trs:changeLog`.
    pub const TRS_CHANGE_LOG: &str = "http://open-services.net/ns/core/trs#changeLog";
    /// `trs:change`.
    pub const TRS_CHANGE: &str = "http://open-services.net/ns/core/trs#change";
    /// `trs:changed`.
    pub const TRS_CHANGED: &str = "http://open-services.net/ns/core/trs#changed";
    /// `trs:order`.
    pub const TRS_ORDER: &str = "http://open-services.net/ns/core/trs#order";
    /// `trs:previous`.
    pub const TRS_PREVIOUS: &str = "http://open-services.net/ns/core/trs#previous";
    /// `trs:cutoffEvent`.
    pub const TRS_CUTOFF_EVENT: &str = "http://open-services.net/ns/core/trs#cutoffEvent";
    /// `trs:Creation`.
    pub const TRS_CREATION: &str = "http://open-services.net/ns/core/trs#Creation";
    /// `trs:Modification`.
    pub const TRS_MODIFICATION: &str = "http://open-services.net/ns/core/trs#Modification";
    /// `trs:Deletion`.
    pub const TRS_DELETION: &str = "http://open-services.net/ns/core/trs#Deletion";
    /// `ldp:member`.
    pub const LDP_MEMBER: &str = "http://www.w3.org/ns/ldp#member";
    /// `ldp:nextPage`.
    pub const LDP_NEXT_PAGE: &str = "http://www.w3.org/ns/ldp#nextPage";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurs_bounds() {
        assert!(Occurs::ExactlyOne.admits(1));
        assert!(!Occurs::ExactlyOne.admits(0));
        assert!(!Occurs::ExactlyOne.admits(2));
        assert!(Occurs::ZeroOrOne.admits(0));
        assert!(!Occurs::ZeroOrOne.admits(2));
        assert!(!Occurs::OneOrMany.admits(0));
        assert!(Occurs::OneOrMany.admits(17));
        assert!(Occurs::ZeroOrMany.admits(0));
    }

    #[test]
    fn domain_round_trips_through_str() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>(), Ok(domain));
        }
        assert_eq!("CM".parse::<Domain>(), Ok(Domain::ChangeManagement));
        assert!("qm".parse::<Domain>().is_err());
    }
}
