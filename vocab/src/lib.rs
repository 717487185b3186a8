//! OSLC vocabulary encoded as typed Rust data.
//!
//! The `oslc-vocab` crate provides the resource shapes of OSLC Core 2.0 and
//! the Change Management, Asset Management, Automation, Requirements
//! Management, Performance Monitoring and Tracked Resource Set domains as
//! static Rust data structures, along with a serializer that renders them as
//! `oslc:ResourceShape` Turtle documents.
//!
//! # Entry Point
//!
//! ```
//! let vocab = oslc_vocab::Vocabulary::full();
//! let shape = vocab.find_shape("ChangeRequest").unwrap();
//! assert!(shape.property("http://purl.org/dc/terms/title").is_some());
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocab = oslc_vocab::Vocabulary::full();
//! let turtle = oslc_vocab::serializer::turtle::to_turtle(vocab);
//! assert!(turtle.contains("oslc:ResourceShape"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;
pub mod serializer;

pub use model::{
    Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, UnknownDomain, ValueType,
    Vocabulary,
};

use model::iris;

impl Vocabulary {
    /// Returns the complete OSLC vocabulary: every domain module plus the
    /// namespaces that appear in OSLC 1.0 and 2.0 documents.
    ///
    /// Modules are assembled in suite execution order:
    /// `core → cm → am → auto → rm → pm → trs`
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| {
            let modules = vec![
                namespaces::oslc::module(),
                namespaces::cm::module(),
                namespaces::am::module(),
                namespaces::auto::module(),
                namespaces::rm::module(),
                namespaces::pm::module(),
                namespaces::trs::module(),
            ];
            let mut all = standard_namespaces();
            all.extend(modules.iter().map(|m| m.namespace));
            Vocabulary {
                version: "2.0",
                modules,
                namespaces: all,
            }
        })
    }
}

/// W3C and OSLC 1.0 namespaces that OSLC documents use alongside the
/// domain namespaces.
fn standard_namespaces() -> Vec<Namespace> {
    vec![
        Namespace {
            prefix: "rdf",
            iri: iris::RDF,
            label: "RDF",
        },
        Namespace {
            prefix: "rdfs",
            iri: iris::RDFS,
            label: "RDF Schema",
        },
        Namespace {
            prefix: "xsd",
            iri: iris::XSD,
            label: "XML Schema Datatypes",
        },
        Namespace {
            prefix: "dcterms",
            iri: iris::DCTERMS,
            label: "Dublin Core Terms",
        },
        // OSLC 1.0 documents bind Dublin Core terms to `dc`.
        Namespace {
            prefix: "dc",
            iri: iris::DCTERMS,
            label: "Dublin Core Terms (OSLC 1.0 prefix)",
        },
        Namespace {
            prefix: "foaf",
            iri: iris::FOAF,
            label: "Friend of a Friend",
        },
        Namespace {
            prefix: "ldp",
            iri: iris::LDP,
            label: "Linked Data Platform",
        },
        Namespace {
            prefix: "ems",
            iri: iris::EMS,
            label: "OSLC Estimation and Measurement",
        },
        Namespace {
            prefix: "oslc_disc",
            iri: iris::OSLC_DISC,
            label: "OSLC 1.0 Service Discovery",
        },
        Namespace {
            prefix: "oslc_cm_v1",
            iri: iris::OSLC_CM_V1,
            label: "OSLC CM 1.0",
        },
    ]
}
