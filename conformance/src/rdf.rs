//! RDF graph helpers.
//!
//! Responses are parsed with the sophia RDF/XML and Turtle parsers and
//! copied into an owned [`Model`]: a flat list of [`Statement`]s that checks
//! can filter with a [`Selector`] (any of subject, predicate and object may
//! be left open).

use std::fmt;

use oslc_vocab::model::iris;
use sophia_api::graph::Graph;
use sophia_api::prelude::Iri;
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_inmem::graph::LightGraph;
use sophia_turtle::parser::turtle::TurtleParser;
use sophia_xml::parser::RdfXmlParser;
use thiserror::Error;

/// Errors raised while building a [`Model`].
#[derive(Debug, Error)]
pub enum RdfError {
    /// The document is not well-formed in the declared syntax.
    #[error("failed to parse {syntax}: {message}")]
    Parse {
        /// Syntax name (`RDF/XML`, `Turtle`).
        syntax: &'static str,
        /// Parser message.
        message: String,
    },
}

/// An RDF term, owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An IRI.
    Iri(String),
    /// A blank node label (document scoped).
    Blank(String),
    /// A literal.
    Literal {
        /// Lexical form.
        value: String,
        /// Datatype IRI.
        datatype: Option<String>,
        /// Language tag.
        lang: Option<String>,
    },
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Returns the IRI if this is an IRI node.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the lexical form if this is a literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Node::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the datatype IRI if this is a typed literal.
    pub fn datatype(&self) -> Option<&str> {
        match self {
            Node::Literal { datatype, .. } => datatype.as_deref(),
            _ => None,
        }
    }

    /// Returns true for IRIs and blank nodes.
    pub fn is_resource(&self) -> bool {
        !matches!(self, Node::Literal { .. })
    }

    /// Returns true for blank nodes.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    fn from_term<T: Term>(term: T) -> Option<Self> {
        match term.kind() {
            TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_string())),
            TermKind::BlankNode => term
                .bnode_id()
                .map(|id| Node::Blank(id.as_str().to_string())),
            TermKind::Literal => term.lexical_form().map(|lex| Node::Literal {
                value: lex.to_string(),
                datatype: term.datatype().map(|dt| dt.as_str().to_string()),
                lang: term.language_tag().map(|tag| tag.as_str().to_string()),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{}>", iri),
            Node::Blank(id) => write!(f, "_:{}", id),
            Node::Literal { value, .. } => write!(f, "\"{}\"", value),
        }
    }
}

/// One RDF statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Subject (IRI or blank node).
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Node,
}

/// Statement filter; `None` matches anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector<'a> {
    /// Required subject.
    pub subject: Option<&'a Node>,
    /// Required predicate IRI.
    pub predicate: Option<&'a str>,
    /// Required object.
    pub object: Option<&'a Node>,
}

impl<'a> Selector<'a> {
    /// Matches every statement.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts the subject.
    #[must_use]
    pub fn subject(mut self, subject: &'a Node) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Restricts the predicate.
    #[must_use]
    pub fn predicate(mut self, predicate: &'a str) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Restricts the object.
    #[must_use]
    pub fn object(mut self, object: &'a Node) -> Self {
        self.object = Some(object);
        self
    }

    /// Returns true if the statement satisfies every set restriction.
    pub fn matches(&self, statement: &Statement) -> bool {
        self.subject.map_or(true, |s| *s == statement.subject)
            && self.predicate.map_or(true, |p| p == statement.predicate)
            && self.object.map_or(true, |o| *o == statement.object)
    }
}

/// An in-memory RDF graph parsed from one response.
#[derive(Debug, Clone, Default)]
pub struct Model {
    statements: Vec<Statement>,
}

impl Model {
    /// Parses an RDF/XML document; relative IRIs resolve against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::Parse`] if the document is not valid RDF/XML.
    pub fn parse_rdf_xml(body: &str, base: Option<&str>) -> Result<Self, RdfError> {
        const SYNTAX: &str = "RDF/XML";
        let parser = RdfXmlParser {
            base: base.and_then(|b| Iri::new(b.to_string()).ok()),
        };
        let graph: LightGraph = parser
            .parse_str(body)
            .collect_triples()
            .map_err(|e| parse_error(SYNTAX, e))?;
        Self::from_graph(&graph, SYNTAX)
    }

    /// Parses a Turtle document; relative IRIs resolve against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`RdfError::Parse`] if the document is not valid Turtle.
    pub fn parse_turtle(body: &str, base: Option<&str>) -> Result<Self, RdfError> {
        const SYNTAX: &str = "Turtle";
        let parser = TurtleParser {
            base: base.and_then(|b| Iri::new(b.to_string()).ok()),
        };
        let graph: LightGraph = parser
            .parse_str(body)
            .collect_triples()
            .map_err(|e| parse_error(SYNTAX, e))?;
        Self::from_graph(&graph, SYNTAX)
    }

    fn from_graph(graph: &LightGraph, syntax: &'static str) -> Result<Self, RdfError> {
        let mut statements = Vec::new();
        for triple in graph.triples() {
            let triple = triple.map_err(|e| parse_error(syntax, e))?;
            let subject = Node::from_term(triple.s());
            let predicate = Node::from_term(triple.p());
            let object = Node::from_term(triple.o());
            if let (Some(subject), Some(Node::Iri(predicate)), Some(object)) =
                (subject, predicate, object)
            {
                statements.push(Statement {
                    subject,
                    predicate,
                    object,
                });
            }
        }
        Ok(Self { statements })
    }

    /// Builds a model from statements (used by fixtures and tests).
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the model holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates over the statements matching `selector`.
    pub fn list_statements<'m>(
        &'m self,
        selector: Selector<'m>,
    ) -> impl Iterator<Item = &'m Statement> + 'm {
        self.statements.iter().filter(move |s| selector.matches(s))
    }

    /// Objects of `subject predicate ?o`.
    pub fn objects<'m>(&'m self, subject: &'m Node, predicate: &'m str) -> Vec<&'m Node> {
        self.list_statements(Selector::any().subject(subject).predicate(predicate))
            .map(|s| &s.object)
            .collect()
    }

    /// The single object of `subject predicate ?o`, if there is exactly one.
    pub fn object<'m>(&'m self, subject: &'m Node, predicate: &'m str) -> Option<&'m Node> {
        match self.objects(subject, predicate).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Subjects of `?s predicate object`.
    pub fn subjects<'m>(&'m self, predicate: &'m str, object: &'m Node) -> Vec<&'m Node> {
        self.list_statements(Selector::any().predicate(predicate).object(object))
            .map(|s| &s.subject)
            .collect()
    }

    /// Distinct subjects typed with `class_iri`, in document order.
    pub fn subjects_of_type(&self, class_iri: &str) -> Vec<&Node> {
        let class = Node::iri(class_iri);
        let mut found: Vec<&Node> = Vec::new();
        for statement in self.list_statements(Selector::any().predicate(iris::RDF_TYPE)) {
            if statement.object == class && !found.contains(&&statement.subject) {
                found.push(&statement.subject);
            }
        }
        found
    }

    /// Returns true if `node rdf:type class_iri` holds.
    pub fn has_type(&self, node: &Node, class_iri: &str) -> bool {
        let class = Node::iri(class_iri);
        let typed = self
            .list_statements(
                Selector::any()
                    .subject(node)
                    .predicate(iris::RDF_TYPE)
                    .object(&class),
            )
            .next()
            .is_some();
        typed
    }

    /// Number of statements `subject predicate ?o`.
    pub fn count(&self, subject: &Node, predicate: &str) -> usize {
        self.list_statements(Selector::any().subject(subject).predicate(predicate))
            .count()
    }

    /// IRIs listed through `rdfs:member` or `ldp:member`, in document
    /// order and without duplicates. Query results and containers use
    /// these to enumerate their members.
    pub fn member_iris(&self) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        for statement in &self.statements {
            if statement.predicate != iris::RDFS_MEMBER && statement.predicate != iris::LDP_MEMBER {
                continue;
            }
            if let Some(iri) = statement.object.as_iri() {
                if !found.contains(&iri) {
                    found.push(iri);
                }
            }
        }
        found
    }

    /// Returns true if the node appears as a subject anywhere in the model.
    pub fn describes(&self, node: &Node) -> bool {
        self.list_statements(Selector::any().subject(node))
            .next()
            .is_some()
    }
}

fn parse_error(syntax: &'static str, err: impl fmt::Display) -> RdfError {
    RdfError::Parse {
        syntax,
        message: err.to_string(),
    }
}
