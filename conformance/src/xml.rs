//! XPath evaluation over plain XML responses.
//!
//! OSLC 1.0 resources and the `application/xml` renderings of OSLC 2.0
//! resources are checked with XPath 1.0 expressions. Every prefix known to
//! the vocabulary is bound in the evaluation context, so expressions can
//! use `oslc:`, `dcterms:`, `oslc_disc:` and the rest without declaring them.

use oslc_vocab::Vocabulary;
use sxd_document::Package;
use sxd_xpath::{Context, Factory, Value};
use thiserror::Error;

/// Errors raised while parsing or querying XML.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Parse(String),
    /// The expression does not compile.
    #[error("invalid XPath `{expr}`: {message}")]
    Compile {
        /// The offending expression.
        expr: String,
        /// Compiler message.
        message: String,
    },
    /// The expression failed at evaluation time.
    #[error("XPath `{expr}` failed: {message}")]
    Evaluate {
        /// The offending expression.
        expr: String,
        /// Evaluator message.
        message: String,
    },
}

/// The owned result of an XPath expression.
#[derive(Debug, Clone, PartialEq)]
pub enum XPathValue {
    /// `boolean()` result.
    Boolean(bool),
    /// `number()` result.
    Number(f64),
    /// `string()` result.
    String(String),
    /// String values of the selected nodes, in document order.
    Nodes(Vec<String>),
}

/// A parsed XML document with a namespace-aware XPath context.
pub struct XmlDocument {
    package: Package,
    namespaces: Vec<(String, String)>,
}

impl std::fmt::Debug for XmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlDocument")
            .field("namespaces", &self.namespaces.len())
            .finish_non_exhaustive()
    }
}

impl XmlDocument {
    /// Parses an XML document.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Parse`] if the body is not well-formed.
    pub fn parse(body: &str) -> Result<Self, XmlError> {
        let package =
            sxd_document::parser::parse(body).map_err(|e| XmlError::Parse(format!("{:?}", e)))?;
        let namespaces = Vocabulary::full()
            .namespaces
            .iter()
            .map(|ns| (ns.prefix.to_string(), ns.iri.to_string()))
            .collect();
        Ok(Self {
            package,
            namespaces,
        })
    }

    /// Binds (or rebinds) a prefix for subsequent expressions.
    #[must_use]
    pub fn with_namespace(mut self, prefix: &str, iri: &str) -> Self {
        self.namespaces.retain(|(p, _)| p != prefix);
        self.namespaces.push((prefix.to_string(), iri.to_string()));
        self
    }

    /// Evaluates an expression against the document root.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the expression does not compile or evaluate.
    pub fn evaluate(&self, expr: &str) -> Result<XPathValue, XmlError> {
        let compile_error = |message: String| XmlError::Compile {
            expr: expr.to_string(),
            message,
        };
        let xpath = Factory::new()
            .build(expr)
            .map_err(|e| compile_error(format!("{:?}", e)))?
            .ok_or_else(|| compile_error("empty expression".to_string()))?;

        let mut context = Context::new();
        for (prefix, iri) in &self.namespaces {
            context.set_namespace(prefix, iri);
        }

        let document = self.package.as_document();
        let value = xpath
            .evaluate(&context, document.root())
            .map_err(|e| XmlError::Evaluate {
                expr: expr.to_string(),
                message: format!("{:?}", e),
            })?;
        Ok(match value {
            Value::Boolean(b) => XPathValue::Boolean(b),
            Value::Number(n) => XPathValue::Number(n),
            Value::String(s) => XPathValue::String(s),
            Value::Nodeset(nodes) => XPathValue::Nodes(
                nodes
                    .document_order()
                    .iter()
                    .map(|node| node.string_value())
                    .collect(),
            ),
        })
    }

    /// Number of nodes selected by `expr`, or the numeric result of a
    /// `count(..)` expression.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the expression fails.
    pub fn count(&self, expr: &str) -> Result<usize, XmlError> {
        Ok(match self.evaluate(expr)? {
            XPathValue::Nodes(nodes) => nodes.len(),
            XPathValue::Number(n) if n.is_finite() && n >= 0.0 => n as usize,
            XPathValue::Boolean(b) => usize::from(b),
            _ => 0,
        })
    }

    /// String values of the nodes selected by `expr`.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the expression fails.
    pub fn strings(&self, expr: &str) -> Result<Vec<String>, XmlError> {
        Ok(match self.evaluate(expr)? {
            XPathValue::Nodes(nodes) => nodes,
            XPathValue::String(s) => vec![s],
            XPathValue::Number(n) => vec![n.to_string()],
            XPathValue::Boolean(b) => vec![b.to_string()],
        })
    }

    /// The first string value selected by `expr`, trimmed; `None` if nothing
    /// (or only whitespace) was selected.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the expression fails.
    pub fn string(&self, expr: &str) -> Result<Option<String>, XmlError> {
        Ok(self
            .strings(expr)?
            .into_iter()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty()))
    }

    /// XPath truth value of `expr` (non-empty node set, non-zero number,
    /// non-empty string).
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the expression fails.
    pub fn boolean(&self, expr: &str) -> Result<bool, XmlError> {
        Ok(match self.evaluate(expr)? {
            XPathValue::Boolean(b) => b,
            XPathValue::Number(n) => n != 0.0 && !n.is_nan(),
            XPathValue::String(s) => !s.is_empty(),
            XPathValue::Nodes(nodes) => !nodes.is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn counts_v1_catalog_entries() {
        let doc = XmlDocument::parse(fixtures::V1_CATALOG_XML).expect("parses");
        assert_eq!(
            doc.count("/oslc_disc:ServiceProviderCatalog").expect("count"),
            1
        );
        assert_eq!(
            doc.count("//oslc_disc:entry").expect("count"),
            2
        );
        assert_eq!(
            doc.count("count(//oslc_disc:entry/oslc_disc:ServiceProvider)")
                .expect("count"),
            1
        );
    }

    #[test]
    fn reads_attribute_and_text_values() {
        let doc = XmlDocument::parse(fixtures::V1_CATALOG_XML).expect("parses");
        assert_eq!(
            doc.string("/oslc_disc:ServiceProviderCatalog/dc:title")
                .expect("title")
                .as_deref(),
            Some("Sample OSLC 1.0 Catalog")
        );
        let services = doc
            .strings("//oslc_disc:ServiceProvider/oslc_disc:services/@rdf:resource")
            .expect("services");
        assert_eq!(services, vec![fixtures::V1_SERVICES_URL.to_string()]);
    }

    #[test]
    fn custom_prefixes_can_be_bound() {
        let doc = XmlDocument::parse(r#"<a xmlns="urn:x"><b>1</b><b>2</b></a>"#)
            .expect("parses")
            .with_namespace("x", "urn:x");
        assert_eq!(doc.count("/x:a/x:b").expect("count"), 2);
        assert!(doc.boolean("/x:a/x:b = '2'").expect("bool"));
        assert!(!doc.boolean("/x:a/x:c").expect("bool"));
    }

    #[test]
    fn reports_malformed_input_and_bad_expressions() {
        assert!(matches!(
            XmlDocument::parse("<open>"),
            Err(XmlError::Parse(_))
        ));
        let doc = XmlDocument::parse("<a/>").expect("parses");
        assert!(matches!(
            doc.evaluate("/a["),
            Err(XmlError::Compile { .. })
        ));
    }
}
