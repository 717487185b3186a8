//! Turtle 1.1 serializer for OSLC resource shapes.
//!
//! Produces one `oslc:ResourceShape` per shape, with an `oslc:property`
//! blank node per property rule.

use crate::model::{Shape, Vocabulary};

/// Base IRI under which shape resources are minted.
pub const SHAPE_BASE: &str = "urn:oslc-conformance:shape:";

/// Serializes every shape in the vocabulary to a Turtle string.
#[must_use]
pub fn to_turtle(vocab: &Vocabulary) -> String {
    let mut out = String::with_capacity(64 * 1024);

    out.push_str("@prefix oslc: <http://open-services.net/ns/core#> .\n");
    out.push_str("@prefix dcterms: <http://purl.org/dc/terms/> .\n");
    out.push('\n');

    for module in &vocab.modules {
        out.push_str(&format!("# Domain: {}\n", module.domain));
        for shape in &module.shapes {
            push_shape(&mut out, shape);
        }
    }

    out
}

/// Serializes a single shape to a standalone Turtle string.
#[must_use]
pub fn shape_to_turtle(shape: &Shape) -> String {
    let mut out = String::new();
    out.push_str("@prefix oslc: <http://open-services.net/ns/core#> .\n");
    out.push_str("@prefix dcterms: <http://purl.org/dc/terms/> .\n\n");
    push_shape(&mut out, shape);
    out
}

fn push_shape(out: &mut String, shape: &Shape) {
    out.push_str(&format!(
        "<{}{}>\n  a oslc:ResourceShape ;\n  dcterms:title {} ;\n  oslc:describes <{}>",
        SHAPE_BASE,
        shape.id,
        turtle_string(shape.label),
        shape.class_iri
    ));
    for prop in &shape.properties {
        out.push_str(&format!(
            " ;\n  oslc:property [\n    a oslc:Property ;\n    oslc:name {} ;\n    \
             oslc:propertyDefinition <{}> ;\n    oslc:occurs <{}> ;\n    oslc:valueType <{}>",
            turtle_string(prop.name),
            prop.iri,
            prop.occurs.iri(),
            prop.value_type.iri()
        ));
        if let Some(nested) = prop.nested {
            out.push_str(&format!(
                " ;\n    oslc:valueShape <{}{}>",
                SHAPE_BASE, nested
            ));
        }
        out.push_str("\n  ]");
    }
    out.push_str(" .\n\n");
}

/// Escapes a string as a Turtle double-quoted literal.
fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_is_rendered() {
        let vocab = Vocabulary::full();
        let ttl = to_turtle(vocab);
        assert_eq!(
            ttl.matches("a oslc:ResourceShape").count(),
            vocab.shape_count()
        );
    }

    #[test]
    fn nested_rules_reference_value_shapes() {
        let vocab = Vocabulary::full();
        let provider = vocab.find_shape("ServiceProvider");
        let ttl = provider.map(shape_to_turtle).unwrap_or_default();
        assert!(ttl.contains("oslc:valueShape <urn:oslc-conformance:shape:Service>"));
        assert!(ttl.contains("<http://open-services.net/ns/core#One-or-many>"));
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(turtle_string("a \"b\""), "\"a \\\"b\\\"\"");
    }
}
