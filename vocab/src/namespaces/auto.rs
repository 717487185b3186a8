//! `oslc_auto:` namespace: OSLC Automation 2.0.
//!
//! An automation request executes a plan; the result reports on that plan
//! and is usually produced by the request.

use crate::model::iris::*;
use crate::model::{Domain, DomainModule, Namespace, Occurs, PropertyRule, Shape, ValueType};

const AUTO_STATE: &str = "http://open-services.net/ns/auto#state";
const AUTO_INPUT_PARAMETER: &str = "http://open-services.net/ns/auto#inputParameter";

/// Returns the Automation module.
#[must_use]
pub fn module() -> DomainModule {
    DomainModule {
        domain: Domain::Automation,
        namespace: Namespace {
            prefix: "oslc_auto",
            iri: OSLC_AUTO,
            label: "OSLC Automation",
        },
        shapes: shapes(),
    }
}

fn shapes() -> Vec<Shape> {
    use Occurs::*;
    use ValueType::*;

    vec![
        Shape {
            id: "AutomationPlan",
            label: "Automation Plan",
            class_iri: OSLC_AUTO_PLAN,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new("identifier", DCTERMS_IDENTIFIER, ExactlyOne, String),
                PropertyRule::new("description", DCTERMS_DESCRIPTION, ZeroOrOne, XmlLiteral),
                PropertyRule::new("created", DCTERMS_CREATED, ZeroOrOne, DateTime),
                PropertyRule::new("modified", DCTERMS_MODIFIED, ZeroOrOne, DateTime),
                PropertyRule::new("creator", DCTERMS_CREATOR, ZeroOrMany, AnyResource),
                PropertyRule::new(
                    "parameterDefinition",
                    "http://open-services.net/ns/auto#parameterDefinition",
                    ZeroOrMany,
                    AnyResource,
                ),
            ],
        },
        Shape {
            id: "AutomationRequest",
            label: "Automation Request",
            class_iri: OSLC_AUTO_REQUEST,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new("identifier", DCTERMS_IDENTIFIER, ExactlyOne, String),
                PropertyRule::new("created", DCTERMS_CREATED, ZeroOrOne, DateTime),
                PropertyRule::new("modified", DCTERMS_MODIFIED, ZeroOrOne, DateTime),
                PropertyRule::new("state", AUTO_STATE, OneOrMany, Resource),
                PropertyRule::new(
                    "desiredState",
                    "http://open-services.net/ns/auto#desiredState",
                    ZeroOrOne,
                    Resource,
                ),
                PropertyRule::new(
                    "executesAutomationPlan",
                    "http://open-services.net/ns/auto#executesAutomationPlan",
                    ExactlyOne,
                    Resource,
                ),
                PropertyRule::nested(
                    "inputParameter",
                    AUTO_INPUT_PARAMETER,
                    ZeroOrMany,
                    LocalResource,
                    "ParameterInstance",
                ),
            ],
        },
        Shape {
            id: "AutomationResult",
            label: "Automation Result",
            class_iri: OSLC_AUTO_RESULT,
            properties: vec![
                PropertyRule::new("title", DCTERMS_TITLE, ExactlyOne, XmlLiteral),
                PropertyRule::new("identifier", DCTERMS_IDENTIFIER, ExactlyOne, String),
                PropertyRule::new("created", DCTERMS_CREATED, ZeroOrOne, DateTime),
                PropertyRule::new("modified", DCTERMS_MODIFIED, ZeroOrOne, DateTime),
                PropertyRule::new("state", AUTO_STATE, OneOrMany, Resource),
                PropertyRule::new(
                    "verdict",
                    "http://open-services.net/ns/auto#verdict",
                    OneOrMany,
                    Resource,
                ),
                PropertyRule::new(
                    "reportsOnAutomationPlan",
                    "http://open-services.net/ns/auto#reportsOnAutomationPlan",
                    ExactlyOne,
                    Resource,
                ),
                PropertyRule::new(
                    "producedByAutomationRequest",
                    "http://open-services.net/ns/auto#producedByAutomationRequest",
                    ZeroOrOne,
                    Resource,
                ),
                PropertyRule::nested(
                    "inputParameter",
                    AUTO_INPUT_PARAMETER,
                    ZeroOrMany,
                    LocalResource,
                    "ParameterInstance",
                ),
                PropertyRule::nested(
                    "outputParameter",
                    "http://open-services.net/ns/auto#outputParameter",
                    ZeroOrMany,
                    LocalResource,
                    "ParameterInstance",
                ),
                PropertyRule::new(
                    "contribution",
                    "http://open-services.net/ns/auto#contribution",
                    ZeroOrMany,
                    AnyResource,
                ),
            ],
        },
        Shape {
            id: "ParameterInstance",
            label: "Parameter Instance",
            class_iri: "http://open-services.net/ns/auto#ParameterInstance",
            properties: vec![
                PropertyRule::new(
                    "name",
                    "http://open-services.net/ns/core#name",
                    ExactlyOne,
                    String,
                ),
                PropertyRule::new(
                    "value",
                    "http://www.w3.org/1999/02/22-rdf-syntax-ns#value",
                    ZeroOrOne,
                    String,
                ),
            ],
        },
    ]
}
