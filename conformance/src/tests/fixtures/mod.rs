//! OSLC response fixtures.
//!
//! Each constant holds the body a conforming server would return for one
//! resource. All URLs live under [`BASE`]; integration tests serve the
//! fixtures from a local stub server by substituting its address for
//! [`BASE`].

mod catalog;
mod domains;
mod provider;
mod trs;

pub use catalog::{
    CATALOG_JSON, CATALOG_RDF_XML, CATALOG_URL, NESTED_CATALOG_RDF_XML, NESTED_CATALOG_URL,
    SECOND_PROVIDER_URL, THIRD_PROVIDER_URL, V1_CATALOG_URL, V1_CATALOG_XML,
};
pub use domains::{
    ASSET_RDF_XML, ASSET_URL, AUTOMATION_PLAN_RDF_XML, AUTOMATION_PLAN_URL,
    AUTOMATION_RESULT_RDF_XML, AUTOMATION_RESULT_URL, CHANGE_REQUEST_RDF_XML,
    CHANGE_REQUEST_URL, CHANGE_REQUEST_XML, PM_RECORD_RDF_XML, PM_RECORD_URL,
    QUERY_RESULTS_RDF_XML, REQUIREMENT_RDF_XML, REQUIREMENT_URL,
};
pub use provider::{
    CHANGE_REQUEST_SHAPE_URL, CREATION_URL, QUERY_URL, SERVICE_PROVIDER_RDF_XML,
    SERVICE_PROVIDER_URL, V1_SERVICES_URL, V1_SERVICE_DESCRIPTOR_XML,
};
pub use trs::{TRS_BASE_RDF_XML, TRS_BASE_URL, TRS_RDF_XML, TRS_URL};

/// Origin every fixture URL starts with.
pub const BASE: &str = "http://example.com";
