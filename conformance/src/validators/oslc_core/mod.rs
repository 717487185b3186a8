//! OSLC Core validators: catalog and provider discovery, resource fetch
//! and content negotiation, creation and update, query.

pub mod catalog;
pub mod creation;
pub mod fetch;
pub mod query;
pub mod service_provider;
