//! Service discovery: catalog traversal and capability lookup.
//!
//! Discovery starts at the configured base URI. A service provider catalog
//! lists service providers and may nest further catalogs; the walk follows
//! both, remembers every catalog it has fetched so cyclic catalogs
//! terminate, and can stop at the first provider found.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use oslc_vocab::model::iris;

use crate::http::{self, OslcClient, OslcResponse};
use crate::rdf::{Model, Node};
use crate::xml::XmlDocument;

/// Which rendering of the catalog to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// OSLC 2.0 `application/rdf+xml` catalogs.
    RdfXml,
    /// OSLC 1.0 `application/xml` catalogs (`oslc_disc:entry`).
    Xml,
}

/// The kind of service capability to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// `oslc:creationFactory` / `oslc:creation`.
    Creation,
    /// `oslc:queryCapability` / `oslc:queryBase`.
    Query,
}

impl Capability {
    fn container(self) -> &'static str {
        match self {
            Capability::Creation => iris::OSLC_CREATION_FACTORY,
            Capability::Query => iris::OSLC_QUERY_CAPABILITY,
        }
    }

    fn url_property(self) -> &'static str {
        match self {
            Capability::Creation => iris::OSLC_CREATION,
            Capability::Query => iris::OSLC_QUERY_BASE,
        }
    }

    fn v1_element(self) -> &'static str {
        match self {
            Capability::Creation => "oslc_cm_v1:factory",
            Capability::Query => "oslc_cm_v1:simpleQuery",
        }
    }
}

/// One creation factory or query capability advertised by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRef {
    /// The `oslc:creation` or `oslc:queryBase` URL.
    pub url: String,
    /// `oslc:domain` of the enclosing service.
    pub domain: Option<String>,
    /// `oslc:resourceType` values of the capability.
    pub resource_types: Vec<String>,
    /// `oslc:resourceShape` of the capability.
    pub resource_shape: Option<String>,
}

impl CapabilityRef {
    /// Returns true if the capability serves `restrict`, which may be
    /// either a resource type or a domain namespace IRI.
    pub fn serves(&self, restrict: &str) -> bool {
        self.domain.as_deref() == Some(restrict)
            || self.resource_types.iter().any(|t| t == restrict)
    }
}

/// Catalog walker.
#[derive(Debug, Clone)]
pub struct Discovery<'a> {
    client: &'a OslcClient,
    format: Format,
    only_once: bool,
    title_filter: Option<&'a str>,
}

struct Walk {
    visited: HashSet<String>,
    found: Vec<String>,
}

impl<'a> Discovery<'a> {
    /// Creates a walker over catalogs in `format`.
    pub fn new(client: &'a OslcClient, format: Format) -> Self {
        Self {
            client,
            format,
            only_once: false,
            title_filter: None,
        }
    }

    /// Stops after the first matching provider.
    #[must_use]
    pub fn only_once(mut self, only_once: bool) -> Self {
        self.only_once = only_once;
        self
    }

    /// Keeps only providers whose title contains `needle`.
    #[must_use]
    pub fn title_filter(mut self, needle: Option<&'a str>) -> Self {
        self.title_filter = needle.filter(|n| !n.is_empty());
        self
    }

    /// Returns the service provider URLs reachable from `base_url`. When
    /// `base_url` is itself a service provider it is the only result.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be fetched or parsed. Nested
    /// catalogs that cannot be fetched or parsed, and providers whose title
    /// cannot be read, are logged and skipped.
    pub fn service_provider_urls(&self, base_url: &str) -> Result<Vec<String>> {
        let mut walk = Walk {
            visited: HashSet::new(),
            found: Vec::new(),
        };
        match self.format {
            Format::RdfXml => self.walk_rdf(base_url, &mut walk, true)?,
            Format::Xml => self.walk_xml(base_url, &mut walk, true)?,
        }
        tracing::info!(
            base_url,
            providers = walk.found.len(),
            catalogs = walk.visited.len(),
            "discovery finished"
        );
        Ok(walk.found)
    }

    fn done(&self, walk: &Walk) -> bool {
        self.only_once && !walk.found.is_empty()
    }

    fn fetch(&self, url: &str, accept: &str) -> Result<OslcResponse> {
        let response = self
            .client
            .get(url, accept)
            .with_context(|| format!("GET {}", url))?;
        if !response.is_success() {
            bail!("GET {} returned {}", url, response.status);
        }
        Ok(response)
    }

    fn walk_rdf(&self, url: &str, walk: &mut Walk, root: bool) -> Result<()> {
        if !walk.visited.insert(url.to_string()) {
            tracing::debug!(url, "catalog already visited");
            return Ok(());
        }
        match self.visit_rdf(url, walk, root) {
            Err(err) if !root => {
                tracing::warn!(url, error = %err, "skipping nested catalog");
                Ok(())
            }
            other => other,
        }
    }

    fn visit_rdf(&self, url: &str, walk: &mut Walk, root: bool) -> Result<()> {
        let response = self.fetch(url, http::RDF_XML)?;
        let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
            .with_context(|| format!("parsing catalog {}", url))?;

        let catalogs = model.subjects_of_type(iris::OSLC_SERVICE_PROVIDER_CATALOG);
        if catalogs.is_empty() {
            let providers = model.subjects_of_type(iris::OSLC_SERVICE_PROVIDER);
            if root && !providers.is_empty() {
                walk.found.push(url.to_string());
            }
            return Ok(());
        }

        let mut nested = Vec::new();
        for catalog in catalogs {
            for provider in model.objects(catalog, iris::OSLC_SERVICE_PROVIDER_PROP) {
                if self.done(walk) {
                    return Ok(());
                }
                let Some(provider_url) = provider.as_iri() else {
                    continue;
                };
                if walk.found.iter().any(|f| f == provider_url) {
                    continue;
                }
                match self.rdf_title_matches(&model, provider) {
                    Ok(true) => walk.found.push(provider_url.to_string()),
                    Ok(false) => {}
                    Err(err) => {
                        tracing::warn!(
                            provider = provider_url,
                            error = %err,
                            "skipping provider with unreadable title"
                        );
                    }
                }
            }
            nested.extend(
                model
                    .objects(catalog, iris::OSLC_SERVICE_PROVIDER_CATALOG_PROP)
                    .into_iter()
                    .filter_map(Node::as_iri)
                    .map(str::to_string),
            );
        }
        for child in nested {
            if self.done(walk) {
                break;
            }
            self.walk_rdf(&child, walk, false)?;
        }
        Ok(())
    }

    fn rdf_title_matches(&self, catalog: &Model, provider: &Node) -> Result<bool> {
        let Some(needle) = self.title_filter else {
            return Ok(true);
        };
        let inline = catalog
            .object(provider, iris::DCTERMS_TITLE)
            .and_then(Node::as_literal)
            .map(str::to_string);
        let title = match inline {
            Some(title) => Some(title),
            None => {
                let Some(url) = provider.as_iri() else {
                    return Ok(false);
                };
                let response = self.fetch(url, http::RDF_XML)?;
                let model = Model::parse_rdf_xml(&response.text(), Some(url))?;
                model
                    .object(provider, iris::DCTERMS_TITLE)
                    .and_then(Node::as_literal)
                    .map(str::to_string)
            }
        };
        Ok(title.is_some_and(|t| t.contains(needle)))
    }

    fn walk_xml(&self, url: &str, walk: &mut Walk, root: bool) -> Result<()> {
        if !walk.visited.insert(url.to_string()) {
            tracing::debug!(url, "catalog already visited");
            return Ok(());
        }
        match self.visit_xml(url, walk, root) {
            Err(err) if !root => {
                tracing::warn!(url, error = %err, "skipping nested catalog");
                Ok(())
            }
            other => other,
        }
    }

    fn visit_xml(&self, url: &str, walk: &mut Walk, root: bool) -> Result<()> {
        let response = self.fetch(url, http::XML)?;
        let doc = XmlDocument::parse(&response.text())
            .with_context(|| format!("parsing catalog {}", url))?;

        if root && doc.count("/oslc_cm_v1:ServiceDescriptor")? > 0 {
            walk.found.push(url.to_string());
            return Ok(());
        }

        let entries = doc.count("//oslc_disc:entry/oslc_disc:ServiceProvider")?;
        for index in 1..=entries {
            if self.done(walk) {
                return Ok(());
            }
            let entry = format!("(//oslc_disc:entry/oslc_disc:ServiceProvider)[{}]", index);
            let Some(services) = doc.string(&format!("{}/oslc_disc:services/@rdf:resource", entry))?
            else {
                continue;
            };
            let services = http::resolve(&response.url, &services)?;
            let title = doc.string(&format!("{}/dc:title", entry))?;
            let keep = match self.title_filter {
                Some(needle) => title.is_some_and(|t| t.contains(needle)),
                None => true,
            };
            if keep && !walk.found.contains(&services) {
                walk.found.push(services);
            }
        }

        for child in
            doc.strings("//oslc_disc:entry/oslc_disc:ServiceProviderCatalog/@rdf:about")?
        {
            if self.done(walk) {
                break;
            }
            let child = http::resolve(&response.url, child.trim())?;
            self.walk_xml(&child, walk, false)?;
        }
        Ok(())
    }
}

/// Collects service provider URLs starting at `catalog_url`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched or parsed.
pub fn service_provider_urls(
    client: &OslcClient,
    catalog_url: &str,
    format: Format,
    only_once: bool,
) -> Result<Vec<String>> {
    Discovery::new(client, format)
        .only_once(only_once)
        .service_provider_urls(catalog_url)
}

/// Reads every capability of `kind` advertised by the provider at
/// `provider_url`.
///
/// # Errors
///
/// Returns an error if the provider cannot be fetched or parsed.
pub fn capabilities(
    client: &OslcClient,
    provider_url: &str,
    kind: Capability,
) -> Result<Vec<CapabilityRef>> {
    let response = client
        .get(provider_url, http::RDF_XML)
        .with_context(|| format!("GET {}", provider_url))?;
    if !response.is_success() {
        bail!("GET {} returned {}", provider_url, response.status);
    }
    let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
        .with_context(|| format!("parsing service provider {}", provider_url))?;
    Ok(capabilities_in(&model, kind))
}

/// Reads every capability of `kind` from an already parsed provider document.
pub fn capabilities_in(model: &Model, kind: Capability) -> Vec<CapabilityRef> {
    let mut found = Vec::new();
    for provider in model.subjects_of_type(iris::OSLC_SERVICE_PROVIDER) {
        for service in model.objects(provider, iris::OSLC_SERVICE) {
            let domain = model
                .object(service, iris::OSLC_DOMAIN)
                .and_then(Node::as_iri)
                .map(str::to_string);
            for capability in model.objects(service, kind.container()) {
                let Some(url) = model
                    .object(capability, kind.url_property())
                    .and_then(Node::as_iri)
                else {
                    continue;
                };
                found.push(CapabilityRef {
                    url: url.to_string(),
                    domain: domain.clone(),
                    resource_types: model
                        .objects(capability, iris::OSLC_RESOURCE_TYPE)
                        .into_iter()
                        .filter_map(Node::as_iri)
                        .map(str::to_string)
                        .collect(),
                    resource_shape: model
                        .object(capability, iris::OSLC_RESOURCE_SHAPE)
                        .and_then(Node::as_iri)
                        .map(str::to_string),
                });
            }
        }
    }
    found
}

/// Capability URLs of `kind`, optionally restricted to a resource type or
/// domain namespace IRI.
///
/// # Errors
///
/// Returns an error if the provider cannot be fetched or parsed.
pub fn capability_urls(
    client: &OslcClient,
    provider_url: &str,
    kind: Capability,
    restrict: Option<&str>,
) -> Result<Vec<String>> {
    Ok(capabilities(client, provider_url, kind)?
        .into_iter()
        .filter(|c| restrict.map_or(true, |r| c.serves(r)))
        .map(|c| c.url)
        .collect())
}

/// Factory or simple query URLs from an OSLC 1.0 CM service descriptor.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be fetched or parsed.
pub fn v1_capability_urls(
    client: &OslcClient,
    services_url: &str,
    kind: Capability,
) -> Result<Vec<String>> {
    let response = client
        .get(services_url, http::XML)
        .with_context(|| format!("GET {}", services_url))?;
    if !response.is_success() {
        bail!("GET {} returned {}", services_url, response.status);
    }
    let doc = XmlDocument::parse(&response.text())
        .with_context(|| format!("parsing service descriptor {}", services_url))?;
    v1_capability_urls_in(&doc, &response.url, kind)
}

/// Factory or simple query URLs from a parsed OSLC 1.0 service descriptor.
///
/// # Errors
///
/// Returns an error if an expression fails or a URL cannot be resolved.
pub fn v1_capability_urls_in(
    doc: &XmlDocument,
    base_url: &str,
    kind: Capability,
) -> Result<Vec<String>> {
    doc.strings(&format!("//{}/oslc_cm_v1:url", kind.v1_element()))?
        .into_iter()
        .map(|url| http::resolve(base_url, url.trim()).map_err(anyhow::Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures;

    #[test]
    fn reads_capabilities_from_provider_document() {
        let model = Model::parse_rdf_xml(
            fixtures::SERVICE_PROVIDER_RDF_XML,
            Some(fixtures::SERVICE_PROVIDER_URL),
        )
        .expect("parses");
        let creation = capabilities_in(&model, Capability::Creation);
        assert_eq!(creation.len(), 1);
        assert_eq!(creation[0].url, fixtures::CREATION_URL);
        assert!(creation[0].serves(iris::OSLC_CM));
        assert!(creation[0].serves(iris::OSLC_CM_CHANGE_REQUEST));
        assert!(!creation[0].serves(iris::OSLC_RM));

        let query = capabilities_in(&model, Capability::Query);
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].url, fixtures::QUERY_URL);
        assert_eq!(
            query[0].resource_shape.as_deref(),
            Some(fixtures::CHANGE_REQUEST_SHAPE_URL)
        );
    }

    #[test]
    fn reads_v1_factory_and_query_urls() {
        let doc = XmlDocument::parse(fixtures::V1_SERVICE_DESCRIPTOR_XML).expect("parses");
        let factories =
            v1_capability_urls_in(&doc, fixtures::V1_SERVICES_URL, Capability::Creation)
                .expect("factories");
        assert_eq!(factories, vec!["http://example.com/v1/cr/create".to_string()]);
        let queries = v1_capability_urls_in(&doc, fixtures::V1_SERVICES_URL, Capability::Query)
            .expect("queries");
        assert_eq!(queries, vec!["http://example.com/v1/cr/query".to_string()]);
    }
}
