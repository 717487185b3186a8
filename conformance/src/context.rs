//! Shared state for one suite run.

use anyhow::{Context as _, Result};
use oslc_vocab::{Domain, Shape, Vocabulary};

use crate::config::SuiteConfig;
use crate::discovery::{self, Capability, CapabilityRef, Discovery, Format};
use crate::http::{self, OslcClient, OslcResponse};
use crate::rdf::Model;

/// Outcome of catalog discovery for one protocol track.
#[derive(Debug, Clone, Default)]
pub struct Providers {
    /// Discovered service provider URLs (OSLC 1.0: service descriptor URLs).
    pub urls: Vec<String>,
    /// Why discovery failed, if it did.
    pub error: Option<String>,
}

/// Configuration, HTTP session and discovery results shared by every
/// validator.
#[derive(Debug)]
pub struct SuiteContext {
    /// Suite configuration.
    pub config: SuiteConfig,
    /// Client for OSLC 2.0 checks (sends `OSLC-Core-Version: 2.0`).
    pub client: OslcClient,
    /// Client for OSLC 1.0 checks (no `OSLC-Core-Version` header).
    pub v1_client: OslcClient,
    /// OSLC 2.0 service providers.
    pub providers: Providers,
    /// OSLC 1.0 service descriptors.
    pub v1_providers: Providers,
    factories: Vec<CapabilityRef>,
    queries: Vec<CapabilityRef>,
}

impl SuiteContext {
    /// Validates the configuration, opens the HTTP session and discovers
    /// service providers for every enabled track, reading each provider's
    /// creation factories and query capabilities once. Discovery failures
    /// are recorded rather than returned so the catalog validator can
    /// report them.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built (including failed form login).
    pub fn new(config: SuiteConfig) -> Result<Self> {
        config.validate()?;
        let client = OslcClient::new(&config).context("opening HTTP session")?;
        let v1_client = client.without_core_version();

        let providers = if config.versions.includes_v2() {
            discover(&client, &config, Format::RdfXml)
        } else {
            Providers::default()
        };
        let v1_providers = if config.versions.includes_v1() {
            discover(&v1_client, &config, Format::Xml)
        } else {
            Providers::default()
        };
        let (factories, queries) = read_capabilities(&client, &providers.urls);

        Ok(Self {
            config,
            client,
            v1_client,
            providers,
            v1_providers,
            factories,
            queries,
        })
    }

    /// The built-in OSLC vocabulary.
    pub fn vocab(&self) -> &'static Vocabulary {
        Vocabulary::full()
    }

    /// Every capability of `kind` across the discovered providers.
    pub fn capabilities(&self, kind: Capability) -> &[CapabilityRef] {
        match kind {
            Capability::Creation => &self.factories,
            Capability::Query => &self.queries,
        }
    }

    /// The first capability of `kind` serving any of `restrict` (resource
    /// types or domain namespaces). An empty `restrict` takes the first
    /// capability of any kind.
    pub fn capability_for(&self, kind: Capability, restrict: &[&str]) -> Option<CapabilityRef> {
        self.capabilities(kind)
            .iter()
            .find(|c| restrict.is_empty() || restrict.iter().any(|r| c.serves(r)))
            .cloned()
    }

    /// Locates a sample resource for `domain`, optionally of a specific
    /// `shape`. Configured `[resources]` entries win: a key naming the shape
    /// id (`AutomationResult = "..."`) applies to that shape, a key naming
    /// the domain (`cm = "..."`) to the domain's primary shape. Otherwise
    /// the first member returned by a query capability serving the shape's
    /// class or the domain namespace is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a query base responds but cannot be parsed.
    pub fn sample_resource(&self, domain: Domain, shape: Option<&Shape>) -> Result<Option<String>> {
        if let Some(url) = shape.and_then(|s| self.config.resources.get(s.id)) {
            return Ok(Some(url.clone()));
        }
        let primary = match shape {
            Some(shape) => self
                .vocab()
                .module(domain)
                .and_then(|m| m.shapes.first())
                .is_some_and(|first| first.id == shape.id),
            None => true,
        };
        if primary {
            if let Some(url) = self.config.resource_url(domain) {
                return Ok(Some(url.to_string()));
            }
        }

        let class_iri = shape.map(|s| s.class_iri);
        let mut restrict: Vec<&str> = class_iri.into_iter().collect();
        if domain != Domain::Core {
            restrict.push(domain.namespace_iri());
        }
        let candidates = self
            .capabilities(Capability::Query)
            .iter()
            .filter(|c| restrict.is_empty() || restrict.iter().any(|r| c.serves(r)));
        for capability in candidates {
            let members = self.query_members(&capability.url, class_iri)?;
            if let Some(first) = members.into_iter().next() {
                return Ok(Some(first));
            }
        }
        Ok(None)
    }

    /// Members listed by a query base (or any query URL), optionally
    /// restricted to resources the page types as `class_iri`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or parsed.
    pub fn query_members(&self, query_url: &str, class_iri: Option<&str>) -> Result<Vec<String>> {
        let (_, model) = self.get_model(query_url)?;
        let mut members: Vec<String> = model.member_iris().into_iter().map(str::to_string).collect();
        if let Some(class) = class_iri {
            for subject in model.subjects_of_type(class) {
                if let Some(iri) = subject.as_iri() {
                    if !members.iter().any(|m| m == iri) {
                        members.push(iri.to_string());
                    }
                }
            }
        }
        Ok(members)
    }

    /// GETs `url` as RDF/XML and parses it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures, non-2xx responses, or
    /// unparseable bodies.
    pub fn get_model(&self, url: &str) -> Result<(OslcResponse, Model)> {
        let response = self
            .client
            .get(url, http::RDF_XML)
            .with_context(|| format!("GET {}", url))?;
        if !response.is_success() {
            anyhow::bail!("GET {} returned {}", url, response.status);
        }
        let model = Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
            .with_context(|| format!("parsing {}", url))?;
        Ok((response, model))
    }

    /// Reads a template file named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is configured but cannot be read.
    pub fn template(&self, path: Option<&std::path::Path>) -> Result<Option<String>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let resolved = self.config.resolve_path(path);
        std::fs::read_to_string(&resolved)
            .map(Some)
            .with_context(|| format!("reading template {}", resolved.display()))
    }
}

fn discover(client: &OslcClient, config: &SuiteConfig, format: Format) -> Providers {
    let result = Discovery::new(client, format)
        .only_once(config.run_only_once)
        .title_filter(config.use_service_provider.as_deref())
        .service_provider_urls(&config.base_uri);
    match result {
        Ok(urls) => Providers { urls, error: None },
        Err(err) => {
            tracing::warn!(format = ?format, error = %err, "service discovery failed");
            Providers {
                urls: Vec::new(),
                error: Some(format!("{:#}", err)),
            }
        }
    }
}

/// Reads the creation factories and query capabilities of every provider,
/// fetching each provider document once. Providers that cannot be read are
/// logged and skipped.
fn read_capabilities(
    client: &OslcClient,
    providers: &[String],
) -> (Vec<CapabilityRef>, Vec<CapabilityRef>) {
    let mut factories = Vec::new();
    let mut queries = Vec::new();
    for provider in providers {
        match provider_model(client, provider) {
            Ok(model) => {
                factories.extend(discovery::capabilities_in(&model, Capability::Creation));
                queries.extend(discovery::capabilities_in(&model, Capability::Query));
            }
            Err(err) => {
                tracing::warn!(provider = %provider, error = %err, "cannot read provider");
            }
        }
    }
    tracing::debug!(
        factories = factories.len(),
        queries = queries.len(),
        "capabilities read"
    );
    (factories, queries)
}

fn provider_model(client: &OslcClient, provider: &str) -> Result<Model> {
    let response = client
        .get(provider, http::RDF_XML)
        .with_context(|| format!("GET {}", provider))?;
    if !response.is_success() {
        anyhow::bail!("GET {} returned {}", provider, response.status);
    }
    Model::parse_rdf_xml(&response.text(), Some(response.url.as_str()))
        .with_context(|| format!("parsing service provider {}", provider))
}
