//! Suite configuration.
//!
//! A run is described by an `oslc-conformance.toml` file. The settings
//! mirror what an OSLC test operator has to supply: where the service
//! provider catalog lives, how to authenticate, which OSLC versions and
//! domains to exercise, creation templates, and query parameters that are
//! known to match data on the server.
//!
//! ```toml
//! base_uri = "https://jazz.example.com/ccm/oslc/workitems/catalog"
//! impl_name = "Example CCM"
//! versions = "v2"
//! domains = ["core", "cm"]
//! run_only_once = true
//!
//! [auth]
//! method = "form"
//! username = "tester"
//! password = "secret"
//!
//! [query]
//! equality_property = "dcterms:identifier"
//! equality_value = "42"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use oslc_vocab::Domain;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A setting has an invalid value.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How the suite authenticates against the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// No credentials are sent.
    #[default]
    None,
    /// HTTP basic authentication on every request.
    Basic,
    /// Servlet form login (`j_security_check`) once, then session cookies.
    Form,
}

/// Credentials and authentication strategy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Authentication strategy.
    pub method: AuthMethod,
    /// User name.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Form login path, relative to the base URI's origin.
    pub login_path: Option<String>,
}

impl AuthConfig {
    /// Default servlet form login path.
    pub const DEFAULT_LOGIN_PATH: &'static str = "/j_security_check";

    /// Returns `(username, password)` when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pw)) => Some((user.as_str(), pw.as_str())),
            _ => None,
        }
    }

    /// Returns the configured form login path or the servlet default.
    pub fn login_path(&self) -> &str {
        self.login_path
            .as_deref()
            .unwrap_or(Self::DEFAULT_LOGIN_PATH)
    }
}

/// Which OSLC specification versions to test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestVersions {
    /// OSLC 1.0 (plain XML) checks only.
    V1,
    /// OSLC 2.0 (RDF/XML) checks only.
    #[default]
    V2,
    /// Both tracks.
    Both,
}

impl TestVersions {
    /// Returns true if OSLC 1.0 checks run.
    pub fn includes_v1(self) -> bool {
        matches!(self, TestVersions::V1 | TestVersions::Both)
    }

    /// Returns true if OSLC 2.0 checks run.
    pub fn includes_v2(self) -> bool {
        matches!(self, TestVersions::V2 | TestVersions::Both)
    }
}

/// Template documents used by the creation and update checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// RDF/XML body POSTed to an OSLC 2.0 creation factory.
    pub create_rdf_xml: Option<PathBuf>,
    /// XML body POSTed to an OSLC 1.0 factory.
    pub create_xml: Option<PathBuf>,
    /// RDF/XML body PUT to the created resource.
    pub update_rdf_xml: Option<PathBuf>,
}

/// Query parameters known to match server data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Prefixed property used for `=` and `!=` queries (e.g., `dcterms:identifier`).
    pub equality_property: Option<String>,
    /// Value matched by the equality query.
    pub equality_value: Option<String>,
    /// Value excluded by the `!=` query; defaults to `equality_value`.
    pub not_equal_value: Option<String>,
    /// Prefixed property used for `>=` queries (e.g., `dcterms:modified`).
    pub comparison_property: Option<String>,
    /// Lower bound used by the comparison query.
    pub comparison_value: Option<String>,
    /// Term used for `oslc.searchTerms`.
    pub full_text_search_term: Option<String>,
    /// Extra `key=value&...` parameters appended to every query.
    pub additional_parameters: Option<String>,
}

impl QueryConfig {
    /// Parses `additional_parameters` into key/value pairs.
    pub fn additional_pairs(&self) -> Vec<(String, String)> {
        self.additional_parameters
            .as_deref()
            .unwrap_or_default()
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|p| match p.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (p.to_string(), String::new()),
            })
            .collect()
    }
}

/// Tracked resource set settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrsConfig {
    /// URL of the tracked resource set.
    pub uri: Option<String>,
    /// Maximum number of change log pages followed through `trs:previous`.
    pub max_pages: Option<usize>,
}

/// Complete configuration of a conformance run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Service provider catalog (or service provider) URL.
    pub base_uri: String,
    /// Name of the implementation under test, printed in reports.
    #[serde(default)]
    pub impl_name: Option<String>,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// OSLC versions to test.
    #[serde(default)]
    pub versions: TestVersions,
    /// Domains whose validators run.
    #[serde(default = "default_domains")]
    pub domains: Vec<Domain>,
    /// Stop discovery after the first service provider.
    #[serde(default)]
    pub run_only_once: bool,
    /// Only use service providers whose title contains this text.
    #[serde(default)]
    pub use_service_provider: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Accept self-signed TLS certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Creation and update templates.
    #[serde(default)]
    pub templates: TemplateConfig,
    /// Query parameters.
    #[serde(default)]
    pub query: QueryConfig,
    /// Per-domain sample resource URLs that bypass query-based lookup,
    /// keyed by domain identifier (`cm`, `am`, ...).
    #[serde(default)]
    pub resources: BTreeMap<String, String>,
    /// Tracked resource set settings.
    #[serde(default)]
    pub trs: TrsConfig,
    /// Directory of the config file; relative template paths resolve here.
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

fn default_domains() -> Vec<Domain> {
    vec![Domain::Core]
}

fn default_timeout_secs() -> u64 {
    30
}

/// File name the command line reads when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "oslc-conformance.toml";

impl SuiteConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SuiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.base_uri).map_err(|e| {
            ConfigError::Invalid(format!("base_uri '{}' is not a URL: {}", self.base_uri, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base_uri must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.auth.method != AuthMethod::None && self.auth.credentials().is_none() {
            return Err(ConfigError::Invalid(
                "auth.username and auth.password are required for basic and form auth"
                    .to_string(),
            ));
        }
        if self.domains.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one domain must be configured".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.domains.contains(&Domain::TrackedResourceSet) && self.trs.uri.is_none() {
            return Err(ConfigError::Invalid(
                "trs.uri is required when the trs domain is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves a template path relative to the config file directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Returns the configured sample resource URL of a domain.
    pub fn resource_url(&self, domain: Domain) -> Option<&str> {
        self.resources.get(domain.as_str()).map(String::as_str)
    }

    /// Returns true if the domain's validators should run.
    pub fn runs(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }
}
