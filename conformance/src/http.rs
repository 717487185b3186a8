//! Blocking HTTP client for talking to the server under test.
//!
//! [`OslcClient`] wraps a `reqwest` blocking client with the conventions
//! every OSLC check needs: credentials (basic or servlet form login), the
//! `OSLC-Core-Version` request header, `Accept` / `Content-Type` /
//! `If-Match` handling, and fully buffered [`OslcResponse`]s so checks can
//! inspect status, headers and body freely.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, ETAG, IF_MATCH, LAST_MODIFIED, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Method, Url};
use thiserror::Error;

use crate::config::{AuthConfig, AuthMethod, SuiteConfig};

/// `application/rdf+xml`.
pub const RDF_XML: &str = "application/rdf+xml";
/// `application/xml`.
pub const XML: &str = "application/xml";
/// `application/json`.
pub const JSON: &str = "application/json";
/// `text/turtle`.
pub const TURTLE: &str = "text/turtle";
/// OSLC compact rendering media type.
pub const COMPACT_XML: &str = "application/x-oslc-compact+xml";
/// Request/response header carrying the OSLC Core version.
pub const CORE_VERSION_HEADER: &str = "OSLC-Core-Version";
/// Header Jazz servers set when a form login is rejected.
const JAZZ_AUTH_MSG_HEADER: &str = "X-com-ibm-team-repository-web-auth-msg";

/// Errors raised by [`OslcClient`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// The URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },
    /// The request could not be sent or the response could not be read.
    #[error("{method} {url} failed: {source}")]
    Transport {
        /// HTTP method.
        method: String,
        /// Request URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The underlying client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Form login was rejected.
    #[error("form login at {url} was rejected (status {status})")]
    Login {
        /// Login URL.
        url: String,
        /// Response status.
        status: u16,
    },
}

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct OslcResponse {
    /// Status code.
    pub status: u16,
    /// Final URL after redirects.
    pub url: String,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Vec<u8>,
}

impl OslcResponse {
    /// Returns a header value if present and valid ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the `Location` header.
    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION.as_str())
    }

    /// Returns the `ETag` header.
    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG.as_str())
    }

    /// Returns the `Last-Modified` header.
    pub fn last_modified(&self) -> Option<&str> {
        self.header(LAST_MODIFIED.as_str())
    }

    /// Returns the `Content-Type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Returns the media type of the body without parameters (`; charset=...`).
    pub fn media_type(&self) -> Option<&str> {
        self.content_type()
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim())
    }

    /// Returns the `OSLC-Core-Version` header.
    pub fn core_version(&self) -> Option<&str> {
        self.header(CORE_VERSION_HEADER)
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// HTTP client bound to one server under test.
#[derive(Debug, Clone)]
pub struct OslcClient {
    client: Client,
    auth: AuthConfig,
    core_version: Option<&'static str>,
}

impl OslcClient {
    /// OSLC Core version announced by the 2.0 track.
    pub const CORE_VERSION_2: &'static str = "2.0";

    /// Builds a client from the suite configuration and performs form login
    /// when configured.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the client cannot be built or form login fails.
    pub fn new(config: &SuiteConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .redirect(Policy::limited(10))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(HttpError::Client)?;
        let oslc = Self {
            client,
            auth: config.auth.clone(),
            core_version: Some(Self::CORE_VERSION_2),
        };
        if oslc.auth.method == AuthMethod::Form {
            oslc.form_login(&config.base_uri)?;
        }
        Ok(oslc)
    }

    /// Returns a client sharing this client's session that sends no
    /// `OSLC-Core-Version` header (the OSLC 1.0 track).
    #[must_use]
    pub fn without_core_version(&self) -> Self {
        Self {
            core_version: None,
            ..self.clone()
        }
    }

    /// Sends a GET request with the given `Accept` header.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on invalid URLs or transport failures.
    pub fn get(&self, url: &str, accept: &str) -> Result<OslcResponse, HttpError> {
        self.send(Method::GET, url, &[(ACCEPT.as_str(), accept)], None)
    }

    /// Sends a GET request with arbitrary headers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on invalid URLs or transport failures.
    pub fn get_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<OslcResponse, HttpError> {
        self.send(Method::GET, url, headers, None)
    }

    /// Sends a POST request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on invalid URLs or transport failures.
    pub fn post(
        &self,
        url: &str,
        content_type: &str,
        body: impl Into<Vec<u8>>,
        accept: &str,
    ) -> Result<OslcResponse, HttpError> {
        self.send(
            Method::POST,
            url,
            &[(CONTENT_TYPE.as_str(), content_type), (ACCEPT.as_str(), accept)],
            Some(body.into()),
        )
    }

    /// Sends a PUT request, optionally conditional on an ETag.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on invalid URLs or transport failures.
    pub fn put(
        &self,
        url: &str,
        content_type: &str,
        body: impl Into<Vec<u8>>,
        if_match: Option<&str>,
    ) -> Result<OslcResponse, HttpError> {
        let mut headers = vec![(CONTENT_TYPE.as_str(), content_type), (ACCEPT.as_str(), content_type)];
        if let Some(etag) = if_match {
            headers.push((IF_MATCH.as_str(), etag));
        }
        self.send(Method::PUT, url, &headers, Some(body.into()))
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on invalid URLs or transport failures.
    pub fn delete(&self, url: &str) -> Result<OslcResponse, HttpError> {
        self.send(Method::DELETE, url, &[], None)
    }

    fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<OslcResponse, HttpError> {
        let parsed = parse_url(url)?;
        let mut request = self.client.request(method.clone(), parsed);
        if let Some(version) = self.core_version {
            request = request.header(CORE_VERSION_HEADER, version);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request = self.authorize(request);
        if let Some(body) = body {
            request = request.body(body);
        }

        let transport = |source| HttpError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        };
        let response = request.send().map_err(transport)?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let response_headers = response.headers().clone();
        let body = response.bytes().map_err(transport)?.to_vec();

        tracing::debug!(
            method = %method,
            url,
            status,
            bytes = body.len(),
            "oslc request"
        );

        Ok(OslcResponse {
            status,
            url: final_url,
            headers: response_headers,
            body,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match (self.auth.method, self.auth.credentials()) {
            (AuthMethod::Basic, Some((user, password))) => {
                request.basic_auth(user, Some(password))
            }
            _ => request,
        }
    }

    /// Establishes a session cookie through servlet form authentication.
    fn form_login(&self, base_uri: &str) -> Result<(), HttpError> {
        let Some((user, password)) = self.auth.credentials() else {
            return Ok(());
        };
        // The servlet container only honors the login POST once a session
        // has been opened by a request to a protected resource.
        self.get(base_uri, RDF_XML)?;

        let login_url = parse_url(base_uri)?
            .join(self.auth.login_path())
            .map_err(|e| HttpError::InvalidUrl {
                url: self.auth.login_path().to_string(),
                reason: e.to_string(),
            })?;
        let response = self
            .client
            .post(login_url.clone())
            .form(&[("j_username", user), ("j_password", password)])
            .send()
            .map_err(|source| HttpError::Transport {
                method: "POST".to_string(),
                url: login_url.to_string(),
                source,
            })?;
        let status = response.status().as_u16();
        let rejected = response
            .headers()
            .get(JAZZ_AUTH_MSG_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("authfailed"));
        if status >= 400 || rejected {
            return Err(HttpError::Login {
                url: login_url.to_string(),
                status,
            });
        }
        tracing::info!(url = %login_url, "form login succeeded");
        Ok(())
    }
}

fn parse_url(url: &str) -> Result<Url, HttpError> {
    Url::parse(url).map_err(|e| HttpError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Appends percent-encoded query parameters to a URL.
///
/// # Errors
///
/// Returns [`HttpError::InvalidUrl`] if `url` cannot be parsed.
pub fn with_query<K, V>(url: &str, pairs: &[(K, V)]) -> Result<String, HttpError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parsed = parse_url(url)?;
    if !pairs.is_empty() {
        let mut query = parsed.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key.as_ref(), value.as_ref());
        }
    }
    Ok(parsed.to_string())
}

/// Resolves a possibly relative reference against a base URL.
///
/// # Errors
///
/// Returns [`HttpError::InvalidUrl`] if either side cannot be parsed.
pub fn resolve(base: &str, reference: &str) -> Result<String, HttpError> {
    parse_url(base)?
        .join(reference)
        .map(|u| u.to_string())
        .map_err(|e| HttpError::InvalidUrl {
            url: reference.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_encodes_oslc_parameters() {
        let url = with_query(
            "http://example.com/query?x=1",
            &[("oslc.where", "dcterms:identifier=\"42\"")],
        )
        .expect("url");
        assert_eq!(
            url,
            "http://example.com/query?x=1&oslc.where=dcterms%3Aidentifier%3D%2242%22"
        );
    }

    #[test]
    fn with_query_leaves_url_without_pairs() {
        let pairs: [(&str, &str); 0] = [];
        assert_eq!(
            with_query("http://example.com/q", &pairs).expect("url"),
            "http://example.com/q"
        );
    }

    #[test]
    fn rejects_relative_urls() {
        assert!(matches!(
            with_query("/relative", &[("a", "b")]),
            Err(HttpError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn resolves_relative_references() {
        assert_eq!(
            resolve("http://example.com/oslc/catalog", "providers/1").expect("url"),
            "http://example.com/oslc/providers/1"
        );
    }

    #[test]
    fn media_type_strips_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            "application/rdf+xml; charset=UTF-8".parse().expect("header"),
        );
        let response = OslcResponse {
            status: 200,
            url: "http://example.com".to_string(),
            headers,
            body: Vec::new(),
        };
        assert_eq!(response.media_type(), Some("application/rdf+xml"));
        assert!(response.is_success());
        assert_eq!(response.etag(), None);
    }
}
