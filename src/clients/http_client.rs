//! HTTP client for Stingray API communication.
//!
//! This module provides the [`StingrayClient`] type, which routes resources
//! to the right API namespace, authenticates every request and dispatches
//! the `get`, `set`, `delete` and `list` verbs generically over any
//! [`Resource`].

use std::collections::HashMap;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::clients::errors::{check_response, ClientError};
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiUrl, Password, StingrayConfig, Username};
use crate::rest::list::ResourceList;
use crate::rest::{Namespace, Resource, ResourceResponse};

macro_rules! api_version {
    () => {
        "3.5"
    };
}

/// Version of the REST API this client speaks.
pub const API_VERSION: &str = api_version!();

/// Absolute path of the configuration namespace.
pub const CONFIG_PATH: &str = concat!("/api/tm/", api_version!(), "/config/active/");

/// Absolute path of the statistics namespace.
pub const STATS_PATH: &str = concat!("/api/tm/", api_version!(), "/status/local_tm/statistics/");

/// Statistics namespace relative to the configuration namespace.
const STATS_FROM_CONFIG_PATH: &str = "../../status/local_tm/statistics/";

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for the Stingray REST API.
///
/// Holds the two namespace base URLs, resolved once at construction, and
/// the credentials sent as HTTP Basic Auth on every request. Nothing here
/// changes after construction, so a single client can serve any number of
/// concurrent calls. Connection pooling, TLS and timeouts belong to the
/// wrapped `reqwest::Client`; no call is ever retried.
///
/// # Example
///
/// ```rust,ignore
/// use stingray_api::{StingrayClient, StingrayConfig, ApiUrl, Username, Password};
/// use stingray_api::rest::resources::Pool;
///
/// let config = StingrayConfig::builder()
///     .base_url(ApiUrl::new("https://lb.example.com:9070")?)
///     .username(Username::new("admin")?)
///     .password(Password::new("secret")?)
///     .build()?;
///
/// let client = StingrayClient::new(&config)?;
///
/// let mut pool = Pool::new("web");
/// let response = client.get(&mut pool).await?;
/// ```
#[derive(Clone, Debug)]
pub struct StingrayClient {
    /// The underlying transport.
    client: reqwest::Client,
    /// Base URL of the configuration namespace.
    config_url: Url,
    /// Base URL of the statistics namespace.
    stats_url: Url,
    username: Username,
    password: Password,
    /// Headers added to every request.
    default_headers: HashMap<String, String>,
}

// Verify StingrayClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StingrayClient>();
};

impl StingrayClient {
    /// Creates a client using a default `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the namespace base URLs cannot
    /// be derived from the configured base URL.
    pub fn new(config: &StingrayConfig) -> Result<Self, ClientError> {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Creates a client that sends its requests through `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the namespace base URLs cannot
    /// be derived from the configured base URL.
    pub fn with_http_client(
        client: reqwest::Client,
        config: &StingrayConfig,
    ) -> Result<Self, ClientError> {
        let (config_url, stats_url) = derive_base_urls(config.base_url())?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Stingray API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(
            config_url = %config_url,
            stats_url = %stats_url,
            "Created Stingray API client"
        );

        Ok(Self {
            client,
            config_url,
            stats_url,
            username: config.username().clone(),
            password: config.password().clone(),
            default_headers,
        })
    }

    /// Returns the base URL of the configuration namespace.
    #[must_use]
    pub const fn config_url(&self) -> &Url {
        &self.config_url
    }

    /// Returns the base URL of the statistics namespace.
    #[must_use]
    pub const fn stats_url(&self) -> &Url {
        &self.stats_url
    }

    /// Returns the headers added to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the base URL of `namespace`.
    #[must_use]
    pub const fn base_url(&self, namespace: Namespace) -> &Url {
        match namespace {
            Namespace::Configuration => &self.config_url,
            Namespace::Statistics => &self.stats_url,
        }
    }

    /// Builds an authenticated request for `path` in `namespace`.
    ///
    /// `path` is resolved against the namespace base URL as a URL reference:
    /// `"pools/web"` lands under the base, `"/api/..."` replaces its path and
    /// a full URL replaces it entirely. The body, if any, is attached as is;
    /// setting its `Content-Type` is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `path` cannot be resolved, or
    /// [`ClientError::Transport`] if the request cannot be constructed.
    pub fn build_request(
        &self,
        namespace: Namespace,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Request, ClientError> {
        Ok(self.request_builder(namespace, method, path, body)?.build()?)
    }

    /// Builds an authenticated request in the configuration namespace.
    ///
    /// # Errors
    ///
    /// See [`StingrayClient::build_request`].
    pub fn new_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Request, ClientError> {
        self.build_request(Namespace::Configuration, method, path, body)
    }

    fn request_builder(
        &self,
        namespace: Namespace,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let url = resolve(self.base_url(namespace), path)?;

        let mut builder = self
            .client
            .request(method.into(), url)
            .basic_auth(self.username.as_ref(), Some(self.password.as_ref()));

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        Ok(builder)
    }

    /// Sends a request and checks the response.
    ///
    /// The body is read in full. A non-2xx status is returned as
    /// [`ClientError::Response`], which still carries the response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response was received,
    /// [`ClientError::Body`] if a successful body could not be read, and
    /// [`ClientError::Response`] for any status outside 200-299. A body that
    /// cannot be read on an error status is treated as empty.
    pub async fn execute(&self, request: reqwest::Request) -> Result<HttpResponse, ClientError> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(method = %method, url = %url, "Sending Stingray API request");

        let res = self.client.execute(request).await?;

        let code = res.status().as_u16();
        let headers = HttpResponse::collect_headers(res.headers());
        let mut response = HttpResponse::new(code, method, url, headers, Vec::new());

        match res.bytes().await {
            Ok(bytes) => response.body = bytes.to_vec(),
            Err(source) if response.is_ok() => {
                return Err(ClientError::Body { source, response });
            }
            Err(e) => tracing::debug!(error = %e, "Could not read error response body"),
        }
        tracing::debug!(
            method = %response.method,
            url = %response.url,
            status = code,
            "Received Stingray API response"
        );

        check_response(&response)?;
        Ok(response)
    }

    /// Fetches `resource` and populates it in place from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`], carrying the response, if the body
    /// does not fit the resource; otherwise see [`StingrayClient::execute`].
    pub async fn get<R: Resource>(&self, resource: &mut R) -> Result<HttpResponse, ClientError> {
        let request =
            self.build_request(resource.namespace(), HttpMethod::Get, &resource.path(), None)?;
        let response = self.execute(request).await?;

        match resource.decode(&response.body) {
            Ok(()) => Ok(response),
            Err(source) => Err(ClientError::Decode { source, response }),
        }
    }

    /// Writes `resource` with a `PUT`.
    ///
    /// The response body is not decoded back into the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if the resource cannot be
    /// encoded; otherwise see [`StingrayClient::execute`].
    pub async fn set<R: Resource>(&self, resource: &R) -> Result<HttpResponse, ClientError> {
        let body = resource.encode().map_err(ClientError::Serialization)?;
        let request = self
            .request_builder(resource.namespace(), HttpMethod::Put, &resource.path(), Some(body))?
            .header(CONTENT_TYPE, resource.content_type())
            .build()?;

        self.execute(request).await
    }

    /// Deletes `resource`.
    ///
    /// # Errors
    ///
    /// See [`StingrayClient::execute`].
    pub async fn delete<R: Resource>(&self, resource: &R) -> Result<HttpResponse, ClientError> {
        let request =
            self.build_request(resource.namespace(), HttpMethod::Delete, &resource.path(), None)?;
        self.execute(request).await
    }

    /// Lists the names in the collection of `resource`'s kind.
    ///
    /// Names are returned in the order the appliance sent them. The name of
    /// `resource` itself is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`], carrying the response, if the body
    /// is not a listing; otherwise see [`StingrayClient::execute`].
    pub async fn list<R: Resource>(
        &self,
        resource: &R,
    ) -> Result<ResourceResponse<Vec<String>>, ClientError> {
        let request =
            self.build_request(resource.namespace(), HttpMethod::Get, resource.endpoint(), None)?;
        let response = self.execute(request).await?;

        match ResourceList::decode(&response.body) {
            Ok(list) => Ok(ResourceResponse::new(list.names(), response)),
            Err(source) => Err(ClientError::Decode { source, response }),
        }
    }
}

/// Derives the configuration and statistics base URLs from the root URL.
///
/// A bare host gets both namespace paths appended. A URL that already has
/// a path is taken as the configuration root, and the statistics root is
/// found relative to it.
fn derive_base_urls(root: &ApiUrl) -> Result<(Url, Url), ClientError> {
    if root.is_bare_host() {
        let config_url = resolve(root.as_url(), CONFIG_PATH)?;
        let stats_url = resolve(root.as_url(), STATS_PATH)?;
        return Ok((config_url, stats_url));
    }

    let mut config_url = root.as_url().clone();
    if !config_url.path().ends_with('/') {
        let path = format!("{}/", config_url.path());
        config_url.set_path(&path);
    }
    let stats_url = resolve(&config_url, STATS_FROM_CONFIG_PATH)?;

    Ok((config_url, stats_url))
}

fn resolve(base: &Url, path: &str) -> Result<Url, ClientError> {
    base.join(path).map_err(|source| ClientError::InvalidUrl {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};

    fn create_test_config(base_url: &str) -> StingrayConfig {
        StingrayConfig::builder()
            .base_url(ApiUrl::new(base_url).unwrap())
            .username(Username::new("admin").unwrap())
            .password(Password::new("secret").unwrap())
            .build()
            .unwrap()
    }

    fn create_test_client() -> StingrayClient {
        StingrayClient::new(&create_test_config("http://host/")).unwrap()
    }

    #[test]
    fn test_namespace_paths_use_api_version() {
        assert_eq!(CONFIG_PATH, format!("/api/tm/{API_VERSION}/config/active/"));
        assert_eq!(
            STATS_PATH,
            format!("/api/tm/{API_VERSION}/status/local_tm/statistics/")
        );
    }

    #[test]
    fn test_base_urls_from_bare_host() {
        let client = create_test_client();

        assert_eq!(
            client.config_url().as_str(),
            "http://host/api/tm/3.5/config/active/"
        );
        assert_eq!(
            client.stats_url().as_str(),
            "http://host/api/tm/3.5/status/local_tm/statistics/"
        );
    }

    #[test]
    fn test_base_urls_from_host_without_slash_and_port() {
        let client = StingrayClient::new(&create_test_config("https://lb:9070")).unwrap();

        assert_eq!(
            client.config_url().as_str(),
            "https://lb:9070/api/tm/3.5/config/active/"
        );
        assert_eq!(
            client.stats_url().as_str(),
            "https://lb:9070/api/tm/3.5/status/local_tm/statistics/"
        );
    }

    #[test]
    fn test_base_urls_from_config_root() {
        let client =
            StingrayClient::new(&create_test_config("http://host/api/tm/3.5/config/active/"))
                .unwrap();

        assert_eq!(
            client.config_url().as_str(),
            "http://host/api/tm/3.5/config/active/"
        );
        assert_eq!(
            client.stats_url().as_str(),
            "http://host/api/tm/3.5/status/local_tm/statistics/"
        );
    }

    #[test]
    fn test_config_root_without_trailing_slash() {
        let client =
            StingrayClient::new(&create_test_config("http://host/api/tm/3.5/config/active"))
                .unwrap();

        assert_eq!(
            client.config_url().as_str(),
            "http://host/api/tm/3.5/config/active/"
        );
        assert_eq!(
            client.stats_url().as_str(),
            "http://host/api/tm/3.5/status/local_tm/statistics/"
        );
    }

    #[test]
    fn test_build_request_routes_by_namespace() {
        let client = create_test_client();

        let request = client
            .build_request(Namespace::Configuration, HttpMethod::Get, "pools/web", None)
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://host/api/tm/3.5/config/active/pools/web"
        );

        let request = client
            .build_request(Namespace::Statistics, HttpMethod::Get, "pools/web", None)
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://host/api/tm/3.5/status/local_tm/statistics/pools/web"
        );
    }

    #[test]
    fn test_build_request_accepts_absolute_overrides() {
        let client = create_test_client();

        let request = client
            .build_request(Namespace::Configuration, HttpMethod::Get, "/api/tm/3.4/", None)
            .unwrap();
        assert_eq!(request.url().as_str(), "http://host/api/tm/3.4/");

        let request = client
            .build_request(
                Namespace::Statistics,
                HttpMethod::Get,
                "https://other:9070/api/tm/3.5/config/active/pools",
                None,
            )
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://other:9070/api/tm/3.5/config/active/pools"
        );
    }

    #[test]
    fn test_build_request_sets_basic_auth_and_default_headers() {
        let client = create_test_client();
        let request = client
            .build_request(Namespace::Statistics, HttpMethod::Delete, "pools/web", None)
            .unwrap();

        let expected = format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode("admin:secret")
        );
        assert_eq!(request.method(), &reqwest::Method::DELETE);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            expected
        );
        assert_eq!(
            request.headers().get(ACCEPT).unwrap().to_str().unwrap(),
            "application/json"
        );
        assert!(request
            .headers()
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("Stingray API Library v"));
    }

    #[test]
    fn test_build_request_attaches_body_without_content_type() {
        let client = create_test_client();
        let request = client
            .build_request(
                Namespace::Configuration,
                HttpMethod::Put,
                "pools/web",
                Some(b"{}".to_vec()),
            )
            .unwrap();

        assert_eq!(request.body().and_then(reqwest::Body::as_bytes), Some(&b"{}"[..]));
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_build_request_rejects_malformed_path() {
        let client = create_test_client();
        let result =
            client.build_request(Namespace::Configuration, HttpMethod::Get, "http://[::1", None);

        assert!(matches!(
            result,
            Err(ClientError::InvalidUrl { path, .. }) if path == "http://[::1"
        ));
    }

    #[test]
    fn test_new_request_uses_config_namespace() {
        let client = create_test_client();
        let request = client.new_request(HttpMethod::Get, "pools", None).unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://host/api/tm/3.5/config/active/pools"
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StingrayConfig::builder()
            .base_url(ApiUrl::new("http://host").unwrap())
            .username(Username::new("admin").unwrap())
            .password(Password::new("secret").unwrap())
            .user_agent_prefix("lbctl/0.3")
            .build()
            .unwrap();
        let client = StingrayClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("lbctl/0.3 | "));
        assert!(user_agent.contains("Stingray API Library"));
    }

    #[test]
    fn test_client_debug_does_not_leak_password() {
        let client = create_test_client();
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StingrayClient>();
    }
}
