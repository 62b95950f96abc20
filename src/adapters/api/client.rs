//! HTTP client for the collection API
//!
//! Every request carries the API key header and asks for JSON. Failures
//! are normalized into two kinds: [`ExportError::Network`] when the server
//! could not be reached at all and [`ExportError::Remote`] when it answered
//! with a non-success status.

use super::models::{error_message, CollectionResponse, WorkspaceResponse, WorkspacesResponse};
use crate::config::{ApiConfig, SecretString};
use crate::domain::{CollectionUid, ExportError, Result, Workspace, WorkspaceSummary};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, Url};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Header carrying the credential
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Authenticated client for the collection API
///
/// # Example
///
/// ```no_run
/// use collex::adapters::api::ApiClient;
/// use collex::config::{secret_string, ApiConfig};
///
/// # async fn example() -> collex::domain::Result<()> {
/// let config = ApiConfig {
///     api_key: Some(secret_string("PMAK-...".to_string())),
///     ..Default::default()
/// };
/// let client = ApiClient::new(&config)?;
/// let workspaces = client.get_workspaces().await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    /// Base URL of the API
    base_url: Url,

    /// HTTP client for making requests
    client: Client,

    /// API key sent with every request
    api_key: SecretString,

    /// Log requests and responses verbatim
    debug: bool,
}

impl ApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// - [`ExportError::MissingArgument`] if no API key is configured
    /// - [`ExportError::Configuration`] if the base URL is invalid
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().is_blank())
            .ok_or_else(|| ExportError::MissingArgument("API key".to_string()))?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            ExportError::Configuration(format!("Invalid api.base_url '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ExportError::Configuration(format!(
                "Invalid api.base_url '{}': cannot be used as a base URL",
                config.base_url
            )));
        }

        let mut builder = ClientBuilder::new();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ExportError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            api_key,
            debug: config.debug,
        })
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Builds the URL for `segments` below the base URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ExportError::Configuration(format!("Invalid api.base_url '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue an authenticated request and decode the JSON response
    ///
    /// # Errors
    ///
    /// - [`ExportError::Network`] on transport failure
    /// - [`ExportError::Remote`] on a non-success status, with the message
    ///   taken from `error.message` in the body when present, else the status text
    /// - [`ExportError::Serialization`] if a success body is not the expected JSON
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&Value>,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(self.api_key.expose_secret().as_str()).map_err(|_| {
            ExportError::InvalidCredential("API key contains invalid header characters".to_string())
        })?;
        headers.insert(API_KEY_HEADER, key);

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .headers(headers.clone());
        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            request = request.json(body);
        }

        if self.debug {
            // The API key is logged unredacted in debug mode.
            tracing::debug!(
                method = %method,
                url = %url,
                headers = ?headers,
                body = ?body,
                "API request"
            );
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(url = %url, error = %e, "API request could not be sent");
            ExportError::Network(e.to_string())
        })?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let text = response
            .text()
            .await
            .map_err(|e| ExportError::Network(format!("Failed to read response body: {e}")))?;

        if self.debug {
            tracing::debug!(
                url = %url,
                status = status.as_u16(),
                headers = ?response_headers,
                body = %text,
                "API response"
            );
        }

        if !status.is_success() {
            let message = error_message(&text)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ExportError::Remote {
                status: status.as_u16(),
                message,
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            ExportError::Serialization(format!("Invalid response from {url}: {e}"))
        })
    }

    /// Issue an authenticated GET request
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.request(Method::GET, segments, None).await
    }

    /// `GET /workspaces`
    pub async fn get_workspaces(&self) -> Result<Vec<WorkspaceSummary>> {
        let response: WorkspacesResponse = self.get(&["workspaces"]).await?;
        Ok(response.workspaces)
    }

    /// `GET /workspaces/{id}`; `None` when the body has no `workspace` record
    pub async fn get_workspace(&self, id: &str) -> Result<Option<Workspace>> {
        let response: WorkspaceResponse = self.get(&["workspaces", id]).await?;
        Ok(response.workspace)
    }

    /// `GET /workspaces/{id}` as an undecoded JSON document
    pub async fn get_workspace_raw(&self, id: &str) -> Result<Value> {
        self.get(&["workspaces", id]).await
    }

    /// `GET /collections/{uid}`; `None` when the body has no `collection` envelope
    pub async fn get_collection(&self, uid: &CollectionUid) -> Result<Option<Value>> {
        let response: CollectionResponse = self.get(&["collections", uid.as_str()]).await?;
        Ok(response.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use serde_json::json;

    fn config_for(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            api_key: Some(secret_string("PMAK-test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = ApiConfig::default();
        let result = ApiClient::new(&config);
        assert!(matches!(result, Err(ExportError::MissingArgument(_))));

        let config = ApiConfig {
            api_key: Some(secret_string("   ".to_string())),
            ..Default::default()
        };
        assert!(matches!(
            ApiClient::new(&config),
            Err(ExportError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = ApiClient::new(&config_for("not a url"));
        assert!(matches!(result, Err(ExportError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ApiClient::new(&config_for("https://api.example.com/v1/")).unwrap();
        let url = client.endpoint(&["workspaces", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/workspaces/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_request_sends_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces")
            .match_header("x-api-key", "PMAK-test")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body(json!({"workspaces": [{"id": "ws1", "name": "Team"}]}).to_string())
            .create_async()
            .await;

        let client = ApiClient::new(&config_for(&server.url())).unwrap();
        let workspaces = client.get_workspaces().await.unwrap();

        mock.assert_async().await;
        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].id, "ws1");
    }

    #[tokio::test]
    async fn test_remote_error_uses_structured_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces")
            .with_status(403)
            .with_body(r#"{"error":{"name":"forbiddenError","message":"No access"}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&config_for(&server.url())).unwrap();
        let err = client.get_workspaces().await.unwrap_err();

        match err {
            ExportError::Remote {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "No access");
                assert!(body.contains("forbiddenError"));
            }
            other => panic!("Expected Remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_to_status_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces")
            .with_status(502)
            .with_body("upstream down")
            .create_async()
            .await;

        let client = ApiClient::new(&config_for(&server.url())).unwrap();
        let err = client.get_workspaces().await.unwrap_err();

        assert!(matches!(
            err,
            ExportError::Remote { status: 502, ref message, .. } if message == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ApiClient::new(&config_for(&format!("http://127.0.0.1:{port}"))).unwrap();
        let err = client.get_workspaces().await.unwrap_err();

        assert!(matches!(err, ExportError::Network(_)));
        assert!(err.to_string().starts_with("Network error"));
    }

    #[tokio::test]
    async fn test_invalid_success_body_is_serialization_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/workspaces")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = ApiClient::new(&config_for(&server.url())).unwrap();
        let err = client.get_workspaces().await.unwrap_err();
        assert!(matches!(err, ExportError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_get_collection_without_envelope() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections/col1")
            .with_status(200)
            .with_body(r#"{"info":{"name":"loose"}}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&config_for(&server.url())).unwrap();
        let uid = CollectionUid::new("col1").unwrap();
        assert!(client.get_collection(&uid).await.unwrap().is_none());
    }
}
