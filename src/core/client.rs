//! Shared HTTP client for the DataForSEO API.
//!
//! All tools send their validated parameters through this client as a
//! single JSON POST request. The request body for a live endpoint is
//! always a JSON array containing exactly one task object.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use super::config::{ApiConfig, CredentialsConfig};

/// Response status code the API returns on success.
const STATUS_OK: i64 = 20000;

/// Result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the DataForSEO API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credentials were not configured.
    #[error(
        "DataForSEO credentials are not configured \
         (set DATAFORSEO_LOGIN and DATAFORSEO_PASSWORD)"
    )]
    MissingCredentials,

    /// The HTTP request itself failed (network, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The API answered with a non-20000 status code in the response body.
    #[error("API error {code}: {message}")]
    Upstream { code: i64, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response format: {0}")]
    InvalidResponse(String),
}

/// Client for the DataForSEO REST API.
///
/// Holds a pooled `reqwest` client, the base URL, and the Basic auth
/// credentials. Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct DataForSeoClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl DataForSeoClient {
    /// Create a new client from configuration.
    pub fn new(api: &ApiConfig, credentials: &CredentialsConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            credentials: credentials
                .pair()
                .map(|(login, password)| (login.to_string(), password.to_string())),
        })
    }

    /// The base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a single task object to a live endpoint.
    ///
    /// The task is wrapped into a one-element JSON array, as the API
    /// expects, and the parsed response body is returned once its
    /// top-level `status_code` has been checked.
    pub async fn post_task(&self, path: &str, task: Value) -> ClientResult<Value> {
        let (login, password) = self
            .credentials
            .as_ref()
            .ok_or(ClientError::MissingCredentials)?;

        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(login, Some(password))
            .json(&Value::Array(vec![task]))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("DataForSEO request to {} failed with HTTP {}", path, status);
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        Self::check_status(path, body)
    }

    /// Reject responses whose top-level `status_code` is not 20000.
    fn check_status(path: &str, body: Value) -> ClientResult<Value> {
        match body.get("status_code").and_then(Value::as_i64) {
            Some(STATUS_OK) => Ok(body),
            Some(code) => {
                let message = body
                    .get("status_message")
                    .and_then(Value::as_str)
                    .unwrap_or("no status message")
                    .to_string();
                error!("DataForSEO API error on {}: {} {}", path, code, message);
                Err(ClientError::Upstream { code, message })
            }
            None => Err(ClientError::InvalidResponse(
                "missing status_code field".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(server_url: &str) -> DataForSeoClient {
        let api = ApiConfig {
            base_url: server_url.to_string(),
            timeout_secs: 5,
        };
        let credentials = CredentialsConfig {
            login: Some("login@example.com".to_string()),
            password: Some("hunter2".to_string()),
        };
        DataForSeoClient::new(&api, &credentials).unwrap()
    }

    #[test]
    fn test_missing_credentials_fails_fast() {
        let api = ApiConfig::default();
        let client = DataForSeoClient::new(&api, &CredentialsConfig::default()).unwrap();
        let result = tokio_test::block_on(client.post_task("/v3/test", json!({})));
        assert!(matches!(result, Err(ClientError::MissingCredentials)));
    }

    #[test]
    fn test_check_status_ok() {
        let body = json!({"status_code": 20000, "tasks": []});
        assert!(DataForSeoClient::check_status("/v3/test", body).is_ok());
    }

    #[test]
    fn test_check_status_upstream_error() {
        let body = json!({"status_code": 40101, "status_message": "Auth error."});
        let err = DataForSeoClient::check_status("/v3/test", body).unwrap_err();
        match err {
            ClientError::Upstream { code, message } => {
                assert_eq!(code, 40101);
                assert_eq!(message, "Auth error.");
            }
            other => panic!("expected Upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_status_missing_code() {
        let body = json!({"tasks": []});
        let err = DataForSeoClient::check_status("/v3/test", body).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_post_task_wraps_body_and_authenticates() {
        let mut server = mockito::Server::new_async().await;

        // login@example.com:hunter2 base64-encoded
        let mock = server
            .mock("POST", "/v3/dataforseo_labs/amazon/bulk_search_volume/live")
            .match_header(
                "authorization",
                "Basic bG9naW5AZXhhbXBsZS5jb206aHVudGVyMg==",
            )
            .match_body(mockito::Matcher::Json(json!([
                {"keywords": ["computer mouse"], "location_code": 2840}
            ])))
            .with_status(200)
            .with_body(r#"{"status_code": 20000, "tasks": []}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result = client
            .post_task(
                "/v3/dataforseo_labs/amazon/bulk_search_volume/live",
                json!({"keywords": ["computer mouse"], "location_code": 2840}),
            )
            .await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_post_task_surfaces_api_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/v3/test")
            .with_status(200)
            .with_body(r#"{"status_code": 40400, "status_message": "Not Found."}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.post_task("/v3/test", json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Upstream { code: 40400, .. }));
    }

    #[tokio::test]
    async fn test_post_task_surfaces_http_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/v3/test")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.post_task("/v3/test", json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::HttpStatus { status: 500, .. }));
    }
}
