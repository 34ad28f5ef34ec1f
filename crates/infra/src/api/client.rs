//! Backend API client
//!
//! Builds requests against `base_url + api_version + path`, injects the
//! session's bearer token, runs each call under a deadline and normalizes
//! every outcome into `Result<T, LookCircuitError>`.

use std::sync::Arc;

use lookcircuit_core::SessionContext;
use lookcircuit_domain::{ApiConfig, LookCircuitError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::upload::FilePart;
use crate::errors::from_reqwest;
use crate::http::{HttpClient, USER_AGENT};

const JSON: &str = "application/json";

/// API client bound to one configuration and one session
#[derive(Clone)]
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    session: SessionContext,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `LookCircuitError::Config` if the HTTP client cannot be built
    pub fn new(config: ApiConfig, session: SessionContext) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .max_attempts(config.max_retries as usize + 1)
            .base_backoff(config.retry_delay())
            .build()?;

        Ok(Self { http_client: Arc::new(http_client), session, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Session whose token is attached to requests
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Full URL for an endpoint path
    pub fn build_url(&self, path: &str) -> String {
        self.config.build_url(path)
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let result = self.execute(Method::GET, path, Ok).await;
        if result.is_ok() {
            info!(path = %path, "GET request successful");
        }
        result
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|err| {
            LookCircuitError::Internal(format!("failed to serialize request body: {err}"))
        })?;

        let result = self
            .execute(Method::POST, path, |request| {
                Ok(request.header(CONTENT_TYPE, JSON).body(payload.clone()))
            })
            .await;
        if result.is_ok() {
            info!(path = %path, "POST request successful");
        }
        result
    }

    /// Execute a multipart POST carrying one file part
    ///
    /// `Content-Type` is left to the transport so the boundary is included.
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, file), fields(path = %path, file_name = %file.file_name(), bytes = file.len()))]
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, file: FilePart) -> Result<T> {
        let result =
            self.execute(Method::POST, path, |request| Ok(request.multipart(file.to_form()?))).await;
        if result.is_ok() {
            info!(path = %path, "multipart POST request successful");
        }
        result
    }

    async fn execute<T, F>(&self, method: Method, path: &str, mut decorate: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnMut(RequestBuilder) -> Result<RequestBuilder>,
    {
        let url = self.build_url(path);
        // Token is read once; retries reuse the same snapshot.
        let authorization = self.session.authorization_header().await;
        let deadline = self.config.timeout();

        debug!(%method, url = %url, authenticated = authorization.is_some(), "dispatching request");

        let client = &self.http_client;
        let call = async {
            let response = client
                .send(|| {
                    let mut request = client.request(method.clone(), &url).header(ACCEPT, JSON);
                    if let Some(value) = &authorization {
                        request = request.header(AUTHORIZATION, value);
                    }
                    decorate(request)
                })
                .await?;
            Self::read_response(response).await
        };

        match tokio::time::timeout(deadline, call).await {
            Ok(result) => {
                if let Err(err) = &result {
                    warn!(category = err.label(), status = ?err.status(), error = %err, "request failed");
                }
                result
            }
            Err(_) => {
                warn!(timeout_ms = self.config.timeout_ms, "request deadline elapsed");
                Err(LookCircuitError::Network)
            }
        }
    }

    async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &body));
        }

        // 204/205 carry no body
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|err| {
                LookCircuitError::Decode(format!("empty {} response: {err}", status.as_u16()))
            });
        }

        let body = response.bytes().await.map_err(from_reqwest)?;
        serde_json::from_slice(&body).map_err(|err| LookCircuitError::Decode(err.to_string()))
    }

    /// Server message from an error body: string `detail`, then `message`,
    /// then the status' canonical reason.
    fn map_status_error(status: StatusCode, body: &[u8]) -> LookCircuitError {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            detail: Option<serde_json::Value>,
            #[serde(default)]
            message: Option<serde_json::Value>,
        }

        let from_body = serde_json::from_slice::<ErrorBody>(body).ok().and_then(|body| {
            let pick = |value: Option<serde_json::Value>| match value {
                Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
                _ => None,
            };
            pick(body.detail).or_else(|| pick(body.message))
        });

        let message = from_body.unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
        });

        LookCircuitError::Server { status: status.as_u16(), message }
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    session: Option<SessionContext>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session whose token is attached to requests
    pub fn session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the session is missing or client creation fails
    pub fn build(self) -> Result<ApiClient> {
        let config = self.config.unwrap_or_default();
        let session =
            self.session.ok_or_else(|| LookCircuitError::Config("session not set".to_string()))?;

        ApiClient::new(config, session)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
        let config = ApiConfig::with_base_url(server.uri());
        let session = match token {
            Some(token) => SessionContext::new(Arc::new(
                lookcircuit_core::MemoryTokenStore::with_token(token),
            )),
            None => SessionContext::in_memory(),
        };
        ApiClient::new(config, session).unwrap()
    }

    #[test]
    fn status_error_prefers_detail() {
        let err = ApiClient::map_status_error(
            StatusCode::UNAUTHORIZED,
            br#"{"detail":"Invalid token","message":"ignored"}"#,
        );
        assert_eq!(err, LookCircuitError::Server { status: 401, message: "Invalid token".into() });
    }

    #[test]
    fn status_error_falls_back_to_message_field() {
        let err = ApiClient::map_status_error(StatusCode::BAD_REQUEST, br#"{"message":"Bad palette"}"#);
        assert_eq!(err.to_string(), "Bad palette");
    }

    #[test]
    fn status_error_ignores_structured_detail() {
        let err = ApiClient::map_status_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#,
        );
        assert_eq!(err.to_string(), "Unprocessable Entity");
    }

    #[test]
    fn status_error_uses_reason_for_non_json_body() {
        let err = ApiClient::map_status_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Bad Gateway");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn build_url_joins_version_prefix() {
        let config = ApiConfig::with_base_url("http://localhost:8000/");
        let client = ApiClient::new(config, SessionContext::in_memory()).unwrap();
        assert_eq!(client.build_url("/products/discover"), "http://localhost:8000/api/v1/products/discover");
    }

    #[test]
    fn builder_requires_session() {
        assert!(matches!(ApiClient::builder().build(), Err(LookCircuitError::Config(_))));
        assert!(ApiClient::builder().session(SessionContext::in_memory()).build().is_ok());
    }

    #[tokio::test]
    async fn get_decodes_json_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/test"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(TestResponse { message: "success".into() }),
            )
            .mount(&server)
            .await;

        let result: TestResponse = client(&server, Some("test-token")).get("/test").await.unwrap();
        assert_eq!(result.message, "success");
    }

    #[tokio::test]
    async fn get_with_204_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/no-content"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result: Result<()> = client(&server, None).get("/no-content").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn schema_mismatch_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"msg": 1})))
            .mount(&server)
            .await;

        let err = client(&server, None).get::<TestResponse>("/test").await.unwrap_err();
        assert!(matches!(err, LookCircuitError::Decode(_)));
        assert_eq!(err.to_string(), "Unexpected response from server");
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/create"))
            .and(wiremock::matchers::header("Content-Type", "application/json"))
            .and(wiremock::matchers::body_json(serde_json::json!({"data": "test"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(TestResponse { message: "created".into() }),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result: TestResponse = client(&server, None)
            .post("/create", &serde_json::json!({"data": "test"}))
            .await
            .unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn server_error_is_not_retried_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/error"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal server error"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server, None).get::<TestResponse>("/error").await.unwrap_err();
        assert_eq!(
            err,
            LookCircuitError::Server { status: 500, message: "Internal Server Error".into() }
        );
    }
}
