//! GoTrue-compatible identity provider
//!
//! Talks to the `/auth/v1` REST surface of a hosted auth backend using the
//! project's public key. The live session is kept in memory for the lifetime
//! of the provider; durable persistence of the access token is the token
//! store's job.

use chrono::{DateTime, Duration, Utc};
use lookcircuit_core::{IdentityProvider, ProviderAuth, ProviderError, ProviderSession};
use lookcircuit_domain::{AuthUser, IdentityConfig, LookCircuitError};
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::http::{HttpClient, USER_AGENT};

/* -------------------------------------------------------------------------- */
/* Wire types */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: GoTrueUser,
}

/// Sign-up answers with a full session when the account is auto-confirmed,
/// or with the bare user when confirmation is pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(SessionResponse),
    User(GoTrueUser),
}

#[derive(Debug, Default, Deserialize)]
struct GoTrueErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl GoTrueErrorBody {
    fn into_message(self) -> Option<String> {
        [self.msg, self.error_description, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
    }
}

impl From<GoTrueUser> for AuthUser {
    fn from(user: GoTrueUser) -> Self {
        let created_at = user
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc));

        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            name: user.user_metadata.and_then(|meta| meta.name),
            created_at,
        }
    }
}

impl SessionResponse {
    fn into_auth(self) -> ProviderAuth {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| {
                // Out-of-range lifetimes leave the expiry unknown.
                self.expires_in
                    .and_then(Duration::try_seconds)
                    .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            });

        ProviderAuth {
            user: self.user.into(),
            session: Some(ProviderSession {
                access_token: self.access_token,
                refresh_token: self.refresh_token,
                expires_at,
            }),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Provider */
/* -------------------------------------------------------------------------- */

/// Identity provider backed by a GoTrue `/auth/v1` endpoint
pub struct GoTrueIdentityProvider {
    http: HttpClient,
    config: IdentityConfig,
    current: RwLock<Option<ProviderAuth>>,
}

impl GoTrueIdentityProvider {
    /// # Errors
    /// Returns `LookCircuitError::Config` if the URL is empty or the HTTP
    /// client cannot be built
    pub fn new(config: IdentityConfig) -> Result<Self, LookCircuitError> {
        if config.url.trim().is_empty() {
            return Err(LookCircuitError::Config("identity provider URL is empty".into()));
        }
        let http = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config, current: RwLock::new(None) })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.config.url.trim_end_matches('/'), path)
    }

    /// Send one call and return the raw success body
    async fn call(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = self.endpoint(path);
        let bearer = bearer.unwrap_or(&self.config.anon_key);

        let response = self
            .http
            .send(|| {
                let mut request = self
                    .http
                    .request(method.clone(), &url)
                    .header("apikey", &self.config.anon_key)
                    .header(ACCEPT, "application/json")
                    .bearer_auth(bearer);
                if let Some(body) = body {
                    request = request.json(body);
                }
                Ok(request)
            })
            .await
            .map_err(|err| ProviderError::Unavailable(err.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ProviderError::Unavailable(err.to_string()))?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let message = serde_json::from_slice::<GoTrueErrorBody>(&bytes)
            .ok()
            .and_then(GoTrueErrorBody::into_message)
            .unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("Identity provider error").to_string()
            });
        debug!(%status, message = %message, "identity provider refused call");

        if status.is_server_error() {
            Err(ProviderError::Unavailable(message))
        } else {
            Err(ProviderError::Rejected(message))
        }
    }

    async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
        body: Option<&Value>,
    ) -> Result<T, ProviderError> {
        let bytes = self.call(method, path, bearer, body).await?;
        serde_json::from_slice(&bytes).map_err(|err| ProviderError::Malformed(err.to_string()))
    }

    async fn access_token(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .and_then(|auth| auth.session.as_ref())
            .map(|session| session.access_token.clone())
    }
}

#[async_trait::async_trait]
impl IdentityProvider for GoTrueIdentityProvider {
    #[instrument(skip_all)]
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderAuth, ProviderError> {
        let body = json!({ "email": email, "password": password });
        let response: SessionResponse = self
            .call_json(Method::POST, "/token?grant_type=password", None, Some(&body))
            .await?;

        let auth = response.into_auth();
        *self.current.write().await = Some(auth.clone());
        info!(user_id = %auth.user.id, "identity session opened");
        Ok(auth)
    }

    #[instrument(skip_all)]
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<ProviderAuth, ProviderError> {
        let mut body = json!({ "email": email, "password": password });
        if let Some(name) = name {
            body["data"] = json!({ "name": name });
        }

        let response: SignUpResponse =
            self.call_json(Method::POST, "/signup", None, Some(&body)).await?;

        let auth = match response {
            SignUpResponse::Session(session) => {
                let auth = session.into_auth();
                *self.current.write().await = Some(auth.clone());
                auth
            }
            SignUpResponse::User(user) => {
                debug!("account created; confirmation pending");
                ProviderAuth { user: user.into(), session: None }
            }
        };
        info!(user_id = %auth.user.id, "identity account created");
        Ok(auth)
    }

    #[instrument(skip_all)]
    async fn sign_out(&self) -> Result<(), ProviderError> {
        // Local session is dropped before the remote call.
        let Some(token) = self
            .current
            .write()
            .await
            .take()
            .and_then(|auth| auth.session)
            .map(|session| session.access_token)
        else {
            debug!("no identity session to revoke");
            return Ok(());
        };

        self.call(Method::POST, "/logout", Some(&token), None).await?;
        info!("identity session revoked");
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<ProviderSession>, ProviderError> {
        Ok(self.current.read().await.as_ref().and_then(|auth| auth.session.clone()))
    }

    #[instrument(skip_all)]
    async fn get_user(&self) -> Result<Option<AuthUser>, ProviderError> {
        let Some(token) = self.access_token().await else {
            return Ok(None);
        };

        let user: GoTrueUser = self.call_json(Method::GET, "/user", Some(&token), None).await?;
        Ok(Some(user.into()))
    }

    #[instrument(skip_all)]
    async fn refresh_session(&self) -> Result<ProviderSession, ProviderError> {
        let refresh_token = self
            .current
            .read()
            .await
            .as_ref()
            .and_then(|auth| auth.session.as_ref())
            .and_then(|session| session.refresh_token.clone())
            .ok_or(ProviderError::NoSession)?;

        let body = json!({ "refresh_token": refresh_token });
        let response: SessionResponse = self
            .call_json(Method::POST, "/token?grant_type=refresh_token", None, Some(&body))
            .await?;

        let auth = response.into_auth();
        let session = auth.session.clone().ok_or(ProviderError::NoSession)?;
        *self.current.write().await = Some(auth);
        info!("identity session refreshed");
        Ok(session)
    }
}
