//! Wiring for a ready-to-use client
//!
//! One [`SessionContext`] is shared by the API client and the auth service,
//! so a token written at sign-in is attached to the next API call.

use std::sync::Arc;

use lookcircuit_core::{AuthService, IdentityProvider, SessionContext, TokenStore};
use lookcircuit_domain::{AppConfig, Result};
use tracing::info;

use crate::api::ApiClient;
use crate::identity::GoTrueIdentityProvider;
use crate::services::{AnalysisService, HealthService, ProductsService, RecommendationsService};
use crate::storage::KeychainTokenStore;

/// Every service of the client, sharing one session
#[derive(Clone)]
pub struct ClientContext {
    pub session: SessionContext,
    pub api: ApiClient,
    pub auth: AuthService,
    pub analysis: AnalysisService,
    pub products: ProductsService,
    pub recommendations: RecommendationsService,
    pub health: HealthService,
}

impl ClientContext {
    /// Build with the GoTrue provider and an explicit token store
    ///
    /// # Errors
    /// Returns `LookCircuitError::Config` if a client cannot be built
    pub fn new(config: AppConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let provider = Arc::new(GoTrueIdentityProvider::new(config.identity.clone())?);
        Self::with_provider(config, store, provider)
    }

    /// Build with the platform keychain as token store
    ///
    /// # Errors
    /// Returns `LookCircuitError::Config` if a client cannot be built
    pub fn with_keychain(config: AppConfig) -> Result<Self> {
        Self::new(config, Arc::new(KeychainTokenStore::default()))
    }

    /// Build with any identity provider
    ///
    /// # Errors
    /// Returns `LookCircuitError::Config` if the API client cannot be built
    pub fn with_provider(
        config: AppConfig,
        store: Arc<dyn TokenStore>,
        provider: Arc<dyn IdentityProvider>,
    ) -> Result<Self> {
        let session = SessionContext::new(store);
        let api = ApiClient::new(config.api, session.clone())?;

        info!(base_url = %api.config().base_url, "client context ready");

        Ok(Self {
            auth: AuthService::new(provider, session.clone()),
            analysis: AnalysisService::new(api.clone()),
            products: ProductsService::new(api.clone()),
            recommendations: RecommendationsService::new(api.clone()),
            health: HealthService::new(api.clone()),
            session,
            api,
        })
    }
}
