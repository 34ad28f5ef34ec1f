//! Backend health probes
//!
//! Every probe is best-effort: an unreachable or misbehaving backend reads as
//! unhealthy instead of failing.

use lookcircuit_core::BestEffort;
use lookcircuit_domain::Endpoint;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::ApiClient;

#[derive(Debug, Deserialize)]
struct HealthStatus {
    status: String,
}

/// GET `endpoint` and compare its `status` field with `expected`
pub(crate) async fn probe(api: &ApiClient, endpoint: Endpoint, expected: &str) -> BestEffort<bool> {
    let result = api
        .get::<HealthStatus>(endpoint.path())
        .await
        .map(|health| health.status == expected);

    match &result {
        Ok(healthy) => debug!(endpoint = endpoint.path(), healthy, "health probe answered"),
        Err(err) => warn!(endpoint = endpoint.path(), error = %err, "health probe failed"),
    }
    BestEffort::from_result(result)
}

/// Overall backend health
#[derive(Clone)]
pub struct HealthService {
    api: ApiClient,
}

impl HealthService {
    /// Health probes over `api`
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `true` iff `/health` reports `status: "ok"`
    pub async fn check(&self) -> BestEffort<bool> {
        probe(&self.api, Endpoint::Health, "ok").await
    }
}
