//! Product discovery

use lookcircuit_core::BestEffort;
use lookcircuit_domain::{DiscoverRequest, Endpoint, ProductsByCategory, Result};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::health;
use crate::api::ApiClient;

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    products: ProductsByCategory,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<String>,
}

/// Finds products matching a color palette
#[derive(Clone)]
pub struct ProductsService {
    api: ApiClient,
}

impl ProductsService {
    /// Product lookups over `api`
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Products grouped by category
    ///
    /// # Errors
    /// Any [`ApiClient::post`] failure
    #[instrument(skip_all, fields(categories = request.categories.len(), max_results = request.max_results))]
    pub async fn discover_products(&self, request: &DiscoverRequest) -> Result<ProductsByCategory> {
        let envelope: ProductsEnvelope =
            self.api.post(Endpoint::ProductsDiscover.path(), request).await?;

        debug!(
            groups = envelope.products.len(),
            total = envelope.products.values().map(Vec::len).sum::<usize>(),
            "products discovered"
        );
        Ok(envelope.products)
    }

    /// Category names the backend can search; empty on any failure
    pub async fn categories(&self) -> BestEffort<Vec<String>> {
        let result = self
            .api
            .get::<CategoriesEnvelope>(Endpoint::ProductsCategories.path())
            .await
            .map(|envelope| envelope.categories);

        let categories = BestEffort::from_result(result);
        if let Some(reason) = categories.degraded_reason() {
            warn!(reason, "product categories unavailable");
        }
        categories
    }

    /// `true` iff the product backend reports `status: "ready"`
    pub async fn health(&self) -> BestEffort<bool> {
        health::probe(&self.api, Endpoint::ProductsHealth, "ready").await
    }
}
