//! Product discovery types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_RESULTS;

/// A purchasable product returned by discovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    /// ISO-4217 currency code
    pub currency: String,
    pub image_url: String,
    pub product_url: String,
    pub category: String,
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub in_stock: bool,
}

/// Discovery results keyed by category name
pub type ProductsByCategory = BTreeMap<String, Vec<Product>>;

/// Body of a product discovery request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverRequest {
    pub color_palette: Vec<String>,
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    pub max_results: u32,
}

impl DiscoverRequest {
    /// Request with no occasion filter and the default result cap
    pub fn new<P, C>(color_palette: P, categories: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            color_palette: color_palette.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
            occasion: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Restrict results to an occasion
    pub fn occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    /// Cap results per category
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}
