//! Style recommendations

use lookcircuit_core::BestEffort;
use lookcircuit_domain::{
    AnalysisResult, BodyType, Endpoint, Gender, OccasionOutfit, RecommendationRequest,
    RecommendationsResult, Result,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::health;
use crate::api::ApiClient;

#[derive(Debug, Deserialize)]
struct RecommendationsEnvelope {
    recommendations: RecommendationsResult,
}

#[derive(Debug, Deserialize)]
struct OutfitEnvelope {
    outfit: OccasionOutfit,
}

#[derive(Debug, Deserialize)]
struct OccasionsEnvelope {
    occasions: Vec<String>,
}

/// Turns analysis results into palette, style and grooming advice
#[derive(Clone)]
pub struct RecommendationsService {
    api: ApiClient,
}

impl RecommendationsService {
    /// Recommendation calls over `api`
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Recommendations for an analyzed face
    ///
    /// Pass `Gender::default()` / `BodyType::default()` (male, mesomorph)
    /// when the profile is unknown.
    ///
    /// # Errors
    /// Any [`ApiClient::post`] failure
    #[instrument(skip(self, analysis))]
    pub async fn generate(
        &self,
        analysis: &AnalysisResult,
        gender: Gender,
        body_type: BodyType,
    ) -> Result<RecommendationsResult> {
        let request = RecommendationRequest::from_analysis(analysis, gender, body_type);
        let envelope: RecommendationsEnvelope =
            self.api.post(Endpoint::RecommendationsGenerate.path(), &request).await?;

        info!(season = %envelope.recommendations.color_palette.season, "recommendations generated");
        Ok(envelope.recommendations)
    }

    /// Outfit suggestion for a named occasion
    ///
    /// # Errors
    /// Any [`ApiClient::get`] failure
    #[instrument(skip(self))]
    pub async fn occasion_outfit(&self, occasion: &str, gender: Gender) -> Result<OccasionOutfit> {
        let path = Self::occasion_path(occasion, &gender);
        let envelope: OutfitEnvelope = self.api.get(&path).await?;
        Ok(envelope.outfit)
    }

    /// Occasion names the backend knows; empty on any failure
    pub async fn occasions(&self) -> BestEffort<Vec<String>> {
        let result = self
            .api
            .get::<OccasionsEnvelope>(Endpoint::RecommendationsOccasions.path())
            .await
            .map(|envelope| envelope.occasions);

        let occasions = BestEffort::from_result(result);
        if let Some(reason) = occasions.degraded_reason() {
            warn!(reason, "occasion list unavailable");
        }
        occasions
    }

    /// `true` iff the recommendation backend reports `status: "ready"`
    pub async fn health(&self) -> BestEffort<bool> {
        health::probe(&self.api, Endpoint::RecommendationsHealth, "ready").await
    }

    fn occasion_path(occasion: &str, gender: &Gender) -> String {
        format!(
            "{}/{}?gender={}",
            Endpoint::RecommendationsOccasion.path(),
            urlencoding::encode(occasion),
            urlencoding::encode(gender.as_str())
        )
    }
}
