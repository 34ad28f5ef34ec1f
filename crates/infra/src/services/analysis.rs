//! Face analysis

use std::path::Path;

use lookcircuit_core::BestEffort;
use lookcircuit_domain::constants::{ANALYSIS_FAILED_MESSAGE, IMAGE_NOT_FOUND_MESSAGE};
use lookcircuit_domain::{AnalysisResult, Endpoint, LookCircuitError, Result};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::health;
use crate::api::{ApiClient, FilePart};

/// Multipart field the backend reads the photo from
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
struct AnalysisEnvelope {
    analysis: AnalysisResult,
}

/// Uploads photos for skin tone, face shape and hair coverage analysis
#[derive(Clone)]
pub struct AnalysisService {
    api: ApiClient,
}

impl AnalysisService {
    /// Analysis uploads over `api`
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Upload the image at `image_path` and return the analysis
    ///
    /// # Errors
    /// - `Validation("Image file not found")` when the path does not exist;
    ///   no request is made
    /// - any [`ApiClient::post_multipart`] failure
    #[instrument(skip(self, image_path), fields(path = %image_path.as_ref().display()))]
    pub async fn analyze_face(&self, image_path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let path = image_path.as_ref();

        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(LookCircuitError::Validation(IMAGE_NOT_FOUND_MESSAGE.to_string()));
        }

        let bytes = tokio::fs::read(path).await.map_err(|err| {
            warn!(error = %err, "failed to read image");
            LookCircuitError::Internal(ANALYSIS_FAILED_MESSAGE.to_string())
        })?;

        let file = FilePart::photo(UPLOAD_FIELD, path, bytes);
        let envelope: AnalysisEnvelope =
            self.api.post_multipart(Endpoint::AnalysisFace.path(), file).await?;

        info!(detected = envelope.analysis.detected, "face analysis complete");
        Ok(envelope.analysis)
    }

    /// `true` iff the analysis backend reports `status: "ready"`
    pub async fn health(&self) -> BestEffort<bool> {
        health::probe(&self.api, Endpoint::AnalysisHealth, "ready").await
    }
}
