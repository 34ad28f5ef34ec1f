//! Style recommendation types
//!
//! Everything here is computed server-side; the client only marshals the
//! request and unmarshals the result.

use serde::{Deserialize, Serialize};

use super::analysis::{
    AnalysisResult, ColorSeason, FaceShape, FitzpatrickType, HairCoverageLevel, Undertone,
};
use crate::impl_wire_enum_conversions;

/// Gender sent to the recommendation backend
///
/// Tags the backend adds later travel through [`Gender::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other(String),
}

impl_wire_enum_conversions!(Gender {
    Male => "male",
    Female => "female",
    _ => Other,
});

/// Somatotype used to tailor fit recommendations
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BodyType {
    Ectomorph,
    #[default]
    Mesomorph,
    Endomorph,
    Other(String),
}

impl_wire_enum_conversions!(BodyType {
    Ectomorph => "ectomorph",
    Mesomorph => "mesomorph",
    Endomorph => "endomorph",
    _ => Other,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub season: ColorSeason,
    pub best_colors: Vec<String>,
    pub neutral_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecommendations {
    pub necklines: Vec<String>,
    pub patterns: Vec<String>,
    pub fits: Vec<String>,
    pub fabrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomingRecommendations {
    pub hairstyles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beard_styles: Option<Vec<String>>,
    pub tips: Vec<String>,
}

/// Full personalized recommendation set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsResult {
    pub color_palette: ColorPalette,
    pub style: StyleRecommendations,
    pub grooming: GroomingRecommendations,
    pub reasoning: String,
}

/// Outfit suggestion for a named occasion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccasionOutfit {
    pub occasion: String,
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    pub accessories: Vec<String>,
    pub grooming_notes: String,
    pub color_suggestions: Vec<String>,
}

/// Flat request body for recommendation generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub fitzpatrick_type: FitzpatrickType,
    pub undertone: Undertone,
    pub face_shape: FaceShape,
    pub body_type: BodyType,
    pub hair_coverage: HairCoverageLevel,
    pub gender: Gender,
}

impl RecommendationRequest {
    /// Flatten an analysis plus the caller's profile into a request body
    pub fn from_analysis(analysis: &AnalysisResult, gender: Gender, body_type: BodyType) -> Self {
        Self {
            fitzpatrick_type: analysis.skin_tone.fitzpatrick_type,
            undertone: analysis.skin_tone.undertone,
            face_shape: analysis.face_shape.shape,
            body_type,
            hair_coverage: analysis.hair_coverage.level,
            gender,
        }
    }
}
