//! Domain types and models

pub mod analysis;
pub mod products;
pub mod recommendations;
pub mod user;

pub use analysis::{
    AnalysisResult, ColorSeason, Confidence, FaceShape, FaceShapeResult, FitzpatrickType,
    HairCoverage, HairCoverageLevel, SkinTone, Undertone,
};
pub use products::{DiscoverRequest, Product, ProductsByCategory};
pub use recommendations::{
    BodyType, ColorPalette, Gender, GroomingRecommendations, OccasionOutfit,
    RecommendationRequest, RecommendationsResult, StyleRecommendations,
};
pub use user::AuthUser;
