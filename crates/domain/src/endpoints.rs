//! Backend endpoint table
//!
//! Logical operation names mapped to path fragments appended after
//! `base_url + api_version`. The table is fixed at compile time.

/// Known backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    AnalysisFace,
    AnalysisHealth,
    RecommendationsGenerate,
    /// Prefix; the occasion name is appended as a path segment.
    RecommendationsOccasion,
    RecommendationsOccasions,
    RecommendationsHealth,
    ProductsDiscover,
    ProductsCategories,
    ProductsHealth,
    UsersMe,
    UsersProfile,
}

impl Endpoint {
    /// Every endpoint, in declaration order
    pub const ALL: [Self; 12] = [
        Self::Health,
        Self::AnalysisFace,
        Self::AnalysisHealth,
        Self::RecommendationsGenerate,
        Self::RecommendationsOccasion,
        Self::RecommendationsOccasions,
        Self::RecommendationsHealth,
        Self::ProductsDiscover,
        Self::ProductsCategories,
        Self::ProductsHealth,
        Self::UsersMe,
        Self::UsersProfile,
    ];

    /// Path fragment for this endpoint
    pub const fn path(self) -> &'static str {
        match self {
            Self::Health => "/health",
            Self::AnalysisFace => "/analysis/face",
            Self::AnalysisHealth => "/analysis/health",
            Self::RecommendationsGenerate => "/recommendations/generate",
            Self::RecommendationsOccasion => "/recommendations/occasion",
            Self::RecommendationsOccasions => "/recommendations/occasions",
            Self::RecommendationsHealth => "/recommendations/health",
            Self::ProductsDiscover => "/products/discover",
            Self::ProductsCategories => "/products/categories",
            Self::ProductsHealth => "/products/health",
            Self::UsersMe => "/users/me",
            Self::UsersProfile => "/users/profile",
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        self.path()
    }
}
