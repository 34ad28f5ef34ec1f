//! Face analysis types
//!
//! Produced only by the face-analysis endpoint. Scalar fields with a known
//! range are validated newtypes, so an out-of-range value fails decoding
//! instead of reaching the caller.

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Fitzpatrick skin-type classification, 1 (palest) through 6 (darkest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FitzpatrickType(u8);

impl FitzpatrickType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Validate and wrap a raw scale value
    pub fn new(value: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "Fitzpatrick type must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }

    /// Type number, 1 through 6
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for FitzpatrickType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FitzpatrickType> for u8 {
    fn from(value: FitzpatrickType) -> Self {
        value.0
    }
}

/// Model confidence in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Confidence(f32);

impl Confidence {
    /// Confidence in `0.0..=1.0`; anything else is rejected
    pub fn new(value: f32) -> Result<Self, String> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("confidence must be within [0, 1], got {value}"))
        }
    }

    /// Raw confidence value
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Confidence {
    type Error = String;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f32 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl_wire_enum_conversions!(Undertone {
    Warm => "warm",
    Cool => "cool",
    Neutral => "neutral",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Oblong,
    Diamond,
}

impl_wire_enum_conversions!(FaceShape {
    Oval => "oval",
    Round => "round",
    Square => "square",
    Heart => "heart",
    Oblong => "oblong",
    Diamond => "diamond",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairCoverageLevel {
    Full,
    Partial,
    Minimal,
    Bald,
}

impl_wire_enum_conversions!(HairCoverageLevel {
    Full => "full",
    Partial => "partial",
    Minimal => "minimal",
    Bald => "bald",
});

/// Seasonal color-analysis tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl_wire_enum_conversions!(ColorSeason {
    Spring => "spring",
    Summer => "summer",
    Autumn => "autumn",
    Winter => "winter",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTone {
    pub fitzpatrick_type: FitzpatrickType,
    pub undertone: Undertone,
    /// `#rrggbb` sample of the detected skin color
    pub hex_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceShapeResult {
    pub shape: FaceShape,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairCoverage {
    pub level: HairCoverageLevel,
    pub confidence: Confidence,
}

/// Result of a single face analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detected: bool,
    pub skin_tone: SkinTone,
    pub face_shape: FaceShapeResult,
    pub hair_coverage: HairCoverage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_season: Option<ColorSeason>,
    /// Server-side timestamp, passed through as sent (ISO-8601, offset optional)
    pub timestamp: String,
}
