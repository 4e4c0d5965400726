use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::CONFIG;

/// A source image loaded from disk, held as base64 so it can be persisted
/// and sent inline without re-reading the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub id: String,
    pub data: String,
    pub mime_type: String,
}

/// One gallery entry. `url` is a `data:` URL as delivered by the engine;
/// entries are prepended newest-first and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub model: String,
}

/// Structured output of the analyze stage. Replaced wholesale on every
/// successful analyze call; field names follow the collaborator's camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub description: String,
    pub subject: String,
    pub style: String,
    pub composition: String,
    pub lighting: String,
    pub suggested_prompt: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
}

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1:1" => Some(AspectRatio::Square),
            "3:4" => Some(AspectRatio::Portrait),
            "4:3" => Some(AspectRatio::Landscape),
            "16:9" => Some(AspectRatio::Wide),
            "9:16" => Some(AspectRatio::Tall),
            _ => None,
        }
    }
}

/// Output resolution. Only honored by the pro model tier; the standard
/// tier always renders at its native size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::OneK => "1K",
            Resolution::TwoK => "2K",
            Resolution::FourK => "4K",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1K" => Some(Resolution::OneK),
            "2K" => Some(Resolution::TwoK),
            "4K" => Some(Resolution::FourK),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    #[default]
    Standard,
    Pro,
}

impl ModelTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelTier::Standard => "standard",
            ModelTier::Pro => "pro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "flash" => Some(ModelTier::Standard),
            "pro" => Some(ModelTier::Pro),
            _ => None,
        }
    }

    /// Concrete model id for this tier, resolved from configuration.
    pub fn model_id(self) -> &'static str {
        match self {
            ModelTier::Standard => CONFIG.image_model.as_str(),
            ModelTier::Pro => CONFIG.image_model_pro.as_str(),
        }
    }

    pub fn honors_resolution(self) -> bool {
        matches!(self, ModelTier::Pro)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PromptFormat {
    #[default]
    Natural,
    Json,
    Yaml,
}

impl PromptFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptFormat::Natural => "natural",
            PromptFormat::Json => "json",
            PromptFormat::Yaml => "yaml",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "natural" | "text" => Some(PromptFormat::Natural),
            "json" => Some(PromptFormat::Json),
            "yaml" => Some(PromptFormat::Yaml),
            _ => None,
        }
    }
}

pub const MIN_IMAGE_COUNT: u8 = 1;
pub const MAX_IMAGE_COUNT: u8 = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
    pub model: ModelTier,
    pub count: u8,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            aspect_ratio: AspectRatio::default(),
            resolution: Resolution::default(),
            model: ModelTier::default(),
            count: MIN_IMAGE_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: String,
    pub name: String,
    pub secret: String,
    pub created_at: DateTime<Utc>,
}

pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_round_trips_through_display_form() {
        for ratio in [
            AspectRatio::Square,
            AspectRatio::Portrait,
            AspectRatio::Landscape,
            AspectRatio::Wide,
            AspectRatio::Tall,
        ] {
            assert_eq!(AspectRatio::parse(ratio.as_str()), Some(ratio));
        }
        assert_eq!(AspectRatio::parse("2:1"), None);
    }

    #[test]
    fn enums_serialize_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&AspectRatio::Wide).unwrap(),
            "\"16:9\""
        );
        assert_eq!(serde_json::to_string(&Resolution::FourK).unwrap(), "\"4K\"");
        assert_eq!(
            serde_json::to_string(&PromptFormat::Yaml).unwrap(),
            "\"yaml\""
        );
    }

    #[test]
    fn only_pro_tier_honors_resolution() {
        assert!(ModelTier::Pro.honors_resolution());
        assert!(!ModelTier::Standard.honors_resolution());
    }
}
