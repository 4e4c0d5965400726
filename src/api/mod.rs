pub mod gemini;
pub mod media;

use anyhow::Result;
use async_trait::async_trait;

use crate::reference::ReferenceImage;
use crate::types::{AnalysisResult, AspectRatio, ModelTier, PromptFormat, Resolution, UploadedImage};

/// Parameters shared by every request of one generation batch.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub model: ModelTier,
    pub resolution: Resolution,
    /// `None` means "no reference images" — the collaborator treats absence
    /// differently from an empty list.
    pub references: Option<Vec<ReferenceImage>>,
}

/// The external generative collaborator, one method per pipeline stage.
/// The orchestrator only sees this trait; tests drive it with a scripted
/// stub instead of the live HTTP client.
#[async_trait]
pub trait PromptEngine: Send + Sync {
    async fn analyze(
        &self,
        images: &[UploadedImage],
        source_text: &str,
        api_key: &str,
    ) -> Result<AnalysisResult>;

    async fn refine(
        &self,
        prompt: &str,
        modifiers: &str,
        images: &[UploadedImage],
        format: PromptFormat,
        api_key: &str,
    ) -> Result<String>;

    /// Generates a single image, returned as a `data:` URL.
    async fn generate_one(&self, request: &GenerationRequest, api_key: &str) -> Result<String>;
}
