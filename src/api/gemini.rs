use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::api::media::to_data_url;
use crate::api::{GenerationRequest, PromptEngine};
use crate::config::CONFIG;
use crate::types::{AnalysisResult, PromptFormat, UploadedImage};
use crate::utils::http::get_http_client;
use crate::utils::timing::log_engine_timing;

const ANALYZE_INSTRUCTION: &str = "Analyze the provided source material (which may be text, images, or both) in extreme detail.\n\nIf text is provided, treat it as the core concept to visualize.\nIf images are provided, analyze their visual attributes.\nIf both, combine the text concept with the visual style/subject of the images.\n\nOutput a JSON object with the following schema:\n- description: A detailed paragraph describing the concept or image.\n- subject: The main subject matter.\n- style: The artistic style or visual aesthetic.\n- composition: The framing and perspective.\n- lighting: The lighting conditions.\n- suggestedPrompt: A highly optimized text prompt that could be used to generate this visualization.";

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

fn redact_secret(text: &str, api_key: &str) -> String {
    let key = api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn build_safety_settings() -> Vec<Value> {
    let threshold = match CONFIG.safety_settings.as_str() {
        "standard" => "BLOCK_MEDIUM_AND_ABOVE",
        _ => "OFF",
    };

    vec![
        json!({ "category": "HARM_CATEGORY_HARASSMENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_CIVIC_INTEGRITY", "threshold": threshold }),
    ]
}

fn summarize_parts(parts: &[Value]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| {
            if let Some(text) = part.get("text").and_then(|value| value.as_str()) {
                json!({ "text": truncate_for_log(text, 200) })
            } else if let Some(inline_data) = part.get("inlineData") {
                let mime_type = inline_data
                    .get("mimeType")
                    .and_then(|value| value.as_str())
                    .unwrap_or("unknown");
                let data_len = inline_data
                    .get("data")
                    .and_then(|value| value.as_str())
                    .map(|value| value.len())
                    .unwrap_or(0);
                json!({ "inlineData": { "mimeType": mime_type, "dataLen": data_len } })
            } else {
                json!({ "unknownPart": true })
            }
        })
        .collect()
}

fn summarize_payload(payload: &Value) -> Value {
    let mut summary = Map::new();

    if let Some(contents) = payload.get("contents").and_then(|value| value.as_array()) {
        let mut summarized = Vec::new();
        for content in contents {
            let parts = content
                .get("parts")
                .and_then(|value| value.as_array())
                .map(|parts| summarize_parts(parts))
                .unwrap_or_default();
            summarized.push(json!({ "parts": parts }));
        }
        summary.insert("contents".to_string(), Value::Array(summarized));
    }

    if let Some(config) = payload.get("generationConfig") {
        summary.insert("generationConfig".to_string(), config.clone());
    }

    Value::Object(summary)
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

fn inline_data_part(mime_type: &str, base64_data: &str) -> Value {
    json!({
        "inlineData": {
            "mimeType": mime_type,
            "data": base64_data,
        }
    })
}

fn extract_text_from_response(response: GeminiResponse) -> String {
    let mut text_parts = Vec::new();
    for candidate in response.candidates.unwrap_or_default() {
        if let Some(content) = candidate.content {
            if let Some(parts) = content.parts {
                for part in parts {
                    if let GeminiPart::Text { text } = part {
                        if !text.trim().is_empty() {
                            text_parts.push(text);
                        }
                    }
                }
            }
        }
    }
    text_parts.join("\n")
}

/// First image payload in the response, if any.
fn extract_image_from_response(response: GeminiResponse) -> Option<(String, String)> {
    for candidate in response.candidates.unwrap_or_default() {
        if let Some(content) = candidate.content {
            if let Some(parts) = content.parts {
                for part in parts {
                    if let GeminiPart::InlineData { inline_data } = part {
                        if inline_data.mime_type.starts_with("image/") {
                            return Some((inline_data.mime_type, inline_data.data));
                        }
                    }
                }
            }
        }
    }
    None
}

/// One `generateContent` round trip. Single attempt: a failed request is a
/// failed stage, retry policy lives with the user.
async fn call_api(model: &str, payload: Value, api_key: &str) -> Result<GeminiResponse> {
    let client = get_http_client();
    let url = format!(
        "{}/models/{}:generateContent?key={}",
        CONFIG.api_base_url.trim_end_matches('/'),
        model,
        api_key
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!(target: "studio.engine", model = model, payload = %summarize_payload(&payload));
    }

    let response = client
        .post(&url)
        .timeout(Duration::from_secs(CONFIG.request_timeout_secs))
        .json(&payload)
        .send()
        .await
        .map_err(|err| {
            let err_text = redact_secret(&err.to_string(), api_key);
            warn!(
                "Engine request failed to send: {} (timeout={}, connect={})",
                err_text,
                err.is_timeout(),
                err.is_connect()
            );
            anyhow!("engine request failed: {err_text}")
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, body_summary) = summarize_error_body(&body);
        warn!("Engine API error: status={}, body={}", status, body_summary);
        let detail = message.unwrap_or(body_summary);
        return Err(anyhow!(
            "engine request failed with status {}: {}",
            status,
            redact_secret(&detail, api_key)
        ));
    }

    Ok(response.json::<GeminiResponse>().await?)
}

fn refine_format_instructions(format: PromptFormat) -> &'static str {
    match format {
        PromptFormat::Natural => "Write a descriptive natural language paragraph.",
        PromptFormat::Json => {
            "Return a valid JSON object containing detailed keys for image generation such as \
             'subject', 'medium', 'style', 'lighting', 'color_palette', 'composition', and \
             'additional_details'."
        }
        PromptFormat::Yaml => {
            "Return a valid YAML object containing detailed keys for image generation such as \
             'subject', 'medium', 'style', 'lighting', 'color_palette', 'composition', and \
             'additional_details'. Do NOT use markdown code blocks."
        }
    }
}

/// Live HTTP client for the Gemini `generateContent` API.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiClient;

#[async_trait]
impl PromptEngine for GeminiClient {
    async fn analyze(
        &self,
        images: &[UploadedImage],
        source_text: &str,
        api_key: &str,
    ) -> Result<AnalysisResult> {
        let mut parts = Vec::new();
        let source = source_text.trim();
        if !source.is_empty() {
            parts.push(json!({
                "text": format!("User provided context/prompt for analysis: \"{source}\"")
            }));
        }
        for image in images {
            parts.push(inline_data_part(&image.mime_type, &image.data));
        }
        parts.push(json!({ "text": ANALYZE_INSTRUCTION }));

        let payload = json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": {
                "temperature": CONFIG.temperature,
                "topK": CONFIG.top_k,
                "topP": CONFIG.top_p,
                "maxOutputTokens": CONFIG.max_output_tokens,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "description": { "type": "STRING" },
                        "subject": { "type": "STRING" },
                        "style": { "type": "STRING" },
                        "composition": { "type": "STRING" },
                        "lighting": { "type": "STRING" },
                        "suggestedPrompt": { "type": "STRING" }
                    },
                    "required": [
                        "description", "subject", "style",
                        "composition", "lighting", "suggestedPrompt"
                    ]
                }
            },
            "safetySettings": build_safety_settings(),
        });

        let model = CONFIG.analysis_model.as_str();
        log_engine_timing("gemini", model, "analyze", || async {
            let response = call_api(model, payload, api_key).await?;
            let text = extract_text_from_response(response);
            if text.trim().is_empty() {
                return Err(anyhow!("empty analysis response from engine"));
            }
            serde_json::from_str::<AnalysisResult>(&text)
                .map_err(|err| anyhow!("unparseable analysis response: {err}"))
        })
        .await
    }

    async fn refine(
        &self,
        prompt: &str,
        modifiers: &str,
        images: &[UploadedImage],
        format: PromptFormat,
        api_key: &str,
    ) -> Result<String> {
        let mut parts = Vec::new();
        for image in images {
            parts.push(inline_data_part(&image.mime_type, &image.data));
        }
        let instruction = format!(
            "I have an image prompt: \"{prompt}\".\n\n\
             I want to refine this prompt with the following specific requirements/modifiers:\n\
             \"{modifiers}\"\n\n\
             Based on the visual context of the attached images (if any) and the modifiers, \
             write a new, high-quality prompt suitable for an image generation model.\n\n\
             FORMATTING REQUIREMENT: {}\n\n\
             Return ONLY the raw content.",
            refine_format_instructions(format)
        );
        parts.push(json!({ "text": instruction }));

        let mut generation_config = json!({
            "temperature": CONFIG.temperature,
            "topK": CONFIG.top_k,
            "topP": CONFIG.top_p,
            "maxOutputTokens": CONFIG.max_output_tokens,
        });
        if format == PromptFormat::Json {
            if let Some(config_object) = generation_config.as_object_mut() {
                config_object.insert("responseMimeType".to_string(), json!("application/json"));
            }
        }

        let payload = json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": generation_config,
            "safetySettings": build_safety_settings(),
        });

        let model = CONFIG.analysis_model.as_str();
        log_engine_timing("gemini", model, "refine", || async {
            let response = call_api(model, payload, api_key).await?;
            let text = extract_text_from_response(response);
            if text.trim().is_empty() {
                return Err(anyhow!("empty refinement response from engine"));
            }
            Ok(text)
        })
        .await
    }

    async fn generate_one(&self, request: &GenerationRequest, api_key: &str) -> Result<String> {
        let mut parts = vec![json!({ "text": request.prompt })];
        if let Some(references) = &request.references {
            for image in references {
                parts.push(inline_data_part(&image.mime_type, &image.data));
            }
        }

        let mut image_config = Map::new();
        image_config.insert(
            "aspectRatio".to_string(),
            json!(request.aspect_ratio.as_str()),
        );
        if request.model.honors_resolution() {
            image_config.insert("imageSize".to_string(), json!(request.resolution.as_str()));
        }

        let payload = json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "imageConfig": Value::Object(image_config),
            },
            "safetySettings": build_safety_settings(),
        });

        let model = request.model.model_id();
        log_engine_timing("gemini", model, "generate", || async {
            let response = call_api(model, payload, api_key).await?;
            let (mime_type, data) = extract_image_from_response(response)
                .ok_or_else(|| anyhow!("no image data returned by model {model}"))?;
            Ok(to_data_url(&mime_type, &data))
        })
        .await
    }
}
