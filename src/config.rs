use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub state_dir: PathBuf,
    pub api_base_url: String,
    pub analysis_model: String,
    pub image_model: String,
    pub image_model_pro: String,
    pub temperature: f32,
    pub top_k: i32,
    pub top_p: f32,
    pub max_output_tokens: i32,
    pub safety_settings: String,
    pub request_timeout_secs: u64,
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_i32(name: &str, default: i32) -> i32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn normalize_safety_settings(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "permissive".to_string();
    }

    let lowered = trimmed.to_lowercase();
    match lowered.as_str() {
        "permissive" | "off" | "none" => "permissive".to_string(),
        "standard" => "standard".to_string(),
        _ => {
            warn!(
                "Unknown PRISM_SAFETY_SETTINGS value '{}'; defaulting to permissive.",
                value
            );
            "permissive".to_string()
        }
    }
}

fn resolve_state_dir() -> PathBuf {
    if let Ok(value) = env::var("PRISM_STATE_DIR") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(".prism-studio")
}

impl Config {
    fn load() -> Self {
        Config {
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            state_dir: resolve_state_dir(),
            api_base_url: env_string(
                "PRISM_API_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta",
            ),
            analysis_model: env_string("PRISM_ANALYSIS_MODEL", "gemini-3-flash-preview"),
            image_model: env_string("PRISM_IMAGE_MODEL", "gemini-2.5-flash-image"),
            image_model_pro: env_string("PRISM_IMAGE_MODEL_PRO", "gemini-3-pro-image-preview"),
            temperature: env_f32("PRISM_TEMPERATURE", 0.7),
            top_k: env_i32("PRISM_TOP_K", 40),
            top_p: env_f32("PRISM_TOP_P", 0.95),
            max_output_tokens: env_i32("PRISM_MAX_OUTPUT_TOKENS", 2048),
            safety_settings: normalize_safety_settings(env_string(
                "PRISM_SAFETY_SETTINGS",
                "permissive",
            )),
            request_timeout_secs: env_u64("PRISM_REQUEST_TIMEOUT_SECS", 120),
        }
    }
}
