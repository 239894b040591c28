use crate::models::{AspectRatio, VideoModel};
use std::env;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const MIN_CREATIONS: u32 = 1;
pub const MAX_CREATIONS: u32 = 4;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            base_url: None,
            model: None,
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("GEMINI_BASE_URL").ok().filter(|s| !s.is_empty());
        let model = env::var("GEMINI_MODEL").ok().filter(|s| !s.is_empty());
        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        GeminiConfig {
            base_url,
            model,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// User preferences and credential, injected into the planner instead of
/// being looked up from ambient storage.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub api_key: Option<String>,
    pub number_of_creations: u32,
    pub aspect_ratio: AspectRatio,
    pub video_model: VideoModel,
    pub gemini: GeminiConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            api_key: None,
            number_of_creations: MIN_CREATIONS,
            aspect_ratio: AspectRatio::default(),
            video_model: VideoModel::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty());
        let number_of_creations = env::var("NUMBER_OF_CREATIONS")
            .ok()
            .map(|s| parse_creations(&s))
            .unwrap_or(MIN_CREATIONS);
        let aspect_ratio = env::var("ASPECT_RATIO")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let video_model = env::var("VEO_MODEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        StudioConfig {
            api_key,
            number_of_creations,
            aspect_ratio,
            video_model,
            gemini: GeminiConfig::from_env(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_number_of_creations(mut self, count: u32) -> Self {
        self.number_of_creations = count.clamp(MIN_CREATIONS, MAX_CREATIONS);
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_video_model(mut self, video_model: VideoModel) -> Self {
        self.video_model = video_model;
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }
}

/// Unparseable input falls back to a single creation.
fn parse_creations(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 1)
        .map(|n| n.min(MAX_CREATIONS as i64) as u32)
        .unwrap_or(MIN_CREATIONS)
}
