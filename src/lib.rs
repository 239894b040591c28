//! Storyboard prompt planning on top of the Gemini API.
//!
//! A story idea goes in, an ordered list of camera-ready scene prompts (one
//! per 8-second clip) comes out. Collaborators such as the credential source
//! and the notification surface are injected through the traits in
//! [`services`].

pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod services;
pub mod verify;

pub use config::{GeminiConfig, StudioConfig};
pub use error::{Result, StoryboardError};
pub use gemini::{GeminiClient, TextClient};
pub use models::{
    AspectRatio, GenerationRequest, GeneratedText, GenerativeRequest, Notification,
    ResponseSchema, ScenePromptList, Severity, VideoModel,
};
pub use planner::{StoryboardPromptPlanner, StoryboardSession};
pub use services::{
    CredentialStore, EnvCredentialStore, GenerativeTextService, LogNotifier, NotificationSink,
    QueuedNotifier, StoryboardHandler,
};
pub use verify::ApiKeyProbe;
