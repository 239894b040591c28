//! Storyboard prompt planning.
//!
//! [`StoryboardPromptPlanner`] turns a story idea into an ordered list of
//! scene prompts with exactly one structured call to a
//! [`GenerativeTextService`]. Input and credential checks happen first and
//! never reach the network.
//!
//! Every failure is reported twice: once to the [`NotificationSink`] as a
//! short user-facing message, and once to the caller as a
//! [`StoryboardError`] value. Nothing is retried.
//!
//! ```no_run
//! use rstoryboard::{
//!     GeminiClient, LogNotifier, StoryboardPromptPlanner, StudioConfig,
//! };
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let studio = StudioConfig::from_env();
//! let gemini = GeminiClient::new(&studio.gemini)?;
//! let planner = StoryboardPromptPlanner::new(
//!     Arc::new(gemini.text().clone()),
//!     Arc::new(studio),
//!     Arc::new(LogNotifier::new()),
//! );
//!
//! let prompts = planner.generate("A lighthouse keeper finds a message in a bottle", 3).await?;
//! for prompt in prompts {
//!     println!("{}", prompt);
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
    config::DEFAULT_TEXT_MODEL,
    error::{Result, StoryboardError},
    logger,
    models::{parse_scene_prompts, GenerationRequest, Notification, ScenePromptList},
    services::{CredentialStore, GenerativeTextService, NotificationSink, StoryboardHandler},
};
use std::sync::Arc;
use uuid::Uuid;

pub const INVALID_INPUT_TITLE: &str = "Please provide a story idea and a valid number of scenes.";
pub const MISSING_KEY_TITLE: &str = "API Key not found";
pub const MISSING_KEY_DESCRIPTION: &str = "Please add your API key in the settings.";
pub const GENERATION_FAILED_TITLE: &str = "Failed to generate storyboard.";

#[derive(Clone)]
pub struct StoryboardPromptPlanner {
    service: Arc<dyn GenerativeTextService>,
    credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn NotificationSink>,
    model: String,
}

impl StoryboardPromptPlanner {
    pub fn new(
        service: Arc<dyn GenerativeTextService>,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            service,
            credentials,
            notifier,
            model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, story_idea: &str, scene_count: u32) -> Result<ScenePromptList> {
        let request_id = Uuid::new_v4();
        let result = self.plan(request_id, story_idea, scene_count).await;

        match &result {
            Ok(prompts) => log::info!(
                "🎬 [{}] Storyboard ready with {} scene prompts",
                request_id,
                prompts.len()
            ),
            Err(e) => {
                log::warn!("[{}] Storyboard generation failed: {}", request_id, e);
                self.notifier.notify(notification_for(e));
            }
        }

        result
    }

    async fn plan(&self, request_id: Uuid, story_idea: &str, scene_count: u32) -> Result<ScenePromptList> {
        let request = GenerationRequest::new(story_idea, scene_count)?;

        let api_key = self.credentials.get().ok_or_else(|| {
            StoryboardError::MissingCredential("no API key has been saved".into())
        })?;

        log::info!(
            "[{}] Requesting {} scene prompts from {}",
            request_id,
            request.scene_count,
            self.model
        );

        let generated = {
            let _timer = logger::timer("storyboard generation");
            self.service
                .generate(&api_key, &request.to_generative_request(&self.model))
                .await
                .map_err(StoryboardError::into_service)?
        };

        if let Some(reason) = &generated.finish_reason {
            log::debug!("[{}] Finish reason: {}", request_id, reason);
        }

        parse_scene_prompts(&generated.text).map_err(|e| {
            log::error!("[{}] Unparseable storyboard payload: {}", request_id, generated.text);
            e
        })
    }
}

fn notification_for(error: &StoryboardError) -> Notification {
    match error {
        StoryboardError::InvalidInput(_) => Notification::warning(INVALID_INPUT_TITLE),
        StoryboardError::MissingCredential(_) => {
            Notification::error(MISSING_KEY_TITLE).with_description(MISSING_KEY_DESCRIPTION)
        }
        StoryboardError::Service(msg) => {
            Notification::error(GENERATION_FAILED_TITLE).with_description(msg.clone())
        }
        other => Notification::error(GENERATION_FAILED_TITLE).with_description(other.to_string()),
    }
}

/// A planner bound to the caller's dialog hooks.
///
/// The session survives failed attempts so the user can fix the input and try
/// again; only [`StoryboardSession::close`] ends it.
pub struct StoryboardSession<H: StoryboardHandler> {
    planner: StoryboardPromptPlanner,
    handler: H,
}

impl<H: StoryboardHandler> StoryboardSession<H> {
    pub fn new(planner: StoryboardPromptPlanner, handler: H) -> Self {
        Self { planner, handler }
    }

    /// Runs the planner and hands the prompts to `on_submit` only on success.
    pub async fn generate(&self, story_idea: &str, scene_count: u32) -> Result<()> {
        let prompts = self.planner.generate(story_idea, scene_count).await?;
        self.handler.on_submit(prompts);
        Ok(())
    }

    pub fn close(self) {
        self.handler.on_close();
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}
