use crate::{
    error::Result,
    models::{GeneratedText, GenerativeRequest, Notification, ScenePromptList},
};
use async_trait::async_trait;

/// Read-only access to a previously saved API credential.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<String>;
}

/// A hosted text-generation capability. One call per request, no retries.
#[async_trait]
pub trait GenerativeTextService: Send + Sync {
    async fn generate(&self, api_key: &str, request: &GenerativeRequest) -> Result<GeneratedText>;
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Caller hooks for a storyboard dialog.
pub trait StoryboardHandler: Send + Sync {
    /// Receives the ordered scene prompts after a fully successful generation.
    fn on_submit(&self, prompts: ScenePromptList);

    fn on_close(&self) {}
}
