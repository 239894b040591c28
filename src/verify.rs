use crate::{
    config::DEFAULT_TEXT_MODEL,
    error::{Result, StoryboardError},
    models::{GenerativeRequest, Notification},
    services::{GenerativeTextService, NotificationSink},
};
use std::sync::Arc;

pub const KEY_VALID_TITLE: &str = "API Key is valid!";
pub const KEY_INVALID_TITLE: &str = "API Key is invalid or call failed.";

const PROBE_CONTENT: &str = "hello";

/// Checks a candidate API key with one minimal generative call.
#[derive(Clone)]
pub struct ApiKeyProbe {
    service: Arc<dyn GenerativeTextService>,
    notifier: Arc<dyn NotificationSink>,
    model: String,
}

impl ApiKeyProbe {
    pub fn new(service: Arc<dyn GenerativeTextService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            service,
            notifier,
            model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn test(&self, api_key: &str) -> Result<()> {
        match self.probe(api_key).await {
            Ok(()) => {
                log::info!("API key accepted by {}", self.model);
                self.notifier.notify(Notification::success(KEY_VALID_TITLE));
                Ok(())
            }
            Err(e) => {
                log::warn!("API key check failed: {}", e);
                let description = match &e {
                    StoryboardError::MissingCredential(msg) => msg.clone(),
                    other => other.to_string(),
                };
                self.notifier
                    .notify(Notification::error(KEY_INVALID_TITLE).with_description(description));
                Err(e)
            }
        }
    }

    async fn probe(&self, api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(StoryboardError::MissingCredential("API Key is not set.".into()));
        }

        self.service
            .generate(api_key, &GenerativeRequest::new(&self.model, PROBE_CONTENT))
            .await
            .map_err(StoryboardError::into_service)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{GeneratedText, Severity},
        services::QueuedNotifier,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct KeyService {
        valid_key: &'static str,
        calls: AtomicUsize,
        last: Mutex<Option<GenerativeRequest>>,
    }

    impl KeyService {
        fn accepting(valid_key: &'static str) -> Arc<Self> {
            Arc::new(Self {
                valid_key,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GenerativeTextService for KeyService {
        async fn generate(&self, api_key: &str, request: &GenerativeRequest) -> Result<GeneratedText> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if api_key == self.valid_key {
                Ok(GeneratedText {
                    text: "Hi there!".into(),
                    model: request.model.clone(),
                    finish_reason: None,
                })
            } else {
                Err(StoryboardError::Service("API key not valid.".into()))
            }
        }
    }

    #[tokio::test]
    async fn test_valid_key_sends_minimal_request() {
        let service = KeyService::accepting("good");
        let notifier = Arc::new(QueuedNotifier::new());
        let probe = ApiKeyProbe::new(service.clone(), notifier.clone());

        probe.test("good").await.unwrap();

        let request = service.last.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.user_content, "hello");
        assert!(request.system_instruction.is_none());
        assert!(request.response_schema.is_none());

        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Success);
        assert_eq!(notes[0].title, KEY_VALID_TITLE);
    }

    #[tokio::test]
    async fn test_rejected_key_reports_service_message() {
        let service = KeyService::accepting("good");
        let notifier = Arc::new(QueuedNotifier::new());
        let probe = ApiKeyProbe::new(service.clone(), notifier.clone());

        let err = probe.test("bad").await.unwrap_err();

        assert!(matches!(err, StoryboardError::Service(_)));
        let notes = notifier.drain();
        assert_eq!(notes[0].severity, Severity::Error);
        assert_eq!(notes[0].title, KEY_INVALID_TITLE);
        assert_eq!(notes[0].description.as_deref(), Some("API key not valid."));
    }

    #[tokio::test]
    async fn test_empty_key_makes_no_call() {
        let service = KeyService::accepting("good");
        let notifier = Arc::new(QueuedNotifier::new());
        let probe = ApiKeyProbe::new(service.clone(), notifier.clone());

        let err = probe.test("").await.unwrap_err();

        assert!(matches!(err, StoryboardError::MissingCredential(_)));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            notifier.drain()[0].description.as_deref(),
            Some("API Key is not set.")
        );
    }
}
