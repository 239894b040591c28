use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryboardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Missing credential: {0}")]
    MissingCredential(String),
    /// The generative call itself failed. The message is forwarded untouched.
    #[error("{0}")]
    Service(String),
    #[error("Failed to parse storyboard response: {0}")]
    ResponseParse(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoryboardError {
    /// Folds backend-side failures into a `Service` error so callers see one
    /// kind per failed call.
    pub fn into_service(self) -> Self {
        match self {
            StoryboardError::Service(_) => self,
            other => StoryboardError::Service(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoryboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_is_verbatim() {
        let err = StoryboardError::Service("quota exceeded".into());
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_into_service_wraps_other_kinds() {
        let err = StoryboardError::Config("bad timeout".into()).into_service();
        match err {
            StoryboardError::Service(msg) => assert_eq!(msg, "Configuration error: bad timeout"),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }
}
