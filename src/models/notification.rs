use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// A short user-facing status message, rendered by the host as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Error)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Warning)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Info)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
