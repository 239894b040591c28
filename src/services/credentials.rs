use crate::{config::StudioConfig, services::traits::CredentialStore};
use std::env;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

impl CredentialStore for StudioConfig {
    fn get(&self) -> Option<String> {
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// Reads the credential from the environment on every call.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    var: String,
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self {
            var: API_KEY_ENV.to_string(),
        }
    }
}

impl EnvCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialStore for EnvCredentialStore {
    fn get(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}
