use anyhow::Context;
use std::env;

pub const DEFAULT_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";

/// Bearer token verification settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub project_id: String,
    pub certs_url: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_PROJECT_ID: expected token audience (required)
    /// - AUTH_CERTS_URL: x509 signing certificates endpoint (default: Google secure token)
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id = env::var("AUTH_PROJECT_ID").context("AUTH_PROJECT_ID must be set")?;
        let certs_url = env::var("AUTH_CERTS_URL").unwrap_or_else(|_| DEFAULT_CERTS_URL.to_string());

        Ok(Self::new(project_id, certs_url))
    }

    pub fn new(project_id: String, certs_url: String) -> Self {
        Self {
            project_id,
            certs_url,
        }
    }

    /// Issuer claim the tokens must carry
    pub fn expected_issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}
