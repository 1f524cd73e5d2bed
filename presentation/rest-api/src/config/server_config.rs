use anyhow::Context;
use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Listener settings for the shopping API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: TCP port to bind (default: 8080)
    ///
    /// # Errors
    /// Returns error if SERVICE_PORT is set but is not a valid port number
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn parse(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let ip = ip
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());

        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SERVICE_PORT must be a port number, got '{raw}'"))?,
        };

        Ok(Self { ip, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
