use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;
use thiserror::Error;

use business::domain::shared::value_objects::UserId;

use crate::config::auth_config::AuthConfig;

const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth.config_missing")]
    ConfigMissing,
    #[error("auth.certs_fetch_failed: {0}")]
    CertsFetch(String),
    #[error("auth.cert_decode_failed: {0}")]
    CertDecode(String),
    #[error("auth.cache_poisoned")]
    CachePoisoned,
    #[error("auth.invalid_token_header: {0}")]
    InvalidHeader(String),
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.token_validation_failed: {0}")]
    Validation(String),
    #[error("auth.blank_subject")]
    BlankSubject,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TokenClaims {
    sub: String,
    iss: String,
    aud: String,
    exp: u64,
    iat: u64,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// Signing certificates keyed by `kid`, refreshed once they are older than an hour.
struct CertCache {
    entry: RwLock<Option<CachedCerts>>,
}

impl CertCache {
    fn new() -> Self {
        Self {
            entry: RwLock::new(None),
        }
    }

    fn fresh_keys(&self) -> Result<Option<HashMap<String, DecodingKey>>, AuthError> {
        let entry = self.entry.read().map_err(|_| AuthError::CachePoisoned)?;
        Ok(entry
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < CACHE_TTL)
            .map(|cached| cached.keys.clone()))
    }

    fn store(&self, keys: HashMap<String, DecodingKey>) -> Result<(), AuthError> {
        let mut entry = self.entry.write().map_err(|_| AuthError::CachePoisoned)?;
        *entry = Some(CachedCerts {
            keys,
            fetched_at: Instant::now(),
        });
        Ok(())
    }

    async fn keys(&self, certs_url: &str) -> Result<HashMap<String, DecodingKey>, AuthError> {
        if let Some(keys) = self.fresh_keys()? {
            return Ok(keys);
        }

        let keys = fetch_certs(certs_url).await?;
        self.store(keys.clone())?;
        Ok(keys)
    }
}

static CERTS: Lazy<CertCache> = Lazy::new(CertCache::new);

async fn fetch_certs(certs_url: &str) -> Result<HashMap<String, DecodingKey>, AuthError> {
    let response: HashMap<String, String> = reqwest::get(certs_url)
        .await
        .map_err(|e| AuthError::CertsFetch(e.to_string()))?
        .json()
        .await
        .map_err(|e| AuthError::CertsFetch(e.to_string()))?;

    response
        .into_iter()
        .map(|(kid, pem)| {
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .map(|key| (kid, key))
                .map_err(|e| AuthError::CertDecode(e.to_string()))
        })
        .collect()
}

/// Verifies an RS256 token against the known signing keys and returns its subject.
fn verify_token(
    token: &str,
    keys: &HashMap<String, DecodingKey>,
    config: &AuthConfig,
) -> Result<UserId, AuthError> {
    let header = decode_header(token).map_err(|e| AuthError::InvalidHeader(e.to_string()))?;
    let kid = header.kid.ok_or(AuthError::MissingKid)?;
    let decoding_key = keys.get(&kid).ok_or(AuthError::UnknownKid)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[config.expected_issuer()]);
    validation.validate_exp = true;

    let token_data = decode::<TokenClaims>(token, decoding_key, &validation)
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    UserId::from_subject(&token_data.claims.sub).ok_or(AuthError::BlankSubject)
}

/// Bearer token authentication. Resolves to the caller's user id.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub UserId);

async fn bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<UserId> {
    let result = async {
        let config = req.data::<AuthConfig>().ok_or(AuthError::ConfigMissing)?;
        let keys = CERTS.keys(&config.certs_url).await?;
        verify_token(&bearer.token, &keys, config)
    }
    .await;

    match result {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
