//! Service key authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::error::AppError;

/// Hash a service key for storage and comparison
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

type HmacSha256 = Hmac<Sha256>;

/// Compare a presented key against the configured hash in constant time.
///
/// Both digests are run through one HMAC; `verify_slice` does the comparison.
fn key_matches(api_key: &str, expected_hash: &str) -> bool {
    let expected = match hex::decode(expected_hash) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::error!("Configured service key hash is not valid hex");
            return false;
        }
    };
    let presented = Sha256::digest(api_key.as_bytes());

    let mut reference = match HmacSha256::new_from_slice(&expected) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    let mut candidate = reference.clone();
    reference.update(&expected);
    candidate.update(&presented);

    candidate
        .verify_slice(&reference.finalize().into_bytes())
        .is_ok()
}

/// Extract the key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|k| !k.is_empty())
}

/// Authentication middleware
///
/// Every access-check request must carry a Bearer token. When a service key is
/// configured the token must match it.
pub async fn service_key_middleware(
    State(config): State<Config>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(&request).ok_or(AppError::Unauthorized)?;

    if let Some(expected) = &config.service_key_hash {
        if !key_matches(api_key, expected) {
            tracing::warn!("Rejected request with invalid service key");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
