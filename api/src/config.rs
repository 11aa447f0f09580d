use std::env;

use anyhow::{Context, Result};

use crate::auth::hash_api_key;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// SHA-256 hex of the shared service key front ends present as a Bearer token.
    /// When unset, any Bearer token is accepted (local development).
    pub service_key_hash: Option<String>,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    ///
    /// Secrets are only ever injected here; none are compiled into the binary.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: match env::var("PORT") {
                Ok(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
                Err(_) => 8080,
            },
            service_key_hash: env::var("SERVICE_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .map(|k| hash_api_key(&k)),
        })
    }

    /// Check if a service key is configured
    pub fn service_key_required(&self) -> bool {
        self.service_key_hash.is_some()
    }
}
