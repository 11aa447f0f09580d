//! HTTP client for the CourseGate API
//!
//! The public methods never return errors: a check that cannot be completed is
//! a denial with an unknown reason. Callers should offer a retry, not assume
//! the content is free.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use coursegate_core::{AccessCheck, ContentId, PreviewRole, UserId};

/// HTTP client for communicating with the CourseGate API
#[derive(Clone)]
pub struct AccessClient {
    client: reqwest::Client,
    base_url: String,
}

impl AccessClient {
    /// Create a new client from environment variables
    ///
    /// Required env vars:
    /// - COURSEGATE_API_KEY: The service key issued to this front end
    ///
    /// Optional:
    /// - COURSEGATE_API_URL: Base URL of the API (default http://localhost:8080)
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("COURSEGATE_API_KEY").context("COURSEGATE_API_KEY not set")?;
        let base_url = std::env::var("COURSEGATE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self::new(&base_url, &api_key)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask whether a user may join a live session
    pub async fn validate_session_access(
        &self,
        user_id: &UserId,
        session_id: &ContentId,
        preview_role: Option<PreviewRole>,
    ) -> AccessCheck {
        let request = LiveAccessRequest {
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
            preview_role,
        };

        self.post_json("/check-live-access", &request)
            .await
            .unwrap_or_else(|e| {
                let error = format!("{:#}", e);
                tracing::error!(%error, session_id = %session_id, "Error validating session access");
                AccessCheck::denied(error)
            })
    }

    /// Ask whether a user may play a video
    pub async fn validate_video_access(
        &self,
        user_id: &UserId,
        video_id: &ContentId,
        preview_role: Option<PreviewRole>,
    ) -> AccessCheck {
        let request = VideoAccessRequest {
            video_id: video_id.to_string(),
            user_id: user_id.to_string(),
            preview_role,
        };

        self.post_json("/check-video-access", &request)
            .await
            .unwrap_or_else(|e| {
                let error = format!("{:#}", e);
                tracing::error!(%error, video_id = %video_id, "Error validating video access");
                AccessCheck::denied(error)
            })
    }

    /// Can this user create, update and delete live sessions? `false` on any failure.
    pub async fn can_manage_live_sessions(&self, user_id: &UserId) -> bool {
        let path = format!("/users/{}/can-manage-live-sessions", user_id);
        match self.get_json::<CanManageResponse>(&path).await {
            Ok(response) => response.can_manage,
            Err(e) => {
                tracing::error!(error = %e, user_id = %user_id, "Error checking live session permissions");
                false
            }
        }
    }

    // --- Internal helpers ---

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_json_response(response).await
    }

    async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        handle_json_response(response).await
    }
}

async fn handle_json_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    serde_json::from_str(&body).context("Failed to decode response body")
}

// --- Request / Response Types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LiveAccessRequest {
    session_id: String,
    user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview_role: Option<PreviewRole>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoAccessRequest {
    video_id: String,
    user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview_role: Option<PreviewRole>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CanManageResponse {
    can_manage: bool,
}
