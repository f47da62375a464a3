//! HTTP client for the agent backend.
//!
//! The backend exposes three endpoints used here: `GET /models` for the
//! catalog, `POST /user` to register the signed-in user, and
//! `POST /create_model` to add a custom agent.

use crate::agent::{Agent, AgentOrigin};
use crate::config::{Config, Identity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("backend returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body was not what the endpoint promises
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Outcome of registering the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The backend accepted the user
    Registered(String),
    /// The backend refused with `400`, typically because the user exists
    Rejected(String),
}

/// The backend operations the lobby depends on.
///
/// Implementations are called from worker threads, never from the UI thread.
pub trait AgentService: Send + Sync {
    /// Fetch every agent the backend offers, predefined ones first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    fn fetch_agents(&self) -> Result<Vec<Agent>, ApiError>;

    /// Register the user; repeated registration is harmless
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures and statuses other than `400`.
    fn register_user(&self, identity: &Identity) -> Result<Registration, ApiError>;

    /// Create a custom agent and return the backend's confirmation message
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    fn create_agent(&self, draft: &Agent, identity: Option<&Identity>)
    -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    predefined_models: Vec<Agent>,
    #[serde(default)]
    custom_models: Vec<Agent>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct CreateAgentRequest<'a> {
    name: &'a str,
    description: &'a str,
    goal: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
}

/// Blocking `ureq` client for the agent backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::config::Config::builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent: config.new_agent(),
        }
    }

    /// Create a client from the application configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.request_timeout())
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn read_status_body(response: &mut ureq::http::Response<ureq::Body>) -> String {
    response.body_mut().read_to_string().unwrap_or_default()
}

impl AgentService for ApiClient {
    fn fetch_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let url = self.url("/models");
        debug!(%url, "Fetching agent catalog");
        let mut response = self.agent.get(&url).call()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ApiError::Status {
                status,
                body: read_status_body(&mut response),
            });
        }

        let body: ModelsResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let custom = body
            .custom_models
            .into_iter()
            .map(|agent| agent.with_origin(AgentOrigin::Custom));
        Ok(body.predefined_models.into_iter().chain(custom).collect())
    }

    fn register_user(&self, identity: &Identity) -> Result<Registration, ApiError> {
        let url = self.url("/user");
        debug!(%url, username = %identity.username, "Registering user");
        let mut response = self.agent.post(&url).send_json(identity)?;

        let status = response.status().as_u16();
        if status == 400 {
            let reason = response
                .body_mut()
                .read_json::<ErrorResponse>()
                .map(|body| body.error)
                .unwrap_or_else(|_| "user rejected".to_string());
            return Ok(Registration::Rejected(reason));
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status,
                body: read_status_body(&mut response),
            });
        }

        let body: MessageResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Registration::Registered(body.message))
    }

    fn create_agent(
        &self,
        draft: &Agent,
        identity: Option<&Identity>,
    ) -> Result<String, ApiError> {
        let url = self.url("/create_model");
        debug!(%url, agent = %draft.name, "Creating agent");
        let payload = CreateAgentRequest {
            name: &draft.name,
            description: &draft.description,
            goal: &draft.goal,
            email: identity.map(|i| i.email.as_str()),
            username: identity.map(|i| i.username.as_str()),
        };
        let mut response = self.agent.post(&url).send_json(&payload)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ApiError::Status {
                status,
                body: read_status_body(&mut response),
            });
        }

        let body: MessageResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.message)
    }
}
