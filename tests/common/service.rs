//! In-memory backend for driving the app without a network

use agora::Agent;
use agora::AgentOrigin;
use agora::api::{AgentService, ApiError, Registration};
use agora::config::Identity;
use std::sync::Mutex;

/// Backend double that keeps created agents in memory
#[derive(Debug, Default)]
pub struct FakeService {
    predefined: Vec<Agent>,
    custom: Mutex<Vec<Agent>>,
    registered: Mutex<Vec<String>>,
    fail_fetch: bool,
    fail_create: bool,
}

impl FakeService {
    /// Backend offering the given `(name, description)` pairs
    pub fn with_agents(agents: &[(&str, &str)]) -> Self {
        Self {
            predefined: agents
                .iter()
                .map(|(name, description)| Agent::new(*name, *description))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every catalog fetch fail
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Make every creation fail
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Usernames registered so far
    pub fn registered(&self) -> Vec<String> {
        self.registered
            .lock()
            .map(|users| users.clone())
            .unwrap_or_default()
    }
}

impl AgentService for FakeService {
    fn fetch_agents(&self) -> Result<Vec<Agent>, ApiError> {
        if self.fail_fetch {
            return Err(ApiError::Status {
                status: 503,
                body: "maintenance".to_string(),
            });
        }
        let custom = self
            .custom
            .lock()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(self
            .predefined
            .iter()
            .cloned()
            .chain(custom.iter().cloned())
            .collect())
    }

    fn register_user(&self, identity: &Identity) -> Result<Registration, ApiError> {
        let mut users = self
            .registered
            .lock()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if users.contains(&identity.username) {
            return Ok(Registration::Rejected("User already exists".to_string()));
        }
        users.push(identity.username.clone());
        Ok(Registration::Registered("User created".to_string()))
    }

    fn create_agent(
        &self,
        draft: &Agent,
        _identity: Option<&Identity>,
    ) -> Result<String, ApiError> {
        if self.fail_create {
            return Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        let mut custom = self
            .custom
            .lock()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        custom.push(draft.clone().with_origin(AgentOrigin::Custom));
        Ok(format!("Custom model '{}' created successfully!", draft.name))
    }
}
