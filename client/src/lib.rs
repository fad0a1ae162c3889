//! A small client handle for talking to the MedTagger backend.
//!
//! The client never looks up configuration on its own: callers hand it the
//! environment record it should use, which keeps tests free to pass in any
//! record they like.

use std::ops::Deref;
use std::time::Duration;

use thiserror::Error;
use ureq::{Agent, AgentBuilder};

use medtagger_config::EnvironmentConfig;

/// Default timeout that we use on client types.
pub(crate) fn default_timeout() -> Duration {
    Duration::from_millis(5000)
}

/// Various errors that can happen during a request.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] ureq::Error),

    #[error("{0}")]
    IO(#[from] std::io::Error),

    #[error("Unexpected response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// A wrapper type that dereferences to a `ureq::Agent` and remembers which
/// environment it was built for.
///
/// You can clone this with little cost and pass it freely to other threads, as
/// the agent manages its connection pool with `Arc` under the hood.
#[derive(Clone, Debug)]
pub struct APIClient {
    agent: Agent,
    config: EnvironmentConfig,
}

impl APIClient {
    /// Creates and initializes a new APIClient for the given record.
    pub fn new(config: &EnvironmentConfig, version: &str) -> Self {
        let agent = AgentBuilder::new()
            .max_idle_connections(5)
            .timeout(default_timeout())
            .user_agent(&user_agent(config, version))
            .build();

        tracing::debug!(api_url = %config.api_url(), "Created API client");

        Self {
            agent,
            config: config.clone(),
        }
    }

    /// The record this client was configured with.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn is_production(&self) -> bool {
        self.config.is_production()
    }

    /// The full address for an API path, e.g. `/users`.
    pub fn endpoint(&self, path: &str) -> String {
        self.config.api_endpoint(path)
    }

    pub fn websocket_url(&self) -> &str {
        self.config.websocket_url()
    }

    /// Performs a GET against `path` and deserializes the JSON response.
    pub fn get_json<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);

        let body = self
            .agent
            .get(&url)
            .call()
            .map_err(|error| {
                tracing::error!(?error, ?url, "API request failed");
                ClientError::Request(error)
            })?
            .into_string()?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl Deref for APIClient {
    type Target = Agent;

    fn deref(&self) -> &Self::Target {
        &self.agent
    }
}

/// Builds the user agent string, tagging requests with the build flavor.
pub(crate) fn user_agent(config: &EnvironmentConfig, version: &str) -> String {
    let build = match config.is_production() {
        true => "production",
        false => "development",
    };

    format!("MedTagger/{} ({}) (Rust)", version, build)
}
