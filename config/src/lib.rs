//! The environment configuration record for MedTagger deployments.
//!
//! A record carries the production flag and the two service addresses a front-end
//! needs (`apiUrl` and `websocketUrl`). One record is active per process: it's
//! picked from the build target (compiled in via `MEDTAGGER_ENV`, or chosen at
//! startup) and is never replaced afterwards.
//!
//! Components should take the record as a constructor argument rather than
//! calling `EnvironmentConfig::get()` themselves; the global accessor is meant
//! for the process entry point.

use std::sync::OnceLock;

mod development;
mod error;
mod file;
mod overrides;
mod production;
mod target;
mod validate;

pub use error::ConfigError;
pub use overrides::{Overrides, API_URL_VAR, WEBSOCKET_URL_VAR};
pub use target::{BuildTarget, ENV_VAR};

static ACTIVE: OnceLock<EnvironmentConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    production: bool,
    api_url: String,
    websocket_url: String,
}

impl EnvironmentConfig {
    /// Builds a record from its three values. The record can't be edited
    /// afterwards; a different deployment needs a different record.
    pub fn new<A, W>(production: bool, api_url: A, websocket_url: W) -> Self
    where
        A: Into<String>,
        W: Into<String>,
    {
        Self {
            production,
            api_url: api_url.into(),
            websocket_url: websocket_url.into(),
        }
    }

    /// Whether consumers should behave as a production deployment.
    pub fn is_production(&self) -> bool {
        self.production
    }

    /// Absolute base address for REST API calls.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute base address for the WebSocket connection.
    pub fn websocket_url(&self) -> &str {
        &self.websocket_url
    }

    /// Returns the record for a given build target.
    pub fn for_target(target: BuildTarget) -> Self {
        match target {
            BuildTarget::Development => Self::development(),
            BuildTarget::Production => Self::production(),
        }
    }

    /// The record for a build target with any deploy-time overrides applied.
    pub fn resolve(target: BuildTarget, overrides: Overrides) -> Self {
        overrides.apply(Self::for_target(target))
    }

    /// Joins `path` onto `api_url` with exactly one `/` between them.
    pub fn api_endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        if path.is_empty() {
            return base.to_string();
        }

        format!("{}/{}", base, path)
    }

    /// Installs the active record for this process. This can only happen once.
    pub fn init(config: Self) -> Result<&'static Self, ConfigError> {
        let mut installed = false;

        let active = ACTIVE.get_or_init(|| {
            installed = true;
            config
        });

        if !installed {
            return Err(ConfigError::AlreadyInitialized);
        }

        tracing::info!(?active, "Initialized environment config");
        Ok(active)
    }

    /// Retrieves the active record, resolving it from the environment the first
    /// time it's accessed if `init` was never called.
    pub fn get() -> &'static Self {
        ACTIVE.get_or_init(|| {
            let target = BuildTarget::from_env().unwrap_or_else(|error| {
                let fallback = BuildTarget::compiled();
                tracing::warn!(?error, %fallback, "Ignoring invalid {}", ENV_VAR);
                fallback
            });

            let config = Self::resolve(target, Overrides::from_env());
            tracing::info!(%target, ?config, "Resolved environment config");
            config
        })
    }
}
