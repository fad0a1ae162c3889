use std::env;

use crate::EnvironmentConfig;

pub const API_URL_VAR: &str = "MEDTAGGER_API_URL";
pub const WEBSOCKET_URL_VAR: &str = "MEDTAGGER_WEBSOCKET_URL";

/// Per-deploy address overrides layered on top of a compiled record.
///
/// Only the addresses can be overridden; `production` always comes from the
/// build target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub websocket_url: Option<String>,
}

impl Overrides {
    /// Overrides are sourced from `MEDTAGGER_API_URL` and `MEDTAGGER_WEBSOCKET_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds overrides from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_url: read(API_URL_VAR),
            websocket_url: read(WEBSOCKET_URL_VAR),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_url.is_none() && self.websocket_url.is_none()
    }

    /// Produces a new record where values in `self` take precedence.
    pub fn apply(self, base: EnvironmentConfig) -> EnvironmentConfig {
        if !self.is_empty() {
            tracing::info!(?self, "Applying environment config overrides");
        }

        let api_url = self.api_url.unwrap_or_else(|| base.api_url().to_string());
        let websocket_url = self.websocket_url.unwrap_or_else(|| base.websocket_url().to_string());

        EnvironmentConfig::new(base.is_production(), api_url, websocket_url)
    }
}
