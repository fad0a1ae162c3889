use crate::EnvironmentConfig;

impl EnvironmentConfig {
    /// The record used for local work against a backend on this machine.
    pub fn development() -> Self {
        Self::new(false, "http://localhost:51000/api/v1", "http://localhost:51000")
    }
}
