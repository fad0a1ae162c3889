use crate::EnvironmentConfig;

impl EnvironmentConfig {
    pub fn production() -> Self {
        Self::new(true, "http://demo.voicelab.pl:22433/api/v1", "http://demo.voicelab.pl:22433")
    }
}
