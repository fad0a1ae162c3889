use std::env;
use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Name of the variable that picks a build target, both while compiling
/// (see `build.rs`) and at process start.
pub const ENV_VAR: &str = "MEDTAGGER_ENV";

/// The deployment targets that have a configuration record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildTarget {
    Development,
    Production,
}

impl BuildTarget {
    pub const ALL: [BuildTarget; 2] = [BuildTarget::Development, BuildTarget::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// The target that was baked in when this crate was compiled.
    ///
    /// `build.rs` enables exactly one of the `medtagger_env_*` features based on
    /// `MEDTAGGER_ENV`. If someone turns on both by hand, production wins.
    pub fn compiled() -> Self {
        if cfg!(feature = "medtagger_env_production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Reads the target from `MEDTAGGER_ENV`, falling back to the compiled
    /// target when the variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var(ENV_VAR).ok().as_deref())
    }

    /// Picks the target for this process. An explicit startup argument wins
    /// over the environment variable, which wins over the compiled target.
    pub fn select(arg: Option<&str>) -> Result<Self, ConfigError> {
        match arg {
            Some(arg) => arg.parse(),
            None => Self::from_env(),
        }
    }

    pub(crate) fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::compiled()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for BuildTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "prod" | "production" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
