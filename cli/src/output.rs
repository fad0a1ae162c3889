use thiserror::Error;

use medtagger_config::{ConfigError, EnvironmentConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Toml(#[from] ConfigError),
}

/// Renders a record in the requested format, always ending in a newline.
pub fn render(config: &EnvironmentConfig, format: Format) -> Result<String, RenderError> {
    let mut rendered = match format {
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => config.to_toml_string()?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    Ok(rendered)
}
