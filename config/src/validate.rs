use url::Url;

use crate::{ConfigError, EnvironmentConfig};

const API_SCHEMES: &[&str] = &["http", "https"];

// Socket.IO style clients accept plain HTTP addresses and upgrade themselves.
const WEBSOCKET_SCHEMES: &[&str] = &["ws", "wss", "http", "https"];

impl EnvironmentConfig {
    /// Checks that both addresses are absolute URLs with a host and a scheme
    /// the consumers know how to talk to.
    ///
    /// Constructing a record never calls this; it's for callers that want
    /// stricter guarantees before opening connections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("apiUrl", &self.api_url, API_SCHEMES)?;
        check_url("websocketUrl", &self.websocket_url, WEBSOCKET_SCHEMES)?;
        Ok(())
    }
}

// Every allowed scheme is a special scheme to the URL parser, so a missing or
// empty host already fails in `Url::parse`.
fn check_url(field: &'static str, value: &str, schemes: &[&str]) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })?;

    if !schemes.contains(&url.scheme()) {
        return Err(ConfigError::UnsupportedScheme {
            field,
            scheme: url.scheme().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_urls(api_url: &str, websocket_url: &str) -> EnvironmentConfig {
        EnvironmentConfig::new(false, api_url, websocket_url)
    }

    #[test]
    fn test_shipped_records_are_valid() {
        EnvironmentConfig::development().validate().unwrap();
        EnvironmentConfig::production().validate().unwrap();
    }

    #[test]
    fn test_production_urls_parse_with_port_and_path() {
        let config = EnvironmentConfig::production();

        let api = Url::parse(config.api_url()).unwrap();
        assert_eq!(api.scheme(), "http");
        assert_eq!(api.host_str(), Some("demo.voicelab.pl"));
        assert_eq!(api.port(), Some(22433));
        assert_eq!(api.path(), "/api/v1");

        let websocket = Url::parse(config.websocket_url()).unwrap();
        assert_eq!(websocket.host_str(), Some("demo.voicelab.pl"));
        assert_eq!(websocket.port(), Some(22433));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        match with_urls("/api/v1", "ws://localhost").validate() {
            Err(ConfigError::InvalidUrl { field, value, .. }) => {
                assert_eq!(field, "apiUrl");
                assert_eq!(value, "/api/v1");
            },
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_websocket_scheme_on_api_is_rejected() {
        match with_urls("wss://localhost/api", "wss://localhost").validate() {
            Err(ConfigError::UnsupportedScheme { field, scheme }) => {
                assert_eq!(field, "apiUrl");
                assert_eq!(scheme, "wss");
            },
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[test]
    fn test_non_network_websocket_url_is_rejected() {
        match with_urls("https://localhost/api", "mailto:someone@example.org").validate() {
            Err(ConfigError::UnsupportedScheme { field, scheme }) => {
                assert_eq!(field, "websocketUrl");
                assert_eq!(scheme, "mailto");
            },
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_host_is_rejected() {
        match with_urls("http://", "ws://localhost").validate() {
            Err(ConfigError::InvalidUrl { field, .. }) => assert_eq!(field, "apiUrl"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }

        for websocket_url in ["wss://", "https://:80/api", "http://@/x"] {
            match with_urls("https://localhost/api", websocket_url).validate() {
                Err(ConfigError::InvalidUrl { field, .. }) => assert_eq!(field, "websocketUrl"),
                other => panic!("expected InvalidUrl for {:?}, got {:?}", websocket_url, other),
            }
        }
    }
}
