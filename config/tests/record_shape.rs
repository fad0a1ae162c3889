//! Checks the serialized shape of the shipped records.

use medtagger_config::{BuildTarget, EnvironmentConfig};
use serde_json::json;

#[test]
fn test_production_record_matches_literal_exactly() {
    let value = serde_json::to_value(EnvironmentConfig::production()).unwrap();

    assert_eq!(
        value,
        json!({
            "production": true,
            "apiUrl": "http://demo.voicelab.pl:22433/api/v1",
            "websocketUrl": "http://demo.voicelab.pl:22433"
        })
    );
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[test]
fn test_literal_deserializes_into_production_record() {
    let literal = json!({
        "production": true,
        "apiUrl": "http://demo.voicelab.pl:22433/api/v1",
        "websocketUrl": "http://demo.voicelab.pl:22433"
    });

    let config: EnvironmentConfig = serde_json::from_value(literal).unwrap();
    assert_eq!(config, EnvironmentConfig::production());
}

#[test]
fn test_extra_or_missing_keys_are_rejected() {
    let extra = json!({
        "production": true,
        "apiUrl": "http://demo.voicelab.pl:22433/api/v1",
        "websocketUrl": "http://demo.voicelab.pl:22433",
        "staging": false
    });
    assert!(serde_json::from_value::<EnvironmentConfig>(extra).is_err());

    let missing = json!({ "production": true, "apiUrl": "http://demo.voicelab.pl:22433/api/v1" });
    assert!(serde_json::from_value::<EnvironmentConfig>(missing).is_err());
}

#[test]
fn test_records_are_non_empty() {
    for target in BuildTarget::ALL {
        let config = EnvironmentConfig::for_target(target);
        assert!(!config.api_url().is_empty(), "{} apiUrl is empty", target);
        assert!(!config.websocket_url().is_empty(), "{} websocketUrl is empty", target);
    }
}

#[test]
fn test_switching_targets_changes_every_field() {
    let development = EnvironmentConfig::for_target(BuildTarget::Development);
    let production = EnvironmentConfig::for_target(BuildTarget::Production);

    assert_ne!(development.is_production(), production.is_production());
    assert_ne!(development.api_url(), production.api_url());
    assert_ne!(development.websocket_url(), production.websocket_url());
}
