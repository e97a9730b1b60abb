//! Tests for the configuration system

use oaksurveys::Config;

#[test]
fn test_config_loads_defaults() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.contact.address, "info@oaksurveys.ie");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_default_validates() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}
