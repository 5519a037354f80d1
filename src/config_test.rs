use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_url: None });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_api_url() {
    let cfg = HostConfig::from_vars(Some(" 8080 "), Some("https://blog.test/api")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url.as_deref(), Some("https://blog.test/api"));
}

#[test]
fn blank_values_fall_back() {
    let cfg = HostConfig::from_vars(Some(""), Some("   ")).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_url: None });
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        HostConfig::from_vars(Some("eighty"), None),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert_eq!(
        HostConfig::from_vars(Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}
