//! Tests for configuration system

use mindbridge::config::{Config, LogFormat};

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.site.name, "MindBridge Education");
    assert_eq!(config.site.tagline, "Educate~Elevate~Thrive");
    assert_eq!(config.brand.green, "#3FAE49");
    assert_eq!(
        config.contact.subject,
        "MindBridge Education — Consultation Request"
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("mindbridge-config-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r##"
[site]
phone = "(555) 010-0199"

[brand]
blue = "#112233"

[contact]
recipient = "hello@example.org"

[logging]
format = "json"
"##,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.site.phone, "(555) 010-0199");
    assert_eq!(config.site.location, "Your City, State");
    assert_eq!(config.brand.blue, "#112233");
    assert_eq!(config.brand.magenta, "#C23B8E");
    assert_eq!(config.contact.recipient, "hello@example.org");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let config = Config::load(Some("does/not/exist.toml".to_owned())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.site.short_name, "MindBridge");
}
