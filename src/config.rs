use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mindbridge_contact::Mailto;
use mindbridge_shared::Brand;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub brand: Brand,
    #[serde(default)]
    pub contact: Mailto,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Identity and contact placeholders shown on the page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_short_name")]
    pub short_name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            short_name: default_short_name(),
            tagline: default_tagline(),
            logo: default_logo(),
            email: default_email(),
            phone: default_phone(),
            location: default_location(),
        }
    }
}

fn default_name() -> String {
    "MindBridge Education".to_string()
}

fn default_short_name() -> String {
    "MindBridge".to_string()
}

fn default_tagline() -> String {
    "Educate~Elevate~Thrive".to_string()
}

fn default_logo() -> String {
    "/static/mindbridge-logo.png".to_string()
}

fn default_email() -> String {
    mindbridge_contact::DEFAULT_RECIPIENT.to_string()
}

fn default_phone() -> String {
    "(000) 000-0000".to_string()
}

fn default_location() -> String {
    "Your City, State".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MINDBRIDGE__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MINDBRIDGE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.recipient.trim().is_empty() {
            return Err("Contact recipient must not be empty".to_string());
        }
        if let Some(color) = self.brand.invalid_color() {
            return Err(format!("Brand color {color:?} must look like #RRGGBB"));
        }
        Ok(())
    }
}
