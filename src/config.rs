use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use visionflow_notification::{EmailConfig, contact::CompanyConfig};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub company: CompanyConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VISIONFLOW__EMAIL__SMTP_HOST, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("email.smtp_host", "localhost")?
            .set_default("email.smtp_port", 1025)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.from_address", "onboarding@visionflowtech.com")?
            .set_default("email.contact_address", "contact@visionflowtech.com")?
            .set_default("company.name", "Vision Flow Technologies")?
            .set_default("company.tagline", "Innovative Solutions for the Digital Era")?
            .set_default("company.phone", "+91 9731070591")?
            .set_default("company.email", "contact@visionflowtech.com")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VISIONFLOW")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(smtp_password) = env::var("SMTP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", smtp_password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.email.contact_address.contains('@') {
            return Err("Email contact_address must be an email address".to_string());
        }
        if !self.email.from_address.contains('@') {
            return Err("Email from_address must be an email address".to_string());
        }
        if self.company.name.trim().is_empty() {
            return Err("Company name must not be empty".to_string());
        }
        Ok(())
    }
}
