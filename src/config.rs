use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// SMTP relay host. Empty means delivery is not configured.
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Implicit TLS when set; the 587 default expects STARTTLS.
    #[serde(default)]
    pub smtp_secure: bool,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_smtp_timeout_seconds")]
    pub smtp_timeout_seconds: u64,
    /// Sender address. Empty falls back to the relay username.
    #[serde(default)]
    pub from_address: String,
    /// Where admin notifications go. Empty skips the admin send.
    #[serde(default)]
    pub admin_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_secure: false,
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_timeout_seconds: default_smtp_timeout_seconds(),
            from_address: String::new(),
            admin_address: String::new(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_timeout_seconds() -> u64 {
    10
}

impl EmailConfig {
    /// Delivery needs a relay host and credentials; anything less counts as
    /// not configured and submissions are rejected with a server error.
    pub fn is_configured(&self) -> bool {
        !self.smtp_host.is_empty()
            && !self.smtp_username.is_empty()
            && !self.smtp_password.is_empty()
    }

    /// Optional operator notification address.
    pub fn admin(&self) -> Option<&str> {
        if self.admin_address.is_empty() {
            None
        } else {
            Some(&self.admin_address)
        }
    }

    /// Sender address, falling back to the relay username.
    pub fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }
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
    /// 1. Legacy environment variables (SMTP_HOST, APPLICATION_TO_ADDRESS, ...)
    /// 2. Prefixed environment variables (BROCHURE__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BROCHURE")
                .separator("__")
                .try_parsing(true),
        );

        // The deployment's historical variable names keep working.
        if let Ok(host) = env::var("SMTP_HOST") {
            builder = builder.set_override("email.smtp_host", host)?;
        }
        if let Ok(port) = env::var("SMTP_PORT") {
            builder = builder.set_override("email.smtp_port", port)?;
        }
        if let Ok(secure) = env::var("SMTP_SECURE") {
            builder = builder.set_override("email.smtp_secure", secure == "true")?;
        }
        if let Ok(user) = env::var("SMTP_USER") {
            builder = builder.set_override("email.smtp_username", user)?;
        }
        if let Ok(pass) = env::var("SMTP_PASS") {
            builder = builder.set_override("email.smtp_password", pass)?;
        }
        if let Ok(from) = env::var("APPLICATION_FROM_ADDRESS") {
            builder = builder.set_override("email.from_address", from)?;
        }
        if let Ok(to) = env::var("APPLICATION_TO_ADDRESS") {
            builder = builder.set_override("email.admin_address", to)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.smtp_timeout_seconds == 0 {
            return Err("SMTP timeout must be at least 1 second".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = base_config();
        config.email.smtp_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_email_unconfigured_by_default() {
        assert!(!EmailConfig::default().is_configured());
    }

    #[test]
    fn test_email_configured_needs_host_user_and_password() {
        let mut email = EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_username: "mailer@example.com".to_string(),
            smtp_password: "secret".to_string(),
            ..EmailConfig::default()
        };
        assert!(email.is_configured());

        email.smtp_password.clear();
        assert!(!email.is_configured());
    }

    #[test]
    fn test_sender_falls_back_to_username() {
        let mut email = EmailConfig {
            smtp_username: "mailer@example.com".to_string(),
            ..EmailConfig::default()
        };
        assert_eq!(email.sender(), "mailer@example.com");

        email.from_address = "site@example.com".to_string();
        assert_eq!(email.sender(), "site@example.com");
    }

    #[test]
    fn test_admin_absent_when_unset() {
        let mut email = EmailConfig::default();
        assert_eq!(email.admin(), None);

        email.admin_address = "admin@example.com".to_string();
        assert_eq!(email.admin(), Some("admin@example.com"));
    }
}
