use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, net::IpAddr};

use crate::template::Theme;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
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

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    /// Theme used when the request does not ask for one
    #[serde(default)]
    pub default_theme: Theme,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactConfig {
    /// Origin the contact form posts `/api/contact` to.
    /// Unset means the server's own address.
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// When false, contact messages are only written to the log
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Where contact messages are delivered
    #[serde(default)]
    pub inbox_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            inbox_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "Portfolio <noreply@localhost>".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
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
    /// 1. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
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
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Origin the contact form submits to
    pub fn contact_origin(&self) -> String {
        match &self.contact.origin {
            Some(origin) => origin.to_owned(),
            None => {
                // Wildcard binds are reached through loopback
                let host = match self.server.host.parse::<IpAddr>() {
                    Ok(IpAddr::V4(ip)) if ip.is_unspecified() => "127.0.0.1".to_string(),
                    Ok(IpAddr::V6(ip)) if ip.is_unspecified() => "[::1]".to_string(),
                    Ok(IpAddr::V6(ip)) => format!("[{ip}]"),
                    _ => self.server.host.clone(),
                };

                format!("http://{}:{}", host, self.server.port)
            }
        }
    }

    /// Apply `serve` flags and validate the result
    pub fn with_server_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, String> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }

        self.validate()?;

        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Err(e) = url::Url::parse(&self.contact_origin()) {
            return Err(format!("Contact origin is not a valid URL: {e}"));
        }
        if self.email.enabled {
            if self.email.inbox_address.is_empty() {
                return Err("Email inbox_address is required when email is enabled".to_string());
            }
            if self.email.smtp_host.is_empty() {
                return Err("Email smtp_host is required when email is enabled".to_string());
            }
        }
        Ok(())
    }
}
