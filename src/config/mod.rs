//! Configuration management for leadgate
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `LEADGATE_` prefix, `__` for
//!    nesting, e.g. `LEADGATE_EMAIL__FROM_ADDRESS`)
//! 2. `./config.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! The provider credential is additionally read from the conventional
//! `RESEND_API_KEY` environment variable, which wins over any file value.
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [email]
//! backend = "resend"
//! from_address = "leads@dubaipropertyinvestors.com.au"
//! to_address = "mohdisa233@gmail.com"
//! site_label = "dubaipropertyinvestors.com.au"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: IpAddr,

    /// Bind port
    pub port: u16,

    /// Per-request timeout in seconds (bounds the outbound provider call)
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            request_timeout_secs: 15,
            body_limit_bytes: 32 * 1024,
        }
    }
}

impl ServerSettings {
    /// Socket address to bind the listener to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Which delivery backend forwards lead emails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackendKind {
    /// Resend HTTP API
    Resend,
    /// Plain SMTP relay
    Smtp,
    /// Log-only backend for development
    Console,
}

impl EmailBackendKind {
    /// Stable lowercase name, used in health output and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resend => "resend",
            Self::Smtp => "smtp",
            Self::Console => "console",
        }
    }
}

/// Email delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    /// Delivery backend
    pub backend: EmailBackendKind,

    /// Provider API credential (Resend). Absence is not a startup error;
    /// submissions fail with a configuration error until it is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Fixed sender address for lead notifications
    pub from_address: String,

    /// Fixed recipient inbox for lead notifications
    pub to_address: String,

    /// Site label interpolated into subjects and the body source line
    pub site_label: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            backend: if cfg!(debug_assertions) {
                EmailBackendKind::Console
            } else {
                EmailBackendKind::Resend
            },
            api_key: None,
            from_address: "leads@localhost".to_string(),
            to_address: "inbox@localhost".to_string(),
            site_label: "localhost".to_string(),
        }
    }
}

/// Complete leadgate configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Email delivery settings
    #[serde(default)]
    pub email: EmailSettings,
}

impl AppConfig {
    /// Load configuration with standard precedence
    ///
    /// 1. Environment variables (`LEADGATE_*`, use `__` for nesting;
    ///    `RESEND_API_KEY` maps to `email.api_key`)
    /// 2. `./config.toml`
    /// 3. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or merged
    /// values fail type conversion.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("./config.toml"))
    }

    /// Load configuration, reading the file layer from `path` if it exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or merged values fail
    /// type conversion.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        // Defaults form the lowest layer so every key always resolves.
        let mut figment =
            Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("LEADGATE_").split("__").lowercase(true));

        let mut config: Self = figment.extract()?;

        // Conventional provider credential variable wins over file values.
        if let Ok(key) = std::env::var("RESEND_API_KEY") {
            if !key.is_empty() {
                config.email.api_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Whether the configured backend has the credential it needs
    ///
    /// Console and SMTP backends carry their own configuration; only the
    /// Resend backend depends on an API key.
    #[must_use]
    pub fn email_credential_present(&self) -> bool {
        match self.email.backend {
            EmailBackendKind::Resend => self.email.api_key.is_some(),
            EmailBackendKind::Smtp | EmailBackendKind::Console => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_secs, 15);
        assert!(config.email.api_key.is_none());
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let mut config = AppConfig::default();
        config.server.port = 8080;
        assert_eq!(config.server.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn backend_kind_names() {
        assert_eq!(EmailBackendKind::Resend.as_str(), "resend");
        assert_eq!(EmailBackendKind::Smtp.as_str(), "smtp");
        assert_eq!(EmailBackendKind::Console.as_str(), "console");
    }

    #[test]
    fn credential_presence_only_matters_for_resend() {
        let mut config = AppConfig::default();
        config.email.backend = EmailBackendKind::Console;
        assert!(config.email_credential_present());

        config.email.backend = EmailBackendKind::Resend;
        assert!(!config.email_credential_present());

        config.email.api_key = Some("re_test".to_string());
        assert!(config.email_credential_present());
    }

    #[test]
    fn file_layer_overrides_defaults() {
        let dir = std::env::temp_dir().join("leadgate-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 4100\n\n[email]\nbackend = \"console\"\nsite_label = \"example.test\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.email.backend, EmailBackendKind::Console);
        assert_eq!(config.email.site_label, "example.test");

        std::fs::remove_file(&path).ok();
    }
}
