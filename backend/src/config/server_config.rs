use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;

use nonzero_ext::nonzero;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";
const DEFAULT_CONTACT_INBOX: &str = "info@alphacs.sa";
const DEFAULT_CONTACT_RATE: NonZeroU32 = nonzero!(5u32);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set when SMTP_HOST is configured")]
    MissingSmtpSetting(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    // 'development' for local work, anything else is production
    pub environment: String,
    pub contact_inbox: String,
    pub smtp: Option<SmtpSettings>,
    pub contact_rate_per_minute: NonZeroU32,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let contact_rate_per_minute = match get("CONTACT_RATE_PER_MINUTE") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ConfigError::Invalid {
                    key: "CONTACT_RATE_PER_MINUTE",
                    value: raw,
                })?,
            None => DEFAULT_CONTACT_RATE,
        };

        let smtp = match get("SMTP_HOST") {
            Some(host) => {
                let username = get("SMTP_USERNAME")
                    .ok_or(ConfigError::MissingSmtpSetting("SMTP_USERNAME"))?;
                let password = get("SMTP_PASSWORD")
                    .ok_or(ConfigError::MissingSmtpSetting("SMTP_PASSWORD"))?;
                let from = get("SMTP_FROM").unwrap_or_else(|| username.clone());
                Some(SmtpSettings { host, username, password, from })
            }
            None => None,
        };

        Ok(Self {
            bind_addr,
            frontend_dist: get("FRONTEND_DIST")
                .unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string())
                .into(),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            contact_inbox: get("CONTACT_INBOX").unwrap_or_else(|| DEFAULT_CONTACT_INBOX.to_string()),
            smtp,
            contact_rate_per_minute,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.frontend_dist, PathBuf::from("frontend/dist"));
        assert_eq!(config.contact_inbox, "info@alphacs.sa");
        assert_eq!(config.contact_rate_per_minute.get(), 5);
        assert!(config.smtp.is_none());
        assert!(config.sentry_dsn.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn smtp_host_requires_credentials() {
        let err = config_from(&[("SMTP_HOST", "smtp.example.com")]).unwrap_err();
        assert_eq!(err, ConfigError::MissingSmtpSetting("SMTP_USERNAME"));

        let err = config_from(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer@alphacs.sa"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingSmtpSetting("SMTP_PASSWORD"));
    }

    #[test]
    fn smtp_from_falls_back_to_username() {
        let config = config_from(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer@alphacs.sa"),
            ("SMTP_PASSWORD", "secret"),
        ])
        .unwrap();
        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.from, "mailer@alphacs.sa");
    }

    #[test]
    fn zero_or_garbage_rate_is_rejected() {
        for raw in ["0", "-1", "lots"] {
            let err = config_from(&[("CONTACT_RATE_PER_MINUTE", raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "CONTACT_RATE_PER_MINUTE", .. }));
        }
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("SMTP_HOST", "  "), ("ENVIRONMENT", "production")]).unwrap();
        assert!(config.smtp.is_none());
        assert!(!config.is_development());
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid { key: "BIND_ADDR", value: "localhost".to_string() }
        );
    }
}
