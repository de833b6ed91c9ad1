//! Service configuration read from the environment.
//!
//! The three dependency base URLs are injected configuration; nothing in the
//! engine or the adapters hardcodes an address. Defaults match the ports the
//! record services bind locally.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

const BIND_ADDR_VAR: &str = "SISTEMA_BIND_ADDR";
const USER_SERVICE_VAR: &str = "USUARIO_SERVICE_URL";
const COURSE_SERVICE_VAR: &str = "CURSO_SERVICE_URL";
const PAYMENT_SERVICE_VAR: &str = "PAGO_SERVICE_URL";
const REMOTE_TIMEOUT_VAR: &str = "REMOTE_TIMEOUT_SECONDS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8085";
const DEFAULT_USER_SERVICE: &str = "http://localhost:8081/api/usuarios";
const DEFAULT_COURSE_SERVICE: &str = "http://localhost:8084/api/curso";
const DEFAULT_PAYMENT_SERVICE: &str = "http://localhost:8083/api/pagos";
const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 10;

/// Validated startup configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub user_service_url: Url,
    pub course_service_url: Url,
    pub payment_service_url: Url,
    /// Per-request timeout applied to every outbound remote call.
    pub remote_timeout: Duration,
}

/// Configuration values that fail validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {message}")]
    InvalidUrl { name: &'static str, message: String },
    #[error("{name} is not a valid socket address: {message}")]
    InvalidBindAddr { name: &'static str, message: String },
    #[error("{name} is not a valid number of seconds: {message}")]
    InvalidTimeout { name: &'static str, message: String },
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable fails validation; unset
    /// variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an explicit lookup, for deterministic
    /// tests.
    ///
    /// # Errors
    ///
    /// Same contract as [`ServerConfig::from_env`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned())
            .parse()
            .map_err(|error: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                name: BIND_ADDR_VAR,
                message: error.to_string(),
            })?;

        let remote_timeout = lookup(REMOTE_TIMEOUT_VAR)
            .map_or(Ok(DEFAULT_REMOTE_TIMEOUT_SECONDS), |raw| {
                raw.parse().map_err(|error: std::num::ParseIntError| {
                    ConfigError::InvalidTimeout {
                        name: REMOTE_TIMEOUT_VAR,
                        message: error.to_string(),
                    }
                })
            })
            .map(Duration::from_secs)?;

        Ok(Self {
            bind_addr,
            user_service_url: service_url(&lookup, USER_SERVICE_VAR, DEFAULT_USER_SERVICE)?,
            course_service_url: service_url(&lookup, COURSE_SERVICE_VAR, DEFAULT_COURSE_SERVICE)?,
            payment_service_url: service_url(
                &lookup,
                PAYMENT_SERVICE_VAR,
                DEFAULT_PAYMENT_SERVICE,
            )?,
            remote_timeout,
        })
    }
}

fn service_url(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<Url, ConfigError> {
    lookup(name)
        .unwrap_or_else(|| default.to_owned())
        .parse()
        .map_err(|error: url::ParseError| ConfigError::InvalidUrl {
            name,
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None).expect("defaults are valid");

        assert_eq!(config.bind_addr.port(), 8085);
        assert_eq!(
            config.user_service_url.as_str(),
            "http://localhost:8081/api/usuarios"
        );
        assert_eq!(config.payment_service_url.port(), Some(8083));
        assert_eq!(config.remote_timeout, Duration::from_secs(10));
    }

    #[test]
    fn set_variables_override_defaults() {
        let config = ServerConfig::from_lookup(|name| match name {
            "SISTEMA_BIND_ADDR" => Some("127.0.0.1:9000".to_owned()),
            "CURSO_SERVICE_URL" => Some("http://cursos.internal/api/curso".to_owned()),
            "REMOTE_TIMEOUT_SECONDS" => Some("3".to_owned()),
            _ => None,
        })
        .expect("overrides are valid");

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.course_service_url.host_str(), Some("cursos.internal"));
        assert_eq!(config.remote_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_are_rejected_with_the_variable_name() {
        let error = ServerConfig::from_lookup(|name| {
            (name == "PAGO_SERVICE_URL").then(|| "not a url".to_owned())
        })
        .expect_err("invalid url must fail");
        assert!(matches!(
            error,
            ConfigError::InvalidUrl {
                name: "PAGO_SERVICE_URL",
                ..
            }
        ));

        let error = ServerConfig::from_lookup(|name| {
            (name == "REMOTE_TIMEOUT_SECONDS").then(|| "soon".to_owned())
        })
        .expect_err("invalid timeout must fail");
        assert!(matches!(error, ConfigError::InvalidTimeout { .. }));
    }
}
