use std::collections::HashMap;
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

pub const APP_VERSION_VAR: &str = "APP_VERSION";
pub const IMAGE_SIGNED_VAR: &str = "IMAGE_SIGNED";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_IMAGE_SIGNED: &str = "true";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STATUS_SERVER_HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
    #[error("STATUS_SERVER_PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("Unknown payload variant: {0:?} (expected \"basic\" or \"extended\")")]
    UnknownVariant(String),
}

/// Which of the two payload shapes the unversioned routes serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadVariant {
    Basic,
    #[default]
    Extended,
}

impl FromStr for PayloadVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "v1" => Ok(Self::Basic),
            "extended" | "v2" => Ok(Self::Extended),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for PayloadVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub variant: PayloadVariant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            variant: PayloadVariant::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(source: &dyn EnvSource) -> Result<Self, ConfigError> {
        let host = match source.var("STATUS_SERVER_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let port = match source.var("STATUS_SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let variant = match source.var("PAYLOAD_VARIANT") {
            Some(raw) => raw.parse()?,
            None => PayloadVariant::default(),
        };

        Ok(Self {
            host,
            port,
            variant,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Lookup for values that are read on every request rather than captured at startup.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;

    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed set of variables, used in place of the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv(HashMap<String, String>);

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn into_shared(self) -> Arc<dyn EnvSource> {
        Arc::new(self)
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_source(&StaticEnv::new()).unwrap();
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.variant, PayloadVariant::Extended);
    }

    #[test]
    fn test_overrides() {
        let env = StaticEnv::new()
            .with("STATUS_SERVER_HOST", "127.0.0.1")
            .with("STATUS_SERVER_PORT", "9090")
            .with("PAYLOAD_VARIANT", "Basic");
        let config = Config::from_source(&env).unwrap();
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.variant, PayloadVariant::Basic);
    }

    #[test]
    fn test_invalid_port() {
        let env = StaticEnv::new().with("STATUS_SERVER_PORT", "80800");
        let err = Config::from_source(&env).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("80800".to_string()));
    }

    #[test]
    fn test_ipv6_host() {
        let env = StaticEnv::new().with("STATUS_SERVER_HOST", "::");
        let config = Config::from_source(&env).unwrap();
        assert_eq!(config.listen_addr().to_string(), "[::]:8080");
    }

    #[test]
    fn test_hostname_is_rejected() {
        let env = StaticEnv::new().with("STATUS_SERVER_HOST", "localhost");
        let err = Config::from_source(&env).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHost("localhost".to_string()));
    }

    #[test]
    fn test_unknown_variant() {
        let err = "full".parse::<PayloadVariant>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownVariant("full".to_string()));
    }

    #[test]
    fn test_variant_aliases() {
        assert_eq!("v1".parse::<PayloadVariant>().unwrap(), PayloadVariant::Basic);
        assert_eq!(" V2 ".parse::<PayloadVariant>().unwrap(), PayloadVariant::Extended);
        assert_eq!(PayloadVariant::Basic.to_string(), "basic");
    }

    #[test]
    fn test_var_or_falls_back() {
        let env = StaticEnv::new().with(APP_VERSION_VAR, "2.3.1");
        assert_eq!(env.var_or(APP_VERSION_VAR, DEFAULT_APP_VERSION), "2.3.1");
        assert_eq!(env.var_or(IMAGE_SIGNED_VAR, DEFAULT_IMAGE_SIGNED), "true");
    }
}
