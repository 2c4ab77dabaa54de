//! Start-up configuration, read from the environment once.

use std::net::SocketAddr;
use std::path::PathBuf;

use forgeerp_sales::NumberFormat;
use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "FORGEERP_BIND_ADDR";
pub const CATALOG_ENV: &str = "FORGEERP_CATALOG";
pub const DECIMALS_ENV: &str = "FORGEERP_DECIMALS";
pub const DECIMAL_SEPARATOR_ENV: &str = "FORGEERP_DECIMAL_SEPARATOR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const MAX_DECIMALS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON translation catalog; labels fall back to their keys when unset.
    pub catalog_path: Option<PathBuf>,
    pub number_format: NumberFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid(BIND_ADDR_ENV, &bind_raw, e.to_string()))?;

        let catalog_path = lookup(CATALOG_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let mut number_format = NumberFormat::default();
        if let Some(raw) = lookup(DECIMALS_ENV) {
            let decimals = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::invalid(DECIMALS_ENV, &raw, e.to_string()))?;
            if decimals > MAX_DECIMALS {
                return Err(ConfigError::invalid(
                    DECIMALS_ENV,
                    &raw,
                    format!("at most {MAX_DECIMALS} decimals"),
                ));
            }
            number_format.decimals = decimals;
        }
        if let Some(raw) = lookup(DECIMAL_SEPARATOR_ENV) {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(sep), None) => number_format.decimal_separator = sep,
                _ => {
                    return Err(ConfigError::invalid(
                        DECIMAL_SEPARATOR_ENV,
                        &raw,
                        "expected a single character",
                    ));
                }
            }
        }

        Ok(Self {
            bind_addr,
            catalog_path,
            number_format,
        })
    }
}
