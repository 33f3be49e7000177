//! Per-value checks applied while resolving settings.

use crate::error::ConfigError;

/// Present and non-blank, otherwise `Missing`.
pub fn require(key: &'static str, raw: Option<String>) -> Result<String, ConfigError> {
    match raw {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// TCP port: 1..=65535.
pub fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    let port: u16 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: "not a port number".into(),
    })?;
    if port == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "port must be non-zero".into(),
        });
    }
    Ok(port)
}

pub fn parse_positive(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected a positive integer".into(),
        }),
    }
}

/// Accepts true/false, 1/0, yes/no (case-insensitive).
pub fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}
