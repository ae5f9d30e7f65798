//! Validator configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the unknown-field policy.
pub const UNKNOWN_FIELDS_ENV: &str = "FIELDCHECK_UNKNOWN_FIELDS";

/// How record keys missing from the schema are treated. Defaults to permissive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    #[default]
    Permissive,
    Strict,
}

impl UnknownFieldPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownFieldPolicy::Permissive => "permissive",
            UnknownFieldPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for UnknownFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(UnknownFieldPolicy::Permissive),
            "strict" => Ok(UnknownFieldPolicy::Strict),
            other => Err(format!("unknown field policy '{}'", other)),
        }
    }
}

/// Settings applied to every validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub unknown_fields: UnknownFieldPolicy,
}

impl ValidatorConfig {
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Strict,
        }
    }

    /// Build from `FIELDCHECK_UNKNOWN_FIELDS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let unknown_fields = match lookup(UNKNOWN_FIELDS_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!(
                    "CONFIG_INVALID key={} value={:?} error={} fallback={}",
                    UNKNOWN_FIELDS_ENV,
                    raw,
                    e,
                    UnknownFieldPolicy::default()
                );
                UnknownFieldPolicy::default()
            }),
            None => UnknownFieldPolicy::default(),
        };

        log::debug!("CONFIG_LOADED unknown_fields={}", unknown_fields);
        Self { unknown_fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(
            ValidatorConfig::default().unknown_fields,
            UnknownFieldPolicy::Permissive
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = ValidatorConfig::from_lookup(|_| Some("STRICT".to_string()));
        assert_eq!(config, ValidatorConfig::strict());

        let config = ValidatorConfig::from_lookup(|_| None);
        assert_eq!(config, ValidatorConfig::default());

        let config = ValidatorConfig::from_lookup(|_| Some("lenient".to_string()));
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_deserialize() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"unknown_fields": "strict"}"#).unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Strict);

        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Permissive);
    }
}
