//! Application settings loading from config.toml
//!
//! This module loads optional deployment settings from a TOML file. Today the
//! only setting is the referential policy applied when deleting master
//! entities; a missing file means the permissive default everywhere.

use crate::core::ReferentialPolicy;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Policy applied when deleting a product, vendor, or customer that
    /// transactions still reference
    #[serde(default)]
    pub referential_policy: ReferentialPolicy,
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml), falling back to
/// defaults when the file does not exist.
pub fn load_default_settings() -> Result<Settings> {
    if Path::new("config.toml").exists() {
        load_settings("config.toml")
    } else {
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            referential_policy = "restrict"
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.referential_policy, ReferentialPolicy::Restrict);
    }

    #[test]
    fn test_default_policy_is_permissive() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.referential_policy, ReferentialPolicy::Permissive);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result: std::result::Result<Settings, _> =
            toml::from_str(r#"referential_policy = "cascade""#);
        assert!(result.is_err());
    }
}
