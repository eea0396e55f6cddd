//! Conversion options loaded from YAML files
//!
//! The defaults reproduce the behavior of a plain conversion. A config file
//! only needs to name the values it wants to change.

use crate::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable values used when synthesizing parts of the OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Host used in server URLs when the input has no `host`
    pub default_host: String,
    /// Base path used in server URLs when the input has no `basePath`
    pub default_base_path: String,
    /// Schemes used for server URLs when the input has no `schemes`
    pub default_schemes: Vec<String>,
    /// Media type under which request and response schemas are placed
    pub media_type: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            default_host: "localhost:8080".to_string(),
            default_base_path: "/".to_string(),
            default_schemes: vec!["http".to_string()],
            media_type: "application/json".to_string(),
        }
    }
}

impl ConverterOptions {
    /// Load options from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ConvertError::Yaml(err) => ConvertError::Config(format!(
                "Failed to parse config YAML from {:?}: {}",
                path, err
            )),
            other => other,
        })
    }

    /// Parse options from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to null, which means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject option sets that could not produce a usable document
    pub fn validate(&self) -> Result<()> {
        if self.default_schemes.is_empty() {
            return Err(ConvertError::Config(
                "default_schemes must name at least one scheme".to_string(),
            ));
        }
        if self.media_type.trim().is_empty() {
            return Err(ConvertError::Config(
                "media_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = ConverterOptions::default();
        assert_eq!(options.default_host, "localhost:8080");
        assert_eq!(options.default_base_path, "/");
        assert_eq!(options.default_schemes, vec!["http".to_string()]);
        assert_eq!(options.media_type, "application/json");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let options = ConverterOptions::from_yaml("default_host: api.internal:9000\n").unwrap();
        assert_eq!(options.default_host, "api.internal:9000");
        assert_eq!(options.default_base_path, "/");
        assert_eq!(options.media_type, "application/json");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ConverterOptions::from_yaml("  \n").unwrap(),
            ConverterOptions::default()
        );
    }

    #[test]
    fn test_empty_schemes_rejected() {
        let err = ConverterOptions::from_yaml("default_schemes: []\n").unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_blank_media_type_rejected() {
        let err = ConverterOptions::from_yaml("media_type: \"\"\n").unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_schemes:\n  - https\n  - wss").unwrap();

        let options = ConverterOptions::from_file(file.path()).unwrap();
        assert_eq!(
            options.default_schemes,
            vec!["https".to_string(), "wss".to_string()]
        );
    }

    #[test]
    fn test_from_missing_file() {
        let err = ConverterOptions::from_file(Path::new("/nonexistent/options.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
