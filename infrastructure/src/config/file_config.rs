//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use termgate_application::ContextSettings;
use termgate_domain::{EntityTypeTag, TAXONOMY_TERM, TAXONOMY_TERM_CACHE_CONTEXT};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("context.name cannot be empty")]
    EmptyContextName,

    #[error("context.entity_type cannot be empty")]
    EmptyEntityType,

    #[error("context.cache_context cannot be empty")]
    EmptyCacheContext,
}

/// Raw context configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContextConfig {
    /// Key of the context in the runtime context map
    pub name: String,
    /// Label shown to administrators
    pub label: String,
    /// Entity type looked up in route parameters
    pub entity_type: String,
    /// Cache context declared on resolved contexts
    pub cache_context: String,
}

impl Default for FileContextConfig {
    fn default() -> Self {
        let settings = ContextSettings::default();
        Self {
            name: settings.name,
            label: settings.label,
            entity_type: TAXONOMY_TERM.to_string(),
            cache_context: TAXONOMY_TERM_CACHE_CONTEXT.to_string(),
        }
    }
}

/// Raw data source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Fixture file with categories, entities and routes
    pub fixtures: PathBuf,
    /// JSON file holding condition configuration per instance
    pub conditions: PathBuf,
}

impl Default for FileDataConfig {
    fn default() -> Self {
        Self {
            fixtures: PathBuf::from("termgate.data.toml"),
            conditions: PathBuf::from(".termgate/conditions.json"),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Append every condition decision to this JSONL file
    pub decision_log: Option<PathBuf>,
}

/// Root configuration structure
///
/// # Example
///
/// ```toml
/// [context]
/// label = "Current Taxonomy Term"
///
/// [data]
/// fixtures = "termgate.data.toml"
/// conditions = ".termgate/conditions.json"
///
/// [output]
/// format = "json"
///
/// [logging]
/// decision_log = ".termgate/decisions.jsonl"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub context: FileContextConfig,
    pub data: FileDataConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.context.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyContextName);
        }
        if self.context.entity_type.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEntityType);
        }
        if self.context.cache_context.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCacheContext);
        }
        Ok(())
    }

    /// Context settings for the route entity resolver
    pub fn context_settings(&self) -> ContextSettings {
        ContextSettings::default()
            .with_name(self.context.name.trim())
            .with_label(self.context.label.clone())
            .with_entity_type(EntityTypeTag::new(self.context.entity_type.trim()))
            .with_cache_context(self.context.cache_context.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[context]
name = "node"
label = "Current Node"
entity_type = "node"
cache_context = "route"

[data]
fixtures = "data/site.toml"
conditions = "state/conditions.json"

[output]
format = "json"
color = false

[logging]
decision_log = "state/decisions.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.context.entity_type, "node");
        assert_eq!(config.data.fixtures, PathBuf::from("data/site.toml"));
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.decision_log,
            Some(PathBuf::from("state/decisions.jsonl"))
        );

        let settings = config.context_settings();
        assert_eq!(settings.definition().data_type, "entity:node");
        assert_eq!(settings.cache_context, "route");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[context]\nlabel = \"Term\"\n").unwrap();
        assert_eq!(config.context.label, "Term");
        assert_eq!(config.context.name, "taxonomy_term");
        assert_eq!(config.data.conditions, PathBuf::from(".termgate/conditions.json"));
        assert!(config.output.color);
    }

    #[test]
    fn test_default_settings_match_application_defaults() {
        assert_eq!(FileConfig::default().context_settings(), ContextSettings::default());
    }

    #[test]
    fn test_validate() {
        assert!(FileConfig::default().validate().is_ok());

        let mut config = FileConfig::default();
        config.context.entity_type = " ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyEntityType)
        ));

        let mut config = FileConfig::default();
        config.context.cache_context = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyCacheContext)
        ));
    }
}
