//! Configuration file support for the demo host.
//!
//! Configuration is loaded from `~/.config/ordered-multiselect/config.toml`
//! with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/ordered-multiselect/config.toml
//! items = ["Admin", "Editor", "Viewer"]
//! max_items = 3
//! numbers_left_of_text = true
//! select_label = "Roles"
//! button_text = "Add"
//! select_width = 24
//! description = "Pick roles in order of precedence"
//! initial_value = ["Viewer"]
//! required = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Demo host configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Catalog offered by the picker
    pub items: Vec<String>,

    /// Item cap; absent or non-positive means unlimited
    pub max_items: Option<i64>,

    pub numbers_left_of_text: bool,

    pub select_label: String,

    pub button_text: String,

    /// Select box width in columns
    pub select_width: Option<u16>,

    /// Add trigger width in columns
    pub button_width: Option<u16>,

    pub description: String,

    /// Value the widget starts with; entries not in `items` are skipped
    pub initial_value: Vec<String>,

    /// Show the required indicator and flag an empty value as invalid
    pub required: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            items: ["Admin", "Editor", "Reviewer", "Viewer", "Guest"]
                .map(String::from)
                .to_vec(),
            max_items: None,
            numbers_left_of_text: false,
            select_label: "Roles".to_string(),
            button_text: "Add".to_string(),
            select_width: None,
            button_width: None,
            description: String::new(),
            initial_value: Vec::new(),
            required: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed; the problem is reported on stderr.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ordered-multiselect")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, max_items: Option<i64>, numbers_left: Option<bool>) -> Self {
        if max_items.is_some() {
            self.max_items = max_items;
        }
        if let Some(left) = numbers_left {
            self.numbers_left_of_text = left;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.items.len(), 5);
        assert!(config.max_items.is_none());
        assert!(!config.numbers_left_of_text);
        assert_eq!(config.button_text, "Add");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            items = ["x", "y"]
            max_items = 2
            numbers_left_of_text = true
            select_width = 30
        "#;

        let config: DemoConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.items, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(config.max_items, Some(2));
        assert!(config.numbers_left_of_text);
        assert_eq!(config.select_width, Some(30));
        // untouched fields keep their defaults
        assert_eq!(config.select_label, "Roles");
    }

    #[test]
    fn test_overrides_win() {
        let config = DemoConfig {
            max_items: Some(4),
            ..Default::default()
        }
        .with_overrides(Some(1), Some(true));
        assert_eq!(config.max_items, Some(1));
        assert!(config.numbers_left_of_text);

        let config = DemoConfig {
            max_items: Some(4),
            ..Default::default()
        }
        .with_overrides(None, None);
        assert_eq!(config.max_items, Some(4));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("omselect_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "max_items = \"lots\"").unwrap();
        let result = DemoConfig::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(crate::error::AppError::Config(_))));
    }
}
