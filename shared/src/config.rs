use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::options::ItemOptions;

/// Non-fatal configuration problems. The accordion still renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("Accordion option \"multiple\" must be a boolean, got {found}")]
    MultipleNotBoolean { found: String },
    #[error("Accordion option \"multiple\" is false but \"default_active_items\" has {count} items")]
    TooManyDefaultItems { count: usize },
    #[error("Accordion \"default_active_items\" lists index {index} more than once")]
    DuplicateDefaultItem { index: usize },
    #[error("Accordion \"default_active_items\" index {index} is out of range for {item_count} items")]
    DefaultItemOutOfRange { index: usize, item_count: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid accordion configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Accordion configuration must be a JSON object")]
    NotAnObject,
}

/// Container-level accordion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Allow more than one panel to be expanded at a time.
    pub multiple: bool,
    /// Panels expanded on mount.
    pub default_active_items: Vec<usize>,
    /// Extra class for the container.
    pub class: Option<String>,
    /// Class added to the container while no panel is expanded.
    pub closed_class: Option<String>,
    /// Defaults applied to every panel unless the panel overrides them.
    #[serde(flatten)]
    pub item: ItemOptions,
}

/// A parsed configuration together with everything worth telling the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    pub config: AccordionConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl AccordionConfig {
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !self.multiple && self.default_active_items.len() > 1 {
            warnings.push(ConfigWarning::TooManyDefaultItems {
                count: self.default_active_items.len(),
            });
        }

        let mut seen = Vec::with_capacity(self.default_active_items.len());
        for &index in &self.default_active_items {
            if seen.contains(&index) {
                let warning = ConfigWarning::DuplicateDefaultItem { index };
                if !warnings.contains(&warning) {
                    warnings.push(warning);
                }
            } else {
                seen.push(index);
            }
        }

        warnings
    }

    /// Like [`validate`](Self::validate), also checking indices against the
    /// number of rendered panels.
    pub fn validate_for(&self, item_count: usize) -> Vec<ConfigWarning> {
        let mut warnings = self.validate();
        for &index in &self.default_active_items {
            let warning = ConfigWarning::DefaultItemOutOfRange { index, item_count };
            if index >= item_count && !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }
        warnings
    }

    /// Parses a JSON object into a configuration.
    ///
    /// Malformed JSON is an error. A `multiple` value that is not a boolean
    /// is reported as a warning and read as `false`.
    pub fn from_json(json: &str) -> Result<ConfigReport, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(mut map) = value else {
            return Err(ConfigError::NotAnObject);
        };

        let mut warnings = Vec::new();
        let multiple = match map.remove("multiple") {
            None => false,
            Some(Value::Bool(multiple)) => multiple,
            Some(other) => {
                warnings.push(ConfigWarning::MultipleNotBoolean {
                    found: json_type_name(&other).to_string(),
                });
                false
            }
        };

        let mut config: AccordionConfig = serde_json::from_value(Value::Object(map))?;
        config.multiple = multiple;
        warnings.extend(config.validate());

        Ok(ConfigReport { config, warnings })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AccordionConfig::default();
        assert!(!config.multiple);
        assert!(config.default_active_items.is_empty());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_too_many_default_items_in_single_mode() {
        let config = AccordionConfig {
            default_active_items: vec![0, 1],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::TooManyDefaultItems { count: 2 }]
        );
    }

    #[test]
    fn test_many_default_items_allowed_in_multiple_mode() {
        let config = AccordionConfig {
            multiple: true,
            default_active_items: vec![0, 1],
            ..Default::default()
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_duplicate_default_item_reported_once() {
        let config = AccordionConfig {
            multiple: true,
            default_active_items: vec![1, 1, 1],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::DuplicateDefaultItem { index: 1 }]
        );
    }

    #[test]
    fn test_out_of_range_default_item() {
        let config = AccordionConfig {
            default_active_items: vec![7],
            ..Default::default()
        };
        assert!(config.validate().is_empty());
        assert_eq!(
            config.validate_for(5),
            vec![ConfigWarning::DefaultItemOutOfRange {
                index: 7,
                item_count: 5
            }]
        );
    }

    #[test]
    fn test_from_json_full() {
        let report = AccordionConfig::from_json(
            r#"{
                "multiple": true,
                "default_active_items": [0, 2],
                "closed_class": "is-closed",
                "animation_duration": 150,
                "scroll_into_view": true
            }"#,
        )
        .unwrap();

        assert!(report.is_clean());
        assert!(report.config.multiple);
        assert_eq!(report.config.default_active_items, vec![0, 2]);
        assert_eq!(report.config.closed_class.as_deref(), Some("is-closed"));
        assert_eq!(report.config.item.duration_ms(), 150);
        assert!(report.config.item.scrolls_into_view());
    }

    #[test]
    fn test_from_json_non_boolean_multiple_warns() {
        let report = AccordionConfig::from_json(r#"{"multiple": "invalid"}"#).unwrap();
        assert!(!report.config.multiple);
        assert_eq!(
            report.warnings,
            vec![ConfigWarning::MultipleNotBoolean {
                found: "string".to_string()
            }]
        );
    }

    #[test]
    fn test_from_json_single_mode_with_two_defaults_warns_once() {
        let report = AccordionConfig::from_json(r#"{"default_active_items": [0, 1]}"#).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.config.default_active_items, vec![0, 1]);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            AccordionConfig::from_json("[1, 2]"),
            Err(ConfigError::NotAnObject)
        ));
        assert!(matches!(
            AccordionConfig::from_json("{"),
            Err(ConfigError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_warning_messages() {
        let warning = ConfigWarning::TooManyDefaultItems { count: 3 };
        assert_eq!(
            warning.to_string(),
            "Accordion option \"multiple\" is false but \"default_active_items\" has 3 items"
        );
    }
}
