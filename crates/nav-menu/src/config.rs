//! Menu configuration
//!
//! Defaults describe the markup contract the menu binds to: a container with
//! id `nav-menu`, a toggle with id `hamburger`, and an `open` class. A page can
//! override any field by putting JSON in the container's `data-menu-config`
//! attribute.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use web_sys::Document;

use crate::error::{NavError, Result};
use crate::factory::MenuVariant;

/// Default container element id
pub const DEFAULT_CONTAINER_ID: &str = "nav-menu";
/// Default toggle (hamburger) element id
pub const DEFAULT_TOGGLE_ID: &str = "hamburger";
/// Default class marking the container as open
pub const DEFAULT_OPEN_CLASS: &str = "open";
/// Default transition applied to the container
pub const DEFAULT_TRANSITION: &str = "left 0.5s ease-in-out";
/// Default variant tag
pub const DEFAULT_VARIANT: &str = "side";
/// Attribute on the container holding a JSON override
pub const CONFIG_ATTRIBUTE: &str = "data-menu-config";

/// Configuration for binding the menu to page markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// DOM id of the menu container
    pub container_id: String,
    /// DOM id of the toggle control
    pub toggle_id: String,
    /// CSS class expressing the open state
    pub open_class: String,
    /// CSS `transition` value applied once at startup
    pub transition: String,
    /// Variant tag handed to the factory
    pub variant: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            open_class: DEFAULT_OPEN_CLASS.to_string(),
            transition: DEFAULT_TRANSITION.to_string(),
            variant: DEFAULT_VARIANT.to_string(),
        }
    }
}

impl MenuConfig {
    /// Parses a JSON override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `NavError::InvalidConfig` if the JSON is malformed or the
    /// resulting configuration fails [`MenuConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_menu::config::MenuConfig;
    ///
    /// let config = MenuConfig::from_json(r#"{"variant": "top"}"#)?;
    /// assert_eq!(config.variant, "top");
    /// assert_eq!(config.toggle_id, "hamburger");
    /// # Ok::<(), nav_menu::error::NavError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| NavError::InvalidConfig(e.to_string()))
            .and_then(Self::validate)
    }

    /// Checks that ids and class are non-empty and the variant is known.
    ///
    /// # Errors
    ///
    /// Returns `NavError::InvalidConfig` naming the first offending field.
    pub fn validate(self) -> Result<Self> {
        let blank = [
            ("container_id", &self.container_id),
            ("toggle_id", &self.toggle_id),
            ("open_class", &self.open_class),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        if let Some((field, _)) = blank {
            return Err(NavError::InvalidConfig(format!("{field} must not be empty")));
        }

        if self.open_class.contains(char::is_whitespace) {
            return Err(NavError::InvalidConfig(
                "open_class must be a single class name".to_string(),
            ));
        }

        self.variant
            .parse::<MenuVariant>()
            .map_err(|e| NavError::InvalidConfig(e.to_string()))?;

        Ok(self)
    }

    /// Overlays the fields present in a JSON object onto this config.
    ///
    /// Fields absent from `json` keep the values `self` already has, not the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `NavError::InvalidConfig` if `json` is not an object, a field
    /// has the wrong type, or the merged config fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use nav_menu::config::MenuConfig;
    ///
    /// let base = MenuConfig {
    ///     container_id: "drawer".to_string(),
    ///     ..MenuConfig::default()
    /// };
    /// let merged = base.merge_json(r#"{"variant": "top"}"#)?;
    /// assert_eq!(merged.container_id, "drawer");
    /// assert_eq!(merged.variant, "top");
    /// # Ok::<(), nav_menu::error::NavError>(())
    /// ```
    pub fn merge_json(self, json: &str) -> Result<Self> {
        let invalid = |e: serde_json::Error| NavError::InvalidConfig(e.to_string());

        let overrides = match serde_json::from_str::<Value>(json).map_err(invalid)? {
            Value::Object(map) => map,
            other => {
                return Err(NavError::InvalidConfig(format!(
                    "override must be a JSON object, got {other}"
                )));
            }
        };

        let mut merged = serde_json::to_value(&self).map_err(invalid)?;
        if let Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }

        serde_json::from_value::<Self>(merged)
            .map_err(invalid)
            .and_then(Self::validate)
    }

    /// Applies the `data-menu-config` override found on this config's
    /// container element, if any.
    ///
    /// A missing container is not an error here; binding reports it later
    /// with the element role attached.
    ///
    /// # Errors
    ///
    /// Returns `NavError::InvalidConfig` if the attribute holds invalid JSON.
    pub fn with_overrides_from(self, document: &Document) -> Result<Self> {
        match document
            .get_element_by_id(&self.container_id)
            .and_then(|container| container.get_attribute(CONFIG_ATTRIBUTE))
        {
            Some(json) => self.merge_json(&json),
            None => Ok(self),
        }
    }
}
