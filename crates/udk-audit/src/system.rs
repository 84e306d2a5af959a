//! Design system vocabulary

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PIXEL_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+px").expect("valid regex"));

/// The class and custom-property vocabulary the audit checks against.
///
/// Defaults mirror the design system the host application ships with;
/// deployments extend the sets through the CLI settings file. Every field
/// has a default, so a settings file may override any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSystem {
    /// Button classes that count as design system buttons.
    pub button_classes: Vec<String>,
    /// Generic button class accepted as a fallback.
    pub generic_button_class: String,
    /// Class required on form controls.
    pub form_control_class: String,
    /// Alternative class accepted on `<input>` elements only.
    pub input_alternative_class: String,
    /// Marker exempting a spacing value from the pixel check.
    pub spacing_variable_marker: String,
    /// Marker exempting a color value from the hardcoded check.
    pub custom_property_marker: String,
}

impl Default for DesignSystem {
    fn default() -> Self {
        Self {
            button_classes: vec![
                "btn-primary".to_string(),
                "btn-secondary".to_string(),
                "btn-primary-new".to_string(),
                "btn-secondary-new".to_string(),
            ],
            generic_button_class: "btn".to_string(),
            form_control_class: "form-control".to_string(),
            input_alternative_class: "form-input-new".to_string(),
            spacing_variable_marker: "var(--spacing".to_string(),
            custom_property_marker: "var(--".to_string(),
        }
    }
}

impl DesignSystem {
    /// Whether `class` is one of the recognized button classes.
    pub fn is_button_class(&self, class: &str) -> bool {
        self.button_classes.iter().any(|known| known == class)
    }

    /// Whether a color declaration value hardcodes a color.
    ///
    /// A value referencing a custom property is exempt, including when a raw
    /// fallback rides along inside `var(...)`.
    pub fn is_hardcoded_color(&self, value: &str) -> bool {
        (value.contains('#') || value.contains("rgb"))
            && !value.contains(&self.custom_property_marker)
    }

    /// Whether a spacing declaration value hardcodes pixel lengths.
    pub fn is_hardcoded_spacing(&self, value: &str) -> bool {
        PIXEL_VALUE.is_match(value) && !value.contains(&self.spacing_variable_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let system = DesignSystem::default();
        assert!(system.is_button_class("btn-primary"));
        assert!(system.is_button_class("btn-secondary-new"));
        assert!(!system.is_button_class("btn"));
        assert_eq!(system.generic_button_class, "btn");
        assert_eq!(system.form_control_class, "form-control");
    }

    #[test]
    fn test_hardcoded_color_detection() {
        let system = DesignSystem::default();
        assert!(system.is_hardcoded_color("#ff0000"));
        assert!(system.is_hardcoded_color("rgb(255, 0, 0)"));
        assert!(system.is_hardcoded_color("rgba(0,0,0,0.5)"));
        assert!(!system.is_hardcoded_color("var(--primary-color)"));
        assert!(!system.is_hardcoded_color("var(--primary-color, #fff)"));
        assert!(!system.is_hardcoded_color("red"));
    }

    #[test]
    fn test_hardcoded_spacing_detection() {
        let system = DesignSystem::default();
        assert!(system.is_hardcoded_spacing("10px"));
        assert!(system.is_hardcoded_spacing("0 4px 0 4px"));
        assert!(!system.is_hardcoded_spacing("var(--spacing-md)"));
        assert!(!system.is_hardcoded_spacing("1rem"));
        assert!(!system.is_hardcoded_spacing("0"));
    }

    #[test]
    fn test_partial_settings_fill_in_defaults() {
        let system: DesignSystem =
            serde_json::from_str(r#"{"button_classes": ["btn-brand"]}"#).expect("valid settings");
        assert!(system.is_button_class("btn-brand"));
        assert!(!system.is_button_class("btn-primary"));
        assert_eq!(system.form_control_class, "form-control");
    }
}
