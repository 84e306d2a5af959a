use std::path::Path;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use udk_audit::DesignSystem;

/// CLI settings, merged from defaults and an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// The vocabulary the audit checks against.
    pub design_system: DesignSystem,
}

impl Settings {
    /// Load settings from `config_file_name`.
    ///
    /// With no file the defaults are used as-is; an unreadable or invalid
    /// file logs an error and falls back to defaults.
    #[must_use]
    pub fn new(config_file_name: Option<&Path>) -> Self {
        let default_settings = Self::default();
        let Some(config_file_name) = config_file_name else {
            return default_settings;
        };
        match Self::new_from_default(&default_settings, config_file_name) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(
                    "Error reading config file, falling back to defaults. Error: {e:?}"
                );
                default_settings
            }
        }
    }

    fn new_from_default(default: &Settings, config_file_name: &Path) -> Result<Self, ConfigError> {
        let config: Config = Config::builder()
            // use defaults
            .add_source(Config::try_from(default)?)
            // override with file contents
            .add_source(File::with_name(&config_file_name.to_string_lossy()))
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_no_file_uses_defaults() {
        let settings = Settings::new(None);
        assert!(settings.design_system.is_button_class("btn-primary"));
        assert_eq!(settings.design_system.form_control_class, "form-control");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::new(Some(Path::new("/nonexistent/udk.toml")));
        assert_eq!(settings.design_system, DesignSystem::default());
    }

    #[test]
    fn test_file_overrides_merge_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
[design_system]
button_classes = ["btn-brand", "btn-primary"]
"#
        )
        .expect("write config");

        let settings = Settings::new(Some(&path));
        assert!(settings.design_system.is_button_class("btn-brand"));
        assert!(!settings.design_system.is_button_class("btn-secondary"));
        // untouched keys keep their defaults
        assert_eq!(settings.design_system.generic_button_class, "btn");
    }
}
