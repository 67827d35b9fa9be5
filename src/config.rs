//! Settings file support
//!
//! Settings are read from TOML. Any key left out falls back to the built-in
//! defaults below.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Built-in settings
const DEFAULT_SETTINGS: &str = r#"
[shortcode]
# Tag name recognised in content: [favlink url="..."]
tag = "favlink"

[styles]
# Emit the live-page stylesheet
front_end = true
# Emit the block editor stylesheet
editor = false
"#;

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Shortcode tag name
    pub tag: String,
    /// Emit the front-end stylesheet when a link rendered
    pub front_end_styles: bool,
    /// Emit the editor-canvas stylesheet when a link rendered
    pub editor_styles: bool,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    shortcode: Option<TomlShortcode>,
    styles: Option<TomlStyles>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlShortcode {
    tag: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlStyles {
    front_end: Option<bool>,
    editor: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string, filling gaps from the defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let defaults: TomlSettings = toml::from_str(DEFAULT_SETTINGS)?;
        Self::merge(parsed, defaults)
    }

    fn merge(parsed: TomlSettings, defaults: TomlSettings) -> Result<Self, ConfigError> {
        let shortcode = parsed.shortcode.unwrap_or_default();
        let styles = parsed.styles.unwrap_or_default();
        let default_shortcode = defaults.shortcode.unwrap_or_default();
        let default_styles = defaults.styles.unwrap_or_default();

        let tag = shortcode
            .tag
            .or(default_shortcode.tag)
            .unwrap_or_else(|| "favlink".to_string());
        validate_tag(&tag)?;

        Ok(Settings {
            tag,
            front_end_styles: styles.front_end.or(default_styles.front_end).unwrap_or(true),
            editor_styles: styles.editor.or(default_styles.editor).unwrap_or(false),
        })
    }
}

/// Tag names follow attribute-name rules: letters, digits, `-` and `_`
pub fn validate_tag(tag: &str) -> Result<(), ConfigError> {
    let valid = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidTag(tag.to_string()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tag: "favlink".to_string(),
            front_end_styles: true,
            editor_styles: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_embedded_toml() {
        let parsed = Settings::from_str("").expect("Should parse");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_partial_settings() {
        let settings = Settings::from_str(
            r#"
[styles]
editor = true
"#,
        )
        .expect("Should parse");
        assert_eq!(settings.tag, "favlink");
        assert!(settings.front_end_styles);
        assert!(settings.editor_styles);
    }

    #[test]
    fn test_custom_tag() {
        let settings = Settings::from_str(
            r#"
[shortcode]
tag = "site-icon"
"#,
        )
        .expect("Should parse");
        assert_eq!(settings.tag, "site-icon");
    }

    #[test]
    fn test_invalid_tag_rejected() {
        let result = Settings::from_str(
            r#"
[shortcode]
tag = "fav link"
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidTag(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Settings::from_str(
            r#"
[styles]
colour = "red"
"#,
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(Settings::from_str(invalid).is_err());
    }
}
