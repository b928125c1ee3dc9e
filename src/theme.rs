//! Theme variables for slide styling
//!
//! Templates never hard-code a themable color or font. Each property is
//! read from a named theme variable, with the template's own constant used
//! when the theme leaves that variable unset. The default theme is empty,
//! so every template keeps its built-in look unless a host overrides it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The styling properties a theme can override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVar {
    PrimaryAccent,
    TextHeading,
    TextBody,
    CardBackground,
    HeadingFont,
}

impl ThemeVar {
    pub const ALL: [ThemeVar; 5] = [
        ThemeVar::PrimaryAccent,
        ThemeVar::TextHeading,
        ThemeVar::TextBody,
        ThemeVar::CardBackground,
        ThemeVar::HeadingFont,
    ];

    /// The variable's name in theme files
    pub fn name(self) -> &'static str {
        match self {
            ThemeVar::PrimaryAccent => "primary-accent-color",
            ThemeVar::TextHeading => "text-heading-color",
            ThemeVar::TextBody => "text-body-color",
            ThemeVar::CardBackground => "card-background-color",
            ThemeVar::HeadingFont => "heading-font-family",
        }
    }
}

/// A read-only set of theme variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Variable name -> value
    pub variables: BTreeMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    variables: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Theme {
    /// A theme that overrides nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            variables: parsed.variables,
        })
    }

    /// Set a variable
    pub fn with(mut self, var: ThemeVar, value: impl Into<String>) -> Self {
        self.variables.insert(var.name().to_string(), value.into());
        self
    }

    /// Look up a variable by its file name
    ///
    /// Returns None if the variable is not defined in this theme.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Resolve a variable, falling back to the caller's constant
    pub fn resolve(&self, var: ThemeVar, fallback: &str) -> String {
        self.get(var.name()).unwrap_or(fallback).to_string()
    }

    /// Variables this theme sets that no template reads
    pub fn unknown_variables(&self) -> Vec<&str> {
        self.variables
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !ThemeVar::ALL.iter().any(|v| v.name() == *k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_theme_uses_fallback() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(ThemeVar::PrimaryAccent, "#1e3a8a"), "#1e3a8a");
        assert_eq!(theme.resolve(ThemeVar::HeadingFont, "Inter"), "Inter");
    }

    #[test]
    fn test_override_wins() {
        let theme = Theme::new().with(ThemeVar::PrimaryAccent, "#ff0000");
        assert_eq!(theme.resolve(ThemeVar::PrimaryAccent, "#1e3a8a"), "#ff0000");
        assert_eq!(theme.resolve(ThemeVar::TextBody, "#64748b"), "#64748b");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Night"
description = "Dark slides"

[variables]
primary-accent-color = "#22d3ee"
card-background-color = "#020617"
"##;
        let theme = Theme::from_toml(toml_str).expect("Should parse");
        assert_eq!(theme.name, Some("Night".to_string()));
        assert_eq!(theme.description, Some("Dark slides".to_string()));
        assert_eq!(theme.get("primary-accent-color"), Some("#22d3ee"));
        assert_eq!(theme.resolve(ThemeVar::CardBackground, "#ffffff"), "#020617");
    }

    #[test]
    fn test_parse_toml_without_variables() {
        let theme = Theme::from_toml("[metadata]\nname = \"Bare\"\n").expect("Should parse");
        assert!(theme.variables.is_empty());
    }

    #[test]
    fn test_unknown_variables() {
        let theme = Theme::from_toml("[variables]\naccent = \"#000\"\ntext-body-color = \"#111\"\n")
            .expect("Should parse");
        assert_eq!(theme.unknown_variables(), vec!["accent"]);
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(matches!(
            Theme::from_toml(invalid),
            Err(ThemeError::ParseError(_))
        ));
    }
}
