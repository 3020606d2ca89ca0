//! Game settings and preferences
//!
//! Physics constants are compiled in (see [`crate::consts`]). Settings only carry
//! the choices that change how the game feels, stored as JSON.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How the paddle sends the ball back up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddleDeflection {
    /// Vertical-only reflection, horizontal velocity untouched
    #[default]
    Vertical,
    /// Horizontal velocity follows where the ball lands relative to paddle centre
    Angled,
}

impl PaddleDeflection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleDeflection::Vertical => "vertical",
            PaddleDeflection::Angled => "angled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vertical" | "straight" => Some(PaddleDeflection::Vertical),
            "angled" | "angle" => Some(PaddleDeflection::Angled),
            _ => None,
        }
    }
}

/// Error loading settings from disk
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Paddle bounce style
    pub paddle_deflection: PaddleDeflection,
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} (paddle deflection: {})",
            path.display(),
            settings.paddle_deflection.as_str()
        );
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vertical() {
        assert_eq!(Settings::default().paddle_deflection, PaddleDeflection::Vertical);
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(r#"{"paddle_deflection":"angled"}"#).unwrap();
        assert_eq!(settings.paddle_deflection, PaddleDeflection::Angled);

        // Missing fields fall back to defaults
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());

        assert!(Settings::from_json(r#"{"paddle_deflection":"sideways"}"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            paddle_deflection: PaddleDeflection::Angled,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_deflection_from_str() {
        assert_eq!(PaddleDeflection::from_str("Angled"), Some(PaddleDeflection::Angled));
        assert_eq!(PaddleDeflection::from_str("vertical"), Some(PaddleDeflection::Vertical));
        assert_eq!(PaddleDeflection::from_str("diagonal"), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/block-breaker/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert_eq!(
            Settings::load_or_default("/nonexistent/block-breaker/settings.json"),
            Settings::default()
        );
    }
}
