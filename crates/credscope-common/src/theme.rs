//! Page palette and the rating colour rule.
//!
//! Built once at startup (optionally from a TOML file) and shared immutably
//! through the application state; there is no global mutable styling.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CredscopeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Brand colour, also the neutral fallback for unrecognised ratings
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_risk_red")]
    pub risk_red: String,

    #[serde(default = "default_risk_amber")]
    pub risk_amber: String,

    #[serde(default = "default_risk_green")]
    pub risk_green: String,

    /// Card and page surface colour
    #[serde(default = "default_surface")]
    pub surface: String,

    #[serde(default = "default_border")]
    pub border: String,

    #[serde(default = "default_text_muted")]
    pub text_muted: String,
}

fn default_primary() -> String {
    "#1e3c72".to_string()
}

fn default_risk_red() -> String {
    "#ef4444".to_string()
}

fn default_risk_amber() -> String {
    "#f59e0b".to_string()
}

fn default_risk_green() -> String {
    "#10b981".to_string()
}

fn default_surface() -> String {
    "#f8f9fa".to_string()
}

fn default_border() -> String {
    "#e2e8f0".to_string()
}

fn default_text_muted() -> String {
    "#4a5568".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            risk_red: default_risk_red(),
            risk_amber: default_risk_amber(),
            risk_green: default_risk_green(),
            surface: default_surface(),
            border: default_border(),
            text_muted: default_text_muted(),
        }
    }
}

impl Theme {
    /// Load the palette from `path`, or the built-in defaults when no path
    /// is configured.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    CredscopeError::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                Ok(toml::from_str(&raw)?)
            }
        }
    }

    /// Colour for a rating label. Case-insensitive substring match,
    /// first-match priority: poor/high, then fair/moderate, then good,
    /// otherwise the neutral brand colour. Every label maps exactly once.
    pub fn rating_color(&self, rating: &str) -> &str {
        let rating = rating.to_ascii_lowercase();
        if rating.contains("poor") || rating.contains("high") {
            &self.risk_red
        } else if rating.contains("fair") || rating.contains("moderate") {
            &self.risk_amber
        } else if rating.contains("good") {
            &self.risk_green
        } else {
            &self.primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_color_priority() {
        let theme = Theme::default();
        // First-match order: red before amber before green before fallback.
        assert_eq!(theme.rating_color("Poor"), "#ef4444");
        assert_eq!(theme.rating_color("High Risk"), "#ef4444");
        assert_eq!(theme.rating_color("Fair"), "#f59e0b");
        assert_eq!(theme.rating_color("Moderate Risk"), "#f59e0b");
        assert_eq!(theme.rating_color("Good"), "#10b981");
        assert_eq!(theme.rating_color("Excellent"), "#1e3c72");
    }

    #[test]
    fn test_rating_color_is_case_insensitive() {
        let theme = Theme::default();
        assert_eq!(theme.rating_color("POOR"), theme.rating_color("poor"));
        assert_eq!(theme.rating_color("gOOd"), "#10b981");
    }

    #[test]
    fn test_partial_theme_file_keeps_defaults() {
        let theme: Theme = toml::from_str(r##"primary = "#112233""##).unwrap();
        assert_eq!(theme.primary, "#112233");
        assert_eq!(theme.risk_red, "#ef4444");
        // The fallback follows the overridden brand colour.
        assert_eq!(theme.rating_color("Excellent"), "#112233");
    }
}
