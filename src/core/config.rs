//! Configuration management for termfolio
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/termfolio/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, TermfolioError};

/// Main configuration for termfolio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Prompt configuration
    #[serde(default)]
    pub prompt: PromptConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Session behaviour
    #[serde(default)]
    pub session: SessionConfig,
}

/// Prompt marker shown before echoed commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Visitor name, also reported by `whoami` (default: visitor)
    pub user: String,
    /// Host name (default: jacopo)
    pub host: String,
    /// Working directory shown in the prompt (default: ~)
    pub path: String,
}

/// Colour themes cycled by `theme`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Ordered theme names; the first is the default look
    pub names: Vec<String>,
    /// Theme active at startup
    pub initial: String,
}

/// Session behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Render the README card before the first prompt
    pub show_readme: bool,
    /// Fixed seed for joke selection; OS entropy when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Theme names available out of the box
pub const DEFAULT_THEMES: [&str; 4] = ["default", "matrix", "cyberpunk", "retro"];

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: env::var("TERMFOLIO_USER").unwrap_or_else(|_| "visitor".to_string()),
            host: env::var("TERMFOLIO_HOST").unwrap_or_else(|_| "jacopo".to_string()),
            path: "~".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_THEMES.iter().map(|t| t.to_string()).collect(),
            initial: env::var("TERMFOLIO_THEME").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_readme: env::var("TERMFOLIO_SHOW_README")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            seed: env::var("TERMFOLIO_SEED").ok().and_then(|s| s.parse().ok()),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfolio")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > config file > env vars > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        match Self::load_from_file() {
            Ok(config) => return config,
            Err(e) if Self::config_exists() => {
                tracing::warn!(error = %e, "ignoring unreadable config file");
            }
            Err(_) => {}
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from the default config file only
    pub fn load_from_file() -> Result<Self> {
        Self::load_from_path(Self::config_file())
    }

    /// Load and validate configuration from a specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TermfolioError::config("Config file not found"));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TermfolioError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| TermfolioError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config file");

        Ok(config)
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Reject settings the terminal cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.theme.names.is_empty() {
            return Err(TermfolioError::config("theme.names must not be empty"));
        }
        if !self.is_known_theme(&self.theme.initial) {
            return Err(TermfolioError::unknown_theme(&self.theme.initial));
        }
        if self.prompt.user.trim().is_empty() {
            return Err(TermfolioError::config("prompt.user must not be empty"));
        }
        Ok(())
    }

    /// Check if a theme is in the configured list
    pub fn is_known_theme(&self, name: &str) -> bool {
        self.theme.names.iter().any(|t| t == name)
    }

    /// Select the startup theme
    pub fn set_initial_theme(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !self.is_known_theme(&name) {
            return Err(TermfolioError::unknown_theme(name));
        }
        self.theme.initial = name;
        Ok(())
    }

    /// Prompt marker, e.g. `visitor@jacopo:~$`
    pub fn prompt_marker(&self) -> String {
        format!(
            "{}@{}:{}$",
            self.prompt.user, self.prompt.host, self.prompt.path
        )
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.names, DEFAULT_THEMES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prompt_marker() {
        let mut config = Config::default();
        config.prompt.user = "visitor".to_string();
        config.prompt.host = "jacopo".to_string();
        assert_eq!(config.prompt_marker(), "visitor@jacopo:~$");
    }

    #[test]
    fn test_set_initial_theme() {
        let mut config = Config::default();
        assert!(config.set_initial_theme("retro").is_ok());
        assert_eq!(config.theme.initial, "retro");
        assert!(matches!(
            config.set_initial_theme("solarized"),
            Err(TermfolioError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_themes() {
        let mut config = Config::default();
        config.theme.names.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[prompt]
user = "guest"
host = "portfolio"
path = "~"

[theme]
names = ["default", "retro"]
initial = "retro"
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.prompt.user, "guest");
        assert_eq!(config.theme.initial, "retro");
        assert_eq!(config.theme.names.len(), 2);
    }

    #[test]
    fn test_load_from_path_rejects_unknown_initial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[theme]\nnames = [\"default\"]\ninitial = \"matrix\"\n"
        )
        .unwrap();

        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_path("/nonexistent/termfolio.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_config_serialization() {
        let toml_str = Config::default_config_toml();
        assert!(toml_str.contains("[prompt]"));
        assert!(toml_str.contains("names"));
    }
}
