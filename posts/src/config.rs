use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::i18n::Lang;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

impl BuildMode {
    pub fn include_drafts(self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid SITE_MODE {0:?}")]
    #[diagnostic(
        code(posts::config::mode),
        help("Use `production` or `development`")
    )]
    InvalidMode(String),
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(BuildMode::Production),
            "development" | "dev" => Ok(BuildMode::Development),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub mode: BuildMode,
    pub lang: Lang,
    pub base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            lang: Lang::default(),
            base: "/".to_string(),
        }
    }
}

impl SiteConfig {
    #[instrument(name = "SiteConfig::from_env", err)]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads the config through `var`, so callers can supply values from
    /// somewhere other than the process environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode = var("SITE_MODE")
            .map(|mode| mode.parse())
            .transpose()?
            .unwrap_or_default();

        let lang = match var("SITE_LANG") {
            Some(code) => code.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to English");
                Lang::default()
            }),
            None => Lang::default(),
        };

        let base = var("SITE_BASE")
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| "/".to_string());

        Ok(Self { mode, lang, base })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_production() {
        let config = SiteConfig::from_vars(vars(&[])).unwrap();

        assert_eq!(config, SiteConfig::default());
        assert!(!config.mode.include_drafts());
    }

    #[test]
    fn development_includes_drafts() {
        let config =
            SiteConfig::from_vars(vars(&[("SITE_MODE", "dev"), ("SITE_LANG", "ja")])).unwrap();

        assert_eq!(config.mode, BuildMode::Development);
        assert!(config.mode.include_drafts());
        assert_eq!(config.lang, Lang::Ja);
    }

    #[test]
    fn unknown_lang_falls_back() {
        let config = SiteConfig::from_vars(vars(&[("SITE_LANG", "xx")])).unwrap();

        assert_eq!(config.lang, Lang::En);
    }

    #[test]
    fn bad_mode_is_an_error() {
        let err = SiteConfig::from_vars(vars(&[("SITE_MODE", "staging")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidMode(mode) if mode == "staging"));
    }
}
