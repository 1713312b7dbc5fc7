//! Theme preference
//!
//! A single process-wide UI preference constrained to an allow-list.
//! Invalid or missing persisted values fall back to the default instead
//! of erroring.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{KeyValueStore, StorageResult, THEME_KEY};

/// Allowed UI themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// All allowed theme names
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: '{}'", other)),
        }
    }
}

/// Persisted theme preference
pub struct ThemePreference {
    theme: Theme,
    store: Arc<dyn KeyValueStore>,
}

impl ThemePreference {
    /// Initialize from storage, falling back to the default theme when the
    /// key is absent or holds a name outside the allow-list
    pub fn load(store: Arc<dyn KeyValueStore>) -> StorageResult<Self> {
        let theme = match store.get(THEME_KEY)? {
            Some(raw) => match raw.parse() {
                Ok(theme) => theme,
                Err(_) => {
                    warn!(value = %raw, "Invalid persisted theme, using default");
                    Theme::default()
                }
            },
            None => Theme::default(),
        };

        Ok(Self { theme, store })
    }

    /// Current theme
    pub fn get(&self) -> Theme {
        self.theme
    }

    /// Validate a requested theme name, falling back to the default on
    /// invalid input, then persist and apply the result
    ///
    /// Returns the theme actually applied.
    pub fn set(&mut self, name: &str) -> StorageResult<Theme> {
        let theme = name.parse().unwrap_or_else(|_| {
            warn!(value = %name, "Invalid theme requested, using default");
            Theme::default()
        });

        self.theme = theme;
        self.store.set(THEME_KEY, theme.name())?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_allow_list() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" DARK ".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_when_unset() {
        let prefs = ThemePreference::load(Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(prefs.get(), Theme::Light);
    }

    #[test]
    fn test_set_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = ThemePreference::load(store.clone()).unwrap();

        assert_eq!(prefs.set("dark").unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let reloaded = ThemePreference::load(store).unwrap();
        assert_eq!(reloaded.get(), Theme::Dark);
    }

    #[test]
    fn test_invalid_set_falls_back_and_persists_default() {
        let store = Arc::new(MemoryStore::new());
        let mut prefs = ThemePreference::load(store.clone()).unwrap();
        prefs.set("dark").unwrap();

        assert_eq!(prefs.set("neon").unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_invalid_persisted_value_falls_back() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "hotdog-stand").unwrap();

        let prefs = ThemePreference::load(store).unwrap();
        assert_eq!(prefs.get(), Theme::Light);
    }
}
