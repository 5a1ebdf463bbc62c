use std::fmt;

use serde::{Deserialize, Serialize};

/// Local storage key holding the visitor's choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// A stored preference wins; otherwise follow the system.
    pub fn initial(stored: Option<ThemePreference>) -> Self {
        stored.unwrap_or_default()
    }

    pub fn resolve(&self, system_dark: bool) -> Appearance {
        match self {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::System if system_dark => Appearance::Dark,
            ThemePreference::System => Appearance::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Appearance::Light => "☀",
            Appearance::Dark => "☾",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_defaults_to_system() {
        assert_eq!(ThemePreference::initial(None), ThemePreference::System);
        assert_eq!(
            ThemePreference::initial(Some(ThemePreference::Dark)),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ThemePreference::System.resolve(true), Appearance::Dark);
        assert_eq!(ThemePreference::System.resolve(false), Appearance::Light);
        assert_eq!(ThemePreference::Light.resolve(true), Appearance::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), Appearance::Dark);
    }
}
