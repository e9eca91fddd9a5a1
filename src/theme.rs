//! Light/dark theme and its colors.

use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl ThemeMode {
    /// Get the other mode
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Check if this is the dark mode
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Mode for a stored dark-mode flag
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Get the display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" | "off" => Some(Self::Light),
            "dark" | "on" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Get the color palette for this mode
    pub const fn colors(self) -> ThemeColors {
        match self {
            Self::Light => ThemeColors {
                background: "#ffffff",
                surface: "#ffffff",
                text: "#000000",
                accent: "tomato",
                inactive: "gray",
            },
            Self::Dark => ThemeColors {
                background: "#121212",
                surface: "#000000",
                text: "#ffffff",
                accent: "purple",
                inactive: "gray",
            },
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Colors for the screens (CSS color strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Screen background
    pub background: &'static str,
    /// Tab bar and header background
    pub surface: &'static str,
    /// Primary text
    pub text: &'static str,
    /// Active tab tint
    pub accent: &'static str,
    /// Inactive tab tint
    pub inactive: &'static str,
}
