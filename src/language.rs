//! UI language selection

use serde::{Deserialize, Serialize};

/// Languages the UI ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English, also the fallback
    #[default]
    #[serde(rename = "en")]
    English,
    /// Dutch
    #[serde(rename = "nl")]
    Dutch,
    /// German
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// Get all supported languages
    pub const fn all() -> &'static [Self] {
        &[Self::English, Self::Dutch, Self::German]
    }

    /// ISO 639-1 code, as stored
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Dutch => "nl",
            Self::German => "de",
        }
    }

    /// Get the display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Dutch => "Dutch",
            Self::German => "German",
        }
    }

    /// Parse a language code (`en`, `nl-NL`, ...)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "en" => Some(Self::English),
            "nl" => Some(Self::Dutch),
            "de" => Some(Self::German),
            _ => None,
        }
    }

    /// Like `from_code`, falling back to English
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Text of a CLI message in this language
    pub const fn text(self, message: Message) -> &'static str {
        match (message, self) {
            (Message::NoEventsFound, Self::English) => "No events found.",
            (Message::NoEventsFound, Self::Dutch) => "Geen evenementen gevonden.",
            (Message::NoEventsFound, Self::German) => "Keine Veranstaltungen gefunden.",
            (Message::NoFavoriteEvents, Self::English) => "No favorite events yet.",
            (Message::NoFavoriteEvents, Self::Dutch) => "Nog geen favoriete evenementen.",
            (Message::NoFavoriteEvents, Self::German) => {
                "Keine Lieblingsveranstaltungen vorhanden."
            }
            (Message::Favorites, Self::English) => "Favorites",
            (Message::Favorites, Self::Dutch) => "Favorieten",
            (Message::Favorites, Self::German) => "Favoriten",
            (Message::AddedToFavorites, Self::English) => "Added to favorites",
            (Message::AddedToFavorites, Self::Dutch) => "Toegevoegd aan favorieten",
            (Message::AddedToFavorites, Self::German) => "Zu Favoriten hinzugefügt",
            (Message::RemovedFromFavorites, Self::English) => "Removed from favorites",
            (Message::RemovedFromFavorites, Self::Dutch) => "Verwijderd uit favorieten",
            (Message::RemovedFromFavorites, Self::German) => "Aus Favoriten entfernt",
        }
    }
}

/// Messages the CLI prints in the user's language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The feed returned nothing
    NoEventsFound,
    /// The favorites list is empty
    NoFavoriteEvents,
    /// Heading of the favorites list
    Favorites,
    /// Confirmation after adding a favorite
    AddedToFavorites,
    /// Confirmation after removing a favorite
    RemovedFromFavorites,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_region_suffix() {
        assert_eq!(Language::from_code("nl-NL"), Some(Language::Dutch));
        assert_eq!(Language::from_code("DE_at"), Some(Language::German));
    }

    #[test]
    fn test_messages_follow_language() {
        assert_eq!(
            Language::English.text(Message::NoFavoriteEvents),
            "No favorite events yet."
        );
        assert_eq!(
            Language::Dutch.text(Message::NoFavoriteEvents),
            "Nog geen favoriete evenementen."
        );
        assert_eq!(Language::German.text(Message::Favorites), "Favoriten");
        assert_ne!(
            Language::Dutch.text(Message::NoEventsFound),
            Language::German.text(Message::NoEventsFound)
        );
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(Language::from_code("ar"), None);
        assert_eq!(Language::from_code_or_default("ar"), Language::English);
        assert_eq!(Language::from_code_or_default(""), Language::English);
    }
}
