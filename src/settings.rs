//! Persisted user preferences (theme and language)
//!
//! Stored in the same key-value store as the favorites:
//! - `themeMode` - JSON boolean, `true` for dark
//! - `user-language` - bare language code

use crate::language::Language;
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::ThemeMode;

/// Key holding the dark-mode flag
pub const THEME_KEY: &str = "themeMode";

/// Key holding the language code
pub const LANGUAGE_KEY: &str = "user-language";

/// Preference access over a key-value store
pub struct Settings<S> {
    storage: S,
}

impl<S: KeyValueStore> Settings<S> {
    /// Wrap a key-value store
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored theme, or light if missing or unreadable
    pub async fn theme(&self) -> ThemeMode {
        match self.storage.get_value(THEME_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => ThemeMode::from_dark(dark),
                Err(e) => {
                    tracing::warn!("Ignoring stored theme {:?}: {}", raw, e);
                    ThemeMode::default()
                }
            },
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!("Failed to load theme: {}", e);
                ThemeMode::default()
            }
        }
    }

    /// Persist a theme
    pub async fn set_theme(&self, mode: ThemeMode) -> Result<(), StorageError> {
        let raw = if mode.is_dark() { "true" } else { "false" };
        self.storage.set_value(THEME_KEY, raw).await
    }

    /// Flip between light and dark, returning the new mode
    pub async fn toggle_theme(&self) -> Result<ThemeMode, StorageError> {
        let mode = self.theme().await.toggle();
        self.set_theme(mode).await?;
        Ok(mode)
    }

    /// Stored language, or English if missing, unknown or unreadable
    pub async fn language(&self) -> Language {
        match self.storage.get_value(LANGUAGE_KEY).await {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!("Unsupported language {:?}, using English", code);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::warn!("Failed to load language: {}", e);
                Language::default()
            }
        }
    }

    /// Persist a language
    pub async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.storage.set_value(LANGUAGE_KEY, language.code()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let settings = Settings::new(MemoryStore::new());
        assert_eq!(settings.theme().await, ThemeMode::Light);
        assert_eq!(settings.language().await, Language::English);
    }

    #[tokio::test]
    async fn test_toggle_theme_persists() {
        let storage = MemoryStore::new();
        let settings = Settings::new(storage.clone());

        assert_eq!(settings.toggle_theme().await.unwrap(), ThemeMode::Dark);
        assert_eq!(storage.raw(THEME_KEY).as_deref(), Some("true"));
        assert_eq!(Settings::new(storage).theme().await, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_language_persists() {
        let storage = MemoryStore::new();
        let settings = Settings::new(storage.clone());

        settings.set_language(Language::German).await.unwrap();
        assert_eq!(storage.raw(LANGUAGE_KEY).as_deref(), Some("de"));
        assert_eq!(settings.language().await, Language::German);
    }

    #[tokio::test]
    async fn test_bad_values_fall_back() {
        let storage = MemoryStore::new();
        storage.insert_raw(THEME_KEY, "maybe");
        storage.insert_raw(LANGUAGE_KEY, "ar");

        let settings = Settings::new(storage);
        assert_eq!(settings.theme().await, ThemeMode::Light);
        assert_eq!(settings.language().await, Language::English);
    }

    #[test]
    fn test_read_failure_falls_back() {
        let storage = MemoryStore::new();
        storage.insert_raw(THEME_KEY, "true");
        storage.set_fail_reads(true);

        let settings = Settings::new(storage);
        assert_eq!(tokio_test::block_on(settings.theme()), ThemeMode::Light);
    }

    #[test]
    fn test_failed_toggle_reports_error() {
        let storage = MemoryStore::new();
        storage.set_fail_writes(true);

        let settings = Settings::new(storage.clone());
        assert!(tokio_test::block_on(settings.toggle_theme()).is_err());
        assert!(storage.raw(THEME_KEY).is_none());
    }
}
