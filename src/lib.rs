//! # eventmap
//!
//! Find events near you and keep the ones you like.
//!
//! ## Overview
//!
//! eventmap fetches a list of events from a remote feed, lets you mark
//! events as favorites that survive restarts, and remembers your theme and
//! language preferences.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CLI (main.rs)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │    Favorites    │ │    Settings     │ │       API       │
//! │                 │ │                 │ │                 │
//! │ • add / remove  │ │ • Theme mode    │ │ • Event feed    │
//! │ • is_favorite   │ │ • Language      │ │ • Shape checks  │
//! │ • subscribe     │ │                 │ │                 │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │
//!          └─────────┬─────────┘
//!                    ▼
//!          ┌─────────────────┐
//!          │     Storage     │
//!          │                 │
//!          │ • SQLite        │
//!          │ • In-memory     │
//!          └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Event feed client
//! - [`config`] — Configuration management
//! - [`favorites`] — Persisted favorites store
//! - [`language`] — UI language selection
//! - [`models`] — Data models (Event)
//! - [`settings`] — Persisted theme and language
//! - [`storage`] — Key-value persistence (`SQLite`, in-memory)
//! - [`theme`] — Light/dark mode
//!
//! ## Example
//!
//! ```no_run
//! use eventmap::{Event, EventId, FavoritesStore, MemoryStore};
//!
//! # async fn demo() -> Result<(), eventmap::favorites::FavoritesError> {
//! let store = FavoritesStore::open(MemoryStore::new()).await;
//! store.add(Event::new(1, "Jazz", "Live music", 51.92, 4.48)).await?;
//! assert!(store.is_favorite(&EventId::from(1)));
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/eventmap/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::future_not_send)]

pub mod api;
pub mod config;
pub mod favorites;
pub mod language;
pub mod models;
pub mod paths;
pub mod settings;
pub mod storage;
pub mod theme;

// Re-export main types for convenience
pub use config::Config;
pub use favorites::{FavoriteSet, FavoritesError, FavoritesStore, FavoritesView};
pub use language::{Language, Message};
pub use models::{Event, EventId};
pub use settings::Settings;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError};
pub use theme::{ThemeColors, ThemeMode};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
