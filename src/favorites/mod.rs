//! Favorite events, persisted write-through
//!
//! [`FavoritesStore`] is the single owner of the favorited events. Every
//! add/remove is written to the [`KeyValueStore`] before it becomes visible,
//! so a failed write leaves both the in-memory set and the stored blob as
//! they were. Readers get a non-blocking view through [`FavoritesView`],
//! which is notified after each successful change.

mod set;

pub use set::FavoriteSet;

use tokio::sync::{Mutex, watch};

use crate::models::{Event, EventId};
use crate::storage::{KeyValueStore, StorageError};

/// Key holding the JSON array of favorited events
pub const FAVORITES_KEY: &str = "favoriteEvents";

/// Errors from loading or changing favorites
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// The stored blob is not a JSON array of events
    #[error("Stored favorites are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The key-value store could not be read
    #[error("Failed to read favorites: {0}")]
    Read(#[source] StorageError),

    /// The key-value store rejected the write; nothing changed
    #[error("Failed to save favorites: {0}")]
    Write(#[source] StorageError),

    /// The set could not be serialized
    #[error("Failed to encode favorites: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Whether the store has read its persisted state yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing read successfully yet
    #[default]
    Unloaded,
    /// The in-memory set reflects what was stored
    Loaded,
}

/// Persisted set of favorite events
pub struct FavoritesStore<S> {
    storage: S,
    /// Held for the whole read-modify-write of load/add/remove.
    state: Mutex<LoadState>,
    favorites: watch::Sender<FavoriteSet>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Create an unloaded store. The first add/remove loads it implicitly.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: Mutex::new(LoadState::Unloaded),
            favorites: watch::Sender::new(FavoriteSet::new()),
        }
    }

    /// Create a store and load it, starting empty if the stored data is
    /// unusable.
    pub async fn open(storage: S) -> Self {
        let store = Self::new(storage);
        if let Err(e) = store.load().await {
            tracing::warn!("Starting with no favorites: {}", e);
        }
        store
    }

    /// Read the persisted favorites into memory.
    ///
    /// A corrupt blob still leaves the store loaded, with an empty set. A
    /// failed read leaves it unloaded so the next change retries instead of
    /// overwriting data it never saw.
    pub async fn load(&self) -> Result<FavoriteSet, FavoritesError> {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state).await
    }

    async fn load_locked(&self, state: &mut LoadState) -> Result<FavoriteSet, FavoritesError> {
        let stored = self
            .storage
            .get_value(FAVORITES_KEY)
            .await
            .map_err(FavoritesError::Read)?;

        let decoded = stored
            .as_deref()
            .map_or_else(|| Ok(FavoriteSet::new()), FavoriteSet::decode);

        *state = LoadState::Loaded;
        match decoded {
            Ok(set) => {
                tracing::debug!("Loaded {} favorite events", set.len());
                self.favorites.send_replace(set.clone());
                Ok(set)
            }
            Err(e) => {
                self.favorites.send_replace(FavoriteSet::new());
                Err(FavoritesError::Corrupt(e))
            }
        }
    }

    /// Current lifecycle state
    pub async fn load_state(&self) -> LoadState {
        *self.state.lock().await
    }

    /// Add an event to the favorites.
    ///
    /// Returns `Ok(false)` without writing if the id is already a favorite.
    pub async fn add(&self, event: Event) -> Result<bool, FavoritesError> {
        let id = event.id.clone();
        let added = self.mutate(move |set| set.insert(event)).await?;
        if added {
            tracing::debug!("Added favorite {}", id);
        }
        Ok(added)
    }

    /// Remove an event from the favorites.
    ///
    /// Returns `Ok(false)` without writing if the id was not a favorite.
    pub async fn remove(&self, id: &EventId) -> Result<bool, FavoritesError> {
        let removed = self.mutate(|set| set.remove(id)).await?;
        if removed {
            tracing::debug!("Removed favorite {}", id);
        }
        Ok(removed)
    }

    /// Apply `change` to a copy of the set, persist it, then publish it.
    async fn mutate<F>(&self, change: F) -> Result<bool, FavoritesError>
    where
        F: FnOnce(&mut FavoriteSet) -> bool + Send,
    {
        let mut state = self.state.lock().await;

        if *state == LoadState::Unloaded {
            match self.load_locked(&mut state).await {
                Ok(_) => {}
                Err(FavoritesError::Corrupt(e)) => {
                    tracing::warn!("Discarding corrupt favorites: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        let mut next = self.favorites.borrow().clone();
        if !change(&mut next) {
            return Ok(false);
        }

        let json = next.encode().map_err(FavoritesError::Encode)?;
        self.storage
            .set_value(FAVORITES_KEY, &json)
            .await
            .map_err(FavoritesError::Write)?;

        self.favorites.send_replace(next);
        Ok(true)
    }
}

impl<S> FavoritesStore<S> {
    /// Check whether an event is a favorite
    pub fn is_favorite(&self, id: &EventId) -> bool {
        self.favorites.borrow().contains(id)
    }

    /// Favorites in the order they were added
    pub fn list(&self) -> Vec<Event> {
        self.favorites.borrow().to_vec()
    }

    /// Copy of the current set
    pub fn snapshot(&self) -> FavoriteSet {
        self.favorites.borrow().clone()
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.favorites.borrow().len()
    }

    /// Check if there are no favorites
    pub fn is_empty(&self) -> bool {
        self.favorites.borrow().is_empty()
    }

    /// Get a read handle that is notified after each successful change
    pub fn subscribe(&self) -> FavoritesView {
        FavoritesView {
            rx: self.favorites.subscribe(),
        }
    }
}

/// Read-only handle on the favorites, for screens that render them
#[derive(Clone)]
pub struct FavoritesView {
    rx: watch::Receiver<FavoriteSet>,
}

impl FavoritesView {
    /// Check whether an event is a favorite
    pub fn is_favorite(&self, id: &EventId) -> bool {
        self.rx.borrow().contains(id)
    }

    /// Favorites in the order they were added
    pub fn list(&self) -> Vec<Event> {
        self.rx.borrow().to_vec()
    }

    /// Copy of the current set, marking it as seen
    pub fn snapshot(&mut self) -> FavoriteSet {
        self.rx.borrow_and_update().clone()
    }

    /// True if the set changed since the last `snapshot` or `changed`
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next change. Returns false once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
