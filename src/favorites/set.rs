//! The favorited events, indexed by id

use indexmap::IndexMap;

use crate::models::{Event, EventId};

/// Favorited events, unique by id, in the order they were added.
///
/// Stored as a JSON array of events; the map is only the in-memory index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteSet {
    events: IndexMap<EventId, Event>,
}

impl FavoriteSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the persisted form. Later duplicates of an id are dropped.
    pub fn decode(json: &str) -> Result<Self, serde_json::Error> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Ok(events.into_iter().collect())
    }

    /// Encode to the persisted form
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let events: Vec<&Event> = self.events.values().collect();
        serde_json::to_string(&events)
    }

    /// Check whether an event with this id is in the set
    pub fn contains(&self, id: &EventId) -> bool {
        self.events.contains_key(id)
    }

    /// Get the favorited event with this id
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.get(id)
    }

    /// Add an event unless its id is already present. Returns true if added.
    pub fn insert(&mut self, event: Event) -> bool {
        if self.events.contains_key(&event.id) {
            return false;
        }
        self.events.insert(event.id.clone(), event);
        true
    }

    /// Remove the event with this id. Returns true if it was present.
    pub fn remove(&mut self, id: &EventId) -> bool {
        self.events.shift_remove(id).is_some()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &EventId> {
        self.events.keys()
    }

    /// Copy out the events in insertion order
    pub fn to_vec(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if there are no favorites
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut set = Self::new();
        for event in iter {
            set.insert(event);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FavoriteSet {
    type Item = &'a Event;
    type IntoIter = indexmap::map::Values<'a, EventId, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.values()
    }
}
