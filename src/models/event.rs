//! Event model (one discoverable item from the feed)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::convert::Infallible;
use std::str::FromStr;

/// Identifier of an event as delivered by the feed.
///
/// The feed may use numbers or strings. The two are never equal to each
/// other: `1` and `"1"` name different events. Numbers are kept exactly as
/// JSON carried them, so `2.5` and ids beyond `i64::MAX` survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    /// Numeric id (integer or fractional)
    Number(Number),
    /// String id
    Text(String),
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<Number> for EventId {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Parses user input: anything that reads as a finite number is a numeric id.
impl FromStr for EventId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s
            .parse::<i64>()
            .map(Number::from)
            .or_else(|_| s.parse::<u64>().map(Number::from))
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64));
        Ok(number.map_or_else(|| Self::Text(s.to_string()), Self::Number))
    }
}

/// An event with a location and descriptive text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier, the key for favorite membership
    pub id: EventId,
    /// Title shown in lists and on the map marker
    pub title: String,
    /// Longer description
    pub description: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Fields we don't model, written back as they came in
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Create a new event without extra fields
    pub fn new(
        id: impl Into<EventId>,
        title: &str,
        description: &str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            description: description.to_string(),
            latitude,
            longitude,
            extra: Map::new(),
        }
    }

    /// (latitude, longitude) pair
    pub const fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Get a short preview of the description (for list display)
    pub fn preview(&self, max_len: usize) -> String {
        let description = self.description.replace('\n', " ");
        if description.chars().count() <= max_len {
            description
        } else {
            let cut: String = description
                .chars()
                .take(max_len.saturating_sub(3))
                .collect();
            format!("{cut}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids() {
        let numeric: Event = serde_json::from_str(
            r#"{"id":1,"title":"A","description":"d","latitude":1,"longitude":2.5}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, EventId::from(1));
        assert_eq!(numeric.coordinates(), (1.0, 2.5));

        let text: Event = serde_json::from_str(
            r#"{"id":"1","title":"A","description":"d","latitude":1,"longitude":2}"#,
        )
        .unwrap();
        assert_eq!(text.id, EventId::Text("1".to_string()));
        assert_ne!(numeric.id, text.id);
    }

    #[test]
    fn test_fractional_and_large_ids() {
        let json = r#"[
            {"id":2.5,"title":"A","description":"d","latitude":1,"longitude":1},
            {"id":18446744073709551615,"title":"B","description":"d","latitude":1,"longitude":1},
            {"id":-3,"title":"C","description":"d","latitude":1,"longitude":1}
        ]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0].id, "2.5".parse::<EventId>().unwrap());
        assert_eq!(events[1].id, EventId::from(Number::from(u64::MAX)));
        assert_eq!(events[2].id, EventId::from(-3));
        assert_ne!(events[0].id, EventId::from(2));

        let back: Value = serde_json::to_value(&events).unwrap();
        assert_eq!(back[0]["id"].as_f64(), Some(2.5));
        assert_eq!(back[1]["id"].as_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let json = r#"{"id":7,"title":"Jazz","description":"Live","latitude":51.9,"longitude":4.4,"venue":"Doelen","tags":["music"]}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.extra.get("venue"), Some(&Value::from("Doelen")));

        let back: Value = serde_json::to_value(&event).unwrap();
        assert_eq!(back["tags"][0], "music");
        assert_eq!(back["id"], 7);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<Event, _> =
            serde_json::from_str(r#"{"id":1,"title":"A","latitude":1,"longitude":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!("42".parse::<EventId>().unwrap(), EventId::from(42));
        assert_eq!(
            "party-42".parse::<EventId>().unwrap(),
            EventId::Text("party-42".to_string())
        );
        assert_eq!("2.5".parse::<EventId>().unwrap().to_string(), "2.5");
        assert_eq!(
            "inf".parse::<EventId>().unwrap(),
            EventId::Text("inf".to_string())
        );
        assert_eq!(EventId::from(42).to_string(), "42");
    }

    #[test]
    fn test_preview() {
        let event = Event::new(1, "A", "line one\nline two", 0.0, 0.0);
        assert_eq!(event.preview(100), "line one line two");
        assert_eq!(event.preview(8), "line ...");
    }
}
