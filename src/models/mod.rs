//! Data models for eventmap

mod event;

pub use event::{Event, EventId};
