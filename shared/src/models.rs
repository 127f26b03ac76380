use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single listing item. The shape is owned by whoever authors
/// `events.json`; nothing here looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Value);

impl Event {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// The static asset as served at `/events.json`.
///
/// `events` is required: a document without an `events` array fails to
/// deserialize instead of producing an empty or absent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    pub events: Vec<Event>,
}

/// Data handed to a page after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    pub events: Vec<Event>,
}

impl From<EventDocument> for LoadResult {
    fn from(doc: EventDocument) -> Self {
        Self { events: doc.events }
    }
}
