//! Event domain models
//!
//! Field names on the wire (JSON and BSON) are `ID`, `Title` and `Description`.
//! Decoding matches keys case-insensitively, reads `null` as absent, and
//! accepts a `null` document as an empty one.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Empty strings are treated like absent fields when writing.
fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// The persisted event document.
///
/// `id` is a caller-chosen key, separate from the store's own `_id`. Nothing
/// enforces its uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "ID", skip_serializing_if = "is_unset")]
    pub id: Option<String>,

    #[serde(rename = "Title", skip_serializing_if = "is_unset")]
    pub title: Option<String>,

    #[serde(rename = "Description", skip_serializing_if = "is_unset")]
    pub description: Option<String>,
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(EventVisitor)
    }
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }
}

/// Update payload. Both fields are always written; an omitted field becomes "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventPatch {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Description")]
    pub description: String,
}

impl<'de> Deserialize<'de> for EventPatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let event = Event::deserialize(deserializer)?;
        Ok(Self {
            title: event.title.unwrap_or_default(),
            description: event.description.unwrap_or_default(),
        })
    }
}

struct EventVisitor;

impl<'de> Visitor<'de> for EventVisitor {
    type Value = Event;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an event document or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Event, E> {
        Ok(Event::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Event, E> {
        Ok(Event::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Event, D::Error> {
        deserializer.deserialize_map(self)
    }

    // Later keys win, whatever their case. Other keys, `_id` included, are skipped.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Event, A::Error> {
        let mut event = Event::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("ID") {
                &mut event.id
            } else if key.eq_ignore_ascii_case("Title") {
                &mut event.title
            } else if key.eq_ignore_ascii_case("Description") {
                &mut event.description
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            *slot = map.next_value()?;
        }
        Ok(event)
    }
}

impl EventPatch {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Acknowledgment of an insert: the record identity the store generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertAck {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

/// Acknowledgment of a delete: how many documents were removed (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(rename = "DeletedCount")]
    pub deleted_count: u64,
}

/// The document as it stands after an upsert.
///
/// Fields are reported exactly as stored: a field the document lacks is
/// omitted, an empty string is kept. A document created by the upsert has no
/// `ID`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedEvent {
    /// Hex form of the store's record identity
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
