//! Event repository trait

use crate::error::Result;
use crate::models::{DeleteAck, Event, EventPatch, InsertAck, UpdatedEvent};
use async_trait::async_trait;

/// Storage operations behind the events API. Each method is one store call.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert the event as given; duplicates of `id` are allowed
    async fn insert(&self, event: Event) -> Result<InsertAck>;

    /// First event whose `ID` equals `id`
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>>;

    /// Every event, in the store's natural order
    async fn find_all(&self) -> Result<Vec<Event>>;

    /// Overwrite title and description of the first event matching `id`, creating
    /// a document when none matches; returns the document after the write
    async fn upsert(&self, id: &str, patch: EventPatch) -> Result<UpdatedEvent>;

    /// Delete at most one event matching `id`
    async fn delete_by_id(&self, id: &str) -> Result<DeleteAck>;
}
