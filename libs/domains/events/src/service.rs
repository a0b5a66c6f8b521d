//! Event service layer

use crate::error::{EventError, Result};
use crate::models::{DeleteAck, Event, EventPatch, InsertAck, UpdatedEvent};
use crate::repository::EventRepository;
use tracing::{info, instrument};

/// Event service: one repository call per operation, plus logging
pub struct EventService<R: EventRepository> {
    repository: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Store a new event verbatim
    #[instrument(skip(self, event), fields(event_id = ?event.id))]
    pub async fn create(&self, event: Event) -> Result<InsertAck> {
        let ack = self.repository.insert(event).await?;
        info!(record_id = %ack.inserted_id, "Event stored");
        Ok(ack)
    }

    /// Get the first event with this id
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Event> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EventError::NotFound { id: id.to_string() })
    }

    /// List every event
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = self.repository.find_all().await?;
        info!(count = events.len(), "Events listed");
        Ok(events)
    }

    /// Overwrite title and description, creating the document if needed
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: EventPatch) -> Result<UpdatedEvent> {
        let updated = self.repository.upsert(id, patch).await?;
        info!(record_id = ?updated.record_id, "Event upserted");
        Ok(updated)
    }

    /// Delete at most one event; a zero count is not an error
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<DeleteAck> {
        let ack = self.repository.delete_by_id(id).await?;
        info!(deleted_count = ack.deleted_count, "Event delete finished");
        Ok(ack)
    }
}
