//! In-memory `EventRepository` mirroring the MongoDB semantics the handlers rely on:
//! inserts never dedupe, lookups return the first match, and an upsert that
//! misses creates a document holding only Title and Description.

use async_trait::async_trait;
use domain_events::{
    DeleteAck, Event, EventPatch, EventRepository, InsertAck, Result, UpdatedEvent,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone)]
struct StoredEvent {
    record_id: String,
    event: Event,
}

#[derive(Default)]
pub struct InMemoryEventRepository {
    documents: Mutex<Vec<StoredEvent>>,
    next_record: AtomicU64,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_record_id(&self) -> String {
        let n = self.next_record.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{n:024x}")
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: Event) -> Result<InsertAck> {
        let record_id = self.next_record_id();
        self.documents.lock().unwrap().push(StoredEvent {
            record_id: record_id.clone(),
            event,
        });
        Ok(InsertAck {
            inserted_id: record_id,
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .find(|stored| stored.event.id.as_deref() == Some(id))
            .map(|stored| stored.event.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Event>> {
        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().map(|stored| stored.event.clone()).collect())
    }

    async fn upsert(&self, id: &str, patch: EventPatch) -> Result<UpdatedEvent> {
        let mut documents = self.documents.lock().unwrap();
        let index = match documents
            .iter()
            .position(|stored| stored.event.id.as_deref() == Some(id))
        {
            Some(index) => index,
            None => {
                documents.push(StoredEvent {
                    record_id: self.next_record_id(),
                    event: Event::default(),
                });
                documents.len() - 1
            }
        };

        let stored = &mut documents[index];
        stored.event.title = Some(patch.title);
        stored.event.description = Some(patch.description);

        Ok(UpdatedEvent {
            record_id: Some(stored.record_id.clone()),
            id: stored.event.id.clone(),
            title: stored.event.title.clone(),
            description: stored.event.description.clone(),
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteAck> {
        let mut documents = self.documents.lock().unwrap();
        let deleted_count = match documents
            .iter()
            .position(|stored| stored.event.id.as_deref() == Some(id))
        {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };
        Ok(DeleteAck { deleted_count })
    }
}
