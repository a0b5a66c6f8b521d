//! MongoDB implementation of EventRepository

use crate::error::{EventError, Result};
use crate::models::{DeleteAck, Event, EventPatch, InsertAck, UpdatedEvent};
use crate::repository::EventRepository;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use std::future::IntoFuture;
use std::time::Duration;
use tracing::instrument;

/// Collection used when none is configured
pub const DEFAULT_COLLECTION: &str = "events";

/// Per-operation bound applied when none is configured
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// MongoDB-based event repository
///
/// No index is declared on `ID`, so duplicate ids are accepted and lookups
/// return the first match in natural order.
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<Event>,
    documents: Collection<Document>,
    operation_timeout: Duration,
}

impl MongoEventRepository {
    /// Create a repository over the default `events` collection
    pub fn new(database: &Database) -> Self {
        Self::with_collection(database, DEFAULT_COLLECTION)
    }

    /// Create a repository over a custom collection
    pub fn with_collection(database: &Database, collection_name: &str) -> Self {
        let collection = database.collection::<Event>(collection_name);
        Self {
            documents: collection.clone_with_type(),
            collection,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Override the per-operation timeout
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Run one store operation under the operation timeout.
    ///
    /// On expiry the pending operation is dropped.
    async fn bounded<T, F>(&self, operation: &'static str, op: F) -> Result<T>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        tokio::time::timeout(self.operation_timeout, op)
            .await
            .map_err(|_| EventError::Timeout {
                operation,
                after: self.operation_timeout,
            })?
            .map_err(EventError::from)
    }
}

/// Equality filter on the caller-supplied id
fn id_filter(id: &str) -> Document {
    doc! { "ID": id }
}

/// Same match as `id_filter`, written as an aggregation expression. An upsert
/// copies plain equality clauses into the document it creates; `$expr`
/// clauses are not copied, so the new document gets no `ID`.
fn upsert_filter(id: &str) -> Document {
    doc! { "$expr": { "$eq": ["$ID", id] } }
}

/// Unconditional `$set` of both writable fields. `ID` is not part of the
/// update, so a document created by an upsert carries no `ID`.
fn patch_update(patch: &EventPatch) -> Document {
    doc! {
        "$set": {
            "Title": patch.title.as_str(),
            "Description": patch.description.as_str(),
        }
    }
}

fn record_id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn updated_event(document: &Document) -> UpdatedEvent {
    let text = |key: &str| document.get_str(key).ok().map(str::to_string);
    UpdatedEvent {
        record_id: document.get("_id").map(record_id_string),
        id: text("ID"),
        title: text("Title"),
        description: text("Description"),
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = ?event.id))]
    async fn insert(&self, event: Event) -> Result<InsertAck> {
        let result = self
            .bounded("insert_one", self.collection.insert_one(&event))
            .await?;

        Ok(InsertAck {
            inserted_id: record_id_string(&result.inserted_id),
        })
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        self.bounded("find_one", self.collection.find_one(id_filter(id)))
            .await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Event>> {
        self.bounded("find", async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect::<Vec<Event>>().await
        })
        .await
    }

    #[instrument(skip(self, patch))]
    async fn upsert(&self, id: &str, patch: EventPatch) -> Result<UpdatedEvent> {
        let document = self
            .bounded(
                "find_one_and_update",
                self.documents
                    .find_one_and_update(upsert_filter(id), patch_update(&patch))
                    .return_document(ReturnDocument::After)
                    .upsert(true),
            )
            .await?
            .ok_or_else(|| EventError::NotFound { id: id.to_string() })?;

        Ok(updated_event(&document))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> Result<DeleteAck> {
        let result = self
            .bounded("delete_one", self.collection.delete_one(id_filter(id)))
            .await?;

        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}
