//! HTTP handlers for events API

use crate::error::EventError;
use crate::models::{DeleteAck, Event, EventPatch, InsertAck, UpdatedEvent};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_helpers::JsonBody;
use std::sync::Arc;
use tracing::instrument;

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router
///
/// | Method | Path |
/// |---|---|
/// | POST | `/event` |
/// | GET | `/events` |
/// | GET, PATCH, DELETE | `/events/{id}` |
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route("/event", post(create_event::<R>))
        .route("/events", get(list_events::<R>))
        .route(
            "/events/{id}",
            get(get_event::<R>)
                .patch(update_event::<R>)
                .delete(delete_event::<R>),
        )
}

/// Create a new event
#[instrument(skip(state, event), fields(event_id = ?event.id))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    JsonBody(event): JsonBody<Event>,
) -> Result<Json<InsertAck>, EventError> {
    let ack = state.create(event).await?;
    Ok(Json(ack))
}

/// List all events
#[instrument(skip(state))]
pub async fn list_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
) -> Result<Json<Vec<Event>>, EventError> {
    let events = state.list().await?;
    Ok(Json(events))
}

/// Get event by ID
#[instrument(skip(state))]
pub async fn get_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, EventError> {
    let event = state.get(&id).await?;
    Ok(Json(event))
}

/// Upsert title and description of an event
#[instrument(skip(state, patch))]
pub async fn update_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<EventPatch>,
) -> Result<Json<UpdatedEvent>, EventError> {
    let updated = state.update(&id, patch).await?;
    Ok(Json(updated))
}

/// Delete event by ID
#[instrument(skip(state))]
pub async fn delete_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, EventError> {
    let ack = state.delete(&id).await?;
    Ok(Json(ack))
}
