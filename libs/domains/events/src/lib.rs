//! Events Domain
//!
//! CRUD over a single MongoDB collection of event documents.
//!
//! ```text
//! HTTP request ─► handlers ─► EventService ─► EventRepository ─► MongoDB
//!                   (decode)    (logging)      (one call, bounded)
//! ```
//!
//! Every failure, including "no such event", is answered with
//! `500 {"message": ...}`.

mod error;
pub mod handlers;
mod models;
mod mongo;
mod repository;
mod service;

pub use error::{EventError, Result};
pub use handlers::{EventsState, events_router};
pub use models::{DeleteAck, Event, EventPatch, InsertAck, UpdatedEvent};
pub use mongo::{DEFAULT_COLLECTION, DEFAULT_OPERATION_TIMEOUT, MongoEventRepository};
pub use repository::EventRepository;
pub use service::EventService;
