//! Database library providing MongoDB connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "synonyms");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
