//! MongoDB database connector and utilities
//!
//! Provides connection lifecycle management: bounded connect with a ping check,
//! and a bounded disconnect for shutdown.

mod config;
mod connector;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, disconnect, ping};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
