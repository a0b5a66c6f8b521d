//! # Axum Helpers
//!
//! Utilities shared by the HTTP applications in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, serving with graceful shutdown and cleanup
//! - **[`errors`]**: `AppError` and the `{"message": ...}` error body
//! - **[`extractors`]**: Request extractors that report failures as `AppError`
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let router = create_router(Router::new());
//!     let cleanup = async { Ok::<_, std::io::Error>(()) };
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), cleanup)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::JsonBody;
pub use server::{ServerError, create_production_app, create_router, shutdown_signal};
