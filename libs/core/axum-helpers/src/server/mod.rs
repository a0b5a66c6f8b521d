//! Server infrastructure module.
//!
//! - Router assembly with request tracing and the strict-slash fallback
//! - Serving with graceful shutdown followed by bounded resource cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let app = create_router(api_routes);
//! create_production_app(app, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{ServerError, create_production_app, create_router, serve_with_shutdown};
pub use shutdown::shutdown_signal;
