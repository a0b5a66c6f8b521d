use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::fmt::Display;
use std::future::Future;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info};

/// Errors that end the server run
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Server I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cleanup failed: {0}")]
    Cleanup(String),

    #[error("Cleanup exceeded timeout of {0:?}")]
    CleanupTimeout(Duration),
}

/// Wraps the application routes with the cross-cutting pieces every app shares.
///
/// - request/response tracing at INFO
/// - strict-slash fallback: trailing-slash paths redirect, unknown paths 404
///
/// # Example
/// ```ignore
/// let api_routes = Router::new()
///     .route("/", get(home))
///     .merge(domain_events::events_router().with_state(service));
///
/// let app = create_router(api_routes);
/// ```
pub fn create_router(apis: Router) -> Router {
    apis.fallback(not_found).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Production server: bind, serve until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts. `cleanup` gets at most
/// `shutdown_timeout`; a cleanup error or timeout is returned so the caller can
/// exit with a failure status.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// let cleanup = async move { database::mongodb::disconnect(client, timeout).await };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F, E>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> Result<(), ServerError>
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_with_shutdown(listener, router, shutdown_signal(), shutdown_timeout, cleanup).await
}

/// Serve on an already bound listener until `signal` completes, then run `cleanup`.
pub async fn serve_with_shutdown<S, F, E>(
    listener: TcpListener,
    router: Router,
    signal: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> Result<(), ServerError>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| error!("Server encountered an error: {:?}", e));

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    let cleanup_result = match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(Ok(())) => {
            info!("Cleanup completed successfully");
            Ok(())
        }
        Ok(Err(e)) => {
            error!(error = %e, "Cleanup failed");
            Err(ServerError::Cleanup(e.to_string()))
        }
        Err(_) => {
            error!("Cleanup exceeded timeout of {:?}", shutdown_timeout);
            Err(ServerError::CleanupTimeout(shutdown_timeout))
        }
    };

    serve_result?;
    cleanup_result
}
