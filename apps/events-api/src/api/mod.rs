//! API routes module
//!
//! The home route plus the events domain routes, served from the root path.

use axum::Router;
use axum::routing::get;
use domain_events::{EventRepository, EventService, events_router};
use std::sync::Arc;

/// Create all API routes
pub fn routes<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(events_router().with_state(Arc::new(service)))
}

async fn home() -> &'static str {
    "Welcome home!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_events::MongoEventRepository;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn app() -> Router {
        // The driver connects lazily, so no server is needed until a store call.
        let client = database::mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let repository = MongoEventRepository::new(&client.database("events_test"));
        axum_helpers::create_router(routes(EventService::new(repository)))
    }

    #[tokio::test]
    async fn test_home() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Welcome home!");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_json() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("\"message\""));
    }
}
