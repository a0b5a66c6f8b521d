use axum::{
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};

use super::AppError;

/// Fallback handler with strict-slash behaviour.
///
/// A path ending in `/` (other than `/` itself) is redirected to the same path
/// without the trailing slash, keeping the query string. The redirect is a 308 so
/// the method and body survive. Anything else is a 404.
pub async fn not_found(uri: Uri) -> Response {
    if let Some(location) = strip_trailing_slash(&uri) {
        tracing::debug!(from = %uri, to = %location, "Redirecting trailing slash");
        return Redirect::permanent(&location).into_response();
    }

    AppError::NotFound(format!("no route for {}", uri.path())).into_response()
}

fn strip_trailing_slash(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }

    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

    Some(match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_strip_trailing_slash() {
        let uri: Uri = "/events/".parse().unwrap();
        assert_eq!(strip_trailing_slash(&uri).as_deref(), Some("/events"));

        let uri: Uri = "/events/e1//?x=1".parse().unwrap();
        assert_eq!(strip_trailing_slash(&uri).as_deref(), Some("/events/e1?x=1"));

        let uri: Uri = "//".parse().unwrap();
        assert_eq!(strip_trailing_slash(&uri).as_deref(), Some("/"));
    }

    #[test]
    fn test_no_redirect_without_trailing_slash() {
        assert!(strip_trailing_slash(&"/".parse().unwrap()).is_none());
        assert!(strip_trailing_slash(&"/events".parse().unwrap()).is_none());
    }

    #[tokio::test]
    async fn test_not_found_redirects_or_404s() {
        let response = not_found("/events/".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/events");

        let response = not_found("/nope".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
