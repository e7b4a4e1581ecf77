pub mod health;
pub mod search;

use crate::error::ApiError;
use crate::state::AppState;
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

/// Builds the full application: every route plus CORS and panic handling.
pub fn configure(state: AppState) -> Router {
    // Credentials cannot be combined with wildcards, so origin, methods and headers
    // mirror the request instead.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(health::routes())
        .nest("/v1", search::routes(state))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use axum::{
        body::{self, Body},
        http::{header, Request, StatusCode},
    };
    use genlogs::errors::SearchResult;
    use genlogs::models::Carrier;
    use genlogs::search::CarrierSource;
    use tower::ServiceExt;

    struct PanickingSource;

    impl CarrierSource for PanickingSource {
        fn find_carriers(&self, _from: &str, _to: &str) -> SearchResult<Vec<Carrier>> {
            panic!("route table corrupted");
        }
    }

    async fn read_error(response: Response) -> ErrorResponse {
        let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_search_is_mounted_under_v1() {
        let request = Request::builder()
            .uri("/v1/search")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"from_city": "NYC", "to_city": "Washington"}"#))
            .unwrap();

        let response = configure(AppState::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let request = Request::builder()
            .uri("/search")
            .method("POST")
            .body(Body::empty())
            .unwrap();

        let response = configure(AppState::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_error(response).await.detail, "Not Found");
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let request = Request::builder()
            .uri("/v1/search")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"from_city": "NYC", "to_city": "Washington"}"#))
            .unwrap();

        let response = configure(AppState::new(PanickingSource))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = read_error(response).await;
        assert_eq!(
            error.detail,
            "An unexpected error occurred while processing the request."
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin_with_credentials() {
        let request = Request::builder()
            .uri("/v1/search")
            .method("OPTIONS")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = configure(AppState::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    }

    #[tokio::test]
    async fn test_cors_headers_on_simple_request() {
        let request = Request::builder()
            .uri("/health")
            .method("GET")
            .header(header::ORIGIN, "https://genlogs.example")
            .body(Body::empty())
            .unwrap();

        let response = configure(AppState::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://genlogs.example"
        );
    }
}
