use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    routing::post,
    Json, Router,
};
use genlogs::models::{SearchRequest, SearchResponse};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::info;

/// A missing content type is read as JSON, like an explicit `application/json` or any
/// `+json` suffix. Anything else cannot satisfy the request schema.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            let subtype = subtype.to_ascii_lowercase();
            kind.eq_ignore_ascii_case("application")
                && (subtype == "json" || subtype.ends_with("+json"))
        }
        None => false,
    }
}

fn parse_json_body<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> Result<T, ApiError> {
    if !is_json_content_type(headers) {
        return Err(ApiError::InvalidPayload(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    serde_json::from_slice(body).map_err(|err| {
        let detail = match err.classify() {
            Category::Data => {
                format!("Failed to deserialize the JSON body into the target type: {}", err)
            }
            _ => format!("Failed to parse the request body as JSON: {}", err),
        };
        ApiError::InvalidPayload(detail)
    })
}

/// Search active carriers between two cities, each with a freshly generated fleet.
///
/// Body failures (non-JSON content type, malformed JSON, missing or mistyped fields)
/// answer 422, empty cities answer 400 and any failure of the carrier source answers 500.
async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let request: SearchRequest = parse_json_body(&headers, &body)?;
    if !request.has_cities() {
        return Err(ApiError::MissingCities);
    }

    let carriers = state
        .carriers
        .find_carriers(&request.from_city, &request.to_city)?;

    info!(
        "Found {} carriers for route: {} -> {}",
        carriers.len(),
        request.from_city,
        request.to_city
    );

    Ok(Json(SearchResponse {
        from_city: request.from_city,
        to_city: request.to_city,
        carriers,
    }))
}

// Mounted under /v1
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search))
        .with_state(state)
}
