use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use genlogs::errors::SearchError;
use serde::{Deserialize, Serialize};
use std::net::AddrParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid listen address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },
    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

/// Failures a request handler can answer with. The `Display` text is what the client sees.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The 'from_city' and 'to_city' fields are required for the search.")]
    MissingCities,

    #[error("{0}")]
    InvalidPayload(String),

    #[error("Not Found")]
    NotFound,

    /// The wrapped detail is logged, never returned.
    #[error("An unexpected error occurred while processing the request.")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCities => StatusCode::BAD_REQUEST,
            ApiError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("An internal server error occurred during search: {}", detail);
        }

        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
