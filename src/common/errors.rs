use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// A failed round trip to the catalog site. Never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream responded with {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A single candidate (data block or element) that could not be parsed.
/// These are logged and skipped, never returned to a client.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("marker `{0}` is not followed by a data block")]
    MissingBlock(&'static str),
    #[error("embedded data block is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("embedded data block is not a JSON object")]
    NotAnObject,
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl ApiError {
    pub fn upstream(context: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| Self::Upstream { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body: `{error}` for bad input, `{error, detail}` for upstream failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(message) => ErrorBody {
                error: message.to_string(),
                detail: None,
            },
            Self::Upstream { context, source } => {
                tracing::error!("{}: {}", context, source);
                ErrorBody {
                    error: context.to_string(),
                    detail: Some(source.to_string()),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::Validation("q is required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "q is required");
    }

    #[test]
    fn upstream_maps_to_internal_error_with_detail() {
        let err = ApiError::upstream("Search failed")(UpstreamError::Status {
            url: "https://www.jiosaavn.com/search/x".into(),
            status: 503,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Search failed: upstream responded with 503"));
    }

    #[test]
    fn validation_body_omits_detail() {
        let body = ErrorBody {
            error: "id required".into(),
            detail: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "id required" }));
    }
}
