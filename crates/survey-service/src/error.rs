use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("name, department and preferred_color are required")]
    InvalidRecord,

    #[error("payload too large")]
    PayloadTooLarge,

    #[error("not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) | ApiError::InvalidRecord => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for the rejection counter.
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::MalformedPayload(_) => "malformed",
            ApiError::InvalidRecord => "invalid",
            ApiError::PayloadTooLarge => "too_large",
            ApiError::NotFound => "not_found",
            ApiError::Storage(_) => "storage",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        let body = serde_json::json!({ "error": self.to_string() }).to_string();
        let mut response = Response::new(Full::from(Bytes::from(body)));
        *response.status_mut() = self.status();
        response.headers_mut().insert(
            hyper::header::CONTENT_TYPE,
            hyper::header::HeaderValue::from_static("application/json"),
        );
        response
    }
}
