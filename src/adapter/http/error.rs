//! HTTP Errors
//!
//! ユースケースの外側で発生するエラーとHTTPステータスの対応

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use thiserror::Error;

use crate::adapter::codec::CodecError;

/// HTTPアダプターのエラー
///
/// レスポンスはステータスコードのみで、構造化されたエラーボディは返さない
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unsupported content type `{0}`")]
    UnsupportedMediaType(String),
    #[error("malformed request body: {0}")]
    MalformedBody(#[source] CodecError),
    #[error("failed to encode response body: {0}")]
    Encoding(#[source] CodecError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Encoding(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => error!("Request failed: {:#}", e),
            Self::Encoding(_) => error!("{}", self),
            _ => warn!("Rejected request: {}", self),
        }
        self.status_code().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::UnsupportedMediaType("text/plain".to_string()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::UnsupportedMediaType("text/plain".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
