use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppError;

/// Success envelope: `{ success: true, message?, count?, data? }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    envelope: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, Some(data))
    }

    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, Some(data))
    }

    fn with_status(status: StatusCode, data: Option<T>) -> Self {
        Self {
            status,
            envelope: Envelope {
                success: true,
                message: None,
                count: None,
                data,
            },
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.envelope.message = Some(message.into());
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.envelope.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    /// 200 with a message and no `data`.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, None).message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
