use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Success envelope shared by every endpoint: `{statusCode, message, data}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> CommonResponse<T> {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        data: T,
    ) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                status_code: status.as_u16(),
                message: message.into(),
                data,
            }),
        )
    }

    pub fn ok(message: impl Into<String>, data: T) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: T) -> (StatusCode, Json<Self>) {
        Self::new(StatusCode::CREATED, message, data)
    }
}
