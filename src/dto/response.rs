use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a service outcome: `{"data": ...}` or `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload<T> {
    Data(T),
    Message(String),
}

/// Result envelope produced by services and written out unchanged by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse<T = ()> {
    pub code: StatusCode,
    pub payload: Payload<T>,
}

impl<T> ServiceResponse<T> {
    pub fn data(code: StatusCode, data: T) -> Self {
        Self {
            code,
            payload: Payload::Data(data),
        }
    }

    pub fn message(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            payload: Payload::Message(message.into()),
        }
    }

    #[cfg(test)]
    pub fn data_ref(&self) -> Option<&T> {
        match &self.payload {
            Payload::Data(data) => Some(data),
            Payload::Message(_) => None,
        }
    }

    #[cfg(test)]
    pub fn message_text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Data(_) => None,
            Payload::Message(message) => Some(message),
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self.payload)).into_response()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}
