use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message carried by the synthetic envelope returned when the backend
/// cannot be reached or answers with something that is not JSON.
pub const CONNECTION_ERROR_MESSAGE: &str = "Lỗi kết nối đến server";

/// Status reported for transport level failures.
pub const CONNECTION_ERROR_STATUS: u16 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Only POST and PUT send a JSON body. A body handed to GET or DELETE
    /// is dropped.
    pub fn carries_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call against one of the API base paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, serde_json::Error> {
        Ok(self.with_body(serde_json::to_value(body)?))
    }

    /// The body that actually goes on the wire for this method. A JSON
    /// `null` body is never sent.
    pub fn wire_body(&self) -> Option<&Value> {
        if !self.method.carries_body() {
            return None;
        }
        self.body.as_ref().filter(|body| !body.is_null())
    }
}

/// Uniform result of every JSON client operation.
///
/// `data` holds the parsed response body whether or not the call succeeded,
/// so error payloads from the backend reach the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn from_exchange(status: u16, data: Value) -> Self {
        Self {
            success: is_success_status(status),
            status,
            data,
        }
    }

    pub fn connection_error() -> Self {
        let body = ErrorBody {
            message: CONNECTION_ERROR_MESSAGE.to_string(),
            code: CONNECTION_ERROR_STATUS,
        };

        Self {
            success: false,
            status: CONNECTION_ERROR_STATUS,
            data: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }

    /// Best effort human readable message out of a failure payload.
    pub fn message(&self) -> Option<&str> {
        self.data.get("message").and_then(Value::as_str)
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..=299).contains(&status)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCredentials {
    pub mssv: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSubjectRequest {
    pub student_id: i64,
    pub subject_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRegistrationRequest {
    pub student_subject_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUrlRequest {
    pub student_id: i64,
    pub tuition_fee_id: i64,
    pub money: i64,
}

/// Outcome of a spreadsheet export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}
