//! Error types for the diagnostic workflow.

use thiserror::Error;

// =========================================================
// 远程调用错误 (API Errors)
// =========================================================

/// Failure of a call to the prediction service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response, with the service's own error text when it sent one
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Error text supplied by the service, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text shown inline to the user: the service's message or the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.service_message().unwrap_or(fallback).to_string()
    }
}

// =========================================================
// 本地工作流错误 (Workflow Errors)
// =========================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("Invalid value {value} for symptom {key}, expected 0 or 1")]
    InvalidSymptomValue { key: String, value: u8 },

    #[error("Preview error: {0}")]
    Preview(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl WorkflowError {
    pub fn preview(message: impl Into<String>) -> Self {
        Self::Preview(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
