use crate::{
    HistoryEntry, LoginRequest, LoginResponse, PredictionResponse, RegisterRequest,
    RegisterResponse, SymptomVector,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Which field of the service's error payload carries the human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Error,
    Message,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request must carry the bearer token.
    const AUTHENTICATED: bool = true;
    /// Preferred error payload field.
    const ERROR_FIELD: ErrorField = ErrorField::Error;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
    const ERROR_FIELD: ErrorField = ErrorField::Message;
}

impl ApiRequest for RegisterRequest {
    type Response = RegisterResponse;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;
}

/// Symptom prediction. The body is the symptom vector itself.
impl ApiRequest for SymptomVector {
    type Response = PredictionResponse;
    const PATH: &'static str = "/predict";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Image prediction. Sent as multipart form data, so it carries no JSON body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictImageRequest;

impl ApiRequest for PredictImageRequest {
    type Response = PredictionResponse;
    const PATH: &'static str = "/predict-image";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List past predictions of the current user, newest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoryRequest;

impl ApiRequest for HistoryRequest {
    type Response = Vec<HistoryEntry>;
    const PATH: &'static str = "/history";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Joins the API base URL and an endpoint path without doubling slashes.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_paths() {
        assert_eq!(
            endpoint_url("http://localhost:5000/api/", SymptomVector::PATH),
            "http://localhost:5000/api/predict"
        );
        assert_eq!(
            endpoint_url("http://localhost:5000/api", "history"),
            "http://localhost:5000/api/history"
        );
    }

    #[test]
    fn test_auth_endpoints_are_public() {
        assert!(!LoginRequest::AUTHENTICATED);
        assert!(!RegisterRequest::AUTHENTICATED);
        assert!(SymptomVector::AUTHENTICATED);
        assert!(PredictImageRequest::AUTHENTICATED);
        assert!(HistoryRequest::AUTHENTICATED);
        assert_eq!(LoginRequest::ERROR_FIELD, ErrorField::Message);
    }
}
