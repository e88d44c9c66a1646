//! HTTP 请求封装模块
//!
//! 基于 `gloo-net`，按 `ApiRequest` 上声明的路径、方法与认证要求发送请求，
//! 并把非 2xx 响应统一转换为 `ApiError`。

use gloo_net::http::{Request, RequestBuilder, Response};
use predictor_shared::protocol::endpoint_url;
use predictor_shared::{ApiRequest, ErrorPayload, HEADER_AUTHORIZATION, HttpMethod};
use predictor_workflow::ApiError;
use serde::Serialize;
use web_sys::FormData;

/// 轻量级 HTTP 客户端
#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn builder<R: ApiRequest>(&self) -> RequestBuilder {
        let url = endpoint_url(&self.base_url, R::PATH);
        let builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        match (&self.token, R::AUTHENTICATED) {
            (Some(token), true) => {
                builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token))
            }
            _ => builder,
        }
    }

    /// 以 JSON 请求体发送
    pub async fn send_json<R>(&self, body: &R) -> Result<R::Response, ApiError>
    where
        R: ApiRequest + Serialize,
    {
        let request = self
            .builder::<R>()
            .json(body)
            .map_err(|e| ApiError::network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        decode::<R>(response).await
    }

    /// 无请求体发送（GET）
    pub async fn send_empty<R: ApiRequest>(&self) -> Result<R::Response, ApiError> {
        let response = self
            .builder::<R>()
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        decode::<R>(response).await
    }

    /// 以 multipart 表单发送，Content-Type 由浏览器补全边界
    pub async fn send_form<R: ApiRequest>(&self, form: FormData) -> Result<R::Response, ApiError> {
        let request = self
            .builder::<R>()
            .body(form)
            .map_err(|e| ApiError::network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        decode::<R>(response).await
    }
}

async fn decode<R: ApiRequest>(response: Response) -> Result<R::Response, ApiError> {
    let status = response.status();
    if response.ok() {
        return response
            .json::<R::Response>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()));
    }

    // 错误体不一定是 JSON
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorPayload>(&body)
        .ok()
        .and_then(|payload| payload.text(R::ERROR_FIELD));
    tracing::debug!(status, path = R::PATH, "request rejected");
    Err(ApiError::status(status, message))
}
