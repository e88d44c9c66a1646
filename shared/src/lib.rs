use serde::{Deserialize, Serialize};

pub mod date;
pub mod history;
pub mod protocol;
pub mod symptom;

pub use history::{HistoryEntry, HistoryRecord};
pub use protocol::{ApiRequest, ErrorField, HttpMethod};
pub use symptom::{Symptom, SymptomVector};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// 图片上传时 multipart 表单中的字段名
pub const IMAGE_FORM_FIELD: &str = "image";

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 预测模型 (Prediction Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

/// 服务端错误载荷
///
/// 不同接口使用不同字段承载错误信息：认证接口多用 `message`，
/// 预测接口多用 `error`，两者都可能出现。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// 按优先字段取出非空的错误文本，取不到时再尝试另一个字段
    pub fn text(&self, primary: ErrorField) -> Option<String> {
        let (first, second) = match primary {
            ErrorField::Error => (&self.error, &self.message),
            ErrorField::Message => (&self.message, &self.error),
        };
        first
            .iter()
            .chain(second.iter())
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}
