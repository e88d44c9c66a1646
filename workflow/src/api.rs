//! 远程服务接口
//!
//! 工作流只通过这些 trait 访问预测服务，浏览器实现位于前端 crate，
//! 测试使用下方的 Mock 实现。

use async_trait::async_trait;
use predictor_shared::{
    HistoryEntry, LoginRequest, LoginResponse, PredictionResponse, RegisterRequest,
    RegisterResponse, SymptomVector,
};

use crate::error::ApiError;

/// 预测与历史接口（均需认证）
#[async_trait(?Send)]
pub trait DiagnosisApi {
    /// 待上传的图片文件类型
    type Image;

    async fn predict_symptoms(
        &self,
        symptoms: &SymptomVector,
    ) -> Result<PredictionResponse, ApiError>;

    async fn predict_image(&self, image: &Self::Image) -> Result<PredictionResponse, ApiError>;

    async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError>;
}

/// 登录与注册接口（无需认证）
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}
