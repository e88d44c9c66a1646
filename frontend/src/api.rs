use async_trait::async_trait;
use predictor_shared::protocol::{HistoryRequest, PredictImageRequest};
use predictor_shared::{
    HistoryEntry, IMAGE_FORM_FIELD, LoginRequest, LoginResponse, PredictionResponse,
    RegisterRequest, RegisterResponse, SymptomVector,
};
use predictor_workflow::{ApiError, AuthApi, DiagnosisApi};
use web_sys::FormData;

use crate::web::{BrowserFile, HttpClient};

/// 预测服务客户端
///
/// 每次使用时按当前会话创建，token 不跨会话复用。
#[derive(Clone, Debug, PartialEq)]
pub struct PredictorApi {
    client: HttpClient,
}

impl PredictorApi {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: HttpClient::new(base_url, token),
        }
    }
}

#[async_trait(?Send)]
impl DiagnosisApi for PredictorApi {
    type Image = BrowserFile;

    async fn predict_symptoms(
        &self,
        symptoms: &SymptomVector,
    ) -> Result<PredictionResponse, ApiError> {
        self.client.send_json(symptoms).await
    }

    async fn predict_image(&self, image: &BrowserFile) -> Result<PredictionResponse, ApiError> {
        let to_error = |e: wasm_bindgen::JsValue| ApiError::network(format!("{:?}", e));
        let form = FormData::new().map_err(to_error)?;
        form.append_with_blob_and_filename(IMAGE_FORM_FIELD, image.file(), &image.file().name())
            .map_err(to_error)?;
        self.client.send_form::<PredictImageRequest>(form).await
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.client.send_empty::<HistoryRequest>().await
    }
}

#[async_trait(?Send)]
impl AuthApi for PredictorApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.send_json(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.client.send_json(request).await
    }
}
