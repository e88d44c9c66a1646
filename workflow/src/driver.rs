//! 异步驱动
//!
//! 每个函数执行一次完整的“修改状态 -> 请求 -> 应用结果”流程。
//! 状态借用不会跨越 `await`，因此同一视图中的其它交互不会被阻塞。

use predictor_shared::{LoginRequest, RegisterRequest};
use tracing::{debug, info, warn};

use crate::api::{AuthApi, DiagnosisApi};
use crate::cell::StateCell;
use crate::history::HistoryLoader;
use crate::image::{ImagePipeline, ImageSource};
use crate::session::{Identity, SessionStorage, SessionStore};
use crate::symptom::SymptomPipeline;

pub const LOGIN_FALLBACK: &str = "Login failed";
pub const REGISTER_FALLBACK: &str = "Registration failed";

/// 提交症状向量；返回结果是否被应用
pub async fn submit_symptoms<C, A>(cell: &C, api: &A) -> bool
where
    C: StateCell<SymptomPipeline> + ?Sized,
    A: DiagnosisApi + ?Sized,
{
    let Some(ticket) = cell.with_mut(SymptomPipeline::begin_submit) else {
        return false;
    };
    debug!(pipeline = "symptoms", seq = ticket.seq, "submitting");
    let outcome = api.predict_symptoms(&ticket.vector).await;
    cell.with_mut(|pipeline| pipeline.complete(ticket, outcome))
        .unwrap_or(false)
}

/// 上传已选择的图片；没有文件时不发请求
pub async fn submit_image<C, A, F>(cell: &C, api: &A) -> bool
where
    F: ImageSource,
    C: StateCell<ImagePipeline<F>> + ?Sized,
    A: DiagnosisApi<Image = F> + ?Sized,
{
    let Some(ticket) = cell.with_mut(ImagePipeline::begin_submit).flatten() else {
        debug!(pipeline = "image", "no file selected, submit ignored");
        return false;
    };
    debug!(pipeline = "image", seq = ticket.seq, "submitting");
    let outcome = api.predict_image(&ticket.file).await;
    cell.with_mut(|pipeline| pipeline.complete(ticket, outcome))
        .unwrap_or(false)
}

/// 加载历史记录，同一个加载器只请求一次
pub async fn load_history<C, A>(cell: &C, api: &A)
where
    C: StateCell<HistoryLoader> + ?Sized,
    A: DiagnosisApi + ?Sized,
{
    if !cell.with_mut(HistoryLoader::begin).unwrap_or(false) {
        return;
    }
    let outcome = api.history().await;
    cell.with_mut(|loader| loader.complete(outcome));
}

/// 登录并写入会话
///
/// 失败时返回可直接展示的错误文本。
pub async fn sign_in<C, S, A>(cell: &C, api: &A, request: LoginRequest) -> Result<(), String>
where
    S: SessionStorage,
    C: StateCell<SessionStore<S>> + ?Sized,
    A: AuthApi + ?Sized,
{
    let response = api.login(&request).await.map_err(|err| {
        warn!(error = %err, "login failed");
        err.user_message(LOGIN_FALLBACK)
    })?;

    // 服务端未返回用户名时沿用登录时输入的用户名
    let username = response
        .username
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(request.username);
    let identity = Identity {
        username: Some(username),
        email: response.email,
    };

    match cell.with_mut(|store| store.login(response.token, identity)) {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => {
            warn!(error = %err, "session could not be saved");
            Err(LOGIN_FALLBACK.to_string())
        }
        None => Err(LOGIN_FALLBACK.to_string()),
    }
}

/// 注册新账号
pub async fn register_account<A>(api: &A, request: RegisterRequest) -> Result<(), String>
where
    A: AuthApi + ?Sized,
{
    match api.register(&request).await {
        Ok(response) => {
            info!(
                message = response.message.as_deref().unwrap_or(""),
                "account registered"
            );
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "registration failed");
            Err(err.user_message(REGISTER_FALLBACK))
        }
    }
}
