//! 认证模块
//!
//! 会话作为显式对象通过 Context 共享：启动时从 LocalStorage 恢复，
//! 登录时写入，注销时清除。路由服务通过注入的认证信号检查认证状态。

use crate::api::PredictorApi;
use crate::config::ClientConfig;
use crate::state::LocalCell;
use crate::web::BrowserStorage;
use leptos::prelude::*;
use predictor_workflow::{Identity, SessionStore};

pub type BrowserSession = SessionStore<BrowserStorage>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话存储
    pub session: LocalCell<BrowserSession>,
    /// 服务地址
    api_url: StoredValue<String>,
}

impl AuthContext {
    /// 从 LocalStorage 恢复会话
    pub fn hydrate(config: &ClientConfig) -> Self {
        Self {
            session: LocalCell::new(SessionStore::hydrate(BrowserStorage)),
            api_url: StoredValue::new(config.api_url.clone()),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(SessionStore::is_authenticated))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionStore::is_authenticated)
    }

    /// 展示用的用户名（无用户名时为邮箱）
    pub fn display_name(&self) -> Option<String> {
        self.session.with(SessionStore::display_name)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.with(|s| s.identity().cloned())
    }

    /// 按当前 token 创建 API 客户端
    pub fn api(&self) -> PredictorApi {
        let token = self
            .session
            .with_untracked(|s| s.token().map(str::to_string));
        PredictorApi::new(&self.api_url.get_value(), token)
    }

    /// 注销并清除状态
    ///
    /// 不会自动导航，调用方负责跳转到登录页。
    pub fn logout(&self) {
        self.session.update(SessionStore::logout);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
