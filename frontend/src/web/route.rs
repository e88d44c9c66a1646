//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 诊断面板 (默认路由，需要认证)
    #[default]
    Dashboard,
    /// 历史记录
    History,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Self::Dashboard,
            "/history" => Self::History,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::History => "/history",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 只有诊断面板受保护；历史页由服务端拒绝未认证请求。
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 获取认证失败（或注销）时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取登录成功后的跳转目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 注册成功后的跳转目标
    pub fn register_success_redirect() -> Self {
        Self::Login
    }

    /// 守卫：返回实际应进入的路由
    pub fn guard(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::History,
            AppRoute::Login,
            AppRoute::Register,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/history/"), AppRoute::History);
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
    }

    #[test]
    fn test_only_dashboard_is_guarded() {
        assert_eq!(AppRoute::Dashboard.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::Dashboard.guard(true), AppRoute::Dashboard);
        assert_eq!(AppRoute::History.guard(false), AppRoute::History);
        assert_eq!(AppRoute::Login.guard(true), AppRoute::Login);
        assert_eq!(AppRoute::Register.guard(false), AppRoute::Register);
    }
}
