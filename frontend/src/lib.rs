//! Disease Predictor 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `state`: 供工作流驱动使用的响应式状态容器
//! - `components`: UI 组件层
//!
//! 业务状态机都在 `predictor-workflow` 中，这里只负责渲染与浏览器接入。

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod history;
    pub mod login;
    pub mod navbar;
    pub mod register;
}
pub mod config;
pub mod logging;
mod state;

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::history::HistoryPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::config::ClientConfig;

use leptos::prelude::*;

// 浏览器 API 封装模块
pub(crate) mod web {
    mod http;
    mod object_url;
    mod print;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::HttpClient;
    pub use object_url::BrowserFile;
    pub use print::print_page;
    pub use storage::BrowserStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::History => view! { <HistoryPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建时配置，并从 LocalStorage 恢复会话
    let config = ClientConfig::from_build_env();
    let auth_ctx = AuthContext::hydrate(&config);
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <main class="p-4 md:p-8">
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
