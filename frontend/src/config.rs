//! 客户端配置
//!
//! 配置在构建时通过环境变量注入：
//! - `PREDICTOR_API_URL`: 预测服务地址，默认 `http://localhost:5000/api`
//! - `PREDICTOR_LOG_LEVEL`: 浏览器控制台日志级别，默认 `info`

use tracing::level_filters::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// 不带末尾斜杠的服务地址
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl ClientConfig {
    /// 读取构建时环境变量
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("PREDICTOR_API_URL"),
            option_env!("PREDICTOR_LOG_LEVEL"),
        )
    }

    /// 空值与无法解析的级别回退到默认值
    pub fn resolve(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_url, log_level }
    }
}
