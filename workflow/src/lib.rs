//! 诊断工作流
//!
//! 与浏览器无关的客户端状态机：
//! - `session`: 会话存储与持久化接口
//! - `mode`: 诊断模式选择
//! - `symptom` / `image`: 两条独立的“输入 -> 预测”流水线
//! - `report`: 由流水线结果生成报告
//! - `history`: 历史记录加载与展示模型
//! - `driver`: 串联状态与远程调用的异步流程

pub mod api;
pub mod cell;
pub mod driver;
pub mod error;
pub mod history;
pub mod image;
pub mod mode;
pub mod report;
pub mod request;
pub mod session;
pub mod symptom;

pub use api::{AuthApi, DiagnosisApi};
pub use cell::StateCell;
pub use error::{ApiError, WorkflowError};
pub use history::{HistoryCard, HistoryContent, HistoryLoader};
pub use image::{ImagePipeline, ImageSource};
pub use mode::{Mode, ModeSelector};
pub use request::RequestState;
pub use session::{Identity, SessionStorage, SessionStore};
pub use symptom::SymptomPipeline;
