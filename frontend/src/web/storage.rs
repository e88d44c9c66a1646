//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage`，以原始字符串读写，不经过 JSON 编码，
//! 与其它脚本写入的 `token`/`username`/`email` 保持兼容。

use gloo_storage::{LocalStorage, Storage};
use predictor_workflow::{SessionStorage, WorkflowError};

/// 浏览器 LocalStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WorkflowError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| WorkflowError::storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
