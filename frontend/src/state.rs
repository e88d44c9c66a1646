//! 响应式状态容器
//!
//! 将流水线等非 `Send` 状态放进线程本地的 `RwSignal`，
//! 并实现 `StateCell`，供工作流的异步驱动函数在 `await` 前后修改。

use leptos::prelude::*;
use predictor_workflow::StateCell;

pub struct LocalCell<T: 'static>(RwSignal<T, LocalStorage>);

impl<T: 'static> Clone for LocalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for LocalCell<T> {}

impl<T: 'static> LocalCell<T> {
    pub fn new(value: T) -> Self {
        Self(RwSignal::new_local(value))
    }

    /// 读取并订阅变化
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }
}

impl<T: 'static> StateCell<T> for LocalCell<T> {
    fn with_mut<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.0.try_update(f)
    }
}
