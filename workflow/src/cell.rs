//! 状态容器抽象
//!
//! 异步驱动函数在 `await` 前后分两次修改流水线状态，
//! 借用不能跨越 `await`，因此通过闭包短暂地获取可变引用。

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    /// 对内部状态执行一次修改
    ///
    /// 返回 None 表示容器已失效（例如所属视图已卸载）。
    fn with_mut<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R;
}

impl<T> StateCell<T> for RefCell<T> {
    fn with_mut<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T, C> StateCell<T> for Rc<C>
where
    C: StateCell<T> + ?Sized,
{
    fn with_mut<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        (**self).with_mut(f)
    }
}
