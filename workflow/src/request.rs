//! 请求状态
//!
//! 每条流水线维护自己的请求序号，只有最新发出的请求的完成结果会被应用。

/// 单条流水线的请求状态
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// 尚未提交，或结果已被清除
    Idle,
    /// 请求进行中；`retained` 为上一次成功的结果，进行中不展示
    Pending { seq: u64, retained: Option<T> },
    Done(T),
    /// 失败；上一次成功的结果保持不变
    Failed { message: String, retained: Option<T> },
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// 当前应展示的结果
    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Failed { retained, .. } => retained.as_ref(),
            Self::Idle | Self::Pending { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    fn into_last_success(self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Done(value) => Some(value),
            Self::Pending { retained, .. } | Self::Failed { retained, .. } => retained,
        }
    }
}

/// 请求序号与状态的组合
#[derive(Debug)]
pub struct RequestTracker<T> {
    issued: u64,
    state: RequestState<T>,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            state: RequestState::Idle,
        }
    }
}

impl<T> RequestTracker<T> {
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// 最近一次发出（或作废）的序号
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// 发出新请求，返回其序号
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        let retained = std::mem::take(&mut self.state).into_last_success();
        self.state = RequestState::Pending {
            seq: self.issued,
            retained,
        };
        self.issued
    }

    /// 应用请求结果
    ///
    /// 返回 false 表示该结果已过期（之后又发出了请求或状态被重置），未做任何修改。
    pub fn finish(&mut self, seq: u64, outcome: Result<T, String>) -> bool {
        if seq != self.issued {
            return false;
        }
        let retained = std::mem::take(&mut self.state).into_last_success();
        self.state = match outcome {
            Ok(value) => RequestState::Done(value),
            Err(message) => RequestState::Failed { message, retained },
        };
        true
    }

    /// 清除结果，同时作废所有进行中的请求
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = RequestState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_then_failure_keeps_previous_result() {
        let mut tracker = RequestTracker::default();
        let seq = tracker.begin();
        assert!(tracker.finish(seq, Ok("Flu")));
        assert_eq!(tracker.state().result(), Some(&"Flu"));

        let seq = tracker.begin();
        assert!(tracker.state().is_pending());
        assert_eq!(tracker.state().result(), None);

        assert!(tracker.finish(seq, Err("Prediction failed".to_string())));
        assert_eq!(tracker.state().error(), Some("Prediction failed"));
        assert_eq!(tracker.state().result(), Some(&"Flu"));
    }

    #[test]
    fn test_success_clears_error() {
        let mut tracker = RequestTracker::default();
        let seq = tracker.begin();
        tracker.finish(seq, Err::<&str, _>("boom".to_string()));
        let seq = tracker.begin();
        tracker.finish(seq, Ok("Cold"));
        assert_eq!(tracker.state(), &RequestState::Done("Cold"));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(tracker.finish(second, Ok("Second")));
        assert!(!tracker.finish(first, Ok("First")));
        assert_eq!(tracker.state(), &RequestState::Done("Second"));
    }

    #[test]
    fn test_reset_invalidates_in_flight_request() {
        let mut tracker = RequestTracker::default();
        let seq = tracker.begin();
        tracker.reset();

        assert!(!tracker.finish(seq, Ok("Late")));
        assert_eq!(tracker.state(), &RequestState::Idle);
        assert_eq!(tracker.issued(), 2);
    }
}
