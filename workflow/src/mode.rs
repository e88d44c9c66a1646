/// 当前激活的诊断模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 仅在视图挂载时出现
    #[default]
    None,
    Symptoms,
    Photo,
}

impl Mode {
    /// 可被用户选择的模式
    pub const SELECTABLE: [Mode; 2] = [Mode::Symptoms, Mode::Photo];

    pub fn title(self) -> &'static str {
        match self {
            Mode::None => "",
            Mode::Symptoms => "Symptom Checker",
            Mode::Photo => "Photo Diagnosis",
        }
    }
}

/// 模式选择器
///
/// 切换模式不会影响任何流水线的输入或结果。
#[derive(Debug, Default)]
pub struct ModeSelector {
    active: Mode,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Mode {
        self.active
    }

    /// 选择模式，返回是否发生了变化
    ///
    /// 重复选择当前模式不产生变化；`Mode::None` 无法被选择。
    pub fn select(&mut self, mode: Mode) -> bool {
        if mode == Mode::None || mode == self.active {
            return false;
        }
        tracing::debug!(from = ?self.active, to = ?mode, "mode selected");
        self.active = mode;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_none() {
        assert_eq!(ModeSelector::new().active(), Mode::None);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selector = ModeSelector::new();
        assert!(selector.select(Mode::Photo));
        assert!(!selector.select(Mode::Photo));
        assert_eq!(selector.active(), Mode::Photo);
    }

    #[test]
    fn test_none_is_not_selectable() {
        let mut selector = ModeSelector::new();
        selector.select(Mode::Symptoms);
        assert!(!selector.select(Mode::None));
        assert_eq!(selector.active(), Mode::Symptoms);
    }
}
