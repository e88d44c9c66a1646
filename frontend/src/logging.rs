//! 浏览器控制台日志
//!
//! 自定义 tracing Layer，将事件按级别转发到 `console.error/warn/info/debug`。

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use wasm_bindgen::JsValue;
use web_sys::console;

/// 将 tracing 事件输出到浏览器控制台
pub struct ConsoleLayer {
    max_level: LevelFilter,
}

impl ConsoleLayer {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}{}",
            metadata.level(),
            metadata.target(),
            visitor.message,
            visitor.fields
        ));

        match *metadata.level() {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// 收集事件字段：`message` 单独保存，其余字段拼接为 ` key=value`
#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: String,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// 安装全局日志订阅器，重复调用时只保留第一次
pub fn init(max_level: LevelFilter) {
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(max_level));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}
