/// 调用浏览器打印对话框
pub fn print_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.print() {
        tracing::warn!(error = ?e, "print failed");
    }
}
