//! 本地预览封装模块
//!
//! 封装 `URL.createObjectURL`。当 `ObjectUrl` 被 drop 时，自动调用 `revokeObjectURL`。

use predictor_workflow::image::ImageSource;
use predictor_workflow::WorkflowError;
use web_sys::{File, HtmlInputElement, Url};

/// 指向本地文件的 blob URL
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// 为文件创建预览 URL
    pub fn create(file: &File) -> Result<Self, WorkflowError> {
        let url = Url::create_object_url_with_blob(file)
            .map_err(|e| WorkflowError::preview(format!("{:?}", e)))?;
        Ok(Self { url })
    }
}

impl AsRef<str> for ObjectUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            tracing::warn!(url = %self.url, error = ?e, "failed to revoke object url");
        }
    }
}

/// 用户通过文件输入框选择的图片
#[derive(Clone, Debug)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// 取文件输入框中的第一个文件；取消选择时返回 None
    pub fn from_input(input: &HtmlInputElement) -> Option<Self> {
        input.files()?.get(0).map(Self)
    }

    pub fn file(&self) -> &File {
        &self.0
    }
}

impl ImageSource for BrowserFile {
    type Preview = ObjectUrl;

    fn file_name(&self) -> String {
        self.0.name()
    }

    fn open_preview(&self) -> Result<ObjectUrl, WorkflowError> {
        ObjectUrl::create(&self.0)
    }
}
