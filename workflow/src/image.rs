//! 图片流水线
//!
//! 选择新文件时整体替换旧文件与预览，旧预览随之释放，
//! 已有结果被清除，进行中的请求作废。

use predictor_shared::PredictionResponse;
use tracing::{debug, warn};

use crate::error::{ApiError, WorkflowError};
use crate::request::{RequestState, RequestTracker};

pub const IMAGE_FALLBACK: &str = "Image analysis failed";

/// 可上传的图片文件
pub trait ImageSource: Clone {
    /// 本地预览句柄，释放（drop）时回收对应资源
    type Preview: AsRef<str>;

    fn file_name(&self) -> String;

    fn open_preview(&self) -> Result<Self::Preview, WorkflowError>;
}

/// 已选择的文件及其预览
struct ImageAsset<F: ImageSource> {
    file: F,
    preview: Option<F::Preview>,
}

impl<F: ImageSource> ImageAsset<F> {
    fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(AsRef::<str>::as_ref)
    }
}

/// 一次成功的图片预测
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResult {
    pub label: String,
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct ImageTicket<F> {
    pub seq: u64,
    pub file: F,
}

pub struct ImagePipeline<F: ImageSource> {
    asset: Option<ImageAsset<F>>,
    request: RequestTracker<ImageResult>,
}

impl<F: ImageSource> Default for ImagePipeline<F> {
    fn default() -> Self {
        Self {
            asset: None,
            request: RequestTracker::default(),
        }
    }
}

impl<F: ImageSource> ImagePipeline<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_file(&self) -> bool {
        self.asset.is_some()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.asset.as_ref().and_then(ImageAsset::preview_url)
    }

    pub fn state(&self) -> &RequestState<ImageResult> {
        self.request.state()
    }

    /// 选择文件
    ///
    /// 预览创建失败时仍保留文件，只是不显示预览。
    pub fn select_file(&mut self, file: F) {
        let preview = match file.open_preview() {
            Ok(preview) => Some(preview),
            Err(err) => {
                warn!(pipeline = "image", error = %err, "preview unavailable");
                None
            }
        };
        debug!(pipeline = "image", file = %file.file_name(), "file selected");
        self.asset = Some(ImageAsset { file, preview });
        self.request.reset();
    }

    /// 开始提交；没有文件时返回 None 且不修改任何状态
    pub fn begin_submit(&mut self) -> Option<ImageTicket<F>> {
        let file = self.asset.as_ref()?.file.clone();
        let seq = self.request.begin();
        Some(ImageTicket { seq, file })
    }

    pub fn complete(
        &mut self,
        ticket: ImageTicket<F>,
        outcome: Result<PredictionResponse, ApiError>,
    ) -> bool {
        let outcome = match outcome {
            Ok(response) => Ok(ImageResult {
                label: response.prediction,
                filename: ticket.file.file_name(),
            }),
            Err(err) => {
                warn!(pipeline = "image", seq = ticket.seq, error = %err, "image analysis failed");
                Err(err.user_message(IMAGE_FALLBACK))
            }
        };
        let applied = self.request.finish(ticket.seq, outcome);
        if !applied {
            debug!(pipeline = "image", seq = ticket.seq, "stale completion discarded");
        }
        applied
    }
}
