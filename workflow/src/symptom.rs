//! 症状流水线
//!
//! 表单持续累积症状取值；每次提交都会对当前向量做一次快照，
//! 结果与提交时的快照绑定，供报告使用。

use predictor_shared::{PredictionResponse, Symptom, SymptomVector};
use tracing::{debug, warn};

use crate::error::{ApiError, WorkflowError};
use crate::request::{RequestState, RequestTracker};

pub const SYMPTOM_FALLBACK: &str = "Prediction failed";

/// 一次成功的症状预测
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomResult {
    pub label: String,
    /// 提交时的症状快照
    pub submitted: SymptomVector,
}

/// 已发出的请求
#[derive(Debug, Clone, Copy)]
pub struct SymptomTicket {
    pub seq: u64,
    pub vector: SymptomVector,
}

#[derive(Debug, Default)]
pub struct SymptomPipeline {
    vector: SymptomVector,
    request: RequestTracker<SymptomResult>,
}

impl SymptomPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vector(&self) -> &SymptomVector {
        &self.vector
    }

    pub fn state(&self) -> &RequestState<SymptomResult> {
        self.request.state()
    }

    /// 修改单个症状，不会发出请求，也不影响已有结果
    pub fn set_attribute(&mut self, symptom: Symptom, present: bool) {
        self.vector.set(symptom, present);
    }

    /// 按表单原始值修改症状，取值只能是 0 或 1
    pub fn set_raw(&mut self, key: &str, value: u8) -> Result<(), WorkflowError> {
        let symptom = Symptom::from_wire_key(key)
            .ok_or_else(|| WorkflowError::UnknownSymptom(key.to_string()))?;
        let present = match value {
            0 => false,
            1 => true,
            _ => {
                return Err(WorkflowError::InvalidSymptomValue {
                    key: key.to_string(),
                    value,
                });
            }
        };
        self.set_attribute(symptom, present);
        Ok(())
    }

    /// 开始提交：分配序号并拍下当前向量的快照
    pub fn begin_submit(&mut self) -> SymptomTicket {
        let seq = self.request.begin();
        SymptomTicket {
            seq,
            vector: self.vector,
        }
    }

    /// 应用请求结果，过期结果会被丢弃
    pub fn complete(
        &mut self,
        ticket: SymptomTicket,
        outcome: Result<PredictionResponse, ApiError>,
    ) -> bool {
        let outcome = match outcome {
            Ok(response) => Ok(SymptomResult {
                label: response.prediction,
                submitted: ticket.vector,
            }),
            Err(err) => {
                warn!(pipeline = "symptoms", seq = ticket.seq, error = %err, "prediction failed");
                Err(err.user_message(SYMPTOM_FALLBACK))
            }
        };
        let applied = self.request.finish(ticket.seq, outcome);
        if !applied {
            debug!(pipeline = "symptoms", seq = ticket.seq, "stale completion discarded");
        }
        applied
    }
}
