//! 历史记录加载
//!
//! 每次进入视图加载一次：`Loading -> Loaded | Failed`，失败后不重试。

use predictor_shared::date::format_timestamp;
use predictor_shared::{HistoryEntry, HistoryRecord};
use tracing::{info, warn};

use crate::error::ApiError;

pub const HISTORY_FALLBACK: &str = "Failed to fetch history";
pub const EMPTY_HISTORY_MESSAGE: &str = "No history found.";

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Loading,
    Loaded(Vec<HistoryEntry>),
    Failed(String),
}

/// 症状条目上的标记颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Green,
    Grey,
}

impl Marker {
    pub fn css_class(self) -> &'static str {
        match self {
            Marker::Green => "bg-emerald-500",
            Marker::Grey => "bg-gray-200",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomLine {
    pub label: String,
    pub present: bool,
}

impl SymptomLine {
    pub fn answer(&self) -> &'static str {
        if self.present { "Yes" } else { "No" }
    }

    pub fn marker(&self) -> Marker {
        if self.present {
            Marker::Green
        } else {
            Marker::Grey
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.answer())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardDetail {
    /// 可折叠的症状列表
    Symptoms(Vec<SymptomLine>),
    /// 上传的文件名
    File(String),
}

/// 单条历史记录的展示模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCard {
    pub id: String,
    pub kind: &'static str,
    pub prediction: String,
    pub time: String,
    pub detail: CardDetail,
}

impl HistoryCard {
    /// 无法识别类型的条目没有可展示的内容，返回 `None`
    pub fn from_entry(entry: &HistoryEntry) -> Option<Self> {
        let (kind, detail) = match &entry.record {
            HistoryRecord::Symptoms { .. } => (
                "Symptom Check",
                CardDetail::Symptoms(
                    entry
                        .record
                        .symptom_flags()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(key, present)| SymptomLine {
                            label: deslugify(key),
                            present,
                        })
                        .collect(),
                ),
            ),
            HistoryRecord::ImagePrediction { filename } => {
                ("Photo Analysis", CardDetail::File(filename.clone()))
            }
            HistoryRecord::Unknown => return None,
        };
        Some(Self {
            id: entry.id.clone(),
            kind,
            prediction: entry.prediction.clone(),
            time: format_timestamp(&entry.timestamp),
            detail,
        })
    }
}

/// `Diff_Breathing` -> `Diff Breathing`
pub fn deslugify(key: &str) -> String {
    key.replace('_', " ")
}

/// 视图应渲染的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryContent {
    Loading,
    Error(String),
    /// 空列表：只显示一条提示，不渲染任何卡片
    Empty(&'static str),
    Cards(Vec<HistoryCard>),
}

#[derive(Debug)]
pub struct HistoryLoader {
    state: HistoryState,
    started: bool,
}

impl Default for HistoryLoader {
    fn default() -> Self {
        Self {
            state: HistoryState::Loading,
            started: false,
        }
    }
}

impl HistoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// 标记加载开始；同一实例只会返回一次 true
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn complete(&mut self, outcome: Result<Vec<HistoryEntry>, ApiError>) {
        if !matches!(self.state, HistoryState::Loading) {
            return;
        }
        self.state = match outcome {
            Ok(entries) => {
                info!(count = entries.len(), "history loaded");
                HistoryState::Loaded(entries)
            }
            Err(err) => {
                warn!(error = %err, "history request failed");
                HistoryState::Failed(err.user_message(HISTORY_FALLBACK))
            }
        };
    }

    pub fn content(&self) -> HistoryContent {
        match &self.state {
            HistoryState::Loading => HistoryContent::Loading,
            HistoryState::Failed(message) => HistoryContent::Error(message.clone()),
            HistoryState::Loaded(entries) => {
                let cards: Vec<HistoryCard> =
                    entries.iter().filter_map(HistoryCard::from_entry).collect();
                if cards.is_empty() {
                    HistoryContent::Empty(EMPTY_HISTORY_MESSAGE)
                } else {
                    HistoryContent::Cards(cards)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(body: &str) -> Vec<HistoryEntry> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_begin_only_once() {
        let mut loader = HistoryLoader::new();
        assert!(loader.begin());
        assert!(!loader.begin());
    }

    #[test]
    fn test_symptom_card_lines() {
        let mut loader = HistoryLoader::new();
        loader.complete(Ok(entries(
            r#"[{
                "id": "1",
                "type": "symptoms",
                "input": { "Fever": 1, "Cough": 0 },
                "prediction": "Flu",
                "timestamp": "2024-03-01T10:20:30.5"
            }]"#,
        )));

        let HistoryContent::Cards(cards) = loader.content() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, "Symptom Check");
        assert_eq!(cards[0].time, "2024-03-01 10:20");
        let CardDetail::Symptoms(lines) = &cards[0].detail else {
            panic!("expected symptom lines");
        };
        let texts: Vec<String> = lines.iter().map(SymptomLine::text).collect();
        assert_eq!(texts, vec!["Fever: Yes", "Cough: No"]);
        assert_eq!(lines[0].marker(), Marker::Green);
        assert_eq!(lines[1].marker(), Marker::Grey);
    }

    #[test]
    fn test_image_card_shows_filename() {
        let mut loader = HistoryLoader::new();
        loader.complete(Ok(entries(
            r#"[{
                "id": "2",
                "type": "image_prediction",
                "filename": "rash.jpg",
                "prediction": "Eczema",
                "timestamp": "2024-03-01T10:20:30"
            }]"#,
        )));

        let HistoryContent::Cards(cards) = loader.content() else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].kind, "Photo Analysis");
        assert_eq!(cards[0].detail, CardDetail::File("rash.jpg".to_string()));
    }

    #[test]
    fn test_slugged_keys_are_readable() {
        let card = HistoryCard::from_entry(&entries(
            r#"[{
                "id": "3",
                "type": "symptoms",
                "input": { "Diff_Breathing": "1", "Runny_Nose": 0 },
                "prediction": "Asthma",
                "timestamp": "bad"
            }]"#,
        )[0])
        .unwrap();

        assert_eq!(card.time, "bad");
        assert_eq!(
            card.detail,
            CardDetail::Symptoms(vec![
                SymptomLine {
                    label: "Diff Breathing".to_string(),
                    present: true
                },
                SymptomLine {
                    label: "Runny Nose".to_string(),
                    present: false
                },
            ])
        );
    }

    #[test]
    fn test_unrecognised_entry_does_not_hide_the_rest() {
        let mut loader = HistoryLoader::new();
        loader.complete(Ok(entries(
            r#"[
                { "id": 7, "type": "lab_result", "prediction": "n/a", "timestamp": "" },
                { "id": 8, "type": "image_prediction", "filename": "rash.jpg",
                  "prediction": "Eczema", "timestamp": "2024-03-01T10:20:30" }
            ]"#,
        )));

        let HistoryContent::Cards(cards) = loader.content() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "8");
        assert_eq!(cards[0].prediction, "Eczema");
    }

    #[test]
    fn test_only_unrecognised_entries_render_empty_message() {
        let mut loader = HistoryLoader::new();
        loader.complete(Ok(entries(
            r#"[{ "id": "1", "type": "lab_result", "prediction": "n/a", "timestamp": "" }]"#,
        )));
        assert_eq!(loader.content(), HistoryContent::Empty(EMPTY_HISTORY_MESSAGE));
    }

    #[test]
    fn test_empty_history_renders_single_message() {
        let mut loader = HistoryLoader::new();
        loader.complete(Ok(vec![]));
        assert_eq!(loader.content(), HistoryContent::Empty(EMPTY_HISTORY_MESSAGE));
    }

    #[test]
    fn test_failure_replaces_list() {
        let mut loader = HistoryLoader::new();
        loader.complete(Err(ApiError::status(401, Some("Token is missing!".to_string()))));
        assert_eq!(
            loader.content(),
            HistoryContent::Error("Token is missing!".to_string())
        );

        loader.complete(Ok(vec![]));
        assert_eq!(
            loader.state(),
            &HistoryState::Failed("Token is missing!".to_string())
        );
    }

    #[test]
    fn test_failure_fallback() {
        let mut loader = HistoryLoader::new();
        loader.complete(Err(ApiError::network("offline")));
        assert_eq!(
            loader.content(),
            HistoryContent::Error(HISTORY_FALLBACK.to_string())
        );
    }
}
