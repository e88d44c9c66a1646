//! 历史记录模型
//!
//! 服务端 `/history` 返回的条目，按 `type` 字段区分症状记录与图片记录。

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 服务端可能返回字符串或数字 id
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    #[serde(default)]
    pub prediction: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(flatten)]
    pub record: HistoryRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryRecord {
    /// 症状预测，`input` 保留服务端存储时的键顺序
    Symptoms {
        #[serde(default)]
        input: IndexMap<String, Value>,
    },
    /// 图片预测，只保存文件名
    ImagePrediction {
        #[serde(default)]
        filename: String,
    },
    /// 无法识别的 `type`，保留条目但不展示
    #[serde(other)]
    Unknown,
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(n) => n.to_string(),
    })
}

impl HistoryRecord {
    /// 症状记录的 (键, 是否存在) 列表；图片记录返回 `None`
    pub fn symptom_flags(&self) -> Option<Vec<(&str, bool)>> {
        match self {
            HistoryRecord::Symptoms { input } => Some(
                input
                    .iter()
                    .map(|(key, value)| (key.as_str(), flag_is_set(value)))
                    .collect(),
            ),
            HistoryRecord::ImagePrediction { .. } | HistoryRecord::Unknown => None,
        }
    }
}

/// 只有取值为 1 的症状才算存在
///
/// 服务端原样存储请求体，数字、布尔与字符串形式都可能出现。
pub fn flag_is_set(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_u64() == Some(1) || n.as_f64() == Some(1.0),
        Value::Bool(b) => *b,
        Value::String(s) => s.trim() == "1",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_symptom_entry_keeps_input_order() {
        // 通过字符串解析，保持服务端输出的键顺序
        let entry: HistoryEntry = serde_json::from_str(
            r#"{
                "id": "65f0",
                "type": "symptoms",
                "input": { "Runny_Nose": 1, "Fever": 0, "Cough": 1 },
                "prediction": "Common Cold",
                "timestamp": "2024-03-01T10:20:30.123456"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.prediction, "Common Cold");
        let flags = entry.record.symptom_flags().unwrap();
        assert_eq!(
            flags,
            vec![("Runny_Nose", true), ("Fever", false), ("Cough", true)]
        );
    }

    #[test]
    fn test_parse_image_entry() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "id": "65f1",
            "type": "image_prediction",
            "filename": "rash.jpg",
            "prediction": "Eczema",
            "timestamp": "2024-03-01T10:20:30"
        }))
        .unwrap();

        assert_eq!(
            entry.record,
            HistoryRecord::ImagePrediction {
                filename: "rash.jpg".to_string()
            }
        );
        assert!(entry.record.symptom_flags().is_none());
    }

    #[test]
    fn test_symptom_entry_without_input() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "id": "65f2",
            "type": "symptoms",
            "prediction": "Flu",
            "timestamp": "2024-03-01T10:20:30"
        }))
        .unwrap();
        assert_eq!(entry.record.symptom_flags(), Some(vec![]));
    }

    #[test]
    fn test_numeric_id_and_unknown_type_still_decode() {
        let entries: Vec<HistoryEntry> = serde_json::from_str(
            r#"[
                { "id": 42, "type": "lab_result", "prediction": "n/a", "timestamp": "" },
                { "id": "65f3", "type": "image_prediction", "filename": "a.png",
                  "prediction": "Acne", "timestamp": "2024-03-01T10:20:30" }
            ]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "42");
        assert_eq!(entries[0].record, HistoryRecord::Unknown);
        assert!(entries[0].record.symptom_flags().is_none());
        assert_eq!(entries[1].id, "65f3");
    }

    #[test]
    fn test_flag_is_set_variants() {
        assert!(flag_is_set(&json!(1)));
        assert!(flag_is_set(&json!(true)));
        assert!(flag_is_set(&json!("1")));
        assert!(!flag_is_set(&json!(0)));
        assert!(!flag_is_set(&json!(2)));
        assert!(!flag_is_set(&json!(null)));
    }
}
