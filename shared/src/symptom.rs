//! 症状模型
//!
//! 固定的八项症状及其 0/1 取值向量。序列化顺序与服务端特征顺序一致。

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 固定的八项症状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symptom {
    Fever,
    Cough,
    Fatigue,
    DifficultyBreathing,
    Headache,
    SoreThroat,
    BodyAches,
    RunnyNose,
}

impl Symptom {
    /// 全部症状，按服务端特征顺序排列
    pub const ALL: [Symptom; 8] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Fatigue,
        Symptom::DifficultyBreathing,
        Symptom::Headache,
        Symptom::SoreThroat,
        Symptom::BodyAches,
        Symptom::RunnyNose,
    ];

    /// 请求体中使用的键名
    pub const fn wire_key(self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Fatigue => "Fatigue",
            Symptom::DifficultyBreathing => "Diff_Breathing",
            Symptom::Headache => "Headache",
            Symptom::SoreThroat => "Sore_Throat",
            Symptom::BodyAches => "Body_Aches",
            Symptom::RunnyNose => "Runny_Nose",
        }
    }

    /// 表单上显示的名称
    pub const fn label(self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Fatigue => "Fatigue",
            Symptom::DifficultyBreathing => "Difficulty Breathing",
            Symptom::Headache => "Headache",
            Symptom::SoreThroat => "Sore Throat",
            Symptom::BodyAches => "Body Aches",
            Symptom::RunnyNose => "Runny Nose",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.wire_key() == key)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// 症状向量
///
/// 始终恰好包含八个键，默认全部为 0。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymptomVector {
    values: [bool; 8],
}

impl SymptomVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置单个症状，其余症状保持不变
    pub fn set(&mut self, symptom: Symptom, present: bool) {
        self.values[symptom.index()] = present;
    }

    pub fn get(&self, symptom: Symptom) -> bool {
        self.values[symptom.index()]
    }

    /// 以 (症状, 是否存在) 的形式按固定顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Symptom, bool)> + '_ {
        Symptom::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl Serialize for SymptomVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Symptom::ALL.len()))?;
        for (symptom, present) in self.iter() {
            map.serialize_entry(symptom.wire_key(), &u8::from(present))?;
        }
        map.end()
    }
}
