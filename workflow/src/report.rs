//! 报告生成
//!
//! 纯函数：由身份、日期与流水线结果组装可展示的报告。

use chrono::NaiveDate;
use predictor_shared::date::format_report_date;

use crate::image::ImageResult;
use crate::session::Identity;
use crate::symptom::SymptomResult;

pub const DEFAULT_PATIENT: &str = "User";
pub const IMAGE_DISCLAIMER: &str = "Note: This analysis is based on the uploaded image. Results are for informational purposes mainly.";

/// 是/否 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: String,
    pub present: bool,
}

impl ReportLine {
    pub fn answer(&self) -> &'static str {
        if self.present { "Yes" } else { "No" }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.answer())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomReport {
    pub patient: String,
    pub date: String,
    pub prediction: String,
    pub lines: Vec<ReportLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    pub patient: String,
    pub date: String,
    pub prediction: String,
    pub filename: String,
    pub disclaimer: &'static str,
}

pub fn patient_name(identity: Option<&Identity>) -> String {
    identity
        .and_then(Identity::display_name)
        .unwrap_or(DEFAULT_PATIENT)
        .to_string()
}

/// 症状报告：按固定顺序列出全部八项症状
pub fn symptom_report(
    identity: Option<&Identity>,
    today: NaiveDate,
    result: &SymptomResult,
) -> SymptomReport {
    SymptomReport {
        patient: patient_name(identity),
        date: format_report_date(today),
        prediction: result.label.clone(),
        lines: result
            .submitted
            .iter()
            .map(|(symptom, present)| ReportLine {
                label: symptom.label().to_string(),
                present,
            })
            .collect(),
    }
}

pub fn image_report(
    identity: Option<&Identity>,
    today: NaiveDate,
    result: &ImageResult,
) -> ImageReport {
    ImageReport {
        patient: patient_name(identity),
        date: format_report_date(today),
        prediction: result.label.clone(),
        filename: result.filename.clone(),
        disclaimer: IMAGE_DISCLAIMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predictor_shared::{Symptom, SymptomVector};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn test_symptom_report_lists_every_symptom() {
        let mut submitted = SymptomVector::new();
        submitted.set(Symptom::DifficultyBreathing, true);
        let result = SymptomResult {
            label: "Asthma".to_string(),
            submitted,
        };
        let identity = Identity {
            username: Some("alice".to_string()),
            email: None,
        };

        let report = symptom_report(Some(&identity), date(), &result);

        assert_eq!(report.patient, "alice");
        assert_eq!(report.date, "2024-05-17");
        assert_eq!(report.prediction, "Asthma");
        assert_eq!(report.lines.len(), 8);
        assert_eq!(report.lines[3].text(), "Difficulty Breathing: Yes");
        assert_eq!(report.lines[0].text(), "Fever: No");
    }

    #[test]
    fn test_image_report_without_identity() {
        let result = ImageResult {
            label: "Ringworm".to_string(),
            filename: "arm.png".to_string(),
        };
        let report = image_report(None, date(), &result);
        assert_eq!(report.patient, DEFAULT_PATIENT);
        assert_eq!(report.prediction, "Ringworm");
        assert_eq!(report.disclaimer, IMAGE_DISCLAIMER);
    }

    #[test]
    fn test_patient_falls_back_to_email() {
        let identity = Identity {
            username: None,
            email: Some("bob@example.com".to_string()),
        };
        assert_eq!(patient_name(Some(&identity)), "bob@example.com");
    }
}
