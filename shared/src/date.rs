//! 时间格式化模块
//!
//! 服务端时间戳为 ISO 8601 字符串（通常不带时区），此模块负责解析与展示。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析服务端时间戳
///
/// 支持 RFC 3339（带时区，转换为该时区的本地时间）与不带时区的 ISO 8601。
/// 返回 None 如果解析失败
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// 历史记录中的时间展示，无法解析时原样返回
pub fn format_timestamp(s: &str) -> String {
    parse_timestamp(s)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| s.to_string())
}

/// 报告中的日期展示
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naive_iso_with_fraction() {
        let dt = parse_timestamp("2024-03-01T10:20:30.123456").unwrap();
        assert_eq!(dt.format(DISPLAY_FORMAT).to_string(), "2024-03-01 10:20");
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_timestamp("2024-03-01T10:20:30+02:00").unwrap();
        assert_eq!(dt.format(DISPLAY_FORMAT).to_string(), "2024-03-01 10:20");
    }

    #[test]
    fn test_format_timestamp_keeps_unparseable_input() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_report_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(format_report_date(date), "2025-01-09");
    }
}
