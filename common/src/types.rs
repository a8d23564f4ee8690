//! 파싱 결과의 타입 정의
//!
//! CLI와 테스트에서 공유되는 타입:
//! - LogRow: 공사일보 한 행 (공종/세부공종 단위 작업 레코드)
//! - ParsedLog: 문서 하나의 파싱 결과 (행 목록 + 장비 목록 + 총출력)

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 공사일보 한 행의 작업 레코드
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRow {
    /// 날짜 (YYYY-MM-DD, 문서에서 한 번도 안 나오면 빈 문자열)
    pub date: String,

    pub category: String,      // 공종

    /// 세부공종 (없으면 "-" 플레이스홀더)
    pub subcategory: String,

    pub headcount: u32,        // 인원수

    /// 작업내용 (여러 줄은 " / "로 이어붙임)
    pub description: String,
}

/// 문서 하나의 파싱 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedLog {
    pub rows: Vec<LogRow>,

    /// 장비 언급 줄 (원문 그대로, 입력 순서 유지)
    pub equipment: Vec<String>,

    /// 총출력. 공종별 인원수 합계이되, 명시적 총출력 줄이 있으면 그 값
    pub total_headcount: u32,
}

impl ParsedLog {
    /// JSON 문자열에서 복원
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON 문자열로 직렬화 (pretty)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_row_default() {
        let row = LogRow::default();
        assert_eq!(row.date, "");
        assert_eq!(row.category, "");
        assert_eq!(row.headcount, 0);
    }

    #[test]
    fn test_log_row_serialize() {
        let row = LogRow {
            date: "2024-05-01".to_string(),
            category: "토목".to_string(),
            subcategory: "-".to_string(),
            headcount: 5,
            description: "기초 작업 / 배수 공사".to_string(),
        };

        let json = serde_json::to_string(&row).expect("직렬화 실패");
        assert!(json.contains("\"date\":\"2024-05-01\""));
        assert!(json.contains("\"category\":\"토목\""));
        assert!(json.contains("\"headcount\":5"));
    }

    #[test]
    fn test_log_row_deserialize_missing_fields() {
        // 일부 필드만 있어도 역직렬화되는지 확인
        let json = r#"{"category": "철근"}"#;

        let row: LogRow = serde_json::from_str(json).expect("역직렬화 실패");
        assert_eq!(row.category, "철근");
        assert_eq!(row.date, ""); // 기본값
        assert_eq!(row.headcount, 0); // 기본값
    }

    #[test]
    fn test_parsed_log_roundtrip() {
        let original = ParsedLog {
            rows: vec![LogRow {
                date: "2024-05-01".to_string(),
                category: "토목".to_string(),
                subcategory: "터파기".to_string(),
                headcount: 3,
                description: "기초 작업".to_string(),
            }],
            equipment: vec!["장비: 굴삭기 1대".to_string()],
            total_headcount: 3,
        };

        let json = original.to_json_pretty().expect("직렬화 실패");
        let restored = ParsedLog::from_json(&json).expect("역직렬화 실패");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_parsed_log_from_json_invalid() {
        let result = ParsedLog::from_json("{ invalid }");
        assert!(result.is_err());
    }

    #[test]
    fn test_parsed_log_deserialize_camel_case() {
        let json = r#"{"rows": [], "equipment": [], "totalHeadcount": 42}"#;

        let parsed = ParsedLog::from_json(json).expect("역직렬화 실패");
        assert_eq!(parsed.total_headcount, 42);
        assert!(parsed.rows.is_empty());
    }
}
