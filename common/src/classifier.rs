//! OCR 텍스트 줄 분류기
//!
//! 한 줄을 우선순위가 고정된 패턴 목록으로 분류한다.
//! 여러 패턴에 걸리는 줄은 먼저 매칭된 규칙으로 결정된다:
//! 날짜 → 공종 → 세부공종 → 작업내용 → 장비 → 총출력

use lazy_static::lazy_static;
use regex::Regex;

/// 줄 분류 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// YYYY-MM-DD 부분 문자열을 포함하는 줄
    Date(String),
    /// `● 공종명 (인원수)` 마커
    Category { name: String, headcount: u32 },
    /// `[세부공종명] (인원수)` 마커. 인원수는 생략 가능
    Subcategory { name: String, headcount: Option<u32> },
    /// `-`로 시작하는 작업내용 줄 (글리프 제거, 트림 완료)
    Description(String),
    /// "장비"를 포함하는 줄
    Equipment,
    /// `총출력: N` 형식의 명시적 총출력 줄
    TotalOverride(u32),
    /// 어느 규칙에도 해당하지 않는 줄
    Other,
}

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
    static ref CATEGORY_RE: Regex = Regex::new(r"^●\s*(.+?)\s*\(([^)]*)\)").unwrap();
    static ref SUBCATEGORY_RE: Regex = Regex::new(r"^\[([^\]]+)\]\s*(?:\(([^)]*)\))?").unwrap();
    static ref TOTAL_RE: Regex = Regex::new(r"총출력\s*[:：]\s*(\d+)").unwrap();
}

/// 괄호 안 인원수 토큰을 정수로. 정수가 아니면 0 (원본 규칙: 파싱 실패는 에러가 아님)
fn parse_headcount(token: &str) -> u32 {
    token.trim().parse().unwrap_or(0)
}

/// 한 줄을 분류한다. 우선순위는 모듈 문서의 순서대로, 첫 매칭이 이긴다.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if let Some(m) = DATE_RE.find(trimmed) {
        return LineKind::Date(m.as_str().to_string());
    }

    if let Some(caps) = CATEGORY_RE.captures(trimmed) {
        return LineKind::Category {
            name: caps[1].trim().to_string(),
            headcount: parse_headcount(&caps[2]),
        };
    }

    if let Some(caps) = SUBCATEGORY_RE.captures(trimmed) {
        return LineKind::Subcategory {
            name: caps[1].trim().to_string(),
            headcount: caps.get(2).map(|m| parse_headcount(m.as_str())),
        };
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        return LineKind::Description(rest.trim().to_string());
    }

    if trimmed.contains("장비") {
        return LineKind::Equipment;
    }

    if let Some(caps) = TOTAL_RE.captures(trimmed) {
        return LineKind::TotalOverride(parse_headcount(&caps[1]));
    }

    LineKind::Other
}
