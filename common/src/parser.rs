//! 공사일보 텍스트 파서
//!
//! OCR이 만들어낸 줄 단위 텍스트를 행 레코드로 변환하는 상태 기계.
//! 전이는 `step(state, line) -> (state', emitted)` 형태의 명시적 함수로
//! 구현하고, 행 방출은 전이의 부수 출력으로 스레딩한다.
//!
//! 두 가지 모드:
//! - MultiRowWithFlush: 공종/세부공종 마커마다 직전 누적분을 행으로 확정
//! - SingleRecord: 페이지 = 항목 하나, 뒤 줄이 앞 필드를 덮어씀 (손글씨 단건용)

use crate::classifier::{classify_line, LineKind};
use crate::types::{LogRow, ParsedLog};

/// 파서 동작 모드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// 단일 레코드. 확정(flush) 개념 없이 필드를 덮어쓰고 항상 행 1개를 낸다
    SingleRecord,
    /// 다건 누적. 마커 전환과 입력 끝에서 작업내용이 비어 있지 않으면 행 확정
    #[default]
    MultiRowWithFlush,
}

/// 세부공종 마커에 인원수 괄호가 없을 때의 처리
///
/// 원본의 두 변형이 서로 다르게 동작하던 지점이라 명시적 설정으로 분리했다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingSubcount {
    /// 직전 인원수를 그대로 유지 (기본값)
    #[default]
    Keep,
    /// 0으로 재설정
    Zero,
}

/// 파서 설정
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    pub mode: ParseMode,
    pub missing_subcount: MissingSubcount,
}

/// parse 호출 한 번 동안만 살아 있는 누적 상태
#[derive(Debug, Clone, Default)]
struct ParseState {
    /// 날짜. 한 번 잡히면 다음 날짜 줄이 나올 때까지 유지
    date: String,
    category: String,
    subcategory: String,
    headcount: u32,
    /// 작업내용 조각. 확정 시 " / "로 이어붙임
    description: Vec<String>,
    /// 공종별 인원수 누계
    total_sum: u32,
    /// 명시적 총출력 줄 (마지막 값이 이김, 누계를 완전히 대체)
    total_override: Option<u32>,
    equipment: Vec<String>,
}

impl ParseState {
    /// 누적된 작업내용을 행으로 확정. 작업내용이 비어 있으면 행을 내지 않는다
    fn flush(&mut self) -> Option<LogRow> {
        if self.description.is_empty() {
            return None;
        }
        let row = self.snapshot();
        self.description.clear();
        Some(row)
    }

    /// 현재 상태를 행으로 스냅샷 (버퍼는 건드리지 않음)
    fn snapshot(&self) -> LogRow {
        LogRow {
            date: self.date.clone(),
            category: self.category.clone(),
            subcategory: if self.subcategory.is_empty() {
                "-".to_string()
            } else {
                self.subcategory.clone()
            },
            headcount: self.headcount,
            description: self.description.join(" / "),
        }
    }

    fn total_headcount(&self) -> u32 {
        self.total_override.unwrap_or(self.total_sum)
    }
}

/// 상태 전이 함수. 줄 하나를 소비해 다음 상태와 (있다면) 확정된 행을 돌려준다
fn step(mut state: ParseState, line: &str, options: &ParserOptions) -> (ParseState, Option<LogRow>) {
    let mut emitted = None;

    match classify_line(line) {
        LineKind::Date(date) => {
            // 날짜 줄은 버퍼를 확정하지 않는다
            state.date = date;
        }
        LineKind::Category { name, headcount } => {
            if options.mode == ParseMode::MultiRowWithFlush {
                emitted = state.flush();
                state.subcategory.clear();
            }
            state.category = name;
            state.headcount = headcount;
            // 어떤 입력에도 패닉하지 않는다: 누계는 포화 덧셈
            state.total_sum = state.total_sum.saturating_add(headcount);
        }
        LineKind::Subcategory { name, headcount } => {
            if options.mode == ParseMode::MultiRowWithFlush {
                emitted = state.flush();
            }
            state.subcategory = name;
            match headcount {
                Some(count) => state.headcount = count,
                None => {
                    if options.missing_subcount == MissingSubcount::Zero {
                        state.headcount = 0;
                    }
                }
            }
        }
        LineKind::Description(text) => {
            state.description.push(text);
        }
        LineKind::Equipment => {
            state.equipment.push(line.to_string());
        }
        LineKind::TotalOverride(total) => {
            state.total_override = Some(total);
        }
        LineKind::Other => {}
    }

    (state, emitted)
}

/// 공사일보 텍스트 파서
///
/// 입력 텍스트만의 순수 함수. 호출 간 공유 상태 없음
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    options: ParserOptions,
}

impl LogParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// 문서 전체 텍스트를 파싱한다. 어떤 입력에도 에러 없이
    /// (비어 있을 수 있는) 결과를 돌려준다
    pub fn parse(&self, text: &str) -> ParsedLog {
        let mut rows = Vec::new();
        let mut state = ParseState::default();

        for line in text.lines() {
            let (next, emitted) = step(state, line, &self.options);
            state = next;
            if let Some(row) = emitted {
                rows.push(row);
            }
        }

        // 입력 끝 처리
        match self.options.mode {
            ParseMode::MultiRowWithFlush => {
                if let Some(row) = state.flush() {
                    rows.push(row);
                }
            }
            ParseMode::SingleRecord => {
                // 단일 모드는 작업내용이 비어도 항상 레코드 1개
                rows.push(state.snapshot());
            }
        }

        ParsedLog {
            rows,
            total_headcount: state.total_headcount(),
            equipment: state.equipment,
        }
    }
}

/// 다건 모드 기본 설정으로 파싱
pub fn parse_text(text: &str) -> ParsedLog {
    LogParser::default().parse(text)
}

/// 단일 레코드 모드로 파싱해 레코드 하나를 돌려준다 (손글씨 단건 문서용)
pub fn parse_single_entry(text: &str) -> LogRow {
    let options = ParserOptions {
        mode: ParseMode::SingleRecord,
        ..Default::default()
    };
    LogParser::new(options)
        .parse(text)
        .rows
        .pop()
        .unwrap_or_default()
}
