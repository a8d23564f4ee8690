//! 대화식 보정 모듈
//!
//! OCR이 날짜를 놓친 행을 골라 하나씩 채워 넣는다.
//! 원본 앱의 페이지별 수동 입력 폼에 해당하는 CLI 대체물

use crate::error::{GongsaError, Result};
use dialoguer::Input;
use gongsa_ilbo_common::ParsedLog;
use std::path::Path;

/// 날짜가 비어 있는 행의 인덱스를 추출
pub fn extract_missing_date_rows(parsed: &ParsedLog) -> Vec<usize> {
    parsed
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.date.trim().is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// 대화 액션
pub enum ReviewAction {
    /// 날짜를 입력
    Input(String),
    /// 이 행을 건너뜀
    Skip,
    /// 남은 행 전부 건너뜀
    SkipAll,
    /// 직전과 같은 날짜를 적용
    Repeat,
    /// 남은 행 전부에 직전 날짜를 적용
    RepeatAll,
    /// 저장하고 종료
    Quit,
}

/// 대화식으로 날짜를 보정
pub fn run_interactive_review(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(input_path)?;
    let mut parsed = ParsedLog::from_json(&content)?;

    let missing_indices = extract_missing_date_rows(&parsed);

    if missing_indices.is_empty() {
        println!("✓ 모든 행에 날짜가 채워져 있습니다");
        return Ok(());
    }

    println!("📅 날짜가 비어 있는 행: {}건", missing_indices.len());
    println!("---");
    println!("조작: [Enter]입력 [s]건너뜀 [S]남은 행 전부 건너뜀 [r]직전과 같음 [R]전부 같음 [q]종료");
    println!("---\n");

    let mut prev_date: Option<String> = None;
    let mut skip_all = false;
    let mut repeat_all = false;

    for (count, &idx) in missing_indices.iter().enumerate() {
        if skip_all {
            continue;
        }

        let row = &parsed.rows[idx];
        println!(
            "[{}/{}] {} / {} ({}명)",
            count + 1,
            missing_indices.len(),
            row.category,
            row.subcategory,
            row.headcount
        );

        if repeat_all {
            if let Some(ref date) = prev_date {
                parsed.rows[idx].date = date.clone();
                println!("  → {} (자동 적용)\n", date);
                continue;
            }
        }

        let action = prompt_review_action(prev_date.as_deref())?;

        match action {
            ReviewAction::Input(date) => {
                parsed.rows[idx].date = date.clone();
                prev_date = Some(date.clone());
                println!("  → {}\n", date);
            }
            ReviewAction::Skip => {
                println!("  → 건너뜀\n");
            }
            ReviewAction::SkipAll => {
                println!("  → 남은 행 전부 건너뜀\n");
                skip_all = true;
            }
            ReviewAction::Repeat => {
                if let Some(ref date) = prev_date {
                    parsed.rows[idx].date = date.clone();
                    println!("  → {} (직전과 같음)\n", date);
                } else {
                    println!("  → 직전 날짜가 없습니다, 건너뜀\n");
                }
            }
            ReviewAction::RepeatAll => {
                if let Some(ref date) = prev_date {
                    parsed.rows[idx].date = date.clone();
                    println!("  → {} (남은 행 전부 적용)\n", date);
                    repeat_all = true;
                } else {
                    println!("  → 직전 날짜가 없습니다, 건너뜀\n");
                }
            }
            ReviewAction::Quit => {
                println!("저장하고 종료합니다...");
                break;
            }
        }
    }

    let output = output_path.unwrap_or(input_path);
    std::fs::write(output, parsed.to_json_pretty()?)?;

    println!("\n✓ 저장했습니다: {}", output.display());

    Ok(())
}

/// 날짜 입력 프롬프트
fn prompt_review_action(prev: Option<&str>) -> Result<ReviewAction> {
    let prompt = if prev.is_some() {
        "날짜 YYYY-MM-DD (s:건너뜀 S:전부 건너뜀 r:직전과 같음 R:전부 같음 q:종료)"
    } else {
        "날짜 YYYY-MM-DD (s:건너뜀 S:전부 건너뜀 q:종료)"
    };

    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| GongsaError::CliExecution(e.to_string()))?;

    let trimmed = input.trim();

    match trimmed {
        "" | "s" => Ok(ReviewAction::Skip),
        "S" => Ok(ReviewAction::SkipAll),
        "r" if prev.is_some() => Ok(ReviewAction::Repeat),
        "R" if prev.is_some() => Ok(ReviewAction::RepeatAll),
        "q" | "Q" => Ok(ReviewAction::Quit),
        _ => Ok(ReviewAction::Input(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gongsa_ilbo_common::LogRow;

    #[test]
    fn test_extract_missing_date_rows() {
        let parsed = ParsedLog {
            rows: vec![
                LogRow { date: "2024-05-01".into(), ..Default::default() },
                LogRow { date: "".into(), ..Default::default() },
                LogRow { date: "  ".into(), ..Default::default() },
                LogRow { date: "2024-05-02".into(), ..Default::default() },
            ],
            ..Default::default()
        };
        let missing = extract_missing_date_rows(&parsed);
        assert_eq!(missing, vec![1, 2]);
    }

    #[test]
    fn test_extract_missing_date_rows_none() {
        let parsed = ParsedLog::default();
        assert!(extract_missing_date_rows(&parsed).is_empty());
    }
}
