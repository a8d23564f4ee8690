//! Excel 생성
//!
//! 파싱 결과를 공사일보 표 형식의 통합문서로 저장한다:
//! - 시트 1: 날짜/공종/세부공종/인원수/작업내용 표 + 총출력 요약 행
//! - 시트 2: 장비 언급 줄 (원문 그대로)

use crate::error::{GongsaError, Result};
use gongsa_ilbo_common::ParsedLog;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

const HEADERS: &[&str] = &["날짜", "공종", "세부공종", "인원수", "작업내용"];

pub fn generate_excel(parsed: &ParsedLog, output_path: &Path, title: &str) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Left)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let summary_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    // 시트 1: 작업 레코드 표
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(title)
        .map_err(|e| GongsaError::ExcelGeneration(format!("시트명 설정 오류: {}", e)))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| GongsaError::ExcelGeneration(format!("헤더 기록 오류: {}", e)))?;
    }

    for (i, row) in parsed.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            (0u16, row.date.as_str()),
            (1, row.category.as_str()),
            (2, row.subcategory.as_str()),
            (4, row.description.as_str()),
        ];
        for (col, value) in cells {
            worksheet
                .write_string_with_format(r, col, value, &value_format)
                .map_err(|e| GongsaError::ExcelGeneration(format!("행 기록 오류: {}", e)))?;
        }
        worksheet
            .write_number_with_format(r, 3, row.headcount as f64, &value_format)
            .map_err(|e| GongsaError::ExcelGeneration(format!("행 기록 오류: {}", e)))?;
    }

    // 총출력 요약 행
    let summary_row = (parsed.rows.len() + 1) as u32;
    worksheet
        .write_string_with_format(summary_row, 0, "총출력", &summary_format)
        .map_err(|e| GongsaError::ExcelGeneration(format!("요약 기록 오류: {}", e)))?;
    worksheet
        .write_number_with_format(summary_row, 3, parsed.total_headcount as f64, &summary_format)
        .map_err(|e| GongsaError::ExcelGeneration(format!("요약 기록 오류: {}", e)))?;

    // 열 너비 (작업내용만 넓게)
    for col in 0..4u16 {
        worksheet
            .set_column_width(col, 14.0)
            .map_err(|e| GongsaError::ExcelGeneration(format!("열 너비 오류: {}", e)))?;
    }
    worksheet
        .set_column_width(4, 50.0)
        .map_err(|e| GongsaError::ExcelGeneration(format!("열 너비 오류: {}", e)))?;

    // 시트 2: 장비 목록
    if !parsed.equipment.is_empty() {
        let equipment_sheet = workbook.add_worksheet();
        equipment_sheet
            .set_name("장비")
            .map_err(|e| GongsaError::ExcelGeneration(format!("시트명 설정 오류: {}", e)))?;

        equipment_sheet
            .write_string_with_format(0, 0, "장비", &header_format)
            .map_err(|e| GongsaError::ExcelGeneration(format!("헤더 기록 오류: {}", e)))?;

        for (i, line) in parsed.equipment.iter().enumerate() {
            equipment_sheet
                .write_string_with_format((i + 1) as u32, 0, line, &value_format)
                .map_err(|e| GongsaError::ExcelGeneration(format!("장비 기록 오류: {}", e)))?;
        }

        equipment_sheet
            .set_column_width(0, 60.0)
            .map_err(|e| GongsaError::ExcelGeneration(format!("열 너비 오류: {}", e)))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| GongsaError::ExcelGeneration(format!("파일 저장 오류: {}", e)))?;

    Ok(())
}
