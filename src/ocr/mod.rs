//! 외부 OCR 연동 모듈
//!
//! OCR 엔진 자체는 외부 협력자다. tesseract 호환 CLI를 페이지 이미지마다
//! 한 번씩 호출하고, 페이지별 텍스트를 개행으로 이어붙여 돌려준다.
//! 파서는 이 텍스트 덩어리만 입력으로 받는다.

use crate::config::Config;
use crate::error::{GongsaError, Result};
use crate::scanner::PageInfo;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::process::Command;

/// 문서를 구성하는 전체 페이지를 OCR해서 텍스트 하나로 합친다
pub async fn extract_document_text(
    pages: &[PageInfo],
    config: &Config,
    verbose: bool,
) -> Result<String> {
    let progress = ProgressBar::new(pages.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut page_texts = Vec::with_capacity(pages.len());

    for page in pages {
        progress.set_message(page.file_name.clone());

        let text = run_ocr_cli(&page.path, config)?;
        if verbose {
            println!("  [{}] {} chars", page.file_name, text.len());
        }
        page_texts.push(text);

        progress.inc(1);
    }

    progress.finish_and_clear();

    Ok(page_texts.join("\n"))
}

fn run_ocr_cli(image_path: &Path, config: &Config) -> Result<String> {
    // tesseract 호환 호출: <명령> <이미지> stdout -l <언어>
    #[cfg(windows)]
    let output = Command::new("cmd")
        .arg("/c")
        .arg(&config.ocr_command)
        .arg(image_path)
        .args(["stdout", "-l", &config.ocr_languages])
        .output()
        .map_err(|e| GongsaError::OcrExecution(format!("OCR CLI 실행 오류: {}", e)))?;

    #[cfg(not(windows))]
    let output = Command::new(&config.ocr_command)
        .arg(image_path)
        .args(["stdout", "-l", &config.ocr_languages])
        .output()
        .map_err(|e| GongsaError::OcrExecution(format!("OCR CLI 실행 오류: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GongsaError::OcrExecution(format!(
            "OCR CLI failed (code {:?}): {}",
            output.status.code(),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_run_ocr_cli_missing_command() {
        let config = Config {
            ocr_command: "nonexistent-ocr-cli-12345".into(),
            ..Default::default()
        };
        let result = run_ocr_cli(&PathBuf::from("page.png"), &config);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), GongsaError::OcrExecution(_)));
    }

    #[tokio::test]
    async fn test_extract_document_text_no_pages() {
        let config = Config::default();
        let text = extract_document_text(&[], &config, false).await.unwrap();
        assert_eq!(text, "");
    }
}
