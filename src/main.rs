use clap::Parser;
use gongsa_ilbo_common::{LogParser, MissingSubcount, ParseMode, ParserOptions};
use gongsa_ilbo_rust::{cli, config, error, export, ocr, review, scanner};

use cli::{Cli, Commands};
use config::Config;
use error::{GongsaError, Result};
use std::path::{Path, PathBuf};

fn parser_options(single: bool, subcount_zero: bool) -> ParserOptions {
    ParserOptions {
        mode: if single {
            ParseMode::SingleRecord
        } else {
            ParseMode::MultiRowWithFlush
        },
        missing_subcount: if subcount_zero {
            MissingSubcount::Zero
        } else {
            MissingSubcount::Keep
        },
    }
}

fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GongsaError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// 기본 출력 파일명: 공사일보_YYYYMMDD
fn default_title() -> String {
    format!("공사일보_{}", chrono::Local::now().format("%Y%m%d"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Ocr { folder, output } => {
            println!("📋 gongsa-ilbo - OCR 추출\n");

            println!("[1/2] 페이지 이미지 스캔 중...");
            let pages = scanner::scan_folder(&folder)?;
            println!("✔ {}쪽 검출\n", pages.len());

            if pages.is_empty() {
                return Err(GongsaError::NoImagesFound(folder.display().to_string()));
            }

            println!("[2/2] OCR 실행 중...");
            let text = ocr::extract_document_text(&pages, &config, cli.verbose).await?;

            let output = output.unwrap_or_else(|| folder.join("ocr.txt"));
            std::fs::write(&output, &text)?;
            println!("✔ 텍스트 저장: {}", output.display());

            println!("\n✅ OCR 완료");
        }

        Commands::Parse { input, output, single, subcount_zero } => {
            println!("📋 gongsa-ilbo - 텍스트 파싱\n");

            let text = read_text_file(&input)?;
            let parsed = LogParser::new(parser_options(single, subcount_zero)).parse(&text);
            println!(
                "✔ 행 {}건, 장비 {}건, 총출력 {}명",
                parsed.rows.len(),
                parsed.equipment.len(),
                parsed.total_headcount
            );

            let output = output.unwrap_or_else(|| input.with_extension("json"));
            std::fs::write(&output, parsed.to_json_pretty()?)?;
            println!("✔ 결과 저장: {}", output.display());

            println!("\n✅ 파싱 완료");
        }

        Commands::Export { input, format, output, title } => {
            println!("📄 gongsa-ilbo - 내보내기\n");

            let content = read_text_file(&input)?;
            let parsed = gongsa_ilbo_common::ParsedLog::from_json(&content)?;

            let output = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_results(&parsed, &format, &output, &title)?;

            println!("\n✅ 내보내기 완료");
        }

        Commands::Run { folder, output, format, single, subcount_zero, title } => {
            println!("🚀 gongsa-ilbo - 일괄 처리\n");

            // 1. Scan
            println!("[1/3] 페이지 이미지 스캔 중...");
            let pages = scanner::scan_folder(&folder)?;
            println!("✔ {}쪽 검출\n", pages.len());

            if pages.is_empty() {
                return Err(GongsaError::NoImagesFound(folder.display().to_string()));
            }

            // 2. OCR + Parse
            println!("[2/3] OCR 및 파싱 중...");
            let text = ocr::extract_document_text(&pages, &config, cli.verbose).await?;
            let parsed = LogParser::new(parser_options(single, subcount_zero)).parse(&text);
            println!(
                "✔ 행 {}건, 장비 {}건, 총출력 {}명\n",
                parsed.rows.len(),
                parsed.equipment.len(),
                parsed.total_headcount
            );

            // 3. Export
            println!("[3/3] 내보내는 중...");
            let output = output.unwrap_or_else(|| folder.clone());
            let title = title.unwrap_or_else(default_title);
            export::export_results(&parsed, &format, &output, &title)?;

            println!("\n✅ 완료");
        }

        Commands::Review { input, output } => {
            println!("📅 gongsa-ilbo - 날짜 보정\n");
            review::run_interactive_review(&input, output.as_deref())?;
        }

        Commands::Config { set_ocr_command, set_languages, show } => {
            let mut config = config;

            if let Some(command) = set_ocr_command {
                config.set_ocr_command(command)?;
                println!("✔ OCR 명령을 설정했습니다");
            }

            if let Some(languages) = set_languages {
                config.set_languages(languages)?;
                println!("✔ OCR 언어를 설정했습니다");
            }

            if show {
                println!("설정:");
                println!("  OCR 명령: {}", config.ocr_command);
                println!("  OCR 언어: {}", config.ocr_languages);
                println!("  타임아웃: {}초", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
