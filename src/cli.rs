use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gongsa-ilbo")]
#[command(about = "공사일보 OCR 디지털화 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 페이지 이미지 폴더를 OCR해서 텍스트 파일로 저장
    Ocr {
        /// 페이지 이미지 폴더 경로
        #[arg(required = true)]
        folder: PathBuf,

        /// 출력 텍스트 파일 (기본: 입력 폴더/ocr.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// OCR 텍스트 파일을 파싱해서 JSON으로 저장
    Parse {
        /// OCR 텍스트 파일
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 JSON 파일 (기본: 입력 파일의 확장자를 .json으로)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 단일 레코드 모드 (손글씨 단건 문서: 페이지 = 항목 하나)
        #[arg(long)]
        single: bool,

        /// 세부공종 인원수 생략 시 0으로 재설정 (기본은 직전 값 유지)
        #[arg(long)]
        subcount_zero: bool,
    },

    /// 파싱 결과 JSON에서 Excel/JSON을 생성
    Export {
        /// 파싱 결과 JSON 파일
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 형식 (xlsx/json/both)
        #[arg(short, long, default_value = "xlsx")]
        format: ExportFormat,

        /// 출력 파일/디렉터리
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 문서 제목 (출력 파일명과 시트 제목에 사용)
        #[arg(short, long, default_value = "공사일보")]
        title: String,
    },

    /// OCR부터 Excel 출력까지 일괄 실행
    Run {
        /// 페이지 이미지 폴더 경로
        #[arg(required = true)]
        folder: PathBuf,

        /// 출력 파일/디렉터리
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 출력 형식 (xlsx/json/both)
        #[arg(short, long, default_value = "xlsx")]
        format: ExportFormat,

        /// 단일 레코드 모드
        #[arg(long)]
        single: bool,

        /// 세부공종 인원수 생략 시 0으로 재설정
        #[arg(long)]
        subcount_zero: bool,

        /// 문서 제목 (생략 시 공사일보_YYYYMMDD)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 날짜가 비어 있는 행을 대화식으로 보정
    Review {
        /// 파싱 결과 JSON 파일
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 파일 (생략 시 덮어쓰기)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 설정을 표시/편집
    Config {
        /// OCR 명령을 설정 (기본: tesseract)
        #[arg(long)]
        set_ocr_command: Option<String>,

        /// OCR 언어를 설정 (기본: kor+eng)
        #[arg(long)]
        set_languages: Option<String>,

        /// 설정을 표시
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use xlsx, json, or both", s)),
        }
    }
}
