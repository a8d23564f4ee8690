use thiserror::Error;

#[derive(Error, Debug)]
pub enum GongsaError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("이미지를 찾을 수 없습니다: {0}")]
    NoImagesFound(String),

    #[error("OCR 실행 오류: {0}")]
    OcrExecution(String),

    #[error("Excel 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error("CLI 실행 오류: {0}")]
    CliExecution(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] gongsa_ilbo_common::Error),
}

pub type Result<T> = std::result::Result<T, GongsaError>;
