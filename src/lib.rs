//! gongsa-ilbo-rust
//!
//! 손글씨/스캔 공사일보를 OCR → 파싱 → 표 형식으로 디지털화하는 CLI.
//! 파싱 로직은 gongsa-ilbo-common에 있고, 여기는 그 주변의 글루만 둔다

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ocr;
pub mod review;
pub mod scanner;
