//! 공사일보 공통 라이브러리
//!
//! CLI와 파서 테스트에서 공유되는 타입과 파싱 로직

pub mod classifier;
pub mod error;
pub mod parser;
pub mod types;

pub use classifier::{classify_line, LineKind};
pub use error::{Error, Result};
pub use parser::{
    parse_single_entry, parse_text, LogParser, MissingSubcount, ParseMode, ParserOptions,
};
pub use types::{LogRow, ParsedLog};
