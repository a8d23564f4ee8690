use crate::error::{GongsaError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 외부 OCR 명령 (이미지 경로와 "stdout"을 인자로 받는 tesseract 호환 CLI)
    pub ocr_command: String,
    /// OCR 언어 지정 (tesseract -l 값)
    pub ocr_languages: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr_command: "tesseract".into(),
            ocr_languages: "kor+eng".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GongsaError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("gongsa-ilbo").join("config.json"))
    }

    pub fn set_ocr_command(&mut self, command: String) -> Result<()> {
        self.ocr_command = command;
        self.save()
    }

    pub fn set_languages(&mut self, languages: String) -> Result<()> {
        self.ocr_languages = languages;
        self.save()
    }
}
