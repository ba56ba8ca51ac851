use crate::error::{PlatePalError, Result};
use platepal_common::{
    DEFAULT_API_BASE_URL, DEFAULT_ILLUSTRATION_MODEL, DEFAULT_INTERPRET_MODEL,
    DEFAULT_TARGET_LANGUAGE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// APIキーを上書きする環境変数
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub interpret_model: String,
    pub illustration_model: String,
    pub api_base_url: String,
    pub target_language: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            interpret_model: DEFAULT_INTERPRET_MODEL.into(),
            illustration_model: DEFAULT_ILLUSTRATION_MODEL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            target_language: DEFAULT_TARGET_LANGUAGE.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlatePalError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("platepal").join("config.json"))
    }

    /// APIキー取得（環境変数を優先）
    pub fn get_api_key(&self) -> Result<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        Self::pick_api_key(from_env, self.api_key.clone())
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(PlatePalError::Config("API key must not be empty".into()));
        }
        self.api_key = Some(key);
        self.save()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    fn pick_api_key(from_env: Option<String>, stored: Option<String>) -> Result<String> {
        [from_env, stored]
            .into_iter()
            .flatten()
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
            .ok_or(PlatePalError::MissingApiKey)
    }

    /// 表示用の設定一覧（APIキーは有無のみ）
    pub fn describe(&self, path: &Path) -> String {
        let key_state = if self.get_api_key().is_ok() { "set" } else { "not set" };
        [
            format!("Config ({}):", path.display()),
            format!("  Interpret model:    {}", self.interpret_model),
            format!("  Illustration model: {}", self.illustration_model),
            format!("  API base URL:       {}", self.api_base_url),
            format!("  Target language:    {}", self.target_language),
            format!("  Timeout:            {}s", self.timeout_seconds),
            format!("  API key:            {}", key_state),
        ]
        .join("\n")
    }
}
