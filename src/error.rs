use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatePalError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No API key configured. Run `platepal config --set-api-key YOUR_KEY` or set GEMINI_API_KEY")]
    MissingApiKey,

    /// ファイル読み込み失敗（エラー画面にそのまま表示する）
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] platepal_common::Error),
}

pub type Result<T> = std::result::Result<T, PlatePalError>;
