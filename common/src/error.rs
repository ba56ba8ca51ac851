//! エラー型定義

use thiserror::Error;

/// メニュー解析失敗時にユーザーへ表示する固定メッセージ
pub const INTERPRETATION_FAILED_MESSAGE: &str =
    "The AI had trouble reading the menu. Please try a clearer picture.";

/// 失敗理由が取れない場合の汎用メッセージ
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred. Please try again.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ファイル読み込み失敗
    #[error("Could not read the selected file: {0}")]
    Read(String),

    /// AIレスポンスの形式不正
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    /// メニュー解析失敗（原因はログ用に保持し、表示は固定文言）
    #[error("{}", INTERPRETATION_FAILED_MESSAGE)]
    InterpretationFailed { cause: String },

    /// 状態遷移の不正
    #[error("Invalid transition: cannot {action} while {from}")]
    InvalidTransition { from: &'static str, action: &'static str },
}

impl Error {
    /// 任意の失敗を解析失敗に正規化
    pub fn interpretation_failed(cause: impl std::fmt::Display) -> Self {
        match cause.to_string() {
            c if c.is_empty() => Error::InterpretationFailed { cause: "unknown".into() },
            c => Error::InterpretationFailed { cause: c },
        }
    }

    /// ログ出力用の原因文字列
    pub fn cause(&self) -> String {
        match self {
            Error::InterpretationFailed { cause } => cause.clone(),
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
