//! 画像ペイロード（Base64 + MIMEタイプ）
//!
//! ファイル内容をJSONに埋め込める形へ変換する。
//! ブラウザの FileReader が付ける `data:...;base64,` 前置きはここで取り除く。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// MIMEタイプ不明時の既定値
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// エンコード済み画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Base64（前置きなし）
    pub data: String,
    pub mime_type: String,
}

impl EncodedImage {
    /// 生バイト列からエンコード
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: non_empty_or_fallback(mime_type),
        }
    }

    /// Data URL から作成
    ///
    /// `declared_mime` が空でなければそれを優先し、空ならData URLのヘッダから取る
    pub fn from_data_url(data_url: &str, declared_mime: &str) -> Result<Self> {
        let data = extract_base64_from_data_url(data_url)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| Error::Read("file contents could not be decoded".into()))?;

        let mime_type = if declared_mime.trim().is_empty() {
            extract_mime_type_from_data_url(data_url).unwrap_or(FALLBACK_MIME_TYPE)
        } else {
            declared_mime
        };

        Ok(Self {
            data: data.to_string(),
            mime_type: non_empty_or_fallback(mime_type),
        })
    }
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、区切りの `,` がなければNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .map(|(_, data)| data.trim())
}

/// Data URLからMIMEタイプを抽出（"data:image/png;base64,..." → "image/png"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    let header = data_url.strip_prefix("data:")?.split(',').next()?;
    header.split(';').next().filter(|m| !m.is_empty())
}

fn non_empty_or_fallback(mime_type: &str) -> String {
    match mime_type.trim() {
        "" => FALLBACK_MIME_TYPE.to_string(),
        m => m.to_string(),
    }
}
