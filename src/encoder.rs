//! メニュー画像のエンコード
//!
//! ファイルを読み込み、Base64ペイロードとMIMEタイプに変換する

use crate::error::{PlatePalError, Result};
use image::ImageFormat;
use platepal_common::payload::FALLBACK_MIME_TYPE;
use platepal_common::EncodedImage;
use std::path::Path;

/// ファイル選択で受け付ける形式（画像 + PDF）
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "tif", "pdf"];

/// ファイル名を表示用に取り出す
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 拡張子からMIMEタイプを判定
pub fn media_type_for(path: &Path) -> &'static str {
    let is_pdf = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        return "application/pdf";
    }

    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// 受け付ける拡張子か
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .map(|e| {
            let ext = e.to_string_lossy().to_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// ファイルを読み込んでエンコード
///
/// 読み込み失敗は `PlatePalError::Read` として呼び出し元へ返す
pub async fn encode_file(path: &Path) -> Result<EncodedImage> {
    let bytes = tokio::fs::read(path).await.map_err(|source| PlatePalError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mime_type = media_type_for(path);
    log::debug!("[encode] {} ({} bytes, {})", path.display(), bytes.len(), mime_type);

    Ok(EncodedImage::from_bytes(&bytes, mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for(Path::new("menu.jpg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("menu.JPEG")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("menu.png")), "image/png");
        assert_eq!(media_type_for(Path::new("menu.webp")), "image/webp");
        assert_eq!(media_type_for(Path::new("menu.PDF")), "application/pdf");
        assert_eq!(media_type_for(Path::new("menu.txt")), FALLBACK_MIME_TYPE);
        assert_eq!(media_type_for(Path::new("menu")), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn test_is_accepted() {
        assert!(is_accepted(Path::new("a.jpg")));
        assert!(is_accepted(Path::new("a.JPG")));
        assert!(is_accepted(Path::new("a.pdf")));
        assert!(!is_accepted(Path::new("a.txt")));
        assert!(!is_accepted(Path::new("a")));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(&PathBuf::from("/tmp/photos/menu.jpg")), "menu.jpg");
    }
}
