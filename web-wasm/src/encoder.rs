//! ブラウザの File をエンコード

use gloo::file::futures::read_as_data_url;
use gloo::file::File;
use platepal_common::{EncodedImage, Error, Result};

/// ファイル選択の accept 属性
pub const ACCEPT: &str = "image/*,.pdf";

/// File を Data URL として読み、前置きを外して返す
///
/// MIMEタイプは File の宣言値を優先する
pub async fn encode_file(file: &File) -> Result<EncodedImage> {
    let declared = file.raw_mime_type();

    let data_url = read_as_data_url(file)
        .await
        .map_err(|e| Error::Read(e.to_string()))?;

    EncodedImage::from_data_url(&data_url, &declared)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_encode_strips_prefix() {
        let file = File::new_with_options("menu.jpg", &[0xFFu8, 0xD8, 0xFF][..], Some("image/jpeg"), None);
        let image = encode_file(&file).await.unwrap();

        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "/9j/");
    }
}
