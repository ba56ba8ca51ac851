//! Gemini API ワイヤ形式（CLI/WASM共通）
//!
//! リクエスト/レスポンスの型とその組み立て・取り出しのみを扱う。
//! 通信はCLI側(reqwest)とWeb側(fetch)でそれぞれ実装する。

use crate::error::{Error, Result};
use crate::parser::parse_menu_response;
use crate::payload::EncodedImage;
use crate::prompts::{build_illustration_prompt, build_menu_prompt, menu_response_schema};
use crate::types::MenuResult;
use serde::{Deserialize, Serialize};

/// Gemini API のベースURL
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// 生成画像にMIMEタイプが付いていない場合の既定値
const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_modalities: Vec<String>,
}

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "inlineData", alias = "inline_data")]
    pub inline_data: Option<ResponseBlob>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseBlob {
    #[serde(default, rename = "mimeType", alias = "mime_type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

impl GeminiResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// 先頭候補のテキストパートを連結
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// 先頭候補の最初の画像パートを Data URL で返す
    pub fn first_image_data_url(&self) -> Option<String> {
        self.first_parts()
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|blob| !blob.data.trim().is_empty())
            .map(|blob| {
                let mime = blob
                    .mime_type
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(DEFAULT_IMAGE_MIME);
                format!("data:{};base64,{}", mime, blob.data.trim())
            })
    }
}

/// generateContent エンドポイントURL
pub fn endpoint_url(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        model,
        api_key
    )
}

/// メニュー解析リクエスト作成（画像 + 指示文 + 出力スキーマ）
pub fn build_menu_request(image: &EncodedImage, target_language: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: image.data.clone(),
                    },
                },
                Part::Text {
                    text: build_menu_prompt(target_language),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(menu_response_schema()),
            ..Default::default()
        },
    }
}

/// 料理イメージ生成リクエスト作成（画像モダリティ指定）
pub fn build_illustration_request(dish_name: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![Part::Text {
                text: build_illustration_prompt(dish_name),
            }],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string()],
            ..Default::default()
        },
    }
}

/// メニュー解析レスポンスから MenuResult を取り出す
pub fn menu_from_response(response: &GeminiResponse) -> Result<MenuResult> {
    let text = response
        .text()
        .ok_or_else(|| Error::MalformedResponse("response contained no text".into()))?;
    parse_menu_response(&text)
}
