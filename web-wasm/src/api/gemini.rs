//! Gemini API連携（fetch）
//!
//! - メニュー解析: 失敗はすべて InterpretationFailed（原因はコンソールのみ）
//! - 料理イメージ: 失敗時はプレースホルダーURL

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use platepal_common::{
    build_illustration_request, build_menu_request, endpoint_url, menu_from_response,
    EncodedImage, Error, GeminiRequest, GeminiResponse, MenuResult, Result,
    DEFAULT_API_BASE_URL, DEFAULT_ILLUSTRATION_MODEL, DEFAULT_INTERPRET_MODEL,
    DEFAULT_TARGET_LANGUAGE, PLACEHOLDER_IMAGE_URL,
};

/// ビルド時に埋め込むAPIキーの環境変数名
pub const API_KEY_BUILD_ENV: &str = "PLATEPAL_GEMINI_API_KEY";

/// API呼び出し設定（起動時に1回作って各所へ渡す）
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    api_key: String,
    base_url: String,
    interpret_model: String,
    illustration_model: String,
    target_language: String,
}

impl GeminiConfig {
    /// ビルド時のキーから作成（未設定なら None）
    pub fn from_build_env() -> Option<Self> {
        Self::with_api_key(option_env!("PLATEPAL_GEMINI_API_KEY")?)
    }

    pub fn with_api_key(api_key: &str) -> Option<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return None;
        }
        Some(Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            interpret_model: DEFAULT_INTERPRET_MODEL.to_string(),
            illustration_model: DEFAULT_ILLUSTRATION_MODEL.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        })
    }
}

pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Gemini API呼び出し（共通処理）
async fn call_gemini_api(
    config: &GeminiConfig,
    model: &str,
    request: &GeminiRequest,
) -> std::result::Result<GeminiResponse, JsValue> {
    let url = endpoint_url(&config.base_url, model, &config.api_key);
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let text = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();
        return Err(JsValue::from_str(&format!("API error {}: {}", resp.status(), text)));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// メニュー写真を解析して料理一覧を返す
pub async fn interpret_menu(config: &GeminiConfig, image: &EncodedImage) -> Result<MenuResult> {
    let request = build_menu_request(image, &config.target_language);

    let response = call_gemini_api(config, &config.interpret_model, &request)
        .await
        .map_err(|e| {
            let cause = describe(&e);
            console_warn(&format!("[interpret] {}", cause));
            Error::interpretation_failed(cause)
        })?;

    menu_from_response(&response).map_err(|e| {
        console_warn(&format!("[interpret] {}", e));
        Error::interpretation_failed(e)
    })
}

/// 料理イメージ（Data URL）。失敗時はプレースホルダー
pub async fn illustrate_dish(config: &GeminiConfig, dish_name: &str) -> String {
    let request = build_illustration_request(dish_name);

    match call_gemini_api(config, &config.illustration_model, &request).await {
        Ok(response) => response.first_image_data_url().unwrap_or_else(|| {
            console_warn(&format!("[illustrate] {}: no image in response", dish_name));
            PLACEHOLDER_IMAGE_URL.to_string()
        }),
        Err(e) => {
            console_warn(&format!("[illustrate] {}: {}", dish_name, describe(&e)));
            PLACEHOLDER_IMAGE_URL.to_string()
        }
    }
}
