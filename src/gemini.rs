//! Gemini API クライアント（reqwest）
//!
//! - メニュー解析: 画像 + 指示文 + responseSchema → DishRecord配列
//! - 料理イメージ: テキストプロンプト + responseModalities=IMAGE → Data URL
//!
//! リクエスト/レスポンスの形式は platepal_common::gemini を使用

use crate::ai_provider::{DishIllustrator, MenuInterpreter};
use crate::config::Config;
use crate::error::{PlatePalError, Result};
use platepal_common::{
    build_illustration_request, build_menu_request, endpoint_url, menu_from_response,
    EncodedImage, Error as CommonError, GeminiRequest, GeminiResponse, MenuResult,
    PLACEHOLDER_IMAGE_URL,
};
use std::time::Instant;
use thiserror::Error;

/// 通信レベルの失敗（ログ用）
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    interpret_model: String,
    illustration_model: String,
    target_language: String,
}

impl GeminiClient {
    /// 設定からクライアントを作成
    ///
    /// APIキーがなければ `MissingApiKey`（起動時に判定する）
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: &Config, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PlatePalError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.api_base_url.clone(),
            interpret_model: config.interpret_model.clone(),
            illustration_model: config.illustration_model.clone(),
            target_language: config.target_language.clone(),
        })
    }

    /// generateContent 呼び出し（共通処理）
    pub async fn generate(
        &self,
        model: &str,
        request: &GeminiRequest,
    ) -> std::result::Result<GeminiResponse, TransportError> {
        let url = endpoint_url(&self.base_url, model, &self.api_key);

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        Ok(response.json::<GeminiResponse>().await?)
    }
}

impl MenuInterpreter for GeminiClient {
    async fn interpret(&self, image: &EncodedImage) -> platepal_common::Result<MenuResult> {
        let request = build_menu_request(image, &self.target_language);
        let start = Instant::now();
        log::info!(
            "[interpret] model={} mime={} payload={} chars",
            self.interpret_model,
            image.mime_type,
            image.data.len()
        );

        let response = self
            .generate(&self.interpret_model, &request)
            .await
            .map_err(|e| {
                log::error!("[interpret] {}", e);
                CommonError::interpretation_failed(e)
            })?;

        let menu = menu_from_response(&response).map_err(|e| {
            log::warn!("[interpret] {}", e);
            CommonError::interpretation_failed(e)
        })?;

        log::info!("[interpret] {} dishes in {}ms", menu.len(), start.elapsed().as_millis());
        Ok(menu)
    }
}

impl DishIllustrator for GeminiClient {
    async fn illustrate(&self, dish_name: &str) -> String {
        let request = build_illustration_request(dish_name);

        match self.generate(&self.illustration_model, &request).await {
            Ok(response) => match response.first_image_data_url() {
                Some(url) => {
                    log::debug!("[illustrate] {}: {} chars", dish_name, url.len());
                    url
                }
                None => {
                    log::warn!("[illustrate] {}: no image in response", dish_name);
                    PLACEHOLDER_IMAGE_URL.to_string()
                }
            },
            Err(e) => {
                log::warn!("[illustrate] {}: {}", dish_name, e);
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}
