//! PlatePal - メニュー写真AI翻訳・解説
//!
//! メニュー写真をGeminiで解析し、料理ごとの説明・アレルゲン・辛さ・
//! ペアリング提案と料理イメージを表示する

pub mod ai_provider;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod gallery;
pub mod gemini;
pub mod logging;
pub mod progress;
pub mod render;
pub mod session;
