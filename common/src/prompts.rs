//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト・スキーマ定義:
//! - build_menu_prompt: メニュー解析用の指示文
//! - menu_response_schema: 構造化出力スキーマ（DishRecord配列）
//! - build_illustration_prompt: 料理イメージ生成用プロンプト

use crate::types::SpiceLevel;
use serde_json::{json, Value};

/// メニュー解析用モデル
pub const DEFAULT_INTERPRET_MODEL: &str = "gemini-2.5-flash";

/// 料理イメージ生成用モデル
pub const DEFAULT_ILLUSTRATION_MODEL: &str = "gemini-2.5-flash-image";

/// 翻訳先言語の既定値
pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// 画像生成失敗時のプレースホルダー
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/400x300/292524/e7e5e4/png?text=Image+Not+Found";

/// DishRecordの必須フィールド（スキーマの `required`）
pub const DISH_FIELDS: [&str; 7] = [
    "originalName",
    "translatedName",
    "description",
    "allergens",
    "spiceLevel",
    "dietaryNotes",
    "pairingSuggestion",
];

/// メニュー解析プロンプト生成
///
/// # Arguments
/// * `target_language` - translatedName の翻訳先言語（空なら既定値）
///
/// # Returns
/// 画像と一緒に送る指示文
pub fn build_menu_prompt(target_language: &str) -> String {
    let language = match target_language.trim() {
        "" => DEFAULT_TARGET_LANGUAGE,
        lang => lang,
    };

    format!(
        r#"You are a friendly food guide who makes restaurant menus easy for anyone to understand. Look at the attached menu photo. For every food or drink item on it, explain the item simply and clearly.
- Names: keep the name exactly as printed on the menu, and give a {language} translation.
- Description: say what the dish is, what is in it and how it is made, in everyday words. Instead of "sautéed", say "cooked in a pan with a little oil". Make it sound delicious.
- Allergens: list common allergens such as "Dairy", "Gluten", "Nuts" or "Shellfish". Use an empty list if there are none.
- Spice level: choose one of None, Mild, Medium, Spicy, Very Spicy.
- Dietary notes: mention labels such as "Vegetarian", "Vegan", "Gluten-Free" or "Halal". Use an empty list if none apply.
- Pairing suggestion: suggest a drink that goes well with it. If nothing specific fits, suggest something general like "Water or a soft drink".
Write descriptions and suggestions in {language}. Respond with ONLY the JSON array described by the schema and no other text."#
    )
}

/// 構造化出力スキーマ（Gemini responseSchema形式）
pub fn menu_response_schema() -> Value {
    let spice_levels: Vec<&str> = SpiceLevel::ALL.iter().map(|l| l.as_str()).collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "originalName": {
                    "type": "STRING",
                    "description": "The name of the item in its original language, exactly as it appears on the menu."
                },
                "translatedName": {
                    "type": "STRING",
                    "description": "The translated name of the item."
                },
                "description": {
                    "type": "STRING",
                    "description": "An appetizing, easy-to-understand description covering main ingredients, preparation and cultural origin when relevant."
                },
                "allergens": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Common potential allergens in the dish. Empty array if none."
                },
                "spiceLevel": {
                    "type": "STRING",
                    "enum": spice_levels,
                    "description": "The spice level of the dish, one of the provided options."
                },
                "dietaryNotes": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Dietary notes such as Vegetarian, Vegan, Gluten-Free, Halal. Empty array if none apply."
                },
                "pairingSuggestion": {
                    "type": "STRING",
                    "description": "A brief drink pairing. If no specific pairing, a general suggestion like \"Water or a soft drink\"."
                }
            },
            "required": DISH_FIELDS
        }
    })
}

/// 料理イメージ生成プロンプト
pub fn build_illustration_prompt(dish_name: &str) -> String {
    format!(
        "A delicious, professional food photography shot of \"{}\", plated beautifully on a clean, simple background.",
        dish_name.trim()
    )
}
