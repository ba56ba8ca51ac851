//! APIレスポンスパーサー
//!
//! メニュー解析レスポンスからJSONを取り出し、
//! DishRecord配列として検証・正規化する

use crate::error::{Error, Result};
use crate::types::{DishRecord, MenuResult};
use serde_json::Value;

/// APIレスポンスからJSON部分を抽出
///
/// レスポンスが ```json / ``` で始まる場合のみ囲みを外す。
/// それ以外はレスポンス全体（前後の空白を除く）をそのまま返す。
/// 値の中に含まれるバッククォートは囲みとして扱わない。
///
/// # Examples
/// ```
/// use platepal_common::extract_json;
///
/// let response = "```json\n[{\"key\": \"value\"}]\n```";
/// assert_eq!(extract_json(response), "[{\"key\": \"value\"}]");
/// ```
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);

    match body.rfind("```") {
        Some(end) => body[..end].trim(),
        None => trimmed,
    }
}

/// メニュー解析レスポンスをパース
///
/// # Arguments
/// * `response` - モデルが返したテキスト
///
/// # Returns
/// * `Ok(MenuResult)` - 掲載順のDishRecord配列
/// * `Err(Error::MalformedResponse)` - 空、JSON不正、配列以外、必須フィールド欠落
pub fn parse_menu_response(response: &str) -> Result<MenuResult> {
    let json_str = extract_json(response);
    if json_str.is_empty() {
        return Err(Error::MalformedResponse("empty response".into()));
    }

    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| Error::MalformedResponse(format!("JSON parse error: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(Error::MalformedResponse(format!(
            "expected a JSON array, got {}",
            json_kind(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_dish(index, item))
        .collect()
}

fn parse_dish(index: usize, item: Value) -> Result<DishRecord> {
    if !item.is_object() {
        return Err(Error::MalformedResponse(format!(
            "item {} is {}, expected an object",
            index,
            json_kind(&item)
        )));
    }

    let dish: DishRecord = serde_json::from_value(item)
        .map_err(|e| Error::MalformedResponse(format!("item {}: {}", index, e)))?;
    Ok(dish.normalize())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpiceLevel;

    const PAD_KRAPOW: &str = r#"[{
        "originalName": "Pad Krapow",
        "translatedName": "Holy Basil Stir-Fry",
        "description": "Minced meat cooked quickly with holy basil and chili.",
        "allergens": ["Soy"],
        "spiceLevel": "Spicy",
        "dietaryNotes": [],
        "pairingSuggestion": "Pairs with a light lager"
    }]"#;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = "  ```json\n[{\"a\": 1}]\n```\n";
        assert_eq!(extract_json(response), "[{\"a\": 1}]");
    }

    #[test]
    fn test_extract_json_fence_not_at_start_is_untouched() {
        let response = "Here is the menu:\n```json\n[]\n```";
        assert_eq!(extract_json(response), response);
    }

    #[test]
    fn test_extract_json_plain_fence() {
        let response = "```\n[]\n```";
        assert_eq!(extract_json(response), "[]");
    }

    #[test]
    fn test_extract_json_raw() {
        assert_eq!(extract_json("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn test_extract_json_unterminated_fence() {
        let response = "```json [1]";
        assert_eq!(extract_json(response), "```json [1]");
    }

    // =============================================
    // parse_menu_response テスト
    // =============================================

    #[test]
    fn test_parse_single_dish_verbatim() {
        let result = parse_menu_response(PAD_KRAPOW).unwrap();
        assert_eq!(result.len(), 1);

        let dish = &result[0];
        assert_eq!(dish.original_name, "Pad Krapow");
        assert_eq!(dish.translated_name, "Holy Basil Stir-Fry");
        assert_eq!(dish.description, "Minced meat cooked quickly with holy basil and chili.");
        assert_eq!(dish.allergens, vec!["Soy"]);
        assert_eq!(dish.spice_level, SpiceLevel::Spicy);
        assert!(dish.dietary_notes.is_empty());
        assert_eq!(dish.pairing_suggestion, "Pairs with a light lager");
    }

    #[test]
    fn test_parse_preserves_order() {
        let response = r#"[
            {"originalName": "A", "translatedName": "First", "description": "", "allergens": [], "spiceLevel": "None", "dietaryNotes": [], "pairingSuggestion": "Tea"},
            {"originalName": "B", "translatedName": "Second", "description": "", "allergens": [], "spiceLevel": "Mild", "dietaryNotes": ["Vegan"], "pairingSuggestion": "Tea"},
            {"originalName": "C", "translatedName": "Third", "description": "", "allergens": [], "spiceLevel": "Very Spicy", "dietaryNotes": [], "pairingSuggestion": "Tea"}
        ]"#;

        let result = parse_menu_response(response).unwrap();
        let names: Vec<&str> = result.iter().map(|d| d.translated_name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(result[2].spice_level, SpiceLevel::VerySpicy);
    }

    #[test]
    fn test_parse_backticks_inside_description() {
        let response = r#"[{"originalName": "Cold Brew", "translatedName": "Cold Brew", "description": "Iced with ```json``` and ``` marks", "allergens": [], "spiceLevel": "None", "dietaryNotes": [], "pairingSuggestion": "Tea"}]"#;

        let result = parse_menu_response(response).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Iced with ```json``` and ``` marks");
    }

    #[test]
    fn test_parse_fenced_response_with_backticks_inside() {
        let response = "```json\n[{\"originalName\": \"A\", \"translatedName\": \"A\", \"description\": \"Use ``` here\", \"allergens\": [], \"spiceLevel\": \"Mild\", \"dietaryNotes\": [], \"pairingSuggestion\": \"Tea\"}]\n```";

        let result = parse_menu_response(response).unwrap();
        assert_eq!(result[0].description, "Use ``` here");
    }

    #[test]
    fn test_parse_empty_array() {
        let result = parse_menu_response("[]").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_fenced_response() {
        let response = format!("```json\n{}\n```", PAD_KRAPOW);
        let result = parse_menu_response(&response).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_parse_object_top_level_is_malformed() {
        let response = r#"{"items": []}"#;
        let err = parse_menu_response(response).unwrap_err();
        match err {
            Error::MalformedResponse(msg) => assert!(msg.contains("an object")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_null_top_level_is_malformed() {
        assert!(matches!(
            parse_menu_response("null"),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_empty_response_is_malformed() {
        assert!(matches!(
            parse_menu_response("   "),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_garbled_response_is_malformed() {
        assert!(matches!(
            parse_menu_response("Sorry, I cannot read this menu."),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_non_object_item_is_malformed() {
        let err = parse_menu_response(r#"["Pad Thai"]"#).unwrap_err();
        assert!(format!("{}", err).contains("item 0"));
    }

    #[test]
    fn test_parse_missing_required_field_is_malformed() {
        let response = r#"[{"originalName": "A", "description": "", "spiceLevel": "None", "pairingSuggestion": "Tea"}]"#;
        let err = parse_menu_response(response).unwrap_err();
        assert!(format!("{}", err).contains("translatedName"));
    }

    #[test]
    fn test_parse_defaults_missing_collections() {
        let response = r#"[{"originalName": "A", "translatedName": "A", "description": "", "spiceLevel": "Medium", "pairingSuggestion": ""}]"#;
        let result = parse_menu_response(response).unwrap();
        assert!(result[0].allergens.is_empty());
        assert!(result[0].dietary_notes.is_empty());
        assert_eq!(result[0].pairing_suggestion, crate::types::DEFAULT_PAIRING);
    }
}
