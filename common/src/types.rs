//! メニュー解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - DishRecord: 料理1品分の構造化データ
//! - SpiceLevel: 辛さ（0〜4の順序尺度）
//! - MenuResult: 解析結果（メニュー掲載順）

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// ペアリング提案が空の場合の汎用提案
pub const DEFAULT_PAIRING: &str = "Water or a soft drink";

/// 辛さレベル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpiceLevel {
    #[default]
    None,
    Mild,
    Medium,
    Spicy,
    VerySpicy,
}

impl SpiceLevel {
    /// 最大レベル（インジケータの目盛り数）
    pub const MAX: u8 = 4;

    pub const ALL: [SpiceLevel; 5] = [
        SpiceLevel::None,
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Spicy,
        SpiceLevel::VerySpicy,
    ];

    /// 順序値 (0〜4)
    pub fn ordinal(self) -> u8 {
        match self {
            SpiceLevel::None => 0,
            SpiceLevel::Mild => 1,
            SpiceLevel::Medium => 2,
            SpiceLevel::Spicy => 3,
            SpiceLevel::VerySpicy => 4,
        }
    }

    /// スキーマ上の表記
    pub fn as_str(self) -> &'static str {
        match self {
            SpiceLevel::None => "None",
            SpiceLevel::Mild => "Mild",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Spicy => "Spicy",
            SpiceLevel::VerySpicy => "Very Spicy",
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpiceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "none" => Ok(SpiceLevel::None),
            "mild" => Ok(SpiceLevel::Mild),
            "medium" => Ok(SpiceLevel::Medium),
            "spicy" => Ok(SpiceLevel::Spicy),
            "very spicy" => Ok(SpiceLevel::VerySpicy),
            _ => Err(format!("unknown spice level: {}", s)),
        }
    }
}

impl Serialize for SpiceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SpiceLevel {
    // 未知の値は表示側と同じく辛さなし扱い（フィールド欠落はエラー）
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// 料理1品分の解析結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishRecord {
    /// メニュー記載の原語表記
    pub original_name: String,
    pub translated_name: String,
    pub description: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub allergens: Vec<String>,

    pub spice_level: SpiceLevel,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub dietary_notes: Vec<String>,

    pub pairing_suggestion: String,
}

impl DishRecord {
    /// 受信データの正規化
    ///
    /// - ラベルの前後空白を除去し、空ラベルを捨てる
    /// - ペアリング提案が空なら汎用提案に置き換える
    pub fn normalize(mut self) -> Self {
        self.allergens = clean_labels(self.allergens);
        self.dietary_notes = clean_labels(self.dietary_notes);
        if self.pairing_suggestion.trim().is_empty() {
            self.pairing_suggestion = DEFAULT_PAIRING.to_string();
        }
        self
    }
}

/// 解析結果（メニュー掲載順）
pub type MenuResult = Vec<DishRecord>;

fn clean_labels(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
