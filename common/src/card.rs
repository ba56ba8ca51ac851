//! 料理カードの表示モデル（CLI/WASM共通）

use crate::prompts::PLACEHOLDER_IMAGE_URL;
use crate::types::{DishRecord, SpiceLevel};

/// カードごとのイメージ取得状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Illustration {
    #[default]
    Loading,
    Ready(String),
}

impl Illustration {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Illustration::Ready(url) if url == PLACEHOLDER_IMAGE_URL)
    }
}

/// 辛さインジケータ（レベル0では表示しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiceMeter {
    pub level: u8,
    pub max: u8,
}

impl SpiceMeter {
    pub fn from_level(level: SpiceLevel) -> Option<Self> {
        match level.ordinal() {
            0 => None,
            n => Some(Self { level: n, max: SpiceLevel::MAX }),
        }
    }

    /// 目盛りごとの点灯状態
    pub fn pips(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.max).map(move |i| i < self.level)
    }
}

/// カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishCardView {
    pub original_name: String,
    pub title: String,
    pub description: String,
    pub spice: Option<SpiceMeter>,
    pub spice_label: &'static str,
    pub allergen_tags: Vec<String>,
    pub dietary_tags: Vec<String>,
    pub pairing: String,
}

impl From<&DishRecord> for DishCardView {
    fn from(dish: &DishRecord) -> Self {
        Self {
            original_name: dish.original_name.clone(),
            title: dish.translated_name.clone(),
            description: dish.description.clone(),
            spice: SpiceMeter::from_level(dish.spice_level),
            spice_label: dish.spice_level.as_str(),
            allergen_tags: dish.allergens.clone(),
            dietary_tags: dish.dietary_notes.clone(),
            pairing: dish.pairing_suggestion.clone(),
        }
    }
}

/// 件数の見出し（1件なら単数形）
pub fn dish_count_heading(count: usize) -> String {
    match count {
        1 => "1 dish found".to_string(),
        n => format!("{} dishes found", n),
    }
}
