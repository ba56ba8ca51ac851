//! ターミナル表示
//!
//! カード・エラー画面を文字列に整形する（出力は呼び出し側）

use crate::gallery::DishCard;
use platepal_common::{dish_count_heading, Illustration, SpiceMeter};
use std::fmt::Write as _;

const RULE: &str = "────────────────────────────────────────";

pub fn spice_indicator(meter: &SpiceMeter) -> String {
    meter
        .pips()
        .map(|lit| if lit { "🌶" } else { "·" })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn illustration_line(illustration: &Illustration) -> String {
    match illustration {
        Illustration::Loading => "🖼  generating image...".to_string(),
        Illustration::Ready(url) if illustration.is_placeholder() => format!("🖼  {}", url),
        Illustration::Ready(url) => match url.split_once(',') {
            Some((header, data)) if url.starts_with("data:") => {
                let mime = header.trim_start_matches("data:").split(';').next().unwrap_or("image");
                format!("🖼  {} ({} KB)", mime, data.len() * 3 / 4 / 1024)
            }
            _ => format!("🖼  {}", url),
        },
    }
}

/// カード1枚分
///
/// `expanded` が false なら見出しと短い説明のみ
pub fn render_card(index: usize, card: &DishCard, expanded: bool, show_image: bool) -> String {
    let view = &card.view;
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:>2}. {}", index + 1, view.title);
    let _ = writeln!(out, "    {}", view.original_name);
    if let Some(meter) = &view.spice {
        let _ = writeln!(
            out,
            "    {}  {} ({}/{})",
            spice_indicator(meter),
            view.spice_label,
            meter.level,
            meter.max
        );
    }
    if show_image {
        let _ = writeln!(out, "    {}", illustration_line(&card.illustration));
    }

    if !expanded {
        let summary: String = view.description.chars().take(100).collect();
        let ellipsis = if view.description.chars().count() > 100 { "…" } else { "" };
        let _ = writeln!(out, "    {}{}", summary, ellipsis);
        return out;
    }

    let _ = writeln!(out, "    {}", view.description);
    let _ = writeln!(out, "    🍷 Pairs well with: {}", view.pairing);
    if !view.dietary_tags.is_empty() {
        let tags: Vec<String> = view.dietary_tags.iter().map(|t| format!("✓ {}", t)).collect();
        let _ = writeln!(out, "    Dietary notes: {}", tags.join("  "));
    }
    if !view.allergen_tags.is_empty() {
        let _ = writeln!(out, "    ⚠️  Potential allergens: {}", view.allergen_tags.join(", "));
    }
    out
}

/// 結果画面
///
/// `expanded` が false なら各カードを見出しと短い説明だけにする
pub fn render_results(cards: &[DishCard], show_images: bool, expanded: bool) -> String {
    if cards.is_empty() {
        return "No dishes were found on this menu.\n".to_string();
    }

    let mut out = format!("🍽  {}\n", dish_count_heading(cards.len()));
    for (index, card) in cards.iter().enumerate() {
        out.push_str(&render_card(index, card, expanded, show_images));
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

/// エラー画面（メッセージ1つ + 再試行の案内）
pub fn render_error(message: &str) -> String {
    format!("❌ Oops! Something went wrong.\n   {}\n", message)
}
