//! 料理イメージ取得のテスト
//!
//! カードごとのタスク・到着順・破棄後の扱いを検証

use platepal::ai_provider::DishIllustrator;
use platepal::config::Config;
use platepal::gallery::ResultsView;
use platepal::gemini::GeminiClient;
use platepal_common::{parse_menu_response, DishRecord, Illustration, PLACEHOLDER_IMAGE_URL};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn menu(names: &[&str]) -> Vec<DishRecord> {
    let items: Vec<String> = names
        .iter()
        .map(|name| {
            format!(
                r#"{{"originalName": "{name}", "translatedName": "{name}", "description": "d", "allergens": [], "spiceLevel": "Mild", "dietaryNotes": [], "pairingSuggestion": "Tea"}}"#
            )
        })
        .collect();
    parse_menu_response(&format!("[{}]", items.join(","))).unwrap()
}

/// 名前の長さに反比例して遅延する（後ろのカードほど先に届く）
struct StaggeredIllustrator {
    started: AtomicUsize,
}

impl DishIllustrator for StaggeredIllustrator {
    async fn illustrate(&self, dish_name: &str) -> String {
        self.started.fetch_add(1, Ordering::SeqCst);
        let delay = 200u64.saturating_sub(dish_name.len() as u64 * 40);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        format!("data:image/png;base64,{}", dish_name)
    }
}

/// 返事をしない生成器
struct StalledIllustrator;

impl DishIllustrator for StalledIllustrator {
    async fn illustrate(&self, _dish_name: &str) -> String {
        tokio::time::sleep(Duration::from_secs(60)).await;
        "data:image/png;base64,late".to_string()
    }
}

#[tokio::test]
async fn test_unreachable_service_shows_placeholder() {
    let config = Config {
        api_base_url: "http://127.0.0.1:9/v1beta".into(),
        timeout_seconds: 5,
        ..Default::default()
    };
    let client = Arc::new(GeminiClient::with_api_key(&config, "test-key".into()).unwrap());

    let mut view = ResultsView::mount(&menu(&["Holy Basil Stir-Fry"]), client);
    assert_eq!(view.cards()[0].illustration, Illustration::Loading);

    view.settle().await;

    let illustration = &view.cards()[0].illustration;
    assert_eq!(illustration, &Illustration::Ready(PLACEHOLDER_IMAGE_URL.to_string()));
    assert!(illustration.is_placeholder());
}

#[tokio::test]
async fn test_cards_update_in_arrival_order() {
    let illustrator = Arc::new(StaggeredIllustrator { started: AtomicUsize::new(0) });
    let mut view = ResultsView::mount(&menu(&["a", "bb", "ccc", "dddd"]), Arc::clone(&illustrator));

    let mut order = Vec::new();
    while let Some(index) = view.next_ready().await {
        order.push(index);
    }

    assert_eq!(order, vec![3, 2, 1, 0]);
    assert_eq!(illustrator.started.load(Ordering::SeqCst), 4);
    assert_eq!(
        view.cards()[2].illustration,
        Illustration::Ready("data:image/png;base64,ccc".to_string())
    );
    assert!(view.cards().iter().all(|c| !c.illustration.is_placeholder()));
}

#[tokio::test]
async fn test_one_request_per_card() {
    let illustrator = Arc::new(StaggeredIllustrator { started: AtomicUsize::new(0) });
    let mut view = ResultsView::mount(&menu(&["a", "b", "c"]), Arc::clone(&illustrator));
    view.settle().await;

    assert_eq!(illustrator.started.load(Ordering::SeqCst), 3);
    assert_eq!(view.pending(), 0);
}

#[tokio::test]
async fn test_unmount_releases_pending_tasks() {
    let illustrator = Arc::new(StalledIllustrator);
    let view = ResultsView::mount(&menu(&["a", "b"]), Arc::clone(&illustrator));

    // タスクごとに1つずつ参照を持つ
    assert_eq!(Arc::strong_count(&illustrator), 3);

    view.unmount();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(Arc::strong_count(&illustrator), 1);
}
