//! 結果表示のカード一覧
//!
//! カードごとに料理イメージ取得タスクを1つ起動する。
//! タスクはカード一覧の寿命に紐づき、破棄後に届いた結果は反映しない。

use crate::ai_provider::DishIllustrator;
use platepal_common::{DishCardView, DishRecord, Illustration};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// カード1枚（表示内容 + イメージ状態）
#[derive(Debug, Clone)]
pub struct DishCard {
    pub view: DishCardView,
    pub illustration: Illustration,
}

struct IllustrationReady {
    index: usize,
    url: String,
}

/// カード所有のイメージ取得タスク
struct IllustrationTask {
    mounted: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Drop for IllustrationTask {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::Release);
        self.handle.abort();
    }
}

pub struct ResultsView {
    cards: Vec<DishCard>,
    tasks: Vec<IllustrationTask>,
    updates: Option<mpsc::UnboundedReceiver<IllustrationReady>>,
    pending: usize,
}

impl ResultsView {
    /// カードを並べ、各カードのイメージ取得を開始する
    pub fn mount<I: DishIllustrator>(items: &[DishRecord], illustrator: Arc<I>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let tasks = items
            .iter()
            .enumerate()
            .map(|(index, dish)| {
                let mounted = Arc::new(AtomicBool::new(true));
                let task_mounted = Arc::clone(&mounted);
                let illustrator = Arc::clone(&illustrator);
                let tx = tx.clone();
                let name = dish.translated_name.clone();

                let handle = tokio::spawn(async move {
                    let url = illustrator.illustrate(&name).await;
                    if task_mounted.load(Ordering::Acquire) {
                        let _ = tx.send(IllustrationReady { index, url });
                    }
                });

                IllustrationTask { mounted, handle }
            })
            .collect::<Vec<_>>();

        Self {
            cards: Self::build_cards(items),
            pending: tasks.len(),
            tasks,
            updates: Some(rx),
        }
    }

    /// イメージなしでカードだけ並べる
    pub fn text_only(items: &[DishRecord]) -> Self {
        Self {
            cards: Self::build_cards(items),
            tasks: Vec::new(),
            updates: None,
            pending: 0,
        }
    }

    pub fn cards(&self) -> &[DishCard] {
        &self.cards
    }

    /// 取得待ちのカード数
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// 次に届いたイメージを反映し、そのカード番号を返す
    ///
    /// 全カード反映済み、またはタスクが残っていなければ None
    pub async fn next_ready(&mut self) -> Option<usize> {
        if self.pending == 0 {
            return None;
        }

        let ready = self.updates.as_mut()?.recv().await?;
        let card = self.cards.get_mut(ready.index)?;
        if card.illustration == Illustration::Loading {
            self.pending -= 1;
        }
        card.illustration = Illustration::Ready(ready.url);
        Some(ready.index)
    }

    /// 全カードのイメージが揃うまで待つ
    pub async fn settle(&mut self) {
        while self.next_ready().await.is_some() {}
    }

    /// 一覧を破棄（未完了のタスクは中断し、結果は捨てる）
    pub fn unmount(mut self) {
        self.tasks.clear();
        self.updates = None;
    }

    fn build_cards(items: &[DishRecord]) -> Vec<DishCard> {
        items
            .iter()
            .map(|dish| DishCard {
                view: DishCardView::from(dish),
                illustration: Illustration::Loading,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platepal_common::SpiceLevel;

    struct EchoIllustrator;

    impl DishIllustrator for EchoIllustrator {
        async fn illustrate(&self, dish_name: &str) -> String {
            format!("data:image/png;base64,{}", dish_name.len())
        }
    }

    fn dish(name: &str) -> DishRecord {
        DishRecord {
            original_name: name.to_string(),
            translated_name: name.to_string(),
            description: String::new(),
            allergens: vec![],
            spice_level: SpiceLevel::Mild,
            dietary_notes: vec![],
            pairing_suggestion: "Tea".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mount_starts_loading() {
        let view = ResultsView::mount(&[dish("a"), dish("bb")], Arc::new(EchoIllustrator));
        assert_eq!(view.cards().len(), 2);
        assert_eq!(view.pending(), 2);
        assert!(view
            .cards()
            .iter()
            .all(|c| c.illustration == Illustration::Loading));
    }

    #[tokio::test]
    async fn test_settle_fills_every_card() {
        let mut view = ResultsView::mount(&[dish("a"), dish("bb")], Arc::new(EchoIllustrator));
        view.settle().await;

        assert_eq!(view.pending(), 0);
        assert_eq!(view.cards()[0].illustration, Illustration::Ready("data:image/png;base64,1".into()));
        assert_eq!(view.cards()[1].illustration, Illustration::Ready("data:image/png;base64,2".into()));
        assert!(view.next_ready().await.is_none());
    }

    #[tokio::test]
    async fn test_text_only_has_no_tasks() {
        let mut view = ResultsView::text_only(&[dish("a")]);
        assert_eq!(view.pending(), 0);
        assert!(view.next_ready().await.is_none());
        assert_eq!(view.cards()[0].illustration, Illustration::Loading);
    }

    #[tokio::test]
    async fn test_empty_menu() {
        let mut view = ResultsView::mount(&[], Arc::new(EchoIllustrator));
        assert!(view.cards().is_empty());
        view.settle().await;
    }
}
