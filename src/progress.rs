//! 解析中のプログレス表示（表示専用）
//!
//! 経過時間で段階ラベルを進めるだけで、解析の完了判定には使わない。

use indicatif::{ProgressBar, ProgressStyle};
use platepal_common::progress::stage_at;
use platepal_common::{Phase, UploadStage};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_millis(100);

pub struct ScanProgress {
    bar: ProgressBar,
    ticker: JoinHandle<()>,
}

impl ScanProgress {
    pub fn start(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(100)
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template("{spinner} [{bar:24}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .progress_chars("█▓░");
        bar.set_style(style);
        bar.enable_steady_tick(TICK);

        let started = Instant::now();
        let ticker_bar = bar.clone();
        let ticker = tokio::spawn(async move {
            loop {
                let stage = stage_at(started.elapsed());
                ticker_bar.set_position(u64::from(stage.percent()));
                ticker_bar.set_message(stage.label());
                tokio::time::sleep(TICK).await;
            }
        });

        Self { bar, ticker }
    }

    /// 実際の処理結果に合わせて表示を閉じる
    pub fn finish(self, phase: Phase) {
        self.ticker.abort();
        if phase == Phase::Results {
            let stage = UploadStage::Complete;
            self.bar.set_position(u64::from(stage.percent()));
            self.bar.finish_with_message(stage.label());
        } else {
            self.bar.finish_and_clear();
        }
    }
}
