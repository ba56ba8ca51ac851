//! アップロード表示用の進捗段階
//!
//! 表示専用。実際の解析は選択直後に始まり、この段階の進み具合とは無関係に完了する。

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStage {
    #[default]
    Idle,
    Uploading,
    Processing,
    Complete,
}

impl UploadStage {
    pub fn label(&self) -> &'static str {
        match self {
            UploadStage::Idle => "Ready to scan",
            UploadStage::Uploading => "Uploading menu photo",
            UploadStage::Processing => "Analyzing dishes with PlatePal AI",
            UploadStage::Complete => "Translations ready",
        }
    }

    /// 表示上の進捗率 (%)
    pub fn percent(&self) -> u8 {
        match self {
            UploadStage::Idle => 0,
            UploadStage::Uploading => 35,
            UploadStage::Processing => 72,
            UploadStage::Complete => 100,
        }
    }
}

/// ファイル選択からの表示切替タイミング
///
/// Complete は実際の解析完了時にのみ表示する
pub const STAGE_SCHEDULE: [(Duration, UploadStage); 2] = [
    (Duration::from_millis(0), UploadStage::Uploading),
    (Duration::from_millis(900), UploadStage::Processing),
];

/// 経過時間に対応する表示段階
pub fn stage_at(elapsed: Duration) -> UploadStage {
    STAGE_SCHEDULE
        .iter()
        .rev()
        .find(|(offset, _)| elapsed >= *offset)
        .map(|(_, stage)| *stage)
        .unwrap_or_default()
}
