//! アップロードセッションの状態遷移（CLI/WASM共通）
//!
//! Home → Processing → Results | Error → (reset) → Home
//!
//! 処理中のサイクルは番号で識別し、リセット後に届いた古い結果は捨てる。

use crate::error::{Error, Result, UNKNOWN_ERROR_MESSAGE};
use crate::types::{DishRecord, MenuResult};
use std::fmt;

/// 画面フェーズ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Home,
    Processing,
    Results,
    Error,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Home => "Home",
            Phase::Processing => "Processing",
            Phase::Results => "Results",
            Phase::Error => "Error",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 解析サイクルの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleId(u64);

/// 1回の操作サイクル分のセッション状態
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    phase: Phase,
    file_name: Option<String>,
    menu: MenuResult,
    error_message: Option<String>,
    cycle: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Results 時のみ中身がある
    pub fn items(&self) -> &[DishRecord] {
        &self.menu
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Home → Processing（ファイル選択）
    ///
    /// 処理中は二重に開始できない
    pub fn begin(&mut self, file_name: impl Into<String>) -> Result<CycleId> {
        if self.phase != Phase::Home {
            return Err(Error::InvalidTransition {
                from: self.phase.as_str(),
                action: "begin",
            });
        }

        self.cycle += 1;
        self.phase = Phase::Processing;
        self.file_name = Some(file_name.into());
        self.menu.clear();
        self.error_message = None;
        Ok(CycleId(self.cycle))
    }

    /// Processing → Results
    ///
    /// # Returns
    /// 適用されたら true（リセット済みの古いサイクルなら false）
    pub fn complete(&mut self, cycle: CycleId, menu: MenuResult) -> bool {
        if !self.is_current(cycle) {
            return false;
        }
        self.menu = menu;
        self.phase = Phase::Results;
        true
    }

    /// Processing → Error
    ///
    /// メッセージが空なら汎用メッセージを保存する
    pub fn fail(&mut self, cycle: CycleId, message: Option<String>) -> bool {
        if !self.is_current(cycle) {
            return false;
        }
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        self.error_message = Some(message);
        self.menu.clear();
        self.phase = Phase::Error;
        true
    }

    /// 任意のフェーズ → Home
    ///
    /// Home からは何もしない。処理中のサイクルは無効になる。
    pub fn reset(&mut self) {
        if self.phase == Phase::Home {
            return;
        }
        if self.phase == Phase::Processing {
            self.cycle += 1;
        }
        self.phase = Phase::Home;
        self.file_name = None;
        self.menu.clear();
        self.error_message = None;
    }

    fn is_current(&self, cycle: CycleId) -> bool {
        self.phase == Phase::Processing && cycle.0 == self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpiceLevel;

    fn dish(name: &str) -> DishRecord {
        DishRecord {
            original_name: name.to_string(),
            translated_name: name.to_string(),
            description: String::new(),
            allergens: vec![],
            spice_level: SpiceLevel::None,
            dietary_notes: vec![],
            pairing_suggestion: "Water".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let session = UploadSession::new();
        assert_eq!(session.phase(), Phase::Home);
        assert!(session.items().is_empty());
        assert!(session.error_message().is_none());
        assert!(session.file_name().is_none());
    }

    #[test]
    fn test_begin_then_complete() {
        let mut session = UploadSession::new();
        let cycle = session.begin("menu.jpg").unwrap();
        assert_eq!(session.phase(), Phase::Processing);
        assert_eq!(session.file_name(), Some("menu.jpg"));

        assert!(session.complete(cycle, vec![dish("a"), dish("b")]));
        assert_eq!(session.phase(), Phase::Results);
        assert_eq!(session.items().len(), 2);
    }

    #[test]
    fn test_begin_then_fail() {
        let mut session = UploadSession::new();
        let cycle = session.begin("menu.jpg").unwrap();

        assert!(session.fail(cycle, Some("could not read".to_string())));
        assert_eq!(session.phase(), Phase::Error);
        assert_eq!(session.error_message(), Some("could not read"));
        assert!(session.items().is_empty());
    }

    #[test]
    fn test_fail_without_message_uses_fallback() {
        let mut session = UploadSession::new();
        let cycle = session.begin("menu.jpg").unwrap();
        session.fail(cycle, Some("   ".to_string()));
        assert_eq!(session.error_message(), Some(UNKNOWN_ERROR_MESSAGE));
    }

    #[test]
    fn test_begin_while_processing_rejected() {
        let mut session = UploadSession::new();
        session.begin("a.jpg").unwrap();
        let err = session.begin("b.jpg").unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { from: "Processing", .. }));
        assert_eq!(session.file_name(), Some("a.jpg"));
    }

    #[test]
    fn test_begin_from_results_rejected() {
        let mut session = UploadSession::new();
        let cycle = session.begin("a.jpg").unwrap();
        session.complete(cycle, vec![]);
        assert!(session.begin("b.jpg").is_err());
    }

    #[test]
    fn test_reset_from_results() {
        let mut session = UploadSession::new();
        let cycle = session.begin("a.jpg").unwrap();
        session.complete(cycle, vec![dish("a")]);

        session.reset();
        assert_eq!(session.phase(), Phase::Home);
        assert!(session.items().is_empty());
        assert!(session.error_message().is_none());
        assert!(session.file_name().is_none());
    }

    #[test]
    fn test_reset_from_error() {
        let mut session = UploadSession::new();
        let cycle = session.begin("a.jpg").unwrap();
        session.fail(cycle, None);

        session.reset();
        assert_eq!(session.phase(), Phase::Home);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn test_reset_from_home_is_noop() {
        let mut session = UploadSession::new();
        session.reset();
        assert_eq!(session.phase(), Phase::Home);

        // Home再突入後も通常通り開始できる
        let cycle = session.begin("a.jpg").unwrap();
        assert!(session.complete(cycle, vec![dish("a")]));
    }

    #[test]
    fn test_stale_cycle_ignored_after_reset() {
        let mut session = UploadSession::new();
        let stale = session.begin("a.jpg").unwrap();
        session.reset();

        assert!(!session.complete(stale, vec![dish("a")]));
        assert!(!session.fail(stale, Some("late".to_string())));
        assert_eq!(session.phase(), Phase::Home);
        assert!(session.items().is_empty());

        let fresh = session.begin("b.jpg").unwrap();
        assert!(!session.complete(stale, vec![dish("x")]));
        assert!(session.complete(fresh, vec![dish("b")]));
        assert_eq!(session.items()[0].original_name, "b");
    }

    #[test]
    fn test_repeated_cycles() {
        let mut session = UploadSession::new();
        for i in 0..3 {
            let cycle = session.begin(format!("menu-{}.jpg", i)).unwrap();
            session.complete(cycle, vec![dish("x"); i]);
            assert_eq!(session.items().len(), i);
            session.reset();
        }
        assert_eq!(session.phase(), Phase::Home);
    }
}
