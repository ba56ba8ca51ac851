//! セッション進行（エンコード → 解析 → 結果/エラー）
//!
//! 状態遷移そのものは platepal_common::UploadSession が持ち、
//! ここでは非同期処理を順番に実行して遷移を適用する。

use crate::ai_provider::MenuInterpreter;
use crate::encoder::{display_name, encode_file};
use crate::error::Result;
use platepal_common::{DishRecord, Phase, UploadSession};
use std::path::Path;

pub struct MenuSession<M> {
    state: UploadSession,
    interpreter: M,
}

impl<M: MenuInterpreter> MenuSession<M> {
    pub fn new(interpreter: M) -> Self {
        Self {
            state: UploadSession::new(),
            interpreter,
        }
    }

    pub fn state(&self) -> &UploadSession {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn items(&self) -> &[DishRecord] {
        self.state.items()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// ファイルを受け取り、Results か Error まで進める
    ///
    /// エンコード・解析の失敗は Error フェーズとして記録し、ここではエラーにしない。
    /// Home 以外から呼んだ場合のみ `InvalidTransition` を返す。
    pub async fn submit(&mut self, path: &Path) -> Result<Phase> {
        let cycle = self.state.begin(display_name(path))?;
        log::info!("[session] processing {}", path.display());

        let outcome = match encode_file(path).await {
            Ok(image) => self.interpreter.interpret(&image).await.map_err(|e| {
                log::warn!("[session] interpretation failed: {}", e.cause());
                e.to_string()
            }),
            Err(e) => {
                log::warn!("[session] encode failed: {}", e);
                Err(e.to_string())
            }
        };

        match outcome {
            Ok(menu) => {
                log::info!("[session] {} dishes", menu.len());
                self.state.complete(cycle, menu);
            }
            Err(message) => {
                self.state.fail(cycle, Some(message));
            }
        }

        Ok(self.state.phase())
    }

    /// Results / Error → Home（Home では何もしない）
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
