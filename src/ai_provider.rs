//! AIプロバイダの抽象
//!
//! セッションと料理カードはこのトレイト越しにAIを呼ぶ。
//! 本番は `GeminiClient`、テストでは差し替え実装を使う。

use platepal_common::{EncodedImage, MenuResult, Result};
use std::future::Future;
use std::sync::Arc;

/// メニュー解析
pub trait MenuInterpreter: Send + Sync {
    /// 失敗はすべて `Error::InterpretationFailed` に正規化して返す
    fn interpret(&self, image: &EncodedImage) -> impl Future<Output = Result<MenuResult>> + Send;
}

/// 料理イメージ生成
pub trait DishIllustrator: Send + Sync + 'static {
    /// 画像参照（Data URL）か、失敗時はプレースホルダーURLを返す。エラーは返さない。
    fn illustrate(&self, dish_name: &str) -> impl Future<Output = String> + Send;
}

impl<T: MenuInterpreter> MenuInterpreter for Arc<T> {
    fn interpret(&self, image: &EncodedImage) -> impl Future<Output = Result<MenuResult>> + Send {
        (**self).interpret(image)
    }
}
