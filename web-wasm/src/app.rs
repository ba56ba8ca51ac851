//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::gemini::{console_warn, interpret_menu, GeminiConfig, API_KEY_BUILD_ENV};
use crate::components::{
    error_panel::ErrorPanel,
    header::Header,
    menu_uploader::MenuUploader,
    results_display::ResultsDisplay,
};
use crate::encoder::encode_file;
use platepal_common::{Phase, UploadSession};

/// 表示する画面（Home と Processing は同じアップロード画面）
#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Upload,
    Results,
    Error,
}

impl From<Phase> for Screen {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Home | Phase::Processing => Screen::Upload,
            Phase::Results => Screen::Results,
            Phase::Error => Screen::Error,
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <Header />
            {match GeminiConfig::from_build_env() {
                Some(config) => view! { <Scanner config=config /> }.into_any(),
                None => view! { <MissingKey /> }.into_any(),
            }}
        </div>
    }
}

/// APIキー未設定時の画面
#[component]
fn MissingKey() -> impl IntoView {
    view! {
        <div class="error-panel">
            <h2>"Configuration error"</h2>
            <p>"No Gemini API key was provided when this app was built."</p>
            <p class="text-muted">
                {format!("Set {} and rebuild to enable menu scanning.", API_KEY_BUILD_ENV)}
            </p>
        </div>
    }
}

/// アップロード → 解析 → 結果/エラー
#[component]
fn Scanner(config: GeminiConfig) -> impl IntoView {
    let session = RwSignal::new(UploadSession::new());
    let screen = Memo::new(move |_| Screen::from(session.with(|s| s.phase())));
    let is_processing = Signal::derive(move || session.with(|s| s.phase() == Phase::Processing));
    let file_name = Signal::derive(move || session.with(|s| s.file_name().map(str::to_string)));

    // ファイル選択ハンドラ（選択直後に解析開始）
    let on_process = {
        let config = config.clone();
        move |file: gloo::file::File| {
            let begun = session.try_update(|s| s.begin(file.name()));
            let cycle = match begun {
                Some(Ok(cycle)) => cycle,
                Some(Err(e)) => {
                    console_warn(&format!("[session] {}", e));
                    return;
                }
                None => return,
            };

            let config = config.clone();
            spawn_local(async move {
                let outcome = match encode_file(&file).await {
                    Ok(image) => interpret_menu(&config, &image).await.map_err(|e| e.to_string()),
                    Err(e) => {
                        console_warn(&format!("[encode] {}", e));
                        Err(e.to_string())
                    }
                };

                // リセット済みのサイクルなら UploadSession 側で無視される
                session.try_update(|s| match outcome {
                    Ok(menu) => s.complete(cycle, menu),
                    Err(message) => s.fail(cycle, Some(message)),
                });
            });
        }
    };

    let on_reset = move || session.update(|s| s.reset());

    move || match screen.get() {
        Screen::Upload => view! {
            <MenuUploader
                on_process=on_process.clone()
                is_processing=is_processing
                file_name=file_name
            />
        }
        .into_any(),
        Screen::Results => view! {
            <ResultsDisplay
                items=session.with_untracked(|s| s.items().to_vec())
                config=config.clone()
                on_reset=on_reset
            />
        }
        .into_any(),
        Screen::Error => view! {
            <ErrorPanel
                message=session.with_untracked(|s| s.error_message().unwrap_or_default().to_string())
                on_reset=on_reset
            />
        }
        .into_any(),
    }
}
