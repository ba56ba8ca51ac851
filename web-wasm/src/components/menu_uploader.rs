//! メニュー写真アップロード
//!
//! ファイルを選んだ時点で解析を開始する。進捗バーの段階切替はタイマーによる演出で、
//! 解析の完了とは連動しない。

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::file::File;
use gloo::timers::future::TimeoutFuture;
use platepal_common::progress::STAGE_SCHEDULE;
use platepal_common::UploadStage;
use crate::components::progress_bar::ProgressBar;
use crate::encoder::ACCEPT;

#[component]
pub fn MenuUploader<F>(
    on_process: F,
    #[prop(into)] is_processing: Signal<bool>,
    #[prop(into)] file_name: Signal<Option<String>>,
) -> impl IntoView
where
    F: Fn(File) + Clone + Send + Sync + 'static,
{
    let (stage, set_stage) = signal(UploadStage::Idle);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_: web_sys::Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        on_process(File::from(file));
        run_stage_timers(set_stage, is_processing);
    };

    view! {
        <div class=move || if is_processing.get() { "upload-area processing" } else { "upload-area" }>
            <Show
                when=move || is_processing.get()
                fallback=move || {
                    let on_change = on_change.clone();
                    view! {
                        <label class="upload-label">
                            <div class="upload-icon">"📷"</div>
                            <p>"Snap or upload a photo of the menu"</p>
                            <p class="text-muted">"Images or PDF"</p>
                            <input
                                node_ref=input_ref
                                type="file"
                                accept=ACCEPT
                                class="hidden-input"
                                on:change=on_change
                            />
                        </label>
                    }
                }
            >
                <p class="file-name">{move || file_name.get().unwrap_or_default()}</p>
                <ProgressBar stage=stage />
            </Show>
        </div>
    }
}

/// 表示段階を予定どおりに進める（処理中でなくなったら止める）
fn run_stage_timers(set_stage: WriteSignal<UploadStage>, is_processing: Signal<bool>) {
    for (offset, stage) in STAGE_SCHEDULE {
        spawn_local(async move {
            TimeoutFuture::new(offset.as_millis() as u32).await;
            if is_processing.try_get_untracked() == Some(true) {
                let _ = set_stage.try_set(stage);
            }
        });
    }
}
