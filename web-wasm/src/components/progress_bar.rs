//! プログレスバーコンポーネント（表示のみ）

use leptos::prelude::*;
use platepal_common::UploadStage;

#[component]
pub fn ProgressBar(stage: ReadSignal<UploadStage>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", stage.get().percent())
                />
            </div>
            <p class="progress-text">
                {move || format!("{}... {}%", stage.get().label(), stage.get().percent())}
            </p>
        </div>
    }
}
