//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🍽 PlatePal"</h1>
            <p class="text-muted">"Snap a menu. Understand every dish."</p>
        </header>
    }
}
