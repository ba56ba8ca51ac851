//! エラー画面

use leptos::prelude::*;

#[component]
pub fn ErrorPanel<F>(message: String, on_reset: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="error-panel">
            <div class="error-icon">"⚠️"</div>
            <h2>"Oops! Something went wrong."</h2>
            <p>{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_reset()>
                "Try Again"
            </button>
        </div>
    }
}
