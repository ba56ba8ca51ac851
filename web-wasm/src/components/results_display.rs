//! 解析結果（料理カード一覧）

use leptos::prelude::*;
use crate::api::gemini::GeminiConfig;
use crate::components::menu_item_card::MenuItemCard;
use platepal_common::{dish_count_heading, DishRecord};

#[component]
pub fn ResultsDisplay<F>(items: Vec<DishRecord>, config: GeminiConfig, on_reset: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let count = items.len();

    view! {
        <section class="results">
            <div class="results-header">
                <h2>{dish_count_heading(count)}</h2>
                <button class="btn" on:click=move |_| on_reset()>
                    "Scan another menu"
                </button>
            </div>
            {if items.is_empty() {
                view! { <p class="text-muted">"No dishes were found on this menu."</p> }.into_any()
            } else {
                view! {
                    <div class="card-grid">
                        {items
                            .into_iter()
                            .map(|dish| view! { <MenuItemCard dish=dish config=config.clone() /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
