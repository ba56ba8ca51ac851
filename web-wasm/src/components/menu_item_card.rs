//! 料理カード
//!
//! マウント時に料理イメージを1回だけ取得する。カード破棄後に届いた結果は捨てる。

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use crate::api::gemini::{illustrate_dish, GeminiConfig};
use platepal_common::{DishCardView, DishRecord, Illustration, SpiceMeter};

#[component]
pub fn MenuItemCard(dish: DishRecord, config: GeminiConfig) -> impl IntoView {
    let card = DishCardView::from(&dish);
    let illustration = RwSignal::new(Illustration::Loading);
    let (expanded, set_expanded) = signal(false);

    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = Arc::clone(&mounted);
        move || mounted.store(false, Ordering::Release)
    });

    let name = card.title.clone();
    spawn_local(async move {
        let url = illustrate_dish(&config, &name).await;
        if mounted.load(Ordering::Acquire) {
            illustration.set(Illustration::Ready(url));
        }
    });

    let alt = card.title.clone();
    let spice = card.spice.map(|meter| spice_meter(meter, card.spice_label));
    let summary = card.clone();

    view! {
        <article class="dish-card">
            <div class="dish-image">
                {move || match illustration.get() {
                    Illustration::Loading => view! {
                        <div class="image-loading">"Generating image..."</div>
                    }
                    .into_any(),
                    Illustration::Ready(url) => view! { <img src=url alt=alt.clone() /> }.into_any(),
                }}
            </div>
            <div class="dish-body">
                <h3>{summary.title}</h3>
                <p class="original-name">{summary.original_name}</p>
                {spice}
                <button
                    class="btn btn-link"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Hide details" } else { "Show details" }}
                </button>
                <Show when=move || expanded.get()>
                    {details(card.clone())}
                </Show>
            </div>
        </article>
    }
}

/// 辛さ表示（4段階）
fn spice_meter(meter: SpiceMeter, label: &'static str) -> impl IntoView {
    view! {
        <div class="spice" title=label>
            {meter
                .pips()
                .map(|lit| view! { <span class=if lit { "pip lit" } else { "pip" }>"🌶"</span> })
                .collect_view()}
            <span class="spice-label">{label}</span>
        </div>
    }
}

fn details(card: DishCardView) -> impl IntoView {
    let dietary = (!card.dietary_tags.is_empty()).then(|| {
        view! {
            <div class="tags dietary">
                {card
                    .dietary_tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag">{format!("✓ {}", tag)}</span> })
                    .collect_view()}
            </div>
        }
    });

    let allergens = (!card.allergen_tags.is_empty()).then(|| {
        view! {
            <div class="tags allergens">
                <strong>"Potential allergens"</strong>
                {card
                    .allergen_tags
                    .into_iter()
                    .map(|tag| view! { <span class="tag warning">{tag}</span> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="dish-details">
            <p>{card.description}</p>
            <div class="pairing">
                <strong>"🍷 Pairs Well With"</strong>
                <p>{card.pairing}</p>
            </div>
            {dietary}
            {allergens}
        </div>
    }
}
