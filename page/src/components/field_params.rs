//! Field parameter cards.

use diebra_core::fixtures::MetricCard;
use diebra_core::Intent;
use leptos::prelude::*;

/// Grid of measured values. Each card opens its detail dialog.
#[component]
pub fn FieldParameters(cards: &'static [MetricCard], on_intent: Callback<Intent>) -> impl IntoView {
    view! {
        <div class="params">
            {cards
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    view! {
                        <button
                            type="button"
                            class=if card.wide { "param-card wide" } else { "param-card" }
                            aria-haspopup="dialog"
                            on:click=move |_| on_intent.run(Intent::SelectParam(index))
                        >
                            <span class="param-title">{card.title}</span>
                            <span class="param-value">
                                {card.display_value}
                                {(!card.unit.is_empty())
                                    .then(|| view! { " " <span class="param-unit">{card.unit}</span> })}
                            </span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <p class="hint">"Clicca sui riquadri per scoprire il significato e i valori ideali"</p>
    }
}
