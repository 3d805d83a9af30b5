//! Animated IBE score bar shown in the results dialog.

use diebra_core::Score;
use leptos::prelude::*;

/// The numeric label fades in once the bar is wide enough to hold it.
const LABEL_VISIBLE_ABOVE: Score = Score::from_tenths(10);

/// Gradient bar on a 0-10 scale with the verdict underneath.
#[component]
pub fn ScoreBar(
    /// Current counter value
    #[prop(into)]
    score: Signal<Score>,
) -> impl IntoView {
    view! {
        <div
            class="score-track"
            role="meter"
            aria-label="Punteggio IBE"
            aria-valuemin="0"
            aria-valuemax="10"
            aria-valuenow=move || score.get().to_string()
        >
            <div class="score-fill" style=move || format!("width: {}%", score.get().fill_percent())>
                <span
                    class="score-label"
                    style=move || {
                        format!("opacity: {}", if score.get() > LABEL_VISIBLE_ABOVE { 1 } else { 0 })
                    }
                >
                    {move || score.get().to_string()}
                </span>
            </div>
        </div>
        <div class="score-scale">
            <span>"Pessimo"</span>
            <span>"Sufficiente"</span>
            <span>"Eccellente"</span>
        </div>
        <div class="status-box">
            <p class="status">"Stato: BUONO"</p>
            <p>"L'ecosistema acquatico è in buone condizioni e ben equilibrato."</p>
        </div>
    }
}
