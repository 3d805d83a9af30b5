//! Streambed composition bars, revealed once when scrolled into view.

use diebra_core::fixtures::SubstrateShare;
use diebra_core::visibility::revealed_width;
use leptos::html::Div;
use leptos::prelude::*;

/// Horizontal bars, one per substrate class.
///
/// Widths sit at `0%` until `revealed` flips, then transition to the share,
/// each bar delayed 100 ms after the previous one. The container is bound
/// to `node_ref` so the browser host can observe it.
#[component]
pub fn CompositionBars(
    shares: &'static [SubstrateShare],
    #[prop(into)] revealed: Signal<bool>,
    node_ref: NodeRef<Div>,
) -> impl IntoView {
    view! {
        <div class="composition" id="composizione-fondale" node_ref=node_ref>
            {shares
                .iter()
                .enumerate()
                .map(|(position, share)| {
                    let style = move || {
                        format!(
                            "width: {}; transition-delay: {}ms",
                            revealed_width(share.percent, revealed.get()),
                            SubstrateShare::transition_delay_ms(position),
                        )
                    };
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{share.label}</span>
                            <div
                                class="bar-track"
                                role="progressbar"
                                aria-label=share.label
                                aria-valuemin="0"
                                aria-valuemax="100"
                                aria-valuenow=share.percent.to_string()
                            >
                                <div class="bar-fill" style=style>
                                    {format!("{}%", share.percent)}
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
