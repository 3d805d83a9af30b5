//! Glossary accordion: at most one entry expanded.

use super::{Icon, ICON_CHEVRON_DOWN};
use diebra_core::fixtures::GlossaryEntry;
use diebra_core::Intent;
use leptos::prelude::*;

/// Glossary section.
///
/// Every panel stays in the DOM; a collapsed one has zero grid rows so the
/// height animates on toggle.
#[component]
pub fn Glossary(
    entries: &'static [GlossaryEntry],
    /// Expanded entry
    #[prop(into)]
    open: Signal<Option<usize>>,
    on_intent: Callback<Intent>,
) -> impl IntoView {
    view! {
        <section class="section" id="glossario">
            <h2 class="section-title">"Glossario"</h2>
            <div class="glossary">
                {entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let is_open = move || open.get() == Some(index);
                        let panel_id = format!("glossary-panel-{index}");
                        view! {
                            <div class="glossary-item">
                                <button
                                    type="button"
                                    class="glossary-toggle"
                                    aria-expanded=move || is_open().to_string()
                                    aria-controls=panel_id.clone()
                                    on:click=move |_| on_intent.run(Intent::ToggleGlossary(index))
                                >
                                    <h3>{entry.term}</h3>
                                    <span class=move || chevron_class(is_open())>
                                        <Icon path=ICON_CHEVRON_DOWN stroke_width="2.5" />
                                    </span>
                                </button>
                                <div
                                    class="glossary-panel"
                                    id=panel_id
                                    aria-hidden=move || (!is_open()).to_string()
                                    style=move || {
                                        format!(
                                            "grid-template-rows: {}",
                                            if is_open() { "1fr" } else { "0fr" },
                                        )
                                    }
                                >
                                    <div>
                                        <div class="glossary-body">
                                            <p>{entry.definition}</p>
                                            {entry
                                                .image
                                                .map(|src| {
                                                    view! {
                                                        <img
                                                            src=src
                                                            alt=format!("Immagine di {}", entry.term)
                                                            loading="lazy"
                                                        />
                                                    }
                                                })}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Chevron classes; the stylesheet rotates the open one.
pub(crate) fn chevron_class(open: bool) -> &'static str {
    if open {
        "chevron open"
    } else {
        "chevron"
    }
}
