//! Root page component.

use super::{
    AbundanceTable, Acknowledgements, CompositionBars, Conclusions, FieldParameters, Glossary,
    IbeTable, Location, Materials, Objective, Observations, Overlays, PageHeader, Procedure,
};
use diebra_core::abundance::AbundanceTable as TaxonTable;
use diebra_core::config::AssetUrls;
use diebra_core::fixtures::{FIELD_PARAMETERS, GLOSSARY, IBE_LOOKUP, SUBSTRATE, TAXON_GROUPS};
use diebra_core::{Intent, PageView};
use leptos::html::Div;
use leptos::prelude::*;

/// The whole monitoring page.
///
/// Reads `state` and reports user actions through `on_intent`; it never
/// changes state itself. Each widget subscribes to its own memoized slice,
/// so a counter tick only touches the score bar.
#[component]
pub fn MonitoringPage(
    /// Snapshot of the interaction state
    #[prop(into)]
    state: Signal<PageView>,
    /// Receives every user action
    on_intent: Callback<Intent>,
    /// Map, photos and external links
    assets: AssetUrls,
    /// Bound to the composition container for visibility observation
    #[prop(optional)]
    composition_ref: Option<NodeRef<Div>>,
) -> impl IntoView {
    let overlay = Memo::new(move |_| state.with(|s| s.overlay));
    let glossary_open = Memo::new(move |_| state.with(|s| s.glossary_open));
    let expanded = Memo::new(move |_| state.with(|s| s.expanded_groups.clone()));
    let revealed = Memo::new(move |_| state.with(|s| s.bars_revealed));
    let score = Memo::new(move |_| state.with(|s| s.score));

    let composition_ref = composition_ref.unwrap_or_else(NodeRef::new);
    let table = TaxonTable::new(TAXON_GROUPS);

    view! {
        <main class="page">
            <PageHeader />
            <Objective />
            <Location map_embed=assets.map_embed.clone() />
            <Procedure lab_photo=assets.lab_photo.clone() />
            <Materials />

            <section class="section" id="risultati">
                <h2 class="section-title">"Risultati"</h2>

                <h3 class="subsection">"Osservazioni Generali"</h3>
                <Observations />

                <h3 class="subsection">"Parametri di Campo"</h3>
                <FieldParameters cards=FIELD_PARAMETERS on_intent=on_intent />

                <h3 class="subsection">"Composizione del Fondale"</h3>
                <CompositionBars shares=SUBSTRATE revealed=revealed node_ref=composition_ref />

                <h3 class="subsection">"Abbondanza Macroinvertebrati"</h3>
                <AbundanceTable table=table expanded=expanded on_intent=on_intent />
                <div class="callout">
                    <p>
                        "Come possiamo notare l'ordine dei macroinvertebrati nettamente più presenti nel torrente è quello degli efemerotteri"
                    </p>
                    <button
                        type="button"
                        class="btn"
                        aria-haspopup="dialog"
                        on:click=move |_| on_intent.run(Intent::OpenEfemerotteri)
                    >
                        "Scopri di più sugli efemerotteri"
                    </button>
                </div>

                <h3 class="subsection">"Tabella per il calcolo dell'IBE"</h3>
                <IbeTable rows=IBE_LOOKUP />
            </section>

            <Conclusions on_intent=on_intent />
            <Glossary entries=GLOSSARY open=glossary_open on_intent=on_intent />
            <Acknowledgements on_intent=on_intent />
        </main>
        <Overlays overlay=overlay score=score assets=assets on_intent=on_intent />
    }
}
