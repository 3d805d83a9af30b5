//! The four dialogs, driven by a single [`Overlay`] value.

use super::{Icon, Modal, ScoreBar, ICON_EXTERNAL_LINK};
use diebra_core::config::AssetUrls;
use diebra_core::{Intent, Overlay, Score};
use leptos::prelude::*;

/// All dialogs of the page. At most one is open because `overlay` holds a
/// single variant; switching variants swaps dialogs in one update.
#[component]
pub fn Overlays(
    #[prop(into)] overlay: Signal<Overlay>,
    #[prop(into)] score: Signal<Score>,
    assets: AssetUrls,
    on_intent: Callback<Intent>,
) -> impl IntoView {
    let close = Callback::new(move |()| on_intent.run(Intent::CloseOverlay));
    let is = move |wanted: Overlay| Signal::derive(move || overlay.get() == wanted);
    let param = move || overlay.get().selected_param();

    let AssetUrls {
        efemerottero_image,
        arpa_site,
        ..
    } = assets;

    view! {
        <Modal
            open=is(Overlay::Results)
            id="results-modal"
            title=|| "Risultato della Rilevazione"
            on_close=close
        >
            <div class="results">
                <h3>"Indice di Qualità dell'Acqua (IBE)"</h3>
                <p>"Il punteggio indica lo stato di salute del torrente su una scala da 0 a 10."</p>
                <ScoreBar score=score />
            </div>
        </Modal>

        <Modal
            open=Signal::derive(move || param().is_some())
            id="param-modal"
            title=move || move || param().map(|card| card.title)
            on_close=close
        >
            <div class="ideal">
                <p class="label">"Valore Ideale"</p>
                <p class="value">{move || param().map(|card| card.ideal_range)}</p>
            </div>
            <h4>"Significato"</h4>
            <p>{move || param().map(|card| card.description)}</p>
        </Modal>

        <Modal
            open=is(Overlay::Arpa)
            id="arpa-modal"
            title=move || {
                view! {
                    <a
                        href=arpa_site.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        title="Visita il sito ufficiale"
                    >
                        "Arpa Lombardia"
                        <Icon path=ICON_EXTERNAL_LINK stroke_width="2" />
                    </a>
                }
            }
            on_close=close
        >
            <p>
                "L'"
                <strong>"Agenzia Regionale per la Protezione dell'Ambiente (ARPA)"</strong>
                " è un ente tecnico che si occupa della prevenzione e della protezione dell'ambiente in Lombardia."
            </p>
            <p>
                "Il suo compito principale è monitorare costantemente la qualità di acqua, aria e suolo per garantire la salute degli ecosistemi e dei cittadini, oltre a fornire supporto tecnico-scientifico alle amministrazioni pubbliche."
            </p>
        </Modal>

        <Modal
            open=is(Overlay::Efemerotteri)
            id="efemerotteri-modal"
            title=|| "Gli Efemerotteri"
            on_close=close
        >
            <p>
                "Gli efemerotteri sono insetti acquatici con metamorfosi incompleta: le larve vivono in acqua dolce, mentre gli adulti hanno vita molto breve e servono solo alla riproduzione."
            </p>
            <img src=efemerottero_image.clone() alt="Immagine efemerottero" loading="lazy" />
        </Modal>
    }
}
