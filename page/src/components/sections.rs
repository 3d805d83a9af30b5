//! Static prose sections of the page.
//!
//! Only [`Conclusions`] and [`Acknowledgements`] are interactive: each
//! carries a button that opens a dialog.

use super::{
    Icon, QualityTable, ICON_BEAKER, ICON_BRUSH, ICON_CALENDAR, ICON_GLOVE, ICON_NET, ICON_PROBE,
    ICON_SPARKLES, ICON_TREND_DOWN,
};
use diebra_core::fixtures::{
    Tooltip, MATERIALS, MEASURED_IBE, OBSERVATIONS, QUALITY_CLASSES, TOOLTIP_DIATOMEE, TOOLTIP_IBE,
    TOOLTIP_MACROINVERTEBRATI, TOOLTIP_TAXONOMIA,
};
use diebra_core::Intent;
use leptos::prelude::*;

/// Icons paired with [`MATERIALS`] by position.
const MATERIAL_ICONS: [&str; 5] = [ICON_PROBE, ICON_NET, ICON_BRUSH, ICON_GLOVE, ICON_BEAKER];

/// Icons paired with [`OBSERVATIONS`] by position.
const OBSERVATION_ICONS: [&str; 3] = [ICON_SPARKLES, ICON_CALENDAR, ICON_TREND_DOWN];

/// Term with a hover tooltip. Pure CSS, no state.
#[component]
pub fn Term(tip: Tooltip) -> impl IntoView {
    view! {
        <span class="term" tabindex="0">
            <span class="term-word">{tip.term}</span>
            <span class="term-tip" role="tooltip">{tip.text}</span>
        </span>
    }
}

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Monitoraggio torrente Diebra"</h1>
            <p>"Ricerca della classe 2^T - Liceo Scientifico Edoardo Amaldi"</p>
        </header>
    }
}

#[component]
pub fn Objective() -> impl IntoView {
    view! {
        <section class="section" id="obbiettivo">
            <h2 class="section-title">"Obbiettivo"</h2>
            <p>
                "L'obbiettivo di questa attività era monitorare lo stato ecologico del torrente Diebra a Nese. Per farlo la classe si è recata al torrente e ha calcolato il suo "
                <Term tip=TOOLTIP_IBE />
                ": un metodo scientifico per misurare la salute dei fiumi. Si basa sull'analisi della presenza e del tipo di macroinvertebrati (piccoli animali senza scheletro come insetti, molluschi, crostacei) che vivono sul fondale dei corsi d'acqua. La presenza di determinate specie indica un'acqua più o meno pulita."
            </p>
        </section>
    }
}

/// Sampling point on an embedded map.
#[component]
pub fn Location(map_embed: String) -> impl IntoView {
    view! {
        <section class="section" id="posizione">
            <h2 class="section-title">"Posizione del Rilevamento"</h2>
            <div class="frame">
                <iframe
                    src=map_embed
                    allowfullscreen=true
                    referrerpolicy="no-referrer-when-downgrade"
                    title="Mappa della posizione del torrente Diebra"
                ></iframe>
            </div>
        </section>
    }
}

#[component]
pub fn Procedure(lab_photo: String) -> impl IntoView {
    view! {
        <section class="section" id="procedimento">
            <h2 class="section-title">"Procedimento"</h2>
            <p>
                "Per osservare i parametri chimici del torrente la classe ha utilizzato una sonda multiparametrica che ha immerso nel torrente. I ragazzi si sono divisi in 5 gruppi, ognuno dei quali ha dovuto analizzare un tratto della Diebra."
            </p>
            <p>
                "Per rilevare la presenza di "
                <Term tip=TOOLTIP_MACROINVERTEBRATI />
                " nel torrente, ogni gruppo ha raschiato cinque volte per gruppo il torrente, con uno strumento specifico chiamato surber che ha permesso di esaminare un’area di torrente pari a 0,1 m²."
            </p>
            <p>
                "Dopo hanno smosso i sassi per far scivolare i microrganismi all’interno di un cilindro posizionato sulla base del retino. Successivamente è stato utilizzato uno spazzolino per prelevare le "
                <Term tip=TOOLTIP_DIATOMEE />
                " che poi sono state osservate al microscopio."
            </p>
            <p>
                "In laboratorio hanno osservato i macroinvertebrati raccolti e hanno identificato la loro "
                <Term tip=TOOLTIP_TAXONOMIA />
                " utilizzando delle chiavi dicotomiche, schede per il riconoscimento degli organismi."
            </p>
            <div class="frame">
                <img src=lab_photo alt="Chiavi dicotomiche utilizzate in laboratorio" loading="lazy" />
            </div>
        </section>
    }
}

#[component]
pub fn Materials() -> impl IntoView {
    view! {
        <section class="section" id="materiali">
            <h2 class="section-title">"Materiali Utilizzati"</h2>
            <div class="materials">
                {MATERIALS
                    .iter()
                    .zip(MATERIAL_ICONS)
                    .map(|(name, icon)| {
                        view! {
                            <div class="material">
                                <Icon path=icon />
                                <span>{*name}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// General conditions noted on site.
#[component]
pub fn Observations() -> impl IntoView {
    view! {
        <div class="observations">
            {OBSERVATIONS
                .iter()
                .zip(OBSERVATION_ICONS)
                .map(|(text, icon)| {
                    view! {
                        <div class="observation">
                            <Icon path=icon />
                            <p>{*text}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Verdict, quality class table and the results dialog trigger.
#[component]
pub fn Conclusions(on_intent: Callback<Intent>) -> impl IntoView {
    view! {
        <section class="section" id="conclusioni">
            <h2 class="section-title">"Conclusioni"</h2>
            <p>
                "Dopo aver esaminato la tabella a doppia entrata la classe ha stabilito lo stato del ruscello Diebra. Visto che il range dei dati è tra 8 e 9 lo stato del torrente è buono."
            </p>
            <QualityTable classes=QUALITY_CLASSES measured=MEASURED_IBE />
            <button
                type="button"
                class="btn"
                aria-haspopup="dialog"
                on:click=move |_| on_intent.run(Intent::OpenResults)
            >
                "Vedi il risultato IBE"
            </button>
        </section>
    }
}

#[component]
pub fn Acknowledgements(on_intent: Callback<Intent>) -> impl IntoView {
    view! {
        <section class="thanks" id="ringraziamenti">
            <h3>"Ringraziamenti"</h3>
            <p>
                "Ringraziamo l'esperta che ci ha aiutato in questa attività: Silvia Cerea, dell'"
                <b>"Agenzia Regionale"</b>
                " "
                <button
                    type="button"
                    class="link-btn"
                    aria-haspopup="dialog"
                    on:click=move |_| on_intent.run(Intent::OpenArpa)
                >
                    "Arpa Lombardia"
                </button>
                "."
            </p>
        </section>
    }
}
