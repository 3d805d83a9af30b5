//! Root document component - the complete HTML page.

use super::MonitoringPage;
use crate::styles::PAGE_CSS;
use diebra_core::config::AssetUrls;
use diebra_core::{Intent, PageView};
use leptos::prelude::*;

/// The complete HTML document for the static export.
#[component]
pub fn PageDocument(
    assets: AssetUrls,
    #[prop(into)] state: Signal<PageView>,
    on_intent: Callback<Intent>,
) -> impl IntoView {
    view! {
        <html lang="it">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta
                    name="description"
                    content="Monitoraggio dello stato ecologico del torrente Diebra a Nese con l'indice IBE"
                />
                <title>"Monitoraggio torrente Diebra"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <MonitoringPage state=state on_intent=on_intent assets=assets />
            </body>
        </html>
    }
}
