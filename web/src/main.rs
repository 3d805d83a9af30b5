// Diebra stream monitoring page - browser entry point (Leptos 0.8, CSR)

mod scheduler;
mod viewport;

use diebra_core::{Intent, PageConfig, PageSession};
use diebra_page::components::MonitoringPage;
use diebra_page::styles::PAGE_CSS;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use scheduler::BrowserScheduler;
use viewport::BrowserViewport;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let config = PageConfig::default();
    let session = match PageSession::new(&config, BrowserScheduler) {
        Ok(session) => session,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("invalid page config: {err}")));
            return view! { <p class="page">"Configurazione della pagina non valida."</p> }.into_any();
        }
    };

    let state = RwSignal::new(session.snapshot());
    // Timer and observer callbacks write straight into the signal; they must
    // not touch `session`, which may be borrowed by a dispatch at that moment.
    session.on_score(move |score| state.update(|view| view.score = score));
    session.on_reveal(move || state.update(|view| view.bars_revealed = true));
    let session = StoredValue::new_local(session);

    let on_intent = Callback::new(move |intent: Intent| {
        if let Some(Err(err)) = session.try_update_value(|session| session.dispatch(intent)) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }
        session.with_value(|session| state.set(session.snapshot()));
    });

    // The page lives as long as the window, so the listener is never removed.
    let _ = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && state.with_untracked(|view| view.overlay.is_open()) {
            on_intent.run(Intent::CloseOverlay);
        }
    });

    let composition_ref = NodeRef::<Div>::new();
    Effect::new(move |_| {
        if let Some(container) = composition_ref.get() {
            let container: web_sys::Element = container.into();
            session.with_value(|session| session.attach_reveal(&BrowserViewport, &container));
        }
    });

    view! {
        <style>{PAGE_CSS}</style>
        <MonitoringPage
            state=state
            on_intent=on_intent
            assets=config.assets.clone()
            composition_ref=composition_ref
        />
    }
    .into_any()
}
