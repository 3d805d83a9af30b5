//! Dialog shell shared by every overlay.

use super::{Icon, ICON_CLOSE};
use leptos::prelude::*;

/// Modal dialog over a dimmed backdrop.
///
/// Nothing is rendered while `open` is false. Clicking the backdrop or the
/// close button fires `on_close`; clicks inside the panel stop propagating
/// so they never reach the backdrop.
#[component]
pub fn Modal(
    /// Whether the dialog is shown
    #[prop(into)]
    open: Signal<bool>,
    /// DOM id of the backdrop; the heading gets `{id}-title`
    id: &'static str,
    /// Heading content
    #[prop(into)]
    title: ViewFn,
    /// Fired by the backdrop and the close button
    on_close: Callback<()>,
    /// Dialog body
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = format!("{id}-title");

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-backdrop"
                id=id
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id.clone()
                on:click=move |_| on_close.run(())
            >
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 id=title_id.clone()>{title.run()}</h2>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Chiudi modale"
                            on:click=move |_| on_close.run(())
                        >
                            <Icon path=ICON_CLOSE />
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
