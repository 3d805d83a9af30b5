//! # diebra-page
//!
//! Leptos components for the Diebra stream monitoring page, plus a static
//! HTML renderer.
//!
//! The same component tree serves two hosts:
//!
//! - **Static export** (`ssr`, default) - [`render_page`] turns a
//!   [`PageView`] snapshot into a complete HTML document; the
//!   `diebra-render` binary writes it to disk.
//! - **Browser** (`csr`) - the `diebra-web` crate mounts
//!   [`components::MonitoringPage`] and feeds it a live signal.
//!
//! ## Quick Start
//!
//! ```rust
//! use diebra_core::{PageConfig, PageView};
//! use diebra_page::render_page;
//!
//! let html = render_page(&PageConfig::default(), &PageView::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Monitoraggio torrente Diebra"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`export`] - writes the rendered page and the campaign data to disk

pub mod components;
pub mod styles;

#[cfg(feature = "ssr")]
pub mod export;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use diebra_core::{Intent, PageConfig, PageView};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete page for one interaction state.
///
/// Dialogs, disclosures and bar widths are rendered exactly as `state`
/// describes; the output carries no script, so clicks do nothing.
///
/// # Example
///
/// ```rust
/// use diebra_core::{Overlay, PageConfig, PageView, Score};
/// use diebra_page::render_page;
///
/// let state = PageView {
///     overlay: Overlay::Results,
///     score: Score::from_tenths(85),
///     ..PageView::default()
/// };
/// let html = render_page(&PageConfig::default(), &state);
/// assert!(html.contains("Risultato della Rilevazione"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &PageConfig, state: &PageView) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! {
            <PageDocument
                assets=config.assets.clone()
                state=Signal::stored(state.clone())
                on_intent=Callback::new(|_: Intent| {})
            />
        };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use diebra_core::config::AssetUrls;
    use diebra_core::fixtures::assets;
    use diebra_core::{MultiOpen, Overlay, Score};

    fn render(state: &PageView) -> String {
        render_page(&PageConfig::default(), state)
    }

    #[test]
    fn renders_closed_page() {
        let html = render(&PageView::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Monitoraggio torrente Diebra"));
        assert!(html.contains("Liceo Scientifico Edoardo Amaldi"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn abundance_groups_follow_descending_totals() {
        let html = render(&PageView::default());

        let order = ["Efemerotteri", "Plecotteri", "Ditteri", "Tricotteri"];
        let positions: Vec<usize> = order
            .iter()
            .map(|name| html.find(name).unwrap_or_else(|| panic!("missing group {name}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        // Efemerotteri and Ditteri both hold three families
        assert_eq!(html.matches("3 famiglie/generi").count(), 2);
        assert!(html.contains("143"));
    }

    #[test]
    fn expanded_group_shows_children_without_summary() {
        let collapsed = render(&PageView::default());
        assert!(!collapsed.contains("Baetis"));

        let mut expanded_groups = MultiOpen::new();
        expanded_groups.toggle(0);
        let html = render(&PageView {
            expanded_groups,
            ..PageView::default()
        });

        assert!(html.contains("Baetis"));
        assert!(html.contains("Habeoleatoides"));
        assert!(html.contains("group-row expanded"));
        assert_eq!(html.matches("3 famiglie/generi").count(), 1);
    }

    #[test]
    fn composition_bars_start_at_baseline() {
        let html = render(&PageView::default());
        assert!(html.contains("style=\"width: 0%; transition-delay: 0ms;\""));
        assert!(html.contains("style=\"width: 0%; transition-delay: 400ms;\""));
        assert!(!html.contains("width: 50%"));

        let revealed = render(&PageView {
            bars_revealed: true,
            ..PageView::default()
        });
        assert!(revealed.contains("style=\"width: 50%; transition-delay: 0ms;\""));
        assert!(revealed.contains("style=\"width: 5%; transition-delay: 400ms;\""));
    }

    #[test]
    fn glossary_expands_only_the_open_entry() {
        let html = render(&PageView {
            glossary_open: Some(1),
            ..PageView::default()
        });

        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert!(html.contains("grid-template-rows: 1fr"));
        assert_eq!(html.matches("grid-template-rows: 0fr").count(), 2);
        assert!(html.contains("Immagine di Macroinvertebrati"));
    }

    #[test]
    fn results_dialog_shows_score() {
        let html = render(&PageView {
            overlay: Overlay::Results,
            score: Score::from_tenths(85),
            ..PageView::default()
        });

        assert_eq!(html.matches("role=\"dialog\"").count(), 1);
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("aria-labelledby=\"results-modal-title\""));
        assert!(html.contains("style=\"width: 85%;\""));
        assert!(html.contains("8.5"));
        assert!(html.contains("style=\"opacity: 1;\""));
        assert!(html.contains("Stato: BUONO"));
        assert!(html.contains("Pessimo"));
    }

    #[test]
    fn score_label_hidden_at_low_values() {
        let html = render(&PageView {
            overlay: Overlay::Results,
            score: Score::from_tenths(10),
            ..PageView::default()
        });
        assert!(html.contains("style=\"width: 10%;\""));
        assert!(html.contains("style=\"opacity: 0;\""));
    }

    #[test]
    fn param_dialog_describes_selected_card() {
        let html = render(&PageView {
            overlay: Overlay::ParamDetail(3),
            ..PageView::default()
        });

        assert!(html.contains("param-modal-title"));
        assert!(html.contains("6,5 – 8,5"));
        assert!(html.contains("Misura se l’acqua è acida o basica."));
        assert!(!html.contains("Risultato della Rilevazione"));
    }

    #[test]
    fn arpa_and_efemerotteri_dialogs_use_configured_assets() {
        let config = PageConfig {
            assets: AssetUrls {
                arpa_site: "https://example.org/arpa".into(),
                efemerottero_image: "https://example.org/mayfly.jpg".into(),
                ..AssetUrls::default()
            },
            ..PageConfig::default()
        };

        let arpa = render_page(
            &config,
            &PageView {
                overlay: Overlay::Arpa,
                ..PageView::default()
            },
        );
        assert!(arpa.contains("href=\"https://example.org/arpa\""));
        assert!(arpa.contains("Agenzia Regionale per la Protezione dell'Ambiente"));

        let mayfly = render_page(
            &config,
            &PageView {
                overlay: Overlay::Efemerotteri,
                ..PageView::default()
            },
        );
        assert!(mayfly.contains("src=\"https://example.org/mayfly.jpg\""));
        assert_eq!(mayfly.matches("role=\"dialog\"").count(), 1);
    }

    #[test]
    fn quality_table_highlights_measured_class() {
        let html = render(&PageView::default());

        assert_eq!(html.matches("IL NOSTRO TORRENTE").count(), 1);
        let badge = html.find("IL NOSTRO TORRENTE").unwrap_or_default();
        let class_two = html.find("Classe II").unwrap_or_default();
        assert!(class_two < badge);
        assert!(html.contains("RISULTATO FINALE"));
    }

    #[test]
    fn static_sections_present() {
        let html = render(&PageView::default());

        for text in [
            "Obbiettivo",
            "Posizione del Rilevamento",
            "Procedimento",
            "Materiali Utilizzati",
            "Guanti impermeabili",
            "Regime idrologico: Magra",
            "Conclusioni",
            "Vedi il risultato IBE",
            "Glossario",
            "Ringraziamenti",
            "Arpa Lombardia",
        ] {
            assert!(html.contains(text), "missing {text}");
        }
        assert!(html.contains("google.com/maps/embed"));
        assert!(html.contains("class=\"term-tip\""));
    }

    #[test]
    fn map_iframe_carries_embed_and_title() {
        let html = render(&PageView::default());
        let start = html.find("<iframe").expect("map iframe rendered");
        let end = start + html[start..].find('>').expect("iframe tag closed");
        let tag = &html[start..end];

        assert!(tag.contains(&format!("src=\"{}\"", assets::MAP_EMBED)));
        assert!(tag.contains("title=\"Mappa della posizione del torrente Diebra\""));
        assert!(tag.contains("referrerpolicy=\"no-referrer-when-downgrade\""));
        assert!(tag.contains("allowfullscreen"));
    }
}
