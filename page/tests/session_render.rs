//! Session snapshots rendered through the static renderer.

#![cfg(feature = "ssr")]

use diebra_core::testing::{ManualClock, ManualViewport};
use diebra_core::{Intent, PageConfig, PageSession};
use diebra_page::render_page;
use std::time::Duration;

fn session() -> (ManualClock, PageSession<ManualClock>) {
    let clock = ManualClock::new();
    let session = PageSession::new(&PageConfig::default(), clock.clone()).expect("default config");
    (clock, session)
}

#[test]
fn counter_progress_shows_in_rendered_bar() {
    let (clock, mut session) = session();
    let config = PageConfig::default();
    session.dispatch(Intent::OpenResults).expect("open results");

    clock.advance(Duration::from_millis(300));
    let opening = render_page(&config, &session.snapshot());
    assert!(opening.contains("style=\"width: 0%;\""));
    assert!(opening.contains("style=\"opacity: 0;\""));

    clock.advance(Duration::from_millis(400));
    let midway = render_page(&config, &session.snapshot());
    assert!(midway.contains("style=\"width: 20%;\""));
    assert!(midway.contains("style=\"opacity: 1;\""));

    clock.advance(Duration::from_secs(5));
    let done = render_page(&config, &session.snapshot());
    assert!(done.contains("style=\"width: 85%;\""));
}

#[test]
fn closing_results_removes_the_dialog() {
    let (_, mut session) = session();
    let config = PageConfig::default();

    session.dispatch(Intent::OpenResults).expect("open results");
    assert!(render_page(&config, &session.snapshot()).contains("results-modal-title"));

    session.dispatch(Intent::CloseOverlay).expect("close");
    assert!(!render_page(&config, &session.snapshot()).contains("role=\"dialog\""));
}

#[test]
fn reveal_switches_bar_widths() {
    let (_, session) = session();
    let viewport = ManualViewport::new();
    session.attach_reveal(&viewport, &"composition".to_string());
    let config = PageConfig::default();

    viewport.set_visible_fraction("composition", 0.15);
    assert!(render_page(&config, &session.snapshot()).contains("style=\"width: 0%; transition-delay: 0ms;\""));

    viewport.set_visible_fraction("composition", 0.2);
    let html = render_page(&config, &session.snapshot());
    assert!(html.contains("style=\"width: 50%; transition-delay: 0ms;\""));
    assert!(html.contains("style=\"width: 20%; transition-delay: 200ms;\""));
}

#[test]
fn toggles_render_through_display_indices() {
    let (_, mut session) = session();
    let config = PageConfig::default();

    // display index 2 is Ditteri (17), collected sixth
    session.dispatch(Intent::ToggleGroup(2)).expect("toggle");
    session.dispatch(Intent::ToggleGlossary(2)).expect("toggle");
    let html = render_page(&config, &session.snapshot());

    assert!(html.contains("Athericidae"));
    assert!(!html.contains("Baetis"));
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 2);
}
