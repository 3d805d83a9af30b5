//! Root composition state: which dialog is open, which disclosures are
//! expanded, and the two animations.
//!
//! Renderers never mutate anything. They read a [`PageView`] snapshot and send
//! [`Intent`]s back to [`PageSession::dispatch`].

use crate::abundance::AbundanceTable;
use crate::config::PageConfig;
use crate::counter::{CounterPhase, ScoreCounter};
use crate::disclosure::{MultiOpen, SingleOpen};
use crate::error::{ConfigError, PageError};
use crate::fixtures::{self, MetricCard};
use crate::scheduler::Scheduler;
use crate::score::Score;
use crate::visibility::{RevealTrigger, VisibilityObserver};
use serde::Serialize;

/// The single active dialog. Being an enum, two dialogs can never be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "overlay", content = "param", rename_all = "snake_case")]
pub enum Overlay {
    /// Nothing open.
    #[default]
    None,
    /// IBE result with the animated score.
    Results,
    /// Detail of the field parameter at this index.
    ParamDetail(usize),
    /// Regional agency info.
    Arpa,
    /// Mayfly info.
    Efemerotteri,
}

impl Overlay {
    /// Whether any dialog is open.
    pub fn is_open(self) -> bool {
        self != Overlay::None
    }

    /// Field parameter card behind a detail dialog.
    pub fn selected_param(self) -> Option<&'static MetricCard> {
        match self {
            Overlay::ParamDetail(index) => fixtures::FIELD_PARAMETERS.get(index),
            _ => None,
        }
    }
}

/// User intent emitted by the renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Open the results dialog.
    OpenResults,
    /// Open the detail dialog for a field parameter.
    SelectParam(usize),
    /// Open the agency dialog.
    OpenArpa,
    /// Open the mayfly dialog.
    OpenEfemerotteri,
    /// Close whatever is open (backdrop, close button, Escape).
    CloseOverlay,
    /// Toggle a glossary entry.
    ToggleGlossary(usize),
    /// Toggle a taxon group by display index.
    ToggleGroup(usize),
}

/// Everything a renderer needs, as plain data.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PageView {
    /// Active dialog.
    pub overlay: Overlay,
    /// Expanded glossary entry.
    pub glossary_open: Option<usize>,
    /// Expanded taxon groups (display indices).
    pub expanded_groups: MultiOpen,
    /// Whether the substrate bars have been revealed.
    pub bars_revealed: bool,
    /// Current value of the results counter.
    pub score: Score,
}

impl PageView {
    /// Field parameter shown in the detail dialog, if that dialog is open.
    pub fn selected_param(&self) -> Option<&'static MetricCard> {
        self.overlay.selected_param()
    }
}

/// Owns all interaction state of the page.
pub struct PageSession<S: Scheduler> {
    overlay: Overlay,
    glossary: SingleOpen,
    expanded: MultiOpen,
    table: AbundanceTable,
    counter: ScoreCounter<S>,
    reveal: RevealTrigger,
}

impl<S: Scheduler> PageSession<S> {
    /// Fresh session: nothing open, counter idle, bars at baseline.
    pub fn new(config: &PageConfig, scheduler: S) -> Result<Self, ConfigError> {
        Ok(Self {
            overlay: Overlay::None,
            glossary: SingleOpen::new(),
            expanded: MultiOpen::new(),
            table: AbundanceTable::new(fixtures::TAXON_GROUPS),
            counter: ScoreCounter::new(config.counter_config()?, scheduler),
            reveal: RevealTrigger::new(config.threshold()?),
        })
    }

    /// Apply one intent. Invalid indices are rejected and leave state untouched.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), PageError> {
        tracing::debug!(?intent, "dispatch");
        match intent {
            Intent::OpenResults => self.set_overlay(Overlay::Results),
            Intent::SelectParam(index) => {
                let available = fixtures::FIELD_PARAMETERS.len();
                if index >= available {
                    return Err(PageError::UnknownParam { index, available });
                }
                self.set_overlay(Overlay::ParamDetail(index));
            }
            Intent::OpenArpa => self.set_overlay(Overlay::Arpa),
            Intent::OpenEfemerotteri => self.set_overlay(Overlay::Efemerotteri),
            Intent::CloseOverlay => self.set_overlay(Overlay::None),
            Intent::ToggleGlossary(index) => {
                let available = fixtures::GLOSSARY.len();
                if index >= available {
                    return Err(PageError::UnknownGlossaryEntry { index, available });
                }
                self.glossary.toggle(index);
            }
            Intent::ToggleGroup(index) => {
                let available = self.table.len();
                if index >= available {
                    return Err(PageError::UnknownGroup { index, available });
                }
                self.expanded.toggle(index);
            }
        }
        Ok(())
    }

    fn set_overlay(&mut self, next: Overlay) {
        let previous = std::mem::replace(&mut self.overlay, next);
        if previous == next {
            return;
        }
        tracing::debug!(?previous, ?next, "overlay changed");
        match (previous == Overlay::Results, next == Overlay::Results) {
            (false, true) => self.counter.start(),
            (true, false) => self.counter.reset(),
            _ => {}
        }
    }

    /// Start watching the substrate container; no-op once revealed.
    pub fn attach_reveal<O: VisibilityObserver>(&self, observer: &O, region: &O::Region) {
        self.reveal.attach(observer, region);
    }

    /// Push counter values to the host (e.g. into a UI signal).
    pub fn on_score(&self, listener: impl Fn(Score) + 'static) {
        self.counter.on_change(listener);
    }

    /// Notify the host once the bars reveal.
    pub fn on_reveal(&self, listener: impl Fn() + 'static) {
        self.reveal.on_reveal(listener);
    }

    /// Active dialog.
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Counter phase (for diagnostics and tests).
    pub fn counter_phase(&self) -> CounterPhase {
        self.counter.phase()
    }

    /// Sorted abundance table.
    pub fn table(&self) -> &AbundanceTable {
        &self.table
    }

    /// Plain snapshot for rendering.
    pub fn snapshot(&self) -> PageView {
        PageView {
            overlay: self.overlay,
            glossary_open: self.glossary.open_index(),
            expanded_groups: self.expanded.clone(),
            bars_revealed: self.reveal.has_triggered(),
            score: self.counter.value(),
        }
    }
}
