//! Leptos UI components for the monitoring page.
//!
//! Every component reads plain data or signals derived from a
//! [`diebra_core::PageView`] and reports clicks as [`diebra_core::Intent`]s.
//! None of them owns interaction state.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── MonitoringPage
//!     ├── PageHeader, Objective (Term), Location, Procedure (Term), Materials
//!     ├── Results
//!     │   ├── Observations
//!     │   ├── FieldParameters
//!     │   ├── CompositionBars
//!     │   ├── AbundanceTable
//!     │   └── IbeTable
//!     ├── Conclusions
//!     │   └── QualityTable
//!     ├── Glossary
//!     ├── Acknowledgements
//!     └── Overlays
//!         └── Modal x4 (results with ScoreBar, parameter, Arpa, Efemerotteri)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use diebra_page::components::MonitoringPage;
//!
//! let (state, _) = signal(PageView::default());
//! view! {
//!     <MonitoringPage state=state on_intent=Callback::new(|_| {}) assets=AssetUrls::default() />
//! }
//! ```

mod abundance;
mod composition;
mod document;
mod field_params;
mod glossary;
mod icons;
mod modal;
mod overlays;
mod page;
mod score;
mod sections;
mod tables;

pub use abundance::AbundanceTable;
pub use composition::CompositionBars;
pub use document::PageDocument;
pub use field_params::FieldParameters;
pub use glossary::Glossary;
pub use icons::*;
pub use modal::Modal;
pub use overlays::Overlays;
pub use page::MonitoringPage;
pub use score::ScoreBar;
pub use sections::{
    Acknowledgements, Conclusions, Location, Materials, Objective, Observations, PageHeader,
    Procedure, Term,
};
pub use tables::{IbeTable, QualityTable};
