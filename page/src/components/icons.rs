//! Outline SVG icons (24x24 grid, stroke only).
//!
//! Path data is in Heroicons outline style. A single `d` string may hold
//! several subpaths.

use leptos::prelude::*;

/// Renders an outline icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `class` - CSS classes (size and colour come from the stylesheet)
/// * `stroke_width` - Stroke width (default: "1.5")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CLOSE class="icon" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Stroke width
    #[prop(default = "1.5")]
    stroke_width: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width=stroke_width
            class=class
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path></path>
        </svg>
    }
}

// =============================================================================
// Controls
// =============================================================================

/// Chevron pointing down (rotated when open)
pub const ICON_CHEVRON_DOWN: &str = "M19.5 8.25l-7.5 7.5-7.5-7.5";

/// Dialog close cross
pub const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";

/// Arrow pointing right (IBE lookup row marker)
pub const ICON_ARROW_RIGHT: &str = "M17 8l4 4m0 0l-4 4m4-4H3";

/// Opens in a new tab
pub const ICON_EXTERNAL_LINK: &str =
    "M13.5 6H5.25A2.25 2.25 0 003 8.25v10.5A2.25 2.25 0 005.25 21h10.5A2.25 2.25 0 0018 18.75V10.5m-10.5 6L21 3m0 0h-5.25M21 3v5.25";

// =============================================================================
// Observations
// =============================================================================

/// Clear water
pub const ICON_SPARKLES: &str = "M9.813 15.904L9 18.75l-.813-2.846a4.5 4.5 0 00-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 003.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 003.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 00-3.09 3.09zM18.259 8.715L18 9.75l-.259-1.035a3.375 3.375 0 00-2.455-2.456L14.25 6l1.036-.259a3.375 3.375 0 002.455-2.456L18 2.25l.259 1.035a3.375 3.375 0 002.456 2.456L21.75 6l-1.035.259a3.375 3.375 0 00-2.456 2.456zM16.898 20.573L16.5 21.75l-.398-1.177a3.375 3.375 0 00-2.455-2.456L12.75 18l1.177-.398a3.375 3.375 0 002.455-2.456L16.5 14.25l.398 1.177a3.375 3.375 0 002.456 2.456L20.25 18l-1.177.398a3.375 3.375 0 00-2.456 2.456z";

/// Days without rain
pub const ICON_CALENDAR: &str = "M6.75 3v2.25M17.25 3v2.25M3 18.75V7.5a2.25 2.25 0 012.25-2.25h13.5A2.25 2.25 0 0121 7.5v11.25m-18 0A2.25 2.25 0 005.25 21h13.5A2.25 2.25 0 0021 18.75m-18 0h18M12 12.75h.008v.008H12v-.008z";

/// Low water regime
pub const ICON_TREND_DOWN: &str =
    "M2.25 6L9 12.75l4.286-4.286a11.948 11.948 0 014.306 6.43l.776 2.898M16.5 19.5L19.5 16.5m0 0V19.5m0-3h-3";

// =============================================================================
// Materials
// =============================================================================

/// Multiparameter probe
pub const ICON_PROBE: &str = "M8.25 6.75h7.5v3.75h-7.5zM12 10.5v10.5M10.5 19.5h3";

/// Surber sampler net
pub const ICON_NET: &str = "M3.75 3.75v16.5h16.5V3.75H3.75zM9.75 3.75v16.5m4.5-16.5v16.5M3.75 9.75h16.5m-16.5 4.5h16.5";

/// Brushes
pub const ICON_BRUSH: &str = "M4.5 20.25l7.5-7.5m-7.5 0h9v-3h-9v3zM6 9.75V7.5m3 2.25V7.5m3 2.25V7.5";

/// Waterproof gloves
pub const ICON_GLOVE: &str = "M15.25 18.75V9.75a2.25 2.25 0 00-2.25-2.25h-2.5A2.25 2.25 0 008 9.75v9M8.25 9.75V8.25a1.5 1.5 0 011.5-1.5h.75a1.5 1.5 0 011.5 1.5v1.5m-3 0h3m-3.75 6h5.25m-5.25 0a1.5 1.5 0 01-1.5-1.5V12a1.5 1.5 0 011.5-1.5h0";

/// Microscope / lab glassware
pub const ICON_BEAKER: &str = "M9.75 3.104v5.714a2.25 2.25 0 01-.659 1.591L5 14.5M9.75 3.104c-.251.023-.501.05-.75.082m.75-.082a24.301 24.301 0 014.5 0m0 0v5.714c0 .597.237 1.17.659 1.591L19 14.5M14.25 3.104c.251.023.501.05.75.082M19 14.5v3.857a2.25 2.25 0 01-2.25 2.25h-5.5a2.25 2.25 0 01-2.25-2.25v-3.857M19 14.5L14.25 10M5 14.5L9.75 10";
