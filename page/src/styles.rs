//! CSS for the monitoring page.
//!
//! Inlined into the document head so the exported HTML is a single file.
//!
//! ```rust
//! use diebra_page::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.contains(".modal-backdrop"));
//! ```

/// Complete stylesheet - light "lab notebook" theme.
///
/// Bar and score widths animate through CSS transitions; the components
/// only switch the target width.
pub const PAGE_CSS: &str = r#"
:root {
    --blue-900: #1e3a8a;
    --blue-700: #1d4ed8;
    --blue-600: #2563eb;
    --blue-100: #dbeafe;
    --blue-50: #eff6ff;
    --slate-800: #1e293b;
    --slate-700: #334155;
    --slate-500: #64748b;
    --slate-200: #e2e8f0;
    --slate-50: #f8fafc;
    --green-600: #16a34a;
    --radius: 12px;
    --shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
    --font: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--font);
    background: var(--slate-50);
    color: var(--slate-800);
    line-height: 1.6;
}

.page {
    max-width: 56rem;
    margin: 3rem auto;
    padding: 2rem 3rem;
    background: #fff;
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    transition: box-shadow 0.5s;
}
.page:hover { box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15); }

.page-header { text-align: center; margin-bottom: 2rem; }
.page-header h1 { font-size: 2.75rem; font-weight: 800; color: var(--blue-900); margin: 0; letter-spacing: -0.02em; }
.page-header p { color: var(--slate-500); margin-top: 0.5rem; }

.section { margin-top: 2.5rem; font-size: 1.1rem; color: var(--slate-700); }
.section-title {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--blue-700);
    border-bottom: 2px solid var(--blue-100);
    padding-bottom: 0.5rem;
    margin-bottom: 1rem;
}
.subsection { font-size: 1.2rem; font-weight: 600; color: var(--slate-800); margin: 2rem 0 1rem; }

.term { position: relative; cursor: help; }
.term-word { font-weight: 600; color: var(--blue-600); border-bottom: 2px dotted #60a5fa; }
.term-tip {
    position: absolute;
    bottom: 100%;
    left: 50%;
    transform: translateX(-50%);
    width: 18rem;
    margin-bottom: 0.5rem;
    padding: 0.75rem;
    background: var(--slate-800);
    color: #fff;
    font-size: 0.95rem;
    border-radius: 8px;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s;
    z-index: 10;
}
.term:hover .term-tip { opacity: 1; }

.frame { margin-top: 1rem; border-radius: var(--radius); overflow: hidden; box-shadow: var(--shadow); border: 1px solid var(--slate-200); }
.frame iframe { width: 100%; height: 450px; border: 0; display: block; }
.frame img { width: 100%; display: block; object-fit: cover; }

.materials { display: flex; flex-wrap: wrap; gap: 1rem; }
.material {
    display: flex; flex-direction: column; align-items: center; gap: 0.5rem;
    padding: 1rem; min-width: 8rem;
    background: var(--blue-50); border: 1px solid var(--blue-100); border-radius: var(--radius);
}
.material svg, .observation svg { width: 2.5rem; height: 2.5rem; color: var(--blue-600); }

.observations { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
.observation { display: flex; align-items: center; gap: 0.75rem; padding: 1rem; background: var(--slate-50); border-radius: var(--radius); }

.params { display: grid; grid-template-columns: repeat(auto-fit, minmax(9rem, 1fr)); gap: 1rem; }
.param-card {
    padding: 1rem; text-align: center; cursor: pointer;
    background: rgba(219, 234, 254, 0.5); border: 1px solid #bfdbfe; border-radius: var(--radius);
    transition: all 0.3s; font: inherit;
}
.param-card:hover { background: #bfdbfe; transform: translateY(-4px) scale(1.05); box-shadow: var(--shadow); }
.param-card:active { transform: scale(0.95); }
.param-title { display: block; font-size: 0.85rem; color: var(--slate-500); }
.param-value { font-size: 1.5rem; font-weight: 700; color: var(--blue-900); margin: 0.25rem 0 0; }
.param-unit { font-size: 0.9rem; font-weight: 500; }
.hint { font-size: 0.85rem; color: var(--slate-500); text-align: center; margin-top: 0.75rem; }

.composition { display: flex; flex-direction: column; gap: 0.75rem; }
.bar-row { display: grid; grid-template-columns: 12rem 1fr; align-items: center; gap: 1rem; }
.bar-track { height: 1.5rem; background: var(--slate-200); border-radius: 999px; overflow: hidden; }
.bar-fill {
    height: 100%; background: var(--blue-600); color: #fff;
    font-size: 0.8rem; font-weight: 600; text-align: right; padding-right: 0.5rem;
    transition: width 2.5s ease-out;
}

.table-wrap { overflow-x: auto; border-radius: var(--radius); border: 1px solid var(--slate-200); }
.data-table { width: 100%; border-collapse: collapse; font-size: 1rem; }
.data-table th { background: var(--blue-50); text-align: left; padding: 0.75rem 1rem; color: var(--blue-900); }
.data-table td { padding: 0.75rem 1rem; border-top: 1px solid var(--slate-200); }
.num { text-align: right; font-variant-numeric: tabular-nums; }

.group-row { cursor: pointer; user-select: none; transition: background 0.2s; }
.group-row:hover { background: var(--slate-50); }
.group-row.expanded { background: var(--blue-50); }
.group-name { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; }
.chevron { width: 1rem; height: 1rem; color: var(--blue-600); transition: transform 0.2s; }
.chevron.open { transform: rotate(180deg); }
.glossary-toggle .chevron { width: 1.5rem; height: 1.5rem; }
.summary { color: var(--slate-500); font-style: italic; }
.item-row td { background: #fff; font-size: 0.95rem; }

.callout { margin-top: 1rem; padding: 1rem; background: var(--blue-50); border-radius: var(--radius); }
.link-btn {
    background: none; border: none; padding: 0; font: inherit; cursor: pointer;
    color: var(--blue-600); font-weight: 600; text-decoration: underline;
}
.btn {
    display: inline-block; margin-top: 1rem; padding: 0.6rem 1.2rem;
    background: var(--blue-600); color: #fff; border: none; border-radius: 999px;
    font: inherit; font-weight: 600; cursor: pointer;
}

.ibe-cell.selected { background: #dcfce7; font-weight: 700; }
.ibe-result { display: inline-flex; flex-direction: column; align-items: center; gap: 0.35rem; }
.ibe-table .muted { opacity: 0.5; }
.ibe-result .value {
    display: inline-flex; align-items: center; justify-content: center;
    width: 2.5rem; height: 2.5rem; border-radius: 999px; border: 4px solid #ef4444;
    background: #fff; color: #dc2626; font-weight: 800;
}
.ibe-result .caption { font-size: 0.65rem; font-weight: 700; color: #991b1b; background: #fee2e2; padding: 0.1rem 0.4rem; border-radius: 4px; }
.row-arrow { width: 1rem; height: 1rem; vertical-align: middle; margin-left: 0.25rem; }

.quality-table tr.ours { background: #dcfce7; font-weight: 600; }
.badge { margin-left: 0.5rem; padding: 0.1rem 0.5rem; font-size: 0.7rem; border-radius: 999px; background: var(--green-600); color: #fff; }
.swatch { display: inline-block; width: 0.9rem; height: 0.9rem; border-radius: 999px; vertical-align: middle; margin-right: 0.4rem; }

.glossary { display: flex; flex-direction: column; gap: 1rem; }
.glossary-item { border: 1px solid var(--slate-200); border-radius: var(--radius); overflow: hidden; transition: box-shadow 0.3s; }
.glossary-item:hover { box-shadow: var(--shadow); }
.glossary-toggle {
    width: 100%; display: flex; justify-content: space-between; align-items: center;
    padding: 1rem 1.25rem; background: #fff; border: none; text-align: left; cursor: pointer; font: inherit;
}
.glossary-toggle h3 { margin: 0; font-size: 1.1rem; }
.glossary-panel { display: grid; transition: grid-template-rows 0.5s ease-in-out; }
.glossary-panel > div { overflow: hidden; }
.glossary-body { padding: 0 1.25rem 1.25rem; color: var(--slate-700); }
.glossary-body img { display: block; margin: 1rem auto 0; max-width: 100%; max-height: 20rem; border-radius: 8px; }

.modal-backdrop {
    position: fixed; inset: 0; z-index: 50;
    display: flex; justify-content: center; align-items: center; padding: 1rem;
    background: rgba(0, 0, 0, 0.6); backdrop-filter: blur(4px);
    animation: fade-in 0.3s ease-out;
}
.modal {
    position: relative; width: 100%; max-width: 32rem; padding: 2rem;
    background: #fff; border-radius: 1rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    animation: fade-in-scale 0.3s ease-out forwards;
}
.modal-header { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 1rem; }
.modal-header h2 { margin: 0; font-size: 1.5rem; }
.modal-header a { color: inherit; display: inline-flex; align-items: center; gap: 0.4rem; }
.modal-close { background: none; border: none; padding: 0.25rem; border-radius: 999px; cursor: pointer; color: #9ca3af; }
.modal-close:hover { background: #f3f4f6; color: var(--slate-800); }
.modal-close svg { width: 1.5rem; height: 1.5rem; }
.modal-body { color: #4b5563; }
.modal-body img { width: 100%; border-radius: 8px; margin-top: 1rem; }

.ideal { padding: 1rem; margin-bottom: 1rem; background: var(--blue-50); border-radius: 8px; text-align: center; }
.ideal .label { font-size: 0.8rem; text-transform: uppercase; color: var(--slate-500); margin: 0; }
.ideal .value { font-size: 1.4rem; font-weight: 700; color: var(--blue-900); margin: 0; }

.score-track { height: 2rem; background: var(--slate-200); border-radius: 999px; overflow: hidden; margin: 1rem 0 0.5rem; }
.score-fill {
    height: 100%; display: flex; justify-content: flex-end; align-items: center; padding-right: 0.75rem;
    background: linear-gradient(90deg, #f97316, #facc15, #22c55e);
    transition: width 0.3s ease-out;
}
.score-label { color: #fff; font-weight: 700; transition: opacity 0.3s; }
.score-scale { display: flex; justify-content: space-between; font-size: 0.8rem; color: var(--slate-500); }
.status-box { margin-top: 1.5rem; padding: 1rem; border-radius: 8px; background: #dcfce7; text-align: center; }
.status-box .status { font-weight: 700; color: var(--green-600); margin: 0; }

.thanks { margin-top: 3rem; padding-top: 1.5rem; border-top: 1px solid var(--slate-200); text-align: center; color: var(--slate-500); }

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes fade-in-scale { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); } }

@media (max-width: 640px) {
    .page { padding: 1.5rem; margin: 1rem; }
    .page-header h1 { font-size: 2rem; }
    .bar-row { grid-template-columns: 1fr; gap: 0.25rem; }
    .param-card.wide { grid-column: 1 / -1; }
}
"#;
