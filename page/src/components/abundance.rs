//! Macroinvertebrate abundance table with expandable groups.

use super::glossary::chevron_class;
use super::{Icon, ICON_CHEVRON_DOWN};
use diebra_core::abundance::{AbundanceRow, AbundanceTable as TaxonTable};
use diebra_core::{Intent, MultiOpen};
use leptos::prelude::*;

/// Grouped table: one clickable header row per order, followed by its
/// families when expanded. Any number of groups can be open.
#[component]
pub fn AbundanceTable(
    /// Groups already in display order
    table: TaxonTable,
    /// Expanded display indices
    #[prop(into)]
    expanded: Signal<MultiOpen>,
    on_intent: Callback<Intent>,
) -> impl IntoView {
    let grand_total = table.grand_total();
    let rows = move || {
        expanded
            .with(|open| table.rows(open))
            .into_iter()
            .map(|row| render_row(row, on_intent))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="table-wrap">
            <table class="data-table abundance-table">
                <thead>
                    <tr>
                        <th scope="col">"Ordine"</th>
                        <th scope="col">"Famiglia / Genere"</th>
                        <th scope="col" class="num">"N. Individui"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
                <tfoot>
                    <tr class="total-row">
                        <td colspan="2">"Totale individui"</td>
                        <td class="num">{grand_total}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

fn render_row(row: AbundanceRow, on_intent: Callback<Intent>) -> AnyView {
    match row {
        AbundanceRow::Group {
            index,
            name,
            total,
            expanded,
            summary,
        } => view! {
            <tr
                class=if expanded { "group-row expanded" } else { "group-row" }
                aria-expanded=expanded.to_string()
                on:click=move |_| on_intent.run(Intent::ToggleGroup(index))
            >
                <td>
                    <span class="group-name">
                        <span class=chevron_class(expanded)>
                            <Icon path=ICON_CHEVRON_DOWN stroke_width="2.5" />
                        </span>
                        {name}
                    </span>
                </td>
                <td class="summary">{summary}</td>
                <td class="num">{total}</td>
            </tr>
        }
        .into_any(),
        AbundanceRow::Item { name, count, .. } => view! {
            <tr class="item-row">
                <td></td>
                <td>{name}</td>
                <td class="num">{count}</td>
            </tr>
        }
        .into_any(),
    }
}
