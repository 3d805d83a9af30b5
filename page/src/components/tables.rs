//! Static reference tables: IBE two-way lookup and quality classes.

use super::{Icon, ICON_ARROW_RIGHT};
use diebra_core::fixtures::{IbeLookupRow, QualityClass, IBE_SELECTED_COLUMN};
use leptos::prelude::*;

/// Two-way IBE lookup restricted to the rows our sample touched.
/// The selected row carries an arrow and the result cell is ringed.
#[component]
pub fn IbeTable(rows: &'static [IbeLookupRow]) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="data-table ibe-table">
                <thead>
                    <tr>
                        <th scope="col">"Gruppo Faunistico"</th>
                        <th scope="colgroup" colspan="2">"Numero Totale Unità Sistematiche"</th>
                    </tr>
                    <tr>
                        <th scope="col"></th>
                        <th scope="col">"6 – 10"</th>
                        <th scope="col">{IBE_SELECTED_COLUMN}</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .iter()
                        .map(|row| {
                            if row.selected {
                                view! {
                                    <tr class="selected-row">
                                        <th scope="row">
                                            {row.group}
                                            <Icon path=ICON_ARROW_RIGHT class="row-arrow" stroke_width="2" />
                                        </th>
                                        <td class="muted">{row.units_6_10}</td>
                                        <td class="ibe-cell selected">
                                            <span class="ibe-result">
                                                <span class="value">{row.units_11_15}</span>
                                                <span class="caption">"RISULTATO FINALE"</span>
                                            </span>
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <tr>
                                        <th scope="row">{row.group}</th>
                                        <td>{row.units_6_10}</td>
                                        <td>{row.units_11_15}</td>
                                    </tr>
                                }
                                .into_any()
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

/// Quality classes with the class containing `measured` highlighted.
#[component]
pub fn QualityTable(classes: &'static [QualityClass], measured: u8) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="data-table quality-table">
                <thead>
                    <tr>
                        <th scope="col">"Classe di qualità"</th>
                        <th scope="col">"Valore di I.B.E."</th>
                        <th scope="col">"Giudizio di qualità"</th>
                        <th scope="col">"Colore relativo alla classe di qualità"</th>
                    </tr>
                </thead>
                <tbody>
                    {classes
                        .iter()
                        .map(|class| {
                            let ours = class.contains(measured);
                            view! {
                                <tr class=if ours { "ours" } else { "" }>
                                    <td>
                                        {class.name}
                                        {ours.then(|| view! { <span class="badge">"IL NOSTRO TORRENTE"</span> })}
                                    </td>
                                    <td>{class.range_label}</td>
                                    <td>{class.verdict}</td>
                                    <td>
                                        <span
                                            class="swatch"
                                            style=format!("background: {}", class.swatch)
                                        ></span>
                                        {class.colour}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
