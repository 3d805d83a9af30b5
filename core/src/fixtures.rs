//! Campaign data for the Diebra stream (Nese), compiled in.
//!
//! Values are display strings exactly as recorded on site; nothing here is
//! computed at runtime except the sorting and sums in [`crate::abundance`].

use crate::abundance::{TaxonGroup, TaxonItem};
use crate::score::Score;
use serde::Serialize;

/// Default asset locations (overridable through [`crate::PageConfig`]).
pub mod assets {
    /// Embedded map centred on the sampling point.
    pub const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m17!1m12!1m3!1d1826.5000973433305!2d9.710030014227408!3d45.74983298265743!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m2!1m1!2zNDXCsDQ0JzU5LjQiTiA5wrA0Mic0My4zIkU!5e1!3m2!1sit!2sit!4v1761309097269!5m2!1sit!2sit";
    /// Dichotomous keys used in the lab.
    pub const LAB_PHOTO: &str = "https://files.catbox.moe/qp1ejo.png";
    /// Mayfly picture shown in the Efemerotteri dialog.
    pub const EFEMEROTTERO_IMAGE: &str =
        "https://www.biopills.net/wp-content/uploads/2020/02/odonata-e1582565642413.jpg";
    /// Glossary illustration for "Macroinvertebrati".
    pub const MACROINVERTEBRATI_IMAGE: &str = "https://files.catbox.moe/d9a1ba.jpg";
    /// Regional environmental agency.
    pub const ARPA_SITE: &str = "https://www.arpalombardia.it/";
}

/// A field parameter card; selecting it opens the detail dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    /// Parameter name.
    pub title: &'static str,
    /// Measured value as displayed.
    pub display_value: &'static str,
    /// Unit shown next to the value (may be empty).
    pub unit: &'static str,
    /// Ideal range as displayed.
    pub ideal_range: &'static str,
    /// What the parameter means.
    pub description: &'static str,
    /// Spans the whole row on narrow layouts.
    pub wide: bool,
}

/// Share of the streambed made of one substrate class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubstrateShare {
    /// Substrate class.
    pub label: &'static str,
    /// Percentage of the sampled bed.
    pub percent: u8,
}

impl SubstrateShare {
    /// Transition delay of the bar at `position`, staggered by 100 ms.
    pub fn transition_delay_ms(position: usize) -> u64 {
        position as u64 * 100
    }
}

/// Accordion entry in the glossary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    /// Term.
    pub term: &'static str,
    /// Full definition.
    pub definition: &'static str,
    /// Optional illustration.
    pub image: Option<&'static str>,
}

/// Hover tooltip attached to a term inside running text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Word as it appears in the text.
    pub term: &'static str,
    /// Tooltip body.
    pub text: &'static str,
}

/// Row of the two-way IBE lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IbeLookupRow {
    /// Faunal group that drives the row.
    pub group: &'static str,
    /// IBE for 6-10 systematic units.
    pub units_6_10: u8,
    /// IBE for 11-15 systematic units.
    pub units_11_15: u8,
    /// Row that led to our result.
    pub selected: bool,
}

/// Column of the IBE lookup table that matched our sample.
pub const IBE_SELECTED_COLUMN: &str = "11 – 15";

/// IBE quality class with its conventional colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QualityClass {
    /// "Classe I" .. "Classe V".
    pub name: &'static str,
    /// IBE values as displayed.
    pub range_label: &'static str,
    /// Lowest IBE value in the class.
    pub min: u8,
    /// Highest IBE value in the class (inclusive, open-ended for class I).
    pub max: u8,
    /// Quality judgement.
    pub verdict: &'static str,
    /// Colour name.
    pub colour: &'static str,
    /// Swatch colour.
    pub swatch: &'static str,
}

impl QualityClass {
    /// The class whose range contains `ibe`.
    pub fn classify(ibe: u8) -> &'static QualityClass {
        QUALITY_CLASSES
            .iter()
            .find(|class| (class.min..=class.max).contains(&ibe))
            .unwrap_or(&QUALITY_CLASSES[0])
    }

    /// Whether `ibe` falls in this class.
    pub fn contains(&self, ibe: u8) -> bool {
        (self.min..=self.max).contains(&ibe)
    }
}

/// Measured IBE value, read off the lookup table.
pub const MEASURED_IBE: u8 = 8;

/// Score the results dialog counts up to.
pub const RESULT_SCORE: Score = Score::from_tenths(85);

/// Field parameters measured with the multiparameter probe.
pub const FIELD_PARAMETERS: &[MetricCard] = &[
    MetricCard {
        title: "Temperatura",
        display_value: "13,1°C",
        unit: "",
        ideal_range: "8–15 °C",
        description: "Misura quanto è calda l’acqua; più è fredda, più può contenere ossigeno. Temperature basse favoriscono specie sensibili e buone condizioni ecologiche.",
        wide: false,
    },
    MetricCard {
        title: "Ossigeno (O₂)",
        display_value: "10,32",
        unit: "mg/L",
        ideal_range: "≥ 8 mg/L",
        description: "Indica quanto ossigeno è disciolto nell’acqua. Livelli alti di questo indicatore sono essenziali per pesci e macroinvertebrati e indicano un buon stato biologico.",
        wide: false,
    },
    MetricCard {
        title: "Saturazione O₂",
        display_value: "98,2%",
        unit: "",
        ideal_range: "90–100%",
        description: "Percentuale che indica quanta parte del massimo livello di ossigeno che può essere disciolto nel fiume è effettivamente contenuto. Una saturazione vicino al 100% indica un buon equilibrio biologico.",
        wide: false,
    },
    MetricCard {
        title: "pH",
        display_value: "8,12",
        unit: "",
        ideal_range: "6,5 – 8,5",
        description: "Misura se l’acqua è acida o basica. Un pH quasi neutro è stabile e adatto alla maggior parte delle specie acquatiche.",
        wide: false,
    },
    MetricCard {
        title: "Conduttività",
        display_value: "367,0",
        unit: "μS/cm",
        ideal_range: "150–500 µS/cm",
        description: "Indica la quantità di sali disciolti nell’acqua. Valori medi indicano un equilibrio naturale; valori molto alti suggeriscono possibile inquinamento.",
        wide: true,
    },
];

/// Macroinvertebrates by order, in collection order.
pub const TAXON_GROUPS: &[TaxonGroup] = &[
    TaxonGroup {
        name: "Plecotteri",
        items: &[TaxonItem { name: "Leuctra", count: 30 }],
    },
    TaxonGroup {
        name: "Efemerotteri",
        items: &[
            TaxonItem { name: "Baetis", count: 56 },
            TaxonItem { name: "Ecdyonurus", count: 10 },
            TaxonItem { name: "Habeoleatoides", count: 2 },
        ],
    },
    TaxonGroup {
        name: "Tricotteri",
        items: &[
            TaxonItem { name: "Hydropsydnidae", count: 12 },
            TaxonItem { name: "Sericostomatidae", count: 4 },
        ],
    },
    TaxonGroup {
        name: "Coleotteri",
        items: &[
            TaxonItem { name: "Elmidae", count: 3 },
            TaxonItem { name: "Scirtidae", count: 1 },
        ],
    },
    TaxonGroup {
        name: "Crostacei",
        items: &[TaxonItem { name: "Gammaridae", count: 4 }],
    },
    TaxonGroup {
        name: "Ditteri",
        items: &[
            TaxonItem { name: "Chironomidae", count: 5 },
            TaxonItem { name: "Athericidae", count: 11 },
            TaxonItem { name: "Simulidae", count: 1 },
        ],
    },
    TaxonGroup {
        name: "Idracari",
        items: &[TaxonItem { name: "Hydracarina", count: 4 }],
    },
];

/// Streambed composition.
pub const SUBSTRATE: &[SubstrateShare] = &[
    SubstrateShare { label: "Ghiaia", percent: 50 },
    SubstrateShare { label: "Pietre piccole", percent: 20 },
    SubstrateShare { label: "Pietre medie", percent: 20 },
    SubstrateShare { label: "Pietre e massi rocciosi", percent: 5 },
    SubstrateShare { label: "Pietre grossolane", percent: 5 },
];

/// Two-way IBE table restricted to the rows relevant to our sample.
pub const IBE_LOOKUP: &[IbeLookupRow] = &[
    IbeLookupRow { group: "Plecotteri", units_6_10: 8, units_11_15: 9, selected: false },
    IbeLookupRow { group: "Efemerotteri", units_6_10: 7, units_11_15: 8, selected: true },
    IbeLookupRow { group: "Tricotteri", units_6_10: 7, units_11_15: 7, selected: false },
    IbeLookupRow { group: "Gammaridi", units_6_10: 5, units_11_15: 6, selected: false },
];

/// IBE quality classes, best first.
pub const QUALITY_CLASSES: &[QualityClass] = &[
    QualityClass {
        name: "Classe I",
        range_label: "10–11–12–…",
        min: 10,
        max: u8::MAX,
        verdict: "Ambiente non alterato in modo sensibile",
        colour: "Azzurro",
        swatch: "#38bdf8",
    },
    QualityClass {
        name: "Classe II",
        range_label: "8–9",
        min: 8,
        max: 9,
        verdict: "Ambiente con moderati sintomi di alterazione",
        colour: "Verde",
        swatch: "#22c55e",
    },
    QualityClass {
        name: "Classe III",
        range_label: "6–7",
        min: 6,
        max: 7,
        verdict: "Ambiente alterato",
        colour: "Giallo",
        swatch: "#facc15",
    },
    QualityClass {
        name: "Classe IV",
        range_label: "4–5",
        min: 4,
        max: 5,
        verdict: "Ambiente molto alterato",
        colour: "Arancione",
        swatch: "#f97316",
    },
    QualityClass {
        name: "Classe V",
        range_label: "0–1–2–3",
        min: 0,
        max: 3,
        verdict: "Ambiente fortemente degradato",
        colour: "Rosso",
        swatch: "#ef4444",
    },
];

/// Glossary accordion entries.
pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "Taxonomia",
        definition: "Classificazione usata in biologia per ordinare organismi viventi che condividono caratteristiche comuni e vengono classificati in un sistema gerarchico.",
        image: None,
    },
    GlossaryEntry {
        term: "Macroinvertebrati",
        definition: "Organismi invertebrati di dimensioni superiori al millimetro, quindi visibili a occhio nudo, che vivono a stretto contatto con i fondali degli ambienti acquatici.",
        image: Some(assets::MACROINVERTEBRATI_IMAGE),
    },
    GlossaryEntry {
        term: "IBE",
        definition: "L'indice Biotico Esteso è valore utilizzato per calcolare la salute dei fiumi. Si basa sull'analisi e presenza dei macroinvertebrati (piccoli animali senza scheletro come insetti, molluschi, crostacei) che vivono sul fondale dei corsi d'acqua. La presenza di determinati gruppi di organismi indica un'acqua più o meno pulita.",
        image: None,
    },
];

/// Tooltip for "IBE" in the objective paragraph.
pub const TOOLTIP_IBE: Tooltip = Tooltip {
    term: "IBE",
    text: "Un metodo scientifico per misurare la salute dei fiumi. Si basa sull'analisi della presenza e del tipo di macroinvertebrati (piccoli animali senza scheletro come insetti, molluschi, crostacei) che vivono sul fondale dei corsi d'acqua. La presenza di determinate specie indica un'acqua più o meno pulita.",
};

/// Tooltip for "macroinvertebrati" in the procedure.
pub const TOOLTIP_MACROINVERTEBRATI: Tooltip = Tooltip {
    term: "macroinvertebrati",
    text: "Organismi invertebrati di dimensioni superiori al millimetro, quindi visibili a occhio nudo, che vivono a stretto contatto con i fondali degli ambienti acquatici.",
};

/// Tooltip for "diatomee" in the procedure.
pub const TOOLTIP_DIATOMEE: Tooltip = Tooltip {
    term: "diatomee",
    text: "Classe di Alghe unicellulari che vivono in colonie bentoniche o planctoniche, sia in acque marine che dolci, sono uno degli indicatori più importanti per la qualità dell’acqua.",
};

/// Tooltip for "taxonomia" in the procedure.
pub const TOOLTIP_TAXONOMIA: Tooltip = Tooltip {
    term: "taxonomia",
    text: "Classificazione di organismi viventi che condividono caratteristiche comuni e vengono classificati in un sistema gerarchico.",
};

/// On-site observations.
pub const OBSERVATIONS: &[&str] = &[
    "Acqua limpida e trasparente",
    "Nessuna pioggia nei 7 giorni precedenti",
    "Regime idrologico: Magra",
];

/// Equipment taken to the stream.
pub const MATERIALS: &[&str] = &[
    "Sonda",
    "Surber",
    "Spazzolini",
    "Guanti impermeabili",
    "Microscopi",
];

/// Everything above as one serializable bundle (for JSON export).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CampaignData {
    /// Field parameters.
    pub field_parameters: &'static [MetricCard],
    /// Taxon groups in collection order.
    pub taxon_groups: &'static [TaxonGroup],
    /// Substrate composition.
    pub substrate: &'static [SubstrateShare],
    /// IBE lookup rows.
    pub ibe_lookup: &'static [IbeLookupRow],
    /// Quality classes.
    pub quality_classes: &'static [QualityClass],
    /// Glossary.
    pub glossary: &'static [GlossaryEntry],
    /// Observations.
    pub observations: &'static [&'static str],
    /// Materials.
    pub materials: &'static [&'static str],
    /// Measured IBE.
    pub measured_ibe: u8,
}

/// The Diebra campaign.
pub const CAMPAIGN: CampaignData = CampaignData {
    field_parameters: FIELD_PARAMETERS,
    taxon_groups: TAXON_GROUPS,
    substrate: SUBSTRATE,
    ibe_lookup: IBE_LOOKUP,
    quality_classes: QUALITY_CLASSES,
    glossary: GLOSSARY,
    observations: OBSERVATIONS,
    materials: MATERIALS,
    measured_ibe: MEASURED_IBE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_totals_match_field_sheet() {
        let totals: Vec<u32> = TAXON_GROUPS.iter().map(TaxonGroup::total).collect();
        assert_eq!(totals, vec![30, 68, 16, 4, 4, 17, 4]);
    }

    #[test]
    fn substrate_covers_whole_bed() {
        let sum: u32 = SUBSTRATE.iter().map(|s| u32::from(s.percent)).sum();
        assert_eq!(sum, 100);
        assert_eq!(SubstrateShare::transition_delay_ms(4), 400);
    }

    #[test]
    fn measured_ibe_is_class_two() {
        let class = QualityClass::classify(MEASURED_IBE);
        assert_eq!(class.name, "Classe II");
        assert_eq!(class.colour, "Verde");
    }

    #[test]
    fn classes_partition_the_scale() {
        for ibe in 0..=14u8 {
            let matching = QUALITY_CLASSES.iter().filter(|c| c.contains(ibe)).count();
            assert_eq!(matching, 1, "ibe {ibe}");
        }
    }

    #[test]
    fn exactly_one_lookup_row_selected() {
        let selected: Vec<&str> = IBE_LOOKUP.iter().filter(|r| r.selected).map(|r| r.group).collect();
        assert_eq!(selected, vec!["Efemerotteri"]);
        let row = IBE_LOOKUP.iter().find(|r| r.selected);
        assert_eq!(row.map(|r| r.units_11_15), Some(MEASURED_IBE));
    }
}
