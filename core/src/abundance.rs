//! Macroinvertebrate abundance table: groups ordered by total count.

use crate::disclosure::MultiOpen;
use serde::Serialize;
use std::cmp::Reverse;

/// A family or genus and how many individuals were collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TaxonItem {
    /// Family / genus name.
    pub name: &'static str,
    /// Individuals counted.
    pub count: u32,
}

/// An order with its items, in collection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TaxonGroup {
    /// Order name.
    pub name: &'static str,
    /// Items in insertion order (never re-sorted).
    pub items: &'static [TaxonItem],
}

impl TaxonGroup {
    /// Sum of item counts; zero for an empty group.
    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.count).sum()
    }
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbundanceRow {
    /// Clickable group header.
    Group {
        /// Display index (position after sorting), used for toggling.
        index: usize,
        /// Order name.
        name: &'static str,
        /// Group total.
        total: u32,
        /// Whether children follow.
        expanded: bool,
        /// "N famiglie/generi" while collapsed, nothing while expanded.
        summary: Option<String>,
    },
    /// Child row of an expanded group.
    Item {
        /// Display index of the parent group.
        group: usize,
        /// Family / genus name.
        name: &'static str,
        /// Individuals counted.
        count: u32,
    },
}

/// Groups sorted once by descending total; ties keep input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AbundanceTable {
    groups: Vec<TaxonGroup>,
}

impl AbundanceTable {
    /// Sort `groups` for display.
    pub fn new(groups: &[TaxonGroup]) -> Self {
        let mut groups = groups.to_vec();
        // sort_by_key is stable, which is what keeps ties in input order
        groups.sort_by_key(|group| Reverse(group.total()));
        Self { groups }
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[TaxonGroup] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All individuals across groups.
    pub fn grand_total(&self) -> u32 {
        self.groups.iter().map(TaxonGroup::total).sum()
    }

    /// Rows for the current expansion state.
    pub fn rows(&self, expanded: &MultiOpen) -> Vec<AbundanceRow> {
        let mut rows = Vec::with_capacity(self.groups.len());
        for (index, group) in self.groups.iter().enumerate() {
            let is_expanded = expanded.is_expanded(index);
            rows.push(AbundanceRow::Group {
                index,
                name: group.name,
                total: group.total(),
                expanded: is_expanded,
                summary: (!is_expanded).then(|| format!("{} famiglie/generi", group.items.len())),
            });
            if is_expanded {
                rows.extend(group.items.iter().map(|item| AbundanceRow::Item {
                    group: index,
                    name: item.name,
                    count: item.count,
                }));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use pretty_assertions::assert_eq;

    const EMPTY: TaxonGroup = TaxonGroup {
        name: "Vuoto",
        items: &[],
    };

    fn names(table: &AbundanceTable) -> Vec<&'static str> {
        table.groups().iter().map(|g| g.name).collect()
    }

    #[test]
    fn campaign_groups_sort_by_total_descending() {
        let table = AbundanceTable::new(fixtures::TAXON_GROUPS);
        let totals: Vec<u32> = table.groups().iter().map(TaxonGroup::total).collect();
        assert_eq!(totals, vec![68, 30, 17, 16, 4, 4, 4]);
        assert_eq!(table.groups()[0].name, "Efemerotteri");
    }

    #[test]
    fn ties_keep_input_order() {
        let table = AbundanceTable::new(fixtures::TAXON_GROUPS);
        assert_eq!(
            names(&table)[4..].to_vec(),
            vec!["Coleotteri", "Crostacei", "Idracari"]
        );
    }

    #[test]
    fn collapsed_groups_show_summary_only() {
        let table = AbundanceTable::new(fixtures::TAXON_GROUPS);
        let rows = table.rows(&MultiOpen::new());
        assert_eq!(rows.len(), table.len());
        assert_eq!(
            rows[0],
            AbundanceRow::Group {
                index: 0,
                name: "Efemerotteri",
                total: 68,
                expanded: false,
                summary: Some("3 famiglie/generi".into()),
            }
        );
    }

    #[test]
    fn expanded_group_lists_items_in_insertion_order() {
        let table = AbundanceTable::new(fixtures::TAXON_GROUPS);
        let mut expanded = MultiOpen::new();
        expanded.toggle(0);
        let rows = table.rows(&expanded);

        let items: Vec<(&str, u32)> = rows
            .iter()
            .filter_map(|row| match row {
                AbundanceRow::Item { group: 0, name, count } => Some((*name, *count)),
                _ => None,
            })
            .collect();
        assert_eq!(items, vec![("Baetis", 56), ("Ecdyonurus", 10), ("Habeoleatoides", 2)]);
        assert!(matches!(rows[0], AbundanceRow::Group { summary: None, expanded: true, .. }));
    }

    #[test]
    fn order_is_fixed_while_toggling() {
        let table = AbundanceTable::new(fixtures::TAXON_GROUPS);
        let mut expanded = MultiOpen::new();
        expanded.toggle(3);
        expanded.toggle(6);
        let headers: Vec<&str> = table
            .rows(&expanded)
            .into_iter()
            .filter_map(|row| match row {
                AbundanceRow::Group { name, .. } => Some(name),
                AbundanceRow::Item { .. } => None,
            })
            .collect();
        assert_eq!(headers, names(&table));
    }

    #[test]
    fn empty_group_has_zero_total_and_no_children() {
        let table = AbundanceTable::new(&[EMPTY]);
        let mut expanded = MultiOpen::new();
        expanded.toggle(0);
        let rows = table.rows(&expanded);
        assert_eq!(rows.len(), 1);
        assert_eq!(table.groups()[0].total(), 0);
    }

    #[test]
    fn grand_total_sums_everything() {
        let table = AbundanceTable::new(fixtures::TAXON_GROUPS);
        assert_eq!(table.grand_total(), 143);
    }
}
