//! Disclosure toggles.
//!
//! [`SingleOpen`] backs the glossary accordion (opening one entry closes the
//! other in a single assignment). [`MultiOpen`] backs the abundance table,
//! where every group expands independently.

use serde::Serialize;
use std::collections::BTreeSet;

/// At most one entry expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SingleOpen {
    open: Option<usize>,
}

impl SingleOpen {
    /// Everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `index` if it is open, otherwise make it the open entry.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Whether `index` is the open entry.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// The open entry, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Collapse everything.
    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Independent per-index expansion. Unlisted indices are collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MultiOpen {
    expanded: BTreeSet<usize>,
}

impl MultiOpen {
    /// Everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `index` only.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    /// Whether `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Number of expanded indices.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Expanded indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_open_switches_atomically() {
        let mut list = SingleOpen::new();
        assert_eq!(list.open_index(), None);

        list.toggle(0);
        assert!(list.is_open(0));

        list.toggle(2);
        assert_eq!(list.open_index(), Some(2));
        assert!(!list.is_open(0));
    }

    #[test]
    fn single_open_toggle_same_closes() {
        let mut list = SingleOpen::new();
        list.toggle(1);
        list.toggle(1);
        assert_eq!(list.open_index(), None);
    }

    #[test]
    fn single_open_never_has_two_open() {
        let mut list = SingleOpen::new();
        for i in [0, 1, 2, 1, 0, 0, 2] {
            list.toggle(i);
            let open = (0..3).filter(|j| list.is_open(*j)).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn multi_open_flips_only_target() {
        let mut table = MultiOpen::new();
        table.toggle(1);
        table.toggle(3);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![1, 3]);

        let before: Vec<bool> = (0..5).map(|i| table.is_expanded(i)).collect();
        table.toggle(2);
        for i in [0, 1, 3, 4] {
            assert_eq!(table.is_expanded(i), before[i]);
        }
        assert!(table.is_expanded(2));
    }

    #[test]
    fn multi_open_double_toggle_is_identity() {
        let mut table = MultiOpen::new();
        table.toggle(0);
        let snapshot = table.clone();
        table.toggle(4);
        table.toggle(4);
        assert_eq!(table, snapshot);
        assert_eq!(table.expanded_count(), 1);
    }
}
