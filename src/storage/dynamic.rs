//! Dynamically keyed checkpoint table.
//!
//! Backed by a `BTreeMap` keyed by owned labels: no length limit, no label
//! count limit, one allocation the first time each label is seen. Reports
//! enumerate labels in sorted order, which is stable across runs.

use alloc::collections::BTreeMap;
use alloc::string::String;

use super::CheckpointStore;
use crate::checkpoint::CheckpointState;
use crate::clock::Ticks;

/// Unbounded checkpoint table.
#[derive(Clone, Debug, Default)]
pub struct DynamicTable<T> {
    checkpoints: BTreeMap<String, CheckpointState<T>>,
}

impl<T> DynamicTable<T> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            checkpoints: BTreeMap::new(),
        }
    }
}

impl<T: Ticks> CheckpointStore<T> for DynamicTable<T> {
    fn resolve(
        &self,
        label: &str,
    ) -> Option<&CheckpointState<T>> {
        self.checkpoints.get(label)
    }

    fn resolve_mut(
        &mut self,
        label: &str,
    ) -> Option<&mut CheckpointState<T>> {
        self.checkpoints.get_mut(label)
    }

    fn resolve_or_create(
        &mut self,
        label: &str,
    ) -> Option<&mut CheckpointState<T>> {
        // Only allocate the key for labels we have not seen
        if !self.checkpoints.contains_key(label) {
            self.checkpoints.insert(String::from(label), CheckpointState::new());
        }
        self.checkpoints.get_mut(label)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &CheckpointState<T>)> {
        self.checkpoints.iter().map(|(label, state)| (label.as_str(), state))
    }

    fn states_mut(&mut self) -> impl Iterator<Item = &mut CheckpointState<T>> { self.checkpoints.values_mut() }

    #[inline]
    fn len(&self) -> usize { self.checkpoints.len() }

    #[inline]
    fn capacity(&self) -> Option<usize> { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_creates() {
        let mut table = DynamicTable::<u32>::new();
        for i in 0..100u32 {
            let label = alloc::format!("phase{i}");
            assert!(table.resolve_or_create(&label).is_some());
        }
        assert_eq!(table.len(), 100);
        assert_eq!(table.capacity(), None);
    }

    #[test]
    fn test_long_labels_kept_whole() {
        let mut table = DynamicTable::<u32>::new();
        let label = "a_rather_long_label_that_a_fixed_table_would_truncate";
        table.resolve_or_create(label).unwrap();

        assert_eq!(table.iter().next().unwrap().0, label);
    }

    #[test]
    fn test_resolve_missing() {
        let mut table = DynamicTable::<u32>::new();
        assert!(table.resolve("nope").is_none());
        assert!(table.resolve_mut("nope").is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_iterates_in_label_order() {
        let mut table = DynamicTable::<u32>::new();
        for label in ["zeta", "alpha", "mid"] {
            table.resolve_or_create(label).unwrap();
        }
        let labels: alloc::vec::Vec<&str> = table.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["alpha", "mid", "zeta"]);
    }
}
