//! Inventory building: grouping, ranking and the outdated policy
//!
//! This module provides:
//! - Grouping of records by daemon kind in first-seen order
//! - Descending version ranking within each kind
//! - The flattened, 1-based indexed inventory shown to the operator

mod outdated;

pub use outdated::OutdatedSet;

use crate::domain::{DaemonKind, DaemonRecord, Version};
use std::cmp::Ordering;

/// Groups records by kind, keeping kinds in order of first appearance
///
/// Records keep their relative order inside each group.
pub fn group_by_kind(records: &[DaemonRecord]) -> Vec<(DaemonKind, Vec<&DaemonRecord>)> {
    let mut groups: Vec<(DaemonKind, Vec<&DaemonRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(kind, _)| *kind == record.kind) {
            Some((_, members)) => members.push(record),
            None => groups.push((record.kind, vec![record])),
        }
    }
    groups
}

/// Compares two records by parsed version, unparseable versions lowest
pub(crate) fn compare_versions(a: &DaemonRecord, b: &DaemonRecord) -> Ordering {
    let key = |r: &DaemonRecord| -> Option<Version> { r.parsed_version() };
    key(a).cmp(&key(b))
}

/// The display-ordered list of detected daemons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<DaemonRecord>,
}

impl Inventory {
    /// Builds the inventory from records in listing order
    ///
    /// Each kind's records are sorted highest version first. The sort is
    /// stable, so equal versions keep their listing order.
    pub fn from_records(records: &[DaemonRecord]) -> Self {
        let records = group_by_kind(records)
            .into_iter()
            .flat_map(|(_, mut members)| {
                members.sort_by(|a, b| compare_versions(b, a));
                members.into_iter().cloned()
            })
            .collect();
        Self { records }
    }

    /// Returns the records in display order
    pub fn records(&self) -> &[DaemonRecord] {
        &self.records
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no daemon was detected
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at a 1-based position
    pub fn get(&self, position: usize) -> Option<&DaemonRecord> {
        position.checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// Iterates over `(1-based position, record)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (usize, &DaemonRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// Returns the ascending 1-based positions of the outdated records
    pub fn outdated_positions(&self, outdated: &OutdatedSet) -> Vec<usize> {
        self.entries()
            .filter(|(_, record)| outdated.contains(record))
            .map(|(position, _)| position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradle(pid: u32, version: &str) -> DaemonRecord {
        DaemonRecord::new(DaemonKind::Gradle, pid, version)
    }

    fn kotlin(pid: u32, version: &str) -> DaemonRecord {
        DaemonRecord::new(DaemonKind::Kotlin, pid, version)
    }

    #[test]
    fn test_group_by_kind_first_seen_order() {
        let records = vec![kotlin(1, "1.6.10"), gradle(2, "7.4.2"), kotlin(3, "1.5.0")];
        let groups = group_by_kind(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, DaemonKind::Kotlin);
        assert_eq!(groups[0].1, vec![&records[0], &records[2]]);
        assert_eq!(groups[1].0, DaemonKind::Gradle);
        assert_eq!(groups[1].1, vec![&records[1]]);
    }

    #[test]
    fn test_from_records_sorts_descending() {
        let records = vec![gradle(1, "6.1"), gradle(2, "7.4.2"), gradle(3, "7.10")];
        let inventory = Inventory::from_records(&records);
        let pids: Vec<u32> = inventory.records().iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![3, 2, 1]);
    }

    #[test]
    fn test_from_records_missing_patch_ranks_lower() {
        let records = vec![gradle(1, "7.4"), gradle(2, "7.4.0")];
        let inventory = Inventory::from_records(&records);
        assert_eq!(inventory.records()[0].pid, 2);
        assert_eq!(inventory.records()[1].pid, 1);
    }

    #[test]
    fn test_from_records_stable_for_equal_versions() {
        let records = vec![gradle(5, "7.4.2"), gradle(3, "7.4.2"), gradle(9, "7.4.2")];
        let inventory = Inventory::from_records(&records);
        let pids: Vec<u32> = inventory.records().iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![5, 3, 9]);
    }

    #[test]
    fn test_from_records_keeps_kinds_together() {
        let records = vec![
            kotlin(1, "1.5.0"),
            gradle(2, "6.1"),
            kotlin(3, "1.6.10"),
            gradle(4, "7.4.2"),
        ];
        let inventory = Inventory::from_records(&records);
        assert_eq!(
            inventory.records(),
            &[
                kotlin(3, "1.6.10"),
                kotlin(1, "1.5.0"),
                gradle(4, "7.4.2"),
                gradle(2, "6.1"),
            ]
        );
    }

    #[test]
    fn test_get_is_one_based() {
        let inventory = Inventory::from_records(&[gradle(1, "7.4.2"), gradle(2, "6.1")]);
        assert_eq!(inventory.get(0), None);
        assert_eq!(inventory.get(1).map(|r| r.pid), Some(1));
        assert_eq!(inventory.get(2).map(|r| r.pid), Some(2));
        assert_eq!(inventory.get(3), None);
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::from_records(&[]);
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
        assert_eq!(inventory.entries().count(), 0);
    }

    #[test]
    fn test_outdated_positions() {
        let records = vec![gradle(1002, "6.1"), gradle(1001, "7.4.2"), kotlin(1003, "1.6.10")];
        let inventory = Inventory::from_records(&records);
        let outdated = OutdatedSet::from_records(&records);
        assert_eq!(inventory.outdated_positions(&outdated), vec![2]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let records = vec![gradle(1, "6.1"), kotlin(2, "1.6.10"), gradle(3, "7.4.2")];
        let first = Inventory::from_records(&records);
        let second = Inventory::from_records(&records);
        assert_eq!(first, second);
        assert_eq!(Inventory::from_records(first.records()), first);
    }
}
