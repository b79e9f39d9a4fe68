//! Outdated daemon policy
//!
//! Outdatedness is relative to co-running daemons of the same kind: a lone
//! daemon is never outdated. When a kind has several daemons, every daemon
//! whose version text differs from the highest version's text is outdated.

use crate::domain::DaemonRecord;
use crate::inventory::{compare_versions, group_by_kind};
use std::collections::HashSet;

/// Set of records considered outdated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutdatedSet {
    records: HashSet<DaemonRecord>,
}

impl OutdatedSet {
    /// Computes the outdated records from records in any order
    ///
    /// Membership compares raw version text against the maximum, so `7.4`
    /// and `7.4.0` are distinct versions here.
    pub fn from_records(records: &[DaemonRecord]) -> Self {
        let mut outdated = HashSet::new();

        for (_, members) in group_by_kind(records) {
            if members.len() < 2 {
                continue;
            }

            // First maximum wins on ties
            let Some(latest) = members.iter().copied().reduce(|best, r| {
                if compare_versions(r, best).is_gt() {
                    r
                } else {
                    best
                }
            }) else {
                continue;
            };

            outdated.extend(
                members
                    .iter()
                    .filter(|r| r.version != latest.version)
                    .map(|r| (*r).clone()),
            );
        }

        Self { records: outdated }
    }

    /// Returns true if the record is outdated
    pub fn contains(&self, record: &DaemonRecord) -> bool {
        self.records.contains(record)
    }

    /// Returns the number of outdated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is outdated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
