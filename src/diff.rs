//! Compare two snapshots to find which devices were attached and which were removed
//!
//! Records are compared on their full content through [`DeviceRecord::canonical`]. A device that reports any changed attribute between snapshots is a removal plus an addition; there is no 'changed' event.
//!
//! ```
//! use usbwatch::diff::diff;
//! use usbwatch::types::DeviceRecord;
//!
//! let previous = vec![DeviceRecord::from_line("A")];
//! let current = vec![DeviceRecord::from_line("A"), DeviceRecord::from_line("B")];
//! let result = diff(&previous, &current);
//! assert_eq!(result.added, vec![DeviceRecord::from_line("B")]);
//! assert!(result.removed.is_empty());
//! ```
use std::collections::HashSet;
use std::hash::Hash;

use crate::types::DeviceRecord;

/// Devices added and removed between two snapshots
///
/// The order of records within each side is not significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    /// In the current snapshot but not the previous
    pub added: Vec<DeviceRecord>,
    /// In the previous snapshot but not the current
    pub removed: Vec<DeviceRecord>,
}

impl DiffResult {
    /// No change between the snapshots
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Items of `a` whose `key` is not the key of any item in `b`
///
/// Set semantics: items sharing a key are returned once, first occurrence wins and order of `a` is kept.
pub fn set_difference<'a, T, K, F>(a: &'a [T], b: &'a [T], key: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let exclude: HashSet<K> = b.iter().map(&key).collect();
    let mut seen: HashSet<K> = HashSet::with_capacity(a.len());

    a.iter()
        .filter(|item| {
            let k = key(*item);
            !exclude.contains(&k) && seen.insert(k)
        })
        .collect()
}

/// Find devices `added` to `current` and `removed` since `previous`
pub fn diff(previous: &[DeviceRecord], current: &[DeviceRecord]) -> DiffResult {
    let added = set_difference(current, previous, DeviceRecord::canonical);
    let removed = set_difference(previous, current, DeviceRecord::canonical);
    log::trace!("Diff {} added, {} removed", added.len(), removed.len());

    DiffResult {
        added: added.into_iter().cloned().collect(),
        removed: removed.into_iter().cloned().collect(),
    }
}
