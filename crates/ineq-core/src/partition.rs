//! Exhaustive group partitions of spatial units
//!
//! A [`GroupPartition`] assigns every unit to exactly one group, the way a
//! regionalization assigns states to regimes. It is the grouping structure
//! behind the Theil decomposition, and doubles as the input to block
//! weights.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// A partition of `0..n` into exhaustive, mutually exclusive groups
///
/// Group ids are dense (`0..n_groups`) and assigned in sorted label order,
/// so partitions built from equal label sets are identical regardless of
/// observation order.
#[derive(Debug, Clone)]
pub struct GroupPartition {
    ids: Vec<usize>,
    sizes: Vec<usize>,
}

impl GroupPartition {
    /// Build a partition from one label per unit.
    pub fn from_labels<L: Ord>(labels: &[L]) -> Result<Self> {
        if labels.len() < 2 {
            return Err(Error::too_few(2, labels.len()));
        }

        let mut id_of: BTreeMap<&L, usize> = labels.iter().map(|l| (l, 0)).collect();
        for (next, id) in id_of.values_mut().enumerate() {
            *id = next;
        }

        let ids: Vec<usize> = labels.iter().map(|l| id_of[l]).collect();
        let mut sizes = vec![0usize; id_of.len()];
        for &g in &ids {
            sizes[g] += 1;
        }

        Ok(Self { ids, sizes })
    }

    /// Number of units.
    pub fn n(&self) -> usize {
        self.ids.len()
    }

    /// Number of groups.
    pub fn n_groups(&self) -> usize {
        self.sizes.len()
    }

    /// Dense group id per unit.
    pub fn group_ids(&self) -> &[usize] {
        &self.ids
    }

    /// Group id of unit `i`.
    pub fn group_of(&self, i: usize) -> usize {
        self.ids[i]
    }

    /// Number of units per group. Every group is non-empty by construction.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Indices of the units in group `g`.
    pub fn members(&self, g: usize) -> Vec<usize> {
        self.ids
            .iter()
            .enumerate()
            .filter(|(_, &id)| id == g)
            .map(|(i, _)| i)
            .collect()
    }
}
