//! Binary neighbor relations over spatial units
//!
//! A [`NeighborRelation`] is the minimal view of a spatial weights object
//! that the inequality decompositions need: a symmetric, irreflexive binary
//! relation over unit indices. It answers "is i a neighbor of j" and counts
//! neighbor pairs; it never constructs weights from geometry.
//!
//! Two constructions are supported:
//!
//! - [`NeighborRelation::from_adjacency`], for relations exported from an
//!   external spatial weights library (e.g. contiguity weights), and
//! - [`NeighborRelation::block`], where two units are neighbors iff they
//!   carry the same group label (block weights over a regionalization).

use crate::error::{Error, Result};

/// Symmetric binary neighbor relation over `n` spatial units
///
/// Stored as per-unit sorted adjacency lists. The diagonal is excluded by
/// construction and symmetry is validated eagerly, so downstream code can
/// rely on `i ~ j ⟺ j ~ i` without re-checking.
#[derive(Debug, Clone)]
pub struct NeighborRelation {
    neighbors: Vec<Vec<usize>>,
    n_links: usize,
}

impl NeighborRelation {
    /// Build a relation from per-unit adjacency lists.
    ///
    /// Validates index bounds, absence of self-links and duplicates, and
    /// symmetry. Any violation is an [`Error::InvalidInput`].
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let n = adjacency.len();
        if n < 2 {
            return Err(Error::too_few(2, n));
        }

        let mut neighbors = adjacency;
        let mut n_links = 0;
        for (i, list) in neighbors.iter_mut().enumerate() {
            list.sort_unstable();
            for pair in list.windows(2) {
                if pair[0] == pair[1] {
                    return Err(Error::InvalidInput(format!(
                        "duplicate neighbor {} for unit {i}",
                        pair[0]
                    )));
                }
            }
            for &j in list.iter() {
                if j >= n {
                    return Err(Error::InvalidInput(format!(
                        "neighbor index {j} out of range for {n} units"
                    )));
                }
                if j == i {
                    return Err(Error::InvalidInput(format!("unit {i} listed as its own neighbor")));
                }
            }
            n_links += list.len();
        }

        // Symmetry: every directed link must have its reverse.
        for (i, list) in neighbors.iter().enumerate() {
            for &j in list {
                if neighbors[j].binary_search(&i).is_err() {
                    return Err(Error::InvalidInput(format!(
                        "asymmetric relation: {i} -> {j} has no reverse link"
                    )));
                }
            }
        }

        Ok(Self { neighbors, n_links })
    }

    /// Build block weights from a group label per unit: two units are
    /// neighbors iff they share a label.
    pub fn block<L: Ord>(labels: &[L]) -> Result<Self> {
        let n = labels.len();
        if n < 2 {
            return Err(Error::too_few(2, n));
        }
        let mut neighbors = vec![Vec::new(); n];
        let mut n_links = 0;
        for i in 0..n {
            for j in 0..n {
                if i != j && labels[i] == labels[j] {
                    neighbors[i].push(j);
                    n_links += 1;
                }
            }
        }
        Ok(Self { neighbors, n_links })
    }

    /// Number of spatial units.
    pub fn n_units(&self) -> usize {
        self.neighbors.len()
    }

    /// Sorted neighbor indices of unit `i`.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// Whether units `i` and `j` are neighbors. Units are never their own
    /// neighbors.
    pub fn is_neighbor(&self, i: usize, j: usize) -> bool {
        i != j && self.neighbors[i].binary_search(&j).is_ok()
    }

    /// Number of directed links (twice the number of unordered neighbor
    /// pairs; `s0` of a binary weights matrix).
    pub fn n_links(&self) -> usize {
        self.n_links
    }

    /// Number of unordered neighbor pairs.
    pub fn n_neighbor_pairs(&self) -> usize {
        self.n_links / 2
    }

    /// Total number of unordered pairs, `n(n-1)/2`.
    pub fn n_total_pairs(&self) -> usize {
        let n = self.n_units();
        n * (n - 1) / 2
    }

    /// Number of unordered non-neighbor pairs.
    pub fn n_distant_pairs(&self) -> usize {
        self.n_total_pairs() - self.n_neighbor_pairs()
    }
}
