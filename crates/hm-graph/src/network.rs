//! Locality storage and directed road adjacency.
//!
//! # Data layout
//!
//! Localities live in a `Vec` indexed by `LocalityId::slot()` (id − 1).
//! Each locality has an outgoing adjacency list, kept sorted by destination
//! id and free of duplicates, so:
//!
//! - lookup by id is O(1),
//! - re-registering a road is detected with a binary search and ignored,
//! - neighbor enumeration is a contiguous scan in ascending id order, which
//!   fixes the tie-break between equally distant hospitals.
//!
//! Roads are one-way.  `a → b` says nothing about `b → a`.

use tracing::{debug, trace};

use hm_core::LocalityId;

use crate::{GraphError, GraphResult};

// ── Locality ──────────────────────────────────────────────────────────────────

/// A node of the road network.  Never mutated after registration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locality {
    pub id:           LocalityId,
    pub name:         String,
    pub has_hospital: bool,
}

// ── LocalityGraph ─────────────────────────────────────────────────────────────

/// Bounded-capacity directed graph of localities.
#[derive(Clone, Debug)]
pub struct LocalityGraph {
    localities:     Vec<Locality>,
    /// Outgoing neighbors per slot, ascending, deduplicated.
    adjacency:      Vec<Vec<LocalityId>>,
    road_count:     usize,
    max_localities: usize,
}

impl LocalityGraph {
    /// Empty graph accepting at most `max_localities` localities.
    pub fn new(max_localities: usize) -> Self {
        Self {
            localities: Vec::new(),
            adjacency:  Vec::new(),
            road_count: 0,
            max_localities,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.localities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.localities.is_empty()
    }

    pub fn road_count(&self) -> usize {
        self.road_count
    }

    pub fn max_localities(&self) -> usize {
        self.max_localities
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a locality and return its id (`1`, `2`, … in call order).
    pub fn add_locality(&mut self, name: impl Into<String>, has_hospital: bool) -> GraphResult<LocalityId> {
        if self.localities.len() >= self.max_localities {
            return Err(GraphError::CapacityExceeded { max: self.max_localities });
        }
        let id = LocalityId::from_slot(self.localities.len())
            .ok_or(GraphError::CapacityExceeded { max: self.max_localities })?;

        let name = name.into();
        debug!(%id, name = %name, has_hospital, "locality registered");
        self.localities.push(Locality { id, name, has_hospital });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Record a one-way road `from → to`.
    ///
    /// Returns `true` if the road is new and `false` if it was already
    /// present; both are success.
    pub fn add_road(&mut self, from: LocalityId, to: LocalityId) -> GraphResult<bool> {
        let from_slot = self.slot(from)?;
        self.slot(to)?;

        let out = &mut self.adjacency[from_slot];
        match out.binary_search(&to) {
            Ok(_) => {
                trace!(%from, %to, "road already present");
                Ok(false)
            }
            Err(pos) => {
                out.insert(pos, to);
                self.road_count += 1;
                debug!(%from, %to, "road registered");
                Ok(true)
            }
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Validate `id` against the registered range and return its slot.
    pub fn slot(&self, id: LocalityId) -> GraphResult<usize> {
        id.slot()
            .filter(|&s| s < self.localities.len())
            .ok_or(GraphError::InvalidLocality { id, count: self.localities.len() })
    }

    pub fn contains(&self, id: LocalityId) -> bool {
        self.slot(id).is_ok()
    }

    pub fn locality(&self, id: LocalityId) -> Option<&Locality> {
        id.slot().and_then(|s| self.localities.get(s))
    }

    /// All localities in id order.
    pub fn localities(&self) -> &[Locality] {
        &self.localities
    }

    pub fn has_road(&self, from: LocalityId, to: LocalityId) -> bool {
        self.slot(from)
            .map(|s| self.adjacency[s].binary_search(&to).is_ok())
            .unwrap_or(false)
    }

    /// Destinations of the roads leaving `id`, ascending.
    pub fn out_neighbors(&self, id: LocalityId) -> GraphResult<&[LocalityId]> {
        let s = self.slot(id)?;
        Ok(&self.adjacency[s])
    }

    #[inline]
    pub(crate) fn neighbors_of_slot(&self, slot: usize) -> &[LocalityId] {
        &self.adjacency[slot]
    }

    #[inline]
    pub(crate) fn locality_at(&self, slot: usize) -> &Locality {
        &self.localities[slot]
    }
}
