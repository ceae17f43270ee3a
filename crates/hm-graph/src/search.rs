//! Breadth-first reachability over the locality graph.
//!
//! # Hop count, not distance
//!
//! Roads carry no length.  Breadth-first search expands localities in FIFO
//! order of discovery, so the first hospital dequeued is one with the fewest
//! directed hops from the start.  Among hospitals at the same hop count the
//! one discovered first wins; since neighbors are scanned in ascending id
//! order, that is deterministic.

use std::collections::VecDeque;

use tracing::debug;

use hm_core::LocalityId;

use crate::network::{Locality, LocalityGraph};
use crate::{GraphError, GraphResult};

// ── HospitalRoute ─────────────────────────────────────────────────────────────

/// Result of a successful hospital search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalRoute {
    /// The hospital locality reached.
    pub hospital: LocalityId,
    /// Directed roads traversed; `0` when the start has a hospital.
    pub hops: usize,
    /// Localities visited in order, start first, hospital last.
    pub path: Vec<LocalityId>,
}

impl HospitalRoute {
    /// `true` if the start locality is itself the hospital.
    pub fn is_trivial(&self) -> bool {
        self.hops == 0
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

impl LocalityGraph {
    /// Find the hospital locality with the fewest directed hops from `start`.
    ///
    /// The start is checked first and returned with zero hops if it has a
    /// hospital.  Fails with [`GraphError::InvalidLocality`] for an unknown
    /// start and [`GraphError::NoHospitalReachable`] once the frontier is
    /// exhausted.
    pub fn nearest_hospital(&self, start: LocalityId) -> GraphResult<HospitalRoute> {
        let found = breadth_first(self, start, |loc| loc.has_hospital)?;
        match found {
            Some((slot, prev)) => {
                let route = reconstruct(self, &prev, slot);
                debug!(%start, hospital = %route.hospital, hops = route.hops, "hospital found");
                Ok(route)
            }
            None => {
                debug!(%start, "no hospital reachable");
                Err(GraphError::NoHospitalReachable { from: start })
            }
        }
    }

    /// Every locality reachable from `start` (including `start`), in
    /// breadth-first discovery order.
    pub fn reachable_from(&self, start: LocalityId) -> GraphResult<Vec<LocalityId>> {
        let mut order = Vec::new();
        breadth_first(self, start, |loc| {
            order.push(loc.id);
            false
        })?;
        Ok(order)
    }
}

/// Predecessor slot per slot; `None` for the start and unreached localities.
type Predecessors = Vec<Option<usize>>;

/// Run BFS from `start`, calling `stop` on each dequeued locality.
///
/// Returns the slot `stop` accepted, with the predecessor table, or `None`
/// when every reachable locality was visited.
fn breadth_first<F>(
    graph: &LocalityGraph,
    start: LocalityId,
    mut stop: F,
) -> GraphResult<Option<(usize, Predecessors)>>
where
    F: FnMut(&Locality) -> bool,
{
    let start_slot = graph.slot(start)?;

    let n = graph.len();
    let mut visited = vec![false; n];
    let mut prev: Predecessors = vec![None; n];
    let mut queue = VecDeque::with_capacity(n);

    visited[start_slot] = true;
    queue.push_back(start_slot);

    while let Some(slot) = queue.pop_front() {
        if stop(graph.locality_at(slot)) {
            return Ok(Some((slot, prev)));
        }
        for next in graph.neighbors_of_slot(slot) {
            // Every stored neighbor passed validation in `add_road`.
            let Some(next_slot) = next.slot() else { continue };
            if !visited[next_slot] {
                visited[next_slot] = true;
                prev[next_slot] = Some(slot);
                queue.push_back(next_slot);
            }
        }
    }

    Ok(None)
}

fn reconstruct(graph: &LocalityGraph, prev: &Predecessors, target: usize) -> HospitalRoute {
    let mut path = vec![graph.locality_at(target).id];
    let mut cur = target;
    while let Some(p) = prev[cur] {
        path.push(graph.locality_at(p).id);
        cur = p;
    }
    path.reverse();
    HospitalRoute {
        hospital: graph.locality_at(target).id,
        hops:     path.len() - 1,
        path,
    }
}
