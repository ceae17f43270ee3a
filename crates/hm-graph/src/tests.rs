//! Unit tests for hm-graph.
//!
//! All tests use hand-crafted networks.

#[cfg(test)]
mod helpers {
    use hm_core::LocalityId;
    use crate::LocalityGraph;

    /// Small one-way network:
    ///
    /// ```text
    ///   1 ──▶ 2 ──▶ 3 ──▶ 4(H)
    ///   │                  ▲
    ///   └──▶ 5 ──▶ 6(H)    │
    ///        └─────────────┘
    /// ```
    ///
    /// From 1 both hospitals are 2 hops away via 5; 4 has the lower id.
    pub fn branching_network() -> (LocalityGraph, [LocalityId; 6]) {
        let mut g = LocalityGraph::new(16);
        let ids = [
            g.add_locality("Centro", false).unwrap(),
            g.add_locality("Norte", false).unwrap(),
            g.add_locality("Vila Nova", false).unwrap(),
            g.add_locality("Santa Luzia", true).unwrap(),
            g.add_locality("Sul", false).unwrap(),
            g.add_locality("Porto", true).unwrap(),
        ];
        let [c, n, v, s, sul, p] = ids;
        g.add_road(c, n).unwrap();
        g.add_road(n, v).unwrap();
        g.add_road(v, s).unwrap();
        g.add_road(c, sul).unwrap();
        g.add_road(sul, p).unwrap();
        g.add_road(sul, s).unwrap();
        (g, ids)
    }
}

// ── Registration ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use hm_core::LocalityId;
    use crate::{GraphError, LocalityGraph};

    #[test]
    fn ids_are_sequential_from_one() {
        let mut g = LocalityGraph::new(100);
        let ids: Vec<_> = (0..10)
            .map(|i| g.add_locality(format!("L{i}"), i % 3 == 0).unwrap())
            .collect();
        let expected: Vec<_> = (1..=10).map(LocalityId).collect();
        assert_eq!(ids, expected);
        assert_eq!(g.len(), 10);
    }

    #[test]
    fn locality_lookup() {
        let mut g = LocalityGraph::new(4);
        let a = g.add_locality("Centro", true).unwrap();
        let loc = g.locality(a).unwrap();
        assert_eq!(loc.name, "Centro");
        assert!(loc.has_hospital);
        assert!(g.locality(LocalityId(0)).is_none());
        assert!(g.locality(LocalityId(2)).is_none());
    }

    #[test]
    fn capacity_is_enforced_and_recoverable() {
        let mut g = LocalityGraph::new(2);
        g.add_locality("A", false).unwrap();
        g.add_locality("B", false).unwrap();
        assert_eq!(
            g.add_locality("C", false),
            Err(GraphError::CapacityExceeded { max: 2 })
        );
        // Failed call leaves the graph untouched.
        assert_eq!(g.len(), 2);
        assert!(g.add_road(LocalityId(1), LocalityId(2)).is_ok());
    }

    #[test]
    fn road_with_unknown_endpoint_rejected() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        for bad in [LocalityId(0), LocalityId(2), LocalityId(999)] {
            assert_eq!(
                g.add_road(a, bad),
                Err(GraphError::InvalidLocality { id: bad, count: 1 })
            );
            assert!(g.add_road(bad, a).is_err());
        }
        assert_eq!(g.road_count(), 0);
    }

    #[test]
    fn duplicate_road_is_idempotent() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        let b = g.add_locality("B", false).unwrap();
        assert_eq!(g.add_road(a, b), Ok(true));
        assert_eq!(g.add_road(a, b), Ok(false));
        assert_eq!(g.road_count(), 1);
        assert_eq!(g.out_neighbors(a).unwrap(), &[b]);
    }

    #[test]
    fn roads_are_one_way() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        let b = g.add_locality("B", false).unwrap();
        g.add_road(a, b).unwrap();
        assert!(g.has_road(a, b));
        assert!(!g.has_road(b, a));
        assert!(g.out_neighbors(b).unwrap().is_empty());
    }

    #[test]
    fn neighbors_sorted_regardless_of_insertion_order() {
        let mut g = LocalityGraph::new(8);
        let ids: Vec<_> = (0..5).map(|i| g.add_locality(format!("L{i}"), false).unwrap()).collect();
        for &to in [ids[4], ids[1], ids[3], ids[2]].iter() {
            g.add_road(ids[0], to).unwrap();
        }
        assert_eq!(g.out_neighbors(ids[0]).unwrap(), &ids[1..]);
    }
}

// ── Reachability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reachability {
    use hm_core::LocalityId;
    use crate::GraphError;

    #[test]
    fn bfs_discovery_order() {
        let (g, [c, n, v, s, sul, p]) = super::helpers::branching_network();
        assert_eq!(g.reachable_from(c).unwrap(), vec![c, n, sul, v, s, p]);
    }

    #[test]
    fn reverse_direction_not_reachable() {
        let (g, [c, _, _, s, _, _]) = super::helpers::branching_network();
        assert_eq!(g.reachable_from(s).unwrap(), vec![s]);
        assert!(!g.reachable_from(s).unwrap().contains(&c));
    }

    #[test]
    fn cycles_visit_each_locality_once() {
        let mut g = crate::LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        let b = g.add_locality("B", false).unwrap();
        let c = g.add_locality("C", false).unwrap();
        g.add_road(a, b).unwrap();
        g.add_road(b, c).unwrap();
        g.add_road(c, a).unwrap();
        assert_eq!(g.reachable_from(b).unwrap(), vec![b, c, a]);
    }

    #[test]
    fn unknown_start_rejected() {
        let (g, _) = super::helpers::branching_network();
        assert_eq!(
            g.reachable_from(LocalityId(7)),
            Err(GraphError::InvalidLocality { id: LocalityId(7), count: 6 })
        );
    }
}

// ── Nearest hospital ──────────────────────────────────────────────────────────

#[cfg(test)]
mod hospital {
    use hm_core::LocalityId;
    use crate::{GraphError, LocalityGraph};

    #[test]
    fn one_hop_scenario() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        let b = g.add_locality("B", true).unwrap();
        g.add_road(a, b).unwrap();

        let route = g.nearest_hospital(a).unwrap();
        assert_eq!(route.hospital, b);
        assert_eq!(route.hops, 1);
        assert_eq!(route.path, vec![a, b]);
    }

    #[test]
    fn isolated_locality_without_hospital() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        assert_eq!(g.nearest_hospital(a), Err(GraphError::NoHospitalReachable { from: a }));
    }

    #[test]
    fn start_with_hospital_is_zero_hops() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", true).unwrap();
        let b = g.add_locality("B", true).unwrap();
        g.add_road(a, b).unwrap();

        let route = g.nearest_hospital(a).unwrap();
        assert_eq!(route.hospital, a);
        assert!(route.is_trivial());
        assert_eq!(route.path, vec![a]);
    }

    #[test]
    fn fewest_hops_wins_over_lower_id() {
        let (g, [c, _, _, s, sul, _]) = super::helpers::branching_network();
        // Via 2→3 the hospital at 4 is 3 hops; via 5 it is 2.
        let route = g.nearest_hospital(c).unwrap();
        assert_eq!(route.hops, 2);
        assert_eq!(route.hospital, s);
        assert_eq!(route.path, vec![c, sul, s]);
    }

    #[test]
    fn hospital_only_behind_wrong_way_road() {
        let mut g = LocalityGraph::new(8);
        let a = g.add_locality("A", false).unwrap();
        let h = g.add_locality("H", true).unwrap();
        g.add_road(h, a).unwrap();
        assert!(matches!(
            g.nearest_hospital(a),
            Err(GraphError::NoHospitalReachable { .. })
        ));
    }

    #[test]
    fn invalid_start() {
        let (g, _) = super::helpers::branching_network();
        assert!(matches!(
            g.nearest_hospital(LocalityId(0)),
            Err(GraphError::InvalidLocality { .. })
        ));
    }

    #[test]
    fn long_chain() {
        let mut g = LocalityGraph::new(1_000);
        let ids: Vec<_> = (0..1_000)
            .map(|i| g.add_locality(format!("L{i}"), i == 999).unwrap())
            .collect();
        for w in ids.windows(2) {
            g.add_road(w[0], w[1]).unwrap();
        }
        let route = g.nearest_hospital(ids[0]).unwrap();
        assert_eq!(route.hops, 999);
        assert_eq!(route.hospital, LocalityId(1_000));
    }
}
