//! Unit tests for the distance graph and tour planner.

use fleet_core::{Location, NodeId};

use crate::{DistanceGraph, RouteStop, TourPlanner};

fn loc(street: &str, name: &str) -> Location {
    Location::new(street, "Salt Lake City", "UT", "84101").named(name)
}

/// Hub plus two stops: hub—A = 3, hub—B = 5, A—B = 4.
fn triangle() -> DistanceGraph {
    let mut g = DistanceGraph::new();
    let hub = g.add_vertex(loc("4001 S 700 E", "Hub"));
    let a = g.add_vertex(loc("100 A St", "A"));
    let b = g.add_vertex(loc("200 B St", "B"));
    g.add_edge_ids(hub, a, 3.0);
    g.add_edge_ids(hub, b, 5.0);
    g.add_edge_ids(a, b, 4.0);
    g
}

#[cfg(test)]
mod graph {
    use super::*;

    #[test]
    fn vertices_indexed_in_insertion_order() {
        let g = triangle();
        assert_eq!(g.len(), 3);
        assert_eq!(g.hub(), NodeId(0));
        assert_eq!(g.vertex(NodeId(1)).unwrap().name, "A");
        assert!(g.vertex(NodeId(3)).is_none());
    }

    #[test]
    fn matrix_grows_with_zeroed_cells() {
        let mut g = triangle();
        let c = g.add_vertex(loc("300 C St", "C"));
        // New row and column exist and read zero against every vertex.
        for i in 0..g.len() {
            assert_eq!(g.edge_weight(c, NodeId(i as u32)), 0.0);
            assert_eq!(g.edge_weight(NodeId(i as u32), c), 0.0);
        }
    }

    #[test]
    fn edges_are_symmetric() {
        let g = triangle();
        assert_eq!(g.edge_weight(NodeId(0), NodeId(1)), 3.0);
        assert_eq!(g.edge_weight(NodeId(1), NodeId(0)), 3.0);
        assert_eq!(g.edge_weight(NodeId(1), NodeId(1)), 0.0, "diagonal stays zero");
    }

    #[test]
    fn add_edge_by_location_ignores_unknown_vertices() {
        let mut g = triangle();
        let known = loc("100 A St", "");
        let unknown = loc("999 Nowhere Rd", "");
        g.add_edge(&known, &unknown, 7.0);
        // Nothing changed anywhere in the matrix.
        assert_eq!(g.adjacent(NodeId(1)).len(), 2);
    }

    #[test]
    fn adjacency_lists_nonzero_cells() {
        let mut g = triangle();
        let c = g.add_vertex(loc("300 C St", "C"));
        assert_eq!(g.adjacent(NodeId(0)), vec![NodeId(1), NodeId(2)]);
        assert!(g.adjacent(c).is_empty());
        assert!(g.adjacent(NodeId(9)).is_empty());
    }

    #[test]
    fn lookup_by_location_uses_street_zip_identity() {
        let g = triangle();
        // Different name and city, same street/zip — still vertex 1.
        let probe = Location::new("100 A St", "Murray", "UT", "84101");
        assert_eq!(g.node_of(&probe), Some(NodeId(1)));
        assert_eq!(g.node_by_name("B"), Some(NodeId(2)));
        assert_eq!(g.node_by_name("Z"), None);
    }
}

#[cfg(test)]
mod tour {
    use super::*;

    fn nodes(stops: &[RouteStop]) -> Vec<u32> {
        stops.iter().map(|s| s.node.0).collect()
    }

    #[test]
    fn nearest_neighbor_takes_closest_first() {
        // hub → A (3) → B (4) → hub (5): total 12.
        let g = triangle();
        let tour = TourPlanner::new(&g).plan(g.hub(), &[NodeId(1), NodeId(2)]);
        assert_eq!(nodes(&tour), vec![0, 1, 2, 0]);
        let miles: Vec<f64> = tour.iter().map(|s| s.cumulative_miles).collect();
        assert_eq!(miles, vec![0.0, 3.0, 7.0, 12.0]);
    }

    #[test]
    fn target_order_does_not_change_the_tour() {
        let g = triangle();
        let tour = TourPlanner::new(&g).plan(g.hub(), &[NodeId(2), NodeId(1)]);
        assert_eq!(nodes(&tour), vec![0, 1, 2, 0]);
    }

    #[test]
    fn equal_distances_break_by_encounter_order() {
        let mut g = DistanceGraph::new();
        let hub = g.add_vertex(loc("4001 S 700 E", "Hub"));
        let a = g.add_vertex(loc("100 A St", "A"));
        let b = g.add_vertex(loc("200 B St", "B"));
        g.add_edge_ids(hub, a, 2.0);
        g.add_edge_ids(hub, b, 2.0);
        g.add_edge_ids(a, b, 2.0);
        let tour = TourPlanner::new(&g).plan(hub, &[a, b]);
        // A was inserted (and listed) first, so it wins the tie.
        assert_eq!(nodes(&tour), vec![0, 1, 2, 0]);
    }

    #[test]
    fn zero_targets_is_the_trivial_tour() {
        let g = triangle();
        let tour = TourPlanner::new(&g).plan(g.hub(), &[]);
        assert_eq!(nodes(&tour), vec![0, 0]);
        assert_eq!(tour[1].cumulative_miles, 0.0);
    }

    #[test]
    fn single_target_is_out_and_back() {
        let g = triangle();
        let tour = TourPlanner::new(&g).plan(g.hub(), &[NodeId(2)]);
        assert_eq!(nodes(&tour), vec![0, 2, 0]);
        assert_eq!(tour[2].cumulative_miles, 10.0);
    }

    #[test]
    fn duplicates_and_start_collapse() {
        let g = triangle();
        let tour = TourPlanner::new(&g)
            .plan(g.hub(), &[NodeId(1), NodeId(1), g.hub(), NodeId(2), NodeId(1)]);
        assert_eq!(nodes(&tour), vec![0, 1, 2, 0]);
    }

    #[test]
    fn every_target_visited_exactly_once() {
        // A 6-vertex complete graph with arbitrary weights.
        let mut g = DistanceGraph::new();
        let ids: Vec<NodeId> = (0..6)
            .map(|i| g.add_vertex(loc(&format!("{i}00 Grid St"), &format!("V{i}"))))
            .collect();
        for i in 0..6u32 {
            for j in (i + 1)..6 {
                g.add_edge_ids(NodeId(i), NodeId(j), (i * 7 + j * 3) as f64 % 11.0 + 1.0);
            }
        }
        let tour = TourPlanner::new(&g).plan(NodeId(0), &ids[1..]);
        assert_eq!(tour.len(), 7);
        assert_eq!(tour[0].node, NodeId(0));
        assert_eq!(tour[6].node, NodeId(0));
        let mut middle: Vec<u32> = tour[1..6].iter().map(|s| s.node.0).collect();
        middle.sort_unstable();
        assert_eq!(middle, vec![1, 2, 3, 4, 5]);
        // Cumulative mileage never decreases.
        for pair in tour.windows(2) {
            assert!(pair[1].cumulative_miles >= pair[0].cumulative_miles);
        }
    }
}
