//! Nearest-neighbor tour construction.
//!
//! # Heuristic, not optimal
//!
//! The planner greedily hops to the closest unvisited stop.  This is O(V²)
//! per vehicle and can be arbitrarily worse than the optimal tour; the
//! design accepts suboptimality for simplicity and speed.  Do not "fix"
//! this to exact TSP — the route shape is part of the system's observable
//! contract.
//!
//! Ties on exactly equal distances break by encounter order: the scan keeps
//! the first candidate that achieves the minimum, and candidates are scanned
//! in the order given, which callers keep at vertex insertion order so
//! routes are reproducible.

use fleet_core::NodeId;

use crate::graph::DistanceGraph;

/// One tour stop with the running mileage from the start vertex.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RouteStop {
    pub node: NodeId,
    pub cumulative_miles: f64,
}

/// Plans nearest-neighbor tours over a [`DistanceGraph`].
pub struct TourPlanner<'g> {
    graph: &'g DistanceGraph,
}

impl<'g> TourPlanner<'g> {
    pub fn new(graph: &'g DistanceGraph) -> Self {
        Self { graph }
    }

    /// Build a tour starting and ending at `start`, visiting every distinct
    /// vertex of `targets` exactly once in between.
    ///
    /// `targets` may repeat vertices or include `start`; duplicates collapse
    /// to their first occurrence and `start` itself is skipped.  Zero
    /// remaining targets yield the trivial `start → start` tour.
    pub fn plan(&self, start: NodeId, targets: &[NodeId]) -> Vec<RouteStop> {
        let mut unvisited: Vec<NodeId> = Vec::with_capacity(targets.len());
        for &t in targets {
            if t != start && t.index() < self.graph.len() && !unvisited.contains(&t) {
                unvisited.push(t);
            }
        }

        let mut stops = Vec::with_capacity(unvisited.len() + 2);
        stops.push(RouteStop { node: start, cumulative_miles: 0.0 });

        let mut current = start;
        let mut total = 0.0;

        while !unvisited.is_empty() {
            // First index wins on ties — strict `<` never replaces an equal.
            let mut best = 0;
            for i in 1..unvisited.len() {
                if self.graph.edge_weight(current, unvisited[i])
                    < self.graph.edge_weight(current, unvisited[best])
                {
                    best = i;
                }
            }
            let next = unvisited.remove(best);
            total += self.graph.edge_weight(current, next);
            stops.push(RouteStop { node: next, cumulative_miles: total });
            current = next;
        }

        // Close the loop back at the start vertex.
        total += self.graph.edge_weight(current, start);
        stops.push(RouteStop { node: start, cumulative_miles: total });

        stops
    }
}
