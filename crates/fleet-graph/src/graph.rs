//! Weighted undirected graph over named delivery locations.
//!
//! # Data layout
//!
//! The adjacency structure is a row-per-vertex matrix: cell `(i, j)` holds
//! the non-negative mileage between vertices `i` and `j`, symmetric for
//! undirected edges, with a zero diagonal.  A zero off-diagonal cell means
//! "no edge".  The matrix form trades memory for O(1) weight reads, which is
//! the right trade at this scale — vertex counts are in the tens, and the
//! nearest-neighbor planner reads weights in a tight loop.
//!
//! Vertices are appended and never removed; the insertion index is the
//! stable [`NodeId`].  **Vertex 0 is the depot hub by convention** — every
//! vehicle tour starts and ends there.

use fleet_core::{Location, NodeId};

/// Distance matrix plus the vertex list that indexes it.
#[derive(Clone, Debug, Default)]
pub struct DistanceGraph {
    vertices: Vec<Location>,
    rows: Vec<Vec<f64>>,
}

impl DistanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected vertex count.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            rows: Vec::with_capacity(vertices),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The depot hub — vertex 0, the fixed start and end of every tour.
    #[inline]
    pub fn hub(&self) -> NodeId {
        NodeId(0)
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Append a vertex and return its `NodeId` (sequential from 0).
    ///
    /// Grows the matrix by one row and one column, all cells zeroed.
    /// O(vertices) per call.
    pub fn add_vertex(&mut self, location: Location) -> NodeId {
        let id = NodeId(self.vertices.len() as u32);
        self.vertices.push(location);
        for row in &mut self.rows {
            row.push(0.0);
        }
        self.rows.push(vec![0.0; self.vertices.len()]);
        id
    }

    /// Set the undirected edge weight between two vertices by location.
    ///
    /// Writes both `(a, b)` and `(b, a)` cells.  A silent no-op when either
    /// location is not in the graph.
    pub fn add_edge(&mut self, a: &Location, b: &Location, miles: f64) {
        if let (Some(a), Some(b)) = (self.node_of(a), self.node_of(b)) {
            self.add_edge_ids(a, b, miles);
        }
    }

    /// Set the undirected edge weight between two vertices by id.
    ///
    /// A silent no-op when either id is out of range.
    pub fn add_edge_ids(&mut self, a: NodeId, b: NodeId, miles: f64) {
        if a.index() >= self.len() || b.index() >= self.len() {
            return;
        }
        self.rows[a.index()][b.index()] = miles;
        self.rows[b.index()][a.index()] = miles;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// O(1) cell read.  Zero means "no edge" (or the diagonal, or an
    /// out-of-range id) — absent is "no match", never an error.
    #[inline]
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> f64 {
        match self.rows.get(a.index()) {
            Some(row) => row.get(b.index()).copied().unwrap_or(0.0),
            None => 0.0,
        }
    }

    /// All vertices with a nonzero cell in `node`'s row.  O(vertices).
    pub fn adjacent(&self, node: NodeId) -> Vec<NodeId> {
        match self.rows.get(node.index()) {
            None => Vec::new(),
            Some(row) => row
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w > 0.0)
                .map(|(j, _)| NodeId(j as u32))
                .collect(),
        }
    }

    /// The location wrapped by a vertex.
    pub fn vertex(&self, node: NodeId) -> Option<&Location> {
        self.vertices.get(node.index())
    }

    /// Linear scan for the vertex wrapping `location` (street/zip identity).
    /// O(vertices) — fine at tens of vertices.
    pub fn node_of(&self, location: &Location) -> Option<NodeId> {
        self.vertices
            .iter()
            .position(|v| v == location)
            .map(|i| NodeId(i as u32))
    }

    /// Linear scan by the vertex's name label.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.vertices
            .iter()
            .position(|v| v.name == name)
            .map(|i| NodeId(i as u32))
    }

    /// Iterate `(NodeId, &Location)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Location)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, loc)| (NodeId(i as u32), loc))
    }
}
