use std::collections::BTreeSet;

/// Identifier of a vertex: an index in `0..graph.vertex_count()`.
pub type Vertex = usize;

/// One directional record of an undirected edge.
///
/// Every undirected edge `{a, b}` is stored twice, as `Edge(a, b)` in the
/// set for `a` and as `Edge(b, a)` in the set for `b`. Ordering is by the
/// first vertex, then the second, which fixes the order neighbors come back
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    origin: Vertex,
    target: Vertex,
}

impl Edge {
    pub fn new(origin: Vertex, target: Vertex) -> Self {
        Edge { origin, target }
    }

    pub fn origin(&self) -> Vertex {
        self.origin
    }

    pub fn target(&self) -> Vertex {
        self.target
    }
}

/// Undirected simple graph with a vertex count fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    edges: Vec<BTreeSet<Edge>>,
}

impl UndirectedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        UndirectedGraph {
            edges: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// True if an edge between `a` and `b` exists. Out-of-range vertices are
    /// never adjacent to anything.
    pub fn are_adjacent(&self, a: Vertex, b: Vertex) -> bool {
        self.edges
            .get(a)
            .is_some_and(|set| set.contains(&Edge::new(a, b)))
    }

    /// Insert the edge `{a, b}`. Returns false, leaving the graph untouched,
    /// if the edge already exists, if `a == b`, or if either vertex is out of
    /// range.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        if a == b || a >= self.vertex_count() || b >= self.vertex_count() {
            return false;
        }
        if self.are_adjacent(a, b) || self.are_adjacent(b, a) {
            return false;
        }
        self.edges[a].insert(Edge::new(a, b));
        self.edges[b].insert(Edge::new(b, a));
        true
    }

    /// Remove the edge `{a, b}` if present.
    pub fn remove_edge(&mut self, a: Vertex, b: Vertex) {
        if let Some(set) = self.edges.get_mut(a) {
            set.remove(&Edge::new(a, b));
        }
        if let Some(set) = self.edges.get_mut(b) {
            set.remove(&Edge::new(b, a));
        }
    }

    /// Vertices adjacent to `a`, in ascending order.
    pub fn neighbors(&self, a: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.edges
            .get(a)
            .into_iter()
            .flat_map(|set| set.iter().map(Edge::target))
    }
}
