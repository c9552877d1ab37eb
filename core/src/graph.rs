use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Edge weight. Signed so invalid negative weights can be represented and
/// rejected; wide enough that accumulated path distances don't overflow.
pub type Weight = i64;

/// Directed weighted graph stored as per-vertex outgoing adjacency maps.
///
/// Vertices are compared by value, so two separately constructed but equal
/// keys address the same vertex. At most one edge exists per ordered vertex
/// pair, and an edge (u, v) does not imply (v, u).
#[derive(Debug, Clone)]
pub struct WeightedGraph<T> {
    adjacency: FxHashMap<T, FxHashMap<T, Weight>>,
    edge_count: usize,
}

impl<T: Clone + Eq + Hash> Default for WeightedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> WeightedGraph<T> {
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Creates a graph pre-populated with the given vertices and no edges.
    pub fn with_vertices(vertices: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Adds a vertex with an empty outgoing-edge set.
    ///
    /// Returns false (and leaves the graph untouched) if the vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.adjacency.insert(vertex, FxHashMap::default());
        true
    }

    /// Adds the directed edge (from, to) with the given weight.
    ///
    /// Returns false if either endpoint is unknown, the weight is negative,
    /// or the edge already exists; the graph is not modified in that case.
    pub fn add_edge(&mut self, from: T, to: T, weight: Weight) -> bool {
        if weight < 0 || !self.adjacency.contains_key(&to) {
            return false;
        }

        let Some(out_edges) = self.adjacency.get_mut(&from) else {
            return false;
        };

        if out_edges.contains_key(&to) {
            return false;
        }

        out_edges.insert(to, weight);
        self.edge_count += 1;
        true
    }

    pub fn has_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|out_edges| out_edges.contains_key(to))
    }

    /// Outgoing neighbors of a vertex with their edge weights.
    ///
    /// Unknown vertices yield an empty iterator.
    pub fn neighbors(&self, vertex: &T) -> impl Iterator<Item = (&T, Weight)> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|(target, weight)| (target, *weight))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Inserts an edge without any validation. Exists only so tests can
    /// construct graphs the public API refuses, e.g. negative weights.
    #[cfg(test)]
    pub(crate) fn force_edge(&mut self, from: T, to: T, weight: Weight) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to, weight);
        self.edge_count += 1;
    }
}
