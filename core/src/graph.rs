/// Vertex index into the adjacency matrix, `0..vertex_count`.
pub type VertexId = usize;

/// Edge weight. Zero means "no edge"; any other value, negative included, is an edge.
pub type Weight = i32;

/// In-memory graph: a dense `n × n` weight matrix plus a directedness flag.
///
/// The vertex count is fixed at construction. When the graph is undirected
/// every edge is stored in both directions except self-loops, which occupy a
/// single diagonal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    directed: bool,
    /// Row-major, `weights[u * n + v]` is the weight of `u → v`.
    weights: Vec<Weight>,
}

impl Graph {
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            n: vertex_count,
            directed,
            weights: vec![0; vertex_count * vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.n
    }

    /// Weight of `u → v`, 0 when there is no edge or either index is out of range.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Weight {
        if self.contains(u) && self.contains(v) {
            self.weights[u * self.n + v]
        } else {
            0
        }
    }

    /// Row `u` of the matrix. Empty for an out-of-range vertex.
    pub fn row(&self, u: VertexId) -> &[Weight] {
        if self.contains(u) {
            &self.weights[u * self.n..(u + 1) * self.n]
        } else {
            &[]
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // chunks_exact(0) panics, and a 0-vertex graph has no rows anyway.
        self.weights.chunks_exact(self.n.max(1))
    }

    /// Out-neighbors of `u` with their weights, ascending by index.
    pub fn neighbors(&self, u: VertexId) -> impl DoubleEndedIterator<Item = (VertexId, Weight)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(v, &w)| (v, w))
    }

    fn set(&mut self, u: VertexId, v: VertexId, w: Weight) {
        self.weights[u * self.n + v] = w;
    }

    /// Set the weight of `u → v` (and `v → u` when undirected and `u != v`).
    /// Ignored when either endpoint is out of range.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, w: Weight) {
        if !self.contains(u) || !self.contains(v) {
            tracing::trace!(u, v, n = self.n, "add_edge out of range, ignored");
            return;
        }
        self.set(u, v, w);
        if !self.directed && u != v {
            self.set(v, u, w);
        }
    }

    /// Zero `u → v` (and `v → u` when undirected). Ignored when out of range.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        if !self.contains(u) || !self.contains(v) {
            tracing::trace!(u, v, n = self.n, "remove_edge out of range, ignored");
            return;
        }
        self.set(u, v, 0);
        if !self.directed {
            self.set(v, u, 0);
        }
    }

    /// Switch directedness. Going undirected symmetrizes the matrix: for each
    /// pair `i < j` with an edge either way, `[i][j]` wins if nonzero,
    /// otherwise `[j][i]` is copied over.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        if directed {
            return;
        }
        let n = self.n;
        for i in 0..n {
            for j in (i + 1)..n {
                let forward = self.weights[i * n + j];
                let backward = self.weights[j * n + i];
                if forward != 0 || backward != 0 {
                    let w = if forward != 0 { forward } else { backward };
                    self.set(i, j, w);
                    self.set(j, i, w);
                }
            }
        }
    }

    /// Zero every weight. Size and directedness are kept.
    pub fn clear(&mut self) {
        self.weights.fill(0);
    }

    /// Build a new graph without `vertex`, compacting the remaining indices in
    /// order. `self` is left untouched. An out-of-range `vertex` yields a copy.
    pub fn remove_vertex(&self, vertex: VertexId) -> Graph {
        if !self.contains(vertex) {
            return self.clone();
        }
        let m = self.n - 1;
        let mut weights = Vec::with_capacity(m * m);
        for (i, row) in self.rows().enumerate() {
            if i == vertex {
                continue;
            }
            weights.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != vertex)
                    .map(|(_, &w)| w),
            );
        }
        Graph {
            n: m,
            directed: self.directed,
            weights,
        }
    }

    pub fn edge_count(&self) -> usize {
        let nonzero = self.weights.iter().filter(|&&w| w != 0).count();
        if self.directed {
            nonzero
        } else {
            let loops = (0..self.n).filter(|&i| self.weights[i * self.n + i] != 0).count();
            (nonzero - loops) / 2 + loops
        }
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.weights.len() * std::mem::size_of::<Weight>()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(0, false)
    }
}
