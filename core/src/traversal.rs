use crate::graph::{Graph, VertexId, Weight};
use crate::pq::MinPriorityQueue;
use crate::worklist::{Queue, Stack};

/// Distance reported to callers for a vertex with no path from the source.
pub const UNREACHABLE: i64 = 999_999;

/// One edge of a minimum spanning tree, `parent - child : weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MstEdge {
    pub parent: VertexId,
    pub child: VertexId,
    pub weight: Weight,
}

/// Heap capacity for Dijkstra and Prim. Every relaxation pushes at most one
/// entry per (finalized vertex, neighbor) pair, so `n²` always suffices.
fn queue_capacity(graph: &Graph) -> usize {
    graph.vertex_count().saturating_mul(graph.vertex_count())
}

/// Breadth-first visiting order from `start`.
///
/// Neighbors are scanned in ascending index order and marked when enqueued,
/// so no vertex is queued twice. Empty when `start` is out of range.
pub fn bfs(graph: &Graph, start: VertexId) -> Vec<VertexId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = Queue::new();

    visited[start] = true;
    queue.enqueue(start);

    while let Some(current) = queue.dequeue() {
        order.push(current);
        for (next, _) in graph.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                queue.enqueue(next);
            }
        }
    }

    order
}

/// Depth-first visiting order from `start`, smallest unvisited neighbor first.
///
/// Neighbors are pushed in descending index order and a vertex is marked only
/// when popped, so the stack may hold duplicates; already-visited pops are
/// skipped. Empty when `start` is out of range.
pub fn dfs(graph: &Graph, start: VertexId) -> Vec<VertexId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = Stack::new();

    stack.push(start);

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        for (next, _) in graph.neighbors(current).rev() {
            if !visited[next] {
                stack.push(next);
            }
        }
    }

    order
}

/// Single-source shortest path distances. `None` marks an unreachable vertex.
///
/// Intended for nonnegative weights. Stale heap entries are never updated in
/// place: an improved distance pushes a new entry and the finalized check at
/// pop time discards the old one. When `start` is out of range every vertex
/// is unreachable.
pub fn dijkstra(graph: &Graph, start: VertexId) -> Vec<Option<i64>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<i64>> = vec![None; n];
    if !graph.contains(start) {
        return dist;
    }

    let mut finalized = vec![false; n];
    let mut pq = MinPriorityQueue::with_capacity(queue_capacity(graph));

    dist[start] = Some(0);
    pq.push(start, 0);

    while let Some(entry) = pq.pop() {
        let u = entry.vertex;
        if finalized[u] {
            continue;
        }
        finalized[u] = true;

        let Some(du) = dist[u] else { continue };
        for (v, w) in graph.neighbors(u) {
            if finalized[v] {
                continue;
            }
            let candidate = du + i64::from(w);
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                pq.push(v, candidate);
            }
        }
    }

    dist
}

/// Prim's minimum spanning tree grown from vertex 0.
///
/// Edges come out in the order their child vertex is finalized, not sorted
/// by weight. Vertices outside vertex 0's component are left out. A directed
/// or empty graph yields no edges.
pub fn prim_mst(graph: &Graph) -> Vec<MstEdge> {
    let n = graph.vertex_count();
    if graph.is_directed() || n == 0 {
        return Vec::new();
    }

    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut pq = MinPriorityQueue::with_capacity(queue_capacity(graph));
    let mut edges = Vec::with_capacity(n - 1);

    key[0] = Some(0);
    pq.push(0, 0);

    while let Some(entry) = pq.pop() {
        let u = entry.vertex;
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        if let Some(p) = parent[u] {
            edges.push(MstEdge {
                parent: p,
                child: u,
                weight: graph.weight(p, u),
            });
        }

        for (v, w) in graph.neighbors(u) {
            if in_tree[v] {
                continue;
            }
            if key[v].map_or(true, |kv| w < kv) {
                key[v] = Some(w);
                parent[v] = Some(u);
                pq.push(v, i64::from(w));
            }
        }
    }

    edges
}

/// Total weight of an edge list.
pub fn total_weight(edges: &[MstEdge]) -> i64 {
    edges.iter().map(|e| i64::from(e.weight)).sum()
}
