//! Graph operations. Every function but `removeVertex` works on the graph in
//! place; `removeVertex` registers a new graph and returns its handle.

use dsviz_core::Graph;

use crate::encode;
use crate::error::Result;
use crate::state::{self, Handle, Instance};
use crate::util::{int32, vertex_count, vertex_index};

pub fn graph_new(vertex_count_raw: i64, directed: bool) -> Result<Handle> {
    let max = state::settings().max_vertices;
    let n = vertex_count(vertex_count_raw, max)?;
    Ok(state::register(Instance::Graph(Graph::new(n, directed))))
}

pub fn graph_add_edge(handle: Handle, u: i64, v: i64, weight: i64) -> Result<()> {
    let w = int32(weight, "weight")?;
    state::with_graph(handle, |g| g.add_edge(vertex_index(u), vertex_index(v), w))
}

pub fn graph_remove_edge(handle: Handle, u: i64, v: i64) -> Result<()> {
    state::with_graph(handle, |g| g.remove_edge(vertex_index(u), vertex_index(v)))
}

pub fn graph_set_directed(handle: Handle, directed: bool) -> Result<()> {
    state::with_graph(handle, |g| g.set_directed(directed))
}

pub fn graph_get_is_directed(handle: Handle) -> Result<bool> {
    state::with_graph(handle, |g| g.is_directed())
}

/// Register a copy of the graph without `vertex`. The source graph is left
/// as it was. An out-of-range vertex hands back `handle` itself.
pub fn graph_remove_vertex(handle: Handle, vertex: i64) -> Result<Handle> {
    let v = vertex_index(vertex);
    let reduced = state::with_graph(handle, |g| g.contains(v).then(|| g.remove_vertex(v)))?;
    Ok(match reduced {
        Some(g) => state::register(Instance::Graph(g)),
        None => handle,
    })
}

pub fn graph_get_matrix(handle: Handle) -> Result<String> {
    state::with_graph(handle, |g| encode::matrix(g))
}

pub fn graph_bfs(handle: Handle, start: i64) -> Result<String> {
    state::with_graph(handle, |g| encode::sequence(dsviz_core::bfs(g, vertex_index(start))))
}

pub fn graph_dfs(handle: Handle, start: i64) -> Result<String> {
    state::with_graph(handle, |g| encode::sequence(dsviz_core::dfs(g, vertex_index(start))))
}

pub fn graph_dijkstra(handle: Handle, start: i64) -> Result<String> {
    state::with_graph(handle, |g| {
        encode::distances(&dsviz_core::dijkstra(g, vertex_index(start)))
    })
}

pub fn graph_prim_mst(handle: Handle) -> Result<String> {
    state::with_graph(handle, |g| encode::mst(&dsviz_core::prim_mst(g)))
}

pub fn graph_clear(handle: Handle) -> Result<()> {
    state::with_graph(handle, |g| g.clear())
}

pub fn graph_get_vertex_count(handle: Handle) -> Result<i64> {
    state::with_graph(handle, |g| g.vertex_count() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtError;

    fn square() -> Handle {
        let h = graph_new(4, false).unwrap();
        for (u, v, w) in [(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 5)] {
            graph_add_edge(h, u, v, w).unwrap();
        }
        h
    }

    #[test]
    fn test_square_queries() {
        let h = square();
        assert_eq!(graph_bfs(h, 0).unwrap(), "[0,1,3,2]");
        assert_eq!(graph_dfs(h, 0).unwrap(), "[0,1,2,3]");
        assert_eq!(graph_dijkstra(h, 0).unwrap(), "[0,1,3,4]");
        assert_eq!(graph_prim_mst(h).unwrap(), "[0-1:1,1-2:2,2-3:1]");
    }

    #[test]
    fn test_negative_start_soft_fails() {
        let h = square();
        assert_eq!(graph_bfs(h, -1).unwrap(), "[]");
        assert_eq!(graph_dfs(h, 4).unwrap(), "[]");
        assert_eq!(graph_dijkstra(h, -3).unwrap(), "[999999,999999,999999,999999]");
    }

    #[test]
    fn test_negative_edge_endpoints_ignored() {
        let h = graph_new(2, true).unwrap();
        graph_add_edge(h, -1, 0, 3).unwrap();
        assert_eq!(graph_get_matrix(h).unwrap(), "[[0,0],[0,0]]");
    }

    #[test]
    fn test_prim_on_directed_is_empty() {
        let h = square();
        graph_set_directed(h, true).unwrap();
        assert!(graph_get_is_directed(h).unwrap());
        assert_eq!(graph_prim_mst(h).unwrap(), "[]");
    }

    #[test]
    fn test_remove_vertex_new_handle() {
        let h = square();
        let before = graph_get_matrix(h).unwrap();
        let h2 = graph_remove_vertex(h, 0).unwrap();
        assert_ne!(h, h2);
        assert_eq!(graph_get_matrix(h).unwrap(), before);
        assert_eq!(graph_get_vertex_count(h).unwrap(), 4);
        assert_eq!(graph_get_vertex_count(h2).unwrap(), 3);
        assert_eq!(graph_get_matrix(h2).unwrap(), "[[0,2,0],[2,0,1],[0,1,0]]");
    }

    #[test]
    fn test_remove_vertex_out_of_range_same_handle() {
        let h = square();
        assert_eq!(graph_remove_vertex(h, 9).unwrap(), h);
        assert_eq!(graph_remove_vertex(h, -1).unwrap(), h);
    }

    #[test]
    fn test_vertex_limit() {
        state::set_setting("max_vertices", 8).unwrap();
        assert!(matches!(graph_new(9, false), Err(ExtError::VertexLimit { .. })));
        assert!(graph_new(8, false).is_ok());
    }

    #[test]
    fn test_weight_out_of_range() {
        let h = graph_new(2, false).unwrap();
        assert!(matches!(
            graph_add_edge(h, 0, 1, 1 << 40),
            Err(ExtError::ValueOutOfRange { name: "weight", .. })
        ));
    }

    #[test]
    fn test_clear() {
        let h = square();
        graph_clear(h).unwrap();
        assert_eq!(graph_get_matrix(h).unwrap(), "[[0,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]");
        assert_eq!(graph_bfs(h, 2).unwrap(), "[2]");
    }
}
