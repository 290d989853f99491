//! dsviz-ext: caller boundary for the dsviz-core structures.
//!
//! Instances live in a per-thread registry and are addressed by integer
//! handles. Every operation has a plain Rust entry point (`graph_bfs`,
//! `heap_insert`, ...) returning results in the canonical bracketed text
//! form, and a JSON line protocol in [`dispatch`] drives the same functions
//! for front ends that talk over a pipe.

pub mod avl;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod graph;
pub mod hash;
pub mod heap;
pub mod settings;
pub mod state;
pub mod status;
mod util;

pub use dispatch::{dispatch, handle_line, Request, Response};
pub use error::{ExtError, Result};
pub use settings::{Settings, SETTING_DEFS};
pub use state::{release, set_setting, Handle, Kind};
pub use status::{status, InstanceStatus, SessionStatus};

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::handle_line;

    fn ok(op: &str, args: Value) -> Value {
        let line = json!({"id": op, "op": op, "args": args}).to_string();
        let resp: Value = serde_json::from_str(&handle_line(&line)).unwrap();
        assert_eq!(resp["ok"], true, "{op}: {resp}");
        assert_eq!(resp["id"], op);
        resp["value"].clone()
    }

    fn err(op: &str, args: Value) -> String {
        let line = json!({"op": op, "args": args}).to_string();
        let resp: Value = serde_json::from_str(&handle_line(&line)).unwrap();
        assert_eq!(resp["ok"], false, "{op}: {resp}");
        resp["error"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_square_graph_session() {
        let g = ok("graph.new", json!([4, false]));
        for (u, v, w) in [(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 5)] {
            ok("graph.addEdge", json!([g, u, v, w]));
        }
        assert_eq!(ok("graph.bfs", json!([g, 0])), "[0,1,3,2]");
        assert_eq!(ok("graph.dfs", json!([g, 0])), "[0,1,2,3]");
        assert_eq!(ok("graph.dijkstra", json!([g, 0])), "[0,1,3,4]");
        assert_eq!(ok("graph.primMST", json!([g])), "[0-1:1,1-2:2,2-3:1]");
        assert_eq!(ok("graph.getVertexCount", json!([g])), 4);
        assert_eq!(ok("graph.getIsDirected", json!([g])), false);

        ok("graph.removeEdge", json!([g, 1, 2]));
        assert_eq!(ok("graph.dijkstra", json!([g, 0])), "[0,1,6,5]");
    }

    #[test]
    fn test_unreachable_and_negative_weights_encoded() {
        let g = ok("graph.new", json!([3, true]));
        ok("graph.addEdge", json!([g, 0, 1, -2]));
        assert_eq!(ok("graph.getMatrix", json!([g])), "[[0,-2,0],[0,0,0],[0,0,0]]");
        assert_eq!(ok("graph.dijkstra", json!([g, 0])), "[0,-2,999999]");
    }

    #[test]
    fn test_remove_vertex_returns_new_handle() {
        let g = ok("graph.new", json!([3]));
        ok("graph.addEdge", json!([g, 0, 1, 4]));
        ok("graph.addEdge", json!([g, 1, 2, 6]));
        let g2 = ok("graph.removeVertex", json!([g, 1]));
        assert_ne!(g, g2);
        assert_eq!(ok("graph.getMatrix", json!([g2])), "[[0,0],[0,0]]");
        assert_eq!(ok("graph.getMatrix", json!([g])), "[[0,4,0],[4,0,6],[0,6,0]]");
        assert_eq!(ok("graph.removeVertex", json!([g, 7])), g);
    }

    #[test]
    fn test_avl_session() {
        let t = ok("avl.new", json!([]));
        for k in [10, 20, 30] {
            ok("avl.insert", json!([t, k]));
        }
        assert_eq!(ok("avl.getLastRotation", json!([t])), "RR");
        assert_eq!(ok("avl.getTree", json!([t])), "[20,2,[10,1,[],[]],[30,1,[],[]]]");
        ok("avl.remove", json!([t, 20]));
        assert_eq!(ok("avl.inorder", json!([t])), "[10,30]");
        ok("avl.clear", json!([t]));
        assert_eq!(ok("avl.getTree", json!([t])), "[]");
    }

    #[test]
    fn test_heap_and_hash_sentinels() {
        let h = ok("heap.new", json!([false]));
        assert_eq!(ok("heap.extractTop", json!([h])), -999_999);
        ok("heap.insert", json!([h, 3]));
        ok("heap.insert", json!([h, 8]));
        assert_eq!(ok("heap.getArray", json!([h])), "[8,3]");
        assert_eq!(ok("heap.extractTop", json!([h])), 8);

        let t = ok("hash.new", json!([]));
        assert_eq!(ok("hash.search", json!([t, 5])), -1);
        ok("hash.insert", json!([t, 5, 50]));
        assert_eq!(ok("hash.search", json!([t, 5])), 50);
    }

    #[test]
    fn test_handle_lifecycle() {
        let t = ok("hash.new", json!([]));
        let rows = ok("status", json!([]));
        assert!(rows["instances"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["handle"] == t && r["kind"] == "hash" && r["size"] == 0));

        ok("release", json!([t]));
        let e = err("hash.insert", json!([t, 1, 1]));
        assert_eq!(e, format!("no instance with handle {t}"));
        let e = err("release", json!([t]));
        assert_eq!(e, format!("no instance with handle {t}"));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let g = ok("graph.new", json!([2]));
        let e = err("avl.insert", json!([g, 1]));
        assert_eq!(e, format!("handle {g} is a graph, not a avl"));
    }

    #[test]
    fn test_settings_apply_to_new_instances() {
        let before = ok("hash.new", json!([]));
        assert_eq!(ok("set", json!(["hash_buckets", 3])), 3);
        assert_eq!(ok("show", json!(["hash_buckets"])), 3);
        let after = ok("hash.new", json!([]));
        assert_eq!(ok("hash.getTable", json!([after])), "[[],[],[]]");
        assert_eq!(
            ok("hash.getTable", json!([before])),
            "[[],[],[],[],[],[],[],[],[],[]]"
        );
    }

    #[test]
    fn test_setting_errors() {
        let e = err("set", json!(["max_vertices", 5000]));
        assert_eq!(e, "setting max_vertices must be between 0 and 4096, got 5000");
        let e = err("show", json!(["colour"]));
        assert_eq!(e, "unknown setting 'colour'");
    }

    #[test]
    fn test_vertex_limit_error() {
        ok("set", json!(["max_vertices", 4]));
        let e = err("graph.new", json!([5]));
        assert_eq!(e, "graph of 5 vertices exceeds max_vertices=4");
        assert_eq!(ok("graph.getVertexCount", json!([ok("graph.new", json!([-3]))])), 0);
    }
}
