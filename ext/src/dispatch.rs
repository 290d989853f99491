//! JSON request dispatch.
//!
//! A request names an op as `<kind>.<operation>` (`graph.bfs`, `heap.insert`)
//! or one of the session ops `set`, `show`, `status` and `release`. Positional
//! arguments follow in `args`; the first argument of every instance op is the
//! handle returned by the matching `new`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ExtError, Result};
use crate::settings::SETTING_DEFS;
use crate::state::{self, Handle};
use crate::{avl, graph, hash, heap, status};

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub op: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Value,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn success(id: Value, value: Value) -> Self {
        Self { id, ok: true, value: Some(value), error: None }
    }

    fn failure(id: Value, error: &ExtError) -> Self {
        Self { id, ok: false, value: None, error: Some(error.to_string()) }
    }
}

/// Positional argument reader for one request.
struct Args<'a> {
    op: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn get(&self, index: usize, name: &'static str) -> Result<&'a Value> {
        self.values.get(index).ok_or_else(|| ExtError::MissingArgument {
            op: self.op.to_string(),
            name,
            index,
        })
    }

    fn bad(&self, name: &'static str, expected: &'static str, found: &Value) -> ExtError {
        ExtError::BadArgument {
            op: self.op.to_string(),
            name,
            expected,
            found: found.to_string(),
        }
    }

    fn int(&self, index: usize, name: &'static str) -> Result<i64> {
        let v = self.get(index, name)?;
        v.as_i64().ok_or_else(|| self.bad(name, "an integer", v))
    }

    fn bool(&self, index: usize, name: &'static str) -> Result<bool> {
        let v = self.get(index, name)?;
        v.as_bool().ok_or_else(|| self.bad(name, "a boolean", v))
    }

    fn bool_or(&self, index: usize, name: &'static str, default: bool) -> Result<bool> {
        if index < self.values.len() {
            self.bool(index, name)
        } else {
            Ok(default)
        }
    }

    fn str(&self, index: usize, name: &'static str) -> Result<&'a str> {
        let v = self.get(index, name)?;
        v.as_str().ok_or_else(|| self.bad(name, "a string", v))
    }

    fn handle(&self) -> Result<Handle> {
        let v = self.get(0, "handle")?;
        v.as_u64()
            .and_then(|h| Handle::try_from(h).ok())
            .ok_or_else(|| self.bad("handle", "a handle", v))
    }
}

fn unit(r: Result<()>) -> Result<Value> {
    r.map(|()| Value::Null)
}

/// Run one request against this thread's session.
pub fn dispatch(request: &Request) -> Result<Value> {
    let a = Args {
        op: &request.op,
        values: &request.args,
    };
    let value = match request.op.as_str() {
        "graph.new" | "graph.construct" => {
            json!(graph::graph_new(a.int(0, "vertexCount")?, a.bool_or(1, "directed", false)?)?)
        }
        "graph.addEdge" => unit(graph::graph_add_edge(
            a.handle()?,
            a.int(1, "u")?,
            a.int(2, "v")?,
            a.int(3, "weight")?,
        ))?,
        "graph.removeEdge" => unit(graph::graph_remove_edge(a.handle()?, a.int(1, "u")?, a.int(2, "v")?))?,
        "graph.setDirected" => unit(graph::graph_set_directed(a.handle()?, a.bool(1, "directed")?))?,
        "graph.getIsDirected" => json!(graph::graph_get_is_directed(a.handle()?)?),
        "graph.removeVertex" => json!(graph::graph_remove_vertex(a.handle()?, a.int(1, "vertex")?)?),
        "graph.getMatrix" => json!(graph::graph_get_matrix(a.handle()?)?),
        "graph.bfs" => json!(graph::graph_bfs(a.handle()?, a.int(1, "start")?)?),
        "graph.dfs" => json!(graph::graph_dfs(a.handle()?, a.int(1, "start")?)?),
        "graph.dijkstra" => json!(graph::graph_dijkstra(a.handle()?, a.int(1, "start")?)?),
        "graph.primMST" => json!(graph::graph_prim_mst(a.handle()?)?),
        "graph.clear" => unit(graph::graph_clear(a.handle()?))?,
        "graph.getVertexCount" => json!(graph::graph_get_vertex_count(a.handle()?)?),

        "avl.new" | "avl.construct" => json!(avl::avl_new()),
        "avl.insert" => unit(avl::avl_insert(a.handle()?, a.int(1, "key")?))?,
        "avl.remove" => unit(avl::avl_remove(a.handle()?, a.int(1, "key")?))?,
        "avl.inorder" => json!(avl::avl_inorder(a.handle()?)?),
        "avl.getTree" => json!(avl::avl_get_tree(a.handle()?)?),
        "avl.getLastRotation" => json!(avl::avl_get_last_rotation(a.handle()?)?),
        "avl.clear" => unit(avl::avl_clear(a.handle()?))?,

        "heap.new" | "heap.construct" => json!(heap::heap_new(a.bool_or(0, "isMin", true)?)),
        "heap.insert" => unit(heap::heap_insert(a.handle()?, a.int(1, "value")?))?,
        "heap.extractTop" => json!(heap::heap_extract_top(a.handle()?)?),
        "heap.getArray" => json!(heap::heap_get_array(a.handle()?)?),
        "heap.clear" => unit(heap::heap_clear(a.handle()?))?,
        "heap.convertToMinHeap" => unit(heap::heap_convert_to_min_heap(a.handle()?))?,
        "heap.convertToMaxHeap" => unit(heap::heap_convert_to_max_heap(a.handle()?))?,
        "heap.getIsMinHeap" => json!(heap::heap_get_is_min_heap(a.handle()?)?),

        "hash.new" | "hash.construct" => json!(hash::hash_new()),
        "hash.insert" => unit(hash::hash_insert(a.handle()?, a.int(1, "key")?, a.int(2, "value")?))?,
        "hash.search" => json!(hash::hash_search(a.handle()?, a.int(1, "key")?)?),
        "hash.getTable" => json!(hash::hash_get_table(a.handle()?)?),
        "hash.clear" => unit(hash::hash_clear(a.handle()?))?,

        "set" => {
            let name = a.str(0, "name")?;
            state::set_setting(name, a.int(1, "value")?)?;
            json!(state::settings().get(name)?)
        }
        "show" => show(&a)?,
        "status" => serde_json::to_value(status::status())?,
        "release" => unit(state::release(a.handle()?))?,

        other => return Err(ExtError::UnknownOp(other.to_string())),
    };
    Ok(value)
}

/// `show` with a name returns that setting; without one, every setting with
/// its bounds and description.
fn show(a: &Args<'_>) -> Result<Value> {
    let current = state::settings();
    if !a.values.is_empty() {
        return Ok(json!(current.get(a.str(0, "name")?)?));
    }
    let rows = SETTING_DEFS
        .iter()
        .map(|def| {
            Ok(json!({
                "name": def.name,
                "value": current.get(def.name)?,
                "default": def.default,
                "min": def.min,
                "max": def.max,
                "description": def.short_desc,
            }))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(rows))
}

/// Handle one request line and produce one response line. Never fails: a
/// line that does not parse still gets an error response with a null id.
pub fn handle_line(line: &str) -> String {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            tracing::debug!(op = %request.op, args = request.args.len(), "dispatch");
            match dispatch(&request) {
                Ok(value) => Response::success(request.id, value),
                Err(e) => {
                    tracing::warn!(op = %request.op, error = %e, "request failed");
                    Response::failure(request.id, &e)
                }
            }
        }
        Err(e) => {
            let e = ExtError::from(e);
            tracing::warn!(error = %e, "unparseable request");
            Response::failure(Value::Null, &e)
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"id":null,"ok":false,"error":"response encoding failed: {e}"}}"#)
    })
}
