//! dsviz-core: data structures and algorithms behind the dsviz front end.
//!
//! An adjacency-matrix graph with BFS, DFS, Dijkstra and Prim, an AVL tree,
//! and two companion containers (binary heap, chained hash table). All
//! structures hold plain `i32` data and every operation is total: invalid
//! indices and overflowing capacities degrade to no-ops or empty results.
//! No I/O happens here; the caller boundary lives in `dsviz-ext`.

mod avl;
mod graph;
mod hash;
mod heap;
mod pq;
mod traversal;
mod worklist;

pub use avl::{AvlNode, AvlTree, Rotation};
pub use graph::{Graph, VertexId, Weight};
pub use hash::{HashTable, DEFAULT_BUCKETS};
pub use heap::{BinaryHeap, HeapMode, DEFAULT_HEAP_CAPACITY};
pub use pq::{MinPriorityQueue, PqEntry};
pub use traversal::{bfs, dfs, dijkstra, prim_mst, total_weight, MstEdge, UNREACHABLE};
pub use worklist::{Queue, Stack};
