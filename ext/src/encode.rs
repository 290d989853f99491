//! Canonical bracketed text encoding of query results.
//!
//! Integers are plain decimal (`-` prefix for negatives), sequences are
//! `[a,b,c]`, a matrix is a sequence of row sequences, MST edges read
//! `parent-child:weight`, hash buckets hold `key:value` entries and an AVL
//! node is `[key,height,left,right]` with `[]` for a missing child.

use std::fmt::{Display, Write};

use dsviz_core::{AvlNode, Graph, HashTable, MstEdge, Rotation, UNREACHABLE};

/// Returned by `extractTop` on an empty heap.
pub const HEAP_EMPTY: i64 = -999_999;

/// Returned by `search` for an absent key.
pub const HASH_MISS: i64 = -1;

/// `[a,b,c]` from any displayable items.
pub fn sequence<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

pub fn matrix(graph: &Graph) -> String {
    sequence(graph.rows().map(|row| sequence(row.iter())))
}

/// Distances with unreachable vertices written as [`UNREACHABLE`].
pub fn distances(dist: &[Option<i64>]) -> String {
    sequence(dist.iter().map(|d| d.unwrap_or(UNREACHABLE)))
}

pub fn mst(edges: &[MstEdge]) -> String {
    sequence(
        edges
            .iter()
            .map(|e| format!("{}-{}:{}", e.parent, e.child, e.weight)),
    )
}

/// Every bucket in index order, entries newest first.
pub fn buckets(table: &HashTable) -> String {
    sequence((0..table.bucket_count()).map(|i| {
        sequence(table.bucket(i).map(|(k, v)| format!("{k}:{v}")))
    }))
}

pub fn tree(root: Option<&AvlNode>) -> String {
    fn node(out: &mut String, n: Option<&AvlNode>) {
        match n {
            None => out.push_str("[]"),
            Some(n) => {
                let _ = write!(out, "[{},{},", n.key, n.height);
                node(out, n.left.as_deref());
                out.push(',');
                node(out, n.right.as_deref());
                out.push(']');
            }
        }
    }
    let mut out = String::new();
    node(&mut out, root);
    out
}

pub fn rotation(r: Option<Rotation>) -> &'static str {
    r.map_or("none", Rotation::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsviz_core::AvlTree;

    #[test]
    fn test_sequence_forms() {
        assert_eq!(sequence(Vec::<i32>::new()), "[]");
        assert_eq!(sequence([7]), "[7]");
        assert_eq!(sequence([0, -12, 305]), "[0,-12,305]");
    }

    #[test]
    fn test_matrix() {
        let mut g = Graph::new(2, false);
        g.add_edge(0, 1, -4);
        assert_eq!(matrix(&g), "[[0,-4],[-4,0]]");
        assert_eq!(matrix(&Graph::new(0, false)), "[]");
    }

    #[test]
    fn test_distances_sentinel() {
        assert_eq!(distances(&[Some(0), None, Some(12)]), "[0,999999,12]");
    }

    #[test]
    fn test_mst_edges() {
        let edges = [
            MstEdge { parent: 0, child: 1, weight: 1 },
            MstEdge { parent: 1, child: 2, weight: -2 },
        ];
        assert_eq!(mst(&edges), "[0-1:1,1-2:-2]");
        assert_eq!(mst(&[]), "[]");
    }

    #[test]
    fn test_buckets() {
        let mut t = HashTable::with_buckets(3);
        t.insert(1, 10);
        t.insert(4, 40);
        t.insert(-2, 7);
        assert_eq!(buckets(&t), "[[],[4:40,1:10],[-2:7]]");
    }

    #[test]
    fn test_tree() {
        let mut t = AvlTree::new();
        assert_eq!(tree(t.root()), "[]");
        for k in [10, 20, 30] {
            t.insert(k);
        }
        assert_eq!(tree(t.root()), "[20,2,[10,1,[],[]],[30,1,[],[]]]");
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotation(None), "none");
        assert_eq!(rotation(Some(Rotation::LeftRight)), "LR");
    }
}
