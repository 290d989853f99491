//! Self-balancing binary search tree over unique `i32` keys.
//!
//! Insert and remove rebuild the path from the root recursively, recomputing
//! heights on the way back up and rotating wherever the balance factor
//! `height(left) - height(right)` leaves `{-1, 0, 1}`.

use std::cmp::Ordering;
use std::fmt;

type Link = Option<Box<AvlNode>>;

/// A tree node. Heights count nodes, so a leaf has height 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvlNode {
    pub key: i32,
    pub height: i32,
    pub left: Link,
    pub right: Link,
}

/// Which of the four imbalance cases a mutation repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left-left: single right rotation.
    LeftLeft,
    /// Right-right: single left rotation.
    RightRight,
    /// Left-right: left rotation on the left child, then right rotation.
    LeftRight,
    /// Right-left: right rotation on the right child, then left rotation.
    RightLeft,
}

impl Rotation {
    pub fn as_str(self) -> &'static str {
        match self {
            Rotation::LeftLeft => "LL",
            Rotation::RightRight => "RR",
            Rotation::LeftRight => "LR",
            Rotation::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AvlNode {
    fn leaf(key: i32) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    pub fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn balance(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.balance())
}

fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn apply(mut node: Box<AvlNode>, case: Rotation, last: &mut Option<Rotation>) -> Box<AvlNode> {
    *last = Some(case);
    match case {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

fn insert_at(link: Link, key: i32, last: &mut Option<Rotation>) -> Box<AvlNode> {
    let Some(mut node) = link else {
        return Box::new(AvlNode::leaf(key));
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_at(node.left.take(), key, last)),
        Ordering::Greater => node.right = Some(insert_at(node.right.take(), key, last)),
        Ordering::Equal => return node,
    }

    node.update_height();
    let bf = node.balance();
    let left_key = node.left.as_ref().map(|n| n.key);
    let right_key = node.right.as_ref().map(|n| n.key);

    // The taller side always has a child, so the key comparisons are defined.
    let case = match (bf, left_key, right_key) {
        (bf, Some(lk), _) if bf > 1 && key < lk => Some(Rotation::LeftLeft),
        (bf, _, Some(rk)) if bf < -1 && key > rk => Some(Rotation::RightRight),
        (bf, Some(lk), _) if bf > 1 && key > lk => Some(Rotation::LeftRight),
        (bf, _, Some(rk)) if bf < -1 && key < rk => Some(Rotation::RightLeft),
        _ => None,
    };

    match case {
        Some(case) => apply(node, case, last),
        None => node,
    }
}

fn remove_at(link: Link, key: i32, last: &mut Option<Rotation>) -> Link {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_at(node.left.take(), key, last),
        Ordering::Greater => node.right = remove_at(node.right.take(), key, last),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => node = child,
            (Some(left), Some(right)) => {
                let successor = min_key(&right);
                node.key = successor;
                node.left = Some(left);
                node.right = remove_at(Some(right), successor, last);
            }
        },
    }

    node.update_height();
    let bf = node.balance();

    let case = if bf > 1 {
        if balance(&node.left) >= 0 {
            Some(Rotation::LeftLeft)
        } else {
            Some(Rotation::LeftRight)
        }
    } else if bf < -1 {
        if balance(&node.right) <= 0 {
            Some(Rotation::RightRight)
        } else {
            Some(Rotation::RightLeft)
        }
    } else {
        None
    };

    Some(match case {
        Some(case) => apply(node, case, last),
        None => node,
    })
}

fn min_key(node: &AvlNode) -> i32 {
    let mut cur = node;
    while let Some(left) = cur.left.as_deref() {
        cur = left;
    }
    cur.key
}

/// AVL tree with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvlTree {
    root: Link,
    len: usize,
    last_rotation: Option<Rotation>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`. A key already present leaves the tree untouched.
    pub fn insert(&mut self, key: i32) {
        self.last_rotation = None;
        if self.contains(key) {
            tracing::trace!(key, "duplicate key ignored");
            return;
        }
        self.root = Some(insert_at(self.root.take(), key, &mut self.last_rotation));
        self.len += 1;
    }

    /// Remove `key`. An absent key leaves the tree untouched.
    pub fn remove(&mut self, key: i32) {
        self.last_rotation = None;
        if !self.contains(key) {
            return;
        }
        self.root = remove_at(self.root.take(), key, &mut self.last_rotation);
        self.len -= 1;
    }

    pub fn contains(&self, key: i32) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Keys in ascending order.
    pub fn inorder(&self) -> Vec<i32> {
        fn walk(link: &Link, out: &mut Vec<i32>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.key);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    pub fn root(&self) -> Option<&AvlNode> {
        self.root.as_deref()
    }

    /// Rebalancing case applied by the most recent insert or remove, if any.
    pub fn last_rotation(&self) -> Option<Rotation> {
        self.last_rotation
    }

    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.last_rotation = None;
    }
}
