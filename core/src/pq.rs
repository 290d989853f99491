//! Lazy-deletion min priority queue used by Dijkstra and Prim.
//!
//! There is no decrease-key. Callers push a fresh `(vertex, key)` entry
//! whenever they improve a key and skip stale entries at pop time by checking
//! their own finalized set. Several entries for one vertex may coexist.

/// A queued `(vertex, key)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PqEntry {
    pub vertex: usize,
    pub key: i64,
}

/// Binary min-heap over [`PqEntry`] keys, 1-indexed, with a fixed capacity.
#[derive(Debug)]
pub struct MinPriorityQueue {
    // Slot 0 is unused so that children of `i` sit at `2i` and `2i + 1`.
    heap: Vec<PqEntry>,
    capacity: usize,
}

impl MinPriorityQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut heap = Vec::with_capacity(capacity.saturating_add(1).min(1 << 16));
        heap.push(PqEntry { vertex: 0, key: 0 });
        Self { heap, capacity }
    }

    pub fn len(&self) -> usize {
        self.heap.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Queue an entry. Dropped silently when the queue is full.
    pub fn push(&mut self, vertex: usize, key: i64) {
        if self.len() >= self.capacity {
            tracing::debug!(vertex, key, capacity = self.capacity, "priority queue full, entry dropped");
            return;
        }
        self.heap.push(PqEntry { vertex, key });
        let last = self.len();
        self.sift_up(last);
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop(&mut self) -> Option<PqEntry> {
        let size = self.len();
        if size == 0 {
            return None;
        }
        self.heap.swap(1, size);
        let top = self.heap.pop();
        if self.len() > 0 {
            self.sift_down(1);
        }
        top
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 && self.heap[i].key < self.heap[i / 2].key {
            self.heap.swap(i, i / 2);
            i /= 2;
        }
    }

    /// On a tie between two smaller children the left one wins.
    fn sift_down(&mut self, mut i: usize) {
        let size = self.len();
        loop {
            let left = 2 * i;
            let right = left + 1;
            let mut smallest = i;

            if left <= size && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right <= size && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }

            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
