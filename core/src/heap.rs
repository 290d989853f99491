//! Fixed-capacity binary heap of `i32` values that can switch between min
//! and max ordering.

/// Ordering of a [`BinaryHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapMode {
    Min,
    Max,
}

/// Default capacity when none is configured.
pub const DEFAULT_HEAP_CAPACITY: usize = 100;

/// Array-backed binary heap, 1-indexed.
#[derive(Debug, Clone)]
pub struct BinaryHeap {
    // Slot 0 is unused.
    arr: Vec<i32>,
    capacity: usize,
    mode: HeapMode,
}

impl BinaryHeap {
    pub fn new(mode: HeapMode) -> Self {
        Self::with_capacity(mode, DEFAULT_HEAP_CAPACITY)
    }

    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        let mut arr = Vec::with_capacity(capacity + 1);
        arr.push(0);
        Self { arr, capacity, mode }
    }

    pub fn len(&self) -> usize {
        self.arr.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    pub fn is_min_heap(&self) -> bool {
        self.mode == HeapMode::Min
    }

    /// `a` belongs above `b` under the current mode.
    fn before(&self, a: i32, b: i32) -> bool {
        match self.mode {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }

    /// Add a value. Dropped silently when the heap is full.
    pub fn insert(&mut self, value: i32) {
        if self.len() >= self.capacity {
            tracing::debug!(value, capacity = self.capacity, "heap full, value dropped");
            return;
        }
        self.arr.push(value);
        let last = self.len();
        self.sift_up(last);
    }

    /// Remove and return the top value (smallest or largest by mode).
    pub fn extract_top(&mut self) -> Option<i32> {
        let size = self.len();
        if size == 0 {
            return None;
        }
        self.arr.swap(1, size);
        let top = self.arr.pop();
        if self.len() > 0 {
            self.sift_down(1);
        }
        top
    }

    pub fn peek(&self) -> Option<i32> {
        self.arr.get(1).copied()
    }

    /// Heap contents in array order.
    pub fn as_slice(&self) -> &[i32] {
        &self.arr[1..]
    }

    pub fn convert_to_min_heap(&mut self) {
        self.set_mode(HeapMode::Min);
    }

    pub fn convert_to_max_heap(&mut self) {
        self.set_mode(HeapMode::Max);
    }

    /// Switch ordering and rebuild bottom-up.
    pub fn set_mode(&mut self, mode: HeapMode) {
        self.mode = mode;
        for i in (1..=self.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    pub fn clear(&mut self) {
        self.arr.truncate(1);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 {
            let parent = i / 2;
            if !self.before(self.arr[i], self.arr[parent]) {
                break;
            }
            self.arr.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let size = self.len();
        loop {
            let left = 2 * i;
            let right = left + 1;
            let mut target = i;
            if left <= size && self.before(self.arr[left], self.arr[target]) {
                target = left;
            }
            if right <= size && self.before(self.arr[right], self.arr[target]) {
                target = right;
            }
            if target == i {
                break;
            }
            self.arr.swap(i, target);
            i = target;
        }
    }
}

impl Default for BinaryHeap {
    fn default() -> Self {
        Self::new(HeapMode::Min)
    }
}
