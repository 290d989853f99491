//! Traversal work-lists: FIFO queue for BFS, LIFO stack for DFS.

use std::collections::VecDeque;

/// FIFO of vertex indices.
#[derive(Debug, Default)]
pub struct Queue {
    items: VecDeque<usize>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, vertex: usize) {
        self.items.push_back(vertex);
    }

    pub fn dequeue(&mut self) -> Option<usize> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<usize> {
        self.items.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

struct StackNode {
    vertex: usize,
    next: Option<Box<StackNode>>,
}

/// LIFO of vertex indices, a singly linked chain where each node owns the
/// one below it.
#[derive(Default)]
pub struct Stack {
    top: Option<Box<StackNode>>,
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: usize) {
        let next = self.top.take();
        self.top = Some(Box::new(StackNode { vertex, next }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.top.take().map(|node| {
            self.top = node.next;
            self.len -= 1;
            node.vertex
        })
    }

    pub fn peek(&self) -> Option<usize> {
        self.top.as_ref().map(|node| node.vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl Drop for Stack {
    // Unlink iteratively so a deep chain cannot overflow the call stack.
    fn drop(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let mut q = Queue::new();
        q.enqueue(3);
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.len(), 3);
        assert_eq!(q.front(), Some(3));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert!(q.is_empty());
    }

    #[test]
    fn test_queue_dequeue_empty() {
        let mut q = Queue::new();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.front(), None);
    }

    #[test]
    fn test_stack_lifo_order() {
        let mut s = Stack::new();
        s.push(3);
        s.push(1);
        s.push(2);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Some(2));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), Some(3));
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_stack_deep_chain_drops() {
        let mut s = Stack::new();
        for i in 0..200_000 {
            s.push(i);
        }
        assert_eq!(s.len(), 200_000);
        drop(s);
    }
}
