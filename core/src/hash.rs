//! Separate-chaining hash table from `i32` keys to `i32` values with a
//! fixed number of buckets.

/// Default bucket count when none is configured.
pub const DEFAULT_BUCKETS: usize = 10;

#[derive(Debug, Clone)]
pub struct HashTable {
    // Each chain is stored oldest-first; iteration reverses it so the newest
    // entry leads, as with head insertion.
    buckets: Vec<Vec<(i32, i32)>>,
}

impl HashTable {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// A table with `buckets` chains (at least one).
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); buckets.max(1)],
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index: `|key| mod bucket_count`.
    pub fn bucket_of(&self, key: i32) -> usize {
        key.unsigned_abs() as usize % self.buckets.len()
    }

    /// Insert or overwrite.
    pub fn insert(&mut self, key: i32, value: i32) {
        let idx = self.bucket_of(key);
        let chain = &mut self.buckets[idx];
        match chain.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => chain.push((key, value)),
        }
    }

    pub fn search(&self, key: i32) -> Option<i32> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, v)| v)
    }

    /// Entries of bucket `idx`, newest first.
    pub fn bucket(&self, idx: usize) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.buckets
            .get(idx)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
            .iter()
            .rev()
            .copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_search() {
        let mut t = HashTable::new();
        t.insert(3, 30);
        t.insert(-13, 130);
        assert_eq!(t.search(3), Some(30));
        assert_eq!(t.search(-13), Some(130));
        assert_eq!(t.search(4), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut t = HashTable::new();
        t.insert(1, 1);
        t.insert(11, 2);
        t.insert(1, 5);
        assert_eq!(t.bucket(1).collect::<Vec<_>>(), vec![(11, 2), (1, 5)]);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_negative_keys_use_magnitude() {
        let t = HashTable::new();
        assert_eq!(t.bucket_of(-27), 7);
        assert_eq!(t.bucket_of(i32::MIN), (i32::MIN.unsigned_abs() % 10) as usize);
    }

    #[test]
    fn test_newest_first_in_chain() {
        let mut t = HashTable::new();
        t.insert(2, 1);
        t.insert(12, 2);
        t.insert(22, 3);
        assert_eq!(t.bucket(2).map(|(k, _)| k).collect::<Vec<_>>(), vec![22, 12, 2]);
    }

    #[test]
    fn test_zero_buckets_clamped() {
        let mut t = HashTable::with_buckets(0);
        t.insert(9, 9);
        assert_eq!(t.bucket_count(), 1);
        assert_eq!(t.search(9), Some(9));
    }

    #[test]
    fn test_clear_keeps_buckets() {
        let mut t = HashTable::with_buckets(4);
        t.insert(1, 1);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.bucket_count(), 4);
    }
}
