use dsviz_core::HashTable;

use crate::encode::{self, HASH_MISS};
use crate::error::Result;
use crate::state::{self, Handle, Instance};
use crate::util::int32;

pub fn hash_new() -> Handle {
    let buckets = state::settings().hash_buckets;
    state::register(Instance::Hash(HashTable::with_buckets(buckets)))
}

/// Insert or overwrite.
pub fn hash_insert(handle: Handle, key: i64, value: i64) -> Result<()> {
    let key = int32(key, "key")?;
    let value = int32(value, "value")?;
    state::with_hash(handle, |t| t.insert(key, value))
}

pub fn hash_search(handle: Handle, key: i64) -> Result<i64> {
    let key = int32(key, "key")?;
    state::with_hash(handle, |t| t.search(key).map_or(HASH_MISS, i64::from))
}

pub fn hash_get_table(handle: Handle) -> Result<String> {
    state::with_hash(handle, |t| encode::buckets(t))
}

pub fn hash_clear(handle: Handle) -> Result<()> {
    state::with_hash(handle, |t| t.clear())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_search_overwrite() {
        let h = hash_new();
        hash_insert(h, 3, 30).unwrap();
        hash_insert(h, 13, 130).unwrap();
        hash_insert(h, 3, 31).unwrap();
        assert_eq!(hash_search(h, 3).unwrap(), 31);
        assert_eq!(hash_search(h, 13).unwrap(), 130);
        assert_eq!(hash_search(h, 4).unwrap(), HASH_MISS);
        assert_eq!(
            hash_get_table(h).unwrap(),
            "[[],[],[],[13:130,3:31],[],[],[],[],[],[]]"
        );
    }

    #[test]
    fn test_negative_key_bucket() {
        let h = hash_new();
        hash_insert(h, -7, 1).unwrap();
        assert_eq!(hash_search(h, -7).unwrap(), 1);
        assert!(hash_get_table(h).unwrap().starts_with("[[],[],[],[],[],[],[],[-7:1]"));
    }

    #[test]
    fn test_bucket_count_from_settings() {
        state::set_setting("hash_buckets", 2).unwrap();
        let h = hash_new();
        hash_insert(h, 1, 1).unwrap();
        assert_eq!(hash_get_table(h).unwrap(), "[[],[1:1]]");
        hash_clear(h).unwrap();
        assert_eq!(hash_get_table(h).unwrap(), "[[],[]]");
    }
}
