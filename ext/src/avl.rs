use dsviz_core::AvlTree;

use crate::encode;
use crate::error::Result;
use crate::state::{self, Handle, Instance};
use crate::util::int32;

pub fn avl_new() -> Handle {
    state::register(Instance::Avl(AvlTree::new()))
}

/// Duplicate keys are ignored.
pub fn avl_insert(handle: Handle, key: i64) -> Result<()> {
    let key = int32(key, "key")?;
    state::with_avl(handle, |t| t.insert(key))
}

pub fn avl_remove(handle: Handle, key: i64) -> Result<()> {
    let key = int32(key, "key")?;
    state::with_avl(handle, |t| t.remove(key))
}

pub fn avl_inorder(handle: Handle) -> Result<String> {
    state::with_avl(handle, |t| encode::sequence(t.inorder()))
}

pub fn avl_get_tree(handle: Handle) -> Result<String> {
    state::with_avl(handle, |t| encode::tree(t.root()))
}

/// Rotation applied by the most recent insert or remove, `"none"` if it
/// needed none.
pub fn avl_get_last_rotation(handle: Handle) -> Result<&'static str> {
    state::with_avl(handle, |t| encode::rotation(t.last_rotation()))
}

pub fn avl_clear(handle: Handle) -> Result<()> {
    state::with_avl(handle, |t| t.clear())
}
