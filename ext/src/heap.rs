use dsviz_core::{BinaryHeap, HeapMode};

use crate::encode::{self, HEAP_EMPTY};
use crate::error::Result;
use crate::state::{self, Handle, Instance};
use crate::util::int32;

/// New heap sized by the session's `heap_capacity`.
pub fn heap_new(is_min: bool) -> Handle {
    let mode = if is_min { HeapMode::Min } else { HeapMode::Max };
    let capacity = state::settings().heap_capacity;
    state::register(Instance::Heap(BinaryHeap::with_capacity(mode, capacity)))
}

/// Inserting into a full heap is a silent no-op.
pub fn heap_insert(handle: Handle, value: i64) -> Result<()> {
    let value = int32(value, "value")?;
    state::with_heap(handle, |h| h.insert(value))
}

pub fn heap_extract_top(handle: Handle) -> Result<i64> {
    state::with_heap(handle, |h| h.extract_top().map_or(HEAP_EMPTY, i64::from))
}

pub fn heap_get_array(handle: Handle) -> Result<String> {
    state::with_heap(handle, |h| encode::sequence(h.as_slice()))
}

pub fn heap_clear(handle: Handle) -> Result<()> {
    state::with_heap(handle, |h| h.clear())
}

pub fn heap_convert_to_min_heap(handle: Handle) -> Result<()> {
    state::with_heap(handle, |h| h.convert_to_min_heap())
}

pub fn heap_convert_to_max_heap(handle: Handle) -> Result<()> {
    state::with_heap(handle, |h| h.convert_to_max_heap())
}

pub fn heap_get_is_min_heap(handle: Handle) -> Result<bool> {
    state::with_heap(handle, |h| h.is_min_heap())
}
