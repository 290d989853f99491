use dsviz_core::VertexId;

use crate::error::{ExtError, Result};

/// Map a caller-supplied vertex index onto the core's index type.
///
/// Negative values become an index no graph contains, so they take the same
/// soft-failure path as any other out-of-range vertex.
pub fn vertex_index(raw: i64) -> VertexId {
    usize::try_from(raw).unwrap_or(usize::MAX)
}

/// Vertex count for graph construction. Negative counts build an empty
/// graph; counts above `max` are refused.
pub fn vertex_count(raw: i64, max: usize) -> Result<usize> {
    let count = usize::try_from(raw).unwrap_or(0);
    if count > max {
        return Err(ExtError::VertexLimit { requested: raw, max });
    }
    Ok(count)
}

/// Narrow a key, value or weight to 32 bits.
pub fn int32(raw: i64, name: &'static str) -> Result<i32> {
    i32::try_from(raw).map_err(|_| ExtError::ValueOutOfRange { name, value: raw })
}
