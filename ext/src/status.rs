use serde::Serialize;

use crate::settings::Settings;
use crate::state::{self, Handle, Kind};

/// One live instance as reported by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceStatus {
    pub handle: Handle,
    pub kind: Kind,
    /// Vertex count for graphs, element count otherwise.
    pub size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub instances: Vec<InstanceStatus>,
    pub settings: Settings,
}

pub fn status() -> SessionStatus {
    let instances = state::instances()
        .into_iter()
        .map(|(handle, kind, size)| InstanceStatus { handle, kind, size })
        .collect();
    SessionStatus {
        instances,
        settings: state::settings(),
    }
}
