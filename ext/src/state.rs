use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use dsviz_core::{AvlTree, BinaryHeap, Graph, HashTable};
use serde::Serialize;

use crate::error::{ExtError, Result};
use crate::settings::Settings;

/// Opaque reference to a live instance, handed to the caller on construction.
pub type Handle = u32;

/// A structure owned by the registry.
#[derive(Debug)]
pub enum Instance {
    Graph(Graph),
    Avl(AvlTree),
    Heap(BinaryHeap),
    Hash(HashTable),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Graph,
    Avl,
    Heap,
    Hash,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Graph => "graph",
            Kind::Avl => "avl",
            Kind::Heap => "heap",
            Kind::Hash => "hash",
        })
    }
}

impl Instance {
    pub fn kind(&self) -> Kind {
        match self {
            Instance::Graph(_) => Kind::Graph,
            Instance::Avl(_) => Kind::Avl,
            Instance::Heap(_) => Kind::Heap,
            Instance::Hash(_) => Kind::Hash,
        }
    }

    /// Vertex count for graphs, element count otherwise.
    pub fn size(&self) -> usize {
        match self {
            Instance::Graph(g) => g.vertex_count(),
            Instance::Avl(t) => t.len(),
            Instance::Heap(h) => h.len(),
            Instance::Hash(t) => t.len(),
        }
    }
}

/// Per-thread registry of live instances plus the session settings.
struct Session {
    instances: BTreeMap<Handle, Instance>,
    next_handle: Handle,
    settings: Settings,
}

impl Session {
    fn new() -> Self {
        Self {
            instances: BTreeMap::new(),
            next_handle: 1,
            settings: Settings::from_env(),
        }
    }
}

thread_local! {
    /// Each caller thread gets its own registry; instances are never shared
    /// across threads.
    static SESSION: RefCell<Session> = RefCell::new(Session::new());
}

/// Take ownership of `instance` and return its handle.
pub fn register(instance: Instance) -> Handle {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        let handle = session.next_handle;
        session.next_handle = session.next_handle.wrapping_add(1).max(1);
        tracing::debug!(handle, kind = %instance.kind(), "instance registered");
        session.instances.insert(handle, instance);
        handle
    })
}

/// Drop the instance behind `handle`.
pub fn release(handle: Handle) -> Result<()> {
    SESSION.with(|cell| {
        cell.borrow_mut()
            .instances
            .remove(&handle)
            .map(|_| ())
            .ok_or(ExtError::UnknownHandle(handle))
    })
}

/// Run `f` against the instance behind `handle`.
pub fn with_instance<R, F: FnOnce(&mut Instance) -> R>(handle: Handle, f: F) -> Result<R> {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        let instance = session
            .instances
            .get_mut(&handle)
            .ok_or(ExtError::UnknownHandle(handle))?;
        Ok(f(instance))
    })
}

fn wrong_kind(handle: Handle, expected: Kind, found: &Instance) -> ExtError {
    ExtError::WrongKind {
        handle,
        expected,
        found: found.kind(),
    }
}

pub fn with_graph<R, F: FnOnce(&mut Graph) -> R>(handle: Handle, f: F) -> Result<R> {
    with_instance(handle, |inst| match inst {
        Instance::Graph(g) => Ok(f(g)),
        other => Err(wrong_kind(handle, Kind::Graph, other)),
    })?
}

pub fn with_avl<R, F: FnOnce(&mut AvlTree) -> R>(handle: Handle, f: F) -> Result<R> {
    with_instance(handle, |inst| match inst {
        Instance::Avl(t) => Ok(f(t)),
        other => Err(wrong_kind(handle, Kind::Avl, other)),
    })?
}

pub fn with_heap<R, F: FnOnce(&mut BinaryHeap) -> R>(handle: Handle, f: F) -> Result<R> {
    with_instance(handle, |inst| match inst {
        Instance::Heap(h) => Ok(f(h)),
        other => Err(wrong_kind(handle, Kind::Heap, other)),
    })?
}

pub fn with_hash<R, F: FnOnce(&mut HashTable) -> R>(handle: Handle, f: F) -> Result<R> {
    with_instance(handle, |inst| match inst {
        Instance::Hash(t) => Ok(f(t)),
        other => Err(wrong_kind(handle, Kind::Hash, other)),
    })?
}

/// Snapshot of `(handle, kind, size)` for every live instance, by handle.
pub fn instances() -> Vec<(Handle, Kind, usize)> {
    SESSION.with(|cell| {
        cell.borrow()
            .instances
            .iter()
            .map(|(&h, inst)| (h, inst.kind(), inst.size()))
            .collect()
    })
}

pub fn settings() -> Settings {
    SESSION.with(|cell| cell.borrow().settings)
}

/// Change one setting for this session.
pub fn set_setting(name: &str, value: i64) -> Result<()> {
    SESSION.with(|cell| cell.borrow_mut().settings.set(name, value))?;
    tracing::debug!(name, value, "setting changed");
    Ok(())
}
