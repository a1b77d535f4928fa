//! Datastructures

use crate::Dispatcher;

use ahash::RandomState;
use indexmap::IndexMap;

/// A key/value table whose lookups go through a dispatcher compiled by `rebuild`
///
/// The store is the source of truth for what has been written. The dispatcher is a snapshot of the
/// store as of the last rebuild, and is the only thing `lookup` consults.
pub struct CompiledLookupTable<K, V, S = RandomState> {
    pub(crate) store: IndexMap<K, V, S>,
    pub(crate) dispatcher: Dispatcher<K, V>,
    /// Set by `write`, cleared by `rebuild`
    pub(crate) stale: bool,
}

/// Shape of a compiled dispatcher
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CompileStats {
    /// Keys reachable through the dispatcher
    pub entries: usize,
    /// Distinct hash codes, one branch each
    pub branches: usize,
    /// Branches holding more than one key
    pub collision_groups: usize,
    /// Size of the largest collision group, or 1 if there are no collisions (0 when empty)
    pub largest_group: usize,
}
