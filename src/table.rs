//! Actual table implementation

use crate::*;
use indexmap::IndexMap;
use log::{debug, trace};
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

impl<K, V> Default for CompiledLookupTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CompiledLookupTable<K, V> {
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V, S: BuildHasher> CompiledLookupTable<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            store: IndexMap::with_capacity_and_hasher(capacity, hasher),
            dispatcher: Dispatcher::empty(),
            stale: false,
        }
    }

    pub fn hasher(&self) -> &S {
        self.store.hasher()
    }
}

impl<K, V, S> CompiledLookupTable<K, V, S> {
    /// Number of entries in the store, which may differ from what lookups can see
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Entries of the store, in the order their keys were first written
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.store.iter()
    }

    /// Number of keys reachable through the current dispatcher
    pub fn compiled_len(&self) -> usize {
        self.dispatcher.len()
    }

    /// Whether anything was written since the last rebuild
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// How many times the dispatcher has been rebuilt
    pub fn generation(&self) -> u32 {
        self.dispatcher.generation()
    }

    pub fn stats(&self) -> CompileStats {
        self.dispatcher.stats()
    }
}

impl<K, V, S> CompiledLookupTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts or overwrites `key` in the store, returning the value it replaced
    ///
    /// Lookups won't see the change until the next `rebuild`.
    pub fn write(&mut self, key: K, value: V) -> Option<V> {
        self.stale = true;
        self.store.insert(key, value)
    }

    /// Resolves `key` through the dispatcher compiled by the last `rebuild`
    ///
    /// A key whose hash code is unique in the compiled snapshot resolves without comparing keys, so
    /// an unknown key that happens to share that hash code resolves to the same value.
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let hash = Self::hash(self.store.hasher(), key);
        self.dispatcher.resolve(hash, key).ok_or_else(|| {
            trace!(
                "no path for {:?} in generation {}",
                key,
                self.dispatcher.generation()
            );
            KeyNotFound::for_key(key)
        })
    }

    #[inline]
    fn hash<Q>(build_hasher: &S, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = build_hasher.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

impl<K, V, S> CompiledLookupTable<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Replaces the dispatcher with one compiled from the current store
    ///
    /// Keys sharing a hash code are compared in the order they were first written.
    pub fn rebuild(&mut self) {
        let generation = self.dispatcher.generation().wrapping_add(1);
        let hasher = self.store.hasher();
        let dispatcher =
            Dispatcher::compile(self.store.iter(), |key| Self::hash(hasher, key), generation);
        debug!("compiled generation {}: {:?}", generation, dispatcher.stats());
        self.dispatcher = dispatcher;
        self.stale = false;
    }
}

impl<K, Q, V, S> Index<&Q> for CompiledLookupTable<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + Debug + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Panics if the dispatcher has no path for `key`
    fn index(&self, key: &Q) -> &V {
        match self.lookup(key) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for CompiledLookupTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.write(key, value);
        }
    }
}

/// Writes every pair, then compiles once
impl<K, V, S> FromIterator<(K, V)> for CompiledLookupTable<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.extend(iter);
        table.rebuild();
        table
    }
}

impl<K: Debug, V: Debug, S> Debug for CompiledLookupTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledLookupTable")
            .field("generation", &self.dispatcher.generation())
            .field("stale", &self.stale)
            .field("store", &self.store)
            .finish()
    }
}
