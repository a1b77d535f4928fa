//! The compiled dispatcher
//!
//! A dispatcher is a sorted table of hash codes with one branch per code. Resolving a key is a
//! search over that table followed, only for collision groups, by an equality scan. Small tables
//! are searched linearly, larger ones by binary search, much like a compiled `switch`.

use crate::{CompileStats, LINEAR_DISPATCH_LIMIT};
use std::borrow::Borrow;

/// What a hash code resolves to
pub enum Branch<K, V> {
    /// The only key with this hash; its value is returned without comparing keys
    Direct(V),
    /// Keys sharing this hash, in the order they were enumerated at compile time
    Collision(Box<[(K, V)]>),
}

pub struct Dispatcher<K, V> {
    generation: u32,
    entries: usize,
    /// Sorted, no duplicates. `branches[i]` belongs to `hashes[i]`
    hashes: Box<[u64]>,
    branches: Box<[Branch<K, V>]>,
}

impl<K, V> Dispatcher<K, V> {
    pub fn empty() -> Self {
        Self {
            generation: 0,
            entries: 0,
            hashes: Box::new([]),
            branches: Box::new([]),
        }
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn stats(&self) -> CompileStats {
        let mut stats = CompileStats {
            entries: self.entries,
            branches: self.branches.len(),
            collision_groups: 0,
            largest_group: if self.entries == 0 { 0 } else { 1 },
        };
        for branch in self.branches.iter() {
            if let Branch::Collision(group) = branch {
                stats.collision_groups += 1;
                stats.largest_group = stats.largest_group.max(group.len());
            }
        }
        stats
    }

    fn branch(&self, hash: u64) -> Option<&Branch<K, V>> {
        let index = if self.hashes.len() <= LINEAR_DISPATCH_LIMIT {
            self.hashes.iter().position(|&h| h == hash)?
        } else {
            self.hashes.binary_search(&hash).ok()?
        };
        Some(&self.branches[index])
    }

    /// Resolves `key`, whose hash under the compiling hasher is `hash`
    pub fn resolve<Q>(&self, hash: u64, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.branch(hash)? {
            Branch::Direct(value) => Some(value),
            Branch::Collision(group) => group
                .iter()
                .find(|(candidate, _)| candidate.borrow() == key)
                .map(|(_, value)| value),
        }
    }
}

impl<K: Clone, V: Clone> Dispatcher<K, V> {
    /// Compiles a dispatcher over `entries`
    ///
    /// Keys must be distinct. Within a collision group, keys keep the order `entries` yields them.
    pub fn compile<'e, I, H>(entries: I, hash: H, generation: u32) -> Self
    where
        I: IntoIterator<Item = (&'e K, &'e V)>,
        H: Fn(&K) -> u64,
        K: 'e,
        V: 'e,
    {
        let mut hashed: Vec<(u64, &K, &V)> = entries
            .into_iter()
            .map(|(key, value)| (hash(key), key, value))
            .collect();
        // Stable, so each bucket stays in enumeration order
        hashed.sort_by_key(|&(h, _, _)| h);

        let mut hashes = Vec::new();
        let mut branches = Vec::new();
        let mut rest = &hashed[..];
        while let Some(&(h, _, _)) = rest.first() {
            let bucket_len = rest.iter().take_while(|&&(other, _, _)| other == h).count();
            let (bucket, tail) = rest.split_at(bucket_len);
            let branch = match bucket {
                [(_, _, value)] => Branch::Direct(V::clone(value)),
                _ => Branch::Collision(
                    bucket
                        .iter()
                        .map(|&(_, key, value)| (key.clone(), value.clone()))
                        .collect(),
                ),
            };
            hashes.push(h);
            branches.push(branch);
            rest = tail;
        }

        Self {
            generation,
            entries: hashed.len(),
            hashes: hashes.into_boxed_slice(),
            branches: branches.into_boxed_slice(),
        }
    }
}
