//! A lookup table that compiles its key set ahead of time
//!
//! Writes go to an ordinary insertion-ordered map. Lookups never touch that map: they go through a
//! dispatcher compiled by the last call to `rebuild`, which branches on the key's hash and only
//! compares keys for equality inside hash collision groups. The dispatcher is allowed to go stale;
//! keeping it in sync is the caller's job.

mod dispatch;
mod error;
mod structs;
mod table;

/// Dispatchers with at most this many branches are scanned linearly instead of binary searched
pub(crate) const LINEAR_DISPATCH_LIMIT: usize = 8;

pub(crate) use dispatch::Dispatcher;
pub use error::KeyNotFound;
pub use structs::{CompileStats, CompiledLookupTable};
