use thiserror::Error;

/// Returned by `lookup` when the compiled dispatcher has no path for a key
///
/// Carries the `Debug` rendering of the key that was looked up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("key not found: {key}")]
pub struct KeyNotFound {
    pub key: String,
}

impl KeyNotFound {
    pub(crate) fn for_key<Q: std::fmt::Debug + ?Sized>(key: &Q) -> Self {
        Self {
            key: format!("{:?}", key),
        }
    }
}
