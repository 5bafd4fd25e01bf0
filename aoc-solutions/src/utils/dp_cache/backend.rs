//! Storage backends for the DP cache.

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - `get` returns `None` for an index that was never inserted
/// - `get_or_insert` only calls `f` when the index is vacant, and never
///   replaces an existing value
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value for `index`, computing and storing it with `f` if vacant.
    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: I, f: F) -> &K;

    /// Number of cached values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense indices starting from 0, such as positions in a
/// string. The Vec grows to fit the largest index seen.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new VecBackend with room for indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn get_or_insert<F: FnOnce() -> K>(&mut self, index: usize, f: F) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert_with(f)
    }

    fn len(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}
