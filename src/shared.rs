use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::TreeError;
use crate::tree::BinaryTree;

/// A [`BinaryTree`] behind one lock, shareable across threads.
///
/// Every call holds the lock for its whole duration. Use [`with`](Self::with)
/// when several steps must see the same tree state.
pub struct SharedTree<T = f64>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    inner: Arc<Mutex<BinaryTree<T>>>,
}

impl<T> Clone for SharedTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    pub fn new() -> Self {
        Self::from_tree(BinaryTree::new())
    }

    pub fn from_tree(tree: BinaryTree<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    pub fn insert(&self, value: T) {
        self.inner.lock().insert(value);
    }

    pub fn heapify(&self, root_index: usize) -> Result<(), TreeError> {
        self.inner.lock().heapify(root_index)
    }

    pub fn build_max_heap(&self) {
        self.inner.lock().build_max_heap();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn is_max_heap(&self) -> bool {
        self.inner.lock().is_max_heap()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut BinaryTree<T>) -> R) -> R {
        let mut tree = self.inner.lock();
        f(&mut *tree)
    }
}

impl<T> SharedTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd + Clone,
{
    pub fn values(&self) -> Vec<T> {
        self.inner.lock().values()
    }

    pub fn edges(&self) -> Vec<(T, T)> {
        self.inner.lock().edges()
    }
}

impl<T> Default for SharedTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
