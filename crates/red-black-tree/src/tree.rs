use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::TreeError;
use crate::node::RawTree;
use crate::types::Entry;

/// Ordered map backed by a red-black tree, safe to share between threads.
///
/// Every operation takes one tree-wide [`RwLock`]: lookups, walks and
/// printing share it, mutations hold it exclusively. The red-black
/// invariants hold whenever the lock is released. Results are owned
/// snapshots, so nothing returned keeps the lock held.
///
/// ```
/// use red_black_tree::{RbTree, TreeError};
///
/// let tree = RbTree::new();
/// tree.insert(2, "b").unwrap();
/// tree.insert(1, "a").unwrap();
/// assert_eq!(tree.insert(2, "x"), Err(TreeError::already_exists(&2)));
///
/// assert_eq!(tree.search(&1).unwrap().value, "a");
/// assert_eq!(tree.delete(&2), Ok("b"));
/// assert_eq!(tree.search(&2), Err(TreeError::not_found(&2)));
/// ```
pub struct RbTree<K, V> {
    inner: RwLock<RawTree<K, V>>,
}

impl<K, V> RbTree<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(RawTree::with_capacity(capacity)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RawTree<K, V>>, TreeError> {
        self.inner.read().map_err(|_| TreeError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RawTree<K, V>>, TreeError> {
        self.inner.write().map_err(|_| TreeError::Poisoned)
    }

    /// Number of entries.
    pub fn len(&self) -> Result<usize, TreeError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, TreeError> {
        Ok(self.len()? == 0)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> Result<usize, TreeError> {
        Ok(self.read()?.height())
    }

    pub fn clear(&self) -> Result<(), TreeError> {
        let mut tree = self.write()?;
        tree.clear();
        debug!("cleared tree");
        Ok(())
    }
}

impl<K: Ord + fmt::Debug, V> RbTree<K, V> {
    /// Adds a new entry. Existing keys are rejected, never overwritten.
    pub fn insert(&self, key: K, value: V) -> Result<(), TreeError> {
        let mut tree = self.write()?;
        let node = tree.insert(key, value)?;
        debug!(node, len = tree.len(), "inserted");
        Ok(())
    }

    /// Replaces the value stored under `key`, returning the old one.
    pub fn update(&self, key: &K, value: V) -> Result<V, TreeError> {
        let mut tree = self.write()?;
        let node = tree.search(key).ok_or_else(|| TreeError::not_found(key))?;
        let old = std::mem::replace(&mut tree.arena[node].v, value);
        debug!(node, "updated");
        Ok(old)
    }

    /// Removes `key`, returning its value.
    pub fn delete(&self, key: &K) -> Result<V, TreeError> {
        let mut tree = self.write()?;
        let value = tree.delete(key)?;
        debug!(len = tree.len(), "deleted");
        Ok(value)
    }
}

impl<K: Ord, V> RbTree<K, V> {
    pub fn contains_key(&self, key: &K) -> Result<bool, TreeError> {
        Ok(self.read()?.search(key).is_some())
    }

    /// Re-checks every red-black invariant and returns the black height.
    pub fn verify(&self) -> Result<usize, TreeError> {
        Ok(self.read()?.verify()?)
    }
}

impl<K: Ord, V: Clone> RbTree<K, V> {
    pub fn get(&self, key: &K) -> Result<Option<V>, TreeError> {
        let tree = self.read()?;
        Ok(tree.search(key).map(|node| tree.arena[node].v.clone()))
    }
}

impl<K: Ord + Clone + fmt::Debug, V: Clone> RbTree<K, V> {
    pub fn search(&self, key: &K) -> Result<Entry<K, V>, TreeError> {
        let tree = self.read()?;
        let node = tree.search(key).ok_or_else(|| TreeError::not_found(key))?;
        Ok(Entry::snapshot(&tree.arena[node]))
    }
}

impl<K: Clone, V: Clone> RbTree<K, V> {
    /// Every entry, level by level from the root.
    pub fn to_list(&self) -> Result<Vec<Entry<K, V>>, TreeError> {
        let tree = self.read()?;
        Ok(tree.breadth_first().into_iter().map(Entry::snapshot).collect())
    }

    /// Every entry in ascending key order.
    pub fn in_order(&self) -> Result<Vec<Entry<K, V>>, TreeError> {
        let tree = self.read()?;
        Ok(tree.in_order().into_iter().map(Entry::snapshot).collect())
    }
}

impl<K: fmt::Display, V: fmt::Display> RbTree<K, V> {
    /// Writes the tree diagram, or `empty` for an empty tree.
    ///
    /// Each line reads `<key>-<value>(<COLOUR>)`.
    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> Result<(), TreeError> {
        let tree = self.read()?;
        match tree.root {
            None => out.write_str("empty\n")?,
            Some(root) => tree_dump::print(&tree.node_ref(root), out)?,
        }
        Ok(())
    }
}

/// Renders [`RbTree::print`]; a poisoned tree renders as `poisoned`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for RbTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.print(f) {
            Ok(()) => Ok(()),
            Err(TreeError::Poisoned) => f.write_str("poisoned\n"),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl<K, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for RbTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("RbTree");
        match self.len() {
            Ok(len) => debug.field("len", &len),
            Err(_) => debug.field("poisoned", &true),
        };
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;
    use crate::error::{Fault, OrAbort};

    #[test]
    fn test_update_keeps_shape() {
        let tree = RbTree::new();
        for k in 1..=5 {
            tree.insert(k, k * 10).unwrap();
        }
        let before = tree.to_list().unwrap();

        assert_eq!(tree.update(&3, 33), Ok(30));
        assert_eq!(tree.update(&9, 90), Err(TreeError::not_found(&9)));

        let after = tree.to_list().unwrap();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!((b.key, b.colour), (a.key, a.colour));
        }
        assert_eq!(tree.get(&3), Ok(Some(33)));
    }

    fn poisoned() -> RbTree<i32, &'static str> {
        let tree = RbTree::new();
        tree.insert(1, "a").unwrap();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = tree.write().unwrap();
            Err::<(), _>(Fault::MissingParent { node: 0 }).or_abort();
        }));
        assert!(outcome.is_err());
        tree
    }

    #[test]
    fn test_aborted_mutation_poisons_tree() {
        let tree = poisoned();
        assert_eq!(tree.insert(2, "b"), Err(TreeError::Poisoned));
        assert_eq!(tree.search(&1), Err(TreeError::Poisoned));
        assert_eq!(tree.to_list(), Err(TreeError::Poisoned));
    }

    #[test]
    fn test_poisoned_reads_report_poison() {
        let tree = poisoned();
        assert_eq!(tree.len(), Err(TreeError::Poisoned));
        assert_eq!(tree.is_empty(), Err(TreeError::Poisoned));
        assert_eq!(tree.contains_key(&1), Err(TreeError::Poisoned));
        assert_eq!(tree.get(&1), Err(TreeError::Poisoned));
        assert_eq!(format!("{tree:?}"), "RbTree { poisoned: true }");
    }

    #[test]
    fn test_poisoned_tree_displays_marker() {
        let tree = poisoned();
        let mut out = String::new();
        assert_eq!(tree.print(&mut out), Err(TreeError::Poisoned));
        assert_eq!(tree.to_string(), "poisoned\n");
    }

    #[test]
    fn test_debug_shows_len() {
        let tree = RbTree::new();
        tree.insert("k", 1).unwrap();
        assert_eq!(format!("{tree:?}"), "RbTree { len: 1 }");
    }
}
