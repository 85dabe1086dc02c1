use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::raw::{DepthFirst, RawLinkedTree};
use crate::values::ValueList;

mod bulk;
mod iter;
mod traversal;

pub use iter::{InorderIter, PreorderIter};

/// A binary search tree keyed by `i32` that keeps every payload inserted
/// under a key.
///
/// Each distinct key owns one node. Inserting a key that is already present
/// prepends the payload to that key's [`ValueList`] instead of adding a node.
/// Every node also records its parent, which is what lets
/// [`preorder_iter`](LinkedTree::preorder_iter) and
/// [`inorder_iter`](LinkedTree::inorder_iter) advance one key at a time
/// without recursion or an explicit stack.
///
/// The tree does not rebalance itself. Inserting keys in sorted order yields a
/// chain whose height equals the number of keys; building from a batch with
/// [`from_parallel`](LinkedTree::from_parallel) or [`FromIterator`] inserts
/// medians first and keeps the height near log<sub>2</sub> n.
///
/// # Examples
///
/// ```
/// use linked_tree::LinkedTree;
///
/// let mut tree = LinkedTree::new();
/// for key in [37, 26, 42, 13, 35, 56, 30, 47, 70] {
///     tree.insert(key, format!("data for key {key}"));
/// }
///
/// assert_eq!(tree.depth(13), Some(2));
/// assert_eq!(tree.inorder_iter().collect::<Vec<_>>(), [13, 26, 30, 35, 37, 42, 47, 56, 70]);
///
/// let removed = tree.delete(26).unwrap();
/// assert_eq!(removed.first().map(String::as_str), Some("data for key 26"));
/// assert_eq!(tree.search(26), None);
/// ```
pub struct LinkedTree<V> {
    raw: RawLinkedTree<V>,
}

impl<V> LinkedTree<V> {
    /// Makes a new, empty `LinkedTree`.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: RawLinkedTree::new() }
    }

    /// Creates an empty tree with room for at least `capacity` distinct keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let tree: LinkedTree<()> = LinkedTree::with_capacity(16);
    /// assert!(tree.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawLinkedTree::with_capacity(capacity),
        }
    }

    /// Number of distinct keys the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Number of distinct keys in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Stores `value` under `key`.
    ///
    /// If `key` is already present its node is reused and `value` becomes the
    /// first entry of its list; the shape of the tree does not change.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: i32, value: V) {
        self.raw.insert(key, value);
    }

    /// Returns the live list of payloads stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let mut tree = LinkedTree::new();
    /// tree.insert(1, 'a');
    /// tree.insert(1, 'b');
    /// assert_eq!(tree.search(1).map(|v| v.as_slice()), Some(&['b', 'a'][..]));
    /// assert!(tree.search(2).is_none());
    /// ```
    #[must_use]
    pub fn search(&self, key: i32) -> Option<&ValueList<V>> {
        self.raw.get(key)
    }

    /// Mutable form of [`search`](LinkedTree::search).
    pub fn search_mut(&mut self, key: i32) -> Option<&mut ValueList<V>> {
        self.raw.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: i32) -> bool {
        self.raw.find(key).is_some()
    }

    /// Removes `key` and returns every payload that was stored under it.
    ///
    /// A node with two children takes over the key and payloads of its
    /// in-order successor, and the successor's node is removed instead.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn delete(&mut self, key: i32) -> Option<ValueList<V>> {
        self.raw.remove(key)
    }

    /// Removes the largest key and returns it, or `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let mut tree = LinkedTree::new();
    /// assert_eq!(tree.delete_max(), None);
    ///
    /// tree.insert(4, ());
    /// assert_eq!(tree.delete_max(), Some(4));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete_max(&mut self) -> Option<i32> {
        self.raw.pop_max().map(|(key, _)| key)
    }

    /// Removes the largest key and returns it with its payloads.
    pub fn pop_max(&mut self) -> Option<(i32, ValueList<V>)> {
        self.raw.pop_max()
    }

    /// Number of edges between the root and the node holding `key`.
    ///
    /// Only the subtree that the ordering says could contain `key` is
    /// searched. Returns `None` if the key is absent.
    #[must_use]
    pub fn depth(&self, key: i32) -> Option<usize> {
        self.raw.depth(key)
    }

    /// Loop-based variant of [`depth`](LinkedTree::depth).
    ///
    /// For every key in the tree both return the same depth. For an absent
    /// key the walk does not stop at the first missing child: it falls
    /// through to the sibling subtree (without counting a level) until it
    /// reaches a leaf, and then reports `None`.
    #[must_use]
    pub fn depth_iter(&self, key: i32) -> Option<usize> {
        self.raw.depth_iter(key)
    }

    /// Sum of all even keys; `0` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let tree: LinkedTree<()> = [4, 1, 3, 6, 5, 2].into_iter().map(|k| (k, ())).collect();
    /// assert_eq!(tree.sum_evens(), 12);
    /// ```
    #[must_use]
    pub fn sum_evens(&self) -> i64 {
        self.raw.sum_evens()
    }

    /// Returns a cursor that yields keys in preorder (node, left, right).
    pub fn preorder_iter(&self) -> PreorderIter<'_, V> {
        PreorderIter::new(&self.raw)
    }

    /// Returns a cursor that yields keys in ascending order.
    pub fn inorder_iter(&self) -> InorderIter<'_, V> {
        InorderIter::new(&self.raw)
    }
}

impl LinkedTree<String> {
    /// Inserts each key in order with the payload `"data for key {key}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let mut tree = LinkedTree::new();
    /// tree.insert_keys(&[2, 1]);
    /// assert_eq!(tree.search(1).unwrap().first().unwrap(), "data for key 1");
    /// ```
    pub fn insert_keys(&mut self, keys: &[i32]) {
        for &key in keys {
            self.insert(key, format!("data for key {key}"));
        }
    }
}

impl<V: Clone> Clone for LinkedTree<V> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl<V> Default for LinkedTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.raw.walk(DepthFirst::Inorder, &mut |node| {
            map.entry(&node.key(), node.values());
        });
        map.finish()
    }
}

impl<V> Extend<(i32, V)> for LinkedTree<V> {
    /// Inserts each pair in iteration order, exactly as repeated
    /// [`insert`](LinkedTree::insert) calls would.
    fn extend<I: IntoIterator<Item = (i32, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a LinkedTree<V> {
    type Item = i32;
    type IntoIter = InorderIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn debug_lists_keys_in_order_with_values() {
        let mut tree = LinkedTree::new();
        tree.extend([(2, 'b'), (1, 'a'), (2, 'c')]);
        assert_eq!(format!("{tree:?}"), "{1: ['a'], 2: ['c', 'b']}");
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = LinkedTree::new();
        tree.insert_keys(&[5, 3, 8]);
        let copy = tree.clone();
        tree.delete(5);

        assert_eq!(copy.len(), 3);
        assert_eq!(copy.preorder_iter().collect::<Vec<_>>(), vec![5, 3, 8]);
        assert_eq!(tree.preorder_iter().collect::<Vec<_>>(), vec![8, 3]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut tree = LinkedTree::with_capacity(4);
        tree.insert_keys(&[1, 2, 3]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(1), None);

        tree.insert(9, String::from("nine"));
        assert!(tree.contains_key(9));
        assert_eq!(tree.depth(9), Some(0));
    }

    #[test]
    fn search_mut_edits_live_list() {
        let mut tree = LinkedTree::new();
        tree.insert(1, 10);
        tree.search_mut(1).unwrap().push_back(20);
        assert_eq!(tree.search(1).unwrap().as_slice(), &[10, 20]);
        assert_eq!(tree.pop_max().map(|(k, v)| (k, v.into_vec())), Some((1, vec![10, 20])));
    }
}
