use core::fmt;
use core::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::raw::{Handle, RawLinkedTree};

/// A cursor over the keys of a [`LinkedTree`] in preorder.
///
/// This `struct` is created by [`LinkedTree::preorder_iter`]. It holds only
/// the node it will yield next; each step works out where to go from that
/// node's child and parent links.
///
/// # Examples
///
/// ```
/// use linked_tree::{Error, LinkedTree};
///
/// let mut tree = LinkedTree::new();
/// tree.insert_keys(&[2, 1, 3]);
///
/// let mut cursor = tree.preorder_iter();
/// while cursor.has_next() {
///     println!("{}", cursor.next_key()?);
/// }
/// assert_eq!(cursor.next_key(), Err(Error::Exhausted));
/// # Ok::<(), Error>(())
/// ```
///
/// [`LinkedTree`]: crate::LinkedTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PreorderIter<'a, V> {
    raw: &'a RawLinkedTree<V>,
    next: Option<Handle>,
}

/// A cursor over the keys of a [`LinkedTree`] in ascending order.
///
/// This `struct` is created by [`LinkedTree::inorder_iter`].
///
/// [`LinkedTree`]: crate::LinkedTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct InorderIter<'a, V> {
    raw: &'a RawLinkedTree<V>,
    next: Option<Handle>,
}

impl<'a, V> PreorderIter<'a, V> {
    pub(super) fn new(raw: &'a RawLinkedTree<V>) -> Self {
        Self { raw, next: raw.root() }
    }

    /// Returns `true` if [`next_key`](Self::next_key) would yield a key.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Yields the next key in preorder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once every key has been yielded.
    pub fn next_key(&mut self) -> Result<i32> {
        let current = self.next.ok_or(Error::Exhausted)?;
        let node = self.raw.node(current);
        let key = node.key();
        self.next = match node.left().or(node.right()) {
            Some(child) => Some(child),
            None => self.next_right_branch(current),
        };
        Ok(key)
    }

    /// After a leaf: climbs until some ancestor has a right child that is not
    /// the subtree just finished.
    fn next_right_branch(&self, leaf: Handle) -> Option<Handle> {
        let mut child = leaf;
        let mut parent = self.raw.node(leaf).parent();
        while let Some(handle) = parent {
            let node = self.raw.node(handle);
            match node.right() {
                Some(right) if right != child => return Some(right),
                _ => {
                    child = handle;
                    parent = node.parent();
                }
            }
        }
        None
    }
}

impl<'a, V> InorderIter<'a, V> {
    pub(super) fn new(raw: &'a RawLinkedTree<V>) -> Self {
        Self {
            raw,
            next: raw.root().map(|root| raw.leftmost(root)),
        }
    }

    /// Returns `true` if [`next_key`](Self::next_key) would yield a key.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Yields the next key in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once every key has been yielded.
    pub fn next_key(&mut self) -> Result<i32> {
        let current = self.next.ok_or(Error::Exhausted)?;
        let node = self.raw.node(current);
        let key = node.key();
        self.next = match node.right() {
            Some(right) => Some(self.raw.leftmost(right)),
            None => self.first_unfinished_ancestor(current),
        };
        Ok(key)
    }

    /// Climbs past every ancestor whose right subtree we are leaving; the
    /// first ancestor reached from its left side is next.
    fn first_unfinished_ancestor(&self, from: Handle) -> Option<Handle> {
        let mut child = from;
        let mut parent = self.raw.node(from).parent();
        while let Some(handle) = parent {
            let node = self.raw.node(handle);
            if node.right() != Some(child) {
                break;
            }
            child = handle;
            parent = node.parent();
        }
        parent
    }
}

impl<V> Iterator for PreorderIter<'_, V> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next_key().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.has_next()), Some(self.raw.len()))
    }
}

impl<V> Iterator for InorderIter<'_, V> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next_key().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.has_next()), Some(self.raw.len()))
    }
}

impl<V> FusedIterator for PreorderIter<'_, V> {}

impl<V> FusedIterator for InorderIter<'_, V> {}

impl<V> Clone for PreorderIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            next: self.next,
        }
    }
}

impl<V> Clone for InorderIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw,
            next: self.next,
        }
    }
}

impl<V> fmt::Debug for PreorderIter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreorderIter")
            .field("next", &self.next.map(|handle| self.raw.node(handle).key()))
            .finish()
    }
}

impl<V> fmt::Debug for InorderIter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InorderIter")
            .field("next", &self.next.map(|handle| self.raw.node(handle).key()))
            .finish()
    }
}
