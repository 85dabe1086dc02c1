use core::fmt;
use core::slice;

use smallvec::SmallVec;

/// The ordered payloads stored under one key of a [`LinkedTree`].
///
/// Inserting a key that is already present does not create a new node; the
/// new payload is placed at the front of this list, so the most recent insert
/// comes first. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use linked_tree::LinkedTree;
///
/// let mut tree = LinkedTree::new();
/// tree.insert(7, "first");
/// tree.insert(7, "second");
///
/// let values = tree.search(7).unwrap();
/// assert_eq!(values.len(), 2);
/// assert_eq!(values.first(), Some(&"second"));
/// ```
///
/// [`LinkedTree`]: crate::LinkedTree
#[derive(Clone, PartialEq, Eq)]
pub struct ValueList<V> {
    items: SmallVec<[V; 1]>,
}

impl<V> ValueList<V> {
    /// Makes a new, empty `ValueList`.
    #[must_use]
    pub fn new() -> Self {
        Self { items: SmallVec::new() }
    }

    pub(crate) fn single(value: V) -> Self {
        let mut list = Self::new();
        list.items.push(value);
        list
    }

    /// Inserts `value` at position `index`, shifting later items back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: V) {
        assert!(index <= self.items.len(), "`ValueList::insert()` - `index` > `len`!");
        self.items.insert(index, value);
    }

    /// Adds `value` as the first item.
    pub fn push_front(&mut self, value: V) {
        self.items.insert(0, value);
    }

    /// Adds `value` as the last item.
    pub fn push_back(&mut self, value: V) {
        self.items.push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.items.get(index)
    }

    /// Returns the most recently inserted payload.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.items.first()
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, V> {
        self.items.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    #[must_use]
    pub fn into_vec(self) -> alloc::vec::Vec<V> {
        self.items.into_vec()
    }
}

impl<V> Default for ValueList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ValueList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<V> IntoIterator for ValueList<V> {
    type Item = V;
    type IntoIter = smallvec::IntoIter<[V; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a ValueList<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ValueList<V> {
    type Item = &'a mut V;
    type IntoIter = slice::IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<V> FromIterator<V> for ValueList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
