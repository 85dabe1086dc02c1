use super::handle::Handle;
use crate::values::ValueList;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// One distinct key and everything stored under it.
///
/// `left` and `right` are the owning links of the tree shape; `parent` is a
/// navigation-only back-reference and is `None` exactly for the root.
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    key: i32,
    values: ValueList<V>,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<V> Node<V> {
    /// Creates a detached node holding a single payload.
    pub(crate) fn new(key: i32, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            values: ValueList::single(value),
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> i32 {
        self.key
    }

    pub(crate) fn values(&self) -> &ValueList<V> {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut ValueList<V> {
        &mut self.values
    }

    /// Moves another node's key and payloads into this one, returning the
    /// payloads that were here before.
    pub(crate) fn replace_contents(&mut self, key: i32, values: ValueList<V>) -> ValueList<V> {
        self.key = key;
        core::mem::replace(&mut self.values, values)
    }

    pub(crate) fn into_values(self) -> ValueList<V> {
        self.values
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// The single child of a node with at most one child (left preferred).
    pub(crate) fn only_child(&self) -> Option<Handle> {
        self.left.or(self.right)
    }

    /// The side a new key should descend to from this node.
    #[inline]
    pub(crate) fn side_for(&self, key: i32) -> Side {
        if key < self.key { Side::Left } else { Side::Right }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_no_links_and_one_value() {
        let node = Node::new(5, "five", None);
        assert_eq!(node.only_child(), None);
        assert_eq!(node.key(), 5);
        assert_eq!(node.values().as_slice(), &["five"]);
        assert_eq!(node.parent(), None);
    }

    #[test]
    fn child_slots() {
        let mut node = Node::new(10, (), Some(Handle::from_index(0)));
        node.set_child(Side::Right, Some(Handle::from_index(2)));
        assert_eq!(node.only_child(), Some(Handle::from_index(2)));

        node.set_child(Side::Left, Some(Handle::from_index(1)));
        assert_eq!(node.child(Side::Left), Some(Handle::from_index(1)));
        assert_eq!(node.only_child(), Some(Handle::from_index(1)));
    }

    #[test]
    fn equal_keys_go_right() {
        let node = Node::new(10, (), None);
        assert_eq!(node.side_for(9), Side::Left);
        assert_eq!(node.side_for(10), Side::Right);
        assert_eq!(node.side_for(11), Side::Right);
    }

    #[test]
    fn replace_contents_returns_old_values() {
        let mut node = Node::new(1, 'a', None);
        let old = node.replace_contents(2, ValueList::single('b'));
        assert_eq!(node.key(), 2);
        assert_eq!(old.as_slice(), &['a']);
        assert_eq!(node.into_values().as_slice(), &['b']);
    }
}
