use alloc::collections::VecDeque;

use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::values::ValueList;

/// Depth-first visiting orders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DepthFirst {
    Preorder,
    Inorder,
    Postorder,
}

/// The unbalanced binary search tree backing `LinkedTree`.
///
/// Every live node sits in `nodes`; `root` is the only handle not referenced
/// by some node's child link. The number of live nodes is the number of
/// distinct keys.
#[derive(Clone)]
pub(crate) struct RawLinkedTree<V> {
    nodes: Arena<Node<V>>,
    root: Option<Handle>,
}

impl<V> RawLinkedTree<V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` distinct keys.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<V> {
        self.nodes.get(handle)
    }

    /// Returns the handle of the node holding `key`.
    pub(crate) fn find(&self, key: i32) -> Option<Handle> {
        let mut trav = self.root;
        while let Some(handle) = trav {
            let node = self.nodes.get(handle);
            if node.key() == key {
                return Some(handle);
            }
            trav = node.child(node.side_for(key));
        }
        None
    }

    pub(crate) fn get(&self, key: i32) -> Option<&ValueList<V>> {
        self.find(key).map(|handle| self.nodes.get(handle).values())
    }

    pub(crate) fn get_mut(&mut self, key: i32) -> Option<&mut ValueList<V>> {
        let handle = self.find(key)?;
        Some(self.nodes.get_mut(handle).values_mut())
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key gets `value` prepended to its list and the shape is
    /// left untouched. Returns `true` if a new node was created.
    pub(crate) fn insert(&mut self, key: i32, value: V) -> bool {
        let mut parent: Option<(Handle, Side)> = None;
        let mut trav = self.root;

        while let Some(handle) = trav {
            let node = self.nodes.get_mut(handle);
            if node.key() == key {
                node.values_mut().push_front(value);
                trace!(key, count = node.values().len(), "merged value into existing key");
                return false;
            }
            let side = node.side_for(key);
            parent = Some((handle, side));
            trav = node.child(side);
        }

        let new_node = self.nodes.alloc(Node::new(key, value, parent.map(|(handle, _)| handle)));
        match parent {
            None => self.root = Some(new_node),
            Some((handle, side)) => self.nodes.get_mut(handle).set_child(side, Some(new_node)),
        }
        trace!(key, len = self.len(), "inserted new node");
        true
    }

    /// Removes `key` and returns the payloads that were stored under it.
    pub(crate) fn remove(&mut self, key: i32) -> Option<ValueList<V>> {
        let target = self.find(key)?;
        Some(self.remove_node(target))
    }

    /// Removes the largest key together with its payloads.
    pub(crate) fn pop_max(&mut self) -> Option<(i32, ValueList<V>)> {
        let max = self.rightmost(self.root?);
        // The rightmost node has no right child, so it can be spliced directly.
        self.splice_out(max);
        let node = self.nodes.take(max);
        trace!(key = node.key(), "removed maximum");
        Some((node.key(), node.into_values()))
    }

    fn remove_node(&mut self, target: Handle) -> ValueList<V> {
        let node = self.nodes.get(target);
        if let (Some(_), Some(right)) = (node.left(), node.right()) {
            // Two children: the in-order successor has no left child, so taking
            // it out of the tree is one of the simple cases below.
            let successor = self.leftmost(right);
            self.splice_out(successor);
            let successor = self.nodes.take(successor);
            trace!(
                key = self.nodes.get(target).key(),
                successor = successor.key(),
                "removed node with two children"
            );
            let key = successor.key();
            self.nodes.get_mut(target).replace_contents(key, successor.into_values())
        } else {
            self.splice_out(target);
            let node = self.nodes.take(target);
            trace!(key = node.key(), "removed node with at most one child");
            node.into_values()
        }
    }

    /// Unlinks a node that has at most one child, promoting that child into
    /// its place. The node's slot is left for the caller to reclaim.
    fn splice_out(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        debug_assert!(node.left().is_none() || node.right().is_none());
        let child = node.only_child();
        let parent = node.parent();

        match parent {
            None => self.root = child,
            Some(p) => {
                let side = self.side_of(p, handle);
                self.nodes.get_mut(p).set_child(side, child);
            }
        }
        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(parent);
        }
    }

    fn side_of(&self, parent: Handle, child: Handle) -> Side {
        if self.nodes.get(parent).left() == Some(child) { Side::Left } else { Side::Right }
    }

    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    /// Depth of `key` below the root, following only the path the ordering allows.
    pub(crate) fn depth(&self, key: i32) -> Option<usize> {
        self.depth_in(self.root?, key)
    }

    fn depth_in(&self, at: Handle, key: i32) -> Option<usize> {
        let node = self.nodes.get(at);
        if node.key() == key {
            return Some(0);
        }
        let child = node.child(node.side_for(key))?;
        self.depth_in(child, key).map(|depth| depth + 1)
    }

    /// Loop form of [`depth`](Self::depth).
    ///
    /// When the child the ordering points at is missing, the walk continues
    /// into the other child without counting a level, and gives up only at a
    /// leaf. Insert and delete never place a key off its ordering path, so for
    /// keys that are present this agrees with `depth`.
    pub(crate) fn depth_iter(&self, key: i32) -> Option<usize> {
        let mut trav = self.root?;
        let mut depth = 0;
        loop {
            let node = self.nodes.get(trav);
            if node.key() == key {
                return Some(depth);
            }
            match node.child(node.side_for(key)) {
                Some(next) => {
                    depth += 1;
                    trav = next;
                }
                None => trav = node.only_child()?,
            }
        }
    }

    pub(crate) fn sum_evens(&self) -> i64 {
        self.root.map_or(0, |root| self.sum_evens_in(root))
    }

    fn sum_evens_in(&self, at: Handle) -> i64 {
        let node = self.nodes.get(at);
        let own = if node.key() % 2 == 0 { i64::from(node.key()) } else { 0 };
        let left = node.left().map_or(0, |left| self.sum_evens_in(left));
        let right = node.right().map_or(0, |right| self.sum_evens_in(right));
        own + left + right
    }

    /// Calls `visit` on every node in the given depth-first order.
    pub(crate) fn walk<F>(&self, order: DepthFirst, visit: &mut F)
    where
        F: FnMut(&Node<V>),
    {
        if let Some(root) = self.root {
            self.walk_from(root, order, visit);
        }
    }

    fn walk_from<F>(&self, at: Handle, order: DepthFirst, visit: &mut F)
    where
        F: FnMut(&Node<V>),
    {
        let node = self.nodes.get(at);
        if order == DepthFirst::Preorder {
            visit(node);
        }
        if let Some(left) = node.left() {
            self.walk_from(left, order, visit);
        }
        if order == DepthFirst::Inorder {
            visit(node);
        }
        if let Some(right) = node.right() {
            self.walk_from(right, order, visit);
        }
        if order == DepthFirst::Postorder {
            visit(node);
        }
    }

    /// Calls `visit` on every node breadth-first, with the node's depth.
    pub(crate) fn walk_levels<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<V>, usize),
    {
        let mut queue: VecDeque<(Handle, usize)> = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 0));
        }
        while let Some((handle, depth)) = queue.pop_front() {
            let node = self.nodes.get(handle);
            visit(node, depth);
            if let Some(left) = node.left() {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right() {
                queue.push_back((right, depth + 1));
            }
        }
    }
}
