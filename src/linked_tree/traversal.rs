//! Printing the keys of a [`LinkedTree`] in each traversal order.
//!
//! Every key is written followed by a single space and the output ends with a
//! newline. Level order starts a new line for each level of the tree.

use core::fmt::{self, Write};

use super::LinkedTree;
use crate::raw::DepthFirst;

impl<V> LinkedTree<V> {
    fn write_depth_first<W: Write>(&self, order: DepthFirst, out: &mut W) -> fmt::Result {
        let mut result = Ok(());
        self.raw.walk(order, &mut |node| {
            if result.is_ok() {
                result = write!(out, "{} ", node.key());
            }
        });
        result?;
        out.write_char('\n')
    }

    /// Writes the keys in preorder (node, left, right).
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let mut tree = LinkedTree::new();
    /// tree.insert_keys(&[2, 1, 3]);
    ///
    /// let mut out = String::new();
    /// tree.write_preorder(&mut out).unwrap();
    /// assert_eq!(out, "2 1 3 \n");
    /// ```
    pub fn write_preorder<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_depth_first(DepthFirst::Preorder, out)
    }

    /// Writes the keys in ascending order.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_inorder<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_depth_first(DepthFirst::Inorder, out)
    }

    /// Writes the keys in postorder (left, right, node).
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_postorder<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_depth_first(DepthFirst::Postorder, out)
    }

    /// Writes the keys breadth-first, one line per level.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let mut tree = LinkedTree::new();
    /// tree.insert_keys(&[4, 1, 3, 6, 5, 2]);
    ///
    /// let mut out = String::new();
    /// tree.write_level_order(&mut out).unwrap();
    /// assert_eq!(out, "4 \n1 6 \n3 5 \n2 \n");
    /// ```
    pub fn write_level_order<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut result = Ok(());
        let mut level = 0;
        self.raw.walk_levels(|node, depth| {
            if result.is_err() {
                return;
            }
            if depth > level {
                level = depth;
                result = out.write_char('\n');
            }
            if result.is_ok() {
                result = write!(out, "{} ", node.key());
            }
        });
        result?;
        out.write_char('\n')
    }
}

#[cfg(feature = "std")]
impl<V> LinkedTree<V> {
    fn print_with<F>(&self, render: F) -> std::io::Result<()>
    where
        F: FnOnce(&Self, &mut alloc::string::String) -> fmt::Result,
    {
        use std::io::Write as _;

        let mut text = alloc::string::String::new();
        render(self, &mut text).map_err(std::io::Error::other)?;
        std::io::stdout().lock().write_all(text.as_bytes())
    }

    /// Prints [`write_preorder`](Self::write_preorder) output to standard output.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to standard output.
    pub fn preorder_print(&self) -> std::io::Result<()> {
        self.print_with(Self::write_preorder::<alloc::string::String>)
    }

    /// Prints [`write_inorder`](Self::write_inorder) output to standard output.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to standard output.
    pub fn inorder_print(&self) -> std::io::Result<()> {
        self.print_with(Self::write_inorder::<alloc::string::String>)
    }

    /// Prints [`write_postorder`](Self::write_postorder) output to standard output.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to standard output.
    pub fn postorder_print(&self) -> std::io::Result<()> {
        self.print_with(Self::write_postorder::<alloc::string::String>)
    }

    /// Prints [`write_level_order`](Self::write_level_order) output to standard output.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to standard output.
    pub fn level_order_print(&self) -> std::io::Result<()> {
        self.print_with(Self::write_level_order::<alloc::string::String>)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::String;

    use super::*;

    fn render(tree: &LinkedTree<String>, write: fn(&LinkedTree<String>, &mut String) -> fmt::Result) -> String {
        let mut out = String::new();
        write(tree, &mut out).unwrap();
        out
    }

    #[test]
    fn empty_tree_prints_bare_newline() {
        let tree = LinkedTree::new();
        assert_eq!(render(&tree, LinkedTree::write_preorder), "\n");
        assert_eq!(render(&tree, LinkedTree::write_inorder), "\n");
        assert_eq!(render(&tree, LinkedTree::write_postorder), "\n");
        assert_eq!(render(&tree, LinkedTree::write_level_order), "\n");
    }

    #[test]
    fn depth_first_orders() {
        let mut tree = LinkedTree::new();
        tree.insert_keys(&[37, 26, 42, 13, 35, 56, 30, 47, 70]);
        assert_eq!(render(&tree, LinkedTree::write_preorder), "37 26 13 35 30 42 56 47 70 \n");
        assert_eq!(render(&tree, LinkedTree::write_inorder), "13 26 30 35 37 42 47 56 70 \n");
        assert_eq!(render(&tree, LinkedTree::write_postorder), "13 30 35 26 47 70 56 42 37 \n");
    }

    #[test]
    fn level_order_breaks_lines_per_level() {
        let mut tree = LinkedTree::new();
        tree.insert_keys(&[37, 26, 42, 13, 35, 56, 30, 47, 70]);
        assert_eq!(render(&tree, LinkedTree::write_level_order), "37 \n26 42 \n13 35 56 \n30 47 70 \n");
    }

    struct Refuse;

    impl Write for Refuse {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn writer_errors_propagate() {
        let mut tree = LinkedTree::new();
        tree.insert_keys(&[2, 1, 3]);
        assert!(tree.write_preorder(&mut Refuse).is_err());
        assert!(tree.write_level_order(&mut Refuse).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn print_to_stdout() {
        let mut tree = LinkedTree::new();
        tree.insert_keys(&[2, 1, 3]);
        tree.preorder_print().unwrap();
        tree.inorder_print().unwrap();
        tree.postorder_print().unwrap();
        tree.level_order_print().unwrap();
    }
}
