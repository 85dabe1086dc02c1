//! A binary search tree with per-key value lists, parent links and stack-free
//! iterators.
//!
//! [`LinkedTree`] stores integer keys. Each distinct key owns one node, and
//! every payload inserted under that key is kept in the node's [`ValueList`],
//! newest first. Nodes also know their parent, which lets
//! [`PreorderIter`] and [`InorderIter`] step through the tree one key at a
//! time without recursion or a stack of their own.
//!
//! # Example
//!
//! ```
//! use linked_tree::LinkedTree;
//!
//! let mut tree = LinkedTree::new();
//! tree.insert_keys(&[37, 26, 42, 13, 35, 56, 30, 47, 70]);
//!
//! assert_eq!(tree.depth(13), Some(2));
//! assert_eq!(tree.sum_evens(), 26 + 42 + 56 + 30 + 70);
//!
//! // Keys come out of the inorder cursor sorted.
//! let keys: Vec<i32> = tree.inorder_iter().collect();
//! assert_eq!(keys, [13, 26, 30, 35, 37, 42, 47, 56, 70]);
//!
//! // Removing a node with two children pulls up its in-order successor.
//! tree.delete(37);
//! assert_eq!(tree.preorder_iter().next(), Some(42));
//! ```
//!
//! # Features
//!
//! - **`std`** (default) - adds the `*_print` methods that write to standard
//!   output. Without it the crate is `no_std` and only needs `alloc`; the
//!   `write_*` methods still format into any [`core::fmt::Write`].
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by index, so the parent
//! link is a plain index rather than an owning pointer. The tree is never
//! rebalanced: sequential inserts of sorted keys build a chain. Use
//! [`LinkedTree::from_parallel`] or [`FromIterator`] to build a balanced
//! tree from a batch.
//!
//! Mutations emit `tracing` events at `trace` level; no subscriber is
//! installed by this crate.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod raw;
mod values;

pub mod linked_tree;

pub use error::{Error, Result};
pub use linked_tree::{InorderIter, LinkedTree, PreorderIter};
pub use values::ValueList;
