//! This crate exposes an unbalanced, owning Binary Search Tree (BST) that
//! stores bare values and keeps every duplicate it is given.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariants this tree keeps are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value strictly less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Equal values are always
//!    routed right on insertion, which is where duplicates end up.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing, so inserting values in random order gives an expected height of
//! `O(lg N)` while inserting them in sorted order degrades it to `O(N)`. Every
//! operation walks the tree iteratively, so even a fully degenerate tree can be
//! built, traversed, and dropped without exhausting the call stack.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
//!
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&6));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! assert!(tree.remove(&5));
//! assert_eq!(tree.count(), 6);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
pub mod tree;
mod util;

pub use error::CapacityError;
pub use tree::Tree;
